use std::sync::Arc;

use crate::inspect::{Fault, Value};

/// One evaluated candidate for a member, with an optional description.
#[derive(Debug, Clone, Default)]
pub struct Variant {
	value: Value,
	description: Option<Arc<str>>,
}

impl Variant {
	/// Variant without a description.
	pub fn new(value: impl Into<Value>) -> Self {
		Self {
			value: value.into(),
			description: None,
		}
	}

	/// Variant with a description of its evaluation context.
	pub fn described(value: impl Into<Value>, description: impl Into<Arc<str>>) -> Self {
		Self {
			value: value.into(),
			description: Some(description.into()),
		}
	}

	/// Variant marking a member a descriptor chose not to evaluate.
	pub fn disabled() -> Self {
		Self::new(Fault::disabled())
	}

	/// Evaluated value.
	pub fn value(&self) -> &Value {
		&self.value
	}

	/// Evaluation context description.
	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	/// Split into value and description.
	pub fn into_parts(self) -> (Value, Option<Arc<str>>) {
		(self.value, self.description)
	}
}

/// Growable set of evaluated candidates for one member.
///
/// Null values and empty containers are never stored. A collection holding
/// exactly one item collapses to that item when consumed.
#[derive(Debug, Clone, Default)]
pub struct Variants {
	items: Vec<Arc<Variant>>,
}

impl Variants {
	/// Collection with room for `capacity` items.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			items: Vec::with_capacity(capacity),
		}
	}

	/// Collection for a member with no solutions.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Add a value; null values and empty containers are ignored.
	pub fn add(&mut self, value: impl Into<Value>) -> &mut Self {
		self.push(Variant::new(value))
	}

	/// Add a described value; null values and empty containers are ignored.
	pub fn add_described(&mut self, value: impl Into<Value>, description: impl Into<Arc<str>>) -> &mut Self {
		self.push(Variant::described(value, description))
	}

	fn push(&mut self, variant: Variant) -> &mut Self {
		if variant.value.is_null() || variant.value.is_empty_container() {
			return self;
		}
		self.items.push(Arc::new(variant));
		self
	}

	/// Number of stored items.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether nothing was stored.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Stored items in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &Arc<Variant>> {
		self.items.iter()
	}

	/// Aggregate value: the single item's value, otherwise the collection itself.
	pub fn value(&self) -> Value {
		match self.items.as_slice() {
			[single] => single.value.clone(),
			_ => Value::Variants(Arc::new(self.clone())),
		}
	}

	/// Aggregate description: the single item's description, otherwise none.
	pub fn description(&self) -> Option<&str> {
		match self.items.as_slice() {
			[single] => single.description(),
			_ => None,
		}
	}

	/// Finish the collection, collapsing a single item to a [`Value::Variant`].
	pub fn consume(mut self) -> Value {
		if self.items.len() == 1 {
			if let Some(single) = self.items.pop() {
				return Value::Variant(single);
			}
		}
		Value::Variants(Arc::new(self))
	}
}

#[cfg(test)]
mod tests;
