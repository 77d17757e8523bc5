use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::inspect::format::format_type_name;
use crate::inspect::types::builtin;
use crate::inspect::{Fault, TypeInfo, Variant, Variants};

/// A runtime object the engine can reflect over.
pub trait Object: Send + Sync + fmt::Debug {
	/// Runtime type of this object.
	fn type_info(&self) -> Arc<TypeInfo>;

	/// Concrete object for typed member readers.
	fn as_any(&self) -> &dyn Any;

	/// Display name, when the object has a natural one.
	fn name(&self) -> Option<Arc<str>> {
		None
	}

	/// Element count for collection-like objects.
	fn count(&self) -> Option<usize> {
		None
	}

	/// Element sequence for iterable objects.
	fn iterate(&self) -> Option<Box<dyn Iterator<Item = Value> + '_>> {
		None
	}
}

/// Dynamically typed runtime value.
#[derive(Debug, Clone, Default)]
pub enum Value {
	/// Absent value.
	#[default]
	Null,
	/// Boolean.
	Bool(bool),
	/// Signed integer.
	Int(i64),
	/// Unsigned integer.
	UInt(u64),
	/// Floating-point number.
	Float(f64),
	/// Single character.
	Char(char),
	/// Text.
	String(Arc<str>),
	/// Ordered sequence of values.
	List(Arc<[Value]>),
	/// A type itself; decomposes to its static members.
	Type(Arc<TypeInfo>),
	/// Captured evaluation failure or sentinel.
	Fault(Arc<Fault>),
	/// Evaluated value carrying a description.
	Variant(Arc<Variant>),
	/// Several evaluated candidates for one member.
	Variants(Arc<Variants>),
	/// Reflected object.
	Object(Arc<dyn Object>),
}

impl Value {
	/// Wrap a reflected object.
	pub fn object(object: impl Object + 'static) -> Self {
		Self::Object(Arc::new(object))
	}

	/// Build a list from anything convertible into values.
	pub fn list<I, T>(items: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<Value>,
	{
		Self::List(items.into_iter().map(Into::into).collect())
	}

	/// Whether the value is [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Whether the value is a collection with no elements.
	pub fn is_empty_container(&self) -> bool {
		match self {
			Self::List(items) => items.is_empty(),
			Self::Variants(items) => items.is_empty(),
			Self::Object(object) => object.count() == Some(0),
			_ => false,
		}
	}

	/// Runtime type of the value.
	pub fn type_info(&self) -> Arc<TypeInfo> {
		match self {
			Self::Null => builtin::null(),
			Self::Bool(_) => builtin::boolean(),
			Self::Int(_) => builtin::int(),
			Self::UInt(_) => builtin::uint(),
			Self::Float(_) => builtin::float(),
			Self::Char(_) => builtin::character(),
			Self::String(_) => builtin::string(),
			Self::List(_) => builtin::list(),
			Self::Type(_) => builtin::type_info(),
			Self::Fault(fault) => builtin::fault(fault.kind),
			Self::Variant(variant) => variant.value().type_info(),
			Self::Variants(_) => builtin::variants(),
			Self::Object(object) => object.type_info(),
		}
	}

	/// Element sequence, if the value is iterable.
	pub fn iterate(&self) -> Option<Box<dyn Iterator<Item = Value> + '_>> {
		match self {
			Self::List(items) => Some(Box::new(items.iter().cloned())),
			Self::Variants(items) => Some(Box::new(items.iter().map(|item| Value::Variant(Arc::clone(item))))),
			Self::Object(object) => object.iterate(),
			_ => None,
		}
	}

	/// Concrete object behind [`Value::Object`].
	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		match self {
			Self::Object(object) => object.as_any().downcast_ref::<T>(),
			_ => None,
		}
	}

	/// Short human-readable rendering.
	pub fn display_text(&self) -> String {
		match self {
			Self::Null => "null".to_owned(),
			Self::Bool(value) => value.to_string(),
			Self::Int(value) => value.to_string(),
			Self::UInt(value) => value.to_string(),
			Self::Float(value) => value.to_string(),
			Self::Char(value) => value.to_string(),
			Self::String(value) => value.to_string(),
			Self::List(items) => format!("List ({})", items.len()),
			Self::Type(ty) => format_type_name(ty),
			Self::Fault(fault) => fault.display_message().to_owned(),
			Self::Variant(variant) => variant.value().display_text(),
			Self::Variants(items) => format!("Variants ({})", items.len()),
			Self::Object(object) => match object.name() {
				Some(name) => name.to_string(),
				None => format_type_name(&object.type_info()),
			},
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Self::UInt(u64::from(value))
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Self::UInt(value)
	}
}

impl From<usize> for Value {
	fn from(value: usize) -> Self {
		Self::UInt(value as u64)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Self::Float(f64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<char> for Value {
	fn from(value: char) -> Self {
		Self::Char(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(Arc::from(value))
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(Arc::from(value))
	}
}

impl From<Arc<str>> for Value {
	fn from(value: Arc<str>) -> Self {
		Self::String(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::List(Arc::from(value))
	}
}

impl From<Arc<TypeInfo>> for Value {
	fn from(value: Arc<TypeInfo>) -> Self {
		Self::Type(value)
	}
}

impl From<Fault> for Value {
	fn from(value: Fault) -> Self {
		Self::Fault(Arc::new(value))
	}
}

impl From<Variant> for Value {
	fn from(value: Variant) -> Self {
		Self::Variant(Arc::new(value))
	}
}

impl From<Variants> for Value {
	fn from(value: Variants) -> Self {
		value.consume()
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or_default()
	}
}
