use std::sync::Arc;

use bitflags::bitflags;
use serde::Serialize;

use crate::inspect::{Descriptor, Value};

bitflags! {
	/// Kind and visibility of a decomposed member.
	///
	/// Kind bits are mutually exclusive; visibility bits combine freely.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
	pub struct MemberAttributes: u32 {
		/// Not publicly visible.
		const PRIVATE = 0b1;
		/// Declared without an instance.
		const STATIC = 0b10;
		/// Stored value.
		const FIELD = 0b100;
		/// Computed value.
		const PROPERTY = 0b1000;
		/// Callable member.
		const METHOD = 0b1_0000;
		/// Synthetic member contributed by a descriptor.
		const EXTENSION = 0b10_0000;
		/// Event.
		const EVENT = 0b100_0000;
	}
}

/// Root node of a decomposition.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct DecomposedObject<C = ()> {
	/// Descriptor name of the object.
	pub name: Arc<str>,
	/// Decomposed value.
	#[serde(skip)]
	pub raw_value: Value,
	/// Formatted runtime type name.
	pub type_name: String,
	/// Namespace-qualified runtime type name.
	pub type_full_name: String,
	/// Descriptor description.
	pub description: Option<Arc<str>>,
	/// Descriptor of the object for further decomposition.
	#[serde(skip)]
	pub descriptor: Option<Arc<Descriptor<C>>>,
	/// Members, most-derived type first.
	pub members: Vec<DecomposedMember<C>>,
}

impl<C> DecomposedObject<C> {
	/// Canonical decomposition of an absent value.
	pub fn nothing() -> Self {
		Self {
			name: Arc::from("null"),
			raw_value: Value::Null,
			type_name: "Null".to_owned(),
			type_full_name: "core::Null".to_owned(),
			description: None,
			descriptor: None,
			members: Vec::new(),
		}
	}

	/// Member with the given name.
	pub fn member(&self, name: &str) -> Option<&DecomposedMember<C>> {
		self.members.iter().find(|member| member.name == name)
	}
}

/// One named member of a decomposed object.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct DecomposedMember<C = ()> {
	/// Member name, parameter-qualified when it takes arguments.
	pub name: String,
	/// Hierarchy depth of the declaring type; the root base type is 1.
	pub depth: usize,
	/// Formatted name of the declaring type.
	pub declaring_type_name: String,
	/// Namespace-qualified name of the declaring type.
	pub declaring_type_full_name: String,
	/// Kind and visibility.
	pub attributes: MemberAttributes,
	/// Evaluation time in milliseconds.
	pub computation_time: f64,
	/// Bytes allocated during evaluation.
	pub allocated_bytes: u64,
	/// Evaluated value.
	pub value: DecomposedValue<C>,
}

/// Evaluated payload of a member.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct DecomposedValue<C = ()> {
	/// Evaluated value after redirection.
	#[serde(skip)]
	pub raw_value: Value,
	/// Descriptor name of the value.
	pub name: Arc<str>,
	/// Formatted runtime type name.
	pub type_name: String,
	/// Namespace-qualified runtime type name.
	pub type_full_name: String,
	/// Most specific description found.
	pub description: Option<Arc<str>>,
	/// Descriptor of the value for further decomposition.
	#[serde(skip)]
	pub descriptor: Option<Arc<Descriptor<C>>>,
}

impl<C> DecomposedValue<C> {
	/// Value node for an absent value.
	pub fn nothing(description: Option<Arc<str>>) -> Self {
		Self {
			raw_value: Value::Null,
			name: Arc::from("null"),
			type_name: "Null".to_owned(),
			type_full_name: "core::Null".to_owned(),
			description,
			descriptor: None,
		}
	}
}
