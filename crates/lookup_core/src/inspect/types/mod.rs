use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::inspect::format::format_type_name;
use crate::inspect::{Fault, Value};

mod builder;
pub(crate) mod builtin;

pub use builder::TypeBuilder;

/// Reader bound to an instance, typically produced by [`Accessor::instance`].
pub type InstanceReader = Arc<dyn Fn(&dyn Any) -> Result<Value, Fault> + Send + Sync>;
/// Reader over the whole runtime value.
pub type ValueReader = Arc<dyn Fn(&Value) -> Result<Value, Fault> + Send + Sync>;
/// Reader that needs no instance.
pub type StaticReader = Arc<dyn Fn() -> Result<Value, Fault> + Send + Sync>;
/// Projection from an instance of a derived type to the part declared by its base type.
pub type Projection = Arc<dyn for<'a> Fn(&'a dyn Any) -> Option<&'a dyn Any> + Send + Sync>;

/// How a readable member produces its value.
#[derive(Clone)]
pub enum Accessor {
	/// Reads from the instance slice declared by the member's type.
	Instance(InstanceReader),
	/// Reads from the whole runtime value.
	Value(ValueReader),
	/// Reads without an instance.
	Static(StaticReader),
}

impl Accessor {
	/// Typed instance reader; fails when the target is not a `T`.
	pub fn instance<T, F>(read: F) -> Self
	where
		T: Any,
		F: Fn(&T) -> Result<Value, Fault> + Send + Sync + 'static,
	{
		Self::Instance(Arc::new(move |target: &dyn Any| match target.downcast_ref::<T>() {
			Some(target) => read(target),
			None => Err(Fault::invalid_operation(format!("Object does not match target type {}", std::any::type_name::<T>()))),
		}))
	}

	/// Reader over the whole runtime value.
	pub fn value<F>(read: F) -> Self
	where
		F: Fn(&Value) -> Result<Value, Fault> + Send + Sync + 'static,
	{
		Self::Value(Arc::new(read))
	}

	/// Reader that needs no instance.
	pub fn static_fn<F>(read: F) -> Self
	where
		F: Fn() -> Result<Value, Fault> + Send + Sync + 'static,
	{
		Self::Static(Arc::new(read))
	}

	pub(crate) fn read(&self, input: &Value, target: Option<&dyn Any>) -> Result<Value, Fault> {
		match self {
			Self::Static(read) => read(),
			Self::Value(read) => read(input),
			Self::Instance(read) => match target {
				Some(target) => read(target),
				None => Err(Fault::invalid_operation("Non-static member requires a target")),
			},
		}
	}
}

impl fmt::Debug for Accessor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Instance(_) => f.write_str("Accessor::Instance"),
			Self::Value(_) => f.write_str("Accessor::Value"),
			Self::Static(_) => f.write_str("Accessor::Static"),
		}
	}
}

/// One declared parameter of a member.
#[derive(Debug, Clone)]
pub struct ParameterInfo {
	/// Parameter name.
	pub name: Arc<str>,
	/// Declared parameter type.
	pub parameter_type: Arc<TypeInfo>,
	/// Passed by reference.
	pub by_ref: bool,
}

impl ParameterInfo {
	/// By-value parameter.
	pub fn new(name: impl Into<Arc<str>>, parameter_type: Arc<TypeInfo>) -> Self {
		Self {
			name: name.into(),
			parameter_type,
			by_ref: false,
		}
	}

	/// By-reference parameter.
	pub fn by_ref(name: impl Into<Arc<str>>, parameter_type: Arc<TypeInfo>) -> Self {
		Self {
			name: name.into(),
			parameter_type,
			by_ref: true,
		}
	}
}

/// Member shape.
#[derive(Debug, Clone)]
pub enum MemberKind {
	/// Stored value.
	Field {
		/// Field reader.
		getter: Accessor,
	},
	/// Computed value, possibly write-only or indexed.
	Property {
		/// Getter; `None` for write-only properties.
		getter: Option<Accessor>,
		/// Index parameters.
		parameters: Vec<ParameterInfo>,
	},
	/// Callable member.
	Method {
		/// Zero-argument invoker; parameterized methods carry none.
		invoker: Option<Accessor>,
		/// Declared parameters.
		parameters: Vec<ParameterInfo>,
		/// Method returns no value.
		returns_void: bool,
	},
	/// Event with its handler type.
	Event {
		/// Handler delegate type.
		handler_type: Arc<TypeInfo>,
	},
}

/// One declared member of a type.
#[derive(Debug, Clone)]
pub struct MemberInfo {
	/// Member name.
	pub name: Arc<str>,
	/// Member shape.
	pub kind: MemberKind,
	/// Declared without an instance.
	pub is_static: bool,
	/// Not publicly visible.
	pub is_private: bool,
	/// Compiler-synthesized member, such as a property accessor surfaced as a method.
	pub is_special: bool,
	/// Restricted inherited member that faults on access.
	pub is_restricted: bool,
}

impl MemberInfo {
	/// Public instance member of the given shape.
	pub fn new(name: impl Into<Arc<str>>, kind: MemberKind) -> Self {
		Self {
			name: name.into(),
			kind,
			is_static: false,
			is_private: false,
			is_special: false,
			is_restricted: false,
		}
	}

	/// Mark as private.
	pub fn private(mut self) -> Self {
		self.is_private = true;
		self
	}

	/// Mark as static.
	pub fn static_member(mut self) -> Self {
		self.is_static = true;
		self
	}

	/// Mark as compiler-synthesized.
	pub fn special(mut self) -> Self {
		self.is_special = true;
		self
	}

	/// Mark as access-restricted.
	pub fn restricted(mut self) -> Self {
		self.is_restricted = true;
		self
	}

	/// Declared parameters; empty for fields and events.
	pub fn parameters(&self) -> &[ParameterInfo] {
		match &self.kind {
			MemberKind::Property { parameters, .. } | MemberKind::Method { parameters, .. } => parameters,
			MemberKind::Field { .. } | MemberKind::Event { .. } => &[],
		}
	}
}

/// Runtime type metadata: identity, generic arguments, base type, and declared members.
pub struct TypeInfo {
	pub(crate) name: Arc<str>,
	pub(crate) namespace: Option<Arc<str>>,
	pub(crate) generic_args: Vec<Arc<TypeInfo>>,
	pub(crate) base: Option<Arc<TypeInfo>>,
	pub(crate) upcast: Option<Projection>,
	pub(crate) members: Vec<MemberInfo>,
	pub(crate) is_root: bool,
}

impl TypeInfo {
	/// Start describing the type `T` under `name`.
	pub fn builder<T: Any>(name: impl Into<Arc<str>>) -> TypeBuilder<T> {
		TypeBuilder::new(name)
	}

	/// The root type every other type derives from.
	pub fn root() -> Arc<TypeInfo> {
		builtin::object()
	}

	/// Simple name without generic arguments.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declaring namespace, if any.
	pub fn namespace(&self) -> Option<&str> {
		self.namespace.as_deref()
	}

	/// Generic arguments in declaration order.
	pub fn generic_args(&self) -> &[Arc<TypeInfo>] {
		&self.generic_args
	}

	/// Whether the type carries generic arguments.
	pub fn is_generic(&self) -> bool {
		!self.generic_args.is_empty()
	}

	/// Direct base type.
	pub fn base(&self) -> Option<&Arc<TypeInfo>> {
		self.base.as_ref()
	}

	/// Whether this is the root of every hierarchy.
	pub fn is_root(&self) -> bool {
		self.is_root
	}

	/// Members declared on this level only, in declaration order.
	pub fn members(&self) -> &[MemberInfo] {
		&self.members
	}

	/// Namespace-qualified formatted name.
	pub fn full_name(&self) -> String {
		match &self.namespace {
			Some(namespace) => format!("{namespace}::{}", format_type_name(self)),
			None => format_type_name(self),
		}
	}

	/// This type followed by each base type, most-derived first.
	pub fn hierarchy(self: &Arc<Self>) -> Vec<Arc<TypeInfo>> {
		let mut out = vec![Arc::clone(self)];
		let mut current = self.base.clone();
		while let Some(level) = current {
			current = level.base.clone();
			out.push(level);
		}
		out
	}

	/// Map an instance of this type to the slice declared by its base type.
	///
	/// Types without a projection hand the same target to their base.
	pub fn upcast<'a>(&self, target: &'a dyn Any) -> Option<&'a dyn Any> {
		match &self.upcast {
			Some(project) => project(target),
			None => Some(target),
		}
	}
}

impl fmt::Debug for TypeInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeInfo")
			.field("name", &self.full_name())
			.field("base", &self.base.as_ref().map(|base| base.full_name()))
			.field("members", &self.members.len())
			.finish()
	}
}
