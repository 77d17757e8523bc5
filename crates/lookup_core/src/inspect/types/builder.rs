use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::inspect::types::{Accessor, MemberInfo, MemberKind, ParameterInfo, Projection, TypeInfo, builtin};
use crate::inspect::{Fault, Value};

/// Incremental description of the members declared by `T`.
///
/// Members keep the order they are declared in.
pub struct TypeBuilder<T> {
	name: Arc<str>,
	namespace: Option<Arc<str>>,
	generic_args: Vec<Arc<TypeInfo>>,
	base: Option<Arc<TypeInfo>>,
	upcast: Option<Projection>,
	members: Vec<MemberInfo>,
	_marker: PhantomData<fn(&T)>,
}

impl<T: Any> TypeBuilder<T> {
	/// Start a builder for a type named `name`.
	pub fn new(name: impl Into<Arc<str>>) -> Self {
		Self {
			name: name.into(),
			namespace: None,
			generic_args: Vec::new(),
			base: None,
			upcast: None,
			members: Vec::new(),
			_marker: PhantomData,
		}
	}

	/// Declaring namespace.
	pub fn namespace(mut self, namespace: impl Into<Arc<str>>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}

	/// Append one generic argument.
	pub fn generic_arg(mut self, arg: Arc<TypeInfo>) -> Self {
		self.generic_args.push(arg);
		self
	}

	/// Derive from `base`, handing the same instance to base members.
	pub fn extends(mut self, base: Arc<TypeInfo>) -> Self {
		self.base = Some(base);
		self.upcast = None;
		self
	}

	/// Derive from `base`, handing base members the slice selected by `project`.
	pub fn extends_via<B, F>(mut self, base: Arc<TypeInfo>, project: F) -> Self
	where
		B: Any,
		F: Fn(&T) -> &B + Send + Sync + 'static,
	{
		self.base = Some(base);
		self.upcast = Some(Arc::new(projection(move |target| {
			target.downcast_ref::<T>().map(|value| project(value) as &dyn Any)
		})));
		self
	}

	/// Instance field.
	pub fn field<F>(self, name: impl Into<Arc<str>>, read: F) -> Self
	where
		F: Fn(&T) -> Result<Value, Fault> + Send + Sync + 'static,
	{
		let getter = Accessor::instance(read);
		self.member(MemberInfo::new(name, MemberKind::Field { getter }))
	}

	/// Readable instance property.
	pub fn property<F>(self, name: impl Into<Arc<str>>, read: F) -> Self
	where
		F: Fn(&T) -> Result<Value, Fault> + Send + Sync + 'static,
	{
		let getter = Some(Accessor::instance(read));
		self.member(MemberInfo::new(name, MemberKind::Property { getter, parameters: Vec::new() }))
	}

	/// Property without a getter.
	pub fn write_only_property(self, name: impl Into<Arc<str>>) -> Self {
		self.member(MemberInfo::new(
			name,
			MemberKind::Property {
				getter: None,
				parameters: Vec::new(),
			},
		))
	}

	/// Indexed property with a getter; only a resolver can supply its arguments.
	pub fn indexer<F>(self, name: impl Into<Arc<str>>, parameters: Vec<ParameterInfo>, read: F) -> Self
	where
		F: Fn(&T) -> Result<Value, Fault> + Send + Sync + 'static,
	{
		let getter = Some(Accessor::instance(read));
		self.member(MemberInfo::new(name, MemberKind::Property { getter, parameters }))
	}

	/// Indexed property without a getter.
	pub fn write_only_indexer(self, name: impl Into<Arc<str>>, parameters: Vec<ParameterInfo>) -> Self {
		self.member(MemberInfo::new(name, MemberKind::Property { getter: None, parameters }))
	}

	/// Zero-argument value-returning method.
	pub fn method<F>(self, name: impl Into<Arc<str>>, invoke: F) -> Self
	where
		F: Fn(&T) -> Result<Value, Fault> + Send + Sync + 'static,
	{
		self.member(MemberInfo::new(
			name,
			MemberKind::Method {
				invoker: Some(Accessor::instance(invoke)),
				parameters: Vec::new(),
				returns_void: false,
			},
		))
	}

	/// Method returning no value.
	pub fn void_method(self, name: impl Into<Arc<str>>) -> Self {
		self.member(MemberInfo::new(
			name,
			MemberKind::Method {
				invoker: None,
				parameters: Vec::new(),
				returns_void: true,
			},
		))
	}

	/// Value-returning method with parameters; only a resolver can evaluate it.
	pub fn method_with(self, name: impl Into<Arc<str>>, parameters: Vec<ParameterInfo>) -> Self {
		self.member(MemberInfo::new(
			name,
			MemberKind::Method {
				invoker: None,
				parameters,
				returns_void: false,
			},
		))
	}

	/// Event carrying handlers of `handler_type`.
	pub fn event(self, name: impl Into<Arc<str>>, handler_type: Arc<TypeInfo>) -> Self {
		self.member(MemberInfo::new(name, MemberKind::Event { handler_type }))
	}

	/// Static field.
	pub fn static_field<F>(self, name: impl Into<Arc<str>>, read: F) -> Self
	where
		F: Fn() -> Result<Value, Fault> + Send + Sync + 'static,
	{
		let getter = Accessor::static_fn(read);
		self.member(MemberInfo::new(name, MemberKind::Field { getter }).static_member())
	}

	/// Static readable property.
	pub fn static_property<F>(self, name: impl Into<Arc<str>>, read: F) -> Self
	where
		F: Fn() -> Result<Value, Fault> + Send + Sync + 'static,
	{
		let getter = Some(Accessor::static_fn(read));
		self.member(MemberInfo::new(name, MemberKind::Property { getter, parameters: Vec::new() }).static_member())
	}

	/// Static zero-argument method.
	pub fn static_method<F>(self, name: impl Into<Arc<str>>, invoke: F) -> Self
	where
		F: Fn() -> Result<Value, Fault> + Send + Sync + 'static,
	{
		self.member(
			MemberInfo::new(
				name,
				MemberKind::Method {
					invoker: Some(Accessor::static_fn(invoke)),
					parameters: Vec::new(),
					returns_void: false,
				},
			)
			.static_member(),
		)
	}

	/// Append a fully described member.
	pub fn member(mut self, member: MemberInfo) -> Self {
		self.members.push(member);
		self
	}

	/// Finish the type; types without an explicit base derive from the root type.
	pub fn build(self) -> Arc<TypeInfo> {
		Arc::new(TypeInfo {
			name: self.name,
			namespace: self.namespace,
			generic_args: self.generic_args,
			base: Some(self.base.unwrap_or_else(builtin::object)),
			upcast: self.upcast,
			members: self.members,
			is_root: false,
		})
	}
}

fn projection<F>(project: F) -> F
where
	F: for<'a> Fn(&'a dyn Any) -> Option<&'a dyn Any> + Send + Sync + 'static,
{
	project
}
