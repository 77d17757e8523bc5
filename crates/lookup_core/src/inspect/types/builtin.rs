use std::sync::{Arc, LazyLock};

use crate::inspect::types::{Accessor, MemberInfo, MemberKind, TypeBuilder, TypeInfo};
use crate::inspect::{Fault, FaultKind, Value};

const CORE: &str = "core";

static OBJECT: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| {
	Arc::new(TypeInfo {
		name: Arc::from("Object"),
		namespace: Some(Arc::from(CORE)),
		generic_args: Vec::new(),
		base: None,
		upcast: None,
		members: vec![
			value_method("to_string", |value| Ok(Value::from(value.display_text()))),
			value_method("type_info", |value| Ok(Value::Type(value.type_info()))),
		],
		is_root: true,
	})
});

static NULL: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| primitive("Null"));
static BOOL: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| primitive("bool"));
static INT: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| primitive("i64"));
static UINT: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| primitive("u64"));
static FLOAT: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| primitive("f64"));
static CHAR: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| primitive("char"));
static STRING: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| primitive("String"));
static VALUE: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| primitive("Value"));
static TYPE: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| primitive("TypeInfo"));

static LIST: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| {
	TypeBuilder::<()>::new("List")
		.namespace(CORE)
		.generic_arg(VALUE.clone())
		.member(value_property("len", |value| match value {
			Value::List(items) => Ok(Value::from(items.len())),
			_ => Err(Fault::invalid_operation("Value is not a list")),
		}))
		.build()
});

static VARIANTS: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| {
	TypeBuilder::<()>::new("Variants")
		.namespace(CORE)
		.member(value_property("len", |value| match value {
			Value::Variants(items) => Ok(Value::from(items.len())),
			_ => Err(Fault::invalid_operation("Value is not a variants collection")),
		}))
		.build()
});

static FAULT: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| {
	TypeBuilder::<()>::new("Fault")
		.namespace(CORE)
		.member(value_property("message", |value| match value {
			Value::Fault(fault) => Ok(Value::String(fault.message.clone())),
			_ => Err(Fault::invalid_operation("Value is not a fault")),
		}))
		.member(value_property("inner", |value| match value {
			Value::Fault(fault) => Ok(fault.inner.as_deref().cloned().map(Value::from).unwrap_or_default()),
			_ => Err(Fault::invalid_operation("Value is not a fault")),
		}))
		.build()
});

static FAULT_KINDS: LazyLock<[Arc<TypeInfo>; 6]> = LazyLock::new(|| {
	[
		FaultKind::Evaluation,
		FaultKind::Invocation,
		FaultKind::InvalidOperation,
		FaultKind::NotSupported,
		FaultKind::Disabled,
		FaultKind::Panic,
	]
	.map(|kind| TypeBuilder::<()>::new(kind.type_name()).namespace(CORE).extends(FAULT.clone()).build())
});

pub(crate) fn object() -> Arc<TypeInfo> {
	OBJECT.clone()
}

pub(crate) fn null() -> Arc<TypeInfo> {
	NULL.clone()
}

pub(crate) fn boolean() -> Arc<TypeInfo> {
	BOOL.clone()
}

pub(crate) fn int() -> Arc<TypeInfo> {
	INT.clone()
}

pub(crate) fn uint() -> Arc<TypeInfo> {
	UINT.clone()
}

pub(crate) fn float() -> Arc<TypeInfo> {
	FLOAT.clone()
}

pub(crate) fn character() -> Arc<TypeInfo> {
	CHAR.clone()
}

pub(crate) fn string() -> Arc<TypeInfo> {
	STRING.clone()
}

pub(crate) fn list() -> Arc<TypeInfo> {
	LIST.clone()
}

pub(crate) fn type_info() -> Arc<TypeInfo> {
	TYPE.clone()
}

pub(crate) fn variants() -> Arc<TypeInfo> {
	VARIANTS.clone()
}

pub(crate) fn fault(kind: FaultKind) -> Arc<TypeInfo> {
	let index = match kind {
		FaultKind::Evaluation => 0,
		FaultKind::Invocation => 1,
		FaultKind::InvalidOperation => 2,
		FaultKind::NotSupported => 3,
		FaultKind::Disabled => 4,
		FaultKind::Panic => 5,
	};
	FAULT_KINDS[index].clone()
}

fn primitive(name: &str) -> Arc<TypeInfo> {
	TypeBuilder::<()>::new(name).namespace(CORE).build()
}

fn value_method(name: &str, read: fn(&Value) -> Result<Value, Fault>) -> MemberInfo {
	MemberInfo::new(
		name,
		MemberKind::Method {
			invoker: Some(Accessor::value(read)),
			parameters: Vec::new(),
			returns_void: false,
		},
	)
}

fn value_property(name: &str, read: fn(&Value) -> Result<Value, Fault>) -> MemberInfo {
	MemberInfo::new(
		name,
		MemberKind::Property {
			getter: Some(Accessor::value(read)),
			parameters: Vec::new(),
		},
	)
}
