//! Sample reflected object model.

use std::any::Any;
use std::sync::{Arc, LazyLock};

use lookup::inspect::{Accessor, Fault, MemberInfo, MemberKind, Object, ParameterInfo, TypeInfo, Value};

const NAMESPACE: &str = "model";

static ELEMENT: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| {
	TypeInfo::builder::<Element>("Element")
		.namespace(NAMESPACE)
		.property("id", |element| Ok(Value::from(element.id)))
		.property("name", |element| Ok(Value::from(element.name.as_str())))
		.property("location", |_| Err(Fault::evaluation("Element has no location")))
		.method("regenerate", |_| Ok(Value::from(true)))
		.method_with("move_by", vec![ParameterInfo::new("offset", primitive(Value::Float(0.0)))])
		.void_method("dispose")
		.event("changed", generic("EventHandler", vec![plain("ChangedArgs")]))
		.member(
			MemberInfo::new(
				"get_name",
				MemberKind::Method {
					invoker: Some(Accessor::instance::<Element, _>(|element| Ok(Value::from(element.name.as_str())))),
					parameters: Vec::new(),
					returns_void: false,
				},
			)
			.special(),
		)
		.member(
			MemberInfo::new(
				"owner_handle",
				MemberKind::Property {
					getter: Some(Accessor::instance::<Element, _>(|_| panic!("restricted member accessed"))),
					parameters: Vec::new(),
				},
			)
			.restricted(),
		)
		.build()
});

static WALL: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| {
	TypeInfo::builder::<Wall>("Wall")
		.namespace(NAMESPACE)
		.extends_via(ELEMENT.clone(), |wall: &Wall| &wall.element)
		.field("height", |wall| Ok(Value::from(wall.height)))
		.member(
			MemberInfo::new(
				"secret",
				MemberKind::Field {
					getter: Accessor::instance::<Wall, _>(|wall| Ok(Value::from(wall.secret))),
				},
			)
			.private(),
		)
		.property("width", |wall| Ok(Value::from(wall.width)))
		.write_only_property("comment")
		.indexer("parameter", vec![ParameterInfo::new("name", primitive(Value::from("")))], |_| Ok(Value::Null))
		.indexer("cell", vec![ParameterInfo::new("row", primitive(Value::Int(0)))], |_| Ok(Value::Null))
		.write_only_indexer("tag", vec![ParameterInfo::new("key", primitive(Value::from("")))])
		.method_with(
			"get_material",
			vec![
				ParameterInfo::new("layer", primitive(Value::Int(0))),
				ParameterInfo::by_ref("found", primitive(Value::Bool(false))),
			],
		)
		.static_property("category", || Ok(Value::from("Walls")))
		.build()
});

static LINK: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| TypeInfo::builder::<Link>("Link").namespace(NAMESPACE).build());

static HOST: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| {
	TypeInfo::builder::<Host>("Host")
		.namespace(NAMESPACE)
		.property("primary", |host| Ok(host.primary.clone()))
		.property("annotated", |host| Ok(host.annotated.clone()))
		.build()
});

static ASSEMBLY: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| {
	TypeInfo::builder::<Assembly>("Assembly")
		.namespace(NAMESPACE)
		.property("count", |assembly| Ok(Value::from(assembly.parts.len())))
		.build()
});

static SCHEDULE: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| {
	TypeInfo::builder::<Schedule>("Schedule")
		.namespace(NAMESPACE)
		.property("title", |schedule| Ok(Value::from(schedule.title.as_str())))
		.build()
});

static BUNDLE: LazyLock<Arc<TypeInfo>> = LazyLock::new(|| {
	let pair = generic("Pair", vec![primitive(Value::Int(0)), primitive(Value::from(""))]);
	TypeInfo::builder::<Bundle>("Bundle")
		.namespace(NAMESPACE)
		.generic_arg(pair)
		.property("size", |bundle| Ok(Value::from(bundle.size)))
		.build()
});

/// Runtime type of [`Element`].
pub fn element_type() -> Arc<TypeInfo> {
	ELEMENT.clone()
}

/// Runtime type of [`Wall`].
pub fn wall_type() -> Arc<TypeInfo> {
	WALL.clone()
}

/// Runtime type of a primitive sample value.
pub fn primitive(value: Value) -> Arc<TypeInfo> {
	value.type_info()
}

/// Memberless type in the model namespace.
pub fn plain(name: &str) -> Arc<TypeInfo> {
	TypeInfo::builder::<()>(name).namespace(NAMESPACE).build()
}

/// Memberless generic type in the model namespace.
pub fn generic(name: &str, args: Vec<Arc<TypeInfo>>) -> Arc<TypeInfo> {
	args.into_iter()
		.fold(TypeInfo::builder::<()>(name).namespace(NAMESPACE), |builder, arg| builder.generic_arg(arg))
		.build()
}

/// Base element.
#[derive(Debug, Clone)]
pub struct Element {
	/// Element id.
	pub id: i64,
	/// Element name.
	pub name: String,
}

impl Element {
	/// Element with the given id and name.
	pub fn new(id: i64, name: &str) -> Self {
		Self { id, name: name.to_owned() }
	}
}

impl Object for Element {
	fn type_info(&self) -> Arc<TypeInfo> {
		ELEMENT.clone()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn name(&self) -> Option<Arc<str>> {
		Some(Arc::from(self.name.as_str()))
	}
}

/// Wall deriving from [`Element`].
#[derive(Debug, Clone)]
pub struct Wall {
	/// Base element slice.
	pub element: Element,
	/// Wall height.
	pub height: f64,
	/// Wall width.
	pub width: f64,
	/// Private field.
	pub secret: i64,
}

impl Wall {
	/// Sample wall.
	pub fn sample() -> Self {
		Self {
			element: Element::new(316, "Basic Wall"),
			height: 3.0,
			width: 0.25,
			secret: 7,
		}
	}
}

impl Object for Wall {
	fn type_info(&self) -> Arc<TypeInfo> {
		WALL.clone()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn name(&self) -> Option<Arc<str>> {
		Some(Arc::from(self.element.name.as_str()))
	}
}

/// Indirection that redirects to `target`.
#[derive(Debug, Clone)]
pub struct Link {
	/// Value the link points at.
	pub target: Value,
	/// Description contributed by this link.
	pub description: Option<&'static str>,
}

impl Link {
	/// Link to `target`.
	pub fn to(target: Value, description: Option<&'static str>) -> Value {
		Value::object(Self { target, description })
	}
}

impl Object for Link {
	fn type_info(&self) -> Arc<TypeInfo> {
		LINK.clone()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Object whose properties return links.
#[derive(Debug, Clone)]
pub struct Host {
	/// Value of the `primary` property.
	pub primary: Value,
	/// Value of the `annotated` property.
	pub annotated: Value,
}

impl Object for Host {
	fn type_info(&self) -> Arc<TypeInfo> {
		HOST.clone()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Group of elements exposed through a descriptor enumerator.
#[derive(Debug, Clone)]
pub struct Assembly {
	/// Parts of the assembly.
	pub parts: Vec<Element>,
}

impl Object for Assembly {
	fn type_info(&self) -> Arc<TypeInfo> {
		ASSEMBLY.clone()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Iterable table of rows.
#[derive(Debug, Clone)]
pub struct Schedule {
	/// Schedule title.
	pub title: String,
	/// Rows in order.
	pub rows: Vec<String>,
}

impl Object for Schedule {
	fn type_info(&self) -> Arc<TypeInfo> {
		SCHEDULE.clone()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn count(&self) -> Option<usize> {
		Some(self.rows.len())
	}

	fn iterate(&self) -> Option<Box<dyn Iterator<Item = Value> + '_>> {
		Some(Box::new(self.rows.iter().map(|row| Value::from(row.as_str()))))
	}
}

/// Object whose type carries nested generic arguments.
#[derive(Debug, Clone)]
pub struct Bundle {
	/// Number of pairs.
	pub size: usize,
}

impl Object for Bundle {
	fn type_info(&self) -> Arc<TypeInfo> {
		BUNDLE.clone()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
