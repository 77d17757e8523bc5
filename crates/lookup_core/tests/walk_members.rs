#![allow(missing_docs)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lookup::inspect::{
	DecomposeOptions, DecomposedMember, Descriptor, FaultKind, MemberAttributes, TypeInfo, Value, decompose, decompose_members,
	decompose_members_with_context, decompose_object, decompose_object_with_context, decompose_with_context,
};
use lookup_testkit::model::{Bundle, Wall, wall_type};
use lookup_testkit::registry::{Session, model_registry};
use pretty_assertions::assert_eq;

fn wall() -> Value {
	Value::object(Wall::sample())
}

fn model_options() -> DecomposeOptions {
	lookup_testkit::init_tracing();
	DecomposeOptions::default().with_resolver(model_registry())
}

fn names<C>(members: &[DecomposedMember<C>]) -> Vec<&str> {
	members.iter().map(|member| member.name.as_str()).collect()
}

fn find<'m, C>(members: &'m [DecomposedMember<C>], name: &str) -> &'m DecomposedMember<C> {
	members.iter().find(|member| member.name == name).expect("member is present")
}

#[test]
fn null_input_short_circuits_every_entry_point() {
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	let options = DecomposeOptions::default().with_resolver(move |value: &Value, _: Option<&TypeInfo>, _: &()| {
		counter.fetch_add(1, Ordering::Relaxed);
		Descriptor::for_value(value)
	});

	let full = decompose(&Value::Null, Some(&options));
	let object = decompose_object(&Value::Null, Some(&options));
	let members = decompose_members(&Value::Null, Some(&options));

	assert_eq!(full.type_name, "Null");
	assert_eq!(object.type_full_name, "core::Null");
	assert!(full.members.is_empty());
	assert!(members.is_empty());
	assert_eq!(calls.load(Ordering::Relaxed), 0);
}

#[test]
fn null_input_short_circuits_with_context() {
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	let options = DecomposeOptions::new(Session::new("ada")).with_resolver(move |value: &Value, _: Option<&TypeInfo>, _: &Session| {
		counter.fetch_add(1, Ordering::Relaxed);
		Descriptor::for_value(value)
	});

	assert_eq!(decompose_with_context(&Value::Null, &options).name.as_ref(), "null");
	assert!(decompose_object_with_context(&Value::Null, &options).descriptor.is_none());
	assert!(decompose_members_with_context(&Value::Null, &options).is_empty());
	assert_eq!(calls.load(Ordering::Relaxed), 0);
}

#[test]
fn default_walk_lists_members_most_derived_first() {
	let object = decompose(&wall(), Some(&model_options()));

	assert_eq!(object.name.as_ref(), "Basic Wall");
	assert_eq!(object.type_name, "Wall");
	assert_eq!(object.type_full_name, "model::Wall");
	assert_eq!(
		names(&object.members),
		vec!["width", "parameter (String)", "get_material (i64, ref bool)", "id", "name", "location", "regenerate"]
	);

	let depths = object.members.iter().map(|member| (member.depth, member.declaring_type_name.as_str())).collect::<Vec<_>>();
	assert_eq!(
		depths,
		vec![(3, "Wall"), (3, "Wall"), (3, "Wall"), (2, "Element"), (2, "Element"), (2, "Element"), (2, "Element")]
	);
}

#[test]
fn throwing_property_becomes_member_value() {
	let members = decompose_members(&wall(), Some(&model_options()));

	let location = find(&members, "location");
	let Value::Fault(fault) = &location.value.raw_value else {
		panic!("expected a captured fault");
	};
	assert_eq!(fault.kind, FaultKind::Evaluation);
	assert_eq!(location.value.name.as_ref(), "Element has no location");
	assert_eq!(location.value.type_name, "EvaluationFault");

	assert!(matches!(find(&members, "id").value.raw_value, Value::Int(316)));
	assert!(matches!(find(&members, "width").value.raw_value, Value::Float(width) if width == 0.25));
	assert_eq!(find(&members, "name").value.name.as_ref(), "Basic Wall");
}

#[test]
fn everything_option_widens_the_walk() {
	let options = model_options().with_everything();
	let members = decompose_members(&wall(), Some(&options));

	assert_eq!(
		names(&members),
		vec![
			"height",
			"secret",
			"width",
			"comment",
			"parameter (String)",
			"cell (i64)",
			"tag",
			"category",
			"get_material (i64, ref bool)",
			"id",
			"name",
			"location",
			"regenerate",
			"move_by (f64)",
			"dispose",
			"changed",
			"host_id",
			"broken",
			"to_string",
			"type_info",
		]
	);

	assert_eq!(find(&members, "secret").attributes, MemberAttributes::FIELD | MemberAttributes::PRIVATE);
	assert_eq!(find(&members, "category").attributes, MemberAttributes::PROPERTY | MemberAttributes::STATIC);
	assert_eq!(find(&members, "to_string").depth, 1);
}

#[test]
fn special_and_restricted_members_are_never_walked() {
	let options = model_options().with_everything();
	let members = decompose_members(&wall(), Some(&options));

	assert!(members.iter().all(|member| member.name != "get_name" && member.name != "owner_handle"));
}

#[test]
fn events_carry_formatted_handler_type() {
	let options = DecomposeOptions {
		include_events: true,
		..model_options()
	};
	let members = decompose_members(&wall(), Some(&options));

	let changed = find(&members, "changed");
	assert_eq!(changed.attributes, MemberAttributes::EVENT);
	assert!(matches!(&changed.value.raw_value, Value::String(text) if text.as_ref() == "EventHandler<ChangedArgs>"));
}

#[test]
fn type_input_walks_static_members_only() {
	let object = decompose(&Value::Type(wall_type()), Some(&model_options()));

	assert_eq!(object.type_name, "Wall");
	assert_eq!(object.name.as_ref(), "Wall");
	assert_eq!(names(&object.members), vec!["category"]);
	assert!(matches!(&object.members[0].value.raw_value, Value::String(text) if text.as_ref() == "Walls"));
}

#[test]
fn nested_generic_arguments_render_recursively() {
	let object = decompose_object(&Value::object(Bundle { size: 2 }), None);

	assert_eq!(object.type_name, "Bundle<Pair<i64, String>>");
	assert_eq!(object.type_full_name, "model::Bundle<Pair<i64, String>>");
	assert!(object.members.is_empty());
}

#[test]
fn members_are_measured() {
	let members = decompose_members(&wall(), Some(&model_options()));

	assert!(members.iter().all(|member| member.computation_time >= 0.0));
	// This binary keeps the system allocator, so nothing is counted.
	assert!(members.iter().all(|member| member.allocated_bytes == 0));
}
