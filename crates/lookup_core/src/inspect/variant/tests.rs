use std::sync::Arc;

use crate::inspect::{FaultKind, Value, Variant, Variants};

#[test]
fn single_value_collapses_to_item() {
	let mut variants = Variants::with_capacity(1);
	variants.add_described(42_i64, "by level");

	assert_eq!(variants.len(), 1);
	assert!(matches!(variants.value(), Value::Int(42)));
	assert_eq!(variants.description(), Some("by level"));

	let Value::Variant(single) = variants.consume() else {
		panic!("expected a collapsed variant");
	};
	assert!(matches!(single.value(), Value::Int(42)));
	assert_eq!(single.description(), Some("by level"));
}

#[test]
fn null_and_empty_values_do_not_grow() {
	let mut variants = Variants::with_capacity(4);
	variants
		.add(Value::Null)
		.add(Value::list(Vec::<Value>::new()))
		.add(Variants::empty().consume())
		.add(Option::<i64>::None);

	assert_eq!(variants.len(), 0);
	assert!(variants.is_empty());
	assert_eq!(variants.description(), None);

	let Value::Variants(aggregate) = variants.value() else {
		panic!("expected the collection itself");
	};
	assert!(aggregate.is_empty());
}

#[test]
fn several_values_aggregate_to_collection() {
	let mut variants = Variants::with_capacity(2);
	variants.add_described("first", "a").add_described("second", "b");

	assert_eq!(variants.description(), None);
	let Value::Variants(aggregate) = variants.consume() else {
		panic!("expected the collection itself");
	};
	let descriptions = aggregate.iter().map(|item| item.description().map(str::to_owned)).collect::<Vec<_>>();
	assert_eq!(descriptions, vec![Some("a".to_owned()), Some("b".to_owned())]);
}

#[test]
fn non_empty_list_is_kept() {
	let mut variants = Variants::empty();
	variants.add(Value::list([1_i64, 2]));

	assert_eq!(variants.len(), 1);
}

#[test]
fn disabled_variant_is_distinct_sentinel() {
	let variant = Variant::disabled();
	let Value::Fault(fault) = variant.value() else {
		panic!("expected a fault value");
	};

	assert_eq!(fault.kind, FaultKind::Disabled);
	assert!(fault.is_disabled());
}

#[test]
fn iterating_variants_yields_described_items() {
	let mut variants = Variants::empty();
	variants.add_described(1_i64, "one").add_described(2_i64, "two");
	let value = Value::Variants(Arc::new(variants));

	let items = value.iterate().expect("variants are iterable").collect::<Vec<_>>();
	assert_eq!(items.len(), 2);
	assert!(matches!(&items[0], Value::Variant(item) if item.description() == Some("one")));
}
