#![allow(missing_docs)]

use lookup::inspect::{
	DecomposeOptions, DecomposedMember, FaultKind, MemberAttributes, Value, Variant, decompose, decompose_members, decompose_with_context,
};
use lookup_testkit::model::{Assembly, Element, Host, Link, Schedule, Wall};
use lookup_testkit::registry::{Session, model_registry, session_registry};

fn wall() -> Value {
	Value::object(Wall::sample())
}

fn model_options() -> DecomposeOptions {
	lookup_testkit::init_tracing();
	DecomposeOptions::default().with_resolver(model_registry())
}

fn session_options() -> DecomposeOptions<Session> {
	lookup_testkit::init_tracing();
	DecomposeOptions::new(Session::new("ada")).with_resolver(session_registry())
}

fn find<'m, C>(members: &'m [DecomposedMember<C>], name: &str) -> &'m DecomposedMember<C> {
	members.iter().find(|member| member.name == name).expect("member is present")
}

fn fault_of<C>(member: &DecomposedMember<C>) -> (FaultKind, String) {
	match &member.value.raw_value {
		Value::Fault(fault) => (fault.kind, fault.message.to_string()),
		other => panic!("expected a fault for {}, got {other:?}", member.name),
	}
}

fn text_of<C>(member: &DecomposedMember<C>) -> &str {
	match &member.value.raw_value {
		Value::String(text) => text.as_ref(),
		other => panic!("expected text for {}, got {other:?}", member.name),
	}
}

mod resolution {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn resolver_evaluates_parameterized_members() {
		let members = decompose_members(&wall(), Some(&model_options()));

		let material = find(&members, "get_material (i64, ref bool)");
		assert_eq!(text_of(material), "Concrete");
		assert_eq!(material.value.description.as_deref(), Some("Layer 0"));
		assert_eq!(material.attributes, MemberAttributes::METHOD);

		let parameter = find(&members, "parameter (String)");
		let Value::Variants(variants) = &parameter.value.raw_value else {
			panic!("expected several candidates");
		};
		assert_eq!(variants.len(), 2);
		assert_eq!(parameter.value.type_name, "Variants");
		assert_eq!(parameter.value.description, None);
	}

	#[test]
	fn resolver_can_disable_evaluation() {
		let members = decompose_members(&wall(), Some(&model_options()));

		let regenerate = find(&members, "regenerate");
		let Value::Fault(fault) = &regenerate.value.raw_value else {
			panic!("expected the disabled sentinel");
		};
		assert!(fault.is_disabled());
		assert_eq!(&*fault.message, "Member execution disabled");
	}

	#[test]
	fn context_resolver_runs_after_context_free_resolver() {
		let members = decompose_with_context(&wall(), &session_options()).members;

		assert_eq!(text_of(find(&members, "comment")), "edited by ada");
		assert_eq!(text_of(find(&members, "get_material (i64, ref bool)")), "Concrete");
	}
}

mod suppression {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn unsupported_members_are_skipped_by_default() {
		let members = decompose_members(&wall(), Some(&model_options()));

		for name in ["comment", "cell (i64)", "tag", "move_by (f64)", "dispose"] {
			assert!(members.iter().all(|member| member.name != name), "{name} should be skipped");
		}
	}

	#[test]
	fn unsupported_members_surface_sentinels_on_request() {
		let options = DecomposeOptions {
			include_unsupported: true,
			..model_options()
		};
		let members = decompose_members(&wall(), Some(&options));

		assert_eq!(
			fault_of(find(&members, "comment")),
			(FaultKind::InvalidOperation, "Property does not have a get accessor, it cannot be read".to_owned())
		);
		assert_eq!(fault_of(find(&members, "cell (i64)")), (FaultKind::NotSupported, "Unsupported property overload".to_owned()));
		assert_eq!(
			fault_of(find(&members, "tag")),
			(FaultKind::InvalidOperation, "Property does not have a get accessor, it cannot be read".to_owned())
		);
		assert_eq!(fault_of(find(&members, "move_by (f64)")), (FaultKind::NotSupported, "Unsupported method overload".to_owned()));
		assert_eq!(fault_of(find(&members, "dispose")), (FaultKind::InvalidOperation, "Method doesn't return a value".to_owned()));
	}
}

mod extensions {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn failing_extension_does_not_abort_siblings() {
		let options = DecomposeOptions {
			enable_extensions: true,
			..model_options()
		};
		let members = decompose_members(&wall(), Some(&options));

		let extensions = members
			.iter()
			.filter(|member| member.attributes.contains(MemberAttributes::EXTENSION))
			.collect::<Vec<_>>();
		assert_eq!(extensions.len(), 2);

		assert_eq!(extensions[0].name, "host_id");
		assert!(matches!(extensions[0].value.raw_value, Value::Int(42)));
		assert_eq!(extensions[1].name, "broken");
		assert_eq!(fault_of(extensions[1]), (FaultKind::Evaluation, "Extension failed".to_owned()));
		assert!(extensions.iter().all(|member| member.depth == 2 && member.declaring_type_name == "Element"));
	}

	#[test]
	fn extensions_require_opt_in() {
		let members = decompose_members(&wall(), Some(&model_options()));

		assert!(members.iter().all(|member| !member.attributes.contains(MemberAttributes::EXTENSION)));
	}

	#[test]
	fn context_extensions_follow_context_free_ones() {
		let options = DecomposeOptions {
			enable_extensions: true,
			..session_options()
		};
		let members = decompose_with_context(&wall(), &options).members;

		let extensions = members
			.iter()
			.filter(|member| member.attributes == MemberAttributes::EXTENSION)
			.map(|member| member.name.as_str())
			.collect::<Vec<_>>();
		assert_eq!(extensions, vec!["host_id", "broken", "session_user"]);
		assert_eq!(text_of(find(&members, "session_user")), "ada");
	}
}

mod redirection {
	use super::*;
	use pretty_assertions::assert_eq;

	fn host() -> Value {
		let target = Value::object(Element::new(1, "Target"));
		let other = Value::object(Element::new(2, "Other"));
		Value::object(Host {
			primary: Link::to(Link::to(target, Some("second")), Some("first")),
			annotated: Value::from(Variant::described(Link::to(other, None), "via variant")),
		})
	}

	#[test]
	fn chain_resolves_to_final_target_with_deepest_description() {
		let options = DecomposeOptions {
			enable_redirection: true,
			..model_options()
		};
		let members = decompose_members(&host(), Some(&options));

		let primary = find(&members, "primary");
		assert_eq!(primary.value.type_name, "Element");
		assert_eq!(primary.value.name.as_ref(), "Target");
		assert_eq!(primary.value.description.as_deref(), Some("second"));
		assert_eq!(
			primary.value.descriptor.as_ref().and_then(|descriptor| descriptor.description.as_deref()),
			Some("second")
		);
	}

	#[test]
	fn chain_falls_back_to_variant_description() {
		let options = DecomposeOptions {
			enable_redirection: true,
			..model_options()
		};
		let members = decompose_members(&host(), Some(&options));

		let annotated = find(&members, "annotated");
		assert_eq!(annotated.value.name.as_ref(), "Other");
		assert_eq!(annotated.value.description.as_deref(), Some("via variant"));
	}

	#[test]
	fn disabled_redirection_keeps_the_link() {
		let members = decompose_members(&host(), Some(&model_options()));

		let primary = find(&members, "primary");
		assert_eq!(primary.value.type_name, "Link");
		assert_eq!(primary.value.name.as_ref(), "link");
		assert_eq!(primary.value.description.as_deref(), Some("first"));
	}

	#[test]
	fn root_link_decomposes_as_its_target() {
		let options = DecomposeOptions {
			enable_redirection: true,
			..model_options()
		};
		let target = Value::object(Element::new(7, "Target"));
		let object = decompose(&Link::to(Link::to(target, Some("inner")), Some("outer")), Some(&options));

		assert_eq!(object.type_name, "Element");
		assert_eq!(object.name.as_ref(), "Target");
		assert_eq!(object.description.as_deref(), Some("inner"));
		assert!(object.raw_value.downcast_ref::<Element>().is_some());
		assert!(matches!(find(&object.members, "id").value.raw_value, Value::Int(7)));
		assert_eq!(text_of(find(&object.members, "name")), "Target");
	}

	#[test]
	fn root_link_stays_put_without_redirection() {
		let target = Value::object(Element::new(7, "Target"));
		let object = decompose(&Link::to(target, Some("outer")), Some(&model_options()));

		assert_eq!(object.type_name, "Link");
		assert_eq!(object.name.as_ref(), "link");
		assert_eq!(object.description.as_deref(), Some("outer"));
		assert!(object.members.iter().all(|member| member.name != "id"));
	}
}

mod enumeration {
	use super::*;
	use pretty_assertions::assert_eq;

	fn indexed<C>(members: &[DecomposedMember<C>]) -> Vec<&DecomposedMember<C>> {
		members.iter().filter(|member| member.attributes.is_empty()).collect()
	}

	#[test]
	fn list_elements_become_indexed_members() {
		for options in [DecomposeOptions::default(), DecomposeOptions::default().with_everything()] {
			let members = decompose_members(&Value::list(["x", "y", "z"]), Some(&options));
			let items = indexed(&members);

			assert_eq!(items.iter().map(|member| member.name.as_str()).collect::<Vec<_>>(), vec!["0", "1", "2"]);
			assert_eq!(items.iter().map(|member| text_of(*member)).collect::<Vec<_>>(), vec!["x", "y", "z"]);
		}
	}

	#[test]
	fn iterable_objects_append_elements_after_members() {
		let schedule = Value::object(Schedule {
			title: "Doors".to_owned(),
			rows: vec!["D1".to_owned(), "D2".to_owned()],
		});
		let object = decompose(&schedule, None);

		let names = object.members.iter().map(|member| member.name.as_str()).collect::<Vec<_>>();
		assert_eq!(names, vec!["title", "0", "1"]);
		assert_eq!(object.members[1].depth, 2);
		assert_eq!(object.members[1].declaring_type_name, "Schedule");
	}

	#[test]
	fn descriptor_enumerator_supplies_children() {
		let assembly = Value::object(Assembly {
			parts: vec![Element::new(10, "Frame"), Element::new(11, "Panel")],
		});
		let members = decompose_members(&assembly, Some(&model_options()));

		let names = members.iter().map(|member| member.name.as_str()).collect::<Vec<_>>();
		assert_eq!(names, vec!["count", "0", "1"]);
		assert_eq!(members[1].value.type_name, "Element");
		assert_eq!(members[1].value.name.as_ref(), "Frame");
		assert_eq!(members[2].value.name.as_ref(), "Panel");
	}

	#[test]
	fn strings_are_not_iterated() {
		let members = decompose_members(&Value::from("xyz"), None);

		assert!(indexed(&members).is_empty());
	}
}
