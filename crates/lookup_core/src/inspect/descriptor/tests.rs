use std::sync::Arc;

use crate::inspect::{ContextRedirector, Descriptor, DescriptorRedirector, Fault, FallbackResolver, TypeResolver, Value};

struct Fixed(&'static str);

impl DescriptorRedirector for Fixed {
	fn try_redirect(&self, target: &str) -> Option<Value> {
		(target == "host").then(|| Value::from(self.0))
	}
}

struct FromContext;

impl ContextRedirector<String> for FromContext {
	fn try_redirect(&self, _target: &str, context: &String) -> Option<Value> {
		Some(Value::from(context.as_str()))
	}
}

#[test]
fn redirect_prefers_context_free_capability() {
	let descriptor = Descriptor::<String>::new("link")
		.with_redirector(Arc::new(Fixed("plain")))
		.with_context_redirector(Arc::new(FromContext));

	let redirected = descriptor.redirect("host", &"ambient".to_owned());
	assert!(matches!(redirected, Some(Value::String(text)) if text.as_ref() == "plain"));

	let fallback = descriptor.redirect("other", &"ambient".to_owned());
	assert!(matches!(fallback, Some(Value::String(text)) if text.as_ref() == "ambient"));
}

#[test]
fn descriptor_without_capabilities_declines() {
	let descriptor = Descriptor::<()>::new("plain");

	assert!(descriptor.redirect("anything", &()).is_none());
	assert!(descriptor.resolver().is_none());
	assert!(descriptor.extension().is_none());
	assert!(descriptor.enumerator().is_none());
	assert_eq!(format!("{descriptor:?}"), "Descriptor { name: \"plain\", description: None, capabilities: [] }");
}

#[test]
fn fallback_resolver_names_values() {
	let descriptor: Descriptor = FallbackResolver.resolve(&Value::from(12_i64), None, &());
	assert_eq!(descriptor.name.as_ref(), "12");

	let fault = Value::from(Fault::invocation(Fault::evaluation("joined wall missing")));
	let descriptor: Descriptor = FallbackResolver.resolve(&fault, None, &());
	assert_eq!(descriptor.name.as_ref(), "joined wall missing");
}

#[test]
fn closures_act_as_type_resolvers() {
	let resolver = |value: &Value, level: Option<&crate::inspect::TypeInfo>, _: &()| {
		let name = match level {
			Some(level) => format!("{}@{}", value.display_text(), level.name()),
			None => value.display_text(),
		};
		Descriptor::new(name)
	};

	let root = crate::inspect::TypeInfo::root();
	assert_eq!(resolver.resolve(&Value::from("x"), Some(&root), &()).name.as_ref(), "x@Object");
	assert_eq!(resolver.resolve(&Value::from("x"), None, &()).name.as_ref(), "x");
}
