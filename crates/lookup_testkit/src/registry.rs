//! Registry-backed type resolver and descriptors exercising every capability.

use std::collections::HashMap;
use std::sync::Arc;

use lookup::inspect::{
	ContextExtension, ContextExtensionManager, ContextHandler, ContextResolver, Descriptor, DescriptorEnumerator, DescriptorExtension,
	DescriptorRedirector, DescriptorResolver, ExtensionManager, Fault, Handler, ParameterInfo, TypeInfo, TypeResolver, Value, Variant,
	Variants,
};

use crate::model::{Assembly, Link};

/// Ambient context for context-aware descriptors.
#[derive(Debug, Clone, Default)]
pub struct Session {
	/// Current user name.
	pub user: String,
}

impl Session {
	/// Session for `user`.
	pub fn new(user: &str) -> Self {
		Self { user: user.to_owned() }
	}
}

type Factory<C> = Arc<dyn Fn(&Value) -> Descriptor<C> + Send + Sync>;

/// Maps values to descriptors by type full name, with a generic fallback.
///
/// Level lookups key on the walked level; value lookups key on the runtime type.
pub struct DescriptorRegistry<C> {
	factories: HashMap<String, Factory<C>>,
}

impl<C> Default for DescriptorRegistry<C> {
	fn default() -> Self {
		Self { factories: HashMap::new() }
	}
}

impl<C> DescriptorRegistry<C> {
	/// Register `factory` for the type named `full_name`.
	pub fn register<F>(&mut self, full_name: &str, factory: F) -> &mut Self
	where
		F: Fn(&Value) -> Descriptor<C> + Send + Sync + 'static,
	{
		self.factories.insert(full_name.to_owned(), Arc::new(factory));
		self
	}
}

impl<C> TypeResolver<C> for DescriptorRegistry<C> {
	fn resolve(&self, value: &Value, level: Option<&TypeInfo>, _context: &C) -> Descriptor<C> {
		let key = match level {
			Some(level) => level.full_name(),
			None => value.type_info().full_name(),
		};
		match self.factories.get(&key) {
			Some(factory) => factory(value),
			None => Descriptor::for_value(value),
		}
	}
}

/// Registry for the sample model with context-free descriptors only.
pub fn model_registry<C: 'static>() -> DescriptorRegistry<C> {
	let mut registry = DescriptorRegistry::default();
	registry
		.register("model::Element", |value| {
			Descriptor::for_value(value)
				.with_resolver(Arc::new(ElementResolver))
				.with_extension(Arc::new(ElementExtension))
		})
		.register("model::Wall", |value| Descriptor::for_value(value).with_resolver(Arc::new(WallResolver)))
		.register("model::Link", link_descriptor)
		.register("model::Assembly", assembly_descriptor);
	registry
}

/// Registry for the sample model adding context-aware descriptors.
pub fn session_registry() -> DescriptorRegistry<Session> {
	let mut registry = model_registry::<Session>();
	registry
		.register("model::Element", |value| {
			Descriptor::for_value(value)
				.with_resolver(Arc::new(ElementResolver))
				.with_extension(Arc::new(ElementExtension))
				.with_context_extension(Arc::new(SessionExtension))
		})
		.register("model::Wall", |value| {
			Descriptor::for_value(value)
				.with_resolver(Arc::new(WallResolver))
				.with_context_resolver(Arc::new(SessionResolver))
		});
	registry
}

fn link_descriptor<C>(value: &Value) -> Descriptor<C> {
	let Some(link) = value.downcast_ref::<Link>() else {
		return Descriptor::for_value(value);
	};
	let descriptor = Descriptor::new("link").with_redirector(Arc::new(LinkRedirector { target: link.target.clone() }));
	match link.description {
		Some(description) => descriptor.with_description(description),
		None => descriptor,
	}
}

fn assembly_descriptor<C>(value: &Value) -> Descriptor<C> {
	let parts = value
		.downcast_ref::<Assembly>()
		.map(|assembly| assembly.parts.iter().cloned().map(Value::object).collect())
		.unwrap_or_default();
	Descriptor::new("assembly").with_enumerator(Arc::new(PartsEnumerator { parts }))
}

/// Disables regeneration.
struct ElementResolver;

impl DescriptorResolver for ElementResolver {
	fn resolve(&self, target: &str, parameters: &[ParameterInfo]) -> Option<Handler<'_>> {
		match (target, parameters.len()) {
			("regenerate", 0) => Some(Box::new(|| Ok(Value::from(Variant::disabled())))),
			_ => None,
		}
	}
}

/// Registers one working and one failing extension.
struct ElementExtension;

impl DescriptorExtension for ElementExtension {
	fn register_extensions(&self, manager: &mut dyn ExtensionManager) {
		manager.register("host_id", &|| Ok(Value::from(42_i64)));
		manager.register("broken", &|| Err(Fault::evaluation("Extension failed")));
	}
}

/// Resolves the parameter indexer and the material lookup.
struct WallResolver;

impl DescriptorResolver for WallResolver {
	fn resolve(&self, target: &str, parameters: &[ParameterInfo]) -> Option<Handler<'_>> {
		match (target, parameters.len()) {
			("parameter", 1) => Some(Box::new(|| {
				let mut variants = Variants::with_capacity(2);
				variants.add_described(3000_i64, "Unconnected Height").add_described("Basic Wall", "Type Name");
				Ok(Value::from(variants))
			})),
			("get_material", 2) => Some(Box::new(|| Ok(Value::from(Variant::described("Concrete", "Layer 0"))))),
			_ => None,
		}
	}
}

/// Resolves members that need the session.
struct SessionResolver;

impl ContextResolver<Session> for SessionResolver {
	fn resolve(&self, target: &str, _parameters: &[ParameterInfo]) -> Option<ContextHandler<'_, Session>> {
		match target {
			"comment" => Some(Box::new(|session: &Session| Ok(Value::from(format!("edited by {}", session.user))))),
			"get_material" => Some(Box::new(|session: &Session| Ok(Value::from(format!("material for {}", session.user))))),
			_ => None,
		}
	}
}

/// Registers the session user as an extension.
struct SessionExtension;

impl ContextExtension<Session> for SessionExtension {
	fn register_extensions(&self, manager: &mut dyn ContextExtensionManager<Session>) {
		manager.register("session_user", &|session: &Session| Ok(Value::from(session.user.as_str())));
	}
}

/// Redirects every member to the link target.
struct LinkRedirector {
	target: Value,
}

impl DescriptorRedirector for LinkRedirector {
	fn try_redirect(&self, _target: &str) -> Option<Value> {
		Some(self.target.clone())
	}
}

/// Children of an assembly.
struct PartsEnumerator {
	parts: Vec<Value>,
}

impl DescriptorEnumerator for PartsEnumerator {
	fn is_empty(&self) -> bool {
		self.parts.is_empty()
	}

	fn enumerate(&self) -> Box<dyn Iterator<Item = Value> + '_> {
		Box::new(self.parts.iter().cloned())
	}
}
