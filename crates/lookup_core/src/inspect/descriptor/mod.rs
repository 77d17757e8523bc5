use std::fmt;
use std::sync::Arc;

use crate::inspect::{Fault, TypeInfo, Value};

mod capability;

pub use capability::{
	ContextExtension, ContextExtensionManager, ContextHandler, ContextRedirector, ContextResolver, DescriptorEnumerator, DescriptorExtension,
	DescriptorRedirector, DescriptorResolver, ExtensionManager, Handler,
};

/// Metadata describing one value, plus the optional capabilities it provides.
///
/// Capabilities are attached once when the descriptor is built; the engine
/// only checks which slots are filled.
pub struct Descriptor<C = ()> {
	/// Display name of the described value.
	pub name: Arc<str>,
	/// Optional description of the described value.
	pub description: Option<Arc<str>>,
	enumerator: Option<Arc<dyn DescriptorEnumerator>>,
	resolver: Option<Arc<dyn DescriptorResolver>>,
	context_resolver: Option<Arc<dyn ContextResolver<C>>>,
	extension: Option<Arc<dyn DescriptorExtension>>,
	context_extension: Option<Arc<dyn ContextExtension<C>>>,
	redirector: Option<Arc<dyn DescriptorRedirector>>,
	context_redirector: Option<Arc<dyn ContextRedirector<C>>>,
}

impl<C> Descriptor<C> {
	/// Descriptor without capabilities.
	pub fn new(name: impl Into<Arc<str>>) -> Self {
		Self {
			name: name.into(),
			description: None,
			enumerator: None,
			resolver: None,
			context_resolver: None,
			extension: None,
			context_extension: None,
			redirector: None,
			context_redirector: None,
		}
	}

	/// Descriptor named after the value's display text.
	pub fn for_value(value: &Value) -> Self {
		match value {
			Value::Fault(fault) => Self::for_fault(fault),
			other => Self::new(other.display_text()),
		}
	}

	/// Descriptor for a captured fault, named after its most specific message.
	pub fn for_fault(fault: &Fault) -> Self {
		Self::new(fault.display_message())
	}

	/// Attach a description.
	pub fn with_description(mut self, description: impl Into<Arc<str>>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Attach the enumerator capability.
	pub fn with_enumerator<E: DescriptorEnumerator + 'static>(mut self, enumerator: Arc<E>) -> Self {
		self.enumerator = Some(enumerator as Arc<dyn DescriptorEnumerator>);
		self
	}

	/// Attach the resolver capability.
	pub fn with_resolver<R: DescriptorResolver + 'static>(mut self, resolver: Arc<R>) -> Self {
		self.resolver = Some(resolver as Arc<dyn DescriptorResolver>);
		self
	}

	/// Attach the context-aware resolver capability.
	pub fn with_context_resolver<R: ContextResolver<C> + 'static>(mut self, resolver: Arc<R>) -> Self {
		self.context_resolver = Some(resolver as Arc<dyn ContextResolver<C>>);
		self
	}

	/// Attach the extension capability.
	pub fn with_extension<E: DescriptorExtension + 'static>(mut self, extension: Arc<E>) -> Self {
		self.extension = Some(extension as Arc<dyn DescriptorExtension>);
		self
	}

	/// Attach the context-aware extension capability.
	pub fn with_context_extension<E: ContextExtension<C> + 'static>(mut self, extension: Arc<E>) -> Self {
		self.context_extension = Some(extension as Arc<dyn ContextExtension<C>>);
		self
	}

	/// Attach the redirector capability.
	pub fn with_redirector<R: DescriptorRedirector + 'static>(mut self, redirector: Arc<R>) -> Self {
		self.redirector = Some(redirector as Arc<dyn DescriptorRedirector>);
		self
	}

	/// Attach the context-aware redirector capability.
	pub fn with_context_redirector<R: ContextRedirector<C> + 'static>(mut self, redirector: Arc<R>) -> Self {
		self.context_redirector = Some(redirector as Arc<dyn ContextRedirector<C>>);
		self
	}

	/// Enumerator capability.
	pub fn enumerator(&self) -> Option<&dyn DescriptorEnumerator> {
		self.enumerator.as_deref()
	}

	/// Resolver capability.
	pub fn resolver(&self) -> Option<&dyn DescriptorResolver> {
		self.resolver.as_deref()
	}

	/// Context-aware resolver capability.
	pub fn context_resolver(&self) -> Option<&dyn ContextResolver<C>> {
		self.context_resolver.as_deref()
	}

	/// Extension capability.
	pub fn extension(&self) -> Option<&dyn DescriptorExtension> {
		self.extension.as_deref()
	}

	/// Context-aware extension capability.
	pub fn context_extension(&self) -> Option<&dyn ContextExtension<C>> {
		self.context_extension.as_deref()
	}

	/// Redirector capability.
	pub fn redirector(&self) -> Option<&dyn DescriptorRedirector> {
		self.redirector.as_deref()
	}

	/// Context-aware redirector capability.
	pub fn context_redirector(&self) -> Option<&dyn ContextRedirector<C>> {
		self.context_redirector.as_deref()
	}

	/// Ask the redirectors, context-free first, for a replacement target.
	pub(crate) fn redirect(&self, target: &str, context: &C) -> Option<Value> {
		if let Some(redirector) = self.redirector() {
			if let Some(value) = redirector.try_redirect(target) {
				return Some(value);
			}
		}
		self.context_redirector().and_then(|redirector| redirector.try_redirect(target, context))
	}

	fn capability_names(&self) -> Vec<&'static str> {
		let slots = [
			(self.enumerator.is_some(), "enumerator"),
			(self.resolver.is_some(), "resolver"),
			(self.context_resolver.is_some(), "context_resolver"),
			(self.extension.is_some(), "extension"),
			(self.context_extension.is_some(), "context_extension"),
			(self.redirector.is_some(), "redirector"),
			(self.context_redirector.is_some(), "context_redirector"),
		];
		slots.into_iter().filter(|(present, _)| *present).map(|(_, name)| name).collect()
	}
}

impl<C> Clone for Descriptor<C> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			description: self.description.clone(),
			enumerator: self.enumerator.clone(),
			resolver: self.resolver.clone(),
			context_resolver: self.context_resolver.clone(),
			extension: self.extension.clone(),
			context_extension: self.context_extension.clone(),
			redirector: self.redirector.clone(),
			context_redirector: self.context_redirector.clone(),
		}
	}
}

impl<C> fmt::Debug for Descriptor<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Descriptor")
			.field("name", &self.name)
			.field("description", &self.description)
			.field("capabilities", &self.capability_names())
			.finish()
	}
}

/// Maps a value to its descriptor.
///
/// `level` is the hierarchy level being walked, or `None` when the value's
/// own descriptor is requested. Implementations must always return a
/// descriptor; the engine may call them repeatedly for the same value.
pub trait TypeResolver<C> {
	/// Descriptor for `value`.
	fn resolve(&self, value: &Value, level: Option<&TypeInfo>, context: &C) -> Descriptor<C>;
}

impl<C, F> TypeResolver<C> for F
where
	F: Fn(&Value, Option<&TypeInfo>, &C) -> Descriptor<C>,
{
	fn resolve(&self, value: &Value, level: Option<&TypeInfo>, context: &C) -> Descriptor<C> {
		self(value, level, context)
	}
}

/// Resolver used when the caller supplies none: plain descriptors named after values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackResolver;

impl<C> TypeResolver<C> for FallbackResolver {
	fn resolve(&self, value: &Value, _level: Option<&TypeInfo>, _context: &C) -> Descriptor<C> {
		Descriptor::for_value(value)
	}
}

#[cfg(test)]
mod tests;
