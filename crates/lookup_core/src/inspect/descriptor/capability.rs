use crate::inspect::{Fault, ParameterInfo, Value};

/// Lazy evaluator returned by a [`DescriptorResolver`].
pub type Handler<'a> = Box<dyn FnOnce() -> Result<Value, Fault> + 'a>;
/// Lazy evaluator returned by a [`ContextResolver`]; receives the ambient context.
pub type ContextHandler<'a, C> = Box<dyn FnOnce(&C) -> Result<Value, Fault> + 'a>;

/// The described value is a virtual collection of children.
pub trait DescriptorEnumerator {
	/// Whether the collection has no children.
	fn is_empty(&self) -> bool;

	/// Children in order.
	fn enumerate(&self) -> Box<dyn Iterator<Item = Value> + '_>;
}

/// Supplies evaluators for members the engine cannot read on its own.
pub trait DescriptorResolver {
	/// Evaluator for `target` with the given parameter signature, if this descriptor handles it.
	fn resolve(&self, target: &str, parameters: &[ParameterInfo]) -> Option<Handler<'_>>;
}

/// Context-aware counterpart of [`DescriptorResolver`].
pub trait ContextResolver<C> {
	/// Evaluator for `target` with the given parameter signature, if this descriptor handles it.
	fn resolve(&self, target: &str, parameters: &[ParameterInfo]) -> Option<ContextHandler<'_, C>>;
}

/// Receives synthetic members from a [`DescriptorExtension`].
pub trait ExtensionManager {
	/// Evaluate `extension` now and record it as member `name`.
	fn register(&mut self, name: &str, extension: &dyn Fn() -> Result<Value, Fault>);
}

/// Receives synthetic members from a [`ContextExtension`].
pub trait ContextExtensionManager<C> {
	/// Evaluate `extension` with the ambient context now and record it as member `name`.
	fn register(&mut self, name: &str, extension: &dyn Fn(&C) -> Result<Value, Fault>);
}

/// Contributes synthetic members outside the ordinary member walk.
pub trait DescriptorExtension {
	/// Register extensions with `manager`.
	fn register_extensions(&self, manager: &mut dyn ExtensionManager);
}

/// Context-aware counterpart of [`DescriptorExtension`].
pub trait ContextExtension<C> {
	/// Register extensions with `manager`.
	fn register_extensions(&self, manager: &mut dyn ContextExtensionManager<C>);
}

/// Substitutes the described value with another target.
pub trait DescriptorRedirector {
	/// Replacement for the value reached through member `target`, or `None` to stop.
	fn try_redirect(&self, target: &str) -> Option<Value>;
}

/// Context-aware counterpart of [`DescriptorRedirector`].
pub trait ContextRedirector<C> {
	/// Replacement for the value reached through member `target`, or `None` to stop.
	fn try_redirect(&self, target: &str, context: &C) -> Option<Value>;
}
