use super::composer::{Composer, Frame};
use crate::inspect::{ContextExtensionManager, DecomposedMember, ExtensionManager, Fault, MemberAttributes, Value};

/// Records extension members for one hierarchy level.
struct ExtensionSink<'s, 'a, C> {
	composer: &'s mut Composer<'a, C>,
	frame: &'s Frame<'a, C>,
	members: &'s mut Vec<DecomposedMember<C>>,
}

impl<C> ExtensionSink<'_, '_, C> {
	fn record(&mut self, name: &str, outcome: Result<Value, Fault>) {
		let value = outcome.unwrap_or_else(|fault| {
			tracing::debug!(extension = name, error = %fault, "extension evaluation failed");
			Value::from(fault.unwrap_invocation())
		});
		let measurement = self.composer.probe.take();
		let value = self.composer.describe_value(value, name);
		let member = self.composer.write_member(self.frame, name.to_owned(), MemberAttributes::EXTENSION, value, measurement);
		self.members.push(member);
	}
}

impl<C> ExtensionManager for ExtensionSink<'_, '_, C> {
	fn register(&mut self, name: &str, extension: &dyn Fn() -> Result<Value, Fault>) {
		let outcome = self.composer.evaluate(extension);
		self.record(name, outcome);
	}
}

impl<C> ContextExtensionManager<C> for ExtensionSink<'_, '_, C> {
	fn register(&mut self, name: &str, extension: &dyn Fn(&C) -> Result<Value, Fault>) {
		let options = self.composer.options;
		let outcome = self.composer.evaluate(|| extension(&options.context));
		self.record(name, outcome);
	}
}

impl<'a, C> Composer<'a, C> {
	/// Let the level descriptor's extensions append synthetic members, context-free first.
	pub(super) fn execute_extensions(&mut self, frame: &Frame<'a, C>, members: &mut Vec<DecomposedMember<C>>) {
		if !self.options.enable_extensions {
			return;
		}

		let mut sink = ExtensionSink { composer: self, frame, members };
		if let Some(extension) = frame.descriptor.extension() {
			extension.register_extensions(&mut sink);
		}
		if let Some(extension) = frame.descriptor.context_extension() {
			extension.register_extensions(&mut sink);
		}
	}
}
