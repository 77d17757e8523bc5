use std::fmt;
use std::sync::Arc;

use crate::inspect::{FallbackResolver, TypeResolver};

/// Switches controlling one decomposition call.
pub struct DecomposeOptions<C = ()> {
	/// Walk the root base type of the hierarchy.
	pub include_root: bool,
	/// Include fields.
	pub include_fields: bool,
	/// Include events.
	pub include_events: bool,
	/// Emit sentinel values for write-only, void, and parameterized members instead of skipping them.
	pub include_unsupported: bool,
	/// Include private members.
	pub include_private_members: bool,
	/// Include static members in instance walks.
	pub include_static_members: bool,
	/// Invoke descriptor extension capabilities.
	pub enable_extensions: bool,
	/// Follow descriptor redirector chains.
	pub enable_redirection: bool,
	/// Maps values to descriptors.
	pub type_resolver: Arc<dyn TypeResolver<C>>,
	/// Ambient value handed to context-aware capabilities.
	pub context: C,
}

impl<C> DecomposeOptions<C> {
	/// Options carrying `context`, everything else at defaults.
	pub fn new(context: C) -> Self {
		Self {
			include_root: false,
			include_fields: false,
			include_events: false,
			include_unsupported: false,
			include_private_members: false,
			include_static_members: false,
			enable_extensions: false,
			enable_redirection: false,
			type_resolver: Arc::new(FallbackResolver),
			context,
		}
	}

	/// Replace the type resolver.
	pub fn with_resolver(mut self, resolver: impl TypeResolver<C> + 'static) -> Self {
		self.type_resolver = Arc::new(resolver);
		self
	}

	/// Turn on every member kind, visibility, and capability.
	pub fn with_everything(mut self) -> Self {
		self.include_root = true;
		self.include_fields = true;
		self.include_events = true;
		self.include_unsupported = true;
		self.include_private_members = true;
		self.include_static_members = true;
		self.enable_extensions = true;
		self.enable_redirection = true;
		self
	}
}

impl<C: Default> Default for DecomposeOptions<C> {
	fn default() -> Self {
		Self::new(C::default())
	}
}

impl<C: fmt::Debug> fmt::Debug for DecomposeOptions<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DecomposeOptions")
			.field("include_root", &self.include_root)
			.field("include_fields", &self.include_fields)
			.field("include_events", &self.include_events)
			.field("include_unsupported", &self.include_unsupported)
			.field("include_private_members", &self.include_private_members)
			.field("include_static_members", &self.include_static_members)
			.field("enable_extensions", &self.enable_extensions)
			.field("enable_redirection", &self.enable_redirection)
			.field("context", &self.context)
			.finish_non_exhaustive()
	}
}
