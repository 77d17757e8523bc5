//! Decomposition entry points.
//!
//! Each call builds its own [`Composer`]; nothing is cached between calls.
//! The input is unwrapped and redirected once, before the walk starts.

mod composer;
mod enumeration;
mod extensions;
mod members;
mod redirect;

use composer::{Composer, Root};

use crate::inspect::{DecomposeOptions, DecomposedMember, DecomposedObject, Value};

/// Decompose `value` with its members. `None` options use the defaults.
pub fn decompose(value: &Value, options: Option<&DecomposeOptions>) -> DecomposedObject {
	with_defaults(options, |options| decompose_with_context(value, options))
}

/// Decompose the identity of `value` without walking its members.
pub fn decompose_object(value: &Value, options: Option<&DecomposeOptions>) -> DecomposedObject {
	with_defaults(options, |options| decompose_object_with_context(value, options))
}

/// Decompose the members of `value` without the wrapping object node.
pub fn decompose_members(value: &Value, options: Option<&DecomposeOptions>) -> Vec<DecomposedMember> {
	with_defaults(options, |options| decompose_members_with_context(value, options))
}

/// Context-aware [`decompose`].
pub fn decompose_with_context<C>(value: &Value, options: &DecomposeOptions<C>) -> DecomposedObject<C> {
	let Some(root) = Root::prepare(value, options) else {
		return DecomposedObject::nothing();
	};
	let composer = Composer::new(&root, options);

	let _span = tracing::debug_span!("decompose", input = %composer.input_type_name(), walk = composer.walk().name()).entered();
	composer.decompose()
}

/// Context-aware [`decompose_object`].
pub fn decompose_object_with_context<C>(value: &Value, options: &DecomposeOptions<C>) -> DecomposedObject<C> {
	let Some(root) = Root::prepare(value, options) else {
		return DecomposedObject::nothing();
	};
	let composer = Composer::new(&root, options);

	let _span = tracing::debug_span!("decompose_object", input = %composer.input_type_name()).entered();
	composer.decompose_object()
}

/// Context-aware [`decompose_members`].
pub fn decompose_members_with_context<C>(value: &Value, options: &DecomposeOptions<C>) -> Vec<DecomposedMember<C>> {
	let Some(root) = Root::prepare(value, options) else {
		return Vec::new();
	};
	let mut composer = Composer::new(&root, options);

	let _span = tracing::debug_span!("decompose_members", input = %composer.input_type_name(), walk = composer.walk().name()).entered();
	composer.decompose_members()
}

fn with_defaults<R>(options: Option<&DecomposeOptions>, run: impl FnOnce(&DecomposeOptions) -> R) -> R {
	match options {
		Some(options) => run(options),
		None => run(&DecomposeOptions::default()),
	}
}
