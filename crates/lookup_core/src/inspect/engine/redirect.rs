use std::sync::Arc;

use super::composer::Composer;
use crate::inspect::format::format_type_name;
use crate::inspect::{DecomposeOptions, DecomposedValue, Descriptor, Value};

/// Follow descriptor redirectors from `value` for member `target`.
///
/// Returns the final value and its descriptor carrying the deepest description
/// seen along the chain, or `fallback` when no descriptor supplies one.
pub(super) fn redirect<C>(options: &DecomposeOptions<C>, mut value: Value, fallback: Option<Arc<str>>, target: &str) -> (Value, Descriptor<C>) {
	let mut descriptor = options.type_resolver.resolve(&value, None, &options.context);
	let mut description = descriptor.description.clone().or(fallback);

	if options.enable_redirection {
		while let Some(next) = descriptor.redirect(target, &options.context) {
			tracing::trace!(member = target, from = %descriptor.name, "redirecting value");
			value = next;
			descriptor = options.type_resolver.resolve(&value, None, &options.context);
			if descriptor.description.is_some() {
				description = descriptor.description.clone();
			}
		}
	}

	descriptor.description = description;
	(value, descriptor)
}

impl<C> Composer<'_, C> {
	/// Wrap a member's raw value, following redirections reached through member `target`.
	pub(super) fn describe_value(&self, value: Value, target: &str) -> DecomposedValue<C> {
		let (value, variant_description) = match value {
			Value::Variant(variant) => Arc::unwrap_or_clone(variant).into_parts(),
			other => (other, None),
		};
		if value.is_null() {
			return DecomposedValue::nothing(variant_description);
		}

		let (value, descriptor) = redirect(self.options, value, variant_description, target);
		let ty = value.type_info();
		DecomposedValue {
			name: descriptor.name.clone(),
			type_name: format_type_name(&ty),
			type_full_name: ty.full_name(),
			raw_value: value,
			description: descriptor.description.clone(),
			descriptor: Some(Arc::new(descriptor)),
		}
	}
}
