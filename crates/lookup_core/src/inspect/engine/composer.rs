use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use super::redirect::redirect;
use crate::inspect::diagnostic::Probe;
use crate::inspect::format::format_type_name;
use crate::inspect::{DecomposeOptions, DecomposedMember, DecomposedObject, Descriptor, Fault, TypeInfo, Value};

/// Whether the walk reads an instance or a type's static members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Walk {
	Instance,
	Static,
}

impl Walk {
	pub(super) fn name(self) -> &'static str {
		match self {
			Self::Instance => "instance",
			Self::Static => "static",
		}
	}
}

/// State of one hierarchy level, handed down the walk.
pub(super) struct Frame<'a, C> {
	/// Hierarchy depth of `level`; the root base type is 1.
	pub(super) depth: usize,
	/// Type whose declared members are walked.
	pub(super) level: Arc<TypeInfo>,
	/// Descriptor resolved for `level`.
	pub(super) descriptor: Descriptor<C>,
	/// Instance slice declared by `level`.
	pub(super) target: Option<&'a dyn Any>,
	pub(super) walk: Walk,
}

/// Input after variant unwrapping and redirection.
pub(super) struct Root<C> {
	pub(super) value: Value,
	/// Descriptor of `value`, carrying the deepest description on the redirect chain.
	pub(super) descriptor: Descriptor<C>,
}

impl<C> Root<C> {
	/// Root for `value`, or `None` when there is nothing to decompose.
	pub(super) fn prepare(value: &Value, options: &DecomposeOptions<C>) -> Option<Self> {
		let (value, description) = match value {
			Value::Variant(variant) => (variant.value().clone(), variant.description().map(Arc::from)),
			other => (other.clone(), None),
		};
		if value.is_null() {
			return None;
		}

		let (value, descriptor) = redirect(options, value, description, "");
		if value.is_null() {
			return None;
		}
		Some(Self { value, descriptor })
	}
}

/// Per-call decomposition engine.
pub(super) struct Composer<'a, C> {
	pub(super) root: &'a Root<C>,
	pub(super) input: &'a Value,
	pub(super) options: &'a DecomposeOptions<C>,
	pub(super) probe: Probe,
}

impl<'a, C> Composer<'a, C> {
	pub(super) fn new(root: &'a Root<C>, options: &'a DecomposeOptions<C>) -> Self {
		Self {
			root,
			input: &root.value,
			options,
			probe: Probe::default(),
		}
	}

	pub(super) fn walk(&self) -> Walk {
		match self.input {
			Value::Type(_) => Walk::Static,
			_ => Walk::Instance,
		}
	}

	/// The walked type: the type itself for static walks, the runtime type otherwise.
	pub(super) fn input_type(&self) -> Arc<TypeInfo> {
		match self.input {
			Value::Type(ty) => Arc::clone(ty),
			other => other.type_info(),
		}
	}

	pub(super) fn input_type_name(&self) -> String {
		format_type_name(&self.input_type())
	}

	pub(super) fn decompose(mut self) -> DecomposedObject<C> {
		let mut object = self.decompose_object();
		object.members = self.decompose_members();
		object
	}

	pub(super) fn decompose_object(&self) -> DecomposedObject<C> {
		let ty = self.input_type();
		let descriptor = self.root.descriptor.clone();

		DecomposedObject {
			name: descriptor.name.clone(),
			raw_value: self.input.clone(),
			type_name: format_type_name(&ty),
			type_full_name: ty.full_name(),
			description: descriptor.description.clone(),
			descriptor: Some(Arc::new(descriptor)),
			members: Vec::new(),
		}
	}

	pub(super) fn decompose_members(&mut self) -> Vec<DecomposedMember<C>> {
		let input = self.input;
		let ty = self.input_type();
		let mut members = Vec::new();

		match self.walk() {
			Walk::Static => self.walk_hierarchy(&ty, Walk::Static, None, &mut members),
			Walk::Instance => {
				let target = match input {
					Value::Object(object) => Some(object.as_any()),
					_ => None,
				};
				self.walk_hierarchy(&ty, Walk::Instance, target, &mut members);
				self.append_enumerable_items(&ty, &mut members);
			}
		}

		members
	}

	fn walk_hierarchy(&mut self, ty: &Arc<TypeInfo>, walk: Walk, mut target: Option<&'a dyn Any>, members: &mut Vec<DecomposedMember<C>>) {
		let hierarchy = ty.hierarchy();
		let total = hierarchy.len();

		for (index, level) in hierarchy.into_iter().enumerate() {
			let base_target = target.and_then(|value| level.upcast(value));
			if level.is_root() && !self.options.include_root {
				continue;
			}

			let depth = total - index;
			tracing::trace!(level = %level.full_name(), depth, "walking hierarchy level");

			let descriptor = self.resolve_descriptor(self.input, Some(&level));
			let frame = Frame {
				depth,
				level,
				descriptor,
				target,
				walk,
			};
			self.decompose_level(&frame, members);
			self.execute_extensions(&frame, members);

			target = base_target;
		}
	}

	pub(super) fn resolve_descriptor(&self, value: &Value, level: Option<&TypeInfo>) -> Descriptor<C> {
		self.options.type_resolver.resolve(value, level, &self.options.context)
	}

	/// Run `evaluator` under the diagnostics probes, turning a panic into a fault.
	pub(super) fn evaluate(&mut self, evaluator: impl FnOnce() -> Result<Value, Fault>) -> Result<Value, Fault> {
		self.probe
			.measure(|| panic::catch_unwind(AssertUnwindSafe(evaluator)).unwrap_or_else(|payload| Err(Fault::from_panic(payload))))
	}
}
