use std::sync::Arc;

use super::composer::Composer;
use crate::inspect::format::format_type_name;
use crate::inspect::{DecomposedMember, MemberAttributes, TypeInfo, Value};

impl<C> Composer<'_, C> {
	/// Append the elements of a composite input as indexed members.
	///
	/// A descriptor enumerator takes precedence over the value's own iteration.
	/// Strings are not iterated.
	pub(super) fn append_enumerable_items(&self, ty: &Arc<TypeInfo>, members: &mut Vec<DecomposedMember<C>>) {
		let input = self.input;
		let items: Box<dyn Iterator<Item = Value> + '_> = match self.root.descriptor.enumerator() {
			Some(enumerator) if enumerator.is_empty() => return,
			Some(enumerator) => enumerator.enumerate(),
			None => match input.iterate() {
				Some(items) => items,
				None => return,
			},
		};

		let depth = ty.hierarchy().len();
		let declaring_type_name = format_type_name(ty);
		let declaring_type_full_name = ty.full_name();

		for (index, item) in items.enumerate() {
			tracing::trace!(index, "appending enumerable item");
			members.push(DecomposedMember {
				name: index.to_string(),
				depth,
				declaring_type_name: declaring_type_name.clone(),
				declaring_type_full_name: declaring_type_full_name.clone(),
				attributes: MemberAttributes::empty(),
				computation_time: 0.0,
				allocated_bytes: 0,
				value: self.describe_value(item, ""),
			});
		}
	}
}
