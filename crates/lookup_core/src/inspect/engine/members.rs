use super::composer::{Composer, Frame, Walk};
use crate::inspect::diagnostic::Measurement;
use crate::inspect::format::{format_member_name, format_type_name};
use crate::inspect::{Accessor, DecomposedMember, DecomposedValue, Descriptor, Fault, MemberAttributes, MemberInfo, MemberKind, ParameterInfo, Value};

/// How the engine handles a member nobody resolved.
enum Suppression<'m> {
	/// Readable through its own accessor.
	Evaluate(&'m Accessor),
	/// Not readable; surfaced as this fault only with `include_unsupported`.
	Unsupported(Fault),
}

fn suppress(member: &MemberInfo) -> Suppression<'_> {
	match &member.kind {
		MemberKind::Field { getter } => Suppression::Evaluate(getter),
		MemberKind::Property { getter: None, .. } => {
			Suppression::Unsupported(Fault::invalid_operation("Property does not have a get accessor, it cannot be read"))
		}
		MemberKind::Property { parameters, .. } if !parameters.is_empty() => Suppression::Unsupported(Fault::not_supported("Unsupported property overload")),
		MemberKind::Property { getter: Some(getter), .. } => Suppression::Evaluate(getter),
		MemberKind::Method { returns_void: true, .. } => Suppression::Unsupported(Fault::invalid_operation("Method doesn't return a value")),
		MemberKind::Method {
			invoker: Some(invoker),
			parameters,
			..
		} if parameters.is_empty() => Suppression::Evaluate(invoker),
		MemberKind::Method { .. } => Suppression::Unsupported(Fault::not_supported("Unsupported method overload")),
		MemberKind::Event { .. } => Suppression::Unsupported(Fault::not_supported("Events are not evaluated")),
	}
}

/// Parameters seen by resolvers and member names; a property without a getter exposes none.
fn signature(member: &MemberInfo) -> &[ParameterInfo] {
	match &member.kind {
		MemberKind::Property { getter: None, .. } => &[],
		_ => member.parameters(),
	}
}

/// Walk order of member kinds within one level.
fn kind_rank(member: &MemberInfo) -> u8 {
	match member.kind {
		MemberKind::Field { .. } => 0,
		MemberKind::Property { .. } => 1,
		MemberKind::Method { .. } => 2,
		MemberKind::Event { .. } => 3,
	}
}

fn member_attributes(member: &MemberInfo) -> MemberAttributes {
	let mut attributes = match member.kind {
		MemberKind::Field { .. } => MemberAttributes::FIELD,
		MemberKind::Property { .. } => MemberAttributes::PROPERTY,
		MemberKind::Method { .. } => MemberAttributes::METHOD,
		MemberKind::Event { .. } => MemberAttributes::EVENT,
	};
	if member.is_private {
		attributes |= MemberAttributes::PRIVATE;
	}
	if member.is_static {
		attributes |= MemberAttributes::STATIC;
	}
	attributes
}

impl<'a, C> Composer<'a, C> {
	pub(super) fn decompose_level(&mut self, frame: &Frame<'a, C>, members: &mut Vec<DecomposedMember<C>>) {
		let mut declared: Vec<&MemberInfo> = frame.level.members().iter().filter(|member| self.admits(member, frame.walk)).collect();
		declared.sort_by_key(|member| kind_rank(member));

		for member in declared {
			let Some(value) = self.evaluate_member(frame, member) else {
				continue;
			};
			let measurement = self.probe.take();
			let decomposed = self.write_member(
				frame,
				format_member_name(&member.name, signature(member)),
				member_attributes(member),
				self.describe_value(value, &member.name),
				measurement,
			);
			members.push(decomposed);
		}
	}

	fn admits(&self, member: &MemberInfo, walk: Walk) -> bool {
		if member.is_special || member.is_restricted {
			return false;
		}
		if member.is_private && !self.options.include_private_members {
			return false;
		}

		let in_scope = match walk {
			Walk::Static => member.is_static,
			Walk::Instance => !member.is_static || self.options.include_static_members,
		};
		if !in_scope {
			return false;
		}

		match member.kind {
			MemberKind::Field { .. } => self.options.include_fields,
			MemberKind::Event { .. } => self.options.include_events,
			MemberKind::Property { .. } | MemberKind::Method { .. } => true,
		}
	}

	/// Member value, or `None` when the member is suppressed.
	fn evaluate_member(&mut self, frame: &Frame<'a, C>, member: &MemberInfo) -> Option<Value> {
		if let MemberKind::Event { handler_type } = &member.kind {
			return Some(Value::from(format_type_name(handler_type)));
		}

		let outcome = match self.try_resolve(&frame.descriptor, &member.name, signature(member)) {
			Some(outcome) => outcome,
			None => match suppress(member) {
				Suppression::Evaluate(accessor) => {
					let input = self.input;
					let target = frame.target;
					self.evaluate(|| accessor.read(input, target))
				}
				Suppression::Unsupported(fault) if self.options.include_unsupported => Ok(Value::from(fault)),
				Suppression::Unsupported(fault) => {
					tracing::trace!(member = %member.name, reason = %fault, "member suppressed");
					return None;
				}
			},
		};

		Some(outcome.unwrap_or_else(|fault| {
			tracing::debug!(member = %member.name, level = %frame.level.full_name(), error = %fault, "member evaluation failed");
			Value::from(fault.unwrap_invocation())
		}))
	}

	/// Evaluate `target` through the descriptor's resolvers, context-free first.
	fn try_resolve(&mut self, descriptor: &Descriptor<C>, target: &str, parameters: &[ParameterInfo]) -> Option<Result<Value, Fault>> {
		if let Some(handler) = descriptor.resolver().and_then(|resolver| resolver.resolve(target, parameters)) {
			return Some(self.evaluate(handler));
		}

		let options = self.options;
		let handler = descriptor.context_resolver().and_then(|resolver| resolver.resolve(target, parameters))?;
		Some(self.evaluate(move || handler(&options.context)))
	}

	pub(super) fn write_member(
		&self,
		frame: &Frame<'a, C>,
		name: String,
		attributes: MemberAttributes,
		value: DecomposedValue<C>,
		measurement: Measurement,
	) -> DecomposedMember<C> {
		DecomposedMember {
			name,
			depth: frame.depth,
			declaring_type_name: format_type_name(&frame.level),
			declaring_type_full_name: frame.level.full_name(),
			attributes,
			computation_time: measurement.computation_time,
			allocated_bytes: measurement.allocated_bytes,
			value,
		}
	}
}
