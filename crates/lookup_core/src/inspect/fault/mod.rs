use std::any::Any;
use std::error::Error;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

/// Classification of a captured evaluation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FaultKind {
	/// Failure raised by the inspected object itself.
	Evaluation,
	/// Wrapper raised by an invocation layer around an inner failure.
	Invocation,
	/// The member cannot be read in its current shape.
	InvalidOperation,
	/// The member shape is not supported by the engine.
	NotSupported,
	/// Evaluation was intentionally skipped by a descriptor.
	Disabled,
	/// Evaluation panicked.
	Panic,
}

impl FaultKind {
	/// Runtime type name used when a fault is rendered as a value.
	pub fn type_name(self) -> &'static str {
		match self {
			Self::Evaluation => "EvaluationFault",
			Self::Invocation => "InvocationFault",
			Self::InvalidOperation => "InvalidOperationFault",
			Self::NotSupported => "NotSupportedFault",
			Self::Disabled => "DisabledFault",
			Self::Panic => "PanicFault",
		}
	}
}

/// Failure captured while evaluating a member, resolver handler, or extension.
///
/// Faults are data: the engine stores them as member values instead of
/// propagating them out of a decomposition call.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct Fault {
	/// Failure classification.
	pub kind: FaultKind,
	/// Human-readable failure message.
	pub message: Arc<str>,
	/// Wrapped failure, if any.
	#[source]
	pub inner: Option<Box<Fault>>,
}

impl Fault {
	/// Create a fault of the given kind.
	pub fn new(kind: FaultKind, message: impl Into<Arc<str>>) -> Self {
		Self {
			kind,
			message: message.into(),
			inner: None,
		}
	}

	/// Failure raised by the inspected object.
	pub fn evaluation(message: impl Into<Arc<str>>) -> Self {
		Self::new(FaultKind::Evaluation, message)
	}

	/// Invocation wrapper around `inner`.
	pub fn invocation(inner: Fault) -> Self {
		Self {
			kind: FaultKind::Invocation,
			message: Arc::from("Fault has been raised by the target of an invocation"),
			inner: Some(Box::new(inner)),
		}
	}

	/// Member cannot be read in its current shape.
	pub fn invalid_operation(message: impl Into<Arc<str>>) -> Self {
		Self::new(FaultKind::InvalidOperation, message)
	}

	/// Member shape is not supported.
	pub fn not_supported(message: impl Into<Arc<str>>) -> Self {
		Self::new(FaultKind::NotSupported, message)
	}

	/// Sentinel for a member a descriptor chose not to evaluate.
	pub fn disabled() -> Self {
		Self::new(FaultKind::Disabled, "Member execution disabled")
	}

	/// Wrap `inner` as the cause of this fault.
	pub fn with_inner(mut self, inner: Fault) -> Self {
		self.inner = Some(Box::new(inner));
		self
	}

	/// Capture any error and its source chain.
	pub fn from_error(error: &(dyn Error + 'static)) -> Self {
		let mut fault = Self::evaluation(error.to_string());
		if let Some(source) = error.source() {
			fault.inner = Some(Box::new(Self::from_error(source)));
		}
		fault
	}

	/// Convert a panic payload caught during evaluation.
	pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
		let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
			Arc::from(*text)
		} else if let Some(text) = payload.downcast_ref::<String>() {
			Arc::from(text.as_str())
		} else {
			Arc::from("evaluation panicked")
		};
		Self {
			kind: FaultKind::Panic,
			message,
			inner: None,
		}
	}

	/// Strip an invocation wrapper and return the fault it carries.
	pub fn unwrap_invocation(self) -> Self {
		match self {
			Self {
				kind: FaultKind::Invocation,
				inner: Some(inner),
				..
			} => *inner,
			other => other,
		}
	}

	/// Whether this fault is the intentional "not evaluated" sentinel.
	pub fn is_disabled(&self) -> bool {
		self.kind == FaultKind::Disabled
	}

	/// Message shown for the fault: the inner message when non-empty, otherwise its own.
	pub fn display_message(&self) -> &str {
		match &self.inner {
			Some(inner) if !inner.message.is_empty() => &inner.message,
			_ => &self.message,
		}
	}
}
