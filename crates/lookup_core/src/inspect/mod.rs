mod descriptor;
/// Time and allocation probes around member evaluation.
pub mod diagnostic;
mod engine;
mod fault;
mod format;
mod metadata;
mod options;
mod types;
mod value;
mod variant;

/// Descriptors, their capabilities, and the type resolver contract.
pub use descriptor::{
	ContextExtension, ContextExtensionManager, ContextHandler, ContextRedirector, ContextResolver, Descriptor, DescriptorEnumerator,
	DescriptorExtension, DescriptorRedirector, DescriptorResolver, ExtensionManager, FallbackResolver, Handler, TypeResolver,
};
/// Decomposition entry points.
pub use engine::{
	decompose, decompose_members, decompose_members_with_context, decompose_object, decompose_object_with_context,
	decompose_with_context,
};
/// Captured evaluation failures.
pub use fault::{Fault, FaultKind};
/// Display names for types and members.
pub use format::{format_member_name, format_type_name};
/// Output tree nodes.
pub use metadata::{DecomposedMember, DecomposedObject, DecomposedValue, MemberAttributes};
/// Walk configuration.
pub use options::DecomposeOptions;
/// Runtime type metadata.
pub use types::{Accessor, InstanceReader, MemberInfo, MemberKind, ParameterInfo, Projection, StaticReader, TypeBuilder, TypeInfo, ValueReader};
/// Runtime values.
pub use value::{Object, Value};
/// Evaluated-value containers.
pub use variant::{Variant, Variants};
