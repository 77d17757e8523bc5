use crate::inspect::{ParameterInfo, TypeInfo};

/// Render a type name, expanding generic arguments as `Name<Arg1, Arg2>`.
pub fn format_type_name(ty: &TypeInfo) -> String {
	if !ty.is_generic() {
		return ty.name().to_owned();
	}

	let args = ty.generic_args().iter().map(|arg| format_type_name(arg)).collect::<Vec<_>>();
	format!("{}<{}>", ty.name(), args.join(", "))
}

/// Render a member name qualified by its parameter types, `name (A, ref B)`.
pub fn format_member_name(name: &str, parameters: &[ParameterInfo]) -> String {
	if parameters.is_empty() {
		return name.to_owned();
	}

	let rendered = parameters
		.iter()
		.map(|parameter| {
			let type_name = format_type_name(&parameter.parameter_type);
			if parameter.by_ref { format!("ref {type_name}") } else { type_name }
		})
		.collect::<Vec<_>>();
	format!("{name} ({})", rendered.join(", "))
}
