//! Predicates and accessors exposed to the template-evaluation context
//! that renders the tables as target-language source.

use sem::{FullyQualifiedName, Overload, Sem, TemplateArg};

/// Splits a display-name decoration into parts, where text wrapped in `{}`
/// braces is emitted unquoted and everything else is quoted. For example
/// `"vec{N}<{T}>"` becomes `["\"vec\"", "N", "\"<\"", "T", "\">\""]`.
pub fn split_display_name(display_name: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut pending = String::new();

    for c in display_name.chars() {
        match c {
            '{' => {
                if !pending.is_empty() {
                    parts.push(format!("\"{}\"", pending));
                    pending.clear();
                }
            }
            '}' => {
                if !pending.is_empty() {
                    parts.push(pending.clone());
                    pending.clear();
                }
            }
            _ => pending.push(c),
        }
    }

    if !pending.is_empty() {
        parts.push(format!("\"{}\"", pending));
    }

    parts
}

fn name_arg<'a>(fqn: &'a FullyQualifiedName, index: usize) -> Option<&'a FullyQualifiedName> {
    fqn.template_args.get(index).and_then(TemplateArg::as_name)
}

/// The nested element type of a composite type; non-composites return
/// themselves.
pub fn element_type<'a>(
    sem: &Sem,
    fqn: &'a FullyQualifiedName,
    overload: &Overload,
) -> &'a FullyQualifiedName {
    let element = match sem.named_str(fqn.target, overload) {
        "vec2" | "vec3" | "vec4" => name_arg(fqn, 0),
        "vec" => name_arg(fqn, 1),
        "mat" => name_arg(fqn, 2),
        "array" => name_arg(fqn, 0),
        _ => None,
    };

    element.unwrap_or(fqn)
}

/// The innermost nested element type, descending through vectors,
/// matrices, arrays and pointers.
pub fn deepest_element_type<'a>(
    sem: &Sem,
    fqn: &'a FullyQualifiedName,
    overload: &Overload,
) -> &'a FullyQualifiedName {
    let element = match sem.named_str(fqn.target, overload) {
        "vec2" | "vec3" | "vec4" => name_arg(fqn, 0),
        "vec" => name_arg(fqn, 1),
        "mat2x2" | "mat2x3" | "mat2x4" | "mat3x2" | "mat3x3" | "mat3x4" | "mat4x2" | "mat4x3"
        | "mat4x4" => name_arg(fqn, 0),
        "mat" => name_arg(fqn, 2),
        "array" => name_arg(fqn, 0),
        "ptr" => name_arg(fqn, 1),
        _ => None,
    };

    match element {
        Some(element) => deepest_element_type(sem, element, overload),
        None => fqn,
    }
}

/// Whether the name refers to one of the abstract numeric types.
pub fn is_abstract(sem: &Sem, fqn: &FullyQualifiedName, overload: &Overload) -> bool {
    matches!(sem.named_str(fqn.target, overload), "ia" | "fa")
}

/// Whether the type can be spelled in user programs: concrete and not
/// named with a leading underscore.
pub fn is_declarable(sem: &Sem, fqn: &FullyQualifiedName, overload: &Overload) -> bool {
    !is_abstract(sem, deepest_element_type(sem, fqn, overload), overload)
        && !sem.named_str(fqn.target, overload).starts_with('_')
}

/// Whether the type can be shared with the host.
pub fn is_host_shareable(sem: &Sem, fqn: &FullyQualifiedName, overload: &Overload) -> bool {
    is_declarable(sem, fqn, overload)
        && sem.named_str(deepest_element_type(sem, fqn, overload).target, overload) != "bool"
}

/// Whether the overload mentions the `f16` type anywhere in its signature.
pub fn overload_uses_f16(sem: &Sem, overload: &Overload) -> bool {
    overload
        .parameters
        .iter()
        .map(|parameter| &parameter.ty)
        .chain(&overload.return_type)
        .any(|ty| {
            sem.named_str(deepest_element_type(sem, ty, overload).target, overload) == "f16"
        })
}
