use sem::{FullyQualifiedName, Overload, Sem, StageUses, TemplateArg};

/// Domain validity rules for a fully concrete type usage. These encode
/// external language semantics not derivable from the definition file
/// itself; the rule set must be preserved exactly.
pub(crate) fn validate(
    sem: &Sem,
    fqn: &FullyQualifiedName,
    overload: &Overload,
    uses: &mut StageUses,
) -> bool {
    let name = sem.named_str(fqn.target, overload);

    // Leading-underscore targets are not user-declarable.
    if name.starts_with('_') {
        return false;
    }

    match name {
        "array" => {
            if let Some(TemplateArg::Name(element)) = fqn.template_args.first() {
                let element = sem.named_str(element.target, overload);

                // Not storable as array elements.
                if element == "bool"
                    || element.starts_with("sampler")
                    || element.starts_with("texture")
                {
                    return false;
                }
            }
        }
        "ptr" => {
            if let (Some(TemplateArg::Name(storage)), Some(TemplateArg::Name(access))) =
                (fqn.template_args.first(), fqn.template_args.get(2))
            {
                let storage = sem.named_str(storage.target, overload);
                let access = sem.named_str(access.target, overload);

                match storage {
                    "function" | "private" => {
                        if access != "read_write" {
                            return false;
                        }
                    }
                    "workgroup" => {
                        uses.vertex = false;
                        uses.fragment = false;

                        if access != "read_write" {
                            return false;
                        }
                    }
                    "uniform" => {
                        if access != "read" {
                            return false;
                        }
                    }
                    "storage" => {
                        if access != "read" && access != "read_write" {
                            return false;
                        }
                    }
                    _ => return false,
                }
            }
        }
        _ => {}
    }

    fqn.template_args.iter().all(|arg| match arg {
        TemplateArg::Name(inner) => validate(sem, inner, overload, uses),
        TemplateArg::Number(_) => true,
    })
}
