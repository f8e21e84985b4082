mod error;
mod validate;

pub use error::{PermuteError, PermuteErrorKind};

use itertools::Itertools;
use rustc_hash::FxHasher;
use sem::{
    Function, FullyQualifiedName, Named, Overload, Parameter, Sem, StageUses, TemplateArg,
    TemplateNumberParam,
};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use validate::validate;

/// Open numbers are bound to the vector/matrix arity domain.
const NUMBER_DOMAIN: [u64; 3] = [2, 3, 4];

/// One fully concrete instantiation of a generic overload.
#[derive(Clone, Debug)]
pub struct Permutation {
    /// Canonical signature description, e.g. `fn clamp(f32, f32, f32) -> f32`.
    pub desc: String,
    /// Truncated hex hash of the description, unique within the overload.
    pub hash: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<FullyQualifiedName>,
    pub can_be_used_in_stage: StageUses,
}

/// Expands generic overloads into their concrete permutations.
pub struct Permuter<'a> {
    sem: &'a Sem,
    /// The catalog of declared types an unconstrained open type ranges
    /// over: every type declared without template parameters.
    all_types: Vec<FullyQualifiedName>,
    hash_length: usize,
}

#[derive(Clone, Debug)]
enum Binding {
    Name(FullyQualifiedName),
    Number(u64),
}

impl<'a> Permuter<'a> {
    pub const DEFAULT_HASH_LENGTH: usize = 6;

    pub fn new(sem: &'a Sem) -> Self {
        Self::with_hash_length(sem, Self::DEFAULT_HASH_LENGTH)
    }

    /// A collision between two permutations is resolved by raising the
    /// hash length, so it stays a caller-provided knob.
    pub fn with_hash_length(sem: &'a Sem, hash_length: usize) -> Self {
        let all_types = sem
            .types
            .indices()
            .filter(|&ty| sem.types[ty].template_params.is_empty())
            .map(|ty| FullyQualifiedName::plain(Named::Type(ty)))
            .collect();

        Self {
            sem,
            all_types,
            hash_length,
        }
    }

    /// Produces every concrete instantiation implied by the overload's
    /// open types, numbers and enums, in declaration order.
    pub fn permute(
        &self,
        function: &Function,
        overload: &Overload,
    ) -> Result<Vec<Permutation>, PermuteError> {
        let dimensions = self.dimensions(overload)?;

        let assignments: Vec<Vec<&Binding>> = if dimensions.is_empty() {
            vec![Vec::new()]
        } else {
            dimensions
                .iter()
                .map(|(_, candidates)| candidates.iter())
                .multi_cartesian_product()
                .collect()
        };

        let mut permutations = Vec::new();
        let mut seen: HashMap<String, String> = HashMap::new();

        for assignment in assignments {
            let bindings: HashMap<Named, &Binding> = dimensions
                .iter()
                .map(|(key, _)| *key)
                .zip(assignment)
                .collect();

            let mut uses = overload.can_be_used_in_stage;

            let Some(parameters) = overload
                .parameters
                .iter()
                .map(|parameter| {
                    let ty = substitute(&parameter.ty, &bindings)?;
                    validate(self.sem, &ty, overload, &mut uses).then(|| Parameter {
                        name: parameter.name.clone(),
                        ty,
                    })
                })
                .collect::<Option<Vec<_>>>()
            else {
                continue;
            };

            // The return type is bound last.
            let return_type = match &overload.return_type {
                Some(fqn) => match substitute(fqn, &bindings) {
                    Some(ty) if validate(self.sem, &ty, overload, &mut uses) => Some(ty),
                    _ => continue,
                },
                None => None,
            };

            let desc = self.description(function, overload, &parameters, &return_type);
            let hash = self.short_hash(&desc);

            match seen.get(&hash) {
                Some(first) if *first == desc => {
                    return Err(PermuteErrorKind::DuplicatePermutation { desc }
                        .at(overload.source));
                }
                Some(first) => {
                    return Err(PermuteErrorKind::HashCollision {
                        hash,
                        first: first.clone(),
                        second: desc,
                    }
                    .at(overload.source));
                }
                None => {
                    seen.insert(hash.clone(), desc.clone());
                }
            }

            permutations.push(Permutation {
                desc,
                hash,
                parameters,
                return_type,
                can_be_used_in_stage: uses,
            });
        }

        Ok(permutations)
    }

    /// One generator per open dimension, each listing the dimension's
    /// legal bindings. A dimension with no candidates is fatal.
    fn dimensions(&self, overload: &Overload) -> Result<Vec<(Named, Vec<Binding>)>, PermuteError> {
        let mut dimensions = Vec::new();

        for (i, param) in overload.template_types.iter().enumerate() {
            let candidates: Vec<Binding> = match param.matcher {
                Some(matcher) => self.sem.type_matchers[matcher]
                    .options
                    .iter()
                    .map(|&ty| Binding::Name(FullyQualifiedName::plain(Named::Type(ty))))
                    .collect(),
                None => self.all_types.iter().cloned().map(Binding::Name).collect(),
            };

            if candidates.is_empty() {
                return Err(PermuteErrorKind::NoBindings {
                    param: param.name.clone(),
                }
                .at(overload.source));
            }

            dimensions.push((Named::TemplateType(i), candidates));
        }

        for (i, param) in overload.template_numbers.iter().enumerate() {
            let candidates: Vec<Binding> = match param {
                TemplateNumberParam::Number { .. } => {
                    NUMBER_DOMAIN.iter().map(|&n| Binding::Number(n)).collect()
                }
                TemplateNumberParam::Enum { enum_, matcher, .. } => {
                    let entries: Vec<sem::EnumEntryRef> = match matcher {
                        Some(matcher) => self.sem.enum_matchers[*matcher].options.clone(),
                        None => (0..self.sem.enums[*enum_].entries.len())
                            .map(|index| sem::EnumEntryRef {
                                owner: *enum_,
                                index,
                            })
                            .collect(),
                    };

                    entries
                        .into_iter()
                        .map(|entry| {
                            Binding::Name(FullyQualifiedName::plain(Named::EnumEntry(entry)))
                        })
                        .collect()
                }
            };

            if candidates.is_empty() {
                return Err(PermuteErrorKind::NoBindings {
                    param: param.name().to_string(),
                }
                .at(overload.source));
            }

            dimensions.push((Named::TemplateNumber(i), candidates));
        }

        Ok(dimensions)
    }

    fn description(
        &self,
        function: &Function,
        overload: &Overload,
        parameters: &[Parameter],
        return_type: &Option<FullyQualifiedName>,
    ) -> String {
        let mut desc = format!("{} {}(", overload.kind, function.name);

        desc.push_str(
            &parameters
                .iter()
                .map(|parameter| {
                    let ty = self.sem.fqn_string(&parameter.ty, overload);
                    match &parameter.name {
                        Some(name) => format!("{}: {}", name, ty),
                        None => ty,
                    }
                })
                .format(", ")
                .to_string(),
        );

        desc.push(')');

        if let Some(return_type) = return_type {
            desc.push_str(" -> ");
            desc.push_str(&self.sem.fqn_string(return_type, overload));
        }

        desc
    }

    fn short_hash(&self, desc: &str) -> String {
        let mut hasher = FxHasher::default();
        desc.hash(&mut hasher);

        let hex = format!("{:016x}", hasher.finish());
        hex[..self.hash_length.min(hex.len())].to_string()
    }
}

/// Rewrites a fully-qualified name with every open type/number/enum
/// replaced by its bound value. Returns `None` for shapes with no concrete
/// counterpart (a bare number in type position).
fn substitute(
    fqn: &FullyQualifiedName,
    bindings: &HashMap<Named, &Binding>,
) -> Option<FullyQualifiedName> {
    if let Some(binding) = bindings.get(&fqn.target) {
        return match binding {
            Binding::Name(bound) => Some(bound.clone()),
            Binding::Number(_) => None,
        };
    }

    let template_args = fqn
        .template_args
        .iter()
        .map(|arg| match arg {
            TemplateArg::Name(inner) => {
                if let Some(Binding::Number(value)) = bindings.get(&inner.target) {
                    return Some(TemplateArg::Number(*value));
                }

                Some(TemplateArg::Name(substitute(inner, bindings)?))
            }
            TemplateArg::Number(value) => Some(TemplateArg::Number(*value)),
        })
        .collect::<Option<Vec<_>>>()?;

    Some(FullyQualifiedName {
        target: fqn.target,
        template_args,
    })
}
