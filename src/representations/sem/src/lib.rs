mod enumeration;
mod fqn;
mod function;
mod matcher;
mod stage;
mod template_param;
mod type_decl;

pub use ast::IntrinsicKind;
pub use enumeration::{Enum, EnumEntry, EnumEntryRef};
pub use fqn::{FullyQualifiedName, Named, TemplateArg};
pub use function::{Function, Overload, Parameter};
pub use matcher::{EnumMatcher, TypeMatcher};
pub use stage::StageUses;
pub use template_param::{TemplateNumberParam, TemplateParam, TemplateTypeParam};
pub use type_decl::Type;

use arena::{Arena, Idx};
use itertools::Itertools;

pub type EnumRef = Idx<Enum>;
pub type TypeRef = Idx<Type>;
pub type TypeMatcherRef = Idx<TypeMatcher>;
pub type EnumMatcherRef = Idx<EnumMatcher>;
pub type FunctionRef = Idx<Function>;

/// The fully resolved semantic model of one definition file. Built once by
/// the resolver and read-only afterwards.
#[derive(Debug, Default)]
pub struct Sem {
    pub enums: Arena<Enum>,
    pub types: Arena<Type>,
    pub type_matchers: Arena<TypeMatcher>,
    pub enum_matchers: Arena<EnumMatcher>,
    pub functions: Arena<Function>,

    pub builtins: Vec<FunctionRef>,
    pub unary_operators: Vec<FunctionRef>,
    pub binary_operators: Vec<FunctionRef>,
    pub constructors_and_converters: Vec<FunctionRef>,

    /// Most template types/numbers declared by any single overload,
    /// consumed by the lookup-table matcher layout.
    pub max_template_types: usize,
    pub max_template_numbers: usize,
}

impl Sem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, entry: EnumEntryRef) -> &EnumEntry {
        &self.enums[entry.owner].entries[entry.index]
    }

    pub fn function_groups(&self) -> [&[FunctionRef]; 4] {
        [
            &self.builtins,
            &self.unary_operators,
            &self.binary_operators,
            &self.constructors_and_converters,
        ]
    }

    /// The name of a named entity. Template parameters are resolved
    /// against the overload that declares them.
    pub fn named_str<'a>(&'a self, named: Named, overload: &'a Overload) -> &'a str {
        match named {
            Named::Type(ty) => &self.types[ty].name,
            Named::TypeMatcher(matcher) => &self.type_matchers[matcher].name,
            Named::Enum(enum_) => &self.enums[enum_].name,
            Named::EnumEntry(entry) => &self.entry(entry).name,
            Named::EnumMatcher(matcher) => &self.enum_matchers[matcher].name,
            Named::TemplateType(i) => &overload.template_types[i].name,
            Named::TemplateNumber(i) => overload.template_numbers[i].name(),
        }
    }

    pub fn fqn_string(&self, fqn: &FullyQualifiedName, overload: &Overload) -> String {
        let name = self.named_str(fqn.target, overload);

        if fqn.template_args.is_empty() {
            return name.to_string();
        }

        format!(
            "{}<{}>",
            name,
            fqn.template_args
                .iter()
                .map(|arg| match arg {
                    TemplateArg::Name(fqn) => self.fqn_string(fqn, overload),
                    TemplateArg::Number(value) => value.to_string(),
                })
                .format(", ")
        )
    }

    /// Renders an overload signature, e.g.
    /// `fn clamp<T: fiu32>(T, T, T) -> T`.
    pub fn overload_signature(&self, function: &Function, overload: &Overload) -> String {
        let mut signature = format!("{} {}", overload.kind, function.name);

        let template_names: Vec<String> = overload
            .template_types
            .iter()
            .map(|param| match param.matcher {
                Some(matcher) => {
                    format!("{}: {}", param.name, self.type_matchers[matcher].name)
                }
                None => param.name.clone(),
            })
            .chain(overload.template_numbers.iter().map(|param| match param {
                TemplateNumberParam::Number { name } => format!("{}: num", name),
                TemplateNumberParam::Enum { name, enum_, matcher } => {
                    let constraint = match matcher {
                        Some(matcher) => &self.enum_matchers[*matcher].name,
                        None => &self.enums[*enum_].name,
                    };
                    format!("{}: {}", name, constraint)
                }
            }))
            .collect();

        if !template_names.is_empty() {
            signature.push_str(&format!("<{}>", template_names.iter().format(", ")));
        }

        signature.push_str(&format!(
            "({})",
            overload
                .parameters
                .iter()
                .map(|parameter| {
                    let ty = self.fqn_string(&parameter.ty, overload);
                    match &parameter.name {
                        Some(name) => format!("{}: {}", name, ty),
                        None => ty,
                    }
                })
                .format(", ")
        ));

        if let Some(return_type) = &overload.return_type {
            signature.push_str(&format!(" -> {}", self.fqn_string(return_type, overload)));
        }

        signature
    }
}
