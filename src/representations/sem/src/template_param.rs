use super::{EnumMatcherRef, EnumRef, TypeMatcherRef};

/// An open type on an overload (or a type parameter on a type
/// declaration), optionally constrained to a type matcher.
#[derive(Clone, Debug)]
pub struct TemplateTypeParam {
    pub name: String,
    pub matcher: Option<TypeMatcherRef>,
}

/// An open number or open enum. Both occupy the "number" partition of an
/// overload's template parameters.
#[derive(Clone, Debug)]
pub enum TemplateNumberParam {
    Number {
        name: String,
    },
    Enum {
        name: String,
        enum_: EnumRef,
        matcher: Option<EnumMatcherRef>,
    },
}

impl TemplateNumberParam {
    pub fn name(&self) -> &str {
        match self {
            Self::Number { name } => name,
            Self::Enum { name, .. } => name,
        }
    }
}

/// A template parameter as declared on a type declaration, where the two
/// partitions are not needed.
#[derive(Clone, Debug)]
pub enum TemplateParam {
    Type(TemplateTypeParam),
    Number(TemplateNumberParam),
}

impl TemplateParam {
    pub fn name(&self) -> &str {
        match self {
            Self::Type(param) => &param.name,
            Self::Number(param) => param.name(),
        }
    }
}
