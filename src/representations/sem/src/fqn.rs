use super::{EnumEntryRef, EnumMatcherRef, EnumRef, TypeMatcherRef, TypeRef};

/// A reference to any named semantic entity. Template parameters are
/// indices into the declaring overload's partitioned parameter lists.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Named {
    Type(TypeRef),
    TypeMatcher(TypeMatcherRef),
    Enum(EnumRef),
    EnumEntry(EnumEntryRef),
    EnumMatcher(EnumMatcherRef),
    TemplateType(usize),
    TemplateNumber(usize),
}

/// A resolved target entity plus its resolved template arguments — the
/// semantic counterpart of the AST's templated name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FullyQualifiedName {
    pub target: Named,
    pub template_args: Vec<TemplateArg>,
}

/// One template argument. The resolver only ever produces names; number
/// arguments appear when the permuter binds an open number to a concrete
/// value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TemplateArg {
    Name(FullyQualifiedName),
    Number(u64),
}

impl FullyQualifiedName {
    pub fn plain(target: Named) -> Self {
        Self {
            target,
            template_args: Vec::new(),
        }
    }
}

impl TemplateArg {
    pub fn as_name(&self) -> Option<&FullyQualifiedName> {
        match self {
            Self::Name(fqn) => Some(fqn),
            Self::Number(_) => None,
        }
    }
}
