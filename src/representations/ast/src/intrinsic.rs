use super::decoration::{Decoration, write_decorations};
use super::templated_name::TemplatedName;
use derivative::Derivative;
use itertools::Itertools;
use source_files::Source;
use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Builtin,
    Operator,
    Constructor,
    Converter,
}

impl IntrinsicKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Builtin => "fn",
            Self::Operator => "op",
            Self::Constructor => "ctor",
            Self::Converter => "conv",
        }
    }
}

impl Display for IntrinsicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A function, operator, constructor or converter overload declaration.
#[derive(Clone, Debug, Derivative)]
#[derivative(PartialEq)]
pub struct IntrinsicDecl {
    pub kind: IntrinsicKind,
    pub decorations: Vec<Decoration>,
    pub name: String,
    pub template_params: Vec<TemplateParamDecl>,
    pub parameters: Vec<ParameterDecl>,
    pub return_type: Option<TemplatedName>,

    #[derivative(PartialEq = "ignore")]
    pub source: Source,
}

#[derive(Clone, Debug, Derivative)]
#[derivative(PartialEq)]
pub struct TemplateParamDecl {
    pub name: String,
    pub constraint: Option<TemplatedName>,

    #[derivative(PartialEq = "ignore")]
    pub source: Source,
}

#[derive(Clone, Debug, Derivative)]
#[derivative(PartialEq)]
pub struct ParameterDecl {
    pub name: Option<String>,
    pub ty: TemplatedName,

    #[derivative(PartialEq = "ignore")]
    pub source: Source,
}

impl Display for IntrinsicDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_decorations(f, &self.decorations)?;
        write!(f, "{} {}", self.kind, self.name)?;

        if !self.template_params.is_empty() {
            write!(f, "<{}>", self.template_params.iter().format(", "))?;
        }

        write!(f, "({})", self.parameters.iter().format(", "))?;

        if let Some(return_type) = &self.return_type {
            write!(f, " -> {}", return_type)?;
        }

        Ok(())
    }
}

impl Display for TemplateParamDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;

        if let Some(constraint) = &self.constraint {
            write!(f, ": {}", constraint)?;
        }

        Ok(())
    }
}

impl Display for ParameterDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{}: ", name)?;
        }

        write!(f, "{}", self.ty)
    }
}
