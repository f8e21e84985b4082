use super::decoration::{Decoration, write_decorations};
use super::intrinsic::TemplateParamDecl;
use derivative::Derivative;
use itertools::Itertools;
use source_files::Source;
use std::fmt::Display;

#[derive(Clone, Debug, Derivative)]
#[derivative(PartialEq)]
pub struct TypeDecl {
    pub decorations: Vec<Decoration>,
    pub name: String,
    pub template_params: Vec<TemplateParamDecl>,

    #[derivative(PartialEq = "ignore")]
    pub source: Source,
}

impl Display for TypeDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_decorations(f, &self.decorations)?;
        write!(f, "type {}", self.name)?;

        if !self.template_params.is_empty() {
            write!(f, "<{}>", self.template_params.iter().format(", "))?;
        }

        Ok(())
    }
}
