use super::templated_name::TemplatedName;
use derivative::Derivative;
use itertools::Itertools;
use source_files::Source;
use std::fmt::Display;

/// `match name: option | option | ...`
#[derive(Clone, Debug, Derivative)]
#[derivative(PartialEq)]
pub struct MatcherDecl {
    pub name: String,
    pub options: Vec<TemplatedName>,

    #[derivative(PartialEq = "ignore")]
    pub source: Source,
}

impl Display for MatcherDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "match {}: {}",
            self.name,
            self.options.iter().format(" | ")
        )
    }
}
