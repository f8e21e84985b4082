use derivative::Derivative;
use itertools::Itertools;
use source_files::Source;
use std::fmt::Display;

/// An identifier with zero or more nested template arguments, e.g.
/// `ptr<storage, array<T>, A>`. The recurring shape for both concrete and
/// generic type usages.
#[derive(Clone, Debug, Derivative)]
#[derivative(PartialEq)]
pub struct TemplatedName {
    pub name: String,
    pub template_args: Vec<TemplatedName>,

    #[derivative(PartialEq = "ignore")]
    pub source: Source,
}

impl Display for TemplatedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;

        if !self.template_args.is_empty() {
            write!(f, "<{}>", self.template_args.iter().format(", "))?;
        }

        Ok(())
    }
}
