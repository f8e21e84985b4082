use super::decoration::{Decoration, write_decorations};
use derivative::Derivative;
use source_files::Source;
use std::fmt::Display;

#[derive(Clone, Debug, Derivative)]
#[derivative(PartialEq)]
pub struct EnumDecl {
    pub name: String,
    pub entries: Vec<EnumEntryDecl>,

    #[derivative(PartialEq = "ignore")]
    pub source: Source,
}

#[derive(Clone, Debug, Derivative)]
#[derivative(PartialEq)]
pub struct EnumEntryDecl {
    pub decorations: Vec<Decoration>,
    pub name: String,

    #[derivative(PartialEq = "ignore")]
    pub source: Source,
}

impl Display for EnumDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "enum {} {{", self.name)?;

        for entry in &self.entries {
            write!(f, "  ")?;
            write_decorations(f, &entry.decorations)?;
            writeln!(f, "{}", entry.name)?;
        }

        write!(f, "}}")
    }
}
