use derivative::Derivative;
use itertools::Itertools;
use num_bigint::BigInt;
use source_files::Source;
use std::fmt::Display;

/// A `@name(...)` / `[[name(...)]]` decoration, not yet interpreted. The
/// resolver drains these; leftovers are an error.
#[derive(Clone, Debug, Derivative)]
#[derivative(PartialEq)]
pub struct Decoration {
    pub name: String,
    pub values: Vec<DecorationValue>,

    #[derivative(PartialEq = "ignore")]
    pub source: Source,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DecorationValue {
    Str(String),
    Ident(String),
    Integer(BigInt),
}

impl Display for Decoration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.name)?;

        if !self.values.is_empty() {
            write!(f, "({})", self.values.iter().format(", "))?;
        }

        Ok(())
    }
}

impl Display for DecorationValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(value) => write!(f, "\"{}\"", value),
            Self::Ident(name) => write!(f, "{}", name),
            Self::Integer(value) => write!(f, "{}", value),
        }
    }
}

pub(crate) fn write_decorations(
    f: &mut std::fmt::Formatter<'_>,
    decorations: &[Decoration],
) -> std::fmt::Result {
    for decoration in decorations {
        write!(f, "{} ", decoration)?;
    }
    Ok(())
}
