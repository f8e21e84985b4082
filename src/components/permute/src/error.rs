use source_files::{Source, SourceFiles};
use std::fmt::Display;

#[derive(Clone, Debug)]
pub struct PermuteError {
    pub kind: PermuteErrorKind,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub enum PermuteErrorKind {
    /// An open parameter or template argument has no legal bindings.
    NoBindings { param: String },
    /// Two assignments produced the same description; the overload has an
    /// open dimension that does not affect the signature.
    DuplicatePermutation { desc: String },
    /// Internal consistency failure, always reported with both offending
    /// descriptions.
    HashCollision {
        hash: String,
        first: String,
        second: String,
    },
}

impl PermuteErrorKind {
    pub fn at(self, source: Source) -> PermuteError {
        PermuteError { kind: self, source }
    }
}

impl PermuteError {
    pub fn message(&self, source_files: &SourceFiles) -> String {
        format!("{} {}", self.source.describe(source_files), self.kind)
    }
}

impl Display for PermuteErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoBindings { param } => {
                write!(f, "no legal bindings for '{}'", param)
            }
            Self::DuplicatePermutation { desc } => {
                write!(f, "duplicate permutation '{}'", desc)
            }
            Self::HashCollision {
                hash,
                first,
                second,
            } => {
                write!(
                    f,
                    "permutation hash '{}' collides for '{}' and '{}'. \
                     Increase the hash length passed to Permuter::with_hash_length()",
                    hash, first, second
                )
            }
        }
    }
}
