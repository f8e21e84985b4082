use source_files::{Source, SourceFiles};

#[derive(Clone, Debug)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub source: Source,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LexErrorKind {
    UnterminatedString,
    UnexpectedCharacter(char),
}

impl LexErrorKind {
    pub fn at(self, source: Source) -> LexError {
        LexError { kind: self, source }
    }
}

impl LexError {
    // The two shapes differ (no ':' before "unterminated string"); both are
    // matched on by downstream tooling and must not change.
    pub fn message(&self, source_files: &SourceFiles) -> String {
        match &self.kind {
            LexErrorKind::UnterminatedString => {
                format!(
                    "{} unterminated string",
                    self.source.describe(source_files)
                )
            }
            LexErrorKind::UnexpectedCharacter(c) => {
                format!("{}: unexpected '{}'", self.source.describe(source_files), c)
            }
        }
    }
}
