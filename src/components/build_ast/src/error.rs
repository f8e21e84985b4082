use source_files::{Source, SourceFiles};
use std::fmt::Display;

#[derive(Clone, Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub enum ParseErrorKind {
    UnexpectedToken { unexpected: String },
    Expected { expected: String, got: String },
    DecorationsNotAllowedHere,
}

impl ParseErrorKind {
    pub fn at(self, source: Source) -> ParseError {
        ParseError { kind: self, source }
    }
}

impl ParseError {
    pub fn message(&self, source_files: &SourceFiles) -> String {
        format!("{} {}", self.source.describe(source_files), self.kind)
    }
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { unexpected } => {
                write!(f, "unexpected token {}", unexpected)
            }
            Self::Expected { expected, got } => {
                write!(f, "expected {}, got {}", expected, got)
            }
            Self::DecorationsNotAllowedHere => {
                f.write_str("decorations are not valid here")
            }
        }
    }
}
