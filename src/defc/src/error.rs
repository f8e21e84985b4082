use build_ast::ParseError;
use build_sem::ResolveError;
use build_token::LexError;
use source_files::SourceFiles;

/// Any stage's failure. Every stage stops at its first error; a failing
/// definition file never produces partial output.
#[derive(Debug)]
pub enum CompileError {
    Lex(LexError),
    Parse(ParseError),
    Resolve(ResolveError),
}

impl CompileError {
    /// Renders as `<file>:<line>:<column> <message>`, the textual contract
    /// downstream tooling matches on.
    pub fn message(&self, source_files: &SourceFiles) -> String {
        match self {
            Self::Lex(error) => error.message(source_files),
            Self::Parse(error) => error.message(source_files),
            Self::Resolve(error) => error.message(source_files),
        }
    }
}

impl From<LexError> for CompileError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for CompileError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<ResolveError> for CompileError {
    fn from(error: ResolveError) -> Self {
        Self::Resolve(error)
    }
}
