use source_files::{Source, SourceFiles};
use std::fmt::Display;

#[derive(Clone, Debug)]
pub struct ResolveError {
    pub kind: ResolveErrorKind,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub enum ResolveErrorKind {
    Unresolved {
        name: String,
    },
    AlreadyDeclared {
        name: String,
        first: Source,
    },
    UnknownDecoration {
        name: String,
    },
    InvalidDecorationValues {
        name: String,
    },
    InvalidStage {
        stage: String,
    },
    TemplateArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    IncompatibleTemplateArg {
        arg_kind: &'static str,
        arg_name: String,
        param_family: &'static str,
    },
    InvalidTemplateParamConstraint {
        name: String,
    },
    InvalidMatcherOption {
        name: String,
    },
    MatcherMixesEnums {
        name: String,
    },
    InvalidReturnType {
        name: String,
    },
    InvalidOperatorParameterCount {
        name: String,
    },
}

impl ResolveErrorKind {
    pub fn at(self, source: Source) -> ResolveError {
        ResolveError { kind: self, source }
    }
}

impl ResolveError {
    pub fn message(&self, source_files: &SourceFiles) -> String {
        let message = format!("{} {}", self.source.describe(source_files), self.kind);

        if let ResolveErrorKind::AlreadyDeclared { first, .. } = &self.kind {
            return format!(
                "{}\nFirst declared here: {}",
                message,
                first.describe(source_files)
            );
        }

        message
    }
}

impl Display for ResolveErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unresolved { name } => {
                write!(f, "cannot resolve '{}'", name)
            }
            Self::AlreadyDeclared { name, .. } => {
                write!(f, "'{}' already declared", name)
            }
            Self::UnknownDecoration { name } => {
                write!(f, "unknown decoration '{}'", name)
            }
            Self::InvalidDecorationValues { name } => {
                write!(f, "invalid values for decoration '{}'", name)
            }
            Self::InvalidStage { stage } => {
                write!(f, "invalid stage '{}'", stage)
            }
            Self::TemplateArityMismatch {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "'{}' requires {} template arguments, but {} were provided",
                    name, expected, got
                )
            }
            Self::IncompatibleTemplateArg {
                arg_kind,
                arg_name,
                param_family,
            } => {
                write!(
                    f,
                    "cannot use {} '{}' as template {}",
                    arg_kind, arg_name, param_family
                )
            }
            Self::InvalidTemplateParamConstraint { name } => {
                write!(f, "invalid template parameter constraint '{}'", name)
            }
            Self::InvalidMatcherOption { name } => {
                write!(f, "invalid matcher option '{}'", name)
            }
            Self::MatcherMixesEnums { name } => {
                write!(f, "matcher option '{}' comes from a different enum", name)
            }
            Self::InvalidReturnType { name } => {
                write!(f, "cannot use '{}' as return type", name)
            }
            Self::InvalidOperatorParameterCount { name } => {
                write!(f, "operator '{}' must have one or two parameters", name)
            }
        }
    }
}
