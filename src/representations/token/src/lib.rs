use derivative::Derivative;
use derive_more::{Deref, IsVariant};
use num_bigint::BigInt;
use source_files::Source;
use std::fmt::Display;

#[derive(Clone, Debug, Deref, Derivative)]
#[derivative(PartialEq)]
pub struct Token {
    #[deref]
    pub kind: TokenKind,

    #[derivative(PartialEq = "ignore")]
    pub source: Source,
}

impl Token {
    pub fn new(kind: TokenKind, source: Source) -> Self {
        Self { kind, source }
    }

    pub fn is_end_of_file(&self) -> bool {
        self.kind.is_end_of_file()
    }
}

#[derive(Clone, Debug, PartialEq, IsVariant)]
pub enum TokenKind {
    EndOfFile,
    Identifier(String),
    String(String),
    Integer(BigInt),
    Float(f64),
    FnKeyword,
    OpKeyword,
    CtorKeyword,
    ConvKeyword,
    TypeKeyword,
    EnumKeyword,
    MatchKeyword,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    LessThan,
    GreaterThan,
    Comma,
    Colon,
    Arrow,
    Vbar,
    VbarVbar,
    Amp,
    AmpAmp,
    Subtract,
    Not,
    Equals,
    NotEquals,
    LessThanEq,
    GreaterThanEq,
    ShiftLeft,
    ShiftRight,
    At,
    AttrLeft,
    AttrRight,
}

impl TokenKind {
    pub fn at(self, source: Source) -> Token {
        Token { kind: self, source }
    }

    pub fn unwrap_identifier(self) -> String {
        match self {
            Self::Identifier(name) => name,
            _ => panic!("expected identifier token"),
        }
    }

    /// The punctuation tokens usable as operator-declaration names.
    pub fn is_operator_symbol(&self) -> bool {
        matches!(
            self,
            Self::Vbar
                | Self::VbarVbar
                | Self::Amp
                | Self::AmpAmp
                | Self::Subtract
                | Self::Not
                | Self::Equals
                | Self::NotEquals
                | Self::LessThan
                | Self::GreaterThan
                | Self::LessThanEq
                | Self::GreaterThanEq
                | Self::ShiftLeft
                | Self::ShiftRight
        )
    }

    /// The text this token matched, for tokens whose spelling is fixed.
    pub fn fixed_spelling(&self) -> Option<&'static str> {
        Some(match self {
            Self::FnKeyword => "fn",
            Self::OpKeyword => "op",
            Self::CtorKeyword => "ctor",
            Self::ConvKeyword => "conv",
            Self::TypeKeyword => "type",
            Self::EnumKeyword => "enum",
            Self::MatchKeyword => "match",
            Self::OpenCurly => "{",
            Self::CloseCurly => "}",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Arrow => "->",
            Self::Vbar => "|",
            Self::VbarVbar => "||",
            Self::Amp => "&",
            Self::AmpAmp => "&&",
            Self::Subtract => "-",
            Self::Not => "!",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::LessThanEq => "<=",
            Self::GreaterThanEq => ">=",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::At => "@",
            Self::AttrLeft => "[[",
            Self::AttrRight => "]]",
            _ => return None,
        })
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfFile => f.write_str("end-of-file"),
            Self::Identifier(name) => write!(f, "'{}'", name),
            Self::String(value) => write!(f, "'\"{}\"'", value),
            Self::Integer(value) => write!(f, "'{}'", value),
            Self::Float(value) => write!(f, "'{}'", value),
            kind => write!(f, "'{}'", kind.fixed_spelling().unwrap()),
        }
    }
}
