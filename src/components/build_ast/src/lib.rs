mod error;
mod input;
mod parse_decoration;
mod parse_enum;
mod parse_intrinsic;
mod parse_matcher;
mod parse_templated_name;
mod parse_type;
mod parse_util;

pub use error::{ParseError, ParseErrorKind};
pub use input::Input;

use ast::{File, IntrinsicKind};
use token::{Token, TokenKind};

/// Parses a lexed definition file. Recursive descent, first error aborts.
pub fn parse(tokens: Vec<Token>) -> Result<File, ParseError> {
    Parser::new(Input::new(tokens)).parse()
}

pub struct Parser {
    pub input: Input,
}

impl Parser {
    pub fn new(input: Input) -> Self {
        Self { input }
    }

    pub fn parse(&mut self) -> Result<File, ParseError> {
        let mut file = File::default();

        while !self.input.peek().is_end_of_file() {
            self.parse_declaration(&mut file)?;
        }

        Ok(file)
    }

    fn parse_declaration(&mut self, file: &mut File) -> Result<(), ParseError> {
        let decorations = self.parse_decorations()?;

        match self.input.peek().kind.clone() {
            TokenKind::EnumKeyword => {
                if let Some(decoration) = decorations.first() {
                    return Err(ParseErrorKind::DecorationsNotAllowedHere.at(decoration.source));
                }
                file.enums.push(self.parse_enum()?);
            }
            TokenKind::MatchKeyword => {
                if let Some(decoration) = decorations.first() {
                    return Err(ParseErrorKind::DecorationsNotAllowedHere.at(decoration.source));
                }
                file.matchers.push(self.parse_matcher()?);
            }
            TokenKind::TypeKeyword => {
                file.types.push(self.parse_type(decorations)?);
            }
            TokenKind::FnKeyword => {
                file.builtins
                    .push(self.parse_intrinsic(IntrinsicKind::Builtin, decorations)?);
            }
            TokenKind::OpKeyword => {
                file.operators
                    .push(self.parse_intrinsic(IntrinsicKind::Operator, decorations)?);
            }
            TokenKind::CtorKeyword => {
                file.constructors
                    .push(self.parse_intrinsic(IntrinsicKind::Constructor, decorations)?);
            }
            TokenKind::ConvKeyword => {
                file.converters
                    .push(self.parse_intrinsic(IntrinsicKind::Converter, decorations)?);
            }
            _ => return Err(self.unexpected_token()),
        }

        Ok(())
    }
}
