use super::Parser;
use super::error::{ParseError, ParseErrorKind};
use source_files::Sourced;
use token::TokenKind;

impl Parser {
    pub fn parse_identifier(&mut self, expected: &str) -> Result<Sourced<String>, ParseError> {
        let token = self.input.advance();

        if let TokenKind::Identifier(name) = token.kind {
            Ok(Sourced::new(name, token.source))
        } else {
            Err(ParseErrorKind::Expected {
                expected: expected.into(),
                got: token.kind.to_string(),
            }
            .at(token.source))
        }
    }

    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<(), ParseError> {
        if self.input.eat(&kind) {
            return Ok(());
        }

        let token = self.input.peek();

        Err(ParseErrorKind::Expected {
            expected: expected.into(),
            got: token.kind.to_string(),
        }
        .at(token.source))
    }

    pub fn unexpected_token(&mut self) -> ParseError {
        let token = self.input.peek();

        ParseErrorKind::UnexpectedToken {
            unexpected: token.kind.to_string(),
        }
        .at(token.source)
    }
}
