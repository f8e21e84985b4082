use super::Parser;
use super::error::ParseError;
use ast::{Decoration, DecorationValue};
use token::TokenKind;

impl Parser {
    /// Parses any number of leading `[[...]]` / `@...` decoration lists.
    pub fn parse_decorations(&mut self) -> Result<Vec<Decoration>, ParseError> {
        let mut decorations = Vec::new();

        loop {
            if self.input.eat(&TokenKind::AttrLeft) {
                loop {
                    decorations.push(self.parse_decoration()?);

                    if !self.input.eat(&TokenKind::Comma) {
                        break;
                    }
                }

                self.expect(TokenKind::AttrRight, "']]' to end decoration list")?;
            } else if self.input.eat(&TokenKind::At) {
                decorations.push(self.parse_decoration()?);
            } else {
                return Ok(decorations);
            }
        }
    }

    fn parse_decoration(&mut self) -> Result<Decoration, ParseError> {
        let (name, source) = self.parse_identifier("decoration name")?.tuple();
        let mut values = Vec::new();

        if self.input.eat(&TokenKind::OpenParen) {
            loop {
                values.push(self.parse_decoration_value()?);

                if !self.input.eat(&TokenKind::Comma) {
                    break;
                }
            }

            self.expect(TokenKind::CloseParen, "')' to end decoration values")?;
        }

        Ok(Decoration {
            name,
            values,
            source,
        })
    }

    fn parse_decoration_value(&mut self) -> Result<DecorationValue, ParseError> {
        let token = self.input.advance();

        match token.kind {
            TokenKind::String(value) => Ok(DecorationValue::Str(value)),
            TokenKind::Identifier(name) => Ok(DecorationValue::Ident(name)),
            TokenKind::Integer(value) => Ok(DecorationValue::Integer(value)),
            kind => Err(super::ParseErrorKind::Expected {
                expected: "decoration value".into(),
                got: kind.to_string(),
            }
            .at(token.source)),
        }
    }
}
