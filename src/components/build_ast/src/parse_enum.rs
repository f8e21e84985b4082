use super::Parser;
use super::error::ParseError;
use ast::{EnumDecl, EnumEntryDecl};
use token::TokenKind;

impl Parser {
    pub fn parse_enum(&mut self) -> Result<EnumDecl, ParseError> {
        self.input.advance();

        let (name, source) = self.parse_identifier("enum name")?.tuple();
        self.expect(TokenKind::OpenCurly, "'{' to begin enum entries")?;

        let mut entries = Vec::new();

        while !self.input.eat(&TokenKind::CloseCurly) {
            let decorations = self.parse_decorations()?;
            let (name, source) = self.parse_identifier("enum entry name")?.tuple();

            entries.push(EnumEntryDecl {
                decorations,
                name,
                source,
            });
        }

        Ok(EnumDecl {
            name,
            entries,
            source,
        })
    }
}
