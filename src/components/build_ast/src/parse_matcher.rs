use super::Parser;
use super::error::ParseError;
use ast::MatcherDecl;
use token::TokenKind;

impl Parser {
    pub fn parse_matcher(&mut self) -> Result<MatcherDecl, ParseError> {
        self.input.advance();

        let (name, source) = self.parse_identifier("matcher name")?.tuple();
        self.expect(TokenKind::Colon, "':' after matcher name")?;

        let mut options = vec![self.parse_templated_name()?];

        while self.input.eat(&TokenKind::Vbar) {
            options.push(self.parse_templated_name()?);
        }

        Ok(MatcherDecl {
            name,
            options,
            source,
        })
    }
}
