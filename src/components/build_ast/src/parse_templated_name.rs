use super::Parser;
use super::error::ParseError;
use ast::TemplatedName;
use token::TokenKind;

impl Parser {
    /// Parses `identifier` optionally followed by `<templated_name, ...>`,
    /// recursing for nested template arguments.
    pub fn parse_templated_name(&mut self) -> Result<TemplatedName, ParseError> {
        let (name, source) = self.parse_identifier("type name")?.tuple();
        let mut template_args = Vec::new();

        if self.input.eat(&TokenKind::LessThan) {
            loop {
                template_args.push(self.parse_templated_name()?);

                if !self.input.eat(&TokenKind::Comma) {
                    break;
                }
            }

            if !self.input.eat_close_angle() {
                let token = self.input.peek();
                return Err(super::ParseErrorKind::Expected {
                    expected: "'>' to end template arguments".into(),
                    got: token.kind.to_string(),
                }
                .at(token.source));
            }
        }

        Ok(TemplatedName {
            name,
            template_args,
            source,
        })
    }
}
