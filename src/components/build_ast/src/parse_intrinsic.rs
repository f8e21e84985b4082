use super::Parser;
use super::error::{ParseError, ParseErrorKind};
use ast::{Decoration, IntrinsicDecl, IntrinsicKind, ParameterDecl, TemplateParamDecl};
use token::TokenKind;

impl Parser {
    pub fn parse_intrinsic(
        &mut self,
        kind: IntrinsicKind,
        decorations: Vec<Decoration>,
    ) -> Result<IntrinsicDecl, ParseError> {
        self.input.advance();

        let source = self.input.here();
        let name = self.parse_intrinsic_name(kind)?;
        let template_params = self.parse_template_params()?;

        self.expect(TokenKind::OpenParen, "'(' to begin parameters")?;
        let mut parameters = Vec::new();

        if !self.input.peek_is(&TokenKind::CloseParen) {
            loop {
                parameters.push(self.parse_parameter()?);

                if !self.input.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(TokenKind::CloseParen, "')' to end parameters")?;

        let return_type = if self.input.eat(&TokenKind::Arrow) {
            Some(self.parse_templated_name()?)
        } else {
            None
        };

        Ok(IntrinsicDecl {
            kind,
            decorations,
            name,
            template_params,
            parameters,
            return_type,
            source,
        })
    }

    /// Operator declarations may be named by a punctuation symbol; all
    /// other intrinsics require an identifier.
    fn parse_intrinsic_name(&mut self, kind: IntrinsicKind) -> Result<String, ParseError> {
        if kind == IntrinsicKind::Operator && self.input.peek().kind.is_operator_symbol() {
            let token = self.input.advance();
            return Ok(token.kind.fixed_spelling().unwrap().into());
        }

        Ok(self
            .parse_identifier(match kind {
                IntrinsicKind::Builtin => "function name",
                IntrinsicKind::Operator => "operator name",
                IntrinsicKind::Constructor => "constructor name",
                IntrinsicKind::Converter => "converter name",
            })?
            .inner()
            .clone())
    }

    pub fn parse_template_params(&mut self) -> Result<Vec<TemplateParamDecl>, ParseError> {
        let mut template_params = Vec::new();

        if !self.input.eat(&TokenKind::LessThan) {
            return Ok(template_params);
        }

        loop {
            let (name, source) = self.parse_identifier("template parameter name")?.tuple();

            let constraint = if self.input.eat(&TokenKind::Colon) {
                Some(self.parse_templated_name()?)
            } else {
                None
            };

            template_params.push(TemplateParamDecl {
                name,
                constraint,
                source,
            });

            if !self.input.eat(&TokenKind::Comma) {
                break;
            }
        }

        if !self.input.eat_close_angle() {
            let token = self.input.peek();
            return Err(ParseErrorKind::Expected {
                expected: "'>' to end template parameters".into(),
                got: token.kind.to_string(),
            }
            .at(token.source));
        }

        Ok(template_params)
    }

    fn parse_parameter(&mut self) -> Result<ParameterDecl, ParseError> {
        let source = self.input.here();

        // `name: type` when an identifier is directly followed by a colon,
        // otherwise a bare type.
        let name = if self.input.peek().kind.is_identifier()
            && self.input.peek_nth(1).kind == TokenKind::Colon
        {
            let name = self.parse_identifier("parameter name")?.inner().clone();
            self.input.advance();
            Some(name)
        } else {
            None
        };

        let ty = self.parse_templated_name()?;

        Ok(ParameterDecl { name, ty, source })
    }
}
