use super::Parser;
use super::error::ParseError;
use ast::{Decoration, TypeDecl};

impl Parser {
    pub fn parse_type(&mut self, decorations: Vec<Decoration>) -> Result<TypeDecl, ParseError> {
        self.input.advance();

        let (name, source) = self.parse_identifier("type name")?.tuple();
        let template_params = self.parse_template_params()?;

        Ok(TypeDecl {
            decorations,
            name,
            template_params,
            source,
        })
    }
}
