mod characters;
mod error;

use characters::Characters;
pub use error::{LexError, LexErrorKind};
use num_bigint::BigInt;
use source_files::SourceFileKey;
use token::{Token, TokenKind};

/// Tokenizes an entire definition file in a single pass. The returned
/// sequence always ends with an end-of-file token.
pub fn lex(content: &str, key: SourceFileKey) -> Result<Vec<Token>, LexError> {
    Lexer::new(content, key).lex()
}

struct Lexer<'a> {
    characters: Characters<'a>,
}

impl<'a> Lexer<'a> {
    fn new(content: &'a str, key: SourceFileKey) -> Self {
        Self {
            characters: Characters::new(content, key),
        }
    }

    fn lex(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_trivia();

            let source = self.characters.here();

            let Some(c) = self.characters.peek() else {
                tokens.push(TokenKind::EndOfFile.at(source));
                return Ok(tokens);
            };

            let kind = if c == '_' || c.is_alphabetic() {
                self.identifier_or_keyword()
            } else if c.is_ascii_digit()
                || (c == '-' && self.characters.peek2().is_some_and(|c| c.is_ascii_digit()))
            {
                self.number()
            } else if c == '"' {
                self.string()?
            } else {
                self.punctuation(c)?
            };

            tokens.push(kind.at(source));
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.characters.peek() {
                Some(c) if c.is_whitespace() => {
                    self.characters.next();
                }
                Some('/') if self.characters.peek2() == Some('/') => {
                    while self.characters.peek().is_some_and(|c| c != '\n') {
                        self.characters.next();
                    }
                }
                _ => return,
            }
        }
    }

    fn identifier_or_keyword(&mut self) -> TokenKind {
        let mut name = String::new();

        while let Some(c) = self.characters.peek() {
            if c != '_' && !c.is_alphanumeric() {
                break;
            }
            name.push(c);
            self.characters.next();
        }

        match name.as_str() {
            "fn" => TokenKind::FnKeyword,
            "op" => TokenKind::OpKeyword,
            "ctor" => TokenKind::CtorKeyword,
            "conv" => TokenKind::ConvKeyword,
            "type" => TokenKind::TypeKeyword,
            "enum" => TokenKind::EnumKeyword,
            "match" => TokenKind::MatchKeyword,
            _ => TokenKind::Identifier(name),
        }
    }

    fn number(&mut self) -> TokenKind {
        let mut digits = String::new();

        if self.characters.peek() == Some('-') {
            digits.push('-');
            self.characters.next();
        }

        while let Some(c) = self.characters.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.characters.next();
        }

        let is_float = self.characters.peek() == Some('.')
            && self.characters.peek2().is_some_and(|c| c.is_ascii_digit());

        if !is_float {
            let value = BigInt::parse_bytes(digits.as_bytes(), 10).expect("lexed valid integer");
            return TokenKind::Integer(value);
        }

        digits.push('.');
        self.characters.next();

        while let Some(c) = self.characters.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.characters.next();
        }

        TokenKind::Float(digits.parse().expect("lexed valid float"))
    }

    fn string(&mut self) -> Result<TokenKind, LexError> {
        self.characters.next();

        // Reported location is the first content character, not the quote.
        let content_source = self.characters.here();
        let mut value = String::new();

        loop {
            match self.characters.next() {
                Some('"') => return Ok(TokenKind::String(value)),
                Some(c) => value.push(c),
                None => return Err(LexErrorKind::UnterminatedString.at(content_source)),
            }
        }
    }

    fn punctuation(&mut self, c: char) -> Result<TokenKind, LexError> {
        let source = self.characters.here();
        self.characters.next();

        // Longest-match: two-character punctuation is tried before the
        // single-character prefix it shares.
        let kind = match c {
            '{' => TokenKind::OpenCurly,
            '}' => TokenKind::CloseCurly,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '@' => TokenKind::At,
            '-' if self.characters.eat('>') => TokenKind::Arrow,
            '-' => TokenKind::Subtract,
            '[' if self.characters.eat('[') => TokenKind::AttrLeft,
            ']' if self.characters.eat(']') => TokenKind::AttrRight,
            '|' if self.characters.eat('|') => TokenKind::VbarVbar,
            '|' => TokenKind::Vbar,
            '&' if self.characters.eat('&') => TokenKind::AmpAmp,
            '&' => TokenKind::Amp,
            '!' if self.characters.eat('=') => TokenKind::NotEquals,
            '!' => TokenKind::Not,
            '=' if self.characters.eat('=') => TokenKind::Equals,
            '<' if self.characters.eat('=') => TokenKind::LessThanEq,
            '<' if self.characters.eat('<') => TokenKind::ShiftLeft,
            '<' => TokenKind::LessThan,
            '>' if self.characters.eat('=') => TokenKind::GreaterThanEq,
            '>' if self.characters.eat('>') => TokenKind::ShiftRight,
            '>' => TokenKind::GreaterThan,
            _ => return Err(LexErrorKind::UnexpectedCharacter(c).at(source)),
        };

        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use source_files::SourceFiles;

    fn lex_file(content: &str) -> (SourceFiles, Result<Vec<Token>, LexError>) {
        let mut source_files = SourceFiles::new();
        let key = source_files.add("test.def".into(), content.into());
        let result = lex(content, key);
        (source_files, result)
    }

    fn kinds(content: &str) -> Vec<TokenKind> {
        let (_, tokens) = lex_file(content);
        tokens.unwrap().into_iter().map(|token| token.kind).collect()
    }

    #[test]
    fn empty_input_yields_end_of_file() {
        assert_eq!(kinds(""), vec![TokenKind::EndOfFile]);
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            kinds("fn clamp enum _private"),
            vec![
                TokenKind::FnKeyword,
                TokenKind::Identifier("clamp".into()),
                TokenKind::EnumKeyword,
                TokenKind::Identifier("_private".into()),
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn longest_match_punctuation() {
        assert_eq!(
            kinds("< <= << -> - || |"),
            vec![
                TokenKind::LessThan,
                TokenKind::LessThanEq,
                TokenKind::ShiftLeft,
                TokenKind::Arrow,
                TokenKind::Subtract,
                TokenKind::VbarVbar,
                TokenKind::Vbar,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn numbers_with_leading_sign() {
        assert_eq!(
            kinds("123 -7 -0.5 1.25"),
            vec![
                TokenKind::Integer(123.into()),
                TokenKind::Integer((-7).into()),
                TokenKind::Float(-0.5),
                TokenKind::Float(1.25),
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            kinds("fn // trailing comment\nmatch"),
            vec![
                TokenKind::FnKeyword,
                TokenKind::MatchKeyword,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn string_literal() {
        assert_eq!(
            kinds(r#""vec{N}<{T}>""#),
            vec![
                TokenKind::String("vec{N}<{T}>".into()),
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn unterminated_string() {
        let (source_files, result) = lex_file("\"abc");
        let err = result.unwrap_err();
        assert_eq!(err.message(&source_files), "test.def:1:2 unterminated string");
    }

    #[test]
    fn unexpected_character() {
        let (source_files, result) = lex_file("*");
        let err = result.unwrap_err();
        assert_eq!(err.message(&source_files), "test.def:1:1: unexpected '*'");
    }
}
