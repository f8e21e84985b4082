use source_files::Source;
use token::{Token, TokenKind};

/// Cursor over the lexed token sequence. The sequence always terminates
/// with an end-of-file token, which peeking/advancing saturates on.
pub struct Input {
    tokens: Vec<Token>,
    position: usize,
}

impl Input {
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(matches!(
            tokens.last().map(|token| &token.kind),
            Some(TokenKind::EndOfFile)
        ));

        Self {
            tokens,
            position: 0,
        }
    }

    pub fn peek(&self) -> &Token {
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    pub fn peek_nth(&self, n: usize) -> &Token {
        &self.tokens[(self.position + n).min(self.tokens.len() - 1)]
    }

    pub fn peek_is(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();

        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }

        token
    }

    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            return true;
        }

        false
    }

    /// Consumes a closing `>`. A `>>` token closing two nested template
    /// lists at once is split in place, leaving a `>` for the outer list.
    pub fn eat_close_angle(&mut self) -> bool {
        if self.eat(&TokenKind::GreaterThan) {
            return true;
        }

        if self.peek_is(&TokenKind::ShiftRight) {
            let token = &mut self.tokens[self.position];
            token.kind = TokenKind::GreaterThan;
            token.source.location.column += 1;
            token.source.location.offset += 1;
            return true;
        }

        false
    }

    pub fn here(&self) -> Source {
        self.peek().source
    }
}
