use source_files::{Location, Source, SourceFileKey};
use std::str::Chars;

/// Rune-oriented cursor over source text that tracks line/column/offset.
pub struct Characters<'a> {
    chars: Chars<'a>,
    peeked: Option<char>,
    location: Location,
    key: SourceFileKey,
}

impl<'a> Characters<'a> {
    pub fn new(content: &'a str, key: SourceFileKey) -> Self {
        let mut chars = content.chars();
        let peeked = chars.next();

        Self {
            chars,
            peeked,
            location: Location::start(),
            key,
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.peeked
    }

    pub fn peek2(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn next(&mut self) -> Option<char> {
        let c = self.peeked?;
        self.location.advance(c);
        self.peeked = self.chars.next();
        Some(c)
    }

    pub fn eat(&mut self, expected: char) -> bool {
        if self.peeked == Some(expected) {
            self.next();
            return true;
        }
        false
    }

    /// The source position of the next unconsumed character.
    pub fn here(&self) -> Source {
        Source::new(self.key, self.location)
    }
}
