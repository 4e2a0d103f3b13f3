use crate::error::{ErrorKind, ParseError};

// ── Cursor ────────────────────────────────────────────────────────────────

/// Forward-only read position over the source characters.
///
/// Offsets are character indices, so every error offset can be mapped back
/// to the source without worrying about UTF-8 boundaries.
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub fn new(src: &str) -> Self {
        Self { chars: src.chars().collect(), pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    pub fn advance(&mut self) -> Result<char, ParseError> {
        let ch = self.peek(0).ok_or_else(|| self.err(ErrorKind::UnexpectedEof, "unexpected end of input"))?;
        self.pos += 1;
        Ok(ch)
    }

    pub fn err(&self, kind: ErrorKind, msg: impl Into<String>) -> ParseError {
        ParseError::new(kind, msg, self.pos)
    }

    // ── Insignificant content ─────────────────────────────────────────────

    pub fn skip_insignificant(&mut self) {
        while let Some(ch) = self.peek(0) {
            if ch.is_whitespace() {
                self.pos += 1;
            // skip `//` line comments, leaving the newline for the next pass
            } else if ch == '/' && self.peek(1) == Some('/') {
                while !matches!(self.peek(0), None | Some('\n')) {
                    self.pos += 1;
                }
            // skip `/* */` block comments; unterminated runs to end of input
            } else if ch == '/' && self.peek(1) == Some('*') {
                self.pos += 2;
                loop {
                    if self.match_two('*', '/') || self.is_at_end() {
                        break;
                    }
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    // ── Tokens ────────────────────────────────────────────────────────────

    pub fn read_identifier(
        &mut self,
        require_non_empty: bool,
        allow_dot: bool,
        allow_hyphen: bool,
    ) -> Result<String, ParseError> {
        self.skip_insignificant();
        let start = self.pos;
        while let Some(c) = self.peek(0) {
            let accepted = c.is_alphanumeric()
                || c == '_'
                || (allow_hyphen && c == '-')
                || (allow_dot && c == '.');
            if !accepted {
                break;
            }
            self.pos += 1;
        }
        if start == self.pos && require_non_empty {
            let found = match self.peek(0) {
                Some(c) => format!("{:?}", c),
                None => "end of input".to_string(),
            };
            return Err(ParseError::new(
                ErrorKind::MissingIdentifier,
                format!("expected an identifier, found {}", found),
                start,
            ));
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    pub fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        let at = self.pos;
        let got = self
            .advance()
            .map_err(|_| self.err(ErrorKind::UnexpectedEof, format!("expected {:?}, found end of input", expected)))?;
        if got == expected {
            Ok(())
        } else {
            Err(ParseError::new(
                ErrorKind::UnexpectedChar,
                format!("expected {:?}, found {:?}", expected, got),
                at,
            ))
        }
    }

    pub fn match_one(&mut self, ch: char) -> bool {
        if self.peek(0) == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn match_two(&mut self, first: char, second: char) -> bool {
        if self.peek(0) == Some(first) && self.peek(1) == Some(second) {
            self.pos += 2;
            true
        } else {
            false
        }
    }

    /// Characters in `start..self.pos()` as an owned string.
    pub fn slice_from(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }
}
