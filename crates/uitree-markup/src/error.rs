use std::fmt;

/// What went wrong, independent of the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The cursor tried to read past the last character.
    UnexpectedEof,
    /// A specific punctuation character was required and something else was found.
    UnexpectedChar,
    /// An identifier was mandatory but zero characters matched.
    MissingIdentifier,
    /// Nothing usable followed an attribute's `=`.
    MissingValue,
    /// An integer literal does not fit in `i64`.
    IntegerOutOfRange,
    /// A `digits.digits` literal; fractional numbers are rejected by the language.
    FloatNotAllowed,
    UnterminatedString,
    UnterminatedEscape,
    /// Child blocks nested past [`crate::parser::MAX_DEPTH`].
    NestingTooDeep,
}

/// A parse error from uitree markup.
///
/// `offset` counts characters (not bytes) from the start of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub offset: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, msg: impl Into<String>, offset: usize) -> Self {
        Self { kind, message: msg.into(), offset }
    }

    /// 1-based `(line, column)` of the error inside `src`.
    ///
    /// `src` must be the text the error was produced from. Offsets past the
    /// end clamp to the position just after the last character.
    pub fn line_col(&self, src: &str) -> (usize, usize) {
        let mut line = 1;
        let mut col = 1;
        for ch in src.chars().take(self.offset) {
            if ch == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uitree parse error at offset {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for ParseError {}
