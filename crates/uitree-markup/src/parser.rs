use std::collections::HashMap;

use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::node::{Node, Value};

// ── Parser ────────────────────────────────────────────────────────────────

/// Deepest child-block nesting accepted before the parse fails.
pub const MAX_DEPTH: usize = 256;

/// Recursive-descent parser over a single source text.
///
/// `parse` consumes the parser, so one instance parses exactly one source.
pub struct Parser {
    cursor: Cursor,
    depth: usize,
}

impl Parser {
    pub fn new(src: &str) -> Self {
        Self { cursor: Cursor::new(src), depth: 0 }
    }

    // ── Document ──────────────────────────────────────────────────────────

    /// Parse every top-level element until end of input.
    pub fn parse(mut self) -> Result<Vec<Node>, ParseError> {
        let mut roots = Vec::new();
        loop {
            self.cursor.skip_insignificant();
            if self.cursor.is_at_end() {
                break;
            }
            roots.push(self.parse_element()?);
        }
        log::debug!("parsed {} root node(s)", roots.len());
        Ok(roots)
    }

    // ── Element ───────────────────────────────────────────────────────────

    /// `id < type [; attrs] ( / > | > [{ element* }] )`
    fn parse_element(&mut self) -> Result<Node, ParseError> {
        self.cursor.skip_insignificant();
        let start = self.cursor.pos();
        let id = self.cursor.read_identifier(true, false, true)?;
        self.cursor.skip_insignificant();
        self.cursor.expect('<')?;
        self.cursor.skip_insignificant();
        let node_type = self.cursor.read_identifier(true, false, true)?;
        self.cursor.skip_insignificant();

        let mut attributes = HashMap::new();
        if self.cursor.match_one(';') {
            self.parse_attributes(&mut attributes)?;
        }

        let mut children = Vec::new();
        let end;
        if self.cursor.match_one('/') {
            // Self-closing: a following `{` belongs to whoever called us.
            self.cursor.skip_insignificant();
            self.cursor.expect('>')?;
            end = self.cursor.pos();
        } else {
            self.cursor.expect('>')?;
            let tag_end = self.cursor.pos();
            self.cursor.skip_insignificant();
            if self.cursor.match_one('{') {
                self.parse_children(&mut children)?;
                end = self.cursor.pos();
            } else {
                // Trailing whitespace and comments are not part of the element.
                end = tag_end;
            }
        }

        log::trace!("element {:?} <{}> with {} attribute(s)", id, node_type, attributes.len());

        Ok(Node {
            id,
            node_type,
            attributes,
            children,
            span: start..end,
        })
    }

    /// Attribute loop after `;`. Stops in front of `>` or `/`, leaving the
    /// tag end for the caller.
    fn parse_attributes(&mut self, attributes: &mut HashMap<String, Value>) -> Result<(), ParseError> {
        loop {
            self.cursor.skip_insignificant();
            match self.cursor.peek(0) {
                Some('>') | Some('/') => return Ok(()),
                None => {
                    return Err(self.cursor.err(
                        ErrorKind::UnexpectedEof,
                        "unexpected end of input: expected '>' or '/>' to close the start tag",
                    ));
                }
                Some(_) => {}
            }
            let key = self.cursor.read_identifier(true, false, true)?;
            self.cursor.skip_insignificant();
            self.cursor.expect('=')?;
            self.cursor.skip_insignificant();
            let value = self.parse_value()?;
            // Later duplicates overwrite earlier ones.
            attributes.insert(key, value);
        }
    }

    /// Child loop after `{`, through the matching `}`.
    fn parse_children(&mut self, children: &mut Vec<Node>) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.cursor.err(
                ErrorKind::NestingTooDeep,
                format!("child blocks nested deeper than {} levels", MAX_DEPTH),
            ));
        }
        self.depth += 1;
        let result = self.parse_child_list(children);
        self.depth -= 1;
        result
    }

    fn parse_child_list(&mut self, children: &mut Vec<Node>) -> Result<(), ParseError> {
        loop {
            self.cursor.skip_insignificant();
            if self.cursor.match_one('}') {
                return Ok(());
            }
            if self.cursor.is_at_end() {
                return Err(self.cursor.err(ErrorKind::UnexpectedEof, "unexpected end of input: expected '}'"));
            }
            children.push(self.parse_element()?);
        }
    }

    // ── Value ─────────────────────────────────────────────────────────────

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.cursor.peek(0) {
            Some(q @ ('"' | '\'')) => self.parse_quoted(q).map(Value::Str),
            _ => self.parse_unquoted(),
        }
    }

    /// Classify an unquoted token: integer, rejected float, boolean, or string.
    fn parse_unquoted(&mut self) -> Result<Value, ParseError> {
        let start = self.cursor.pos();
        while let Some(c) = self.cursor.peek(0) {
            if c.is_whitespace() || matches!(c, '>' | '{' | '}' | '/') {
                break;
            }
            self.cursor.advance()?;
        }
        let token = self.cursor.slice_from(start);

        if token.is_empty() {
            return Err(ParseError::new(ErrorKind::MissingValue, "expected a value", start));
        }
        if is_digits(&token) {
            return token.parse::<i64>().map(Value::Int).map_err(|_| {
                ParseError::new(
                    ErrorKind::IntegerOutOfRange,
                    format!("integer out of range: {}", token),
                    start,
                )
            });
        }
        if let Some((whole, frac)) = token.split_once('.') {
            if is_digits(whole) && is_digits(frac) {
                return Err(ParseError::new(
                    ErrorKind::FloatNotAllowed,
                    format!("floating-point values are not allowed: {}", token),
                    start,
                ));
            }
        }
        if token.eq_ignore_ascii_case("true") {
            return Ok(Value::Bool(true));
        }
        if token.eq_ignore_ascii_case("false") {
            return Ok(Value::Bool(false));
        }
        Ok(Value::Str(token))
    }

    fn parse_quoted(&mut self, quote: char) -> Result<String, ParseError> {
        self.cursor.expect(quote)?;
        let mut s = String::new();
        loop {
            let ch = match self.cursor.peek(0) {
                None => return Err(self.cursor.err(ErrorKind::UnterminatedString, "unterminated quoted string")),
                Some(c) => c,
            };
            self.cursor.advance()?;
            if ch == quote {
                return Ok(s);
            }
            if ch != '\\' {
                s.push(ch);
                continue;
            }
            let escaped = match self.cursor.peek(0) {
                None => return Err(self.cursor.err(ErrorKind::UnterminatedEscape, "unterminated escape in string")),
                Some(c) => c,
            };
            self.cursor.advance()?;
            s.push(match escaped {
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                // `\\`, `\"`, `\'` and unknown escapes all yield the character itself
                other => other,
            });
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse uitree markup into its top-level nodes.
pub fn parse_str(src: &str) -> Result<Vec<Node>, ParseError> {
    Parser::new(src).parse()
}
