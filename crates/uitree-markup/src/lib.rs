//! Lexer, parser, and node model for **uitree** markup.
//!
//! This crate only depends on the `log` facade so it can be consumed by
//! language-server tooling, editors, and linters without dragging in any
//! runtime or logger implementation. It performs no I/O.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | `Node`, `Value` |
//! | [`error`] | `ParseError`, `ErrorKind` |
//! | [`cursor`] | `Cursor`: character-level lexer primitives |
//! | [`parser`] | `Parser`, `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use uitree_markup::parse_str;
//!
//! let src = r#"
//!     // settings window
//!     root < panel ; width = 320 title = "Settings" > {
//!         ok < button ; label = "OK" default = true />
//!     }
//! "#;
//!
//! let roots = parse_str(src).unwrap();
//! assert_eq!(roots[0].node_type, "panel");
//! assert_eq!(roots[0].children[0].get_bool("default"), Some(true));
//! ```

pub mod cursor;
pub mod error;
pub mod node;
pub mod parser;

pub use error::{ErrorKind, ParseError};
pub use node::{Node, Value};
pub use parser::{MAX_DEPTH, Parser, parse_str};

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> Vec<Node> { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }
    fn one(src: &str) -> Node {
        let mut roots = ok(src);
        assert_eq!(roots.len(), 1, "expected exactly one root in {:?}", src);
        roots.remove(0)
    }
    fn attr(src: &str) -> Value {
        one(&format!("n < t ; v = {} />", src)).attributes.remove("v").unwrap()
    }

    // ── Documents ─────────────────────────────────────────────────────────

    #[test] fn empty_source() { assert!(ok("").is_empty()); }
    #[test] fn only_insignificant() {
        assert!(ok("  \n\t// just a comment\n/* and a block */  ").is_empty());
    }
    #[test] fn trailing_line_comment_without_newline() {
        assert_eq!(ok("a < b /> // done").len(), 1);
    }
    #[test] fn unterminated_block_comment_is_not_an_error() {
        assert_eq!(ok("a < b /> /* never closed").len(), 1);
    }
    #[test] fn multiple_roots_in_order() {
        let roots = ok("first < a />  second < b >  third < c > { }");
        let ids: Vec<&str> = roots.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    // ── Elements ──────────────────────────────────────────────────────────

    #[test] fn full_example() {
        let root = one(r#"root < panel ; x = 1 title = "hi" enabled = true > { child < label / > }"#);
        assert_eq!(root.id, "root");
        assert_eq!(root.node_type, "panel");
        assert_eq!(root.attributes.len(), 3);
        assert_eq!(root.get_int("x"), Some(1));
        assert_eq!(root.get_str("title"), Some("hi"));
        assert_eq!(root.get_bool("enabled"), Some(true));
        assert_eq!(root.children.len(), 1);

        let child = &root.children[0];
        assert_eq!(child.id, "child");
        assert_eq!(child.node_type, "label");
        assert!(child.attributes.is_empty());
        assert!(child.children.is_empty());
    }
    #[test] fn hyphenated_names() {
        let n = one("main-menu < menu-bar ; max-items = 4 />");
        assert_eq!(n.id, "main-menu");
        assert_eq!(n.node_type, "menu-bar");
        assert_eq!(n.get_int("max-items"), Some(4));
    }
    #[test] fn dot_is_not_part_of_an_id() {
        assert_eq!(err("a.b < t />").kind, ErrorKind::UnexpectedChar);
    }
    #[test] fn open_tag_without_block() {
        let roots = ok("a < t > b < u />");
        assert_eq!(roots.len(), 2);
        assert!(roots[0].children.is_empty());
    }
    #[test] fn nested_children() {
        let root = one("a < t > { b < t > { c < t /> d < t /> } e < t /> }");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].children.len(), 2);
        assert_eq!(root.children[0].children[1].id, "d");
        assert_eq!(root.children[1].id, "e");
    }
    #[test] fn comments_everywhere() {
        let root = one(
            "/* hdr */ a /*1*/ < // x\n t /*2*/ ; /*3*/ k /*4*/ = /*5*/ 1 // y\n > /*6*/ { /*7*/ b < t /> /*8*/ }",
        );
        assert_eq!(root.get_int("k"), Some(1));
        assert_eq!(root.children.len(), 1);
    }
    #[test] fn semicolon_with_no_attributes() {
        assert!(one("a < t ; />").attributes.is_empty());
        assert!(one("a < t ; >").attributes.is_empty());
    }
    #[test] fn duplicate_key_last_wins() {
        let n = one(r#"a < t ; k = 1 k = "two" />"#);
        assert_eq!(n.get_int("k"), None);
        assert_eq!(n.get_str("k"), Some("two"));
        assert_eq!(n.attributes.len(), 1);
    }
    #[test] fn duplicate_ids_are_allowed() {
        let root = one("x < t > { x < t /> x < t /> }");
        assert_eq!(root.walk().filter(|n| n.id == "x").count(), 3);
    }
    #[test] fn span_covers_the_element() {
        let src = "  a < t > { b < u /> }  ";
        let root = one(src);
        assert_eq!(root.span, 2..22);
        assert_eq!(root.children[0].span, 12..20);
    }
    #[test] fn span_stops_at_tag_end() {
        let roots = ok("a < t >   // note\n  b < u />  /* tail */");
        assert_eq!(roots[0].span, 0..7);
        assert_eq!(roots[1].span, 20..28);
    }
    #[test] fn nesting_up_to_the_limit() {
        let src = format!("{}{}", "a < t > { ".repeat(MAX_DEPTH), "} ".repeat(MAX_DEPTH));
        let root = one(&src);
        assert_eq!(root.walk().count(), MAX_DEPTH);
    }
    #[test] fn nesting_past_the_limit() {
        let src = "a < t > { ".repeat(200_000);
        let e = err(&src);
        assert_eq!(e.kind, ErrorKind::NestingTooDeep);
        // Reported just past the `{` that would open level MAX_DEPTH + 1.
        assert_eq!(e.offset, MAX_DEPTH * 10 + 9);
    }

    #[test] fn self_close_then_stray_brace_at_top_level() {
        let e = err("a < t /> { b < u /> }");
        assert_eq!(e.kind, ErrorKind::MissingIdentifier);
        assert_eq!(e.offset, 9);
    }
    #[test] fn self_close_then_stray_brace_in_child_block() {
        // The `{` is not taken as `b`'s children; the enclosing child loop
        // sees it and fails to read an element id.
        let e = err("a < t > { b < u /> { c < v /> } }");
        assert_eq!(e.kind, ErrorKind::MissingIdentifier);
        assert_eq!(e.offset, 19);
    }

    // ── Values ────────────────────────────────────────────────────────────

    #[test] fn integers() {
        assert_eq!(attr("0"), Value::Int(0));
        assert_eq!(attr("0042"), Value::Int(42));
        assert_eq!(attr("9223372036854775807"), Value::Int(i64::MAX));
    }
    #[test] fn integer_overflow() {
        let e = err("n < t ; v = 9223372036854775808 />");
        assert_eq!(e.kind, ErrorKind::IntegerOutOfRange);
        assert_eq!(e.offset, 12);
    }
    #[test] fn negative_number_is_a_string() { assert_eq!(attr("-5"), Value::Str("-5".into())); }
    #[test] fn floats_are_rejected() {
        assert_eq!(err("n < t ; v = 1.5 />").kind, ErrorKind::FloatNotAllowed);
        assert_eq!(err("n < t ; v = 1.5>").kind, ErrorKind::FloatNotAllowed);
        assert_eq!(err("a < t > { n < t ; a = 1 v = 10.25 /> }").kind, ErrorKind::FloatNotAllowed);
    }
    #[test] fn float_like_tokens_that_are_strings() {
        assert_eq!(attr("1."), Value::Str("1.".into()));
        assert_eq!(attr(".5"), Value::Str(".5".into()));
        assert_eq!(attr("1.2.3"), Value::Str("1.2.3".into()));
    }
    #[test] fn quoted_float_is_a_string() { assert_eq!(attr(r#""1.5""#), Value::Str("1.5".into())); }
    #[test] fn booleans_ignore_case() {
        for t in ["true", "TRUE", "True", "tRuE"] {
            assert_eq!(attr(t), Value::Bool(true));
        }
        for f in ["false", "FALSE", "False"] {
            assert_eq!(attr(f), Value::Bool(false));
        }
    }
    #[test] fn near_booleans_are_strings() {
        assert_eq!(attr("True1"), Value::Str("True1".into()));
        assert_eq!(attr("truee"), Value::Str("truee".into()));
        assert_eq!(attr(r#""true""#), Value::Str("true".into()));
    }
    #[test] fn unquoted_string_is_verbatim() {
        assert_eq!(attr(r"a\nb"), Value::Str(r"a\nb".into()));
        assert_eq!(attr("#ff00aa"), Value::Str("#ff00aa".into()));
    }
    #[test] fn unquoted_token_stops_at_delimiters() {
        let n = one("a < t ; k = abc> { b < u /> }");
        assert_eq!(n.get_str("k"), Some("abc"));
        assert_eq!(n.children.len(), 1);
    }
    #[test] fn missing_value() {
        let e = err("n < t ; v = />");
        assert_eq!(e.kind, ErrorKind::MissingValue);
        assert_eq!(e.offset, 12);
        assert_eq!(err("n < t ; v =").kind, ErrorKind::MissingValue);
    }
    #[test] fn missing_equals() {
        let e = err("n < t ; v 1 />");
        assert_eq!(e.kind, ErrorKind::UnexpectedChar);
        assert_eq!(e.offset, 10);
    }

    // ── Quoted strings ────────────────────────────────────────────────────

    #[test] fn escapes() {
        assert_eq!(attr(r#""a\nb""#), Value::Str("a\nb".into()));
        assert_eq!(attr(r#""\r\t\\""#), Value::Str("\r\t\\".into()));
        assert_eq!(attr(r#""say \"hi\"""#), Value::Str("say \"hi\"".into()));
        assert_eq!(attr(r#"'it\'s'"#), Value::Str("it's".into()));
    }
    #[test] fn unknown_escape_passes_through() {
        assert_eq!(attr(r#""a\qb""#), Value::Str("aqb".into()));
    }
    #[test] fn other_quote_is_literal() {
        assert_eq!(attr(r#"'say "hi"'"#), Value::Str("say \"hi\"".into()));
        assert_eq!(attr(r#""it's""#), Value::Str("it's".into()));
    }
    #[test] fn quoted_string_keeps_delimiters_and_comments() {
        assert_eq!(attr(r#""a /* b */ > { }""#), Value::Str("a /* b */ > { }".into()));
    }
    #[test] fn unterminated_string() {
        let src = r#"n < t ; v = "abc"#;
        let e = err(src);
        assert_eq!(e.kind, ErrorKind::UnterminatedString);
        assert_eq!(e.offset, src.chars().count());
    }
    #[test] fn unterminated_escape() {
        let src = r#"n < t ; v = "abc\"#;
        let e = err(src);
        assert_eq!(e.kind, ErrorKind::UnterminatedEscape);
        assert_eq!(e.offset, src.chars().count());
    }

    // ── Structural errors ─────────────────────────────────────────────────

    #[test] fn missing_open_angle() {
        let e = err("a t />");
        assert_eq!(e.kind, ErrorKind::UnexpectedChar);
        assert_eq!(e.offset, 2);
    }
    #[test] fn missing_type() { assert_eq!(err("a < />").kind, ErrorKind::MissingIdentifier); }
    #[test] fn missing_closing_brace() {
        let e = err("a < t > { b < u />");
        assert_eq!(e.kind, ErrorKind::UnexpectedEof);
        assert_eq!(e.offset, 18);
    }
    #[test] fn missing_tag_end() {
        assert_eq!(err("a < t").kind, ErrorKind::UnexpectedEof);
        assert_eq!(err("a < t ; k = 1").kind, ErrorKind::UnexpectedEof);
        assert_eq!(err("a < t /").kind, ErrorKind::UnexpectedEof);
        assert_eq!(err("a < t / x").kind, ErrorKind::UnexpectedChar);
    }
    #[test] fn attributes_need_a_semicolon() {
        assert_eq!(err("a < t k = 1 />").kind, ErrorKind::UnexpectedChar);
    }
    #[test] fn error_offsets_are_characters() {
        let e = err("é < t ; v = 1.5 />");
        assert_eq!(e.offset, 12);
        assert_eq!(e.line_col("é < t ; v = 1.5 />"), (1, 13));
    }
    #[test] fn unicode_identifiers() {
        let n = one("größe < feld ; breite = 3 />");
        assert_eq!(n.id, "größe");
        assert_eq!(n.get_int("breite"), Some(3));
    }
}
