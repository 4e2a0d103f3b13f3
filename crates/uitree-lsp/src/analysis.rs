//! Source analysis for hover and document symbols.
//!
//! The parser reports positions as character offsets; LSP positions are
//! line + UTF-16 column. Everything that crosses that boundary goes through
//! [`offset_to_position`] and [`position_to_offset`].

use tower_lsp::lsp_types::{DocumentSymbol, Position, Range, SymbolKind};
use uitree_markup::{Node, Value};

// ── Position mapping ──────────────────────────────────────────────────────────

/// Convert a character offset into an LSP position.
pub fn offset_to_position(text: &str, offset: usize) -> Position {
    let mut line = 0u32;
    let mut col = 0u32;
    for ch in text.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += ch.len_utf16() as u32;
        }
    }
    Position::new(line, col)
}

/// Convert an LSP position into a character offset.
///
/// A column past the end of its line maps to the line's newline; a line past
/// the end of the text maps to the end of the text.
pub fn position_to_offset(text: &str, pos: &Position) -> usize {
    let mut line = 0u32;
    let mut col = 0u32;
    for (i, ch) in text.chars().enumerate() {
        if line == pos.line && (col >= pos.character || ch == '\n') {
            return i;
        }
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += ch.len_utf16() as u32;
        }
    }
    text.chars().count()
}

pub fn span_range(text: &str, span: &std::ops::Range<usize>) -> Range {
    Range::new(offset_to_position(text, span.start), offset_to_position(text, span.end))
}

// ── word_at ───────────────────────────────────────────────────────────────────

/// Extract the identifier (or partial identifier) that contains or immediately
/// precedes the cursor column. Hyphens count as identifier characters.
pub fn word_at<'t>(text: &'t str, pos: &Position) -> Option<&'t str> {
    let line = text.lines().nth(pos.line as usize)?;
    let is_word = |c: char| c.is_alphanumeric() || c == '_' || c == '-';

    // Walk to the byte index of the UTF-16 column.
    let mut col = line.len();
    let mut units = 0u32;
    for (i, ch) in line.char_indices() {
        if units >= pos.character {
            col = i;
            break;
        }
        units += ch.len_utf16() as u32;
    }

    let start = line[..col]
        .rfind(|c: char| !is_word(c))
        .map(|i| i + line[i..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    let end = col + line[col..].find(|c: char| !is_word(c)).unwrap_or(line.len() - col);

    if start < end {
        Some(&line[start..end])
    } else {
        None
    }
}

// ── Tree lookups ──────────────────────────────────────────────────────────────

/// Innermost node whose span contains `offset`.
pub fn node_at(nodes: &[Node], offset: usize) -> Option<&Node> {
    let node = nodes.iter().find(|n| n.span.contains(&offset))?;
    node_at(&node.children, offset).or(Some(node))
}

/// Markdown hover text for a node: header, sorted attributes, child count.
pub fn hover_markdown(node: &Node) -> String {
    let mut md = format!("**{}** · `{}`", node.id, node.node_type);

    let mut attrs: Vec<(&String, &Value)> = node.attributes.iter().collect();
    attrs.sort_by(|a, b| a.0.cmp(b.0));
    if !attrs.is_empty() {
        md.push_str("\n\n| attribute | value | kind |\n|---|---|---|");
        for (key, value) in attrs {
            md.push_str(&format!("\n| `{}` | `{}` | {} |", key, value, value_kind(value)));
        }
    }

    match node.children.len() {
        0 => {}
        1 => md.push_str("\n\n1 child"),
        n => md.push_str(&format!("\n\n{} children", n)),
    }
    md
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Str(_) => "string",
        Value::Int(_) => "integer",
        Value::Bool(_) => "boolean",
    }
}

/// Nested outline of the tree: one symbol per node.
#[allow(deprecated)] // `DocumentSymbol::deprecated` must still be initialized
pub fn document_symbols(text: &str, nodes: &[Node]) -> Vec<DocumentSymbol> {
    nodes
        .iter()
        .map(|node| {
            let range = span_range(text, &node.span);
            let id_end = node.span.start + node.id.chars().count();
            DocumentSymbol {
                name: node.id.clone(),
                detail: Some(node.node_type.clone()),
                kind: if node.children.is_empty() { SymbolKind::FIELD } else { SymbolKind::OBJECT },
                tags: None,
                deprecated: None,
                range,
                selection_range: span_range(text, &(node.span.start..id_end)),
                children: if node.children.is_empty() {
                    None
                } else {
                    Some(document_symbols(text, &node.children))
                },
            }
        })
        .collect()
}
