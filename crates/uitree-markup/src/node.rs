use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

// ── Value ─────────────────────────────────────────────────────────────────

/// A typed attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Quoted string, or an unquoted token that is neither integer nor boolean.
    Str(String),
    /// Unquoted run of decimal digits: `width = 120`
    Int(i64),
    /// Unquoted `true` / `false`, any letter case.
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

// ── Node ──────────────────────────────────────────────────────────────────

/// One parsed element.
///
/// ```text
/// save < button ; label = "Save" primary = true />
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Identifier written before `<`. Not required to be unique.
    pub id: String,
    /// Type name written after `<`: `"panel"`, `"label"`, `"text-box"`.
    pub node_type: String,
    /// Attributes from the start tag. A repeated key keeps its last value.
    pub attributes: HashMap<String, Value>,
    /// Child elements from the `{ ... }` block, in source order.
    pub children: Vec<Node>,
    /// Character offsets from the first character of `id` to one past the
    /// element's closing delimiter.
    pub span: Range<usize>,
}

impl Node {
    /// Look up an attribute value by key.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Get an attribute as `&str` if it holds a `Str`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.attribute(key)? {
            Value::Str(s) => Some(s.as_str()),
            Value::Int(_) | Value::Bool(_) => None,
        }
    }

    /// Get an attribute as `i64` if it holds an `Int`.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.attribute(key)? {
            Value::Int(n) => Some(*n),
            Value::Str(_) | Value::Bool(_) => None,
        }
    }

    /// Get an attribute as `bool` if it holds a `Bool`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.attribute(key)? {
            Value::Bool(b) => Some(*b),
            Value::Str(_) | Value::Int(_) => None,
        }
    }

    /// Depth-first, pre-order iterator over this node and all descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// First node in pre-order (this one included) whose id is `id`.
    pub fn find(&self, id: &str) -> Option<&Node> {
        self.walk().find(|n| n.id == id)
    }
}

/// Iterator returned by [`Node::walk`].
pub struct Walk<'n> {
    stack: Vec<&'n Node>,
}

impl<'n> Iterator for Walk<'n> {
    type Item = &'n Node;

    fn next(&mut self) -> Option<&'n Node> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
