use uitree_markup::Node;

/// Indented, human-readable outline of a parsed tree.
///
/// One line per node, `id <type> key=value ...`, attributes sorted by key and
/// two spaces of indentation per depth level.
pub fn render_outline(roots: &[Node]) -> String {
    let mut out = String::new();
    for root in roots {
        write_node(&mut out, root, 0);
    }
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    out.push_str(&format!("{:indent$}{} <{}>", "", node.id, node.node_type, indent = depth * 2));

    let mut keys: Vec<&String> = node.attributes.keys().collect();
    keys.sort();
    for key in keys {
        out.push_str(&format!(" {}={}", key, node.attributes[key]));
    }
    out.push('\n');

    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}
