//! Indented tree rendering.

use domino_trains::{ChainNode, ChainTree};

/// Formats the tree as indented lines with double-line box-drawing
/// connectors, one node per line, root first.
///
/// Children appear in tree order, so sibling order in the output matches
/// the order tiles appeared in the input pool.
pub fn render_tree(tree: &ChainTree) -> String {
    let mut out = String::new();
    out.push_str(&tree.root().value().to_string());
    out.push('\n');
    render_children(tree.root(), "", &mut out);
    out
}

fn render_children(node: &ChainNode, prefix: &str, out: &mut String) {
    let count = node.children().len();
    for (index, child) in node.children().iter().enumerate() {
        let last = index + 1 == count;
        out.push_str(prefix);
        out.push_str(if last { "╚══ " } else { "╠══ " });
        out.push_str(&child.value().to_string());
        out.push('\n');

        let child_prefix = format!("{prefix}{}", if last { "    " } else { "║   " });
        render_children(child, &child_prefix, out);
    }
}
