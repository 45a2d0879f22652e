//! Deterministic text rendering of a tree.
//!
//! The output grammar is fixed: one `Root:<value>` line, then one line per
//! child position in depth-first order, `<indent><side>---<value>` with a
//! four-space indent per level. A node's children are only descended into
//! when at least one of them is present; in that case both slots are
//! printed, an empty slot as the `None` marker. A node without children
//! prints nothing below itself.

use std::io;

use crate::tree::Node;

const INDENT: &str = "    ";

/// Render the tree into its ordered line sequence. A `None` root renders
/// to an empty sequence.
pub fn render(root: Option<&Node>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(node) = root {
        lines.push(format!("Root:{}", node.value));
        if node.left.is_some() || node.right.is_some() {
            render_child(node.left.as_deref(), 'L', 0, &mut lines);
            render_child(node.right.as_deref(), 'R', 0, &mut lines);
        }
    }
    lines
}

fn render_child(node: Option<&Node>, side: char, level: usize, lines: &mut Vec<String>) {
    let indent = INDENT.repeat(level);
    match node {
        None => lines.push(format!("{}{}---None", indent, side)),
        Some(node) => {
            lines.push(format!("{}{}---{}", indent, side, node.value));
            if node.left.is_some() || node.right.is_some() {
                render_child(node.left.as_deref(), 'L', level + 1, lines);
                render_child(node.right.as_deref(), 'R', level + 1, lines);
            }
        }
    }
}

/// Write the rendered lines to an output sink.
pub fn write_tree<W: io::Write>(root: Option<&Node>, mut out: W) -> io::Result<()> {
    for line in render(root) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
