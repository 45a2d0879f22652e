//! Tests for the visual text rendering

use rstree::{render, write_tree, Node, Value};

fn sample_tree() -> Node {
    let mut root = Node::new(10);
    for (path, value) in [
        ("L", 5),
        ("R", 15),
        ("LL", 2),
        ("LR", 7),
        ("RL", 12),
        ("RR", 18),
    ] {
        root.insert(path, value).unwrap();
    }
    root
}

// ============================================================
// Full Tree Tests
// ============================================================

#[test]
fn given_fully_populated_tree_when_rendering_then_lines_match_exactly() {
    // Arrange
    let root = sample_tree();

    // Act
    let lines = render(Some(&root));

    // Assert: no absence markers, every referenced slot is populated
    assert_eq!(
        lines,
        vec![
            "Root:10",
            "L---5",
            "    L---2",
            "    R---7",
            "R---15",
            "    L---12",
            "    R---18",
        ]
    );
}

#[test]
fn given_fully_populated_tree_when_writing_then_sink_holds_joined_lines() {
    // Arrange
    let root = sample_tree();
    let mut sink: Vec<u8> = Vec::new();

    // Act
    write_tree(Some(&root), &mut sink).unwrap();

    // Assert
    let text = String::from_utf8(sink).unwrap();
    assert!(text.starts_with("Root:10\nL---5\n"));
    assert!(text.ends_with("    R---18\n"));
}

// ============================================================
// Pruning Asymmetry Tests
// ============================================================

#[test]
fn given_single_child_node_when_rendering_then_absent_sibling_gets_marker() {
    // Arrange: left branch continues one level, right slots stay empty
    let mut root = Node::new(1);
    root.insert("L", 2).unwrap();
    root.insert("LL", 3).unwrap();

    // Act
    let lines = render(Some(&root));

    // Assert: both levels print an explicit marker for the empty slot
    assert_eq!(
        lines,
        vec!["Root:1", "L---2", "    L---3", "    R---None", "R---None"]
    );
}

#[test]
fn given_leaf_node_when_rendering_then_nothing_below_it() {
    // Arrange: same shape as above minus the grandchild
    let mut root = Node::new(1);
    root.insert("L", 2).unwrap();

    // Act
    let lines = render(Some(&root));

    // Assert: the leaf at L prints no child lines at all
    assert_eq!(lines, vec!["Root:1", "L---2", "R---None"]);
}

#[test]
fn given_single_child_vs_leaf_when_rendering_then_line_counts_differ() {
    let mut one_child = Node::new(1);
    one_child.insert("L", 2).unwrap();
    one_child.insert("LL", 3).unwrap();

    let mut leaf_only = Node::new(1);
    leaf_only.insert("L", 2).unwrap();

    assert_eq!(render(Some(&one_child)).len(), 5);
    assert_eq!(render(Some(&leaf_only)).len(), 3);
}

// ============================================================
// Edge Cases
// ============================================================

#[test]
fn given_no_root_when_rendering_then_output_is_empty() {
    assert!(render(None).is_empty());
}

#[test]
fn given_childless_root_when_rendering_then_single_line() {
    let root = Node::new(10);

    assert_eq!(render(Some(&root)), vec!["Root:10"]);
}

#[test]
fn given_null_valued_node_when_rendering_then_reads_like_marker() {
    // A node that exists but carries no value renders the same word as
    // an absent slot; only the structure below distinguishes the two.
    let mut root = Node::new(1);
    root.insert("L", Value::Null).unwrap();

    assert_eq!(render(Some(&root)), vec!["Root:1", "L---None", "R---None"]);
}

#[test]
fn given_string_values_when_rendering_then_printed_verbatim() {
    let mut root = Node::new("alpha");
    root.insert("R", "beta").unwrap();

    assert_eq!(render(Some(&root)), vec!["Root:alpha", "L---None", "R---beta"]);
}
