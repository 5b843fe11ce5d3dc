//! Scenario tests for chain tree enumeration.

use domino_trains::{ChainNode, ChainTree, NodeValue, Tile};

fn tile(a: i64, b: i64) -> Tile {
    Tile::new(a, Some(b)).unwrap()
}

fn only_child(node: &ChainNode) -> &ChainNode {
    assert_eq!(node.children().len(), 1);
    &node.children()[0]
}

#[test]
fn test_single_linear_chain() {
    // 1 -> [1 2] -> [2 3] -> [3 4], no branching.
    let tiles = [tile(1, 2), tile(2, 3), tile(3, 4)];
    let tree = ChainTree::create(&tiles, 1).unwrap();

    assert_eq!(tree.root().value(), &NodeValue::Start(1));
    let first = only_child(tree.root());
    assert_eq!(first.value(), &NodeValue::Tile(tile(1, 2)));
    let second = only_child(first);
    assert_eq!(second.value(), &NodeValue::Tile(tile(2, 3)));
    let third = only_child(second);
    assert_eq!(third.value(), &NodeValue::Tile(tile(3, 4)));
    assert!(third.children().is_empty());
}

#[test]
fn test_two_branches_both_leaves() {
    // Both tiles match the start; neither extends the other's open end.
    let tiles = [tile(1, 2), tile(1, 3)];
    let tree = ChainTree::create(&tiles, 1).unwrap();

    let children = tree.root().children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].value(), &NodeValue::Tile(tile(1, 2)));
    assert_eq!(children[1].value(), &NodeValue::Tile(tile(1, 3)));
    assert!(children[0].children().is_empty());
    assert!(children[1].children().is_empty());
}

#[test]
fn test_double_keeps_open_end_and_branches_are_independent() {
    // The double [1 1] matches 1 and its opposite end is still 1, so it
    // extends to [1 2]. On the sibling branch, [1 2] is placed first and
    // [1 1] is still in that branch's pool, but 2 matches nothing.
    let tiles = [tile(1, 1), tile(1, 2)];
    let tree = ChainTree::create(&tiles, 1).unwrap();

    let children = tree.root().children();
    assert_eq!(children.len(), 2);

    let double_branch = &children[0];
    assert_eq!(double_branch.value(), &NodeValue::Tile(tile(1, 1)));
    let extension = only_child(double_branch);
    assert_eq!(extension.value(), &NodeValue::Tile(tile(1, 2)));
    assert!(extension.children().is_empty());

    let plain_branch = &children[1];
    assert_eq!(plain_branch.value(), &NodeValue::Tile(tile(1, 2)));
    assert!(plain_branch.children().is_empty());
}

#[test]
fn test_no_matches_yields_root_only() {
    let tiles = [tile(1, 2), tile(3, 4)];
    let tree = ChainTree::create(&tiles, 5).unwrap();

    assert_eq!(tree.root().value(), &NodeValue::Start(5));
    assert!(tree.root().children().is_empty());
}

#[test]
fn test_create_is_idempotent() {
    let tiles = [tile(1, 1), tile(1, 2), tile(2, 3), tile(3, 1)];
    let first = ChainTree::create(&tiles, 1).unwrap();
    let second = ChainTree::create(&tiles, 1).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_tile_used_once_per_path() {
    // A cycle of tiles: every path must stop once its pool is exhausted,
    // never re-placing a tile already on the path.
    let tiles = [tile(1, 2), tile(2, 1)];
    let tree = ChainTree::create(&tiles, 1).unwrap();

    // [1 2] -> [2 1] and [2 1] -> [1 2]; both paths end after two tiles.
    let children = tree.root().children();
    assert_eq!(children.len(), 2);
    for child in children {
        let grandchild = only_child(child);
        assert!(grandchild.children().is_empty());
    }
}
