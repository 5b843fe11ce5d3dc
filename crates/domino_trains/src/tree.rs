//! Chain tree construction.
//!
//! A [`ChainTree`] holds every chain that can be grown from a starting
//! pip value out of a pool of tiles. The root is a synthetic node holding
//! the starting value; every other node holds a placed tile, and every
//! root-to-node path is a valid chain prefix.

use crate::error::ValidationError;
use crate::tile::Tile;
use serde::Serialize;
use std::collections::HashSet;
use tracing::instrument;

/// Payload of a single tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeValue {
    /// The synthetic root, holding the starting pip value.
    Start(u32),
    /// A tile placed on the chain.
    Tile(Tile),
}

impl std::fmt::Display for NodeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeValue::Start(value) => write!(f, "{value}"),
            NodeValue::Tile(tile) => write!(f, "{tile}"),
        }
    }
}

/// A node in the chain tree, owning its children.
///
/// Nodes are never mutated once the tree is built; sibling order is the
/// order the matching tiles appeared in the input pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainNode {
    value: NodeValue,
    children: Vec<ChainNode>,
}

impl ChainNode {
    fn new(value: NodeValue) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Returns the node payload.
    pub fn value(&self) -> &NodeValue {
        &self.value
    }

    /// Returns the child nodes, in input-pool order.
    pub fn children(&self) -> &[ChainNode] {
        &self.children
    }
}

/// The tree of all chains reachable from a starting value.
///
/// Every root-to-leaf path is a maximal chain: no tile remaining in that
/// branch's pool could extend it. Construction explores permutations of
/// matching tiles, so it is exponential in the worst case; that is
/// acceptable for the small tile sets this models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainTree {
    root: ChainNode,
}

impl ChainTree {
    /// Enumerates all chains starting from `starting_value`.
    ///
    /// Tiles are consumed per branch: a tile placed on one branch remains
    /// available to sibling branches grown from the same parent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateTile`] if `tiles` contains the
    /// same tile twice. Equality is positional, so a tile and its
    /// inversion do not count as duplicates. Use
    /// [`create_with_duplicates`](ChainTree::create_with_duplicates) to
    /// skip the check.
    #[instrument(skip(tiles), fields(tile_count = tiles.len()))]
    pub fn create(tiles: &[Tile], starting_value: u32) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for tile in tiles {
            if !seen.insert(tile) {
                return Err(ValidationError::DuplicateTile { tile: *tile });
            }
        }
        Ok(Self::create_with_duplicates(tiles, starting_value))
    }

    /// Enumerates all chains without requiring the tile pool to be unique.
    ///
    /// With duplicates present, placing a tile removes every equal copy
    /// from that branch's pool.
    #[instrument(skip(tiles), fields(tile_count = tiles.len()))]
    pub fn create_with_duplicates(tiles: &[Tile], starting_value: u32) -> Self {
        let mut root = ChainNode::new(NodeValue::Start(starting_value));
        grow(&mut root, starting_value, tiles);
        Self { root }
    }

    /// Returns the root node.
    pub fn root(&self) -> &ChainNode {
        &self.root
    }
}

/// Attaches a child under `parent` for every pool tile matching
/// `open_end`, then recurses into each child with that branch's own
/// remaining pool.
///
/// A branch terminates when no tile in its pool contains the open end,
/// which leaves the node a leaf.
fn grow(parent: &mut ChainNode, open_end: u32, pool: &[Tile]) {
    for tile in pool {
        if !tile.contains(open_end) {
            continue;
        }
        let mut node = ChainNode::new(NodeValue::Tile(*tile));
        if let Some(next_end) = tile.opposite_of(open_end) {
            // Pool difference is by equality, computed fresh per branch.
            let remaining: Vec<Tile> = pool.iter().filter(|t| *t != tile).copied().collect();
            grow(&mut node, next_end, &remaining);
        }
        parent.children.push(node);
    }
}
