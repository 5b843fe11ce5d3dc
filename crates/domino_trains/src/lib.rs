//! Pure domino chain enumeration logic.
//!
//! Given a starting pip value and a pool of tiles, [`ChainTree::create`]
//! enumerates every chain that can be built from that value: the result is
//! a tree whose root holds the starting value and where every root-to-node
//! path is a contiguous, tile-disjoint chain. Leaves are maximal chains —
//! no unused tile can extend them.
//!
//! Tile sets in this domain are small (a standard set has 28 tiles), so
//! the enumeration is deliberately exhaustive: there is no pruning,
//! ranking, or deduplication of isomorphic sub-chains.
//!
//! # Example
//!
//! ```
//! use domino_trains::{ChainTree, Tile};
//!
//! # fn example() -> Result<(), domino_trains::ValidationError> {
//! let tiles = vec![Tile::new(1, Some(2))?, Tile::new(2, Some(3))?];
//! let tree = ChainTree::create(&tiles, 1)?;
//! // 1 -> [1 2] -> [2 3], one linear chain
//! assert_eq!(tree.root().children().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod tile;
mod tree;

pub use error::ValidationError;
pub use tile::Tile;
pub use tree::{ChainNode, ChainTree, NodeValue};
