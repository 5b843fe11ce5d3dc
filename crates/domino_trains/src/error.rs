//! Validation error types.

use crate::tile::Tile;
use derive_more::{Display, Error};

/// Error raised when input data violates a construction precondition.
///
/// These are fail-fast errors: nothing partially constructed survives
/// them, and callers are expected to let them propagate.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ValidationError {
    /// A pip value was negative at [`Tile`](crate::Tile) construction.
    #[display("pip values must be non-negative integers, got {value}")]
    NegativePip {
        /// The offending input value.
        value: i64,
    },
    /// The same tile appeared twice in input that requires unique tiles.
    ///
    /// Tile equality is positional, so a tile and its inversion are NOT
    /// considered duplicates.
    #[display("all tiles must be unique, {tile} appears more than once")]
    DuplicateTile {
        /// The tile that occurred more than once.
        tile: Tile,
    },
}
