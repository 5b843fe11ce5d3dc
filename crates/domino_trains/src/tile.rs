//! Core domino tile value type.

use crate::error::ValidationError;
use serde::Serialize;
use tracing::instrument;

/// A single domino tile with two pip values.
///
/// Tiles are immutable once constructed. Equality and hashing are
/// positional: `Tile [2 5]` and `Tile [5 2]` are distinct values, even
/// though [`contains`](Tile::contains) and
/// [`opposite_of`](Tile::opposite_of) treat both sides symmetrically for
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tile {
    /// First pip value.
    value_one: u32,
    /// Second pip value.
    value_two: u32,
}

impl Tile {
    /// Creates a tile from two pip values.
    ///
    /// A `value_two` of `None` produces a double (both sides equal to
    /// `value_one`); the defaulted value is validated like any other.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativePip`] if either value is
    /// negative or outside the representable pip range.
    #[instrument]
    pub fn new(value_one: i64, value_two: Option<i64>) -> Result<Self, ValidationError> {
        let value_two = value_two.unwrap_or(value_one);
        let pip =
            |value: i64| u32::try_from(value).map_err(|_| ValidationError::NegativePip { value });
        Ok(Self {
            value_one: pip(value_one)?,
            value_two: pip(value_two)?,
        })
    }

    /// Returns the first pip value.
    pub fn value_one(&self) -> u32 {
        self.value_one
    }

    /// Returns the second pip value.
    pub fn value_two(&self) -> u32 {
        self.value_two
    }

    /// Returns whether either side of the tile equals `value`.
    pub fn contains(&self, value: u32) -> bool {
        self.value_one == value || self.value_two == value
    }

    /// Returns the side opposite the one matching `value`.
    ///
    /// `None` is the not-found value: it means `value` appears on neither
    /// side, which is an ordinary outcome for a tile that cannot extend
    /// the current chain, not an error.
    pub fn opposite_of(&self, value: u32) -> Option<u32> {
        if self.value_one == value {
            Some(self.value_two)
        } else if self.value_two == value {
            Some(self.value_one)
        } else {
            None
        }
    }

    /// Returns whether both sides carry the same pip value.
    pub fn is_double(&self) -> bool {
        self.value_one == self.value_two
    }

    /// Returns a new tile with the sides swapped.
    ///
    /// Under positional equality the result of inverting a non-double is
    /// a distinct value from `self`.
    pub fn invert(&self) -> Self {
        Self {
            value_one: self.value_two,
            value_two: self.value_one,
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile [{} {}]", self.value_one, self.value_two)
    }
}
