//! JSON tile data loader.

use anyhow::{Context, Result};
use domino_trains::Tile;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Wire format of the input file.
///
/// Field names are a fixed contract with upstream data producers.
#[derive(Debug, Deserialize)]
struct TileData {
    starting_value: u32,
    dominoes: Vec<TileRecord>,
}

/// One tile record; a missing `valueTwo` means a double.
#[derive(Debug, Deserialize)]
struct TileRecord {
    #[serde(rename = "valueOne")]
    value_one: i64,
    #[serde(rename = "valueTwo")]
    value_two: Option<i64>,
}

/// Loads a starting value and tile list from a JSON file.
///
/// Tiles are returned in file order, which the enumerator preserves as
/// sibling order.
///
/// # Errors
///
/// Fails on unreadable or malformed input, and on tile records that do
/// not pass [`Tile::new`] validation.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_tile_data(path: impl AsRef<Path>) -> Result<(u32, Vec<Tile>)> {
    debug!("Loading tile data");
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read tile data from {}", path.as_ref().display()))?;
    let data: TileData =
        serde_json::from_str(&content).context("Failed to parse tile data as JSON")?;

    let tiles = data
        .dominoes
        .iter()
        .map(|record| Tile::new(record.value_one, record.value_two))
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid tile in input data")?;

    info!(
        starting_value = data.starting_value,
        tile_count = tiles.len(),
        "Tile data loaded"
    );
    Ok((data.starting_value, tiles))
}
