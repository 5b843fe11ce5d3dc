//! Domino chain calculator.
//!
//! Reads `dominoes.json` from the working directory, enumerates every
//! chain buildable from its starting value, and prints the resulting
//! tree to stdout. Takes no arguments; any validation, I/O, or parse
//! error exits non-zero.

use anyhow::Result;
use domino_trains::ChainTree;
use domino_trains_cli::{load_tile_data, render_tree};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fixed input path, relative to the working directory.
const INPUT_PATH: &str = "dominoes.json";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (starting_value, tiles) = load_tile_data(INPUT_PATH)?;
    let tree = ChainTree::create(&tiles, starting_value)?;
    info!(starting_value, "Chain tree built");

    print!("{}", render_tree(&tree));
    Ok(())
}
