//! Command-line collaborators for the domino chain calculator.
//!
//! The core enumeration lives in [`domino_trains`]; this crate supplies
//! the incidental I/O around it: a JSON loader for tile data and an
//! indented renderer for the resulting tree.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod loader;
mod render;

pub use loader::load_tile_data;
pub use render::render_tree;
