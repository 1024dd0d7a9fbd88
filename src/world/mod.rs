//! World module - the tile grid and its file format
//!
//! - Tile kinds come from a configurable [`TileSet`]
//! - [`TileGrid`] is the dense grid the editor paints on
//! - `grid_io` reads and writes the comma-separated map format

mod error;
mod grid;
mod grid_io;
mod tileset;

pub use error::*;
pub use grid::*;
pub use grid_io::*;
pub use tileset::*;
