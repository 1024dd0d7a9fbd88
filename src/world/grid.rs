//! The tile grid being edited
//!
//! Dense row-major storage: every in-range cell always holds a tile. Tiles are
//! plain values; repainting changes a tile's kind, never its position.

use std::collections::BTreeMap;
use super::{GridError, TileKind, TileSet};

/// Limits applied to grids created from files or dialogs
pub mod limits {
    /// Maximum rows or columns in a grid
    pub const MAX_DIMENSION: usize = 1024;
}

/// A cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One cell of the grid. Positions fit in `u16` since dimensions are capped
/// at `limits::MAX_DIMENSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
    row: u16,
    col: u16,
}

impl Tile {
    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    pub fn pos(&self) -> CellPos {
        CellPos::new(self.row(), self.col())
    }
}

/// Check user or file supplied dimensions and convert them to sizes
pub fn checked_dimensions(rows: i64, cols: i64) -> Result<(usize, usize), GridError> {
    let max = limits::MAX_DIMENSION as i64;
    if rows <= 0 || cols <= 0 || rows > max || cols > max {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    Ok((rows as usize, cols as usize))
}

/// Rectangular grid of typed tiles plus the last known location of each
/// special kind
#[derive(Debug, Clone)]
pub struct TileGrid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
    /// Per-ordinal "is special" flags copied from the tile set
    special_kinds: Vec<bool>,
    special_locations: BTreeMap<TileKind, CellPos>,
}

impl TileGrid {
    /// A `rows` x `cols` grid with every cell Empty
    pub fn blank(rows: usize, cols: usize, tiles: &TileSet) -> Result<Self, GridError> {
        checked_dimensions(rows as i64, cols as i64)?;
        let cells = (0..rows as u16)
            .flat_map(|row| (0..cols as u16).map(move |col| Tile { kind: TileKind::EMPTY, row, col }))
            .collect();
        Ok(Self {
            rows,
            cols,
            tiles: cells,
            special_kinds: tiles.iter().map(|def| def.special).collect(),
            special_locations: BTreeMap::new(),
        })
    }

    /// Number of rows (height)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (width)
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfBounds {
                row: row as i64,
                col: col as i64,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&Tile, GridError> {
        let index = self.index(row, col)?;
        Ok(&self.tiles[index])
    }

    /// Repaint a cell. Special kinds also update their recorded location.
    pub fn set(&mut self, row: usize, col: usize, kind: TileKind) -> Result<(), GridError> {
        let index = self.index(row, col)?;
        self.tiles[index].kind = kind;
        if self.is_special(kind) {
            self.record_special_location(kind, row, col);
        }
        Ok(())
    }

    fn is_special(&self, kind: TileKind) -> bool {
        self.special_kinds.get(kind.0 as usize).copied().unwrap_or(false)
    }

    /// Remember where a special kind was last placed. Last write wins; placing
    /// a second spawn of the same kind silently replaces the first location.
    pub fn record_special_location(&mut self, kind: TileKind, row: usize, col: usize) {
        self.special_locations.insert(kind, CellPos::new(row, col));
    }

    pub fn special_location(&self, kind: TileKind) -> Option<CellPos> {
        self.special_locations.get(&kind).copied()
    }

    /// Existing orthogonal neighbours in the order up, down, left, right
    #[allow(dead_code)]
    pub fn neighbors(&self, row: usize, col: usize) -> Result<Vec<CellPos>, GridError> {
        self.index(row, col)?;
        let mut result = Vec::with_capacity(4);
        if row > 0 {
            result.push(CellPos::new(row - 1, col));
        }
        if row + 1 < self.rows {
            result.push(CellPos::new(row + 1, col));
        }
        if col > 0 {
            result.push(CellPos::new(row, col - 1));
        }
        if col + 1 < self.cols {
            result.push(CellPos::new(row, col + 1));
        }
        Ok(result)
    }

    /// Tiles of one row, left to right
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = (row * self.cols).min(self.tiles.len());
        let end = (start + self.cols).min(self.tiles.len());
        &self.tiles[start..end]
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|tile| tile.kind == kind).count()
    }
}

/// Grids are equal when they have the same size and the same kind in every
/// cell. Special locations depend on paint order and are not compared.
impl PartialEq for TileGrid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.tiles == other.tiles
    }
}

impl Eq for TileGrid {}
