//! Brush painting on the tile grid
//!
//! Modes are driven by modifier keys rather than a tool enum:
//! - plain: paint the selected kind on the cell under the pointer
//! - erase held: paint Empty instead
//! - line held: fill the straight row/column run from the last painted cell
//!
//! Line fill only works along a shared row or column. A diagonal drag fills
//! nothing, but still moves the anchor to the new cell.

use crate::world::{CellPos, GridError, TileGrid, TileKind, TileSet};

/// Modifier keys that change what a paint does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintModifiers {
    pub erase: bool,
    pub line: bool,
}

/// Cells on the inclusive axis-aligned segment between two cells, walking
/// from `from` to `to`. Empty when the cells share neither row nor column.
pub fn line_path(from: CellPos, to: CellPos) -> Vec<CellPos> {
    if from.row == to.row {
        let (lo, hi) = (from.col.min(to.col), from.col.max(to.col));
        let mut cells: Vec<_> = (lo..=hi).map(|col| CellPos::new(from.row, col)).collect();
        if from.col > to.col {
            cells.reverse();
        }
        cells
    } else if from.col == to.col {
        let (lo, hi) = (from.row.min(to.row), from.row.max(to.row));
        let mut cells: Vec<_> = (lo..=hi).map(|row| CellPos::new(row, from.col)).collect();
        if from.row > to.row {
            cells.reverse();
        }
        cells
    } else {
        Vec::new()
    }
}

/// Brush state carried between frames
#[derive(Debug, Clone, PartialEq)]
pub struct PaintSession {
    selected: TileKind,
    last_painted: Option<CellPos>,
}

impl PaintSession {
    /// Starts with the first paintable kind selected
    pub fn new() -> Self {
        Self {
            selected: TileKind::WALL,
            last_painted: None,
        }
    }

    pub fn selected(&self) -> TileKind {
        self.selected
    }

    /// Anchor for the next line fill
    pub fn last_painted(&self) -> Option<CellPos> {
        self.last_painted
    }

    /// Forget the line anchor (the grid it pointed into is gone)
    pub fn clear_anchor(&mut self) {
        self.last_painted = None;
    }

    /// Select a kind directly. Empty and unknown kinds are refused.
    pub fn select(&mut self, kind: TileKind, tiles: &TileSet) -> bool {
        if kind.is_empty() || !tiles.contains(kind) {
            return false;
        }
        self.selected = kind;
        true
    }

    /// Next paintable kind, wrapping from the last kind back to 1
    pub fn next_kind(&mut self, tiles: &TileSet) -> TileKind {
        let max = tiles.max_kind();
        self.selected = if self.selected >= max {
            TileKind(1)
        } else {
            TileKind(self.selected.0 + 1)
        };
        self.selected
    }

    /// Previous paintable kind, wrapping from 1 to the last kind
    pub fn prev_kind(&mut self, tiles: &TileSet) -> TileKind {
        let max = tiles.max_kind();
        self.selected = if self.selected.0 <= 1 || self.selected > max {
            max
        } else {
            TileKind(self.selected.0 - 1)
        };
        self.selected
    }

    /// Keep the selection valid after the tile set changes
    pub fn clamp_to(&mut self, tiles: &TileSet) {
        if !tiles.contains(self.selected) || self.selected.is_empty() {
            self.selected = TileKind(1);
        }
    }

    /// Apply one pointer-down over `cell`. Returns how many cells changed kind.
    ///
    /// A `None` cell (pointer off the grid) does nothing and keeps the anchor.
    pub fn paint(
        &mut self,
        grid: &mut TileGrid,
        cell: Option<CellPos>,
        modifiers: PaintModifiers,
    ) -> Result<usize, GridError> {
        let Some(cell) = cell else {
            return Ok(0);
        };
        let kind = if modifiers.erase { TileKind::EMPTY } else { self.selected };

        let targets = match self.last_painted {
            Some(anchor) if modifiers.line => line_path(anchor, cell),
            _ => vec![cell],
        };

        let mut changed = 0;
        for pos in targets {
            if grid.get(pos.row, pos.col)?.kind != kind {
                changed += 1;
            }
            grid.set(pos.row, pos.col, kind)?;
        }
        self.last_painted = Some(cell);
        Ok(changed)
    }
}

impl Default for PaintSession {
    fn default() -> Self {
        Self::new()
    }
}
