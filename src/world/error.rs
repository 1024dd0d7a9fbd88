//! Errors raised by the grid model and the map file loader

use std::path::PathBuf;

/// Everything that can go wrong building, indexing, loading or saving a grid
///
/// Row and column numbers are 0-based data coordinates; `line` is the 1-based
/// line number in the source text.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{cols}: each must be in 1..={}", super::limits::MAX_DIMENSION)]
    InvalidDimensions { rows: i64, cols: i64 },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds { row: i64, col: i64, rows: usize, cols: usize },

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("line {line}: field {col} of row {row} is not a number: '{field}'")]
    MalformedField { line: usize, row: usize, col: usize, field: String },

    #[error("line {line}: tile kind {value} at ({row}, {col}) is not in 0..={max}")]
    InvalidTileKind { line: usize, row: usize, col: usize, value: i64, max: u8 },

    #[error("line {line}: more rows than the {declared} declared in the header")]
    TooManyRows { line: usize, declared: usize },

    #[error("line {line}: row {row} has more than the {declared} declared columns")]
    TooManyColumns { line: usize, row: usize, declared: usize },

    #[error("file has {found} rows but the header declares {declared}")]
    IncompleteRows { declared: usize, found: usize },

    #[error("widest row has {found} columns but the header declares {declared}")]
    IncompleteColumns { declared: usize, found: usize },

    #[error("map file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("could not read {}: {source}", path.display())]
    FileReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
