//! Map file loading and saving
//!
//! Maps are plain comma-separated text:
//!
//! ```text
//! rows,cols
//! k,k,k,...      (one line per row, `cols` kind ordinals each)
//! ```
//!
//! A file holding only the header line is a request for a blank grid of that
//! size. Loading either produces a fully populated grid or fails without
//! touching anything; the caller keeps whatever grid it had.

use std::fs;
use std::path::Path;
use super::{checked_dimensions, GridError, TileGrid, TileKind, TileSet};

/// Split a line into trimmed fields, tolerating one trailing comma
fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    let line = line.trim_end();
    let line = line.strip_suffix(',').unwrap_or(line);
    line.split(',').map(str::trim)
}

/// Parse the `rows,cols` header. Extra fields are ignored.
fn parse_header(line: &str) -> Result<(usize, usize), GridError> {
    let fields: Vec<&str> = split_fields(line).collect();
    if fields.len() < 2 {
        return Err(GridError::MalformedHeader(format!(
            "expected 'rows,cols', found '{}'",
            line.trim()
        )));
    }
    let number = |field: &str, what: &str| {
        field.parse::<i64>().map_err(|_| {
            GridError::MalformedHeader(format!("{} '{}' is not a number", what, field))
        })
    };
    let rows = number(fields[0], "row count")?;
    let cols = number(fields[1], "column count")?;
    checked_dimensions(rows, cols)
}

/// Parse map text into a grid using the given tile set
pub fn parse_grid(source: &str, tiles: &TileSet) -> Result<TileGrid, GridError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines
        .next()
        .ok_or_else(|| GridError::MalformedHeader("file is empty".to_string()))?;
    let (rows, cols) = parse_header(header)?;
    let mut grid = TileGrid::blank(rows, cols, tiles)?;

    let mut max_row: Option<usize> = None;
    let mut max_col: Option<usize> = None;

    for (row, (line, text)) in lines.enumerate() {
        for (col, field) in split_fields(text).enumerate() {
            let value: i64 = field.parse().map_err(|_| GridError::MalformedField {
                line,
                row,
                col,
                field: field.to_string(),
            })?;
            if !tiles.is_valid(value) {
                return Err(GridError::InvalidTileKind {
                    line,
                    row,
                    col,
                    value,
                    max: tiles.max_kind().ordinal(),
                });
            }
            if row >= rows {
                return Err(GridError::TooManyRows { line, declared: rows });
            }
            if col >= cols {
                return Err(GridError::TooManyColumns { line, row, declared: cols });
            }
            grid.set(row, col, TileKind(value as u8))?;
            max_col = max_col.max(Some(col));
        }
        max_row = Some(row);
    }

    // Header-only file: blank grid of the declared size
    let Some(max_row) = max_row else {
        return Ok(grid);
    };
    if max_row + 1 < rows {
        return Err(GridError::IncompleteRows { declared: rows, found: max_row + 1 });
    }
    let widest = max_col.map_or(0, |col| col + 1);
    if widest < cols {
        return Err(GridError::IncompleteColumns { declared: cols, found: widest });
    }
    Ok(grid)
}

/// Render a grid as map text. Always ends with a newline.
pub fn serialize_grid(grid: &TileGrid) -> String {
    let mut out = format!("{},{}\n", grid.rows(), grid.cols());
    for row in 0..grid.rows() {
        let line: Vec<String> = grid
            .row(row)
            .iter()
            .map(|tile| tile.kind.ordinal().to_string())
            .collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Read and parse a map file
pub fn load_grid(path: &Path, tiles: &TileSet) -> Result<TileGrid, GridError> {
    println!("Loading map '{}'", path.display());
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GridError::FileNotFound(path.to_path_buf())
        } else {
            GridError::FileReadFailed { path: path.to_path_buf(), source: e }
        }
    })?;
    let grid = parse_grid(&contents, tiles)?;
    println!("Map loaded ({}x{})", grid.rows(), grid.cols());
    Ok(grid)
}

/// Write a grid to a map file, replacing any existing file
pub fn save_grid(grid: &TileGrid, path: &Path) -> Result<(), GridError> {
    fs::write(path, serialize_grid(grid)).map_err(|e| GridError::FileWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    println!("Saved map '{}' ({}x{})", path.display(), grid.rows(), grid.cols());
    Ok(())
}
