//! 2D grid view
//!
//! Draws every visible tile at `origin - offset + cell * tile_size * zoom`
//! (see [`GridMapper`]) and the brush preview under the pointer. Input is
//! handled by [`EditorSession::update`]; this module only draws.

use std::ops::Range;
use macroquad::prelude::*;
use crate::ui::{theme, Rect};
use crate::world::{CellPos, TileKind, TileSet};
use super::{Camera, EditorSession, GridMapper};

/// Textures for tile kinds that name a sprite, indexed by ordinal
#[derive(Default)]
pub struct TileSprites {
    textures: Vec<Option<Texture2D>>,
}

impl TileSprites {
    /// Load every sprite the tile set names. A sprite that fails to load
    /// falls back to the kind's colour.
    pub async fn load(tiles: &TileSet) -> Self {
        let mut textures = Vec::with_capacity(tiles.len());
        for def in tiles.iter() {
            let texture = match &def.sprite {
                Some(path) => match load_texture(path).await {
                    Ok(texture) => {
                        texture.set_filter(FilterMode::Nearest);
                        Some(texture)
                    }
                    Err(e) => {
                        eprintln!("Failed to load sprite '{}' for {}: {}", path, def.name, e);
                        None
                    }
                },
                None => None,
            };
            textures.push(texture);
        }
        Self { textures }
    }

    pub fn get(&self, kind: TileKind) -> Option<&Texture2D> {
        self.textures.get(kind.ordinal() as usize).and_then(Option::as_ref)
    }
}

pub fn kind_color(tiles: &TileSet, kind: TileKind) -> Color {
    let [r, g, b, a] = tiles.color(kind);
    Color::from_rgba(r, g, b, a)
}

/// Rows and columns of a `rows` x `cols` grid that intersect `view`.
/// `None` when nothing is visible.
pub fn visible_cells(
    mapper: &GridMapper,
    camera: &Camera,
    view: Rect,
    rows: usize,
    cols: usize,
) -> Option<(Range<usize>, Range<usize>)> {
    let top_left = mapper.screen_to_world(camera, vec2(view.x, view.y)) / mapper.tile_size;
    let bottom_right = mapper.screen_to_world(camera, vec2(view.right(), view.bottom())) / mapper.tile_size;

    let clamp = |v: f32, max: usize| v.max(0.0).min(max as f32) as usize;
    let row_range = clamp(top_left.y.floor(), rows)..clamp(bottom_right.y.ceil(), rows);
    let col_range = clamp(top_left.x.floor(), cols)..clamp(bottom_right.x.ceil(), cols);
    (!row_range.is_empty() && !col_range.is_empty()).then_some((row_range, col_range))
}

fn draw_cell(pos: Vec2, extent: f32, kind: TileKind, tiles: &TileSet, sprites: &TileSprites) {
    match sprites.get(kind) {
        Some(texture) => draw_texture_ex(
            texture,
            pos.x,
            pos.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(extent, extent)),
                ..Default::default()
            },
        ),
        None => draw_rectangle(pos.x, pos.y, extent, extent, kind_color(tiles, kind)),
    }
}

/// Draw the grid and the hover preview into `rect`
pub fn draw_grid_view(rect: Rect, session: &EditorSession, sprites: &TileSprites) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::BG_COLOR);

    let grid = &session.grid;
    let camera = &session.camera;
    let mapper = session.mapper(rect);
    let extent = mapper.cell_extent(camera);

    if let Some((rows, cols)) = visible_cells(&mapper, camera, rect, grid.rows(), grid.cols()) {
        for row in rows {
            let tiles = grid.row(row);
            for col in cols.clone() {
                let pos = mapper.cell_to_screen(camera, CellPos::new(row, col));
                draw_cell(pos, extent, tiles[col].kind, &session.tiles, sprites);
            }
        }
    }

    // Grid bounds
    let origin = mapper.cell_to_screen(camera, CellPos::new(0, 0));
    draw_rectangle_lines(
        origin.x,
        origin.y,
        grid.cols() as f32 * extent,
        grid.rows() as f32 * extent,
        1.0,
        theme::GRID_BORDER,
    );

    // Brush preview: selected kind with a red outline
    if let Some(cell) = session.hovered() {
        let pos = mapper.cell_to_screen(camera, cell);
        draw_cell(pos, extent, session.paint.selected(), &session.tiles, sprites);
        draw_rectangle_lines(
            pos.x,
            pos.y,
            extent,
            extent,
            theme::HOVER_OUTLINE_THICKNESS,
            theme::HOVER_OUTLINE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_grid_visible() {
        let cam = Camera::default();
        let mapper = GridMapper::new(vec2(64.0, 64.0), 32.0);
        let view = Rect::new(0.0, 0.0, 1024.0, 1024.0);
        assert_eq!(visible_cells(&mapper, &cam, view, 20, 20), Some((0..20, 0..20)));
    }

    #[test]
    fn test_partially_visible_grid_is_culled() {
        let mut cam = Camera::default();
        cam.offset = vec2(320.0, 0.0);
        let mapper = GridMapper::new(vec2(0.0, 0.0), 32.0);
        let view = Rect::new(0.0, 0.0, 100.0, 50.0);
        // Columns 10..14 (partially 13), rows 0..2
        assert_eq!(visible_cells(&mapper, &cam, view, 20, 20), Some((0..2, 10..14)));
    }

    #[test]
    fn test_grid_scrolled_away() {
        let mut cam = Camera::default();
        cam.offset = vec2(-5000.0, 0.0);
        let mapper = GridMapper::new(vec2(0.0, 0.0), 32.0);
        let view = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(visible_cells(&mapper, &cam, view, 20, 20), None);
    }

    #[test]
    fn test_kind_color() {
        let tiles = TileSet::maze();
        assert_eq!(kind_color(&tiles, TileKind::WALL), Color::from_rgba(255, 255, 255, 255));
    }
}
