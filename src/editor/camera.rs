//! Grid view camera and screen <-> cell mapping
//!
//! Tiles are drawn at `origin - offset + cell * tile_size * zoom`. Mouse
//! picking runs that transform backwards, so both directions live here and
//! must stay in sync.

use macroquad::math::{vec2, Vec2};
use crate::world::CellPos;

/// Pan offset and zoom of the 2D grid view
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Pan in screen pixels. Unbounded, the grid may be scrolled out of view.
    pub offset: Vec2,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    default_zoom: f32,
    /// Keyboard pan speed in pixels per second
    pub pan_speed: f32,
}

impl Camera {
    /// Zoom bounds are sorted and kept positive; the default is clamped into them
    pub fn new(min_zoom: f32, max_zoom: f32, default_zoom: f32, pan_speed: f32) -> Self {
        let lo = min_zoom.min(max_zoom).max(f32::EPSILON);
        let hi = min_zoom.max(max_zoom).max(lo);
        let default_zoom = default_zoom.clamp(lo, hi);
        Self {
            offset: Vec2::ZERO,
            zoom: default_zoom,
            min_zoom: lo,
            max_zoom: hi,
            default_zoom,
            pan_speed,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Move by a direction (each axis -1, 0 or +1) for `dt` seconds
    pub fn pan(&mut self, axis: Vec2, dt: f32) {
        self.offset += axis * self.pan_speed * dt;
    }

    /// Drag the view with the pointer: content follows the cursor
    pub fn drag(&mut self, pointer_delta: Vec2) {
        self.offset -= pointer_delta;
    }

    /// Add `scroll * speed` to the zoom, then clamp to the configured bounds
    pub fn zoom_by(&mut self, scroll: f32, speed: f32) {
        self.zoom = (self.zoom + scroll * speed).clamp(self.min_zoom, self.max_zoom);
    }

    /// Back to the origin at default zoom (new map, map loaded)
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.zoom = self.default_zoom;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0.25, 4.0, 1.0, 400.0)
    }
}

/// Converts between screen pixels and grid cells for one view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMapper {
    /// Screen position of cell (0, 0) at zero offset
    pub origin: Vec2,
    /// Tile edge length in pixels at zoom 1
    pub tile_size: f32,
}

impl GridMapper {
    pub fn new(origin: Vec2, tile_size: f32) -> Self {
        Self { origin, tile_size }
    }

    /// On-screen edge length of one tile
    pub fn cell_extent(&self, camera: &Camera) -> f32 {
        self.tile_size * camera.zoom()
    }

    /// Top-left screen position of a cell
    pub fn cell_to_screen(&self, camera: &Camera, pos: CellPos) -> Vec2 {
        self.origin - camera.offset + vec2(pos.col as f32, pos.row as f32) * self.cell_extent(camera)
    }

    /// Screen position to unzoomed world position
    pub fn screen_to_world(&self, camera: &Camera, screen: Vec2) -> Vec2 {
        (screen - self.origin + camera.offset) / camera.zoom()
    }

    /// Cell under a screen position, `None` outside a `rows` x `cols` grid
    pub fn screen_to_cell(&self, camera: &Camera, screen: Vec2, rows: usize, cols: usize) -> Option<CellPos> {
        let world = self.screen_to_world(camera, screen);
        let col = (world.x / self.tile_size).floor();
        let row = (world.y / self.tile_size).floor();
        if !col.is_finite() || !row.is_finite() || col < 0.0 || row < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < rows && col < cols).then_some(CellPos::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zoom_clamps() {
        let mut cam = Camera::new(0.5, 2.0, 1.0, 100.0);
        cam.zoom_by(100.0, 0.1);
        assert_eq!(cam.zoom(), 2.0);
        cam.zoom_by(-100.0, 0.1);
        assert_eq!(cam.zoom(), 0.5);
        cam.zoom_by(3.0, 0.1);
        assert!((cam.zoom() - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_bounds_are_normalised() {
        let mut cam = Camera::new(3.0, 0.5, 10.0, 0.0);
        assert_eq!(cam.zoom(), 3.0);
        cam.zoom_by(-100.0, 0.1);
        assert_eq!(cam.zoom(), 0.5);

        let cam = Camera::new(-1.0, 0.0, 1.0, 0.0);
        assert!(cam.zoom() > 0.0);
    }

    #[test]
    fn test_pan_and_reset() {
        let mut cam = Camera::new(0.5, 2.0, 1.0, 100.0);
        cam.pan(vec2(1.0, -1.0), 0.5);
        assert_eq!(cam.offset, vec2(50.0, -50.0));
        cam.drag(vec2(10.0, 10.0));
        assert_eq!(cam.offset, vec2(40.0, -60.0));
        cam.zoom_by(1.0, 0.5);
        cam.reset();
        assert_eq!(cam.offset, Vec2::ZERO);
        assert_eq!(cam.zoom(), 1.0);
    }

    #[test]
    fn test_screen_to_cell_identity_camera() {
        let cam = Camera::default();
        let map = GridMapper::new(vec2(64.0, 64.0), 32.0);
        assert_eq!(map.screen_to_cell(&cam, vec2(64.0, 64.0), 20, 20), Some(CellPos::new(0, 0)));
        assert_eq!(map.screen_to_cell(&cam, vec2(64.0 + 33.0, 64.0 + 65.0), 20, 20), Some(CellPos::new(2, 1)));
        // Left of / above the grid must not truncate toward zero into cell 0
        assert_eq!(map.screen_to_cell(&cam, vec2(50.0, 70.0), 20, 20), None);
        assert_eq!(map.screen_to_cell(&cam, vec2(70.0, 50.0), 20, 20), None);
        // Past the far edge
        assert_eq!(map.screen_to_cell(&cam, vec2(64.0 + 32.0 * 20.0, 70.0), 20, 20), None);
    }

    #[test]
    fn test_screen_to_cell_with_pan_and_zoom() {
        let mut cam = Camera::new(0.25, 4.0, 1.0, 0.0);
        cam.zoom_by(1.0, 1.0); // zoom 2
        cam.offset = vec2(32.0, -64.0);
        let map = GridMapper::new(vec2(0.0, 0.0), 32.0);

        let corner = map.cell_to_screen(&cam, CellPos::new(3, 4));
        assert_eq!(corner, vec2(-32.0 + 4.0 * 64.0, 64.0 + 3.0 * 64.0));
        assert_eq!(map.screen_to_cell(&cam, corner, 10, 10), Some(CellPos::new(3, 4)));
        assert_eq!(map.screen_to_cell(&cam, corner + vec2(63.0, 63.0), 10, 10), Some(CellPos::new(3, 4)));
        assert_eq!(map.screen_to_cell(&cam, corner + vec2(64.0, 0.0), 10, 10), Some(CellPos::new(3, 5)));
    }

    proptest! {
        #[test]
        fn prop_screen_to_cell_inverts_render(
            row in 0usize..40,
            col in 0usize..40,
            ox in -2000.0f32..2000.0,
            oy in -2000.0f32..2000.0,
            zoom in 0.25f32..4.0,
        ) {
            let mut cam = Camera::new(0.25, 4.0, 1.0, 0.0);
            cam.offset = vec2(ox, oy);
            cam.zoom_by(zoom - 1.0, 1.0);
            let map = GridMapper::new(vec2(64.0, 64.0), 32.0);

            let pos = CellPos::new(row, col);
            // Sample the middle of the drawn tile to stay clear of float edges
            let half = map.cell_extent(&cam) * 0.5;
            let screen = map.cell_to_screen(&cam, pos) + vec2(half, half);
            prop_assert_eq!(map.screen_to_cell(&cam, screen, 40, 40), Some(pos));
        }
    }
}
