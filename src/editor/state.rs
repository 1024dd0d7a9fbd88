//! Editor session: everything one open map needs
//!
//! The session owns the grid, the tile set it was built with, the camera and
//! the brush. The frame loop hands it an [`InputState`] and the screen rect
//! of the grid view; nothing in here reads macroquad input directly.

use std::path::{Path, PathBuf};
use macroquad::math::{vec2, Vec2};
use crate::config::{ConfigError, EditorConfig};
use crate::input::InputState;
use crate::ui::Rect;
use crate::world::{load_grid, save_grid, CellPos, GridError, TileGrid, TileKind, TileSet};
use super::{Camera, GridMapper, PaintModifiers, PaintSession};

/// How long status messages stay up, in seconds
pub const STATUS_SECS: f32 = 3.0;

pub struct EditorSession {
    pub grid: TileGrid,
    pub tiles: TileSet,
    pub camera: Camera,
    pub paint: PaintSession,
    pub config: EditorConfig,
    /// File the grid was loaded from or last saved to
    current_file: Option<PathBuf>,
    /// Unsaved changes
    dirty: bool,
    /// Cell under the pointer this frame
    hovered: Option<CellPos>,
    /// Left button went down inside the grid view and is still held
    stroke: bool,
    /// Message and seconds left to show it
    status: Option<(String, f32)>,
}

impl EditorSession {
    /// Blank grid of the configured default size
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        let tiles = config.tile_set()?;
        let grid = TileGrid::blank(config.default_rows, config.default_cols, &tiles)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        let mut paint = PaintSession::new();
        paint.clamp_to(&tiles);
        Ok(Self {
            grid,
            camera: config.camera(),
            tiles,
            paint,
            config,
            current_file: None,
            dirty: false,
            hovered: None,
            stroke: false,
            status: None,
        })
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn hovered(&self) -> Option<CellPos> {
        self.hovered
    }

    /// Display name for the status bar, with `*` when there are unsaved changes
    pub fn title(&self) -> String {
        let name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .map_or_else(|| "untitled".to_string(), |n| n.to_string_lossy().into_owned());
        if self.dirty {
            format!("{}*", name)
        } else {
            name
        }
    }

    /// Replace the grid with a blank one. Camera and line anchor start over.
    pub fn new_map(&mut self, rows: i64, cols: i64) -> Result<(), GridError> {
        let (rows, cols) = crate::world::checked_dimensions(rows, cols)?;
        self.install(TileGrid::blank(rows, cols, &self.tiles)?, None);
        println!("New map ({}x{})", rows, cols);
        Ok(())
    }

    /// Load a map file. On failure the current grid stays as it was.
    pub fn open(&mut self, path: &Path) -> Result<(), GridError> {
        let grid = load_grid(path, &self.tiles)?;
        self.install(grid, Some(path.to_path_buf()));
        Ok(())
    }

    fn install(&mut self, grid: TileGrid, file: Option<PathBuf>) {
        self.grid = grid;
        self.current_file = file;
        self.dirty = false;
        self.hovered = None;
        self.stroke = false;
        self.camera.reset();
        self.paint.clear_anchor();
    }

    /// Save to the current file. Returns false when there is none yet and the
    /// caller has to ask for a path.
    pub fn save(&mut self) -> Result<bool, GridError> {
        let Some(path) = self.current_file.clone() else {
            return Ok(false);
        };
        self.save_as(&path)?;
        Ok(true)
    }

    pub fn save_as(&mut self, path: &Path) -> Result<(), GridError> {
        save_grid(&self.grid, path)?;
        self.current_file = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }

    pub fn select_kind(&mut self, kind: TileKind) -> bool {
        let changed = self.paint.select(kind, &self.tiles);
        if changed {
            self.log_selection();
        }
        changed
    }

    pub fn next_kind(&mut self) {
        self.paint.next_kind(&self.tiles);
        self.log_selection();
    }

    pub fn prev_kind(&mut self) {
        self.paint.prev_kind(&self.tiles);
        self.log_selection();
    }

    fn log_selection(&self) {
        println!("Selected: {}", self.tiles.name(self.paint.selected()));
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    pub fn set_status(&mut self, message: &str, duration_secs: f32) {
        self.status = Some((message.to_string(), duration_secs));
    }

    /// Current status message if not expired
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(msg, _)| msg.as_str())
    }

    /// Log an error and show it in the status bar
    pub fn report_error(&mut self, what: &str, err: &dyn std::error::Error) {
        eprintln!("{}: {}", what, err);
        self.set_status(&format!("{}: {}", what, err), STATUS_SECS * 2.0);
    }

    /// Mapper for a grid view drawn in `view`
    pub fn mapper(&self, view: Rect) -> GridMapper {
        let (ox, oy) = self.config.screen_origin;
        GridMapper::new(vec2(view.x + ox, view.y + oy), self.config.tile_size)
    }

    /// One frame of camera movement and painting
    pub fn update(&mut self, input: &InputState, view: Rect) {
        let expired = match &mut self.status {
            Some((_, remaining)) => {
                *remaining -= input.dt;
                *remaining <= 0.0
            }
            None => false,
        };
        if expired {
            self.status = None;
        }

        let inside = view.contains(input.mouse.x, input.mouse.y);

        self.camera.pan(input.pan_axis, input.dt);
        if input.middle_down && inside && input.mouse_delta != Vec2::ZERO {
            self.camera.drag(input.mouse_delta);
        }
        // Scroll without the zoom modifier is left unused
        if inside && input.scroll != 0.0 && input.zoom_held() {
            self.camera.zoom_by(input.scroll, self.config.zoom_speed);
        }

        let mapper = self.mapper(view);
        self.hovered = if inside {
            mapper.screen_to_cell(&self.camera, input.mouse, self.grid.rows(), self.grid.cols())
        } else {
            None
        };

        // Paint only while a press that began inside the view is held. Line
        // fill anchors to the current stroke, so a new press starts fresh.
        if input.left_pressed && inside {
            self.stroke = true;
            self.paint.clear_anchor();
        } else if input.left_released || !input.left_down {
            self.stroke = false;
        }

        if self.stroke && inside {
            let modifiers = PaintModifiers {
                erase: input.erase_held(),
                line: input.line_held(),
            };
            match self.paint.paint(&mut self.grid, self.hovered, modifiers) {
                Ok(0) => {}
                Ok(_) => self.dirty = true,
                Err(e) => self.report_error("Paint failed", &e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ModifierKeys;
    use tempfile::TempDir;

    const VIEW: Rect = Rect::new(0.0, 28.0, 800.0, 550.0);

    fn session() -> EditorSession {
        EditorSession::new(EditorConfig::default()).unwrap()
    }

    /// Pointer over the centre of a cell with the default camera
    fn over(session: &EditorSession, row: usize, col: usize) -> Vec2 {
        let mapper = session.mapper(VIEW);
        let half = mapper.cell_extent(&session.camera) * 0.5;
        mapper.cell_to_screen(&session.camera, CellPos::new(row, col)) + vec2(half, half)
    }

    fn click(mouse: Vec2, modifiers: ModifierKeys) -> InputState {
        InputState { mouse, left_down: true, left_pressed: true, modifiers, dt: 0.016, ..Default::default() }
    }

    #[test]
    fn test_new_session_uses_config() {
        let config = EditorConfig { default_rows: 5, default_cols: 7, ..Default::default() };
        let session = EditorSession::new(config).unwrap();
        assert_eq!((session.grid.rows(), session.grid.cols()), (5, 7));
        assert_eq!(session.paint.selected(), TileKind::WALL);
        assert!(!session.is_dirty());
        assert_eq!(session.title(), "untitled");
    }

    #[test]
    fn test_click_paints_and_marks_dirty() {
        let mut session = session();
        let input = click(over(&session, 2, 3), ModifierKeys::default());
        session.update(&input, VIEW);
        assert_eq!(session.grid.get(2, 3).unwrap().kind, TileKind::WALL);
        assert_eq!(session.hovered(), Some(CellPos::new(2, 3)));
        assert!(session.is_dirty());
        assert_eq!(session.title(), "untitled*");
    }

    #[test]
    fn test_ctrl_click_erases_and_shift_drag_fills() {
        let mut session = session();
        let shift = ModifierKeys { shift: true, ..Default::default() };
        session.update(&click(over(&session, 1, 1), shift), VIEW);
        assert_eq!(session.grid.count(TileKind::WALL), 1);
        let dragged = InputState { mouse: over(&session, 1, 4), left_down: true, modifiers: shift, ..Default::default() };
        session.update(&dragged, VIEW);
        assert_eq!(session.grid.count(TileKind::WALL), 4);

        let ctrl = ModifierKeys { ctrl: true, ..Default::default() };
        session.update(&click(over(&session, 1, 2), ctrl), VIEW);
        assert_eq!(session.grid.get(1, 2).unwrap().kind, TileKind::EMPTY);
        assert_eq!(session.grid.count(TileKind::WALL), 3);
    }

    #[test]
    fn test_release_starts_new_single_cell_paint() {
        let mut session = session();
        session.update(&click(over(&session, 2, 2), ModifierKeys::default()), VIEW);
        let released = InputState { mouse: over(&session, 2, 2), left_released: true, ..Default::default() };
        session.update(&released, VIEW);

        let shift = ModifierKeys { shift: true, ..Default::default() };
        session.update(&click(over(&session, 2, 5), shift), VIEW);
        assert_eq!(session.grid.count(TileKind::WALL), 2);
        assert_eq!(session.grid.get(2, 3).unwrap().kind, TileKind::EMPTY);
        assert_eq!(session.paint.last_painted(), Some(CellPos::new(2, 5)));
    }

    #[test]
    fn test_pointer_outside_view_does_nothing() {
        let mut session = session();
        // Above the view rect (menu bar)
        session.update(&click(vec2(100.0, 10.0), ModifierKeys::default()), VIEW);
        assert_eq!(session.grid.count(TileKind::WALL), 0);
        assert_eq!(session.hovered(), None);
        // Inside the view but left of the grid
        session.update(&click(vec2(10.0, 100.0), ModifierKeys::default()), VIEW);
        assert_eq!(session.grid.count(TileKind::WALL), 0);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_drag_in_from_menu_does_not_paint() {
        let mut session = session();
        let held = InputState { mouse: over(&session, 2, 2), left_down: true, ..Default::default() };
        session.update(&held, VIEW);
        assert_eq!(session.grid.count(TileKind::WALL), 0);

        // Held stroke keeps painting as the pointer moves
        session.update(&click(over(&session, 2, 2), ModifierKeys::default()), VIEW);
        let moved = InputState { mouse: over(&session, 2, 3), left_down: true, ..Default::default() };
        session.update(&moved, VIEW);
        assert_eq!(session.grid.count(TileKind::WALL), 2);
    }

    #[test]
    fn test_scroll_zooms_only_with_ctrl() {
        let mut session = session();
        let mut input = InputState { mouse: vec2(400.0, 300.0), scroll: 1.0, ..Default::default() };
        session.update(&input, VIEW);
        assert_eq!(session.camera.zoom(), 1.0);

        input.modifiers.ctrl = true;
        session.update(&input, VIEW);
        assert!((session.camera.zoom() - 1.1).abs() < 1e-5);
    }

    #[test]
    fn test_arrow_pan_and_middle_drag() {
        let mut session = session();
        let input = InputState { pan_axis: vec2(1.0, 0.0), dt: 0.5, ..Default::default() };
        session.update(&input, VIEW);
        assert_eq!(session.camera.offset, vec2(200.0, 0.0));

        let drag = InputState {
            mouse: vec2(300.0, 300.0),
            mouse_delta: vec2(20.0, 10.0),
            middle_down: true,
            ..Default::default()
        };
        session.update(&drag, VIEW);
        assert_eq!(session.camera.offset, vec2(180.0, -10.0));

        session.reset_camera();
        assert_eq!(session.camera.offset, Vec2::ZERO);
    }

    #[test]
    fn test_new_map_resets_view_and_anchor() {
        let mut session = session();
        session.update(&click(over(&session, 0, 0), ModifierKeys::default()), VIEW);
        session.camera.offset = vec2(50.0, 50.0);

        session.new_map(3, 4).unwrap();
        assert_eq!((session.grid.rows(), session.grid.cols()), (3, 4));
        assert_eq!(session.camera.offset, Vec2::ZERO);
        assert_eq!(session.paint.last_painted(), None);
        assert!(!session.is_dirty());

        assert!(matches!(session.new_map(0, 4), Err(GridError::InvalidDimensions { .. })));
        assert_eq!((session.grid.rows(), session.grid.cols()), (3, 4));
    }

    #[test]
    fn test_save_then_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("maze.csv");
        let mut session = session();
        session.update(&click(over(&session, 4, 4), ModifierKeys::default()), VIEW);

        // No file yet: caller must prompt
        assert!(!session.save().unwrap());
        session.save_as(&path).unwrap();
        assert!(!session.is_dirty());
        assert_eq!(session.title(), "maze.csv");

        let mut other = EditorSession::new(EditorConfig::default()).unwrap();
        other.camera.offset = vec2(10.0, 10.0);
        other.open(&path).unwrap();
        assert_eq!(other.grid, session.grid);
        assert_eq!(other.current_file(), Some(path.as_path()));
        assert_eq!(other.camera.offset, Vec2::ZERO);
        assert!(other.save().unwrap());
    }

    #[test]
    fn test_failed_open_keeps_grid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "2,2\n1,1,1\n").unwrap();

        let mut session = session();
        session.update(&click(over(&session, 0, 0), ModifierKeys::default()), VIEW);
        let before = session.grid.clone();

        assert!(matches!(session.open(&path), Err(GridError::TooManyColumns { .. })));
        assert_eq!(session.grid, before);
        assert!(session.is_dirty());
        assert_eq!(session.current_file(), None);
    }

    #[test]
    fn test_kind_selection() {
        let mut session = session();
        assert!(session.select_kind(TileKind(6)));
        session.next_kind();
        assert_eq!(session.paint.selected(), TileKind(1));
        session.prev_kind();
        assert_eq!(session.paint.selected(), TileKind(6));
        assert!(!session.select_kind(TileKind::EMPTY));
        assert!(!session.select_kind(TileKind(9)));
    }

    #[test]
    fn test_status_expires() {
        let mut session = session();
        session.set_status("Saved", 1.0);
        let tick = InputState { dt: 0.6, ..Default::default() };
        session.update(&tick, VIEW);
        assert_eq!(session.status(), Some("Saved"));
        session.update(&tick, VIEW);
        assert_eq!(session.status(), None);
    }
}
