//! File dialogs and the "new map" dialog
//!
//! Open/save use the native dialogs from `rfd` (desktop only). Cancelling a
//! native dialog yields `None` and is not an error. The new-map dialog is an
//! in-app modal asking for the grid size.

use std::path::{Path, PathBuf};
use macroquad::prelude::*;
use crate::input::InputState;
use crate::ui::{draw_number_field, text_button, theme, NumberField, Rect, UiContext};
use crate::world::{checked_dimensions, limits};

const MAP_FILTER: (&str, &[&str]) = ("Map", &["csv", "txt"]);

/// Ask for a map file to open
#[cfg(not(target_arch = "wasm32"))]
pub fn pick_open_path(directory: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new().add_filter(MAP_FILTER.0, MAP_FILTER.1);
    if let Some(dir) = directory {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_file()
}

/// Ask where to save, suggesting the current file's name
#[cfg(not(target_arch = "wasm32"))]
pub fn pick_save_path(directory: Option<&Path>, current: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new().add_filter(MAP_FILTER.0, MAP_FILTER.1);
    let dir = current.and_then(Path::parent).or(directory);
    if let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) {
        dialog = dialog.set_directory(dir);
    }
    let name = current
        .and_then(Path::file_name)
        .map_or_else(|| "map.csv".to_string(), |n| n.to_string_lossy().into_owned());
    dialog.set_file_name(&name).save_file()
}

/// No native dialogs in the browser
#[cfg(target_arch = "wasm32")]
pub fn pick_open_path(_directory: Option<&Path>) -> Option<PathBuf> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn pick_save_path(_directory: Option<&Path>, _current: Option<&Path>) -> Option<PathBuf> {
    None
}

/// Result of one frame of the new-map dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Still open (or not shown)
    Pending,
    Confirmed { rows: usize, cols: usize },
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Rows,
    Cols,
}

/// Modal asking for the size of a new blank map
#[derive(Debug, Clone)]
pub struct NewMapDialog {
    open: bool,
    rows: NumberField,
    cols: NumberField,
    focus: Focus,
    error: Option<String>,
}

impl NewMapDialog {
    pub fn new() -> Self {
        let digits = limits::MAX_DIMENSION.to_string().len();
        Self {
            open: false,
            rows: NumberField::new(0, digits),
            cols: NumberField::new(0, digits),
            focus: Focus::Rows,
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the dialog prefilled with the current grid size
    pub fn open(&mut self, rows: usize, cols: usize) {
        self.rows.set(rows);
        self.cols.set(cols);
        self.focus = Focus::Rows;
        self.error = None;
        self.open = true;
    }

    pub fn cancel(&mut self) -> DialogOutcome {
        self.open = false;
        DialogOutcome::Cancelled
    }

    /// Validate the fields. Invalid input keeps the dialog open with a message.
    pub fn confirm(&mut self) -> DialogOutcome {
        let (Some(rows), Some(cols)) = (self.rows.value(), self.cols.value()) else {
            self.error = Some("Enter both rows and columns".to_string());
            return DialogOutcome::Pending;
        };
        match checked_dimensions(rows, cols) {
            Ok((rows, cols)) => {
                self.open = false;
                DialogOutcome::Confirmed { rows, cols }
            }
            Err(e) => {
                self.error = Some(e.to_string());
                DialogOutcome::Pending
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Keyboard handling: Tab switches field, Enter confirms, Escape cancels
    pub fn handle_keys(&mut self, input: &InputState) -> DialogOutcome {
        if input.key_pressed(KeyCode::Escape) {
            return self.cancel();
        }
        if input.key_pressed(KeyCode::Enter) || input.key_pressed(KeyCode::KpEnter) {
            return self.confirm();
        }
        if input.key_pressed(KeyCode::Tab) {
            self.focus = match self.focus {
                Focus::Rows => Focus::Cols,
                Focus::Cols => Focus::Rows,
            };
        }
        DialogOutcome::Pending
    }

    /// Draw over the whole screen and handle this frame's input
    pub fn draw(&mut self, ctx: &mut UiContext, screen: Rect, input: &InputState) -> DialogOutcome {
        if !self.open {
            return DialogOutcome::Pending;
        }

        draw_rectangle(screen.x, screen.y, screen.w, screen.h, theme::MODAL_SHADE);
        let rect = screen.centered(280.0, 170.0);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::DIALOG_BG);
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, theme::SEPARATOR_COLOR);
        draw_text("New Map", rect.x + 12.0, rect.y + 22.0, theme::FONT_SIZE_HEADER, WHITE);

        let mut outcome = self.handle_keys(input);
        if !self.open {
            return outcome;
        }

        let label_x = rect.x + 12.0;
        let field_x = rect.x + 100.0;
        let rows_rect = Rect::new(field_x, rect.y + 40.0, 160.0, 24.0);
        let cols_rect = Rect::new(field_x, rect.y + 72.0, 160.0, 24.0);
        if ctx.mouse.clicked(&rows_rect) {
            self.focus = Focus::Rows;
        } else if ctx.mouse.clicked(&cols_rect) {
            self.focus = Focus::Cols;
        }

        draw_text("Rows", label_x, rows_rect.y + 17.0, theme::FONT_SIZE_HEADER, theme::TEXT_COLOR);
        draw_number_field(rows_rect, &mut self.rows, self.focus == Focus::Rows, input);
        draw_text("Columns", label_x, cols_rect.y + 17.0, theme::FONT_SIZE_HEADER, theme::TEXT_COLOR);
        draw_number_field(cols_rect, &mut self.cols, self.focus == Focus::Cols, input);

        if let Some(error) = &self.error {
            draw_text(error, label_x, rect.y + 116.0, theme::FONT_SIZE_CONTENT, theme::HOVER_OUTLINE);
        }

        let ok_rect = Rect::new(rect.right() - 152.0, rect.bottom() - 36.0, 64.0, 26.0);
        let cancel_rect = Rect::new(rect.right() - 80.0, rect.bottom() - 36.0, 68.0, 26.0);
        if text_button(ctx, ok_rect, "OK", "Enter", true) {
            outcome = self.confirm();
        }
        if text_button(ctx, cancel_rect, "Cancel", "Esc", true) {
            outcome = self.cancel();
        }
        outcome
    }
}

impl Default for NewMapDialog {
    fn default() -> Self {
        Self::new()
    }
}
