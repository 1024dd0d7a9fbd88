//! Numeric text field for dialogs
//!
//! Accepts ASCII digits only, edits at the end of the text, and reads its
//! keystrokes from the frame's [`InputState`].

use macroquad::prelude::*;
use crate::input::InputState;
use super::{theme, Rect};

/// State for a digits-only input field
#[derive(Debug, Clone, PartialEq)]
pub struct NumberField {
    pub text: String,
    max_len: usize,
    /// Blink timer for cursor
    blink_timer: f32,
}

impl NumberField {
    pub fn new(value: usize, max_len: usize) -> Self {
        let mut text = value.to_string();
        text.truncate(max_len);
        Self { text, max_len, blink_timer: 0.0 }
    }

    pub fn set(&mut self, value: usize) {
        self.text = value.to_string();
        self.text.truncate(self.max_len);
    }

    /// Parsed value, `None` while the field is empty
    pub fn value(&self) -> Option<i64> {
        self.text.parse().ok()
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() || self.text.len() >= self.max_len {
            return false;
        }
        self.text.push(ch);
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Apply this frame's typing, returns true if the text changed
    pub fn handle_input(&mut self, input: &InputState) -> bool {
        self.blink_timer += input.dt;
        let mut changed = false;
        if input.key_pressed(KeyCode::Backspace) {
            changed |= self.backspace();
        }
        for &ch in &input.chars {
            changed |= self.insert_char(ch);
        }
        if changed {
            self.blink_timer = 0.0;
        }
        changed
    }
}

/// Draw a number field; only the focused field takes keystrokes.
/// Returns true if the text changed.
pub fn draw_number_field(rect: Rect, field: &mut NumberField, focused: bool, input: &InputState) -> bool {
    let changed = focused && field.handle_input(input);

    let border = if focused { theme::ACCENT_COLOR } else { theme::SEPARATOR_COLOR };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::FIELD_BG);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, border);

    let font_size = theme::FONT_SIZE_HEADER;
    let text_x = rect.x + 8.0;
    let text_y = (rect.y + (rect.h + font_size * 0.7) / 2.0).round();
    draw_text(&field.text, text_x, text_y, font_size, theme::TEXT_COLOR);

    if focused && (field.blink_timer % 1.0) < 0.5 {
        let cursor_x = text_x + measure_text(&field.text, None, font_size as u16, 1.0).width + 1.0;
        draw_line(cursor_x, rect.y + 6.0, cursor_x, rect.bottom() - 6.0, 1.5, WHITE);
    }

    changed
}
