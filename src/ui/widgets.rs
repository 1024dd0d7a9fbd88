//! Basic UI widgets

use macroquad::prelude::*;
use super::{theme, Rect, UiContext};

/// Left-to-right layout helper for the menu bar
pub struct Toolbar {
    rect: Rect,
    cursor_x: f32,
    spacing: f32,
}

impl Toolbar {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            cursor_x: rect.x + 4.0,
            spacing: 4.0,
        }
    }

    pub fn separator(&mut self) {
        self.cursor_x += self.spacing * 2.0;
        draw_line(
            self.cursor_x,
            self.rect.y + 4.0,
            self.cursor_x,
            self.rect.bottom() - 4.0,
            1.0,
            theme::SEPARATOR_COLOR,
        );
        self.cursor_x += self.spacing * 2.0;
    }

    pub fn label(&mut self, text: &str) {
        let dims = measure_text(text, None, theme::FONT_SIZE_HEADER as u16, 1.0);
        // Round to integer pixels for crisp text
        let text_y = (self.rect.y + (self.rect.h + dims.height) * 0.5).round();
        draw_text(text, self.cursor_x.round(), text_y, theme::FONT_SIZE_HEADER, theme::TEXT_COLOR);
        self.cursor_x += dims.width + self.spacing;
    }

    /// Text button sized to its label
    pub fn button(&mut self, ctx: &mut UiContext, label: &str, tooltip: &str, enabled: bool) -> bool {
        let dims = measure_text(label, None, theme::FONT_SIZE_HEADER as u16, 1.0);
        let width = (dims.width + 16.0).round();
        let rect = Rect::new(self.cursor_x.round(), (self.rect.y + 2.0).round(), width, (self.rect.h - 4.0).round());
        self.cursor_x += width + self.spacing;
        text_button(ctx, rect, label, tooltip, enabled)
    }

    /// Square colour swatch, highlighted when `active`
    pub fn swatch(&mut self, ctx: &mut UiContext, color: Color, tooltip: &str, active: bool) -> bool {
        let size = (self.rect.h - 4.0).round();
        let rect = Rect::new(self.cursor_x.round(), (self.rect.y + 2.0).round(), size, size);
        self.cursor_x += size + self.spacing;
        swatch_button(ctx, rect, color, tooltip, active)
    }
}

/// Flat text button, returns true if clicked. Disabled buttons draw dimmed
/// and never report a click.
pub fn text_button(ctx: &mut UiContext, rect: Rect, label: &str, tooltip: &str, enabled: bool) -> bool {
    let hovered = enabled && ctx.mouse.inside(&rect);
    if hovered && !tooltip.is_empty() {
        ctx.set_tooltip(tooltip, ctx.mouse.x, ctx.mouse.y);
    }

    // No background unless hovered (flat)
    if hovered && ctx.mouse.clicking(&rect) {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 4.0, theme::BUTTON_PRESSED);
    } else if hovered {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 4.0, theme::BUTTON_HOVER);
    }

    let dims = measure_text(label, None, theme::FONT_SIZE_HEADER as u16, 1.0);
    let text_x = (rect.x + (rect.w - dims.width) * 0.5).round();
    let text_y = (rect.y + (rect.h + dims.height) * 0.5).round();
    let color = if !enabled {
        theme::TEXT_DIM
    } else if hovered {
        WHITE
    } else {
        theme::TEXT_COLOR
    };
    draw_text(label, text_x, text_y, theme::FONT_SIZE_HEADER, color);

    enabled && ctx.mouse.clicked(&rect)
}

/// Colour swatch button for the tile palette
pub fn swatch_button(ctx: &mut UiContext, rect: Rect, color: Color, tooltip: &str, active: bool) -> bool {
    let hovered = ctx.mouse.inside(&rect);
    if hovered && !tooltip.is_empty() {
        ctx.set_tooltip(tooltip, ctx.mouse.x, ctx.mouse.y);
    }

    if active {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 4.0, theme::ACCENT_COLOR);
    } else if hovered {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 4.0, theme::BUTTON_HOVER);
    }
    let inner = rect.pad(3.0);
    draw_rectangle(inner.x, inner.y, inner.w, inner.h, color);

    ctx.mouse.clicked(&rect)
}

/// Tooltip box anchored below-right of the pointer
pub fn draw_tooltip(text: &str, x: f32, y: f32) {
    let dims = measure_text(text, None, theme::FONT_SIZE_CONTENT as u16, 1.0);
    let (w, h) = (dims.width + 12.0, dims.height + 10.0);
    // Keep on screen
    let bx = (x + 12.0).min(screen_width() - w).max(0.0).round();
    let by = (y + 18.0).min(screen_height() - h).max(0.0).round();
    draw_rectangle(bx, by, w, h, theme::DIALOG_BG);
    draw_rectangle_lines(bx, by, w, h, 1.0, theme::SEPARATOR_COLOR);
    draw_text(text, bx + 6.0, (by + 5.0 + dims.height).round(), theme::FONT_SIZE_CONTENT, theme::TEXT_COLOR);
}

/// Draw a rounded rectangle (simple approximation using overlapping rects)
pub fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}
