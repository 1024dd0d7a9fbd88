//! Mouse state and per-frame context for the immediate-mode widgets

use super::Rect;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool, // Just pressed this frame
}

impl MouseState {
    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse is held inside a rect
    pub fn clicking(&self, rect: &Rect) -> bool {
        self.left_down && rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
#[derive(Debug, Default)]
pub struct UiContext {
    pub mouse: MouseState,
    /// Tooltip requested by the hovered widget this frame
    tooltip: Option<(String, f32, f32)>,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.tooltip = None;
    }

    pub fn set_tooltip(&mut self, text: &str, x: f32, y: f32) {
        self.tooltip = Some((text.to_string(), x, y));
    }

    /// Tooltip to draw at the end of the frame, if any
    pub fn take_tooltip(&mut self) -> Option<(String, f32, f32)> {
        self.tooltip.take()
    }
}
