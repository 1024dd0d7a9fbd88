//! Per-frame input snapshot
//!
//! Captured once at the top of the frame from macroquad and then passed by
//! reference to everything that reacts to input, so editor logic never reads
//! global input state and can be driven directly from tests.

use macroquad::prelude::*;
use std::collections::HashSet;
use crate::ui::MouseState;

/// Modifier key state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierKeys {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// Everything the editor needs to know about input for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    /// Pointer position in window pixels
    pub mouse: Vec2,
    /// Pointer movement since the previous frame
    pub mouse_delta: Vec2,
    pub left_down: bool,
    /// Left button went down this frame
    pub left_pressed: bool,
    /// Left button went up this frame
    pub left_released: bool,
    pub middle_down: bool,
    /// Wheel notches this frame, positive away from the user
    pub scroll: f32,
    pub modifiers: ModifierKeys,
    /// Arrow key direction, each axis -1, 0 or +1
    pub pan_axis: Vec2,
    /// Keys that went down this frame
    pub pressed_keys: HashSet<KeyCode>,
    /// Typed characters this frame, in order
    pub chars: Vec<char>,
    /// Seconds since the previous frame
    pub dt: f32,
}

impl InputState {
    /// Poll macroquad. `previous_mouse` is last frame's pointer position.
    pub fn capture(previous_mouse: Vec2) -> Self {
        let (mx, my) = mouse_position();
        let mouse = vec2(mx, my);

        // Wheel units differ between platforms (1.0 or 120.0 per notch)
        let wheel = mouse_wheel().1;
        let scroll = if wheel == 0.0 { 0.0 } else { wheel.signum() };

        let mut pan_axis = Vec2::ZERO;
        if is_key_down(KeyCode::Left) { pan_axis.x -= 1.0; }
        if is_key_down(KeyCode::Right) { pan_axis.x += 1.0; }
        if is_key_down(KeyCode::Up) { pan_axis.y -= 1.0; }
        if is_key_down(KeyCode::Down) { pan_axis.y += 1.0; }

        Self {
            mouse,
            mouse_delta: mouse - previous_mouse,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
            middle_down: is_mouse_button_down(MouseButton::Middle),
            scroll,
            modifiers: ModifierKeys {
                shift: is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
                ctrl: is_key_down(KeyCode::LeftControl)
                    || is_key_down(KeyCode::RightControl)
                    || is_key_down(KeyCode::LeftSuper)
                    || is_key_down(KeyCode::RightSuper),
                alt: is_key_down(KeyCode::LeftAlt) || is_key_down(KeyCode::RightAlt),
            },
            pan_axis,
            pressed_keys: get_keys_pressed(),
            chars: std::iter::from_fn(get_char_pressed).collect(),
            dt: get_frame_time(),
        }
    }

    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Ctrl (Cmd on Mac) + click erases
    pub fn erase_held(&self) -> bool {
        self.modifiers.ctrl
    }

    /// Shift + click fills a line from the last painted cell
    pub fn line_held(&self) -> bool {
        self.modifiers.shift
    }

    /// Ctrl (Cmd on Mac) + wheel zooms
    pub fn zoom_held(&self) -> bool {
        self.modifiers.ctrl
    }

    /// Mouse part of the snapshot, for the immediate-mode UI
    pub fn mouse_state(&self) -> MouseState {
        MouseState {
            x: self.mouse.x,
            y: self.mouse.y,
            left_down: self.left_down,
            left_pressed: self.left_pressed,
        }
    }
}
