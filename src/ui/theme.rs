//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Window background behind the grid
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Menu bar / status bar background
pub const HEADER_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Accent (selected swatch, focused field)
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

pub const SEPARATOR_COLOR: Color = Color::new(0.314, 0.314, 0.314, 1.0);

// =============================================================================
// Buttons
// =============================================================================

pub const BUTTON_HOVER: Color = Color::new(0.196, 0.196, 0.235, 1.0); // ~50, 50, 60

pub const BUTTON_PRESSED: Color = Color::new(0.235, 0.235, 0.275, 1.0); // ~60, 60, 70

// =============================================================================
// Grid view
// =============================================================================

/// Border drawn around the grid bounds
pub const GRID_BORDER: Color = Color::new(0.35, 0.35, 0.4, 1.0);

/// Outline of the tile under the pointer
pub const HOVER_OUTLINE: Color = Color::new(1.0, 0.0, 0.0, 1.0);

pub const HOVER_OUTLINE_THICKNESS: f32 = 3.0;

// =============================================================================
// Dialogs
// =============================================================================

/// Dims the editor behind a modal
pub const MODAL_SHADE: Color = Color::new(0.0, 0.0, 0.0, 0.5);

pub const DIALOG_BG: Color = Color::new(0.176, 0.176, 0.196, 1.0); // ~45, 45, 50

pub const FIELD_BG: Color = Color::new(0.09, 0.09, 0.1, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

pub const FONT_SIZE_HEADER: f32 = 14.0;

pub const FONT_SIZE_CONTENT: f32 = 12.0;
