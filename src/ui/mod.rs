//! Immediate-mode UI kit for the editor
//!
//! - Rectangle-based layout, rebuilt every frame
//! - Widgets read the mouse from a per-frame [`UiContext`]
//! - Commands and shortcuts live in an [`ActionRegistry`]

mod actions;
mod input;
mod rect;
mod text_input;
pub mod theme;
mod widgets;

pub use actions::*;
pub use input::*;
pub use rect::*;
pub use text_input::*;
pub use widgets::*;
