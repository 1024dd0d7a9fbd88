//! Tile map editor
//!
//! - [`EditorSession`] owns the map being edited and reacts to input
//! - camera/paint hold the view transform and the brush
//! - layout/grid_view/dialogs draw the window

mod actions;
mod camera;
mod dialogs;
mod grid_view;
mod layout;
mod paint;
mod state;

pub use actions::*;
pub use camera::*;
pub use dialogs::*;
pub use grid_view::*;
pub use layout::*;
pub use paint::*;
pub use state::*;
