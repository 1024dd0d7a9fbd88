//! Keyboard and mouse input

mod state;

pub use state::*;
