//! Input handling with gamepad support
//!
//! Provides an action-based input system that works with keyboard, mouse,
//! touch and gamepad. Game logic only ever sees an `InputFrame`.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use gamepad::{button, Gamepad};
pub use state::*;
