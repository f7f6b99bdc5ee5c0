//! Keyboard input
//!
//! Raw keys are mapped to `Action`s here so the game logic never sees
//! a `KeyCode`.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
