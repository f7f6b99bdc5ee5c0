//! Game Module
//!
//! Everything about the race itself:
//! - State: which screen is active and how confirm moves between them
//! - World: the track's entities, rebuilt on every start
//! - Runtime: the `Race` controller with input handling and the update loop
//! - Renderer: per-frame drawing (the only part that talks to macroquad's
//!   graphics, so the rest is testable headless)

pub mod rect;
pub mod components;
pub mod collision;
pub mod event;
pub mod state;
pub mod viewport;
pub mod world;
pub mod clock;
pub mod runtime;
pub mod renderer;

// Re-export main types
pub use clock::FixedStep;
pub use event::GameEvent;
pub use runtime::Race;
pub use renderer::draw_race;
