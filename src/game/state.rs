//! Screen state machine
//!
//! ```text
//! InstructionsPage --confirm--> Running --pedestrian--> GameOver --confirm--> Running
//!                                       --finish------> Finished --confirm--> Running
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Title screen with the controls art
    #[default]
    InstructionsPage,
    /// Race in progress
    Running,
    /// The car struck a pedestrian
    GameOver,
    /// The car crossed the finish line
    Finished,
}

/// What a confirm press does in a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// First race from the instructions page
    Start,
    /// New race after the previous one ended
    Restart,
    /// Confirm has no meaning here
    Ignore,
}

impl GameState {
    pub fn on_confirm(self) -> ConfirmAction {
        match self {
            GameState::InstructionsPage => ConfirmAction::Start,
            GameState::GameOver | GameState::Finished => ConfirmAction::Restart,
            GameState::Running => ConfirmAction::Ignore,
        }
    }

    /// Display name (for logs)
    pub fn label(&self) -> &'static str {
        match self {
            GameState::InstructionsPage => "Instructions",
            GameState::Running => "Running",
            GameState::GameOver => "Game Over",
            GameState::Finished => "Finished",
        }
    }
}
