//! Game action definitions
//!
//! Keyboard layout:
//! - Enter / Space = Confirm (start, restart)
//! - Up / Down     = Steer
//! - E             = Accelerate (on release)
//! - Escape        = Quit

use macroquad::input::KeyCode;

/// All possible actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Confirm,
    SteerUp,
    SteerDown,
    Accelerate,
    Quit,
}

impl Action {
    /// Map a physical key to an action. Unbound keys return None.
    pub fn from_key(key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::Enter | KeyCode::KpEnter | KeyCode::Space => Some(Action::Confirm),
            KeyCode::Up => Some(Action::SteerUp),
            KeyCode::Down => Some(Action::SteerDown),
            KeyCode::E => Some(Action::Accelerate),
            KeyCode::Escape => Some(Action::Quit),
            _ => None,
        }
    }
}

/// A key press or release, already mapped to its action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Action),
    Released(Action),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_bindings() {
        assert_eq!(Action::from_key(KeyCode::Enter), Some(Action::Confirm));
        assert_eq!(Action::from_key(KeyCode::Space), Some(Action::Confirm));
        assert_eq!(Action::from_key(KeyCode::Up), Some(Action::SteerUp));
        assert_eq!(Action::from_key(KeyCode::Down), Some(Action::SteerDown));
        assert_eq!(Action::from_key(KeyCode::E), Some(Action::Accelerate));
        assert_eq!(Action::from_key(KeyCode::Q), None);
    }
}
