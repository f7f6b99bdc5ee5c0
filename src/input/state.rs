//! Input state management
//!
//! Polls macroquad's keyboard once per frame and turns raw key presses and
//! releases into action events.

use macroquad::input::{get_keys_pressed, get_keys_released, KeyCode};
use super::{Action, KeyEvent};

/// Keyboard poller
#[derive(Debug, Default)]
pub struct InputState {
    /// Events gathered by the last `poll`
    events: Vec<KeyEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Call once per frame before reading events
    pub fn poll(&mut self) {
        let pressed: Vec<KeyCode> = get_keys_pressed().into_iter().collect();
        let released: Vec<KeyCode> = get_keys_released().into_iter().collect();
        self.events = map_keys(&pressed, &released);
    }

    /// Events from the last poll, presses first
    pub fn events(&self) -> &[KeyEvent] {
        &self.events
    }

    /// Was quit requested this frame?
    pub fn quit_requested(&self) -> bool {
        self.events.contains(&KeyEvent::Pressed(Action::Quit))
    }
}

/// Map raw keys to action events, dropping unbound keys
fn map_keys(pressed: &[KeyCode], released: &[KeyCode]) -> Vec<KeyEvent> {
    let presses = pressed.iter().filter_map(|k| Action::from_key(*k)).map(KeyEvent::Pressed);
    let releases = released.iter().filter_map(|k| Action::from_key(*k)).map(KeyEvent::Released);
    presses.chain(releases).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keys() {
        let events = map_keys(&[KeyCode::Space, KeyCode::F1], &[KeyCode::Up]);
        assert_eq!(
            events,
            vec![KeyEvent::Pressed(Action::Confirm), KeyEvent::Released(Action::SteerUp)]
        );
    }

    #[test]
    fn test_quit_requested() {
        let mut input = InputState::new();
        assert!(!input.quit_requested());
        input.events = map_keys(&[KeyCode::Escape], &[]);
        assert!(input.quit_requested());
    }
}
