//! Audio cues
//!
//! The update loop and input handler never touch the audio device directly.
//! They queue `GameEvent`s; the main loop drains the queue once per frame
//! and turns each event into a sound cue.

/// Side effects of gameplay, one per audio cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First start from the instructions page (soundtrack begins)
    RaceStarted,
    /// A coin was picked up
    CoinCollected,
    /// The car ran into a pedestrian
    PedestrianHit,
    /// The car reached the finish barrier
    Finished,
}

/// Cues raised since the last drain, oldest first
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<GameEvent>,
}

impl EventQueue {
    pub fn send(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    /// Take every pending cue, leaving the queue empty
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.pending.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_keeps_order_and_empties() {
        let mut queue = EventQueue::default();
        queue.send(GameEvent::CoinCollected);
        queue.send(GameEvent::CoinCollected);
        queue.send(GameEvent::Finished);

        let cues: Vec<_> = queue.drain().collect();
        assert_eq!(
            cues,
            vec![GameEvent::CoinCollected, GameEvent::CoinCollected, GameEvent::Finished]
        );
        assert_eq!(queue.drain().count(), 0);
    }
}
