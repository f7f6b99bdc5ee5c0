//! Sound cues
//!
//! Loads the game's clips through `macroquad::audio` and maps each
//! `GameEvent` to its clip. Playback is fire-and-forget.

use macroquad::audio::{load_sound, play_sound, play_sound_once, PlaySoundParams, Sound};
use tracing::{info, warn};

use crate::game::GameEvent;

const SOUND_DIR: &str = "assets/sounds";

/// Soundtrack volume relative to effects
const MUSIC_VOLUME: f32 = 0.6;

pub struct SoundBank {
    soundtrack: Option<Sound>,
    pedestrian_hit: Option<Sound>,
    coin_collected: Option<Sound>,
    finished: Option<Sound>,
}

impl SoundBank {
    pub async fn load() -> Self {
        Self {
            soundtrack: load_optional("soundtrack.ogg").await,
            pedestrian_hit: load_optional("ouch.wav").await,
            coin_collected: load_optional("coin.wav").await,
            finished: load_optional("won.wav").await,
        }
    }

    /// Play the cue for one event. Missing clips are skipped silently.
    pub fn play(&self, event: GameEvent) {
        match event {
            GameEvent::RaceStarted => {
                if let Some(sound) = &self.soundtrack {
                    play_sound(sound, PlaySoundParams { looped: true, volume: MUSIC_VOLUME });
                }
            }
            GameEvent::CoinCollected => play_optional(&self.coin_collected),
            GameEvent::PedestrianHit => play_optional(&self.pedestrian_hit),
            GameEvent::Finished => play_optional(&self.finished),
        }
    }
}

fn play_optional(sound: &Option<Sound>) {
    if let Some(sound) = sound {
        play_sound_once(sound);
    }
}

async fn load_optional(name: &str) -> Option<Sound> {
    let path = format!("{}/{}", SOUND_DIR, name);
    match load_sound(&path).await {
        Ok(sound) => {
            info!(path = %path, "loaded sound");
            Some(sound)
        }
        Err(e) => {
            warn!(path = %path, error = %e, "sound unavailable, cue will be silent");
            None
        }
    }
}
