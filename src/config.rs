//! Game configuration
//!
//! Every tunable constant of the game lives in `GameConfig`. Defaults match
//! the shipped game; `assets/config.ron` can override any subset of fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the binary looks for an optional config override
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Error type for config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Width/height pair for sprite bounding boxes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Visible screen size in world units
    pub screen_width: f32,
    pub screen_height: f32,

    /// Minimum gap kept between the car and the right edge of the screen
    pub viewport_margin: f32,

    /// Player speed per update (both axes)
    pub movement_speed: f32,

    /// Track length in screen widths; one pedestrian per segment
    pub track_segments: u32,

    /// Number of coins placed on the road
    pub coin_count: u32,

    /// Player spawn point (center)
    pub player_start: (f32, f32),

    pub player_size: Size,
    pub coin_size: Size,
    pub crate_size: Size,
    pub pedestrian_size: Size,
    pub finish_barrier_size: Size,

    /// Horizontal distance between crates in the wall row
    pub crate_spacing: f32,

    /// Initial upward speed of pedestrians
    pub pedestrian_speed: f32,

    /// Per-coin cap on random placement attempts
    pub max_placement_attempts: u32,

    /// Fixed RNG seed for world generation (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1024.0,
            screen_height: 600.0,
            viewport_margin: 800.0,
            movement_speed: 5.0,
            track_segments: 20,
            coin_count: 60,
            player_start: (74.0, 270.0),
            player_size: Size::new(96.0, 52.0),
            coin_size: Size::new(32.0, 32.0),
            crate_size: Size::new(48.0, 48.0),
            pedestrian_size: Size::new(48.0, 80.0),
            finish_barrier_size: Size::new(20.0, 600.0),
            crate_spacing: 65.0,
            pedestrian_speed: 1.0,
            max_placement_attempts: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) RON config and validate it
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file from disk. A missing file is `Ok(None)`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_ron_str(&text).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Total track length in world units
    pub fn track_length(&self) -> f32 {
        self.screen_width * self.track_segments as f32
    }

    /// Height of the crate row (center)
    pub fn crate_row_y(&self) -> f32 {
        self.screen_height - self.screen_height / 10.0
    }

    /// Horizontal range for coin centers
    pub fn coin_x_range(&self) -> (f32, f32) {
        (self.screen_width, self.track_length())
    }

    /// Vertical range for coin centers
    pub fn coin_y_range(&self) -> (f32, f32) {
        (60.0, self.screen_height - 130.0)
    }

    /// Vertical range for pedestrian spawn (bottom edge)
    pub fn pedestrian_spawn_range(&self) -> (f32, f32) {
        (self.screen_height * 0.1, self.screen_height * 0.7)
    }

    /// Height of a pedestrian's patrol range
    pub fn patrol_height(&self) -> f32 {
        self.pedestrian_size.h * 2.0
    }

    /// The viewport stops scrolling once the car's right edge reaches this
    pub fn scroll_limit(&self) -> f32 {
        self.track_length() - self.screen_width / 1.6
    }

    /// Lowest allowed player bottom, relative to the viewport bottom
    pub fn bottom_margin(&self) -> f32 {
        self.screen_width / 20.0
    }

    /// Center of the finish barrier
    pub fn finish_barrier_center(&self) -> (f32, f32) {
        (
            self.track_length() + (self.screen_width / 7.0).floor(),
            (self.screen_height / 2.0).floor(),
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));
        // Also rejects NaN and infinity
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !(positive(self.screen_width) && positive(self.screen_height)) {
            return invalid(format!(
                "screen size must be positive ({}x{})",
                self.screen_width, self.screen_height
            ));
        }
        for (name, size) in [
            ("player_size", self.player_size),
            ("coin_size", self.coin_size),
            ("crate_size", self.crate_size),
            ("pedestrian_size", self.pedestrian_size),
            ("finish_barrier_size", self.finish_barrier_size),
        ] {
            if !(positive(size.w) && positive(size.h)) {
                return invalid(format!("{} must be positive ({}x{})", name, size.w, size.h));
            }
        }
        for (name, value) in [
            ("movement_speed", self.movement_speed),
            ("crate_spacing", self.crate_spacing),
        ] {
            if !positive(value) {
                return invalid(format!("{} must be positive ({})", name, value));
            }
        }
        for (name, value) in [
            ("viewport_margin", self.viewport_margin),
            ("pedestrian_speed", self.pedestrian_speed),
            ("player_start.x", self.player_start.0),
            ("player_start.y", self.player_start.1),
        ] {
            if !value.is_finite() {
                return invalid(format!("{} must be finite ({})", name, value));
            }
        }
        if self.track_segments < 2 {
            return invalid(format!(
                "track_segments must be at least 2 (got {})",
                self.track_segments
            ));
        }
        if self.max_placement_attempts == 0 {
            return invalid("max_placement_attempts must be at least 1".to_string());
        }
        let (y_min, y_max) = self.coin_y_range();
        if y_min >= y_max {
            return invalid(format!("coin spawn band is empty ({}..{})", y_min, y_max));
        }
        let (p_min, p_max) = self.pedestrian_spawn_range();
        if p_min >= p_max {
            return invalid(format!("pedestrian spawn band is empty ({}..{})", p_min, p_max));
        }
        Ok(())
    }
}
