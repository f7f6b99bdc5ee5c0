//! Swift Driver: a side-scrolling arcade driving game
//!
//! Drive the car along the road, collect coins, avoid pedestrians and
//! reach the finish line.
//! - Enter / Space: start or restart
//! - E: drive
//! - Up / Down: steer
//! - Escape: quit

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod audio;
mod config;
mod game;
mod input;
mod logging;

use macroquad::prelude::*;
use tracing::{error, info};

use assets::Textures;
use audio::SoundBank;
use config::{ConfigError, GameConfig, CONFIG_PATH};
use game::{draw_race, FixedStep, Race};
use input::InputState;

fn window_conf() -> Conf {
    // Errors fall back to defaults here; load_config reports them once logging is up
    #[cfg(not(target_arch = "wasm32"))]
    let config = GameConfig::load_file(CONFIG_PATH)
        .ok()
        .flatten()
        .unwrap_or_default();
    #[cfg(target_arch = "wasm32")]
    let config = GameConfig::default();

    Conf {
        window_title: format!("Swift Driver v{}", VERSION),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

/// Load `assets/config.ron` if present; a missing file means defaults
#[cfg(not(target_arch = "wasm32"))]
async fn load_config() -> Result<GameConfig, ConfigError> {
    match GameConfig::load_file(CONFIG_PATH)? {
        Some(config) => {
            info!(path = CONFIG_PATH, "loaded config");
            Ok(config)
        }
        None => {
            info!(path = CONFIG_PATH, "no config override, using defaults");
            Ok(GameConfig::default())
        }
    }
}

/// Fetch `assets/config.ron` next to the page; a failed fetch means defaults
#[cfg(target_arch = "wasm32")]
async fn load_config() -> Result<GameConfig, ConfigError> {
    match macroquad::file::load_string(CONFIG_PATH).await {
        Ok(text) => {
            info!(path = CONFIG_PATH, "loaded config");
            GameConfig::from_ron_str(&text)
        }
        Err(e) => {
            info!(path = CONFIG_PATH, reason = %e, "no config override, using defaults");
            Ok(GameConfig::default())
        }
    }
}

fn clock_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    logging::init();
    info!("=== Swift Driver v{} ===", VERSION);

    let config = match load_config().await {
        Ok(config) => config,
        Err(e) => {
            error!(path = CONFIG_PATH, error = %e, "bad config");
            std::process::exit(1);
        }
    };

    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(seed, "world seed");

    let mut race = match Race::new(config, seed) {
        Ok(race) => race,
        Err(e) => {
            error!(error = %e, "could not generate the track");
            std::process::exit(1);
        }
    };

    let textures = Textures::load().await;
    let sounds = SoundBank::load().await;
    let mut input = InputState::new();
    let mut clock = FixedStep::default();

    loop {
        input.poll();
        if input.quit_requested() {
            info!("quit requested");
            break;
        }

        for &event in input.events() {
            if let Err(e) = race.handle_key(event) {
                error!(error = %e, "could not generate the track");
                std::process::exit(1);
            }
        }

        for _ in 0..clock.advance(get_frame_time() as f64) {
            race.update();
        }

        for event in race.events.drain() {
            sounds.play(event);
        }

        draw_race(&race, &textures);

        next_frame().await;
    }
}
