//! Texture loading
//!
//! Every texture is optional. A missing file logs a warning and the renderer
//! falls back to a flat colored shape, so the game stays playable from a bare
//! checkout.

use macroquad::prelude::*;
use tracing::{info, warn};

const IMAGE_DIR: &str = "assets/images";

pub struct Textures {
    /// Road tile, repeated along the whole track
    pub road: Option<Texture2D>,
    pub finish_line: Option<Texture2D>,
    pub car: Option<Texture2D>,
    pub coin: Option<Texture2D>,
    pub pedestrian: Option<Texture2D>,
    /// Pedestrian after being struck
    pub pedestrian_down: Option<Texture2D>,
    /// Title screen art
    pub instructions: Option<Texture2D>,
}

impl Textures {
    pub async fn load() -> Self {
        Self {
            road: load_optional("road.png").await,
            finish_line: load_optional("finish_line.png").await,
            car: load_optional("car.png").await,
            coin: load_optional("coin.png").await,
            pedestrian: load_optional("pedestrian.png").await,
            pedestrian_down: load_optional("pedestrian_down.png").await,
            instructions: load_optional("instructions.png").await,
        }
    }
}

async fn load_optional(name: &str) -> Option<Texture2D> {
    let path = format!("{}/{}", IMAGE_DIR, name);
    match load_texture(&path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Linear);
            info!(path = %path, "loaded texture");
            Some(tex)
        }
        Err(e) => {
            warn!(path = %path, error = %e, "texture unavailable, using placeholder");
            None
        }
    }
}
