//! Race Renderer
//!
//! Draws the current frame from a `Race` without mutating it. World
//! rectangles go through the viewport to reach screen space; HUD text is
//! placed in screen space directly.

use macroquad::prelude::*;

use crate::assets::Textures;
use super::rect::Rect as WorldRect;
use super::runtime::Race;
use super::state::GameState;
use super::viewport::Viewport;

/// Width of one road tile and of the finish line art
const TILE_WIDTH: f32 = 344.0;

const BG_COLOR: Color = Color::new(0.10, 0.10, 0.12, 1.0);
const ROAD_COLOR: Color = Color::new(0.30, 0.30, 0.33, 1.0);
const ROAD_ALT_COLOR: Color = Color::new(0.27, 0.27, 0.30, 1.0);
const CAR_COLOR: Color = Color::new(0.85, 0.15, 0.15, 1.0);
const COIN_COLOR: Color = Color::new(0.95, 0.80, 0.20, 1.0);
const PEDESTRIAN_COLOR: Color = Color::new(0.35, 0.55, 0.90, 1.0);
const PEDESTRIAN_DOWN_COLOR: Color = Color::new(0.45, 0.45, 0.55, 1.0);
const TEXT_COLOR: Color = WHITE;
const SHADE_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.45);

/// Draw one frame for the current state
pub fn draw_race(race: &Race, textures: &Textures) {
    clear_background(BG_COLOR);

    match race.state {
        GameState::InstructionsPage => draw_instructions(race, textures),
        GameState::Running => draw_track(race, textures),
        GameState::GameOver => {
            draw_track(race, textures);
            draw_game_over();
        }
        GameState::Finished => {
            draw_track(race, textures);
            draw_finished(race.score);
        }
    }
}

// =============================================================================
// Track
// =============================================================================

fn draw_track(race: &Race, textures: &Textures) {
    let config = race.config();
    let view = &race.viewport;
    let visible = view.applied();
    let height = config.screen_height;

    // Road tiles, culled to the visible window
    let mut center = TILE_WIDTH / 2.0;
    let mut index = 0usize;
    while center < config.track_length() {
        let tile = WorldRect::from_center(center, height / 2.0, TILE_WIDTH, height);
        if tile.right() >= visible.left() && tile.left() <= visible.right() {
            let fallback = if index % 2 == 0 { ROAD_COLOR } else { ROAD_ALT_COLOR };
            draw_sprite(view, &tile, textures.road.as_ref(), fallback);
        }
        center += TILE_WIDTH;
        index += 1;
    }

    // Finish line marker at the end of the track
    let finish = WorldRect::from_center(config.track_length(), height / 2.0, TILE_WIDTH, height);
    match &textures.finish_line {
        Some(tex) => draw_sprite(view, &finish, Some(tex), WHITE),
        None => draw_checkered(view, &finish),
    }

    draw_sprite(view, &race.world.player.rect, textures.car.as_ref(), CAR_COLOR);

    for pedestrian in &race.world.pedestrians {
        let (tex, color) = if pedestrian.hit {
            (textures.pedestrian_down.as_ref(), PEDESTRIAN_DOWN_COLOR)
        } else {
            (textures.pedestrian.as_ref(), PEDESTRIAN_COLOR)
        };
        draw_sprite(view, &pedestrian.rect, tex, color);
    }

    for coin in &race.world.coins {
        // Squash horizontally to fake a spinning coin
        let squash = coin.spin.cos().abs().max(0.2);
        let rect = WorldRect::from_center(
            coin.rect.center_x(),
            coin.rect.center_y(),
            coin.rect.w * squash,
            coin.rect.h,
        );
        draw_sprite(view, &rect, textures.coin.as_ref(), COIN_COLOR);
    }

    draw_text(&format!("Score: {}", race.score), 10.0, height - 15.0, 22.0, TEXT_COLOR);
}

/// Draw a world rectangle with a texture, or a flat rectangle without one
fn draw_sprite(view: &Viewport, rect: &WorldRect, texture: Option<&Texture2D>, fallback: Color) {
    let (x, y, w, h) = view.rect_to_screen(rect);
    match texture {
        Some(tex) => draw_texture_ex(
            tex,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                ..Default::default()
            },
        ),
        None => draw_rectangle(x, y, w, h, fallback),
    }
}

fn draw_checkered(view: &Viewport, rect: &WorldRect) {
    const CELL: f32 = 43.0;
    let (x, y, w, h) = view.rect_to_screen(rect);
    let cols = (w / CELL).ceil() as usize;
    let rows = (h / CELL).ceil() as usize;
    for row in 0..rows {
        for col in 0..cols {
            let color = if (row + col) % 2 == 0 { WHITE } else { BLACK };
            let cx = x + col as f32 * CELL;
            let cy = y + row as f32 * CELL;
            draw_rectangle(cx, cy, CELL.min(x + w - cx), CELL.min(y + h - cy), color);
        }
    }
}

// =============================================================================
// Overlays
// =============================================================================

fn draw_instructions(race: &Race, textures: &Textures) {
    let config = race.config();
    if let Some(tex) = &textures.instructions {
        let x = (config.screen_width - tex.width()) / 2.0;
        let y = (config.screen_height - tex.height()) / 2.0;
        draw_texture(tex, x, y, WHITE);
        return;
    }

    draw_centered("Swift Driver", 180.0, 64.0);
    draw_centered("Collect coins, dodge pedestrians, reach the finish line", 260.0, 24.0);
    draw_centered("E: drive    Up / Down: steer", 320.0, 24.0);
    draw_centered("Press ENTER or SPACE to start", 420.0, 28.0);
}

fn draw_game_over() {
    draw_shade();
    draw_centered("Game Over", 160.0, 64.0);
    draw_centered("Press ENTER or SPACE to restart", 350.0, 28.0);
}

fn draw_finished(score: u32) {
    draw_shade();
    draw_centered("Congratulations", 160.0, 64.0);
    draw_centered(&format!("You scored: {} points!", score), 260.0, 40.0);
    draw_centered("Press ENTER or SPACE to play again", 350.0, 28.0);
}

fn draw_shade() {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), SHADE_COLOR);
}

/// Draw a line of text horizontally centered at baseline `y`
fn draw_centered(text: &str, y: f32, font_size: f32) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let x = ((screen_width() - dims.width) / 2.0).round();
    draw_text(text, x, y, font_size, TEXT_COLOR);
}
