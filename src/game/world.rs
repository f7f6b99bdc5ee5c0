//! Game World
//!
//! The World holds every entity on the track. It is rebuilt from scratch
//! on each start and restart: nothing survives from one race to the next.

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigError, GameConfig};
use super::collision::collides_with_any;
use super::components::*;
use super::rect::Rect;

/// Error type for world generation
#[derive(Debug, Error)]
pub enum WorldError {
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
    #[error("could only place {placed} of {requested} coins without overlap")]
    CoinPlacement { placed: usize, requested: usize },
}

pub struct World {
    pub player: Player,
    /// Coins still on the road; collected coins are removed
    pub coins: Vec<Coin>,
    pub pedestrians: Vec<Pedestrian>,
    /// Wall row along the top of the road
    pub crates: Vec<Crate>,
    pub finish: FinishBarrier,
    /// Number of coins placed by the builder
    pub initial_coin_count: usize,
}

impl World {
    /// Generate a fresh track.
    ///
    /// Coins land at random non-overlapping positions; each coin gets at most
    /// `config.max_placement_attempts` tries before generation fails.
    pub fn build(config: &GameConfig, rng: &mut impl Rng) -> Result<Self, WorldError> {
        config.validate()?;

        let (start_x, start_y) = config.player_start;
        let player = Player::new(Rect::from_center(
            start_x,
            start_y,
            config.player_size.w,
            config.player_size.h,
        ));

        let crates = build_crate_row(config);
        let coins = place_coins(config, rng)?;
        let pedestrians = place_pedestrians(config, rng);

        let (finish_x, finish_y) = config.finish_barrier_center();
        let finish = FinishBarrier {
            rect: Rect::from_center(
                finish_x,
                finish_y,
                config.finish_barrier_size.w,
                config.finish_barrier_size.h,
            ),
        };

        debug!(
            coins = coins.len(),
            pedestrians = pedestrians.len(),
            crates = crates.len(),
            "world built"
        );

        Ok(Self {
            player,
            initial_coin_count: coins.len(),
            coins,
            pedestrians,
            crates,
            finish,
        })
    }

    /// Coins picked up so far
    pub fn coins_collected(&self) -> usize {
        self.initial_coin_count - self.coins.len()
    }
}

fn build_crate_row(config: &GameConfig) -> Vec<Crate> {
    let track_length = config.track_length();
    let row_y = config.crate_row_y();
    let count = (track_length / config.crate_spacing).ceil() as usize;

    (0..count)
        .map(|i| i as f32 * config.crate_spacing)
        .take_while(|&x| x < track_length)
        .map(|x| Crate {
            rect: Rect::from_center(x, row_y, config.crate_size.w, config.crate_size.h),
        })
        .collect()
}

fn place_coins(config: &GameConfig, rng: &mut impl Rng) -> Result<Vec<Coin>, WorldError> {
    let requested = config.coin_count as usize;
    let (x_min, x_max) = config.coin_x_range();
    let (y_min, y_max) = config.coin_y_range();
    let mut coins: Vec<Coin> = Vec::with_capacity(requested);

    for _ in 0..requested {
        let placed = (0..config.max_placement_attempts).find_map(|_| {
            let candidate = Coin::new(Rect::from_center(
                rng.gen_range(x_min..x_max),
                rng.gen_range(y_min..y_max),
                config.coin_size.w,
                config.coin_size.h,
            ));
            (!collides_with_any(&candidate, &coins)).then_some(candidate)
        });

        match placed {
            Some(coin) => coins.push(coin),
            None => {
                return Err(WorldError::CoinPlacement {
                    placed: coins.len(),
                    requested,
                })
            }
        }
    }

    Ok(coins)
}

fn place_pedestrians(config: &GameConfig, rng: &mut impl Rng) -> Vec<Pedestrian> {
    let (band_min, band_max) = config.pedestrian_spawn_range();
    let size = config.pedestrian_size;

    (1..=config.track_segments)
        .map(|segment| {
            let bottom = rng.gen_range(band_min..band_max);
            let left = config.screen_width * segment as f32;
            let patrol = PatrolBounds {
                top: bottom + config.patrol_height(),
                bottom,
            };
            Pedestrian::new(Rect::new(left, bottom, size.w, size.h), config.pedestrian_speed, patrol)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(config: &GameConfig, seed: u64) -> Result<World, WorldError> {
        World::build(config, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_default_world_layout() {
        let config = GameConfig::default();
        let world = build(&config, 1).unwrap();

        assert_eq!(world.coins.len(), 60);
        assert_eq!(world.initial_coin_count, 60);
        assert_eq!(world.coins_collected(), 0);
        assert_eq!(world.pedestrians.len(), 20);
        // 0, 65, 130, ... < 20480
        assert_eq!(world.crates.len(), 316);
        assert_eq!(world.player.rect.center_x(), 74.0);
        assert_eq!(world.player.rect.center_y(), 270.0);
        assert_eq!(world.finish.rect.center_x(), 20480.0 + 146.0);
    }

    #[test]
    fn test_coins_never_overlap() {
        let config = GameConfig::default();
        for seed in 0..10 {
            let world = build(&config, seed).unwrap();
            for (i, a) in world.coins.iter().enumerate() {
                for b in &world.coins[i + 1..] {
                    assert!(!a.rect.overlaps(&b.rect), "seed {} has overlapping coins", seed);
                }
            }
        }
    }

    #[test]
    fn test_coins_within_spawn_band() {
        let config = GameConfig::default();
        let world = build(&config, 7).unwrap();
        let (x_min, x_max) = config.coin_x_range();
        let (y_min, y_max) = config.coin_y_range();
        for coin in &world.coins {
            let (cx, cy) = (coin.rect.center_x(), coin.rect.center_y());
            assert!(cx >= x_min && cx < x_max);
            assert!(cy >= y_min && cy < y_max);
        }
    }

    #[test]
    fn test_pedestrian_per_segment() {
        let config = GameConfig::default();
        let world = build(&config, 3).unwrap();
        let (band_min, band_max) = config.pedestrian_spawn_range();
        for (i, ped) in world.pedestrians.iter().enumerate() {
            assert_eq!(ped.rect.left(), config.screen_width * (i + 1) as f32);
            assert!(ped.rect.bottom() >= band_min && ped.rect.bottom() < band_max);
            assert_eq!(ped.patrol.bottom, ped.rect.bottom());
            assert_eq!(ped.patrol.top, ped.rect.bottom() + config.patrol_height());
            assert_eq!(ped.velocity_y, config.pedestrian_speed);
            assert!(!ped.hit);
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let config = GameConfig::default();
        let a = build(&config, 99).unwrap();
        let b = build(&config, 99).unwrap();
        let pos = |w: &World| w.coins.iter().map(|c| (c.rect.x, c.rect.y)).collect::<Vec<_>>();
        assert_eq!(pos(&a), pos(&b));
    }

    #[test]
    fn test_impossible_coin_count_fails_fast() {
        let config = GameConfig {
            track_segments: 2,
            coin_count: 500,
            coin_size: crate::config::Size::new(400.0, 400.0),
            max_placement_attempts: 50,
            ..GameConfig::default()
        };
        match build(&config, 5) {
            Err(WorldError::CoinPlacement { placed, requested }) => {
                assert_eq!(requested, 500);
                assert!(placed < requested);
            }
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("placement should have failed"),
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig { track_segments: 0, ..GameConfig::default() };
        assert!(matches!(build(&config, 0), Err(WorldError::InvalidConfig(_))));
    }
}
