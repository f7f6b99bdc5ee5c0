//! Race Runtime
//!
//! `Race` owns everything that changes while the game runs: the screen
//! state, the world, the score, the viewport and the queue of audio cues.
//! Input and the per-frame update mutate it; the renderer only reads it.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::input::{Action, KeyEvent};
use super::collision::{check_collision, collide_with_list, collides_with_any, move_and_block};
use super::event::{EventQueue, GameEvent};
use super::state::{ConfirmAction, GameState};
use super::viewport::Viewport;
use super::world::{World, WorldError};

pub struct Race {
    config: GameConfig,
    rng: StdRng,

    /// Active screen
    pub state: GameState,

    /// Entities of the current race
    pub world: World,

    /// Coins collected this race
    pub score: u32,

    /// Scroll position over the track
    pub viewport: Viewport,

    /// Audio cues raised since the last drain
    pub events: EventQueue,

    /// Updates this race in which the wall row stopped the car
    pub wall_contacts: u32,
}

impl Race {
    /// Create the game on its instructions page.
    ///
    /// A world is generated up front so the first frame has something to
    /// draw; it is replaced when the race starts.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, WorldError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let world = World::build(&config, &mut rng)?;
        let viewport = Viewport::new(config.screen_width, config.screen_height);

        Ok(Self {
            config,
            rng,
            state: GameState::default(),
            world,
            score: 0,
            viewport,
            events: EventQueue::default(),
            wall_contacts: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Apply one key event. Fails only if a new world cannot be generated.
    pub fn handle_key(&mut self, event: KeyEvent) -> Result<(), WorldError> {
        if event == KeyEvent::Pressed(Action::Confirm) {
            match self.state.on_confirm() {
                ConfirmAction::Start => {
                    self.start_race()?;
                    self.events.send(GameEvent::RaceStarted);
                }
                ConfirmAction::Restart => self.start_race()?,
                ConfirmAction::Ignore => {}
            }
            return Ok(());
        }

        match self.state {
            GameState::Running => self.steer(event),
            GameState::InstructionsPage | GameState::GameOver | GameState::Finished => {}
        }
        Ok(())
    }

    fn steer(&mut self, event: KeyEvent) {
        let speed = self.config.movement_speed;
        let velocity = &mut self.world.player.velocity;
        match event {
            KeyEvent::Pressed(Action::SteerUp) => velocity.y = speed,
            KeyEvent::Pressed(Action::SteerDown) => velocity.y = -speed,
            KeyEvent::Released(Action::SteerUp | Action::SteerDown) => velocity.y = 0.0,
            KeyEvent::Released(Action::Accelerate) => velocity.x = speed,
            _ => {}
        }
    }

    /// Rebuild the world and put the race in motion
    fn start_race(&mut self) -> Result<(), WorldError> {
        self.world = World::build(&self.config, &mut self.rng)?;
        self.score = 0;
        self.wall_contacts = 0;
        self.viewport.reset();
        info!(from = self.state.label(), "race started");
        self.state = GameState::Running;
        Ok(())
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Run one frame of game logic. Does nothing unless the race is running.
    pub fn update(&mut self) {
        match self.state {
            GameState::Running => self.tick(),
            GameState::InstructionsPage | GameState::GameOver | GameState::Finished => {}
        }
    }

    fn tick(&mut self) {
        let config = &self.config;
        let world = &mut self.world;

        // Coins
        for coin in &mut world.coins {
            coin.animate();
        }
        let hits = collide_with_list(&world.player, &world.coins);
        for &index in hits.iter().rev() {
            world.coins.remove(index);
            self.score += 1;
            self.events.send(GameEvent::CoinCollected);
            debug!(score = self.score, "coin collected");
        }

        // Scrolling
        let changed = self.viewport.follow(
            world.player.rect.right(),
            config.viewport_margin,
            config.scroll_limit(),
        );

        // Never let the car drop off the bottom of the screen
        let min_bottom = self.viewport.bottom + config.bottom_margin();
        if world.player.rect.bottom() < min_bottom {
            world.player.rect.set_bottom(min_bottom);
        }

        if changed {
            self.viewport.apply();
            trace!(view_left = self.viewport.left, "viewport scrolled");
        }

        // Pedestrians walk their patrol, turning at its ends and at walls
        for pedestrian in &mut world.pedestrians {
            pedestrian.step();
            if collides_with_any(&*pedestrian, &world.crates) || pedestrian.patrol.is_outside(&pedestrian.rect) {
                pedestrian.reverse();
            }
        }

        // Physics: the wall row blocks the car
        let velocity = world.player.velocity;
        let moved = move_and_block(&mut world.player.rect, velocity, &world.crates);
        if moved.blocked_y {
            self.wall_contacts += 1;
            trace!(top = world.player.rect.top(), "car against the wall row");
        }

        // Pedestrian check runs first: a frame touching both ends the race as GameOver
        let player = world.player;
        if let Some(pedestrian) = world.pedestrians.iter_mut().find(|p| check_collision(&player, &**p)) {
            pedestrian.hit = true;
            self.state = GameState::GameOver;
            self.events.send(GameEvent::PedestrianHit);
            info!(score = self.score, wall_contacts = self.wall_contacts, "pedestrian hit, game over");
            return;
        }

        if check_collision(&player, &world.finish) {
            self.state = GameState::Finished;
            self.events.send(GameEvent::Finished);
            info!(score = self.score, wall_contacts = self.wall_contacts, "finish line reached");
        }
    }
}
