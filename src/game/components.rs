//! Game Entities
//!
//! Every object on the track is a plain data struct with a bounding box.
//! Behavior lives in the update loop (`runtime.rs`).

use macroquad::math::Vec2;
use super::rect::Rect;

/// Anything that takes part in collision queries
pub trait Bounds {
    fn bounds(&self) -> Rect;
}

impl Bounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

// =============================================================================
// Player
// =============================================================================

/// The car
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub rect: Rect,
    /// x = forward speed, y = steering speed (units per update)
    pub velocity: Vec2,
}

impl Player {
    pub fn new(rect: Rect) -> Self {
        Self { rect, velocity: Vec2::ZERO }
    }
}

impl Bounds for Player {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

// =============================================================================
// Collectibles
// =============================================================================

/// Radians of coin spin per update
pub const COIN_SPIN_STEP: f32 = 0.08;

#[derive(Debug, Clone, Copy)]
pub struct Coin {
    pub rect: Rect,
    /// Animation phase, drawing only; never affects the bounding box
    pub spin: f32,
}

impl Coin {
    pub fn new(rect: Rect) -> Self {
        Self { rect, spin: 0.0 }
    }

    pub fn animate(&mut self) {
        self.spin = (self.spin + COIN_SPIN_STEP) % std::f32::consts::TAU;
    }
}

impl Bounds for Coin {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

// =============================================================================
// Pedestrians
// =============================================================================

/// Vertical range a pedestrian walks back and forth in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolBounds {
    pub top: f32,
    pub bottom: f32,
}

impl PatrolBounds {
    /// Is the rectangle above the top bound or below the bottom bound?
    pub fn is_outside(&self, rect: &Rect) -> bool {
        rect.top() > self.top || rect.bottom() < self.bottom
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Pedestrian {
    pub rect: Rect,
    pub velocity_y: f32,
    pub patrol: PatrolBounds,
    /// Struck by the car (drawn knocked down)
    pub hit: bool,
}

impl Pedestrian {
    pub fn new(rect: Rect, velocity_y: f32, patrol: PatrolBounds) -> Self {
        Self { rect, velocity_y, patrol, hit: false }
    }

    pub fn step(&mut self) {
        self.rect.translate(0.0, self.velocity_y);
    }

    pub fn reverse(&mut self) {
        self.velocity_y = -self.velocity_y;
    }
}

impl Bounds for Pedestrian {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

// =============================================================================
// Static Obstacles
// =============================================================================

/// One crate of the wall row along the top of the road
#[derive(Debug, Clone, Copy)]
pub struct Crate {
    pub rect: Rect,
}

impl Bounds for Crate {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Invisible sentinel past the end of the track
#[derive(Debug, Clone, Copy)]
pub struct FinishBarrier {
    pub rect: Rect,
}

impl Bounds for FinishBarrier {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patrol_bounds() {
        let patrol = PatrolBounds { top: 260.0, bottom: 100.0 };
        assert!(!patrol.is_outside(&Rect::new(0.0, 100.0, 10.0, 80.0)));
        assert!(patrol.is_outside(&Rect::new(0.0, 99.0, 10.0, 80.0)));
        assert!(patrol.is_outside(&Rect::new(0.0, 181.0, 10.0, 80.0)));
    }

    #[test]
    fn test_coin_spin_wraps() {
        let mut coin = Coin::new(Rect::new(0.0, 0.0, 8.0, 8.0));
        let before = coin.rect;
        for _ in 0..1000 {
            coin.animate();
        }
        assert!(coin.spin >= 0.0 && coin.spin < std::f32::consts::TAU);
        assert_eq!(coin.rect, before);
    }
}
