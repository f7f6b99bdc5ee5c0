//! Scrolling viewport
//!
//! The track is many screens wide. The viewport is the screen-sized window
//! onto it, and it only ever scrolls right, following the car.

use super::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// World x of the screen's left edge
    pub left: f32,
    /// World y of the screen's bottom edge
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
    /// Scroll rectangle last handed to the renderer
    applied: Rect,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            bottom: 0.0,
            width,
            height,
            applied: Rect::new(0.0, 0.0, width, height),
        }
    }

    /// Back to the start of the track
    pub fn reset(&mut self) {
        self.left = 0.0;
        self.bottom = 0.0;
        self.apply();
    }

    /// Scroll right so the car keeps `margin` units from the screen's right
    /// edge, until the car's right edge reaches `limit`.
    ///
    /// Returns true if the viewport moved.
    pub fn follow(&mut self, car_right: f32, margin: f32, limit: f32) -> bool {
        let right_boundary = self.left + self.width - margin;
        if car_right > right_boundary && car_right < limit {
            self.left += car_right - right_boundary;
            return true;
        }
        false
    }

    /// Record the current scroll offsets as the renderer's view rectangle
    pub fn apply(&mut self) {
        self.applied = self.rect();
    }

    /// Visible world rectangle for the current offsets
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.bottom, self.width, self.height)
    }

    /// View rectangle the renderer draws with
    pub fn applied(&self) -> Rect {
        self.applied
    }

    /// Convert a world point to screen space (y down, origin top-left)
    pub fn world_to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        let view = self.applied;
        (x - view.x, view.y + view.h - y)
    }

    /// Screen-space rectangle (top-left corner + size) for a world rectangle
    pub fn rect_to_screen(&self, rect: &Rect) -> (f32, f32, f32, f32) {
        let (x, y) = self.world_to_screen(rect.left(), rect.top());
        (x, y, rect.w, rect.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_scrolls_by_overshoot() {
        let mut view = Viewport::new(1024.0, 600.0);
        // Boundary is 0 + 1024 - 800 = 224
        assert!(!view.follow(200.0, 800.0, 10_000.0));
        assert_eq!(view.left, 0.0);

        assert!(view.follow(230.0, 800.0, 10_000.0));
        assert_eq!(view.left, 6.0);
    }

    #[test]
    fn test_follow_stops_at_limit() {
        let mut view = Viewport::new(1024.0, 600.0);
        assert!(!view.follow(9_000.0, 800.0, 5_000.0));
        assert_eq!(view.left, 0.0);
    }

    #[test]
    fn test_apply_and_screen_mapping() {
        let mut view = Viewport::new(1024.0, 600.0);
        view.follow(324.0, 800.0, 10_000.0);
        // Not applied yet: renderer still sees the old rectangle
        assert_eq!(view.applied().x, 0.0);
        view.apply();
        assert_eq!(view.applied().x, 100.0);

        assert_eq!(view.world_to_screen(150.0, 600.0), (50.0, 0.0));
        assert_eq!(view.world_to_screen(150.0, 0.0), (50.0, 600.0));
        let (x, y, w, h) = view.rect_to_screen(&Rect::new(100.0, 500.0, 20.0, 50.0));
        assert_eq!((x, y, w, h), (0.0, 50.0, 20.0, 50.0));
    }

    #[test]
    fn test_reset() {
        let mut view = Viewport::new(1024.0, 600.0);
        view.follow(1000.0, 800.0, 10_000.0);
        view.apply();
        view.reset();
        assert_eq!(view.left, 0.0);
        assert_eq!(view.applied(), Rect::new(0.0, 0.0, 1024.0, 600.0));
    }
}
