//! Collision System
//!
//! Bounding-box queries against single targets and lists, plus the simple
//! physics step that moves the car and blocks it against static obstacles.

use macroquad::math::Vec2;
use super::components::Bounds;
use super::rect::Rect;

/// Do two entities' bounding boxes overlap?
pub fn check_collision(a: &impl Bounds, b: &impl Bounds) -> bool {
    a.bounds().overlaps(&b.bounds())
}

/// Indices of every entity in `list` that overlaps `target`, in list order
pub fn collide_with_list<T: Bounds>(target: &impl Bounds, list: &[T]) -> Vec<usize> {
    let bounds = target.bounds();
    list.iter()
        .enumerate()
        .filter(|(_, other)| bounds.overlaps(&other.bounds()))
        .map(|(i, _)| i)
        .collect()
}

/// Does `target` overlap anything in `list`?
pub fn collides_with_any<T: Bounds>(target: &impl Bounds, list: &[T]) -> bool {
    let bounds = target.bounds();
    list.iter().any(|other| bounds.overlaps(&other.bounds()))
}

/// Result of a physics step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveResult {
    /// Horizontal movement was stopped by an obstacle
    pub blocked_x: bool,
    /// Vertical movement was stopped by an obstacle
    pub blocked_y: bool,
}

/// Move a body by `velocity`, one axis at a time, stopping flush against
/// the first obstacle in the direction of travel.
///
/// Obstacles the body already overlapped before moving on an axis do not
/// block that axis, so a body spawned inside a wall can drive out of it.
pub fn move_and_block<T: Bounds>(body: &mut Rect, velocity: Vec2, obstacles: &[T]) -> MoveResult {
    let mut result = MoveResult::default();

    if velocity.x != 0.0 {
        let before = *body;
        body.translate(velocity.x, 0.0);
        let blockers = new_contacts(&before, body, obstacles);
        if !blockers.is_empty() {
            if velocity.x > 0.0 {
                let edge = blockers.iter().map(|r| r.left()).fold(f32::INFINITY, f32::min);
                body.set_right(edge.max(before.right()));
            } else {
                let edge = blockers.iter().map(|r| r.right()).fold(f32::NEG_INFINITY, f32::max);
                body.set_left(edge.min(before.left()));
            }
            result.blocked_x = true;
        }
    }

    if velocity.y != 0.0 {
        let before = *body;
        body.translate(0.0, velocity.y);
        let blockers = new_contacts(&before, body, obstacles);
        if !blockers.is_empty() {
            if velocity.y > 0.0 {
                let edge = blockers.iter().map(|r| r.bottom()).fold(f32::INFINITY, f32::min);
                body.set_top(edge.max(before.top()));
            } else {
                let edge = blockers.iter().map(|r| r.top()).fold(f32::NEG_INFINITY, f32::max);
                body.set_bottom(edge.min(before.bottom()));
            }
            result.blocked_y = true;
        }
    }

    result
}

/// Obstacles overlapping `after` that did not already overlap `before`
fn new_contacts<T: Bounds>(before: &Rect, after: &Rect, obstacles: &[T]) -> Vec<Rect> {
    obstacles
        .iter()
        .map(|o| o.bounds())
        .filter(|r| after.overlaps(r) && !before.overlaps(r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    #[test]
    fn test_collide_with_list_order() {
        let target = Rect::new(0.0, 0.0, 10.0, 10.0);
        let list = [
            Rect::new(5.0, 5.0, 2.0, 2.0),
            Rect::new(50.0, 0.0, 2.0, 2.0),
            Rect::new(-1.0, -1.0, 2.0, 2.0),
        ];
        assert_eq!(collide_with_list(&target, &list), vec![0, 2]);
        assert!(collides_with_any(&target, &list));
        assert!(!collides_with_any(&target, &list[1..2]));
    }

    #[test]
    fn test_free_movement() {
        let mut body = Rect::new(0.0, 0.0, 10.0, 10.0);
        let walls: [Rect; 0] = [];
        let result = move_and_block(&mut body, vec2(5.0, -3.0), &walls);
        assert_eq!(result, MoveResult::default());
        assert_eq!((body.x, body.y), (5.0, -3.0));
    }

    #[test]
    fn test_blocked_moving_up() {
        let mut body = Rect::new(0.0, 0.0, 10.0, 10.0);
        let walls = [Rect::new(0.0, 12.0, 10.0, 10.0)];
        let result = move_and_block(&mut body, vec2(0.0, 5.0), &walls);
        assert!(result.blocked_y);
        assert!(!result.blocked_x);
        assert_eq!(body.top(), 12.0);
    }

    #[test]
    fn test_blocked_moving_right_keeps_vertical() {
        let mut body = Rect::new(0.0, 0.0, 10.0, 10.0);
        let walls = [Rect::new(13.0, -20.0, 5.0, 25.0)];
        let result = move_and_block(&mut body, vec2(5.0, 20.0), &walls);
        assert!(result.blocked_x);
        assert_eq!(body.right(), 13.0);
        // Vertical step happens after the horizontal one, clear of the wall
        assert_eq!(body.y, 20.0);
    }

    #[test]
    fn test_already_overlapping_does_not_block() {
        let mut body = Rect::new(0.0, 0.0, 10.0, 10.0);
        let walls = [Rect::new(5.0, 5.0, 10.0, 10.0)];
        let result = move_and_block(&mut body, vec2(0.0, -4.0), &walls);
        assert!(!result.blocked_y);
        assert_eq!(body.y, -4.0);
    }
}
