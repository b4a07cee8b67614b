//! Axis-separated collision resolution
//!
//! Entities move one axis at a time against a static set of axis-aligned
//! obstacles: apply dx, resolve horizontally, apply dy, resolve vertically.
//! Resolving per axis keeps corner behavior deterministic and avoids
//! diagonal tunneling. This is a "stop at surface" resolver with no sliding or
//! restitution.

use macroquad::math::Rect;

use super::entity::Sprite;
use super::TILE_SIZE;

/// Strict AABB overlap: edge-touching rectangles do not overlap.
///
/// Not `Rect::overlaps`, which counts shared edges: an entity snapped
/// flush against a wall must be able to slide along it without the other
/// axis re-colliding.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && b.x < a.x + a.w && a.y < b.y + b.h && b.y < a.y + a.h
}

/// Snap the sprite out of any obstacle it overlaps on the x axis, based on
/// the direction it was moving. Obstacles are applied in iteration order;
/// with several overlaps the last one wins. Zero dx resolves nothing, so
/// resting against a wall does not re-trigger correction.
pub fn resolve_horizontal(sprite: &mut Sprite, obstacles: &[Rect]) {
    for obstacle in obstacles {
        if rects_overlap(obstacle, &sprite.footprint()) {
            if sprite.vel.x > 0.0 {
                sprite.pos.x = obstacle.x - TILE_SIZE;
            } else if sprite.vel.x < 0.0 {
                sprite.pos.x = obstacle.x + obstacle.w;
            }
        }
    }
}

/// Vertical counterpart of [`resolve_horizontal`].
pub fn resolve_vertical(sprite: &mut Sprite, obstacles: &[Rect]) {
    for obstacle in obstacles {
        if rects_overlap(obstacle, &sprite.footprint()) {
            if sprite.vel.y > 0.0 {
                sprite.pos.y = obstacle.y - TILE_SIZE;
            } else if sprite.vel.y < 0.0 {
                sprite.pos.y = obstacle.y + obstacle.h;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    fn wall() -> Vec<Rect> {
        vec![Rect::new(100.0, 100.0, 16.0, 16.0)]
    }

    #[test]
    fn test_moving_right_snaps_to_left_edge() {
        let mut sprite = Sprite::new(vec2(85.0, 100.0));
        sprite.vel.x = 2.0;

        // Walk into the wall one tick at a time: x never passes 100 - 16.
        for _ in 0..20 {
            sprite.pos.x += sprite.vel.x;
            resolve_horizontal(&mut sprite, &wall());
            assert!(sprite.pos.x <= 100.0 - TILE_SIZE);
        }
        assert_eq!(sprite.pos.x, 100.0 - TILE_SIZE);
    }

    #[test]
    fn test_moving_left_snaps_to_right_edge() {
        let mut sprite = Sprite::new(vec2(118.0, 100.0));
        sprite.vel.x = -4.0;
        sprite.pos.x += sprite.vel.x;
        resolve_horizontal(&mut sprite, &wall());
        assert_eq!(sprite.pos.x, 116.0);
    }

    #[test]
    fn test_moving_down_snaps_to_top_edge() {
        let mut sprite = Sprite::new(vec2(100.0, 90.0));
        sprite.vel.y = 2.0;
        sprite.pos.y += sprite.vel.y;
        resolve_vertical(&mut sprite, &wall());
        assert_eq!(sprite.pos.y, 100.0 - TILE_SIZE);
    }

    #[test]
    fn test_moving_up_snaps_to_bottom_edge() {
        let mut sprite = Sprite::new(vec2(100.0, 114.0));
        sprite.vel.y = -2.0;
        sprite.pos.y += sprite.vel.y;
        resolve_vertical(&mut sprite, &wall());
        assert_eq!(sprite.pos.y, 116.0);
    }

    #[test]
    fn test_touching_is_not_overlap() {
        // Flush against the wall's left edge, sliding down: the vertical
        // pass must not see a collision.
        let mut sprite = Sprite::new(vec2(84.0, 104.0));
        sprite.vel.y = 2.0;
        sprite.pos.y += sprite.vel.y;
        resolve_vertical(&mut sprite, &wall());
        assert_eq!(sprite.pos.y, 106.0);
    }

    #[test]
    fn test_zero_velocity_leaves_overlap_alone() {
        // An overlapping sprite with no velocity on the axis is not pushed.
        let mut sprite = Sprite::new(vec2(104.0, 104.0));
        resolve_horizontal(&mut sprite, &wall());
        resolve_vertical(&mut sprite, &wall());
        assert_eq!(sprite.pos, vec2(104.0, 104.0));
    }

    #[test]
    fn test_no_overlap_no_change() {
        let mut sprite = Sprite::new(vec2(10.0, 10.0));
        sprite.vel.x = 2.0;
        resolve_horizontal(&mut sprite, &wall());
        assert_eq!(sprite.pos.x, 10.0);
    }

    #[test]
    fn test_last_overlapping_obstacle_wins() {
        let obstacles = vec![
            Rect::new(100.0, 100.0, 16.0, 16.0),
            Rect::new(108.0, 100.0, 16.0, 16.0),
        ];
        let mut sprite = Sprite::new(vec2(94.0, 101.0));
        sprite.vel.x = 10.0;
        sprite.pos.x += sprite.vel.x;
        // At x 104 the footprint overlaps both rects; the first snaps to
        // 84, which clears the second, so the first snap stands.
        resolve_horizontal(&mut sprite, &obstacles);
        assert_eq!(sprite.pos.x, 84.0);
    }
}
