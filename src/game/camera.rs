//! Viewport camera
//!
//! The camera is an offset added to every draw position. It is recomputed
//! from scratch each tick, follow then constrain, so there is no
//! smoothing state and the constraint always wins at world edges.

use macroquad::math::Vec2;

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Offset applied to all world positions when drawing.
    pub offset: Vec2,
}

impl Camera {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            offset: Vec2::new(x, y),
        }
    }

    /// Center the viewport on the target.
    pub fn follow_target(&mut self, target: Vec2, viewport: Vec2) {
        self.offset = viewport / 2.0 - target;
    }

    /// Clamp the offset so the viewport never shows beyond the world:
    /// each component ends up in `[viewport - world, 0]`. Applied after
    /// `follow_target` every tick. Min before max, so a world smaller than
    /// the viewport pins to the lower bound instead of oscillating.
    pub fn constrain(&mut self, world: Vec2, viewport: Vec2) {
        self.offset.x = self.offset.x.min(0.0);
        self.offset.y = self.offset.y.min(0.0);
        self.offset.x = self.offset.x.max(viewport.x - world.x);
        self.offset.y = self.offset.y.max(viewport.y - world.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    const VIEWPORT: Vec2 = Vec2::new(320.0, 240.0);
    const WORLD: Vec2 = Vec2::new(640.0, 480.0);

    #[test]
    fn test_follow_centers_target() {
        let mut cam = Camera::new(0.0, 0.0);
        cam.follow_target(vec2(300.0, 200.0), VIEWPORT);
        assert_eq!(cam.offset, vec2(160.0 - 300.0, 120.0 - 200.0));
    }

    #[test]
    fn test_constrain_clamps_to_origin_corner() {
        let mut cam = Camera::new(0.0, 0.0);
        // Target near the world origin pushes the offset positive.
        cam.follow_target(vec2(10.0, 10.0), VIEWPORT);
        cam.constrain(WORLD, VIEWPORT);
        assert_eq!(cam.offset, vec2(0.0, 0.0));
    }

    #[test]
    fn test_constrain_clamps_to_far_corner() {
        let mut cam = Camera::new(0.0, 0.0);
        cam.follow_target(vec2(630.0, 470.0), VIEWPORT);
        cam.constrain(WORLD, VIEWPORT);
        assert_eq!(cam.offset, vec2(VIEWPORT.x - WORLD.x, VIEWPORT.y - WORLD.y));
    }

    #[test]
    fn test_constrain_is_idempotent() {
        let mut cam = Camera::new(0.0, 0.0);
        cam.follow_target(vec2(500.0, 30.0), VIEWPORT);
        cam.constrain(WORLD, VIEWPORT);
        let once = cam.offset;
        cam.constrain(WORLD, VIEWPORT);
        assert_eq!(cam.offset, once);
    }

    #[test]
    fn test_interior_target_is_untouched_by_constrain() {
        let mut cam = Camera::new(0.0, 0.0);
        cam.follow_target(vec2(320.0, 240.0), VIEWPORT);
        let followed = cam.offset;
        cam.constrain(WORLD, VIEWPORT);
        assert_eq!(cam.offset, followed);
    }
}
