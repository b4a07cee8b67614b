//! Game entities
//!
//! Player and enemies share a capability set (a positioned sprite, a
//! per-direction animation table, a combat component) composed as plain
//! fields. The combat variant is chosen by role at construction:
//! `BasicCombat` for the player, `CooldownCombat` for enemies.

use macroquad::math::{Rect, Vec2};

use super::animation::Animation;
use super::combat::{BasicCombat, Combat, CooldownCombat};
use super::direction::{AnimationSet, Direction};
use super::TILE_SIZE;

/// A movable thing in world space: continuous position plus the per-tick
/// displacement recomputed every tick by input or AI.
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Sprite {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    /// The fixed tile-size collision square, independent of how large the
    /// sprite draws.
    pub fn footprint(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, TILE_SIZE, TILE_SIZE)
    }
}

/// Map a velocity to the animation slot it selects. Horizontal movement
/// wins over vertical; a still entity selects nothing and its last frame
/// holds on screen.
pub fn facing_for_velocity(vel: Vec2) -> Option<Direction> {
    if vel.x > 0.0 {
        Some(Direction::Right)
    } else if vel.x < 0.0 {
        Some(Direction::Left)
    } else if vel.y > 0.0 {
        Some(Direction::Down)
    } else if vel.y < 0.0 {
        Some(Direction::Up)
    } else {
        None
    }
}

pub struct Player {
    pub sprite: Sprite,
    pub animations: AnimationSet,
    pub combat: BasicCombat,
    /// Sheet frame last produced by an animation advance; what the
    /// renderer shows while the entity stands still.
    pub current_frame: usize,
}

impl Player {
    pub fn new(pos: Vec2, animations: AnimationSet, combat: BasicCombat) -> Self {
        Self {
            sprite: Sprite::new(pos),
            animations,
            combat,
            current_frame: 0,
        }
    }

    /// The animation selected by the current velocity, if any.
    pub fn active_animation_mut(&mut self) -> Option<&mut Animation> {
        let facing = facing_for_velocity(self.sprite.vel)?;
        self.animations.get_mut(facing)
    }

    /// The dedicated attack-swing animation.
    pub fn attack_animation_mut(&mut self) -> Option<&mut Animation> {
        self.animations.get_mut(Direction::Attack)
    }

    /// Frame the renderer should display this tick: the attack swing while
    /// attacking, otherwise the held walk frame.
    pub fn display_frame(&self) -> usize {
        if self.combat.attacking() {
            if let Some(anim) = self.animations.get(Direction::Attack) {
                return anim.frame();
            }
        }
        self.current_frame
    }
}

pub struct Enemy {
    pub sprite: Sprite,
    pub animations: AnimationSet,
    pub combat: CooldownCombat,
    /// Chases the player when set; otherwise stands its ground.
    pub follows_player: bool,
    /// Marked by the combat pass, removed by end-of-tick compaction.
    pub dead: bool,
    pub current_frame: usize,
}

impl Enemy {
    pub fn new(
        pos: Vec2,
        animations: AnimationSet,
        combat: CooldownCombat,
        follows_player: bool,
    ) -> Self {
        Self {
            sprite: Sprite::new(pos),
            animations,
            combat,
            follows_player,
            dead: false,
            current_frame: 0,
        }
    }

    pub fn active_animation_mut(&mut self) -> Option<&mut Animation> {
        let facing = facing_for_velocity(self.sprite.vel)?;
        self.animations.get_mut(facing)
    }

    pub fn display_frame(&self) -> usize {
        self.current_frame
    }
}

/// A consumable pickup restoring player health on contact.
pub struct Potion {
    pub sprite: Sprite,
    pub heal_amount: i32,
}

impl Potion {
    pub fn new(pos: Vec2, heal_amount: i32) -> Self {
        Self {
            sprite: Sprite::new(pos),
            heal_amount,
        }
    }
}
