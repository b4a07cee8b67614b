//! Simulation core
//!
//! Everything that advances per tick: animation clocks, combat state,
//! axis-separated movement, and the camera. The scene layer orchestrates
//! these; rendering only reads the results.

pub mod animation;
pub mod camera;
pub mod collision;
pub mod combat;
pub mod direction;
pub mod entity;

pub use animation::Animation;
pub use camera::Camera;
pub use combat::{BasicCombat, Combat, CooldownCombat};
pub use direction::{AnimationSet, Direction};
pub use entity::{Enemy, Player, Potion, Sprite};

/// World grid cell size in pixels, also the collision footprint.
pub const TILE_SIZE: f32 = 16.0;
