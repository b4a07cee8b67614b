//! Scene lifecycle
//!
//! A scene is one self-contained screen of the game (title, gameplay)
//! owning its entities, obstacles, and camera. Exactly one scene is active
//! at a time. Lifecycle: a scene is loaded at most once over its lifetime
//! (`first_load`), then entered and exited on every transition. `Exit` is a
//! reserved identifier with no scene behind it: returning it asks the
//! host process to terminate.

mod game_scene;
mod manager;
mod start_scene;

pub use game_scene::GameScene;
pub use manager::{SceneManager, Signal};
pub use start_scene::StartScene;

use crate::input::InputFrame;
use crate::render::Assets;
use crate::world::WorldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Start,
    Game,
    /// Terminal identifier: shut the application down.
    Exit,
}

pub trait Scene {
    /// Advance one tick and name the scene that should be active next
    /// (usually the scene itself).
    fn update(&mut self, input: &InputFrame) -> SceneId;

    /// Draw the post-update state. Must not mutate simulation state.
    fn draw(&self, assets: &Assets);

    /// One-time setup; called before the first `on_enter` only.
    fn first_load(&mut self) -> Result<(), WorldError>;

    fn on_enter(&mut self);
    fn on_exit(&mut self);
    fn is_loaded(&self) -> bool;
}
