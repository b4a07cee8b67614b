//! Scene manager
//!
//! Owns every scene, keyed by id, and drives the active one. Transitions
//! are synchronous within a single step: exit the old scene, load the
//! target if it was never loaded, enter it. There is no teardown beyond
//! `on_exit`; scene state persists between activations.

use std::collections::HashMap;

use log::{debug, info};

use super::{GameScene, Scene, SceneId, StartScene};
use crate::input::InputFrame;
use crate::render::Assets;
use crate::world::WorldError;

/// What the host loop should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
}

pub struct SceneManager {
    scenes: HashMap<SceneId, Box<dyn Scene>>,
    active: SceneId,
}

impl SceneManager {
    /// Build the game's scene set and activate the title scene.
    pub fn new() -> Result<Self, WorldError> {
        let mut scenes: HashMap<SceneId, Box<dyn Scene>> = HashMap::new();
        scenes.insert(SceneId::Start, Box::new(StartScene::new()));
        scenes.insert(SceneId::Game, Box::new(GameScene::new()));

        let mut manager = Self {
            scenes,
            active: SceneId::Start,
        };
        manager.activate(SceneId::Start)?;
        Ok(manager)
    }

    /// Run one tick of the active scene, following any transition it
    /// requests within the same step.
    pub fn update(&mut self, input: &InputFrame) -> Result<Signal, WorldError> {
        let Some(scene) = self.scenes.get_mut(&self.active) else {
            return Ok(Signal::Quit);
        };

        let next = scene.update(input);
        if next == self.active {
            return Ok(Signal::Continue);
        }

        scene.on_exit();
        if next == SceneId::Exit {
            info!("exit requested, shutting down");
            return Ok(Signal::Quit);
        }

        debug!("scene transition {:?} -> {:?}", self.active, next);
        self.activate(next)?;
        Ok(Signal::Continue)
    }

    pub fn draw(&self, assets: &Assets) {
        if let Some(scene) = self.scenes.get(&self.active) {
            scene.draw(assets);
        }
    }

    /// Load the target if this is its first activation, then enter it.
    fn activate(&mut self, id: SceneId) -> Result<(), WorldError> {
        if let Some(scene) = self.scenes.get_mut(&id) {
            if !scene.is_loaded() {
                scene.first_load()?;
            }
            scene.on_enter();
            self.active = id;
        }
        Ok(())
    }
}
