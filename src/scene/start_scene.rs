//! Title scene

use log::debug;
use macroquad::prelude::*;

use super::{Scene, SceneId};
use crate::input::InputFrame;
use crate::render::{self, Assets, VIRTUAL_HEIGHT, VIRTUAL_WIDTH};
use crate::world::WorldError;

pub struct StartScene {
    loaded: bool,
}

impl StartScene {
    pub fn new() -> Self {
        Self { loaded: false }
    }
}

impl Default for StartScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for StartScene {
    fn update(&mut self, input: &InputFrame) -> SceneId {
        if input.confirm_pressed {
            return SceneId::Game;
        }
        if input.back_pressed {
            return SceneId::Exit;
        }
        SceneId::Start
    }

    fn draw(&self, _assets: &Assets) {
        clear_background(Color::from_rgba(24, 28, 40, 255));
        let scale = render::screen_scale();

        let title = "THORNVALE";
        let size = 32.0 * scale;
        let dims = measure_text(title, None, size as u16, 1.0);
        draw_text(
            title,
            (VIRTUAL_WIDTH * scale - dims.width) / 2.0,
            VIRTUAL_HEIGHT * scale * 0.4,
            size,
            WHITE,
        );

        let prompt = "press enter to play - escape to quit";
        let size = 12.0 * scale;
        let dims = measure_text(prompt, None, size as u16, 1.0);
        draw_text(
            prompt,
            (VIRTUAL_WIDTH * scale - dims.width) / 2.0,
            VIRTUAL_HEIGHT * scale * 0.6,
            size,
            GRAY,
        );
    }

    fn first_load(&mut self) -> Result<(), WorldError> {
        self.loaded = true;
        Ok(())
    }

    fn on_enter(&mut self) {
        debug!("entering start scene");
    }

    fn on_exit(&mut self) {
        debug!("leaving start scene");
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }
}
