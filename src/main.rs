//! Thornvale: a 2D tile-based action RPG
//!
//! A warrior, a handful of goblins, and a meat potion on a small tile map.
//! The whole game is frame-locked: macroquad drives one `update` and one
//! `draw` per frame, scenes own all state, and nothing runs between ticks.

mod game;
mod input;
mod render;
mod scene;
mod world;

use log::error;
use macroquad::prelude::*;

use input::InputFrame;
use render::Assets;
use scene::{SceneManager, Signal};

fn window_conf() -> Conf {
    Conf {
        window_title: "Thornvale".to_string(),
        window_width: 640,
        window_height: 480,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let assets = match Assets::load("assets") {
        Ok(assets) => assets,
        Err(e) => {
            error!("failed to load assets: {}", e);
            return;
        }
    };

    let mut manager = match SceneManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            error!("failed to start: {}", e);
            return;
        }
    };

    loop {
        let frame = InputFrame::poll(render::screen_scale());

        match manager.update(&frame) {
            Ok(Signal::Continue) => {}
            Ok(Signal::Quit) => break,
            Err(e) => {
                error!("scene transition failed: {}", e);
                break;
            }
        }

        manager.draw(&assets);
        next_frame().await;
    }
}
