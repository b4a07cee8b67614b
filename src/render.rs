//! Rendering support
//!
//! Texture storage and screen-space scaling. The simulation hands the draw
//! pass read-only state (positions, camera offset, frame indices); this
//! module owns the pixels. Missing image files are a fatal
//! startup error; the simulation never runs without its collaborators.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use macroquad::prelude::*;

use crate::world::{Tilemap, WorldError};

/// The fixed logical resolution the game simulates and draws in.
pub const VIRTUAL_WIDTH: f32 = 320.0;
pub const VIRTUAL_HEIGHT: f32 = 240.0;

/// Entity sheets are authored at 192 px per frame and drawn shrunk onto
/// the 16 px tile grid.
pub const SPRITE_SCALE: f32 = 0.3;

/// Window pixels per virtual pixel, letterboxing on mismatched ratios.
pub fn screen_scale() -> f32 {
    (screen_width() / VIRTUAL_WIDTH).min(screen_height() / VIRTUAL_HEIGHT)
}

/// Every texture the game draws, loaded up front.
pub struct Assets {
    pub player: Texture2D,
    pub enemy: Texture2D,
    pub potion: Texture2D,
    tiles: HashMap<String, Texture2D>,
}

impl Assets {
    /// Load all textures: the fixed entity sheets plus every image the
    /// map's tilesets reference.
    pub fn load(base: &str) -> Result<Self, WorldError> {
        let base = Path::new(base);
        let tilemap = Tilemap::load(base.join("maps/spawn.tmj"))?;
        let tilesets = tilemap.gen_tilesets(base.join("maps"))?;

        let mut tiles = HashMap::new();
        for tileset in &tilesets {
            for path in tileset.image_paths() {
                if !tiles.contains_key(path) {
                    tiles.insert(path.to_string(), load_texture_sync(path)?);
                }
            }
        }
        log::info!("loaded {} tile textures", tiles.len());

        Ok(Self {
            player: load_texture_sync("assets/images/warrior.png")?,
            enemy: load_texture_sync("assets/images/goblin_fire.png")?,
            potion: load_texture_sync("assets/images/meat.png")?,
            tiles,
        })
    }

    pub fn tile_texture(&self, path: &str) -> Option<&Texture2D> {
        self.tiles.get(path)
    }
}

fn load_texture_sync(path: &str) -> Result<Texture2D, WorldError> {
    let bytes = fs::read(path).map_err(|e| {
        WorldError::IoError(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path, e),
        ))
    })?;
    let texture = Texture2D::from_file_with_format(&bytes, None);
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}
