//! Tilemap loading
//!
//! Reads the subset of the Tiled `.tmj` format the game consumes: tile
//! layers (flat gid arrays with dimensions) and external tileset references
//! ordered by first gid. Layer `i` is rendered with tileset `i`.

use std::fs;
use std::path::Path;

use macroquad::math::{vec2, Vec2};
use serde::Deserialize;

use super::tileset::Tileset;
use super::WorldError;
use crate::game::TILE_SIZE;

/// One tile layer: gids in row-major order, `0` meaning "no tile".
#[derive(Debug, Clone, Deserialize)]
pub struct Layer {
    pub data: Vec<u32>,
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub name: String,
}

/// Reference to an external tileset file.
#[derive(Debug, Clone, Deserialize)]
pub struct TilesetRef {
    pub firstgid: u32,
    pub source: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tilemap {
    pub layers: Vec<Layer>,
    pub tilesets: Vec<TilesetRef>,
}

fn validate_layer(layer: &Layer, index: usize) -> Result<(), String> {
    if layer.width == 0 || layer.height == 0 {
        return Err(format!(
            "layer {} ({}): zero dimension {}x{}",
            index, layer.name, layer.width, layer.height
        ));
    }
    if layer.data.len() != layer.width * layer.height {
        return Err(format!(
            "layer {} ({}): {} gids for a {}x{} grid",
            index,
            layer.name,
            layer.data.len(),
            layer.width,
            layer.height
        ));
    }
    Ok(())
}

fn validate_tilemap(map: &Tilemap) -> Result<(), String> {
    if map.layers.is_empty() {
        return Err("tilemap has no layers".to_string());
    }
    for (i, layer) in map.layers.iter().enumerate() {
        validate_layer(layer, i)?;
    }
    for pair in map.tilesets.windows(2) {
        if pair[1].firstgid <= pair[0].firstgid {
            return Err(format!(
                "tileset gids out of order: {} then {}",
                pair[0].firstgid, pair[1].firstgid
            ));
        }
    }
    Ok(())
}

impl Tilemap {
    /// Load a tilemap from a Tiled JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WorldError> {
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Load a tilemap from a JSON string (for embedded maps or testing).
    pub fn load_from_str(s: &str) -> Result<Self, WorldError> {
        let map: Tilemap = serde_json::from_str(s)?;
        validate_tilemap(&map).map_err(WorldError::ValidationError)?;
        Ok(map)
    }

    /// World extent in pixels, from the base layer. Camera clamping input.
    pub fn pixel_size(&self) -> Vec2 {
        let base = &self.layers[0];
        vec2(base.width as f32 * TILE_SIZE, base.height as f32 * TILE_SIZE)
    }

    /// Load every referenced tileset, resolving sources relative to the
    /// directory the map lives in.
    pub fn gen_tilesets<P: AsRef<Path>>(&self, map_dir: P) -> Result<Vec<Tileset>, WorldError> {
        self.tilesets
            .iter()
            .map(|r| Tileset::load(map_dir.as_ref().join(&r.source), r.firstgid))
            .collect()
    }
}
