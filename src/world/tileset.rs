//! Tileset loading
//!
//! Two tileset shapes exist in the map data:
//! - **uniform**: one atlas image cut into a fixed grid, source rect
//!   computed from the tileset's `columns`/`tilewidth` fields;
//! - **dynamic**: one standalone image per tile (buildings and other
//!   oversized props), resolved through an explicit local-id-to-image map
//!   built and validated at load time.
//!
//! The shape is detected structurally (a `tiles` array means dynamic), and
//! dynamic lookups go through the validated map, so a gid the tileset does
//! not define simply yields no tile.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use macroquad::math::Rect;
use serde::Deserialize;

use super::WorldError;

#[derive(Debug, Clone, Deserialize)]
struct UniformTilesetJson {
    image: String,
    columns: u32,
    tilewidth: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct TileJson {
    id: u32,
    image: String,
    #[serde(rename = "imagewidth")]
    image_width: u32,
    #[serde(rename = "imageheight")]
    image_height: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct DynTilesetJson {
    tiles: Vec<TileJson>,
}

/// Raw tileset file content; variants are tried in declaration order.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TilesetJson {
    Dynamic(DynTilesetJson),
    Uniform(UniformTilesetJson),
}

/// What the renderer needs to draw one tile: which image, which part of it
/// (whole image when `source` is `None`), and its pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct TileDraw<'a> {
    pub image: &'a str,
    pub source: Option<Rect>,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct UniformTileset {
    image: String,
    first_gid: u32,
    columns: u32,
    tile_width: u32,
}

#[derive(Debug, Clone)]
struct TileImage {
    image: String,
    width: u32,
    height: u32,
}

#[derive(Debug, Clone)]
pub struct DynamicTileset {
    first_gid: u32,
    tiles: Vec<TileImage>,
    by_local_id: HashMap<u32, usize>,
}

#[derive(Debug, Clone)]
pub enum Tileset {
    Uniform(UniformTileset),
    Dynamic(DynamicTileset),
}

/// Tiled writes image paths relative to the tileset file, with OS-specific
/// separators. Rebase them onto the assets directory.
fn normalize_image_path(raw: &str) -> String {
    let mut path = raw.replace('\\', "/");
    while let Some(stripped) = path.strip_prefix("../") {
        path = stripped.to_string();
    }
    format!("assets/{}", path)
}

fn build_uniform(json: UniformTilesetJson, first_gid: u32) -> Result<UniformTileset, WorldError> {
    if json.image.is_empty() {
        return Err(WorldError::ValidationError(
            "uniform tileset has no image".to_string(),
        ));
    }
    if json.columns == 0 || json.tilewidth == 0 {
        return Err(WorldError::ValidationError(format!(
            "uniform tileset geometry invalid: {} columns, {} px tiles",
            json.columns, json.tilewidth
        )));
    }
    Ok(UniformTileset {
        image: normalize_image_path(&json.image),
        first_gid,
        columns: json.columns,
        tile_width: json.tilewidth,
    })
}

fn build_dynamic(json: DynTilesetJson, first_gid: u32) -> Result<DynamicTileset, WorldError> {
    if json.tiles.is_empty() {
        return Err(WorldError::ValidationError(
            "dynamic tileset has no tiles".to_string(),
        ));
    }

    let mut tiles = Vec::with_capacity(json.tiles.len());
    let mut by_local_id = HashMap::with_capacity(json.tiles.len());
    for tile in json.tiles {
        if tile.image.is_empty() {
            return Err(WorldError::ValidationError(format!(
                "tile {} has no image",
                tile.id
            )));
        }
        if by_local_id.insert(tile.id, tiles.len()).is_some() {
            return Err(WorldError::ValidationError(format!(
                "duplicate tile id {}",
                tile.id
            )));
        }
        tiles.push(TileImage {
            image: normalize_image_path(&tile.image),
            width: tile.image_width,
            height: tile.image_height,
        });
    }

    Ok(DynamicTileset {
        first_gid,
        tiles,
        by_local_id,
    })
}

impl Tileset {
    /// Load a tileset description from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P, first_gid: u32) -> Result<Self, WorldError> {
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents, first_gid)
    }

    /// Load a tileset description from a JSON string.
    pub fn load_from_str(s: &str, first_gid: u32) -> Result<Self, WorldError> {
        match serde_json::from_str::<TilesetJson>(s)? {
            TilesetJson::Uniform(json) => Ok(Tileset::Uniform(build_uniform(json, first_gid)?)),
            TilesetJson::Dynamic(json) => Ok(Tileset::Dynamic(build_dynamic(json, first_gid)?)),
        }
    }

    /// Resolve a global tile id to draw data. `None` for gids below this
    /// tileset's range or, in the dynamic case, ids the tileset never
    /// defined.
    pub fn tile(&self, gid: u32) -> Option<TileDraw<'_>> {
        match self {
            Tileset::Uniform(set) => {
                let local = gid.checked_sub(set.first_gid)?;
                let size = set.tile_width as f32;
                let col = local % set.columns;
                let row = local / set.columns;
                Some(TileDraw {
                    image: &set.image,
                    source: Some(Rect::new(
                        col as f32 * size,
                        row as f32 * size,
                        size,
                        size,
                    )),
                    width: size,
                    height: size,
                })
            }
            Tileset::Dynamic(set) => {
                let local = gid.checked_sub(set.first_gid)?;
                let tile = &set.tiles[*set.by_local_id.get(&local)?];
                Some(TileDraw {
                    image: &tile.image,
                    source: None,
                    width: tile.width as f32,
                    height: tile.height as f32,
                })
            }
        }
    }

    /// Every image file this tileset draws from.
    pub fn image_paths(&self) -> Vec<&str> {
        match self {
            Tileset::Uniform(set) => vec![set.image.as_str()],
            Tileset::Dynamic(set) => set.tiles.iter().map(|t| t.image.as_str()).collect(),
        }
    }
}
