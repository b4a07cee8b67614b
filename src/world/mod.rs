//! World data
//!
//! Tiled-format tilemaps and tilesets (JSON) plus sprite-sheet geometry.
//! Everything here is loaded once per scene lifetime and read-only during
//! simulation; the scene consumes pixel dimensions for camera clamping and
//! the renderer consumes frame-index-to-source-rect mappings.

mod spritesheet;
mod tilemap;
mod tileset;

pub use spritesheet::Spritesheet;
pub use tilemap::{Layer, Tilemap};
pub use tileset::{TileDraw, Tileset};

/// Error type for world data loading
#[derive(Debug)]
pub enum WorldError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    ValidationError(String),
}

impl From<std::io::Error> for WorldError {
    fn from(e: std::io::Error) -> Self {
        WorldError::IoError(e)
    }
}

impl From<serde_json::Error> for WorldError {
    fn from(e: serde_json::Error) -> Self {
        WorldError::ParseError(e)
    }
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorldError::IoError(e) => write!(f, "IO error: {}", e),
            WorldError::ParseError(e) => write!(f, "Parse error: {}", e),
            WorldError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}
