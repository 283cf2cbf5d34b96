//! Tile kinds, atlas mapping and the tile registry.
#![forbid(unsafe_code)]

pub mod atlas;
pub mod config;
pub mod debris;
pub mod defaults;
pub mod error;
pub mod level;
pub mod registry;
pub mod tile;
pub mod types;

pub use atlas::UvRect;
pub use debris::{Debris, ParticleSink};
pub use error::TileConfigError;
pub use level::{LevelMut, LevelView};
pub use registry::TileRegistry;
pub use tile::{Tile, TileKind, TileShape};
pub use types::{Face, FaceRole, TextureSlot, TileId};
