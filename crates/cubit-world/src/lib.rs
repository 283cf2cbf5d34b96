//! In-memory level: a bounded tile grid with sunlight columns and terrain
//! generation. Implements the level traits the tile and mesh crates consume.
#![forbid(unsafe_code)]

pub mod level;
pub mod lighting;
pub mod worldgen;

pub use level::GridLevel;
pub use worldgen::{TerrainMode, TerrainParams, WorldGenError, generate};
