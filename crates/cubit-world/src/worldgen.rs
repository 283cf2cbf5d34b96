use std::fs;
use std::path::Path;

use cubit_geom::BlockPos;
use cubit_tiles::defaults::{BUSH, DIRT, GRASS, ROCK};
use cubit_tiles::{TileId, TileRegistry};
use fastnoise_lite::{FastNoiseLite, NoiseType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use thiserror::Error;

use crate::level::GridLevel;

#[derive(Debug, Error)]
pub enum WorldGenError {
    #[error("failed to read terrain parameters: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid terrain parameters: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TerrainMode {
    Normal,
    Flat,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TerrainParams {
    #[serde(default = "default_mode")]
    pub mode: TerrainMode,
    // Surface height as a fraction of level height
    #[serde(default = "default_surface_ratio")]
    pub surface_ratio: f32,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    #[serde(default = "default_dirt_depth")]
    pub dirt_depth: i32,
    // Chance a grass column grows a bush
    #[serde(default = "default_bush_chance")]
    pub bush_chance: f64,
}

fn default_mode() -> TerrainMode {
    TerrainMode::Normal
}
fn default_surface_ratio() -> f32 {
    2.0 / 3.0
}
fn default_amplitude() -> f32 {
    6.0
}
fn default_frequency() -> f32 {
    0.02
}
fn default_dirt_depth() -> i32 {
    3
}
fn default_bush_chance() -> f64 {
    0.02
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            surface_ratio: default_surface_ratio(),
            amplitude: default_amplitude(),
            frequency: default_frequency(),
            dirt_depth: default_dirt_depth(),
            bush_chance: default_bush_chance(),
        }
    }
}

impl TerrainParams {
    pub fn from_toml_str(s: &str) -> Result<Self, WorldGenError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, WorldGenError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

/// Tiles the generator places, looked up by name with the built-in ids as fallback.
#[derive(Clone, Copy, Debug)]
struct Palette {
    rock: TileId,
    dirt: TileId,
    grass: TileId,
    bush: TileId,
}

impl Palette {
    fn from_registry(reg: &TileRegistry) -> Self {
        let pick = |name: &str, fallback: TileId| reg.id_by_name(name).unwrap_or(fallback);
        Self {
            rock: pick("rock", ROCK),
            dirt: pick("dirt", DIRT),
            grass: pick("grass", GRASS),
            bush: pick("bush", BUSH),
        }
    }
}

/// Overwrites every cell of `level` with generated terrain and recomputes light.
pub fn generate(level: &mut GridLevel, params: &TerrainParams, seed: i32) {
    let palette = Palette::from_registry(level.registry());
    let (w, h, d) = (level.width(), level.height(), level.depth());
    let base = (h as f32 * params.surface_ratio).round() as i32;

    let mut noise = FastNoiseLite::with_seed(seed);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(params.frequency));
    let mut rng = StdRng::seed_from_u64(seed as u64);

    let mut bushes = 0usize;
    for z in 0..d {
        for x in 0..w {
            let surface = match params.mode {
                TerrainMode::Flat => base,
                TerrainMode::Normal => {
                    let n = noise.get_noise_2d(x as f32, z as f32);
                    base + (n * params.amplitude).round() as i32
                }
            }
            .clamp(1, (h - 1).max(1));
            for y in 0..h {
                let id = if y >= surface {
                    TileId::AIR
                } else if y == surface - 1 {
                    palette.grass
                } else if y >= surface - 1 - params.dirt_depth {
                    palette.dirt
                } else {
                    palette.rock
                };
                level.put_raw(BlockPos::new(x, y, z), id);
            }
            if surface < h && rng.gen_bool(params.bush_chance.clamp(0.0, 1.0)) {
                level.put_raw(BlockPos::new(x, surface, z), palette.bush);
                bushes += 1;
            }
        }
    }
    level.recalc_light();
    log::debug!(
        "generated {}x{}x{} terrain ({:?}, seed {}), {} bushes",
        w,
        h,
        d,
        params.mode,
        seed,
        bushes
    );
}
