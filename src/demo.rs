use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use cubit_geom::BlockPos;
use cubit_mesh::{RegionMesh, RenderLayer};
use cubit_tiles::{Debris, LevelView, TileRegistry};
use cubit_world::{GridLevel, TerrainParams, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub struct DemoOptions {
    pub tiles: Option<PathBuf>,
    pub terrain: Option<PathBuf>,
    pub size: (i32, i32, i32),
    pub seed: i32,
    pub ticks: usize,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub lit_quads: usize,
    pub shadow_quads: usize,
    pub tick_changes: usize,
    pub debris: usize,
}

pub fn run(opts: &DemoOptions) -> Result<Summary, Box<dyn Error>> {
    let registry = match &opts.tiles {
        Some(path) => {
            log::info!("loading tiles from {}", path.display());
            TileRegistry::load_from_path(path)?
        }
        None => TileRegistry::with_default_tiles(),
    };
    let registry = Arc::new(registry);
    log::info!("{} tile kinds registered", registry.len());

    let params = match &opts.terrain {
        Some(path) => TerrainParams::load_from_path(path)?,
        None => TerrainParams::default(),
    };
    let (w, h, d) = opts.size;
    if GridLevel::cell_count(w, h, d).is_none() {
        return Err(format!("level size {w}x{h}x{d} is empty or too large").into());
    }
    let mut level = GridLevel::new(w, h, d, Arc::clone(&registry));
    generate(&mut level, &params, opts.seed);

    let mut region = RegionMesh::new(BlockPos::new(0, 0, 0), level.max_corner());
    region.rebuild(&level, &registry);
    log::info!(
        "initial mesh: {} lit, {} shadow quads",
        region.layer(RenderLayer::Lit).quad_count(),
        region.layer(RenderLayer::Shadow).quad_count()
    );

    let before = level.clone();
    let mut rng = StdRng::seed_from_u64(opts.seed as u64);
    for _ in 0..opts.ticks {
        level.random_tick(&mut rng);
    }
    let tick_changes = count_changes(&before, &level);

    let mut debris: Vec<Debris> = Vec::new();
    if let Some(target) = surface_at(&level, w / 2, d / 2) {
        let id = level.tile_at(target);
        if level.destroy(target, &mut debris) {
            log::info!("destroyed {} `{}` at {:?}", id, registry[id].name, target);
        }
    }

    region.rebuild(&level, &registry);
    Ok(Summary {
        lit_quads: region.layer(RenderLayer::Lit).quad_count(),
        shadow_quads: region.layer(RenderLayer::Shadow).quad_count(),
        tick_changes,
        debris: debris.len(),
    })
}

/// Highest non-air cell of a column.
fn surface_at(level: &GridLevel, x: i32, z: i32) -> Option<BlockPos> {
    (0..level.height())
        .rev()
        .map(|y| BlockPos::new(x, y, z))
        .find(|p| !level.tile_at(*p).is_air())
}

fn count_changes(a: &GridLevel, b: &GridLevel) -> usize {
    let mut n = 0;
    for y in 0..a.height() {
        for z in 0..a.depth() {
            for x in 0..a.width() {
                let p = BlockPos::new(x, y, z);
                if a.tile_at(p) != b.tile_at(p) {
                    n += 1;
                }
            }
        }
    }
    n
}
