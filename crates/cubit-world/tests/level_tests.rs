use std::sync::Arc;

use cubit_geom::BlockPos;
use cubit_tiles::defaults::{BUSH, DIRT, GRASS, ROCK, STONE_BRICK};
use cubit_tiles::{Debris, LevelMut, LevelView, TileId, TileRegistry};
use cubit_world::{GridLevel, TerrainMode, TerrainParams, generate};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn registry() -> Arc<TileRegistry> {
    Arc::new(TileRegistry::with_default_tiles())
}

fn flat_level(w: i32, h: i32, d: i32) -> GridLevel {
    let mut level = GridLevel::new(w, h, d, registry());
    let params = TerrainParams {
        mode: TerrainMode::Flat,
        surface_ratio: 0.5,
        bush_chance: 0.0,
        ..TerrainParams::default()
    };
    generate(&mut level, &params, 1);
    level
}

#[test]
fn cell_count_rejects_empty_and_overflowing_sizes() {
    assert_eq!(GridLevel::cell_count(4, 8, 4), Some(128));
    assert_eq!(GridLevel::cell_count(0, 8, 4), None);
    assert_eq!(GridLevel::cell_count(4, -1, 4), None);
    assert_eq!(GridLevel::cell_count(65536, 65536, 1), None);
    assert_eq!(GridLevel::cell_count(i32::MAX, i32::MAX, i32::MAX), None);
    assert_eq!(GridLevel::cell_count(i32::MAX, 1, 1), Some(i32::MAX as usize));
}

#[test]
#[should_panic(expected = "invalid level dimensions")]
fn oversized_level_panics_with_message() {
    GridLevel::new(65536, 65536, 1, registry());
}

#[test]
fn outside_cells_are_open_air() {
    let level = flat_level(4, 8, 4);
    for pos in [
        BlockPos::new(-1, 2, 0),
        BlockPos::new(0, -1, 0),
        BlockPos::new(4, 2, 0),
        BlockPos::new(0, 8, 0),
        BlockPos::new(0, 2, 4),
    ] {
        assert_eq!(level.tile_at(pos), TileId::AIR);
        assert!(!level.is_solid_tile(pos));
        assert!(level.is_lit(pos));
    }
}

#[test]
fn flat_terrain_layers() {
    let level = flat_level(3, 10, 3);
    // surface = 5: grass at 4, dirt 1..=3, rock at 0
    assert_eq!(level.tile_at(BlockPos::new(1, 4, 1)), GRASS);
    assert_eq!(level.tile_at(BlockPos::new(1, 3, 1)), DIRT);
    assert_eq!(level.tile_at(BlockPos::new(1, 1, 1)), DIRT);
    assert_eq!(level.tile_at(BlockPos::new(1, 0, 1)), ROCK);
    assert_eq!(level.tile_at(BlockPos::new(1, 5, 1)), TileId::AIR);
    assert_eq!(level.light_depth(1, 1), Some(4));
    assert!(level.is_lit(BlockPos::new(1, 5, 1)));
    assert!(level.is_lit(BlockPos::new(1, 4, 1)));
    assert!(!level.is_lit(BlockPos::new(1, 3, 1)));
}

#[test]
fn placing_a_roof_shades_the_column() {
    let mut level = flat_level(3, 10, 3);
    let roof = BlockPos::new(1, 8, 1);
    assert!(level.set_tile(roof, STONE_BRICK));
    assert!(!level.set_tile(roof, STONE_BRICK));
    assert_eq!(level.light_depth(1, 1), Some(8));
    assert!(!level.is_lit(BlockPos::new(1, 5, 1)));
    // Neighbouring columns are untouched.
    assert!(level.is_lit(BlockPos::new(0, 5, 1)));
    assert!(level.set_tile(roof, TileId::AIR));
    assert_eq!(level.light_depth(1, 1), Some(4));
}

#[test]
fn bushes_do_not_block_light() {
    let mut level = flat_level(3, 10, 3);
    level.set_tile(BlockPos::new(1, 5, 1), BUSH);
    assert_eq!(level.light_depth(1, 1), Some(4));
    assert!(!level.is_solid_tile(BlockPos::new(1, 5, 1)));
}

#[test]
fn destroy_emits_debris_and_clears_cell() {
    let mut level = flat_level(3, 10, 3);
    let pos = BlockPos::new(1, 4, 1);
    let mut debris: Vec<Debris> = Vec::new();
    assert!(level.destroy(pos, &mut debris));
    assert_eq!(debris.len(), 64);
    assert_eq!(level.tile_at(pos), TileId::AIR);
    assert_eq!(level.light_depth(1, 1), Some(3));

    debris.clear();
    assert!(!level.destroy(pos, &mut debris));
    assert!(!level.destroy(BlockPos::new(-5, 0, 0), &mut debris));
    assert!(debris.is_empty());
}

#[test]
fn covered_grass_decays_under_random_ticks() {
    let mut level = GridLevel::new(1, 4, 1, registry());
    level.set_tile(BlockPos::new(0, 0, 0), GRASS);
    level.set_tile(BlockPos::new(0, 3, 0), ROCK);
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..256 {
        level.random_tick(&mut rng);
    }
    assert_eq!(level.tile_at(BlockPos::new(0, 0, 0)), DIRT);
    assert_eq!(level.tile_at(BlockPos::new(0, 3, 0)), ROCK);
}

#[test]
fn normal_terrain_is_deterministic_per_seed() {
    let params = TerrainParams::default();
    let mut a = GridLevel::new(16, 32, 16, registry());
    let mut b = GridLevel::new(16, 32, 16, registry());
    generate(&mut a, &params, 77);
    generate(&mut b, &params, 77);
    for z in 0..16 {
        for x in 0..16 {
            assert_eq!(a.light_depth(x, z), b.light_depth(x, z));
            for y in 0..32 {
                let p = BlockPos::new(x, y, z);
                assert_eq!(a.tile_at(p), b.tile_at(p));
            }
        }
    }
}

#[test]
fn terrain_params_parse_with_defaults() {
    let p = TerrainParams::from_toml_str("mode = \"flat\"\nbush_chance = 0.5").unwrap();
    assert_eq!(p.mode, TerrainMode::Flat);
    assert_eq!(p.bush_chance, 0.5);
    assert_eq!(p.dirt_depth, 3);
    assert!(TerrainParams::from_toml_str("mode = \"wavy\"").is_err());
}

proptest! {
    // Writes inside the grid are read back; light depth never exceeds the topmost blocker.
    #[test]
    fn set_then_read(x in 0i32..6, y in 0i32..12, z in 0i32..6, solid in any::<bool>()) {
        let mut level = GridLevel::new(6, 12, 6, registry());
        let id = if solid { ROCK } else { BUSH };
        prop_assert!(level.set_tile(BlockPos::new(x, y, z), id));
        prop_assert_eq!(level.tile_at(BlockPos::new(x, y, z)), id);
        let expected = if solid { y } else { 0 };
        prop_assert_eq!(level.light_depth(x, z), Some(expected));
    }
}
