use std::collections::HashMap;

use cubit_geom::{Aabb, BlockPos, Vec3};
use cubit_tiles::atlas::{CELL_UV, UvRect};
use cubit_tiles::debris::DEBRIS_PER_BLOCK;
use cubit_tiles::defaults::{BUSH, DIRT, GRASS, ROCK};
use cubit_tiles::{Debris, Face, LevelMut, LevelView, TextureSlot, TileId, TileRegistry};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Sparse level: unset cells are air; lighting is a fixed set of dark cells.
struct SparseLevel {
    reg: TileRegistry,
    tiles: HashMap<BlockPos, TileId>,
    dark: Vec<BlockPos>,
}

impl SparseLevel {
    fn new() -> Self {
        Self {
            reg: TileRegistry::with_default_tiles(),
            tiles: HashMap::new(),
            dark: Vec::new(),
        }
    }
}

impl LevelView for SparseLevel {
    fn is_solid_tile(&self, pos: BlockPos) -> bool {
        self.reg.is_solid(self.tile_at(pos))
    }
    fn is_lit(&self, pos: BlockPos) -> bool {
        !self.dark.contains(&pos)
    }
    fn tile_at(&self, pos: BlockPos) -> TileId {
        self.tiles.get(&pos).copied().unwrap_or(TileId::AIR)
    }
}

impl LevelMut for SparseLevel {
    fn set_tile(&mut self, pos: BlockPos, id: TileId) -> bool {
        self.tiles.insert(pos, id) != Some(id)
    }
}

#[test]
fn grass_picks_texture_by_face() {
    let reg = TileRegistry::with_default_tiles();
    let grass = &reg[GRASS];
    assert_eq!(grass.texture_for_face(Face::Top), TextureSlot(0));
    assert_eq!(grass.texture_for_face(Face::Bottom), TextureSlot(2));
    for face in [Face::North, Face::South, Face::West, Face::East] {
        assert_eq!(grass.texture_for_face(face), TextureSlot(3));
    }
}

#[test]
fn plain_cube_is_uniform_solid_and_opaque() {
    let reg = TileRegistry::with_default_tiles();
    let rock = &reg[ROCK];
    for face in Face::ALL {
        assert_eq!(rock.texture_for_face(face), TextureSlot(1));
    }
    assert!(rock.is_solid());
    assert!(rock.blocks_light());
}

#[test]
fn bush_collision_box_is_inside_its_cell() {
    let reg = TileRegistry::with_default_tiles();
    let pos = BlockPos::new(4, 2, -9);
    let bush = &reg[BUSH];
    let cell = bush.aabb(pos);
    let shape = bush.tile_aabb(pos);
    assert_eq!(cell, Aabb::cube_at(pos));
    assert_ne!(shape, cell);
    assert!(cell.contains(shape));
}

#[test]
fn grass_in_darkness_turns_to_dirt() {
    let mut level = SparseLevel::new();
    let pos = BlockPos::new(0, 0, 0);
    level.tiles.insert(pos, GRASS);
    level.dark.push(pos);
    let grass = level.reg[GRASS].clone();
    grass.on_tick(&mut level, pos, &mut StdRng::seed_from_u64(7));
    assert_eq!(level.tile_at(pos), DIRT);
}

#[test]
fn lit_grass_spreads_onto_lit_dirt_only() {
    let mut level = SparseLevel::new();
    let pos = BlockPos::new(0, 0, 0);
    level.tiles.insert(pos, GRASS);
    for x in -1..=1 {
        for y in -3..=1 {
            for z in -1..=1 {
                if (x, y, z) != (0, 0, 0) {
                    level.tiles.insert(BlockPos::new(x, y, z), DIRT);
                }
            }
        }
    }
    let shaded = BlockPos::new(1, -1, 1);
    level.dark.push(shaded);
    let grass = level.reg[GRASS].clone();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        grass.on_tick(&mut level, pos, &mut rng);
    }
    assert_eq!(level.tile_at(shaded), DIRT);
    let spread = level.tiles.values().filter(|t| **t == GRASS).count();
    assert!(spread > 1);
    // Spread never leaves the 3x5x3 window below and around the source.
    assert!(level.tiles.iter().all(|(p, t)| *t != GRASS
        || ((-1..=1).contains(&p.x) && (-3..=1).contains(&p.y) && (-1..=1).contains(&p.z))));
}

#[test]
fn bush_survives_on_soil_and_dies_elsewhere() {
    let mut level = SparseLevel::new();
    let bush = level.reg[BUSH].clone();
    let mut rng = StdRng::seed_from_u64(1);

    let on_grass = BlockPos::new(0, 1, 0);
    level.tiles.insert(on_grass.offset(0, -1, 0), GRASS);
    level.tiles.insert(on_grass, BUSH);
    bush.on_tick(&mut level, on_grass, &mut rng);
    assert_eq!(level.tile_at(on_grass), BUSH);

    let on_rock = BlockPos::new(5, 1, 0);
    level.tiles.insert(on_rock.offset(0, -1, 0), ROCK);
    level.tiles.insert(on_rock, BUSH);
    bush.on_tick(&mut level, on_rock, &mut rng);
    assert_eq!(level.tile_at(on_rock), TileId::AIR);

    let shaded = BlockPos::new(9, 1, 0);
    level.tiles.insert(shaded.offset(0, -1, 0), DIRT);
    level.tiles.insert(shaded, BUSH);
    level.dark.push(shaded);
    bush.on_tick(&mut level, shaded, &mut rng);
    assert_eq!(level.tile_at(shaded), TileId::AIR);
}

#[test]
fn rock_tick_is_a_no_op() {
    let mut level = SparseLevel::new();
    let pos = BlockPos::new(0, 0, 0);
    level.tiles.insert(pos, ROCK);
    let rock = level.reg[ROCK].clone();
    rock.on_tick(&mut level, pos, &mut StdRng::seed_from_u64(3));
    assert_eq!(level.tiles.len(), 1);
    assert_eq!(level.tile_at(pos), ROCK);
}

#[test]
fn grass_debris_uses_default_texture() {
    let reg = TileRegistry::with_default_tiles();
    let mut out: Vec<Debris> = Vec::new();
    reg[GRASS].on_destroy(BlockPos::new(1, 1, 1), &mut out);
    assert_eq!(out.len(), DEBRIS_PER_BLOCK);
    assert!(out.iter().all(|d| d.texture == TextureSlot(3)));
}

proptest! {
    // The cell box is the same for every kind; only foliage narrows the fine box.
    #[test]
    fn cell_box_is_unit_cube_for_every_kind(x in -4096i32..4096, y in -256i32..256, z in -4096i32..4096) {
        let reg = TileRegistry::with_default_tiles();
        let pos = BlockPos::new(x, y, z);
        let cube = Aabb::cube_at(pos);
        for id in [ROCK, GRASS, DIRT, BUSH] {
            prop_assert_eq!(reg[id].aabb(pos), cube);
        }
        for id in [ROCK, GRASS, DIRT] {
            prop_assert_eq!(reg[id].tile_aabb(pos), reg[id].aabb(pos));
        }
        prop_assert!(cube.contains(reg[BUSH].tile_aabb(pos)));
    }

    #[test]
    fn atlas_cells_are_uniform(slot in 0u8..=255) {
        let r = UvRect::for_slot(TextureSlot(slot));
        prop_assert_eq!(r.width(), CELL_UV);
        prop_assert_eq!(r.height(), CELL_UV);
        prop_assert_eq!(r.min_u * 16.0, (slot % 16) as f32);
        prop_assert_eq!(r.min_v * 16.0, (slot / 16) as f32);
    }

    #[test]
    fn debris_tiles_the_cell(x in -1000i32..1000, y in -64i32..256, z in -1000i32..1000, tex in 0u8..=255) {
        let pos = BlockPos::new(x, y, z);
        let mut out: Vec<Debris> = Vec::new();
        cubit_tiles::debris::spawn_debris(pos, TextureSlot(tex), &mut out);
        prop_assert_eq!(out.len(), 64);

        let origin = pos.min_corner();
        let mut cells: Vec<(u32, u32, u32)> = out
            .iter()
            .map(|d| {
                let local = (d.pos - origin) * 4.0 - Vec3::HALF;
                (local.x as u32, local.y as u32, local.z as u32)
            })
            .collect();
        cells.sort();
        cells.dedup();
        prop_assert_eq!(cells.len(), 64);
        prop_assert!(cells.iter().all(|&(i, j, k)| i < 4 && j < 4 && k < 4));

        for d in &out {
            prop_assert_eq!(d.velocity, d.pos - pos.center());
            prop_assert_eq!(d.texture, TextureSlot(tex));
            let local = d.pos - origin;
            for c in [local.x, local.y, local.z] {
                prop_assert!([0.125f32, 0.375, 0.625, 0.875].contains(&c));
            }
        }
    }
}
