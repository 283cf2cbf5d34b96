//! Tile kinds and their behaviour: texture selection, solidity, bounding
//! volumes, random ticks and destruction debris.

use cubit_geom::{Aabb, BlockPos, Vec3};
use rand::Rng;

use crate::debris::{ParticleSink, spawn_debris};
use crate::level::LevelMut;
use crate::types::{Face, FaceRole, TextureSlot, TileId};

/// Spread attempts a lit grass tile makes per random tick.
pub const GRASS_SPREAD_ATTEMPTS: usize = 4;

/// Collision box of foliage in cell-local coordinates, roughly the footprint
/// of its crossed quads.
pub const FOLIAGE_BOUNDS_MIN: Vec3 = Vec3::new(0.15, 0.0, 0.15);
pub const FOLIAGE_BOUNDS_MAX: Vec3 = Vec3::new(0.85, 0.8, 0.85);

/// Per-kind overrides of the base cube behaviour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileKind {
    /// Uniformly textured, solid, light-blocking cube.
    Cube,
    /// Cube with its own top and bottom textures; sides use the tile texture.
    Grass {
        top: TextureSlot,
        bottom: TextureSlot,
        decays_to: TileId,
    },
    /// Non-solid plant drawn as crossed quads.
    Bush { soil: Vec<TileId> },
}

/// Geometry the mesher emits for a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileShape {
    Cube,
    Cross,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub name: String,
    /// Default texture; also the texture of this tile's debris.
    pub texture: TextureSlot,
    pub kind: TileKind,
}

impl Tile {
    pub fn cube(id: TileId, name: impl Into<String>, texture: TextureSlot) -> Self {
        Tile {
            id,
            name: name.into(),
            texture,
            kind: TileKind::Cube,
        }
    }

    pub fn grass(
        id: TileId,
        name: impl Into<String>,
        side: TextureSlot,
        top: TextureSlot,
        bottom: TextureSlot,
        decays_to: TileId,
    ) -> Self {
        Tile {
            id,
            name: name.into(),
            texture: side,
            kind: TileKind::Grass {
                top,
                bottom,
                decays_to,
            },
        }
    }

    pub fn bush(
        id: TileId,
        name: impl Into<String>,
        texture: TextureSlot,
        soil: Vec<TileId>,
    ) -> Self {
        Tile {
            id,
            name: name.into(),
            texture,
            kind: TileKind::Bush { soil },
        }
    }

    pub fn texture_for_face(&self, face: Face) -> TextureSlot {
        match &self.kind {
            TileKind::Grass { top, bottom, .. } => match face.role() {
                FaceRole::Top => *top,
                FaceRole::Bottom => *bottom,
                FaceRole::Side => self.texture,
            },
            TileKind::Cube | TileKind::Bush { .. } => self.texture,
        }
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        !matches!(self.kind, TileKind::Bush { .. })
    }

    #[inline]
    pub fn blocks_light(&self) -> bool {
        !matches!(self.kind, TileKind::Bush { .. })
    }

    #[inline]
    pub fn shape(&self) -> TileShape {
        match self.kind {
            TileKind::Bush { .. } => TileShape::Cross,
            TileKind::Cube | TileKind::Grass { .. } => TileShape::Cube,
        }
    }

    /// Full cell box, identical for every kind.
    #[inline]
    pub fn aabb(&self, pos: BlockPos) -> Aabb {
        Aabb::cube_at(pos)
    }

    /// Box of the actual model, used for fine collision.
    pub fn tile_aabb(&self, pos: BlockPos) -> Aabb {
        match self.kind {
            TileKind::Bush { .. } => Aabb::local_at(pos, FOLIAGE_BOUNDS_MIN, FOLIAGE_BOUNDS_MAX),
            TileKind::Cube | TileKind::Grass { .. } => Aabb::cube_at(pos),
        }
    }

    /// Random tick for the tile at `pos`. Plain cubes do nothing.
    pub fn on_tick<L, R>(&self, level: &mut L, pos: BlockPos, rng: &mut R)
    where
        L: LevelMut + ?Sized,
        R: Rng + ?Sized,
    {
        match &self.kind {
            TileKind::Cube => {}
            TileKind::Grass { decays_to, .. } => {
                if !level.is_lit(pos) {
                    level.set_tile(pos, *decays_to);
                    return;
                }
                for _ in 0..GRASS_SPREAD_ATTEMPTS {
                    let target = pos.offset(
                        rng.gen_range(0..3) - 1,
                        rng.gen_range(0..5) - 3,
                        rng.gen_range(0..3) - 1,
                    );
                    if level.tile_at(target) == *decays_to && level.is_lit(target) {
                        level.set_tile(target, self.id);
                    }
                }
            }
            TileKind::Bush { soil } => {
                let below = level.tile_at(pos.offset(0, -1, 0));
                if !level.is_lit(pos) || !soil.contains(&below) {
                    level.set_tile(pos, TileId::AIR);
                }
            }
        }
    }

    /// Emits the debris burst for this tile being removed at `pos`.
    pub fn on_destroy(&self, pos: BlockPos, sink: &mut impl ParticleSink) {
        spawn_debris(pos, self.texture, sink);
    }
}
