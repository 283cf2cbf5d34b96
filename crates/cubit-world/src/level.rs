use std::sync::Arc;

use cubit_geom::BlockPos;
use cubit_tiles::{LevelMut, LevelView, ParticleSink, TileId, TileRegistry};
use rand::Rng;

use crate::lighting::{column_light_depth, recalc_all};

/// Bounded tile grid. Cells outside the bounds read as air (not solid) and lit.
#[derive(Clone)]
pub struct GridLevel {
    width: i32,
    height: i32,
    depth: i32,
    tiles: Vec<TileId>,
    light_depths: Vec<i32>,
    registry: Arc<TileRegistry>,
}

impl GridLevel {
    /// Number of cells in a `width x height x depth` level, or `None` when a
    /// dimension is not positive or the cells cannot all be indexed by `i32`.
    pub fn cell_count(width: i32, height: i32, depth: i32) -> Option<usize> {
        if width <= 0 || height <= 0 || depth <= 0 {
            return None;
        }
        let cells = i64::from(width)
            .checked_mul(i64::from(height))?
            .checked_mul(i64::from(depth))?;
        if cells > i64::from(i32::MAX) {
            return None;
        }
        usize::try_from(cells).ok()
    }

    /// An all-air level of `width x height x depth` cells.
    ///
    /// Panics when `cell_count` rejects the dimensions.
    pub fn new(width: i32, height: i32, depth: i32, registry: Arc<TileRegistry>) -> Self {
        let Some(cells) = Self::cell_count(width, height, depth) else {
            panic!("invalid level dimensions {width}x{height}x{depth}");
        };
        Self {
            width,
            height,
            depth,
            tiles: vec![TileId::AIR; cells],
            light_depths: vec![0; (width * depth) as usize],
            registry,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    #[inline]
    pub fn registry(&self) -> &Arc<TileRegistry> {
        &self.registry
    }

    /// Exclusive upper corner of the level.
    #[inline]
    pub fn max_corner(&self) -> BlockPos {
        BlockPos::new(self.width, self.height, self.depth)
    }

    #[inline]
    pub fn contains(&self, pos: BlockPos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.z >= 0
            && pos.x < self.width
            && pos.y < self.height
            && pos.z < self.depth
    }

    #[inline]
    fn idx(&self, pos: BlockPos) -> usize {
        ((pos.y * self.depth + pos.z) * self.width + pos.x) as usize
    }

    #[inline]
    fn column(&self, x: i32, z: i32) -> usize {
        (z * self.width + x) as usize
    }

    /// Writes a tile without touching lighting; call `recalc_light` afterwards.
    pub(crate) fn put_raw(&mut self, pos: BlockPos, id: TileId) {
        if self.contains(pos) {
            let i = self.idx(pos);
            self.tiles[i] = id;
        }
    }

    pub fn light_depth(&self, x: i32, z: i32) -> Option<i32> {
        if x < 0 || z < 0 || x >= self.width || z >= self.depth {
            return None;
        }
        Some(self.light_depths[self.column(x, z)])
    }

    fn recalc_column(&mut self, x: i32, z: i32) {
        let depth = column_light_depth(&self.registry, self.height, |y| {
            self.tiles[self.idx(BlockPos::new(x, y, z))]
        });
        let c = self.column(x, z);
        self.light_depths[c] = depth;
    }

    /// Recomputes sunlight for every column.
    pub fn recalc_light(&mut self) {
        recalc_all(
            &self.registry,
            &self.tiles,
            self.width,
            self.height,
            self.depth,
            &mut self.light_depths,
        );
    }

    /// Ticks the tile in one uniformly chosen cell. Returns the cell if it held
    /// a tile.
    pub fn random_tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<BlockPos> {
        let pos = BlockPos::new(
            rng.gen_range(0..self.width),
            rng.gen_range(0..self.height),
            rng.gen_range(0..self.depth),
        );
        let id = self.tile_at(pos);
        if id.is_air() {
            return None;
        }
        let registry = Arc::clone(&self.registry);
        registry[id].on_tick(self, pos, rng);
        Some(pos)
    }

    /// Removes the tile at `pos` and emits its debris. Returns false when the
    /// cell was already air or lies outside the level.
    pub fn destroy(&mut self, pos: BlockPos, sink: &mut impl ParticleSink) -> bool {
        let id = self.tile_at(pos);
        if id.is_air() || !self.set_tile(pos, TileId::AIR) {
            return false;
        }
        self.registry[id].on_destroy(pos, sink);
        true
    }
}

impl LevelView for GridLevel {
    #[inline]
    fn is_solid_tile(&self, pos: BlockPos) -> bool {
        self.registry.is_solid(self.tile_at(pos))
    }

    #[inline]
    fn is_lit(&self, pos: BlockPos) -> bool {
        if !self.contains(pos) {
            return true;
        }
        pos.y >= self.light_depths[self.column(pos.x, pos.z)]
    }

    #[inline]
    fn tile_at(&self, pos: BlockPos) -> TileId {
        if self.contains(pos) {
            self.tiles[self.idx(pos)]
        } else {
            TileId::AIR
        }
    }
}

impl LevelMut for GridLevel {
    fn set_tile(&mut self, pos: BlockPos, id: TileId) -> bool {
        if !self.contains(pos) {
            return false;
        }
        let i = self.idx(pos);
        if self.tiles[i] == id {
            return false;
        }
        self.tiles[i] = id;
        self.recalc_column(pos.x, pos.z);
        true
    }
}
