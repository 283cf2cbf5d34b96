//! Collaborator contract for the world store that owns placed blocks.
//!
//! Implementations must answer for any coordinate, loaded or not; the policy
//! for cells outside the loaded area belongs to the implementation.

use cubit_geom::BlockPos;

use crate::types::TileId;

/// Read access used while rendering. All six neighbour queries for one block
/// are expected to observe the same state.
pub trait LevelView {
    fn is_solid_tile(&self, pos: BlockPos) -> bool;
    fn is_lit(&self, pos: BlockPos) -> bool;
    fn tile_at(&self, pos: BlockPos) -> TileId;
}

/// Write access used by random ticks.
pub trait LevelMut: LevelView {
    /// Stores `id` at `pos`. Returns false when the cell already held `id`
    /// or lies outside the level.
    fn set_tile(&mut self, pos: BlockPos, id: TileId) -> bool;
}
