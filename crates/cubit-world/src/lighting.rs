//! Sunlight as one depth per column: the y of the highest light-blocking tile
//! (0 when the column is open). A cell is lit when `y >= depth`, so the
//! blocker itself and everything above it is lit.

use cubit_tiles::{TileId, TileRegistry};
use rayon::prelude::*;

/// Scans one column top-down. `column` yields the tile at a given y.
#[inline]
pub fn column_light_depth(
    registry: &TileRegistry,
    height: i32,
    column: impl Fn(i32) -> TileId,
) -> i32 {
    let mut y = height - 1;
    while y > 0 && !registry.blocks_light(column(y)) {
        y -= 1;
    }
    y.max(0)
}

/// Recomputes every column of a `width * depth` grid in parallel. `tiles` is
/// indexed `(y * depth + z) * width + x`, `depths` is indexed `z * width + x`.
pub fn recalc_all(
    registry: &TileRegistry,
    tiles: &[TileId],
    width: i32,
    height: i32,
    depth: i32,
    depths: &mut [i32],
) {
    let (w, d) = (width as usize, depth as usize);
    depths.par_iter_mut().enumerate().for_each(|(col, out)| {
        let (x, z) = (col % w, col / w);
        *out = column_light_depth(registry, height, |y| tiles[(y as usize * d + z) * w + x]);
    });
}
