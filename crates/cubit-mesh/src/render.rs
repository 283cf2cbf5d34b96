use cubit_geom::BlockPos;
use cubit_tiles::{Face, LevelView, Tile, TileRegistry, TileShape, UvRect};

use crate::constants::{CROSS_PLANES, SHADE_CROSS};
use crate::emit::{MeshSink, emit_cross, emit_face};
use crate::face::face_shade;
use crate::visibility::{RenderLayer, face_visible};

/// Emits the geometry `tile` at `pos` contributes to `layer`. Returns the
/// number of quads written.
pub fn render_tile<S, L>(
    sink: &mut S,
    level: &L,
    tile: &Tile,
    layer: RenderLayer,
    pos: BlockPos,
) -> usize
where
    S: MeshSink + ?Sized,
    L: LevelView + ?Sized,
{
    match tile.shape() {
        TileShape::Cube => {
            let mut quads = 0;
            for face in Face::ALL {
                if !face_visible(level, pos, face, layer) {
                    continue;
                }
                let shade = face_shade(face);
                sink.color(shade, shade, shade);
                emit_face(sink, pos, face, UvRect::for_slot(tile.texture_for_face(face)));
                quads += 1;
            }
            quads
        }
        // Foliage belongs to the pass matching its own cell and is never occluded.
        TileShape::Cross => {
            if RenderLayer::for_light(level.is_lit(pos)) != layer {
                return 0;
            }
            sink.color(SHADE_CROSS, SHADE_CROSS, SHADE_CROSS);
            emit_cross(sink, pos, UvRect::for_slot(tile.texture));
            CROSS_PLANES * 2
        }
    }
}

/// Renders every non-air cell in the half-open box `[min, max)` for one layer.
/// Returns the number of quads written.
///
/// Panics if a cell holds an id with no registered tile.
pub fn render_region<S, L>(
    sink: &mut S,
    level: &L,
    registry: &TileRegistry,
    layer: RenderLayer,
    min: BlockPos,
    max: BlockPos,
) -> usize
where
    S: MeshSink + ?Sized,
    L: LevelView + ?Sized,
{
    let mut quads = 0;
    for y in min.y..max.y {
        for z in min.z..max.z {
            for x in min.x..max.x {
                let pos = BlockPos::new(x, y, z);
                let id = level.tile_at(pos);
                if id.is_air() {
                    continue;
                }
                quads += render_tile(sink, level, &registry[id], layer, pos);
            }
        }
    }
    quads
}
