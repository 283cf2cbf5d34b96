use cubit_geom::{Aabb, BlockPos};
use cubit_tiles::{LevelView, TileRegistry};

use crate::mesh_build::MeshBuild;
use crate::render::render_region;
use crate::visibility::RenderLayer;

/// Both render passes of one box-shaped region of the level.
pub struct RegionMesh {
    pub min: BlockPos,
    pub max: BlockPos,
    pub bbox: Aabb,
    pub layers: [MeshBuild; 2],
}

impl RegionMesh {
    pub fn new(min: BlockPos, max: BlockPos) -> Self {
        Self {
            min,
            max,
            bbox: Aabb::new(min.min_corner(), max.min_corner()),
            layers: [MeshBuild::new(), MeshBuild::new()],
        }
    }

    /// Re-tessellates the region from the current level state, reusing buffers.
    pub fn rebuild<L: LevelView + ?Sized>(&mut self, level: &L, registry: &TileRegistry) {
        for layer in RenderLayer::BOTH {
            let mb = &mut self.layers[layer.index()];
            mb.clear_keep_capacity();
            let quads = render_region(mb, level, registry, layer, self.min, self.max);
            log::trace!(
                "region {:?}..{:?} {:?}: {} quads",
                self.min,
                self.max,
                layer,
                quads
            );
        }
    }

    #[inline]
    pub fn layer(&self, layer: RenderLayer) -> &MeshBuild {
        &self.layers[layer.index()]
    }

    pub fn quad_count(&self) -> usize {
        self.layers.iter().map(MeshBuild::quad_count).sum()
    }
}
