//! Which faces each render pass draws.
//!
//! The world is drawn in two passes so each pass can use one uniform tint: the
//! lit pass takes faces whose neighbour cell is lit, the shadow pass the rest.
//! A face behind a solid neighbour is drawn in neither.

use cubit_geom::BlockPos;
use cubit_tiles::{Face, LevelView};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RenderLayer {
    Lit = 0,
    Shadow = 1,
}

impl RenderLayer {
    pub const BOTH: [RenderLayer; 2] = [RenderLayer::Lit, RenderLayer::Shadow];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The layer that draws geometry facing a cell with the given lighting.
    #[inline]
    pub fn for_light(lit: bool) -> RenderLayer {
        if lit { RenderLayer::Lit } else { RenderLayer::Shadow }
    }
}

#[inline]
pub fn should_render_face(neighbor_solid: bool, neighbor_lit: bool, layer: RenderLayer) -> bool {
    !neighbor_solid && (neighbor_lit ^ (layer == RenderLayer::Shadow))
}

/// Queries the neighbour behind `face` and applies `should_render_face`.
#[inline]
pub fn face_visible<L: LevelView + ?Sized>(
    level: &L,
    pos: BlockPos,
    face: Face,
    layer: RenderLayer,
) -> bool {
    let n = face.neighbor(pos);
    should_render_face(level.is_solid_tile(n), level.is_lit(n), layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_table() {
        use RenderLayer::{Lit, Shadow};
        assert!(should_render_face(false, true, Lit));
        assert!(!should_render_face(false, true, Shadow));
        assert!(!should_render_face(false, false, Lit));
        assert!(should_render_face(false, false, Shadow));
        for lit in [false, true] {
            assert!(!should_render_face(true, lit, Lit));
            assert!(!should_render_face(true, lit, Shadow));
        }
    }

    #[test]
    fn for_light_agrees_with_predicate() {
        for lit in [false, true] {
            assert!(should_render_face(false, lit, RenderLayer::for_light(lit)));
        }
    }
}
