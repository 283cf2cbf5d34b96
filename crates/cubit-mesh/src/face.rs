use cubit_tiles::Face;

use crate::constants::{SHADE_X, SHADE_Y, SHADE_Z};

/// Corner selector: `false` picks the cell minimum on that axis, `true` the maximum.
pub type CornerSel = [bool; 3];
/// UV selector: `(u, v)`, `false` is the rectangle minimum, `true` its maximum.
pub type UvSel = (bool, bool);

const L: bool = false;
const H: bool = true;

/// Emission order of each face's corners, indexed by `Face::index()`. Seen from
/// outside the cell every face runs counter-clockwise.
pub const FACE_CORNERS: [[CornerSel; 4]; 6] = [
    // bottom
    [[L, L, H], [L, L, L], [H, L, L], [H, L, H]],
    // top
    [[H, H, H], [H, H, L], [L, H, L], [L, H, H]],
    // north (-z)
    [[L, H, L], [H, H, L], [H, L, L], [L, L, L]],
    // south (+z)
    [[L, H, H], [L, L, H], [H, L, H], [H, H, H]],
    // west (-x)
    [[L, H, H], [L, H, L], [L, L, L], [L, L, H]],
    // east (+x)
    [[H, L, H], [H, L, L], [H, H, L], [H, H, H]],
];

/// Atlas corner paired with each entry of `FACE_CORNERS`, position for position.
pub const FACE_UVS: [[UvSel; 4]; 6] = [
    [(L, H), (L, L), (H, L), (H, H)],
    [(H, H), (H, L), (L, L), (L, H)],
    [(H, L), (L, L), (L, H), (H, H)],
    [(L, L), (L, H), (H, H), (H, L)],
    [(H, L), (L, L), (L, H), (H, H)],
    [(L, H), (H, H), (H, L), (L, L)],
];

/// Tint applied to a face regardless of the layer that emits it.
#[inline]
pub fn face_shade(face: Face) -> f32 {
    match face {
        Face::Bottom | Face::Top => SHADE_Y,
        Face::North | Face::South => SHADE_Z,
        Face::West | Face::East => SHADE_X,
    }
}
