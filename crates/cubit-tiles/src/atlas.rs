//! Texture-slot to atlas UV mapping.
//!
//! The atlas is a 256x256 texel image split into a 16x16 grid of 16-texel
//! cells. Slot `n` lives in column `n % 16`, row `n / 16`.

use crate::types::TextureSlot;

pub const ATLAS_CELLS_PER_ROW: u8 = 16;
pub const ATLAS_SIZE_TEXELS: f32 = 256.0;
pub const CELL_SIZE_TEXELS: f32 = 16.0;
/// Width and height of one cell in UV space.
pub const CELL_UV: f32 = CELL_SIZE_TEXELS / ATLAS_SIZE_TEXELS;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UvRect {
    pub min_u: f32,
    pub max_u: f32,
    pub min_v: f32,
    pub max_v: f32,
}

impl UvRect {
    #[inline]
    pub fn for_slot(slot: TextureSlot) -> Self {
        let min_u = slot.column() as f32 / ATLAS_CELLS_PER_ROW as f32;
        let min_v = slot.row() as f32 / ATLAS_CELLS_PER_ROW as f32;
        UvRect {
            min_u,
            max_u: min_u + CELL_UV,
            min_v,
            max_v: min_v + CELL_UV,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max_u - self.min_u
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max_v - self.min_v
    }
}

impl From<TextureSlot> for UvRect {
    fn from(slot: TextureSlot) -> Self {
        UvRect::for_slot(slot)
    }
}
