//! Shared constants for cubit-mesh.

// Directional shade per face axis, a fixed stand-in for ambient occlusion
pub const SHADE_Y: f32 = 1.0;
pub const SHADE_Z: f32 = 0.8;
pub const SHADE_X: f32 = 0.6;

/// Shade of crossed foliage quads.
pub const SHADE_CROSS: f32 = 1.0;

/// Crossed quads per foliage tile (each emitted front and back).
pub const CROSS_PLANES: usize = 2;

pub(crate) const VERTS_PER_QUAD: usize = 4;
