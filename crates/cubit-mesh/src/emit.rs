use std::f32::consts::{FRAC_PI_4, PI};

use cubit_geom::{BlockPos, Vec3};
use cubit_tiles::{Face, UvRect};

use crate::constants::CROSS_PLANES;
use crate::face::{CornerSel, FACE_CORNERS, FACE_UVS, UvSel};

/// Receiver of tessellated geometry. Colour is state applied to the vertices
/// that follow; every four consecutive vertices form one quad.
pub trait MeshSink {
    fn color(&mut self, r: f32, g: f32, b: f32);
    fn vertex(&mut self, x: f32, y: f32, z: f32);
    fn vertex_uv(&mut self, x: f32, y: f32, z: f32, u: f32, v: f32);
}

#[inline]
fn corner(min: Vec3, max: Vec3, sel: CornerSel) -> Vec3 {
    Vec3::new(
        if sel[0] { max.x } else { min.x },
        if sel[1] { max.y } else { min.y },
        if sel[2] { max.z } else { min.z },
    )
}

#[inline]
fn uv_corner(uv: &UvRect, sel: UvSel) -> (f32, f32) {
    (
        if sel.0 { uv.max_u } else { uv.min_u },
        if sel.1 { uv.max_v } else { uv.min_v },
    )
}

/// Emits one textured face of the unit cube at `pos`.
pub fn emit_face<S: MeshSink + ?Sized>(sink: &mut S, pos: BlockPos, face: Face, uv: UvRect) {
    let min = pos.min_corner();
    let max = min + Vec3::ONE;
    let i = face.index();
    for (sel, uv_sel) in FACE_CORNERS[i].iter().zip(FACE_UVS[i].iter()) {
        let p = corner(min, max, *sel);
        let (u, v) = uv_corner(&uv, *uv_sel);
        sink.vertex_uv(p.x, p.y, p.z, u, v);
    }
}

/// Same corners as `emit_face`, without texture coordinates (outlines and
/// untextured passes).
pub fn emit_face_untextured<S: MeshSink + ?Sized>(sink: &mut S, pos: BlockPos, face: Face) {
    let min = pos.min_corner();
    let max = min + Vec3::ONE;
    for sel in &FACE_CORNERS[face.index()] {
        let p = corner(min, max, *sel);
        sink.vertex(p.x, p.y, p.z);
    }
}

/// Emits two vertical quads crossing diagonally through the cell centre, each
/// in both windings so they are visible from either side.
pub fn emit_cross<S: MeshSink + ?Sized>(sink: &mut S, pos: BlockPos, uv: UvRect) {
    let c = pos.center();
    let y0 = pos.y as f32;
    let y1 = y0 + 1.0;
    let (u0, u1, v0, v1) = (uv.min_u, uv.max_u, uv.min_v, uv.max_v);
    for r in 0..CROSS_PLANES {
        let angle = r as f32 * PI / CROSS_PLANES as f32 + FRAC_PI_4;
        let xa = angle.sin() * 0.5;
        let za = angle.cos() * 0.5;
        let (x0, x1) = (c.x - xa, c.x + xa);
        let (z0, z1) = (c.z - za, c.z + za);

        sink.vertex_uv(x0, y1, z0, u1, v0);
        sink.vertex_uv(x1, y1, z1, u0, v0);
        sink.vertex_uv(x1, y0, z1, u0, v1);
        sink.vertex_uv(x0, y0, z0, u1, v1);

        sink.vertex_uv(x1, y1, z1, u0, v0);
        sink.vertex_uv(x0, y1, z0, u1, v0);
        sink.vertex_uv(x0, y0, z0, u1, v1);
        sink.vertex_uv(x1, y0, z1, u0, v1);
    }
}
