use cubit_geom::Vec3;

use crate::constants::VERTS_PER_QUAD;
use crate::emit::MeshSink;

/// Growable vertex buffer implementing `MeshSink`. Every completed quad is
/// indexed as two triangles `(0,1,2)` and `(0,2,3)`.
#[derive(Clone, Debug)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub uv: Vec<f32>,
    pub col: Vec<f32>,
    pub idx: Vec<u32>,
    color: [f32; 3],
}

impl Default for MeshBuild {
    fn default() -> Self {
        Self {
            pos: Vec::new(),
            uv: Vec::new(),
            col: Vec::new(),
            idx: Vec::new(),
            color: [1.0; 3],
        }
    }
}

impl MeshBuild {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all arrays but retains capacity for reuse across rebuilds.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.uv.clear();
        self.col.clear();
        self.idx.clear();
        self.color = [1.0; 3];
    }

    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        let n_verts = n_quads * VERTS_PER_QUAD;
        self.pos.reserve(n_verts * 3);
        self.uv.reserve(n_verts * 2);
        self.col.reserve(n_verts * 3);
        self.idx.reserve(n_quads * 6);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.vertex_count() / VERTS_PER_QUAD
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    pub fn vertex_at(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos[i * 3], self.pos[i * 3 + 1], self.pos[i * 3 + 2])
    }

    pub fn uv_at(&self, i: usize) -> (f32, f32) {
        (self.uv[i * 2], self.uv[i * 2 + 1])
    }

    pub fn color_at(&self, i: usize) -> [f32; 3] {
        [self.col[i * 3], self.col[i * 3 + 1], self.col[i * 3 + 2]]
    }

    /// The four corners of quad `q` in emission order.
    pub fn quad(&self, q: usize) -> [Vec3; 4] {
        let b = q * VERTS_PER_QUAD;
        [
            self.vertex_at(b),
            self.vertex_at(b + 1),
            self.vertex_at(b + 2),
            self.vertex_at(b + 3),
        ]
    }

    fn push(&mut self, x: f32, y: f32, z: f32, u: f32, v: f32) {
        self.pos.extend_from_slice(&[x, y, z]);
        self.uv.extend_from_slice(&[u, v]);
        self.col.extend_from_slice(&self.color);
        let n = self.vertex_count();
        if n % VERTS_PER_QUAD == 0 {
            let base = (n - VERTS_PER_QUAD) as u32;
            self.idx
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }
}

impl MeshSink for MeshBuild {
    #[inline]
    fn color(&mut self, r: f32, g: f32, b: f32) {
        self.color = [r, g, b];
    }

    // Untextured vertices carry zero UVs so the arrays stay parallel
    #[inline]
    fn vertex(&mut self, x: f32, y: f32, z: f32) {
        self.push(x, y, z, 0.0, 0.0);
    }

    #[inline]
    fn vertex_uv(&mut self, x: f32, y: f32, z: f32, u: f32, v: f32) {
        self.push(x, y, z, u, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_completed_quads() {
        let mut mb = MeshBuild::new();
        for i in 0..7 {
            mb.vertex(i as f32, 0.0, 0.0);
        }
        assert_eq!(mb.quad_count(), 1);
        assert_eq!(mb.idx, vec![0, 1, 2, 0, 2, 3]);
        mb.vertex(7.0, 0.0, 0.0);
        assert_eq!(mb.idx[6..], [4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn color_is_sticky_state() {
        let mut mb = MeshBuild::new();
        mb.vertex(0.0, 0.0, 0.0);
        mb.color(0.6, 0.6, 0.6);
        mb.vertex_uv(1.0, 0.0, 0.0, 0.5, 0.5);
        mb.vertex(2.0, 0.0, 0.0);
        assert_eq!(mb.color_at(0), [1.0; 3]);
        assert_eq!(mb.color_at(1), [0.6; 3]);
        assert_eq!(mb.color_at(2), [0.6; 3]);
        assert_eq!(mb.uv_at(1), (0.5, 0.5));
        mb.clear_keep_capacity();
        assert!(mb.is_empty());
        assert!(mb.pos.capacity() >= 9);
    }
}
