//! CPU tile mesher: face visibility, per-face quad emission and the two-pass
//! (lit/shadow) region rebuild.
#![forbid(unsafe_code)]

pub mod chunk;
pub mod constants;
pub mod emit;
pub mod face;
pub mod mesh_build;
pub mod render;
pub mod visibility;

pub use chunk::RegionMesh;
pub use emit::{MeshSink, emit_cross, emit_face, emit_face_untextured};
pub use mesh_build::MeshBuild;
pub use render::{render_region, render_tile};
pub use visibility::{RenderLayer, face_visible, should_render_face};
