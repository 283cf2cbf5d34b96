//! Destruction debris: the initial state of the particles thrown off by a
//! removed block. Simulation belongs to whatever consumes the sink.

use cubit_geom::{BlockPos, Vec3};

use crate::types::TextureSlot;

/// Debris cells per axis; a destroyed block yields `DEBRIS_SPREAD^3` particles.
pub const DEBRIS_SPREAD: usize = 4;
pub const DEBRIS_PER_BLOCK: usize = DEBRIS_SPREAD * DEBRIS_SPREAD * DEBRIS_SPREAD;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Debris {
    pub pos: Vec3,
    pub velocity: Vec3,
    pub texture: TextureSlot,
}

pub trait ParticleSink {
    fn add(&mut self, particle: Debris);
}

impl ParticleSink for Vec<Debris> {
    #[inline]
    fn add(&mut self, particle: Debris) {
        self.push(particle);
    }
}

/// Fills the cell at `pos` with a 4x4x4 grid of debris, each moving away from
/// the cell centre.
pub fn spawn_debris(pos: BlockPos, texture: TextureSlot, sink: &mut impl ParticleSink) {
    let origin = pos.min_corner();
    let center = pos.center();
    let step = DEBRIS_SPREAD as f32;
    for i in 0..DEBRIS_SPREAD {
        for j in 0..DEBRIS_SPREAD {
            for k in 0..DEBRIS_SPREAD {
                let offset = Vec3::new(i as f32 + 0.5, j as f32 + 0.5, k as f32 + 0.5) / step;
                let target = origin + offset;
                sink.add(Debris {
                    pos: target,
                    velocity: target - center,
                    texture,
                });
            }
        }
    }
}
