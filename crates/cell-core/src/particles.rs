use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Per-instance data for the particle shell, uploaded once.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub offset: f32,
}

/// Static point cloud on a spherical shell.
///
/// Angles follow a Fibonacci sphere so coverage is even for any count;
/// only the radius and the phase offset are random. Nothing here changes
/// after [`ParticleField::generate`]: per-frame size, alpha and colour are
/// derived in the shader from `time` and `morph`.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub offsets: Vec<f32>,
}

/// Polar and azimuthal angle of point `i` of `count` on a Fibonacci sphere.
#[inline]
pub fn fibonacci_angles(i: usize, count: usize) -> (f32, f32) {
    let n = count.max(1) as f32;
    let phi = (1.0 - 2.0 * (i as f32 + 0.5) / n).acos();
    let theta = PI * (1.0 + 5.0_f32.sqrt()) * i as f32;
    (phi, theta)
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        radius_min: f32,
        radius_max: f32,
        rng: &mut R,
    ) -> Self {
        let span = (radius_max - radius_min).max(0.0);
        let mut positions = Vec::with_capacity(count);
        let mut offsets = Vec::with_capacity(count);
        for i in 0..count {
            let (phi, theta) = fibonacci_angles(i, count);
            let r = radius_min + rng.gen::<f32>() * span;
            positions.push(Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            ));
            offsets.push(rng.gen::<f32>() * TAU);
        }
        Self { positions, offsets }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.positions
            .iter()
            .zip(&self.offsets)
            .map(|(p, &offset)| ParticleInstance {
                position: p.to_array(),
                offset,
            })
            .collect()
    }
}
