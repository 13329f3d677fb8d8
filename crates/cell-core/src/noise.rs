//! CPU reference of the gradient noise used by the mesh shaders.
//!
//! Mirrors `shaders/noise.wgsl` operation for operation so displacement can
//! be reasoned about (and tested) off the GPU. All math is `f32` to match
//! shader precision.

use crate::constants::{FBM_GAIN, FBM_LACUNARITY};
use glam::Vec3;

#[inline]
fn fract(v: Vec3) -> Vec3 {
    v - v.floor()
}

/// Pseudo-random gradient in [-1, 1]^3 for a lattice point.
#[inline]
pub fn hash3(p: Vec3) -> Vec3 {
    let q = Vec3::new(
        p.dot(Vec3::new(127.1, 311.7, 74.7)),
        p.dot(Vec3::new(269.5, 183.3, 246.1)),
        p.dot(Vec3::new(113.5, 271.9, 124.6)),
    );
    let s = Vec3::new(q.x.sin(), q.y.sin(), q.z.sin()) * 43758.547;
    Vec3::splat(-1.0) + 2.0 * fract(s)
}

/// Single-octave gradient noise, roughly in [-1, 1].
pub fn vnoise(p: Vec3) -> f32 {
    let i = p.floor();
    let f = fract(p);
    let u = f * f * (Vec3::splat(3.0) - 2.0 * f);

    let corner = |c: Vec3| hash3(i + c).dot(f - c);
    let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;

    let x00 = lerp(corner(Vec3::new(0.0, 0.0, 0.0)), corner(Vec3::new(1.0, 0.0, 0.0)), u.x);
    let x10 = lerp(corner(Vec3::new(0.0, 1.0, 0.0)), corner(Vec3::new(1.0, 1.0, 0.0)), u.x);
    let x01 = lerp(corner(Vec3::new(0.0, 0.0, 1.0)), corner(Vec3::new(1.0, 0.0, 1.0)), u.x);
    let x11 = lerp(corner(Vec3::new(0.0, 1.0, 1.0)), corner(Vec3::new(1.0, 1.0, 1.0)), u.x);

    lerp(lerp(x00, x10, u.y), lerp(x01, x11, u.y), u.z)
}

/// Fractal sum of `octaves` noise layers. Amplitude halves and frequency
/// grows by [`FBM_LACUNARITY`] each octave.
pub fn fbm(p: Vec3, octaves: u32) -> f32 {
    let mut value = 0.0_f32;
    let mut amplitude = 0.5_f32;
    let mut frequency = 1.0_f32;
    for _ in 0..octaves {
        value += amplitude * vnoise(p * frequency);
        amplitude *= FBM_GAIN;
        frequency *= FBM_LACUNARITY;
    }
    value
}

