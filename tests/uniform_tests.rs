// Host-side tests for the GPU uniform blocks.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod uniforms {
    include!("../src/render/uniforms.rs");
}

use cell_core::{Camera, FrameState, SceneTransforms};
use glam::{Mat4, Vec2};
use uniforms::*;

fn frame() -> FrameState {
    FrameState {
        time: 2.5,
        morph: 0.4,
        mouse: Vec2::new(-0.5, 0.25),
        rotation: Vec2::new(0.1, 0.7),
        nucleus_scale: 1.1,
    }
}

#[test]
fn uniform_sizes_match_wgsl_layout() {
    // Three mat4 + vec4 + two f32 + vec2
    assert_eq!(std::mem::size_of::<MeshUniforms>(), 224);
    // Two mat4 + vec2 + two f32
    assert_eq!(std::mem::size_of::<ParticleUniforms>(), 144);
    assert_eq!(std::mem::size_of::<MeshUniforms>() % 16, 0);
    assert_eq!(std::mem::size_of::<ParticleUniforms>() % 16, 0);
}

#[test]
fn mesh_uniforms_carry_frame_values() {
    let f = frame();
    let t = SceneTransforms::compute(&Camera::new(1.6), &f);
    let u = MeshUniforms::new(&t.membrane, t.projection, &f, [0.1, 0.2, 0.3, 0.4]);
    assert_eq!(u.time, 2.5);
    assert_eq!(u.morph, 0.4);
    assert_eq!(u.mouse, [-0.5, 0.25]);
    assert_eq!(u.tint, [0.1, 0.2, 0.3, 0.4]);
    assert_eq!(Mat4::from_cols_array_2d(&u.model_view), t.membrane.model_view);
    assert_eq!(Mat4::from_cols_array_2d(&u.projection), t.projection);
}

#[test]
fn mesh_uniform_bytes_are_column_major() {
    let f = frame();
    let t = SceneTransforms::compute(&Camera::new(1.0), &f);
    let u = MeshUniforms::new(&t.nucleus, t.projection, &f, [1.0; 4]);
    let floats: [f32; 56] = bytemuck::cast(u);
    assert_eq!(&floats[0..16], &t.nucleus.model_view.to_cols_array());
    assert_eq!(&floats[16..32], &t.projection.to_cols_array());
    assert_eq!(&floats[32..48], &t.nucleus.normal_matrix.to_cols_array());
    assert_eq!(&floats[48..52], &[1.0; 4]);
    assert_eq!(&floats[52..56], &[2.5, 0.4, -0.5, 0.25]);
}

#[test]
fn particle_uniforms_carry_resolution() {
    let f = frame();
    let t = SceneTransforms::compute(&Camera::new(1.0), &f);
    let u = ParticleUniforms::new(&t.particles, t.projection, &f, Vec2::new(1920.0, 1080.0));
    let floats: [f32; 36] = bytemuck::cast(u);
    assert_eq!(&floats[32..36], &[1920.0, 1080.0, 2.5, 0.4]);
}
