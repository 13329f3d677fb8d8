use cell_core::{FrameState, ObjectTransform};
use glam::{Mat4, Vec2};

/// Per-object uniforms shared by the membrane, inner glow and nucleus
/// programs. Layout matches `MeshUniforms` in shaders/surface.wgsl.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniforms {
    pub model_view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub tint: [f32; 4],
    pub time: f32,
    pub morph: f32,
    pub mouse: [f32; 2],
}

impl MeshUniforms {
    pub fn new(
        transform: &ObjectTransform,
        projection: Mat4,
        frame: &FrameState,
        tint: [f32; 4],
    ) -> Self {
        Self {
            model_view: transform.model_view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            normal_matrix: transform.normal_matrix.to_cols_array_2d(),
            tint,
            time: frame.time,
            morph: frame.morph,
            mouse: frame.mouse.to_array(),
        }
    }
}

/// Layout matches `ParticleUniforms` in shaders/particles.wgsl.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleUniforms {
    pub model_view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    /// Drawing-buffer size in device pixels.
    pub resolution: [f32; 2],
    pub time: f32,
    pub morph: f32,
}

impl ParticleUniforms {
    pub fn new(
        transform: &ObjectTransform,
        projection: Mat4,
        frame: &FrameState,
        resolution: Vec2,
    ) -> Self {
        Self {
            model_view: transform.model_view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            resolution: resolution.to_array(),
            time: frame.time,
            morph: frame.morph,
        }
    }
}
