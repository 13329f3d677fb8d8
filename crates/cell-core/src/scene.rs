//! Per-frame transforms for the cell group and its children.

use crate::camera::Camera;
use crate::constants::GROUP_OFFSET;
use crate::state::FrameState;
use glam::{Mat3, Mat4, Vec3};

/// World transform of the group holding every cell object.
pub fn group_matrix(frame: &FrameState) -> Mat4 {
    Mat4::from_translation(GROUP_OFFSET)
        * Mat4::from_rotation_x(frame.rotation.x)
        * Mat4::from_rotation_y(frame.rotation.y)
}

#[derive(Clone, Copy, Debug)]
pub struct ObjectTransform {
    pub model_view: Mat4,
    /// Inverse-transpose of the model-view rotation/scale, padded to 4x4.
    pub normal_matrix: Mat4,
}

impl ObjectTransform {
    fn new(view: Mat4, model: Mat4) -> Self {
        let model_view = view * model;
        let normal_matrix = Mat4::from_mat3(Mat3::from_mat4(model_view).inverse().transpose());
        Self {
            model_view,
            normal_matrix,
        }
    }
}

/// Transforms for every drawable in the hero scene for one frame.
#[derive(Clone, Copy, Debug)]
pub struct SceneTransforms {
    pub projection: Mat4,
    pub membrane: ObjectTransform,
    pub inner_glow: ObjectTransform,
    pub nucleus: ObjectTransform,
    pub particles: ObjectTransform,
}

impl SceneTransforms {
    pub fn compute(camera: &Camera, frame: &FrameState) -> Self {
        let view = camera.view_matrix();
        let group = group_matrix(frame);
        let nucleus = group * Mat4::from_scale(Vec3::splat(frame.nucleus_scale));
        Self {
            projection: camera.projection_matrix(),
            membrane: ObjectTransform::new(view, group),
            inner_glow: ObjectTransform::new(view, group),
            nucleus: ObjectTransform::new(view, nucleus),
            particles: ObjectTransform::new(view, group),
        }
    }
}
