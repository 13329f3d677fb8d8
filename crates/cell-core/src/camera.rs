//! Camera and viewport bookkeeping for the hero surface.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Page viewport in CSS pixels plus the device pixel ratio in effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// `device_pixel_ratio` is capped at `cap`; non-finite or non-positive
    /// ratios fall back to 1.
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64, cap: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: width.max(1),
            height: height.max(1),
            pixel_ratio: dpr.min(cap),
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Size of the canvas backing store in device pixels, truncated to
    /// whole pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width as f64 * self.pixel_ratio).floor() as u32;
        let h = (self.height as f64 * self.pixel_ratio).floor() as u32;
        (w.max(1), h.max(1))
    }
}

/// Camera plus the viewport it was last fitted to. Owned by the page-level
/// state and updated synchronously from the resize handler.
#[derive(Clone, Debug)]
pub struct View {
    pub camera: Camera,
    pub viewport: Viewport,
}

impl View {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            camera: Camera::new(viewport.aspect()),
            viewport,
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }
}
