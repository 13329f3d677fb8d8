//! Interaction state shared by the input handlers and the frame loop.
//!
//! Input events only write targets (mouse, morph target); all smoothing and
//! accumulation happens in [`InteractionState::advance`], once per display
//! frame. Rates are per frame, not per second.

use crate::constants::*;
use glam::Vec2;

/// Runtime-tunable subset of the scene constants.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub morph_smoothing: f32,
    pub rotation_per_frame: f32,
    pub mouse_tilt: Vec2, // (about y from mouse.x, about x from mouse.y)
    pub scroll_span_fraction: f64,
    pub particle_count: usize,
    pub pixel_ratio_cap: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            morph_smoothing: MORPH_SMOOTHING,
            rotation_per_frame: AUTO_ROTATION_PER_FRAME,
            mouse_tilt: Vec2::new(MOUSE_TILT_Y, MOUSE_TILT_X),
            scroll_span_fraction: SCROLL_SPAN_FRACTION,
            particle_count: PARTICLE_COUNT,
            pixel_ratio_cap: PIXEL_RATIO_CAP,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameState {
    pub time: f32,
    pub morph: f32,
    pub mouse: Vec2,
    /// Group rotation in radians: `x` about the X axis, `y` about the Y axis.
    pub rotation: Vec2,
    pub nucleus_scale: f32,
}

#[derive(Clone, Debug, Default)]
pub struct InteractionState {
    pub params: SceneParams,
    pub morph_target: f32,
    pub morph_current: f32,
    pub mouse: Vec2,
    pub base_rotation: f32,
}

impl InteractionState {
    pub fn new(params: SceneParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    /// Map a pointer position in CSS pixels to [-1, 1] on both axes.
    /// Screen-down is +y, as on the page.
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) {
        self.mouse = Vec2::new(
            normalize_axis(client_x, viewport_w),
            normalize_axis(client_y, viewport_h),
        );
    }

    pub fn scrolled(&mut self, scroll_y: f64, hero_height: f64) {
        self.morph_target = morph_for_scroll(scroll_y, hero_height, self.params.scroll_span_fraction);
    }

    /// Step one display frame at `elapsed` seconds since start.
    pub fn advance(&mut self, elapsed: f32) -> FrameState {
        self.morph_current = smooth_toward(
            self.morph_current,
            self.morph_target,
            self.params.morph_smoothing,
        );
        self.base_rotation += self.params.rotation_per_frame;

        let tilt = self.params.mouse_tilt;
        FrameState {
            time: elapsed,
            morph: self.morph_current,
            mouse: self.mouse,
            rotation: Vec2::new(
                self.mouse.y * tilt.y,
                self.base_rotation + self.mouse.x * tilt.x,
            ),
            nucleus_scale: nucleus_scale(elapsed, self.morph_current),
        }
    }
}

#[inline]
fn normalize_axis(pos: f64, extent: f64) -> f32 {
    if extent > 0.0 {
        ((pos / extent) * 2.0 - 1.0).clamp(-1.0, 1.0) as f32
    } else {
        0.0
    }
}

/// Morph target for a scroll offset; reaches 1 after `span_fraction` of the
/// hero height.
pub fn morph_for_scroll(scroll_y: f64, hero_height: f64, span_fraction: f64) -> f32 {
    let span = hero_height * span_fraction;
    if span <= 0.0 {
        return if scroll_y > 0.0 { 1.0 } else { 0.0 };
    }
    (scroll_y / span).clamp(0.0, 1.0) as f32
}

/// One step of exponential smoothing. With `factor` in [0, 1] the result
/// stays between `current` and `target`.
#[inline]
pub fn smooth_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[inline]
pub fn nucleus_scale(elapsed: f32, morph: f32) -> f32 {
    1.0 + (elapsed * NUCLEUS_PULSE_FREQ).sin() * NUCLEUS_PULSE_AMP + morph * NUCLEUS_MORPH_GROWTH
}
