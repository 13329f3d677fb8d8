// Host-side tests for the per-frame interaction state and scene transforms.

use cell_core::constants::*;
use cell_core::*;
use glam::{Vec2, Vec3};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn morph_moves_toward_target_without_overshoot() {
    let mut s = InteractionState::new(SceneParams::default());
    s.scrolled(10_000.0, 800.0);
    assert_eq!(s.morph_target, 1.0);

    let mut prev = 0.0;
    for frame in 0..300 {
        let f = s.advance(frame as f32 / 60.0);
        assert!(f.morph >= prev, "frame {frame}: {} < {prev}", f.morph);
        assert!(f.morph <= 1.0);
        prev = f.morph;
    }
    assert!(prev > 0.99, "morph only reached {prev}");

    // And back down when scrolled to the top
    s.scrolled(0.0, 800.0);
    let mut prev = s.morph_current;
    for frame in 0..300 {
        let f = s.advance(frame as f32 / 60.0);
        assert!(f.morph <= prev);
        assert!(f.morph >= 0.0);
        prev = f.morph;
    }
    assert!(prev < 0.01);
}

#[test]
fn first_smoothing_step_closes_fixed_fraction() {
    let mut s = InteractionState::new(SceneParams::default());
    s.morph_target = 1.0;
    let f = s.advance(0.0);
    assert!(approx(f.morph, MORPH_SMOOTHING));
}

#[test]
fn smooth_toward_stays_between_endpoints() {
    for &(cur, tgt) in &[(0.0_f32, 1.0_f32), (1.0, 0.0), (0.3, 0.3), (0.9, 0.1)] {
        let next = smooth_toward(cur, tgt, MORPH_SMOOTHING);
        assert!(next >= cur.min(tgt) && next <= cur.max(tgt));
    }
}

#[test]
fn morph_for_scroll_maps_three_quarters_of_hero() {
    assert_eq!(morph_for_scroll(0.0, 800.0, 0.75), 0.0);
    assert!(approx(morph_for_scroll(300.0, 800.0, 0.75), 0.5));
    assert_eq!(morph_for_scroll(600.0, 800.0, 0.75), 1.0);
    assert_eq!(morph_for_scroll(5000.0, 800.0, 0.75), 1.0);
    assert_eq!(morph_for_scroll(-40.0, 800.0, 0.75), 0.0);
}

#[test]
fn morph_for_scroll_zero_height_hero() {
    assert_eq!(morph_for_scroll(0.0, 0.0, 0.75), 0.0);
    assert_eq!(morph_for_scroll(1.0, 0.0, 0.75), 1.0);
}

#[test]
fn pointer_maps_to_unit_square() {
    let mut s = InteractionState::default();
    s.pointer_moved(0.0, 0.0, 800.0, 600.0);
    assert_eq!(s.mouse, Vec2::new(-1.0, -1.0));
    s.pointer_moved(400.0, 300.0, 800.0, 600.0);
    assert_eq!(s.mouse, Vec2::ZERO);
    s.pointer_moved(800.0, 600.0, 800.0, 600.0);
    assert_eq!(s.mouse, Vec2::new(1.0, 1.0));
    s.pointer_moved(2000.0, -50.0, 800.0, 600.0);
    assert_eq!(s.mouse, Vec2::new(1.0, -1.0));
    s.pointer_moved(10.0, 10.0, 0.0, 0.0);
    assert_eq!(s.mouse, Vec2::ZERO);
}

#[test]
fn rotation_combines_auto_spin_and_mouse_tilt() {
    let mut s = InteractionState::new(SceneParams::default());
    let mut f = FrameState::default();
    for _ in 0..100 {
        f = s.advance(0.0);
    }
    assert!((f.rotation.y - 100.0 * AUTO_ROTATION_PER_FRAME).abs() < 1e-4);
    assert_eq!(f.rotation.x, 0.0);

    // Pointer at the bottom-right corner
    s.pointer_moved(800.0, 600.0, 800.0, 600.0);
    let base = s.base_rotation;
    let f = s.advance(0.0);
    assert!(approx(f.rotation.x, MOUSE_TILT_X));
    assert!(approx(
        f.rotation.y,
        base + AUTO_ROTATION_PER_FRAME + MOUSE_TILT_Y
    ));
    assert_eq!(f.mouse, Vec2::ONE);
}

#[test]
fn base_rotation_grows_monotonically() {
    let mut s = InteractionState::default();
    let mut prev = s.base_rotation;
    for _ in 0..50 {
        s.advance(0.0);
        assert!(s.base_rotation > prev);
        prev = s.base_rotation;
    }
}

#[test]
fn nucleus_pulse_and_growth() {
    assert!(approx(nucleus_scale(0.0, 0.0), 1.0));
    assert!(approx(nucleus_scale(0.0, 1.0), 1.0 + NUCLEUS_MORPH_GROWTH));
    let peak_t = std::f32::consts::FRAC_PI_2 / NUCLEUS_PULSE_FREQ;
    assert!(approx(nucleus_scale(peak_t, 0.0), 1.0 + NUCLEUS_PULSE_AMP));
    for i in 0..200 {
        let s = nucleus_scale(i as f32 * 0.05, 0.5);
        assert!(s >= 1.0 - NUCLEUS_PULSE_AMP + 0.5 * NUCLEUS_MORPH_GROWTH - 1e-5);
        assert!(s <= 1.0 + NUCLEUS_PULSE_AMP + 0.5 * NUCLEUS_MORPH_GROWTH + 1e-5);
    }
}

#[test]
fn resize_keeps_aspect_and_backing_in_step() {
    let mut view = View::new(Viewport::new(1280, 720, 1.0, PIXEL_RATIO_CAP));
    assert_eq!(view.camera.aspect, 1280.0 / 720.0);

    let vp = Viewport::new(390, 844, 3.0, PIXEL_RATIO_CAP);
    view.resize(vp);
    assert_eq!(view.camera.aspect, 390.0 / 844.0);
    assert_eq!((view.viewport.width, view.viewport.height), (390, 844));
    // Ratio 3 is capped at 2
    assert_eq!(view.viewport.pixel_ratio, 2.0);
    assert_eq!(view.viewport.backing_size(), (780, 1688));
}

#[test]
fn viewport_sanitizes_inputs() {
    let vp = Viewport::new(0, 0, f64::NAN, 2.0);
    assert_eq!((vp.width, vp.height), (1, 1));
    assert_eq!(vp.pixel_ratio, 1.0);
    let vp = Viewport::new(100, 100, 1.5, 2.0);
    assert_eq!(vp.backing_size(), (150, 150));
    // Fractional device pixels are dropped, not rounded up
    let vp = Viewport::new(101, 101, 1.5, 2.0);
    assert_eq!(vp.backing_size(), (151, 151));
    let vp = Viewport::new(333, 1, 1.25, 2.0);
    assert_eq!(vp.backing_size(), (416, 1));
    let vp = Viewport::new(100, 100, -2.0, 2.0);
    assert_eq!(vp.pixel_ratio, 1.0);
}

#[test]
fn camera_matches_scene_setup() {
    let cam = Camera::new(1.5);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, CAMERA_Z));
    assert!(approx(cam.fovy_radians, 45.0_f32.to_radians()));
    // Origin projects to the centre of the screen
    let clip = cam.projection_matrix() * cam.view_matrix() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(approx(clip.x / clip.w, 0.0));
    assert!(approx(clip.y / clip.w, 0.0));
}

#[test]
fn group_sits_right_of_centre() {
    let frame = FrameState {
        nucleus_scale: 1.0,
        ..Default::default()
    };
    let t = SceneTransforms::compute(&Camera::new(16.0 / 9.0), &frame);
    let centre = t.membrane.model_view.transform_point3(Vec3::ZERO);
    assert!(approx(centre.x, GROUP_OFFSET.x));
    assert!(approx(centre.z, -CAMERA_Z));
}

#[test]
fn nucleus_transform_carries_pulse_scale() {
    let frame = FrameState {
        nucleus_scale: 1.25,
        rotation: Vec2::new(0.3, 1.1),
        ..Default::default()
    };
    let t = SceneTransforms::compute(&Camera::new(1.0), &frame);
    let centre = t.nucleus.model_view.transform_point3(Vec3::ZERO);
    let surface = t.nucleus.model_view.transform_point3(Vec3::X);
    assert!(((surface - centre).length() - 1.25).abs() < 1e-4);
    let membrane_surface = t.membrane.model_view.transform_point3(Vec3::X);
    assert!(((membrane_surface - centre).length() - 1.0).abs() < 1e-4);
}

#[test]
fn normal_matrix_keeps_normals_perpendicular() {
    let frame = FrameState {
        nucleus_scale: 1.3,
        rotation: Vec2::new(-0.2, 2.0),
        ..Default::default()
    };
    let t = SceneTransforms::compute(&Camera::new(1.0), &frame);
    let n = t.nucleus.normal_matrix.transform_vector3(Vec3::Y).normalize();
    let tangent = t.nucleus.model_view.transform_vector3(Vec3::X);
    assert!(n.dot(tangent).abs() < 1e-4);
}
