// Host-side tests for the sphere meshes and the CPU noise reference.

use cell_core::constants::*;
use cell_core::noise::{fbm, hash3, vnoise};
use cell_core::*;
use glam::Vec3;

fn assert_on_sphere(mesh: &MeshData, radius: f32) {
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        let n = Vec3::from_array(v.normal);
        assert!((p.length() - radius).abs() < 1e-4, "radius {}", p.length());
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!(p.normalize().dot(n) > 0.9999);
    }
}

/// Every triangle winds counter-clockwise seen from outside.
fn assert_outward_winding(mesh: &MeshData) {
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] =
            [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(mesh.vertices[i as usize].position));
        let face = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(face.dot(centroid) > 0.0, "inward face at {centroid:?}");
    }
}

#[test]
fn icosphere_counts() {
    for detail in 0..=5u32 {
        let m = icosphere(1.0, detail);
        let expected = 20 * (detail as usize + 1).pow(2) * 3;
        assert_eq!(m.vertices.len(), expected, "detail {detail}");
        assert_eq!(m.index_count() as usize, expected);
    }
}

#[test]
fn membrane_and_glow_meshes_sit_on_their_spheres() {
    let membrane = icosphere(MEMBRANE_RADIUS, MEMBRANE_DETAIL);
    assert_on_sphere(&membrane, MEMBRANE_RADIUS);
    assert_outward_winding(&membrane);

    let glow = icosphere(INNER_GLOW_RADIUS, INNER_GLOW_DETAIL);
    assert_on_sphere(&glow, INNER_GLOW_RADIUS);
    assert_outward_winding(&glow);
}

#[test]
fn uv_sphere_counts() {
    let m = uv_sphere(NUCLEUS_RADIUS, 16, 16);
    assert_eq!(m.vertices.len(), 17 * 17);
    // Pole rows contribute one triangle per segment instead of two
    assert_eq!(m.indices.len(), 16 * (16 * 2 - 2) * 3);
    assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()));
}

#[test]
fn nucleus_mesh_is_closed_and_outward() {
    let m = uv_sphere(NUCLEUS_RADIUS, NUCLEUS_SEGMENTS, NUCLEUS_SEGMENTS);
    assert_on_sphere(&m, NUCLEUS_RADIUS);
    assert_outward_winding(&m);
}

#[test]
fn uv_sphere_clamps_degenerate_segments() {
    let m = uv_sphere(1.0, 0, 0);
    assert_eq!(m.vertices.len(), 4 * 3);
    assert!(!m.indices.is_empty());
}

#[test]
fn noise_is_deterministic() {
    let p = Vec3::new(1.3, -0.7, 2.9);
    assert_eq!(vnoise(p), vnoise(p));
    assert_eq!(fbm(p, FBM_OCTAVES), fbm(p, FBM_OCTAVES));
    assert_eq!(hash3(p), hash3(p));
}

#[test]
fn noise_vanishes_on_lattice() {
    for p in [Vec3::ZERO, Vec3::new(1.0, 2.0, -3.0), Vec3::new(-4.0, 0.0, 7.0)] {
        assert_eq!(vnoise(p), 0.0);
    }
    assert_eq!(fbm(Vec3::ZERO, FBM_OCTAVES), 0.0);
}

#[test]
fn hash_and_noise_ranges() {
    for i in 0..500 {
        let t = i as f32 * 0.137;
        let p = Vec3::new(t.sin() * 5.0, t * 0.3, (t * 1.7).cos() * 3.0);
        let h = hash3(p);
        assert!(h.cmpge(Vec3::splat(-1.0)).all() && h.cmple(Vec3::splat(1.0)).all());
        // Each corner term is at most |gradient| * |offset| = 3
        assert!(vnoise(p).abs() <= 3.0);
        // Octave amplitudes sum below 1
        assert!(fbm(p, FBM_OCTAVES).abs() <= 3.0);
    }
}

#[test]
fn zero_octaves_is_flat() {
    assert_eq!(fbm(Vec3::new(0.3, 0.4, 0.5), 0), 0.0);
}
