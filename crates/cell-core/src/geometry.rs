//! Sphere meshes for the membrane, inner glow and nucleus.

use glam::Vec3;

/// Interleaved vertex consumed by every mesh pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    #[inline]
    fn on_sphere(dir: Vec3, radius: f32) -> Self {
        let n = dir.normalize();
        Self {
            position: (n * radius).to_array(),
            normal: n.to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

const ICO_VERTICES: [[f32; 3]; 12] = {
    const T: f32 = 1.618_034; // golden ratio
    [
        [-1.0, T, 0.0],
        [1.0, T, 0.0],
        [-1.0, -T, 0.0],
        [1.0, -T, 0.0],
        [0.0, -1.0, T],
        [0.0, 1.0, T],
        [0.0, -1.0, -T],
        [0.0, 1.0, -T],
        [T, 0.0, -1.0],
        [T, 0.0, 1.0],
        [-T, 0.0, -1.0],
        [-T, 0.0, 1.0],
    ]
};

const ICO_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Icosahedron with each face split into `(detail + 1)^2` triangles and
/// every vertex pushed onto the sphere. Flat-indexed (no shared vertices),
/// so the result has `20 * (detail + 1)^2 * 3` vertices.
pub fn icosphere(radius: f32, detail: u32) -> MeshData {
    let cols = detail as usize + 1;
    let mut vertices = Vec::with_capacity(20 * cols * cols * 3);

    for face in ICO_FACES {
        let [a, b, c] = face.map(|i| Vec3::from_array(ICO_VERTICES[i]));

        // grid[i][j]: row i walks a->c, column j walks across the row
        let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let t = i as f32 / cols as f32;
            let aj = a.lerp(c, t);
            let bj = b.lerp(c, t);
            let rows = cols - i;
            let row = (0..=rows)
                .map(|j| {
                    if rows == 0 {
                        aj
                    } else {
                        aj.lerp(bj, j as f32 / rows as f32)
                    }
                })
                .collect();
            grid.push(row);
        }

        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                let tri = if j % 2 == 0 {
                    [grid[i][k + 1], grid[i + 1][k], grid[i][k]]
                } else {
                    [grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]
                };
                vertices.extend(tri.map(|p| MeshVertex::on_sphere(p, radius)));
            }
        }
    }

    let indices = (0..vertices.len() as u32).collect();
    MeshData { vertices, indices }
}

/// Latitude/longitude sphere with counter-clockwise front faces.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = v * std::f32::consts::PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * std::f32::consts::TAU;
            let dir = Vec3::new(
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );
            vertices.push(MeshVertex::on_sphere(dir, radius));
        }
    }

    let stride = ws + 1;
    let mut indices = Vec::new();
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * stride + ix + 1;
            let b = iy * stride + ix;
            let c = (iy + 1) * stride + ix;
            let d = (iy + 1) * stride + ix + 1;
            // pole rows collapse to a single triangle
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}
