//! Procedural chair geometry built from oriented boxes.
//!
//! The model is roughly one unit tall, centred on the Y axis with the seat a
//! little above the origin, so the default model offset/scale frame it in the
//! hero camera.

use glam::{Mat4, Quat, Vec3};

use super::constants::{CHAIR_DARK, CHAIR_FRAME, CHAIR_PINK, CHAIR_PINK_DEEP};

/// Vertex layout shared with `shaders/chair.wgsl` (36 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct ChairMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

// Unit cube faces: outward normal, then four corners wound counter-clockwise
// when viewed from outside.
const FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    ([1.0, 0.0, 0.0], [[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]]),
    ([-1.0, 0.0, 0.0], [[-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, -1.0]]),
    ([0.0, 1.0, 0.0], [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]]),
    ([0.0, -1.0, 0.0], [[-1.0, -1.0, 1.0], [-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0]]),
    ([0.0, 0.0, 1.0], [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]]),
    ([0.0, 0.0, -1.0], [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]]),
];

impl ChairMesh {
    /// Append a box with the given half extents, placed by `transform`.
    pub fn push_box(&mut self, transform: Mat4, half_extents: Vec3, color: [f32; 3]) {
        let normal_mat = transform.inverse().transpose();
        for (normal, corners) in FACES.iter() {
            let base = self.vertices.len() as u16;
            let n = normal_mat
                .transform_vector3(Vec3::from(*normal))
                .normalize_or_zero();
            for corner in corners {
                let local = Vec3::from(*corner) * half_extents;
                self.vertices.push(Vertex {
                    position: transform.transform_point3(local).to_array(),
                    normal: n.to_array(),
                    color,
                });
            }
            self.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds of all vertices as `(min, max)`.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        self.vertices.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec3::from(v.position);
                (lo.min(p), hi.max(p))
            },
        )
    }
}

pub const BASE_LEG_COUNT: usize = 5;

pub fn build_chair() -> ChairMesh {
    let mut mesh = ChairMesh::default();
    let at = |x: f32, y: f32, z: f32| Mat4::from_translation(Vec3::new(x, y, z));

    // five-star base with casters
    for i in 0..BASE_LEG_COUNT {
        let angle = i as f32 * std::f32::consts::TAU / BASE_LEG_COUNT as f32;
        let spin = Mat4::from_quat(Quat::from_rotation_y(angle));
        mesh.push_box(
            spin * at(0.0, -0.42, 0.16),
            Vec3::new(0.03, 0.02, 0.16),
            CHAIR_FRAME,
        );
        mesh.push_box(spin * at(0.0, -0.47, 0.31), Vec3::splat(0.03), CHAIR_DARK);
    }

    // gas lift
    mesh.push_box(at(0.0, -0.25, 0.0), Vec3::new(0.03, 0.17, 0.03), CHAIR_DARK);

    // seat
    mesh.push_box(at(0.0, -0.05, 0.0), Vec3::new(0.26, 0.04, 0.25), CHAIR_PINK);
    mesh.push_box(at(0.0, -0.1, 0.0), Vec3::new(0.2, 0.02, 0.2), CHAIR_FRAME);

    // backrest, reclined slightly
    let recline = Mat4::from_quat(Quat::from_rotation_x(-0.12));
    mesh.push_box(
        at(0.0, 0.3, -0.27) * recline,
        Vec3::new(0.24, 0.3, 0.025),
        CHAIR_PINK,
    );
    mesh.push_box(
        at(0.0, 0.1, -0.23) * recline,
        Vec3::new(0.18, 0.06, 0.03),
        CHAIR_PINK_DEEP,
    );
    mesh.push_box(
        at(0.0, 0.7, -0.33) * recline,
        Vec3::new(0.14, 0.06, 0.03),
        CHAIR_PINK_DEEP,
    );
    mesh.push_box(
        at(0.0, 0.0, -0.26),
        Vec3::new(0.03, 0.08, 0.02),
        CHAIR_FRAME,
    );

    // armrests
    for x in [-0.29_f32, 0.29] {
        mesh.push_box(at(x, 0.07, -0.02), Vec3::new(0.015, 0.1, 0.015), CHAIR_FRAME);
        mesh.push_box(at(x, 0.18, 0.0), Vec3::new(0.03, 0.015, 0.12), CHAIR_DARK);
    }

    mesh
}
