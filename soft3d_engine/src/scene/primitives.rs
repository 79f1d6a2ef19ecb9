//! Primitive mesh generation (cuboid, UV sphere, plane)
//!
//! Every generator emits outward-facing CCW faces and per-vertex UVs, so the
//! result can be textured and back-face culled directly.

use std::f32::consts::PI;
use glam::{Vec2, Vec3};
use super::mesh::MeshInstance;

/// Minimum latitude/longitude segment count for spheres
pub const MIN_SPHERE_SEGMENTS: u32 = 3;

impl MeshInstance {
    /// Axis-aligned box centred on the origin.
    ///
    /// `size` = [x, y, z] extents. 24 vertices (4 per face) so each face owns
    /// its UV square, 6 quad faces.
    pub fn cuboid(size: Vec3) -> Self {
        let h = size / 2.0;

        let mut vertices = Vec::with_capacity(24);
        let mut uvs = Vec::with_capacity(24);
        let mut faces = Vec::with_capacity(6);

        let mut add_face = |corners: [[f32; 3]; 4]| {
            let base = vertices.len();
            for corner in corners {
                vertices.push(Vec3::from_array(corner));
            }
            uvs.extend_from_slice(&[
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 0.0),
            ]);
            faces.push(vec![base, base + 1, base + 2, base + 3]);
        };

        // +X
        add_face([[h.x, -h.y, -h.z], [h.x, h.y, -h.z], [h.x, h.y, h.z], [h.x, -h.y, h.z]]);
        // -X
        add_face([[-h.x, h.y, -h.z], [-h.x, -h.y, -h.z], [-h.x, -h.y, h.z], [-h.x, h.y, h.z]]);
        // +Y
        add_face([[h.x, h.y, -h.z], [-h.x, h.y, -h.z], [-h.x, h.y, h.z], [h.x, h.y, h.z]]);
        // -Y
        add_face([[-h.x, -h.y, -h.z], [h.x, -h.y, -h.z], [h.x, -h.y, h.z], [-h.x, -h.y, h.z]]);
        // +Z (top)
        add_face([[-h.x, -h.y, h.z], [h.x, -h.y, h.z], [h.x, h.y, h.z], [-h.x, h.y, h.z]]);
        // -Z (bottom)
        add_face([[-h.x, h.y, -h.z], [h.x, h.y, -h.z], [h.x, -h.y, -h.z], [-h.x, -h.y, -h.z]]);

        let mut mesh = MeshInstance::new(vertices, faces);
        mesh.uv_coordinates = Some(uvs);
        mesh
    }

    /// UV sphere centred on the origin.
    ///
    /// Quads between latitude rings, triangles at the poles. Segment counts
    /// below [`MIN_SPHERE_SEGMENTS`] are raised to it.
    pub fn sphere(radius: f32, lat_segments: u32, lon_segments: u32) -> Self {
        let lat_segments = lat_segments.max(MIN_SPHERE_SEGMENTS) as usize;
        let lon_segments = lon_segments.max(MIN_SPHERE_SEGMENTS) as usize;
        let row = lon_segments + 1;

        let mut vertices = Vec::with_capacity((lat_segments + 1) * row);
        let mut uvs = Vec::with_capacity((lat_segments + 1) * row);

        for lat in 0..=lat_segments {
            let theta = lat as f32 / lat_segments as f32 * PI;
            let (sin_theta, cos_theta) = theta.sin_cos();

            for lon in 0..=lon_segments {
                let phi = lon as f32 / lon_segments as f32 * 2.0 * PI;
                let (sin_phi, cos_phi) = phi.sin_cos();

                vertices.push(Vec3::new(
                    radius * sin_theta * cos_phi,
                    radius * sin_theta * sin_phi,
                    radius * cos_theta,
                ));
                uvs.push(Vec2::new(
                    lon as f32 / lon_segments as f32,
                    lat as f32 / lat_segments as f32,
                ));
            }
        }

        let mut faces = Vec::with_capacity(lat_segments * lon_segments);
        for lat in 0..lat_segments {
            for lon in 0..lon_segments {
                let a = lat * row + lon;
                let b = a + row;
                let c = b + 1;
                let d = a + 1;

                if lat == 0 {
                    // a and d both sit on the north pole
                    faces.push(vec![a, b, c]);
                } else if lat == lat_segments - 1 {
                    // b and c both sit on the south pole
                    faces.push(vec![a, b, d]);
                } else {
                    faces.push(vec![a, b, c, d]);
                }
            }
        }

        let mut mesh = MeshInstance::new(vertices, faces);
        mesh.uv_coordinates = Some(uvs);
        mesh
    }

    /// Rectangle in the YZ plane facing -X (toward a camera looking down +X).
    pub fn plane(width: f32, height: f32) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;

        let vertices = vec![
            Vec3::new(0.0, -hw, -hh),
            Vec3::new(0.0, -hw, hh),
            Vec3::new(0.0, hw, hh),
            Vec3::new(0.0, hw, -hh),
        ];
        let uvs = vec![
            Vec2::new(0.0, 1.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
        ];

        let mut mesh = MeshInstance::new(vertices, vec![vec![0, 1, 2, 3]]);
        mesh.uv_coordinates = Some(uvs);
        mesh
    }
}

#[cfg(test)]
#[path = "primitives_tests.rs"]
mod tests;
