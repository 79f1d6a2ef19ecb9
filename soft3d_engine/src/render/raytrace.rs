/// CPU ray tracing.
///
/// One primary ray per pixel centre from the camera origin, tested against
/// every camera-space triangle of the frame (Möller-Trumbore). The nearest
/// hit paints the face colour. No acceleration structure, no near-plane
/// clipping: the ray range [near, far] does that job.

use glam::Vec3;
use crate::camera::RenderView;
use crate::color::Rgba;
use crate::scene::{MeshProvider, RenderMode};
use crate::target::RenderTexture;
use super::faces::{collect_faces, fan};
use super::method::RenderingMethod;
use super::pipeline::RenderPipeline;
use super::stats::RenderStats;

/// Rays closer to parallel with a triangle than this are misses.
///
/// Relative to the edge lengths, so the test does not depend on scene scale.
const PARALLEL_EPSILON: f32 = 1e-4;

/// Minimum hit distance along the ray
const MIN_HIT_DISTANCE: f32 = 1e-6;

pub struct RayTracePipeline;

/// Camera-space triangle with precomputed edges.
#[derive(Debug, Clone, Copy)]
struct Triangle {
    v0: Vec3,
    edge1: Vec3,
    edge2: Vec3,
    /// Smallest |determinant| accepted for a unit ray
    parallel_threshold: f32,
    color: Rgba,
    /// Outward normal points toward the camera origin
    front_facing: bool,
}

impl Triangle {
    fn new(v0: Vec3, v1: Vec3, v2: Vec3, color: Rgba) -> Self {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        Self {
            v0,
            edge1,
            edge2,
            parallel_threshold: PARALLEL_EPSILON * edge1.length() * edge2.length(),
            color,
            front_facing: edge1.cross(edge2).dot(-v0) > 0.0,
        }
    }

    /// Distance along `direction` (from the origin) to the hit, if any.
    #[inline]
    fn intersect(&self, direction: Vec3) -> Option<f32> {
        let h = direction.cross(self.edge2);
        let det = self.edge1.dot(h);
        if det.abs() <= self.parallel_threshold {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = -self.v0;
        let u = s.dot(h) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(self.edge1);
        let v = direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = self.edge2.dot(q) * inv_det;
        (t > MIN_HIT_DISTANCE).then_some(t)
    }
}

impl RenderPipeline for RayTracePipeline {
    fn method(&self) -> RenderingMethod {
        RenderingMethod::RayTrace
    }

    fn render(
        &self,
        view: &RenderView,
        meshes: &[&dyn MeshProvider],
        target: &mut RenderTexture,
    ) -> RenderStats {
        let mut stats = RenderStats::default();
        let culling = view.backface_culling();

        let mut triangles = Vec::new();
        for face in collect_faces(view, meshes, &mut stats) {
            if !face.mesh.render_mode.contains(RenderMode::SOLID) {
                continue;
            }
            let before = triangles.len();
            triangles.extend(
                fan(&face.vertices)
                    .map(|[a, b, c]| Triangle::new(a.position, b.position, c.position, face.mesh.face_color))
                    .filter(|triangle| !culling || triangle.front_facing),
            );
            if triangles.len() == before {
                stats.faces_culled += 1;
            } else {
                stats.faces_drawn += 1;
            }
        }
        stats.triangles_rasterized = triangles.len();

        let projection = view.projection();
        let (near, far) = (projection.near(), projection.far());
        let (width, height) = (target.width(), target.height());
        let tan_half_fov = projection.tan_half_fov();
        let aspect = projection.aspect();

        for py in 0..height {
            let ndc_y = 1.0 - 2.0 * (py as f32 + 0.5) / height as f32;
            for px in 0..width {
                let ndc_x = 2.0 * (px as f32 + 0.5) / width as f32 - 1.0;
                let direction = Vec3::new(
                    1.0,
                    ndc_x * tan_half_fov * aspect,
                    ndc_y * tan_half_fov,
                )
                .normalize();

                let mut nearest: Option<(f32, Rgba)> = None;
                for triangle in &triangles {
                    let Some(t) = triangle.intersect(direction) else {
                        continue;
                    };
                    if t < near || t > far {
                        continue;
                    }
                    if nearest.map_or(true, |(best, _)| t < best) {
                        nearest = Some((t, triangle.color));
                    }
                }

                if let Some((t, color)) = nearest {
                    // Store camera-space depth so the depth buffer matches
                    // the rasterizing pipelines
                    let depth = t * direction.x;
                    if target.write_depth_tested(px as i64, py as i64, depth, color) {
                        stats.pixels_written += 1;
                    }
                }
            }
        }

        stats
    }
}

#[cfg(test)]
#[path = "raytrace_tests.rs"]
mod tests;
