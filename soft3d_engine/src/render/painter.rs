/// Painter's algorithm.
///
/// Every face of every mesh is sorted back to front on the mean depth of its
/// vertices and painted in that order, without a depth buffer. The sort
/// cannot order interpenetrating or cyclically overlapping faces; those
/// show the usual painter artifacts.

use crate::camera::{RenderView, TexturedVertex};
use crate::scene::MeshProvider;
use crate::target::RenderTexture;
use super::faces::{collect_faces, project_face};
use super::method::RenderingMethod;
use super::pipeline::RenderPipeline;
use super::raster::{draw_face, DepthMode};
use super::stats::RenderStats;

pub struct PainterPipeline;

impl RenderPipeline for PainterPipeline {
    fn method(&self) -> RenderingMethod {
        RenderingMethod::Painter
    }

    fn render(
        &self,
        view: &RenderView,
        meshes: &[&dyn MeshProvider],
        target: &mut RenderTexture,
    ) -> RenderStats {
        let mut stats = RenderStats::default();
        let faces = collect_faces(view, meshes, &mut stats);
        let projection = view.projection();

        let mut order: Vec<(f32, usize)> = faces
            .iter()
            .enumerate()
            .map(|(index, face)| (sort_depth(&face.vertices, projection.near(), projection.far()), index))
            .collect();
        // Stable: equal depths keep submission order
        order.sort_by(|a, b| b.0.total_cmp(&a.0));

        for (_, index) in order {
            let face = &faces[index];
            if let Some(polygon) = project_face(face, view, &mut stats) {
                draw_face(target, face, &polygon, DepthMode::Overwrite, &mut stats);
            }
        }

        stats
    }
}

/// Mean depth of the vertices in front of the near plane.
///
/// A face entirely behind it sorts at `far + 1`, i.e. first.
pub(crate) fn sort_depth(vertices: &[TexturedVertex], near: f32, far: f32) -> f32 {
    let (sum, count) = vertices
        .iter()
        .map(|v| v.position.x)
        .filter(|&depth| depth >= near)
        .fold((0.0, 0usize), |(sum, count), depth| (sum + depth, count + 1));

    if count == 0 {
        far + 1.0
    } else {
        sum / count as f32
    }
}

#[cfg(test)]
#[path = "painter_tests.rs"]
mod tests;
