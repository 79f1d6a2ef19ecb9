/// Z-buffer rasterization.
///
/// Faces are drawn in submission order; the per-pixel depth test against the
/// render texture's depth buffer resolves visibility, so the result does not
/// depend on face order.

use crate::camera::RenderView;
use crate::scene::MeshProvider;
use crate::target::RenderTexture;
use super::faces::{collect_faces, project_face};
use super::method::RenderingMethod;
use super::pipeline::RenderPipeline;
use super::raster::{draw_face, DepthMode};
use super::stats::RenderStats;

pub struct ZBufferPipeline;

impl RenderPipeline for ZBufferPipeline {
    fn method(&self) -> RenderingMethod {
        RenderingMethod::ZBuffer
    }

    fn render(
        &self,
        view: &RenderView,
        meshes: &[&dyn MeshProvider],
        target: &mut RenderTexture,
    ) -> RenderStats {
        let mut stats = RenderStats::default();
        let mode = DepthMode::test(view.projection().far());

        for face in collect_faces(view, meshes, &mut stats) {
            if let Some(polygon) = project_face(&face, view, &mut stats) {
                draw_face(target, &face, &polygon, mode, &mut stats);
            }
        }

        stats
    }
}

#[cfg(test)]
#[path = "zbuffer_tests.rs"]
mod tests;
