/// Scanline rasterization.
///
/// Triangles are prepared like the z-buffer's. Each edge then deposits one
/// crossing on every row whose centre it spans, and each row is filled
/// between paired crossings with depth-tested spans. Solid faces are drawn
/// with their flat colour; textures and wireframes are not supported here.

use crate::camera::RenderView;
use crate::color::Rgba;
use crate::scene::{MeshProvider, RenderMode};
use crate::target::RenderTexture;
use super::faces::{collect_faces, fan, project_face, ScreenVertex};
use super::method::RenderingMethod;
use super::pipeline::RenderPipeline;
use super::raster::{plot, DepthMode};
use super::stats::RenderStats;

pub struct ScanlinePipeline;

/// A projected triangle to scan.
struct ScanTriangle {
    vertices: [ScreenVertex; 3],
    color: Rgba,
}

/// Where one triangle edge crosses a row centre.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    x: f32,
    depth: f32,
    triangle: usize,
}

impl RenderPipeline for ScanlinePipeline {
    fn method(&self) -> RenderingMethod {
        RenderingMethod::Scanline
    }

    fn render(
        &self,
        view: &RenderView,
        meshes: &[&dyn MeshProvider],
        target: &mut RenderTexture,
    ) -> RenderStats {
        let mut stats = RenderStats::default();

        let mut triangles = Vec::new();
        for face in collect_faces(view, meshes, &mut stats) {
            if !face.mesh.render_mode.contains(RenderMode::SOLID) {
                continue;
            }
            let Some(polygon) = project_face(&face, view, &mut stats) else {
                continue;
            };
            triangles.extend(fan(&polygon).map(|[a, b, c]| ScanTriangle {
                vertices: [*a, *b, *c],
                color: face.mesh.face_color,
            }));
            stats.faces_drawn += 1;
        }
        stats.triangles_rasterized = triangles.len();

        let mut rows = build_crossings(&triangles, target.height());
        let mode = DepthMode::test(view.projection().far());

        for (row, crossings) in rows.iter_mut().enumerate() {
            if crossings.len() < 2 {
                continue;
            }
            // Left to right, then grouped per triangle so spans pair within
            // one triangle even where triangles overlap on the row
            crossings.sort_by(|a, b| a.x.total_cmp(&b.x));
            crossings.sort_by_key(|c| c.triangle);

            for group in crossings.chunk_by(|a, b| a.triangle == b.triangle) {
                let color = triangles[group[0].triangle].color;
                for pair in group.chunks_exact(2) {
                    stats.pixels_written += fill_span(target, row as i64, &pair[0], &pair[1], color, mode);
                }
            }
        }

        stats
    }
}

/// Edge crossings bucketed per row.
///
/// An edge spanning rows [ymin, ymax) contributes to row `r` when the row
/// centre `r + 0.5` lies in that half-open range, so a shared vertex is
/// counted once. Edges whose rounded endpoints coincide are skipped.
fn build_crossings(triangles: &[ScanTriangle], height: u32) -> Vec<Vec<Crossing>> {
    let mut rows: Vec<Vec<Crossing>> = vec![Vec::new(); height as usize];

    for (id, triangle) in triangles.iter().enumerate() {
        for i in 0..3 {
            let a = &triangle.vertices[i].point;
            let b = &triangle.vertices[(i + 1) % 3].point;
            if a.x.round() == b.x.round() && a.y.round() == b.y.round() {
                continue;
            }

            let (top, bottom) = if a.y <= b.y { (a, b) } else { (b, a) };
            if bottom.y - top.y <= 0.0 {
                continue;
            }

            let first = ((top.y - 0.5).ceil() as i64).max(0);
            let last = ((bottom.y - 0.5).ceil() as i64).min(height as i64);
            for row in first..last {
                let t = (row as f32 + 0.5 - top.y) / (bottom.y - top.y);
                rows[row as usize].push(Crossing {
                    x: top.x + (bottom.x - top.x) * t,
                    depth: top.depth + (bottom.depth - top.depth) * t,
                    triangle: id,
                });
            }
        }
    }

    rows
}

/// Fill pixel centres in [left.x, right.x) on one row.
fn fill_span(
    target: &mut RenderTexture,
    row: i64,
    left: &Crossing,
    right: &Crossing,
    color: Rgba,
    mode: DepthMode,
) -> usize {
    let width = right.x - left.x;
    let first = ((left.x - 0.5).ceil() as i64).max(0);
    let last = ((right.x - 0.5).ceil() as i64).min(target.width() as i64);

    let mut written = 0;
    for px in first..last {
        let t = if width > f32::EPSILON {
            (px as f32 + 0.5 - left.x) / width
        } else {
            0.0
        };
        let depth = left.depth + (right.depth - left.depth) * t;
        if plot(target, px, row, depth, color, mode) {
            written += 1;
        }
    }
    written
}

#[cfg(test)]
#[path = "scanline_tests.rs"]
mod tests;
