//! Triangle and line rasterization into a render texture.
//!
//! Samples at pixel centres. Texture coordinates are interpolated with the
//! screen-space barycentric weights, so texturing is affine (not
//! perspective-correct) and warps on faces seen at grazing angles.

use glam::Vec2;
use crate::color::Rgba;
use crate::math::Barycentric;
use crate::resource::Texture;
use crate::scene::RenderMode;
use crate::target::RenderTexture;
use super::faces::{fan, CameraFace, ScreenVertex};
use super::stats::RenderStats;

/// Triangles with a smaller doubled screen area are skipped
pub(crate) const DEGENERATE_AREA: f32 = 1e-8;

/// Relative depth pulled off wireframe edges so they win over their own face
pub(crate) const EDGE_DEPTH_BIAS: f32 = 1e-3;

/// How a pipeline resolves visibility when writing a pixel.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DepthMode {
    /// Paint over whatever is there; the depth buffer is left untouched
    Overwrite,
    /// Write when nearer than the stored depth and not beyond `far`
    Test { far: f32, bias: f32 },
}

impl DepthMode {
    pub fn test(far: f32) -> Self {
        DepthMode::Test { far, bias: 0.0 }
    }

    fn for_edges(self) -> Self {
        match self {
            DepthMode::Overwrite => DepthMode::Overwrite,
            DepthMode::Test { far, .. } => DepthMode::Test { far, bias: EDGE_DEPTH_BIAS },
        }
    }
}

/// Fill source of a triangle.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Shade<'a> {
    Flat(Rgba),
    Textured(&'a Texture),
}

/// Write one pixel under `mode`. Returns `true` if the colour was written.
#[inline]
pub(crate) fn plot(target: &mut RenderTexture, x: i64, y: i64, depth: f32, color: Rgba, mode: DepthMode) -> bool {
    match mode {
        DepthMode::Overwrite => target.set_pixel(x, y, color),
        DepthMode::Test { far, bias } => {
            depth <= far && target.write_depth_tested(x, y, depth * (1.0 - bias), color)
        }
    }
}

/// Rasterize one triangle with a bounding-box scan.
///
/// A pixel is covered when its centre has three non-negative barycentric
/// weights, whatever the winding. Returns the number of pixels written, or
/// `None` for a degenerate triangle.
pub(crate) fn fill_triangle(
    target: &mut RenderTexture,
    triangle: [&ScreenVertex; 3],
    shade: Shade<'_>,
    mode: DepthMode,
) -> Option<usize> {
    let [v0, v1, v2] = triangle;
    let (a, b, c) = (v0.point.xy(), v1.point.xy(), v2.point.xy());

    let frame = Barycentric::new(a, b, c, DEGENERATE_AREA)?;

    let min = a.min(b).min(c);
    let max = a.max(b).max(c);
    let x0 = (min.x.floor() as i64).max(0);
    let y0 = (min.y.floor() as i64).max(0);
    let x1 = (max.x.ceil() as i64).min(target.width() as i64);
    let y1 = (max.y.ceil() as i64).min(target.height() as i64);

    let mut written = 0;
    for py in y0..y1 {
        for px in x0..x1 {
            let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
            let [w0, w1, w2] = frame.weights(p);
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            let depth = w0 * v0.point.depth + w1 * v1.point.depth + w2 * v2.point.depth;
            let color = match shade {
                Shade::Flat(color) => color,
                Shade::Textured(texture) => texture.sample(v0.uv * w0 + v1.uv * w1 + v2.uv * w2),
            };
            if plot(target, px, py, depth, color, mode) {
                written += 1;
            }
        }
    }

    Some(written)
}

/// Draw a line segment with a DDA walk, interpolating depth.
///
/// The segment is first clipped to the texture (plus one pixel of margin) so
/// huge off-screen coordinates near the near plane stay cheap.
pub(crate) fn draw_line(
    target: &mut RenderTexture,
    from: (Vec2, f32),
    to: (Vec2, f32),
    color: Rgba,
    mode: DepthMode,
) -> usize {
    let bounds_min = Vec2::splat(-1.0);
    let bounds_max = Vec2::new(target.width() as f32 + 1.0, target.height() as f32 + 1.0);
    let Some((t0, t1)) = clip_segment(from.0, to.0, bounds_min, bounds_max) else {
        return 0;
    };

    let start = from.0.lerp(to.0, t0);
    let end = from.0.lerp(to.0, t1);
    let start_depth = from.1 + (to.1 - from.1) * t0;
    let end_depth = from.1 + (to.1 - from.1) * t1;

    let delta = end - start;
    let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;

    let mut written = 0;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let p = start + delta * t;
        let depth = start_depth + (end_depth - start_depth) * t;
        if plot(target, p.x.floor() as i64, p.y.floor() as i64, depth, color, mode) {
            written += 1;
        }
    }
    written
}

/// Liang-Barsky: parameter range of `a -> b` inside the box, if any.
fn clip_segment(a: Vec2, b: Vec2, min: Vec2, max: Vec2) -> Option<(f32, f32)> {
    let d = b - a;
    let mut t0: f32 = 0.0;
    let mut t1: f32 = 1.0;

    for (p, q) in [
        (-d.x, a.x - min.x),
        (d.x, max.x - a.x),
        (-d.y, a.y - min.y),
        (d.y, max.y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((t0, t1))
}

/// Fill and/or stroke a projected face according to its render mode.
///
/// Shared by the painter (`DepthMode::Overwrite`) and the z-buffer
/// (`DepthMode::Test`).
pub(crate) fn draw_face(
    target: &mut RenderTexture,
    face: &CameraFace<'_>,
    polygon: &[ScreenVertex],
    mode: DepthMode,
    stats: &mut RenderStats,
) {
    let mesh = face.mesh;

    if mesh.render_mode.contains(RenderMode::SOLID) {
        let shade = match (&mesh.texture, face.textured) {
            (Some(texture), true) => Shade::Textured(texture.as_ref()),
            _ => Shade::Flat(mesh.face_color),
        };
        for triangle in fan(polygon) {
            if let Some(written) = fill_triangle(target, triangle, shade, mode) {
                stats.triangles_rasterized += 1;
                stats.pixels_written += written;
            }
        }
    }

    if mesh.render_mode.contains(RenderMode::WIREFRAME) {
        let edge_mode = mode.for_edges();
        for i in 0..polygon.len() {
            let a = &polygon[i].point;
            let b = &polygon[(i + 1) % polygon.len()].point;
            stats.pixels_written += draw_line(
                target,
                (a.xy(), a.depth),
                (b.xy(), b.depth),
                mesh.wireframe_color,
                edge_mode,
            );
        }
    }

    stats.faces_drawn += 1;
}

#[cfg(test)]
#[path = "raster_tests.rs"]
mod tests;
