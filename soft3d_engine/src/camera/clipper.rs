/// Near-plane polygon clipping (Sutherland-Hodgman against `depth = near`).
///
/// Generic over the vertex payload so texture coordinates are clipped along
/// with positions.

use glam::{Vec2, Vec3};

/// A vertex the clipper can measure and interpolate.
pub trait ClipVertex: Copy {
    /// Camera-space depth (X)
    fn depth(&self) -> f32;

    /// Linear interpolation toward `other` by `t` in [0, 1]
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Same vertex moved to the given depth
    fn with_depth(self, depth: f32) -> Self;
}

impl ClipVertex for Vec3 {
    #[inline]
    fn depth(&self) -> f32 {
        self.x
    }

    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::lerp(*self, *other, t)
    }

    #[inline]
    fn with_depth(self, depth: f32) -> Self {
        Vec3 { x: depth, ..self }
    }
}

/// Camera-space position with its texture coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexturedVertex {
    pub position: Vec3,
    pub uv: Vec2,
}

impl ClipVertex for TexturedVertex {
    #[inline]
    fn depth(&self) -> f32 {
        self.position.x
    }

    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            uv: self.uv.lerp(other.uv, t),
        }
    }

    #[inline]
    fn with_depth(self, depth: f32) -> Self {
        Self { position: self.position.with_depth(depth), ..self }
    }
}

/// Clip a polygon to the half-space `depth >= near`.
///
/// A polygon entirely in front of the plane comes back unchanged, vertex for
/// vertex. One entirely behind it comes back empty. The result may have
/// fewer than three vertices; callers drop it in that case.
pub fn clip_near<V: ClipVertex>(polygon: &[V], near: f32) -> Vec<V> {
    let count = polygon.len();
    let mut output = Vec::with_capacity(count + 2);
    if count == 0 {
        return output;
    }

    for i in 0..count {
        let current = &polygon[i];
        let previous = &polygon[(i + count - 1) % count];
        let current_inside = current.depth() >= near;
        let previous_inside = previous.depth() >= near;

        if current_inside {
            if !previous_inside {
                output.push(intersect(previous, current, near));
            }
            output.push(*current);
        } else if previous_inside {
            output.push(intersect(previous, current, near));
        }
    }

    output
}

/// Point where edge a -> b crosses the near plane. Only called when exactly
/// one endpoint is inside, so the depths differ.
///
/// The result sits exactly on the plane: lerp rounding on long edges would
/// otherwise leave it slightly behind `near`.
#[inline]
fn intersect<V: ClipVertex>(a: &V, b: &V, near: f32) -> V {
    let t = ((near - a.depth()) / (b.depth() - a.depth())).clamp(0.0, 1.0);
    a.lerp(b, t).with_depth(near)
}

#[cfg(test)]
#[path = "clipper_tests.rs"]
mod tests;
