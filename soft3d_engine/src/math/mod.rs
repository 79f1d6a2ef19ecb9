//! Vector and transform math shared by the camera and the pipelines.
//!
//! Vectors are `glam` types. This module adds the axis-rotation conventions
//! the engine relies on and a few 2D helpers used by the rasterizers.

mod rotation;

pub use rotation::{
    rotate_x, rotate_y, rotate_z,
    euler_rotation, inverse_euler_rotation,
};

use glam::Vec2;

/// Twice the signed area of triangle (a, b, c).
///
/// In screen space (Y down) a positive value means the triangle faces the
/// camera; negative means it is a back face.
#[inline]
pub fn signed_area2(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

/// Edge function of point `p` against the directed edge `a -> b`.
#[inline]
pub fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}

/// Screen-space triangle prepared for barycentric lookups.
///
/// Weights sum to 1; a point is inside iff all three are >= 0.
#[derive(Debug, Clone, Copy)]
pub struct Barycentric {
    a: Vec2,
    b: Vec2,
    c: Vec2,
    inv_area: f32,
}

impl Barycentric {
    /// `None` when the triangle is degenerate (|area| below `epsilon`) or
    /// its area is not finite.
    pub fn new(a: Vec2, b: Vec2, c: Vec2, epsilon: f32) -> Option<Self> {
        let area = signed_area2(a, b, c);
        if area.abs() < epsilon || !area.is_finite() {
            return None;
        }
        Some(Self { a, b, c, inv_area: 1.0 / area })
    }

    #[inline]
    pub fn weights(&self, p: Vec2) -> [f32; 3] {
        [
            edge_function(self.b, self.c, p) * self.inv_area,
            edge_function(self.c, self.a, p) * self.inv_area,
            edge_function(self.a, self.b, p) * self.inv_area,
        ]
    }
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
