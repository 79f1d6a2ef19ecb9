/// Perspective projection from camera space to render texture pixels.
///
/// Screen X grows to the right with camera +Y, screen Y grows downward
/// against camera +Z. Pixel (0, 0) is the top-left corner.

use glam::{Vec2, Vec3};

/// Points at or closer than this depth cannot be projected
pub const MIN_PROJECTION_DEPTH: f32 = 1e-6;

/// A projected point: pixel coordinates plus camera-space depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32, depth: f32) -> Self {
        Self { x, y, depth }
    }

    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Projection parameters for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    near: f32,
    far: f32,
    width: u32,
    height: u32,
    /// tan(fov / 2)
    tan_half_fov: f32,
    aspect: f32,
}

impl Projection {
    /// `field_of_view` is the vertical angle in degrees.
    pub fn new(field_of_view: f32, near: f32, far: f32, width: u32, height: u32) -> Self {
        Self {
            near,
            far,
            width,
            height,
            tan_half_fov: (field_of_view.to_radians() / 2.0).tan(),
            aspect: width as f32 / height.max(1) as f32,
        }
    }

    // ===== GETTERS =====

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tan_half_fov(&self) -> f32 {
        self.tan_half_fov
    }

    /// Width / height
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    // ===== PROJECTION =====

    /// Project without the near/far check (used after near-plane clipping).
    ///
    /// Returns `None` only for points at or behind [`MIN_PROJECTION_DEPTH`].
    #[inline]
    pub fn project_unclipped(&self, p: Vec3) -> Option<ScreenPoint> {
        let depth = p.x;
        if depth <= MIN_PROJECTION_DEPTH {
            return None;
        }
        let focal = 1.0 / self.tan_half_fov;
        let ndc_x = (p.y / depth) * (focal / self.aspect);
        let ndc_y = (p.z / depth) * focal;

        Some(ScreenPoint {
            x: (ndc_x * 0.5 + 0.5) * self.width as f32,
            y: (0.5 - ndc_y * 0.5) * self.height as f32,
            depth,
        })
    }

    /// Project a point, rejecting depths outside [near, far].
    pub fn project(&self, p: Vec3) -> Option<ScreenPoint> {
        if p.x < self.near || p.x > self.far {
            return None;
        }
        self.project_unclipped(p)
    }

    /// Whether a screen point lies inside [0, width) x [0, height).
    pub fn contains(&self, point: &ScreenPoint) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width as f32
            && point.y < self.height as f32
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
