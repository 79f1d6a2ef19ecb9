//! Render texture: colour buffer plus persistent depth buffer.
//!
//! Invariant: `color.len() == depth.len() == width * height`. Both buffers are
//! reallocated together whenever the size changes; old contents are never
//! carried over.

use crate::color::Rgba;
use crate::error::Result;
use crate::engine_bail;
use super::surface::Surface;

/// Off-screen RGBA8 colour buffer with an `f32` depth buffer.
#[derive(Debug, Clone)]
pub struct RenderTexture {
    width: u32,
    height: u32,
    color: Vec<Rgba>,
    depth: Vec<f32>,
}

impl RenderTexture {
    /// Allocate a cleared render texture (transparent black, depth = +inf).
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            engine_bail!("soft3d::RenderTexture",
                "render texture size must be non-zero, got {}x{}", width, height);
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            color: vec![Rgba::TRANSPARENT; len],
            depth: vec![f32::INFINITY; len],
        })
    }

    /// Reallocate both buffers to a new size. Contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    // ===== GETTERS =====

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major colour buffer
    pub fn pixels(&self) -> &[Rgba] {
        &self.color
    }

    /// Colour buffer as RGBA8 bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color)
    }

    /// Row-major depth buffer
    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth
    }

    /// Colour at (x, y), or `None` out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x as i64, y as i64).map(|i| self.color[i])
    }

    /// Depth at (x, y), or `None` out of bounds
    pub fn depth(&self, x: u32, y: u32) -> Option<f32> {
        self.index(x as i64, y as i64).map(|i| self.depth[i])
    }

    // ===== WRITES =====

    /// Fill the colour buffer with `background` and reset depth to +inf.
    pub fn clear(&mut self, background: Rgba) {
        self.color.fill(background);
        self.depth.fill(f32::INFINITY);
    }

    /// Write a colour without depth testing. Out-of-bounds writes are ignored.
    ///
    /// Returns `true` when the pixel was inside the texture.
    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgba) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.color[i] = color;
                true
            }
            None => false,
        }
    }

    /// Write `color` if `depth` is nearer than the stored depth.
    ///
    /// Returns `true` when the pixel was written.
    #[inline]
    pub fn write_depth_tested(&mut self, x: i64, y: i64, depth: f32, color: Rgba) -> bool {
        match self.index(x, y) {
            Some(i) if depth < self.depth[i] => {
                self.depth[i] = depth;
                self.color[i] = color;
                true
            }
            _ => false,
        }
    }

    /// Blit into `surface` at (x, y), scaled to `width` x `height`.
    ///
    /// Nearest-neighbour sampling; parts falling outside the surface are clipped.
    pub fn blit_to(&self, surface: &mut dyn Surface, x: i64, y: i64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let (surface_w, surface_h) = (surface.width() as i64, surface.height() as i64);

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width as i64).min(surface_w);
        let y1 = (y + height as i64).min(surface_h);

        for dy in y0..y1 {
            let src_y = ((dy - y) * self.height as i64 / height as i64) as usize;
            let row = src_y * self.width as usize;
            for dx in x0..x1 {
                let src_x = ((dx - x) * self.width as i64 / width as i64) as usize;
                surface.put_pixel(dx as u32, dy as u32, self.color[row + src_x]);
            }
        }
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl Surface for RenderTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        self.set_pixel(x as i64, y as i64, color);
    }
}

#[cfg(test)]
#[path = "render_texture_tests.rs"]
mod tests;
