//! Texture: an RGBA8 image sampled with normalized UV coordinates.

use glam::Vec2;
use crate::color::Rgba;
use crate::engine_bail;
use crate::error::Result;
use crate::target::Surface;

const SOURCE: &str = "soft3d::Texture";

/// RGBA8 image used by textured mesh faces.
///
/// UV (0, 0) is the top-left texel, (1, 1) the bottom-right.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Texture {
    /// Build a texture from tightly packed RGBA8 bytes.
    ///
    /// # Errors
    ///
    /// `InvalidResource` if a dimension is zero or `bytes.len() != width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || bytes.len() != expected {
            engine_bail!(InvalidResource => SOURCE,
                "texture {}x{} needs {} bytes, got {}",
                width, height, expected, bytes.len());
        }
        Ok(Self {
            width,
            height,
            pixels: bytemuck::cast_slice(bytes).to_vec(),
        })
    }

    /// Single-colour texture
    pub fn solid(width: u32, height: u32, color: Rgba) -> Result<Self> {
        if width == 0 || height == 0 {
            engine_bail!(InvalidResource => SOURCE,
                "texture size must be non-zero, got {}x{}", width, height);
        }
        Ok(Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        })
    }

    /// Checkerboard of `cell`-sized squares alternating `a` and `b`.
    pub fn checkerboard(width: u32, height: u32, cell: u32, a: Rgba, b: Rgba) -> Result<Self> {
        let mut texture = Self::solid(width, height, a)?;
        let cell = cell.max(1);
        for y in 0..height {
            for x in 0..width {
                if ((x / cell) + (y / cell)) % 2 == 1 {
                    texture.put_pixel(x, y, b);
                }
            }
        }
        Ok(texture)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixels as RGBA8 bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Nearest-neighbour sample; UVs are clamped to [0, 1].
    pub fn sample(&self, uv: Vec2) -> Rgba {
        let u = uv.x.clamp(0.0, 1.0);
        let v = uv.y.clamp(0.0, 1.0);
        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);
        self.pixels[(y * self.width + x) as usize]
    }
}

impl Surface for Texture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
