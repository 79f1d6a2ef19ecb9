//! Display surface abstraction: the destination of a camera blit.

use crate::color::Rgba;

/// A writable 2D pixel surface.
///
/// Implemented by textures and render textures; editor or runtime layers
/// implement it for their own canvases.
pub trait Surface {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Write one pixel. Callers guarantee `x < width` and `y < height`.
    fn put_pixel(&mut self, x: u32, y: u32, color: Rgba);
}
