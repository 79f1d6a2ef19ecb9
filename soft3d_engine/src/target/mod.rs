//! Render target module
//!
//! A `RenderTexture` is the off-screen colour + depth buffer a camera renders
//! into. A `Surface` is any display destination the finished image can be
//! presented (blitted) onto.

mod render_texture;
mod surface;

pub use render_texture::RenderTexture;
pub use surface::Surface;
