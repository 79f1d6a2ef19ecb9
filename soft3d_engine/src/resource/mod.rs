//! Resource module: image data sampled by textured faces.

mod texture;

pub use texture::Texture;
