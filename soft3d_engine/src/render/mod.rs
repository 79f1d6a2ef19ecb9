//! Rendering pipelines
//!
//! Four interchangeable strategies share the same front end: transform each
//! face to camera space, clip it against the near plane and project it. They
//! differ in how the projected faces become pixels.

mod faces;
mod method;
mod painter;
mod pipeline;
mod raster;
mod raytrace;
mod scanline;
mod stats;
mod zbuffer;

pub use method::RenderingMethod;
pub use painter::PainterPipeline;
pub use pipeline::RenderPipeline;
pub use raytrace::RayTracePipeline;
pub use scanline::ScanlinePipeline;
pub use stats::RenderStats;
pub use zbuffer::ZBufferPipeline;

#[cfg(test)]
pub(crate) mod test_support;
