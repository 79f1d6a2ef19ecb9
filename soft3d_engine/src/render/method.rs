//! Rendering method selection

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::engine_err;
use crate::error::{Error, Result};
use super::painter::PainterPipeline;
use super::pipeline::RenderPipeline;
use super::raytrace::RayTracePipeline;
use super::scanline::ScanlinePipeline;
use super::zbuffer::ZBufferPipeline;

/// Which pipeline a camera renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderingMethod {
    /// Back-to-front face sort, no depth buffer
    Painter,
    /// Per-pixel depth test over barycentric triangle rasterization
    #[default]
    ZBuffer,
    /// Row-by-row edge crossings with depth-tested spans
    Scanline,
    /// One primary ray per pixel, nearest hit wins
    RayTrace,
}

impl RenderingMethod {
    pub const ALL: [RenderingMethod; 4] = [
        RenderingMethod::Painter,
        RenderingMethod::ZBuffer,
        RenderingMethod::Scanline,
        RenderingMethod::RayTrace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderingMethod::Painter => "painter",
            RenderingMethod::ZBuffer => "zbuffer",
            RenderingMethod::Scanline => "scanline",
            RenderingMethod::RayTrace => "raytrace",
        }
    }

    /// The stateless pipeline implementing this method
    pub fn pipeline(&self) -> &'static dyn RenderPipeline {
        match self {
            RenderingMethod::Painter => &PainterPipeline,
            RenderingMethod::ZBuffer => &ZBufferPipeline,
            RenderingMethod::Scanline => &ScanlinePipeline,
            RenderingMethod::RayTrace => &RayTracePipeline,
        }
    }
}

impl fmt::Display for RenderingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderingMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RenderingMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| engine_err!("soft3d::RenderingMethod", "unknown rendering method '{}'", s))
    }
}

#[cfg(test)]
#[path = "method_tests.rs"]
mod tests;
