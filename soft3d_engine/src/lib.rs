/*!
# Soft3D Engine

Software 3D rasterization camera for a 2D/3D hybrid engine.

A [`Camera3D`](soft3d::Camera3D) attached to a 2D entity renders 3D meshes
into its own off-screen RGBA render texture, entirely on the CPU, with one of
four interchangeable pipelines.

## Architecture

- **Camera**: camera-space transform, near-plane clipping, projection, JSON state
- **Render**: painter's algorithm, z-buffer, scanline and ray tracing pipelines
- **Scene**: mesh instances, entity transforms, primitives, mesh registry
- **Target**: render texture (colour + depth) and display surfaces
- **Resource**: textures sampled by textured faces

Nothing is global except the logger: cameras receive their owner's world
transform and the meshes to draw explicitly on every frame.
*/

// Internal modules
mod camera;
mod color;
mod engine;
mod error;
pub mod log;
mod math;
mod render;
mod resource;
mod scene;
mod target;

// Main soft3d namespace module
pub mod soft3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine facade (logging)
    pub use crate::engine::Engine;

    // Camera
    pub use crate::camera::{Camera3D, CameraKey, CameraSet};

    // Colour
    pub use crate::color::Rgba;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module with the frame math and state types
    pub mod camera {
        pub use crate::camera::*;
    }

    // Render sub-module with the pipelines
    pub mod render {
        pub use crate::render::{
            RenderingMethod, RenderPipeline, RenderStats,
            PainterPipeline, ZBufferPipeline, ScanlinePipeline, RayTracePipeline,
        };
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Target sub-module
    pub mod target {
        pub use crate::target::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }
}

// Re-export math library at crate root
pub use glam;
