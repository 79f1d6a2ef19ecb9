/// RenderView: the per-frame snapshot of a camera handed to a pipeline.
///
/// Ephemeral: built by `Camera3D::view()` for one frame from the camera's
/// parameters and its owner's world transform.

use super::camera_space::CameraTransform;
use super::projection::Projection;

#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    transform: CameraTransform,
    projection: Projection,
    backface_culling: bool,
}

impl RenderView {
    pub fn new(
        transform: CameraTransform,
        projection: Projection,
        backface_culling: bool,
    ) -> Self {
        Self {
            transform,
            projection,
            backface_culling,
        }
    }

    /// World-to-camera transform
    pub fn transform(&self) -> &CameraTransform {
        &self.transform
    }

    /// Camera-space-to-pixel projection
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn backface_culling(&self) -> bool {
        self.backface_culling
    }
}
