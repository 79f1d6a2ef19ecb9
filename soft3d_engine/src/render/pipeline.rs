/// Rendering strategy.
///
/// A pipeline turns the active meshes into pixels of a cleared render
/// texture. Pipelines are stateless: the same instance serves every camera
/// and every frame.

use crate::camera::RenderView;
use crate::scene::MeshProvider;
use crate::target::RenderTexture;
use super::method::RenderingMethod;
use super::stats::RenderStats;

pub trait RenderPipeline: Send + Sync {
    /// The method this pipeline implements
    fn method(&self) -> RenderingMethod;

    /// Draw `meshes` as seen from `view` into `target`.
    ///
    /// `target` has already been cleared to the background colour with depth
    /// reset to +inf. Inactive providers are skipped.
    fn render(
        &self,
        view: &RenderView,
        meshes: &[&dyn MeshProvider],
        target: &mut RenderTexture,
    ) -> RenderStats;
}
