//! Scene builders shared by the pipeline tests

use glam::Vec3;
use crate::camera::{Camera3D, RenderView};
use crate::color::Rgba;
use crate::scene::{EntityTransform, LocalTransform, MeshInstance, MeshProvider, SceneMesh};
use crate::target::RenderTexture;
use super::pipeline::RenderPipeline;
use super::stats::RenderStats;

pub const SIZE: u32 = 64;

/// Square facing the origin camera at `depth`, spanning
/// [-half, half] on Y and Z.
pub fn quad(depth: f32, half: f32, color: Rgba) -> SceneMesh {
    let mesh = MeshInstance::plane(2.0 * half, 2.0 * half)
        .with_face_color(color)
        .with_transform(LocalTransform::at(Vec3::new(depth, 0.0, 0.0)));
    SceneMesh::new(mesh, EntityTransform::IDENTITY)
}

/// Triangle from explicit camera-space corners (camera at the origin).
pub fn triangle(corners: [Vec3; 3], color: Rgba) -> SceneMesh {
    let mesh = MeshInstance::new(corners.to_vec(), vec![vec![0, 1, 2]]).with_face_color(color);
    SceneMesh::new(mesh, EntityTransform::IDENTITY)
}

pub fn camera() -> Camera3D {
    Camera3D::with_render_texture_size(SIZE, SIZE).unwrap()
}

pub fn view(camera: &Camera3D) -> RenderView {
    camera.view(&EntityTransform::IDENTITY)
}

/// Clear a fresh texture to black and run `pipeline` over `meshes`.
pub fn render(
    pipeline: &dyn RenderPipeline,
    camera: &Camera3D,
    meshes: &[&SceneMesh],
) -> (RenderTexture, RenderStats) {
    let (width, height) = camera.render_texture_size();
    let mut target = RenderTexture::new(width, height).unwrap();
    target.clear(Rgba::BLACK);
    let providers: Vec<&dyn MeshProvider> = meshes.iter().map(|m| *m as &dyn MeshProvider).collect();
    let stats = pipeline.render(&view(camera), &providers, &mut target);
    (target, stats)
}

pub fn count(target: &RenderTexture, color: Rgba) -> usize {
    target.pixels().iter().filter(|&&p| p == color).count()
}
