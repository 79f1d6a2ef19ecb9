//! Soft3D demo: renders one scene with every pipeline and writes PNG files.
//!
//! Usage: soft3d_demo [camera.json] [output_dir]
//!
//! Writes `<method>.png` for each rendering method plus `contact_sheet.png`
//! with all four side by side.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use anyhow::{Context, Result};
use soft3d_engine::glam::{Vec2, Vec3};
use soft3d_engine::soft3d::{Camera3D, Engine, Rgba};
use soft3d_engine::soft3d::log::LogSeverity;
use soft3d_engine::soft3d::render::RenderingMethod;
use soft3d_engine::soft3d::resource::Texture;
use soft3d_engine::soft3d::scene::{
    EntityTransform, LocalTransform, MeshInstance, RenderMode, Scene,
};
use soft3d_engine::soft3d::target::RenderTexture;
use soft3d_engine::engine_info;

const SOURCE: &str = "soft3d::demo";

fn main() -> Result<()> {
    Engine::set_log_level(LogSeverity::Debug);

    let mut args = std::env::args().skip(1);
    let camera_path = args.next();
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| "soft3d_output".to_string()));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("cannot create {}", output_dir.display()))?;

    let mut camera = match camera_path {
        Some(path) => load_camera(Path::new(&path))?,
        None => default_camera()?,
    };

    // The camera rides on a 2D entity standing at the world origin
    let owner = EntityTransform::at(Vec2::ZERO);
    let scene = build_scene()?;

    let (width, height) = camera.render_texture_size();
    let mut sheet = RenderTexture::new(width * 2, height * 2)?;
    for (index, method) in RenderingMethod::ALL.into_iter().enumerate() {
        camera.set_rendering_method(method);
        let Some(stats) = camera.render3d(&owner, &scene.providers()) else {
            anyhow::bail!("camera is inactive or has no render texture");
        };

        let path = output_dir.join(format!("{}.png", method));
        if let Some(texture) = camera.rendered_texture() {
            save_png(texture, &path)?;
        }
        engine_info!(
            SOURCE,
            "{}: {} faces drawn, {} culled, {} pixels -> {}",
            method,
            stats.faces_drawn,
            stats.faces_culled,
            stats.pixels_written,
            path.display()
        );

        let (column, row) = ((index % 2) as i64, (index / 2) as i64);
        camera.draw_rendered_texture(&mut sheet, column * width as i64, row * height as i64, width, height);
    }

    let sheet_path = output_dir.join("contact_sheet.png");
    save_png(&sheet, &sheet_path)?;
    engine_info!(SOURCE, "Contact sheet -> {}", sheet_path.display());

    Ok(())
}

fn default_camera() -> Result<Camera3D> {
    let mut camera = Camera3D::with_render_texture_size(480, 320)?;
    camera.set_position(Vec3::new(0.0, 0.0, 3.0));
    // Look slightly down at the scene (positive pitch tips forward toward -Z)
    camera.set_rotation(Vec3::new(0.0, 12.0, 0.0));
    camera.set_background_color(Rgba::rgb(24, 26, 34));
    camera.set_backface_culling(true);
    Ok(camera)
}

fn load_camera(path: &Path) -> Result<Camera3D> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let camera = Camera3D::from_json(&json)
        .with_context(|| format!("invalid camera state in {}", path.display()))?;
    engine_info!(SOURCE, "Loaded camera from {}", path.display());
    Ok(camera)
}

fn build_scene() -> Result<Scene> {
    let mut scene = Scene::new();

    let cube = MeshInstance::cuboid(Vec3::splat(2.0))
        .with_face_color(Rgba::rgb(220, 80, 60))
        .with_wireframe_color(Rgba::WHITE)
        .with_render_mode(RenderMode::BOTH)
        .with_transform(LocalTransform {
            rotation: Vec3::new(15.0, 25.0, 35.0),
            ..LocalTransform::at(Vec3::new(9.0, -2.5, 0.5))
        });
    scene.add(cube, EntityTransform::IDENTITY);

    let sphere = MeshInstance::sphere(1.4, 12, 18)
        .with_face_color(Rgba::rgb(70, 140, 230))
        .with_transform(LocalTransform::at(Vec3::new(8.0, 2.5, 0.5)));
    scene.add(sphere, EntityTransform::IDENTITY);

    let checker = Texture::checkerboard(64, 64, 8, Rgba::rgb(240, 240, 240), Rgba::rgb(40, 160, 90))?;
    let board = MeshInstance::plane(6.0, 4.0)
        .with_texture(Arc::new(checker))
        .with_face_color(Rgba::rgb(40, 160, 90))
        .with_transform(LocalTransform::at(Vec3::new(14.0, 0.0, 1.0)));
    scene.add(board, EntityTransform::IDENTITY);

    Ok(scene)
}

fn save_png(texture: &RenderTexture, path: &Path) -> Result<()> {
    let image = image::RgbaImage::from_raw(texture.width(), texture.height(), texture.as_bytes().to_vec())
        .context("render texture size does not match its pixel buffer")?;
    image
        .save(path)
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}
