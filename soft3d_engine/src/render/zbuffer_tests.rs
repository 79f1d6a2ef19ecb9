use std::sync::Arc;
use glam::Vec3;
use crate::color::Rgba;
use crate::resource::Texture;
use crate::scene::{EntityTransform, MeshInstance, RenderMode, SceneMesh};
use crate::render::test_support::{camera, count, quad, render, triangle, SIZE};
use super::*;

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_result_is_order_independent() {
    let camera = camera();
    let a = quad(10.0, 2.0, Rgba::GREEN);
    let b = quad(12.0, 4.0, Rgba::RED);
    // slanted triangle cutting through both quads
    let c = triangle(
        [Vec3::new(8.0, -3.0, -3.0), Vec3::new(14.0, 3.0, -3.0), Vec3::new(11.0, 0.0, 3.0)],
        Rgba::BLUE,
    );

    let (first, _) = render(&ZBufferPipeline, &camera, &[&a, &b, &c]);
    let (second, _) = render(&ZBufferPipeline, &camera, &[&c, &b, &a]);
    let (third, _) = render(&ZBufferPipeline, &camera, &[&b, &a, &c]);
    assert_eq!(first.pixels(), second.pixels());
    assert_eq!(first.pixels(), third.pixels());
    assert!(count(&first, Rgba::BLUE) > 0);
}

#[test]
fn test_depth_buffer_holds_nearest() {
    let camera = camera();
    let near = quad(10.0, 2.0, Rgba::GREEN);
    let far = quad(20.0, 8.0, Rgba::RED);
    let (target, _) = render(&ZBufferPipeline, &camera, &[&far, &near]);

    let centre = SIZE / 2;
    assert_eq!(target.pixel(centre, centre), Some(Rgba::GREEN));
    assert!((target.depth(centre, centre).unwrap() - 10.0).abs() < 1e-3);
    assert!((target.depth(centre - 15, centre).unwrap() - 20.0).abs() < 1e-3);
    assert_eq!(target.depth(0, 0), Some(f32::INFINITY));
}

#[test]
fn test_far_plane_rejects_pixels() {
    let mut camera = camera();
    camera.set_far_plane(8.0).unwrap();
    let beyond = quad(10.0, 2.0, Rgba::GREEN);
    let (target, stats) = render(&ZBufferPipeline, &camera, &[&beyond]);
    assert_eq!(stats.pixels_written, 0);
    assert_eq!(count(&target, Rgba::GREEN), 0);
}

#[test]
fn test_near_clipped_face_still_draws() {
    // Floor strip running from behind the camera to depth 20
    let camera = camera();
    let strip = triangle(
        [Vec3::new(-5.0, -1.0, -1.0), Vec3::new(20.0, 1.0, -1.0), Vec3::new(20.0, -1.0, -1.0)],
        Rgba::GREEN,
    );
    let (target, stats) = render(&ZBufferPipeline, &camera, &[&strip]);
    assert_eq!(stats.faces_drawn, 1);
    assert!(count(&target, Rgba::GREEN) > 0);
    assert!(target.depth_buffer().iter().all(|&d| d.is_infinite() || d >= camera.near_plane() - 1e-4));
}

#[test]
fn test_tiny_near_plane_still_clips() {
    let mut camera = camera();
    camera.set_near_plane(1e-5).unwrap();
    // Tilted quad whose left edge sits behind the camera
    let mesh = MeshInstance::new(
        vec![
            Vec3::new(-2.0, -3.0, -3.0),
            Vec3::new(6.0, 3.0, -3.0),
            Vec3::new(6.0, 3.0, 3.0),
            Vec3::new(-2.0, -3.0, 3.0),
        ],
        vec![vec![0, 1, 2, 3]],
    )
    .with_face_color(Rgba::GREEN);
    let tilted = SceneMesh::new(mesh, EntityTransform::IDENTITY);

    let (target, stats) = render(&ZBufferPipeline, &camera, &[&tilted]);
    assert_eq!(stats.faces_clipped, 0);
    assert_eq!(stats.faces_drawn, 1);
    assert!(count(&target, Rgba::GREEN) > (SIZE * SIZE / 4) as usize);
}

// ============================================================================
// Texture and wireframe
// ============================================================================

#[test]
fn test_textured_quad_uses_texture() {
    let camera = camera();
    let mut textured = quad(10.0, 2.0, Rgba::RED);
    textured.mesh.texture = Some(Arc::new(Texture::solid(4, 4, Rgba::BLUE).unwrap()));
    let (target, _) = render(&ZBufferPipeline, &camera, &[&textured]);
    assert_eq!(count(&target, Rgba::RED), 0);
    assert_eq!(target.pixel(SIZE / 2, SIZE / 2), Some(Rgba::BLUE));
}

#[test]
fn test_wireframe_wins_over_own_face() {
    let camera = camera();
    let mut both = quad(10.0, 2.0, Rgba::RED);
    both.mesh.render_mode = RenderMode::BOTH;
    both.mesh.wireframe_color = Rgba::WHITE;

    let (target, _) = render(&ZBufferPipeline, &camera, &[&both]);
    let edges = count(&target, Rgba::WHITE);
    // four edges of roughly 22 pixels each
    assert!(edges >= 60, "only {} edge pixels visible", edges);
    assert_eq!(target.pixel(SIZE / 2, SIZE / 2), Some(Rgba::RED));
}

#[test]
fn test_nearer_face_hides_wireframe_behind() {
    let camera = camera();
    let mut behind = quad(20.0, 2.0, Rgba::RED);
    behind.mesh.render_mode = RenderMode::WIREFRAME;
    behind.mesh.wireframe_color = Rgba::WHITE;
    let cover = quad(10.0, 4.0, Rgba::GREEN);

    let (target, _) = render(&ZBufferPipeline, &camera, &[&cover, &behind]);
    assert_eq!(count(&target, Rgba::WHITE), 0);
}
