use glam::Vec3;
use crate::color::Rgba;
use crate::render::test_support::{camera, count, quad, render, SIZE};
use crate::scene::{EntityTransform, LocalTransform, MeshInstance, SceneMesh};
use crate::render::ZBufferPipeline;
use super::*;

// ============================================================================
// Intersection
// ============================================================================

#[test]
fn test_ray_hits_facing_triangle() {
    let triangle = Triangle::new(
        Vec3::new(10.0, -1.0, -1.0),
        Vec3::new(10.0, -1.0, 1.0),
        Vec3::new(10.0, 1.0, 0.0),
        Rgba::RED,
    );
    let t = triangle.intersect(Vec3::X).unwrap();
    assert!((t - 10.0).abs() < 1e-4);
    assert!(triangle.intersect(Vec3::new(0.0, 1.0, 0.0)).is_none());
    assert!(triangle.intersect(-Vec3::X).is_none());
}

#[test]
fn test_small_triangle_is_hit_head_on() {
    // A few millimetres across: |det| is far below the raw epsilon
    let triangle = Triangle::new(
        Vec3::new(0.15, -0.002, -0.002),
        Vec3::new(0.15, -0.002, 0.002),
        Vec3::new(0.15, 0.002, 0.0),
        Rgba::RED,
    );
    let t = triangle.intersect(Vec3::X).unwrap();
    assert!((t - 0.15).abs() < 1e-5);
}

#[test]
fn test_ray_in_triangle_plane_misses() {
    let triangle = Triangle::new(
        Vec3::new(5.0, -1.0, 0.0),
        Vec3::new(5.0, 1.0, 0.0),
        Vec3::new(8.0, 0.0, 0.0),
        Rgba::RED,
    );
    assert!(triangle.intersect(Vec3::X).is_none());
}

#[test]
fn test_degenerate_triangle_misses() {
    let point = Vec3::new(5.0, 0.0, 0.0);
    let triangle = Triangle::new(point, point, Vec3::new(5.0, 1.0, 0.0), Rgba::RED);
    assert!(triangle.intersect(Vec3::X).is_none());
}

#[test]
fn test_front_facing_flag() {
    let front = Triangle::new(
        Vec3::new(10.0, -1.0, -1.0),
        Vec3::new(10.0, -1.0, 1.0),
        Vec3::new(10.0, 1.0, 0.0),
        Rgba::RED,
    );
    let back = Triangle::new(
        Vec3::new(10.0, -1.0, -1.0),
        Vec3::new(10.0, 1.0, 0.0),
        Vec3::new(10.0, -1.0, 1.0),
        Rgba::RED,
    );
    assert!(front.front_facing);
    assert!(!back.front_facing);
}

// ============================================================================
// Frames
// ============================================================================

#[test]
fn test_nearest_hit_wins() {
    let camera = camera();
    let near = quad(10.0, 1.0, Rgba::GREEN);
    let far = quad(20.0, 8.0, Rgba::RED);
    let (target, stats) = render(&RayTracePipeline, &camera, &[&far, &near]);

    assert_eq!(target.pixel(SIZE / 2, SIZE / 2), Some(Rgba::GREEN));
    assert_eq!(target.pixel(SIZE / 2 - 8, SIZE / 2), Some(Rgba::RED));
    assert_eq!(target.pixel(0, 0), Some(Rgba::BLACK));
    assert_eq!(stats.triangles_rasterized, 4);
    assert!((target.depth(SIZE / 2, SIZE / 2).unwrap() - 10.0).abs() < 1e-3);
}

#[test]
fn test_matches_zbuffer_coverage() {
    let camera = camera();
    let square = quad(10.0, 2.0, Rgba::GREEN);
    let (traced, _) = render(&RayTracePipeline, &camera, &[&square]);
    let (rasterized, _) = render(&ZBufferPipeline, &camera, &[&square]);

    let differing = traced
        .pixels()
        .iter()
        .zip(rasterized.pixels())
        .filter(|(a, b)| a != b)
        .count();
    assert!(differing <= 4 * 22, "{} pixels differ", differing);
    assert!(count(&traced, Rgba::GREEN) > 400);
}

#[test]
fn test_matches_zbuffer_at_small_scale() {
    let mut camera = camera();
    camera.set_near_plane(0.01).unwrap();
    let bead = SceneMesh::new(
        MeshInstance::sphere(0.02, 10, 14)
            .with_face_color(Rgba::BLUE)
            .with_transform(LocalTransform::at(Vec3::new(0.15, 0.0, 0.0))),
        EntityTransform::IDENTITY,
    );
    let (traced, _) = render(&RayTracePipeline, &camera, &[&bead]);
    let (rasterized, _) = render(&ZBufferPipeline, &camera, &[&bead]);

    let traced = count(&traced, Rgba::BLUE) as i64;
    let rasterized = count(&rasterized, Rgba::BLUE) as i64;
    assert!(rasterized > 100, "z-buffer covered {} pixels", rasterized);
    assert!((traced - rasterized).abs() * 4 <= rasterized, "{} vs {}", traced, rasterized);
}

#[test]
fn test_culling_rejects_back_faces() {
    let mut camera = camera();
    let mut turned = quad(10.0, 2.0, Rgba::GREEN);
    turned.mesh.transform.rotation = Vec3::new(0.0, 0.0, 180.0);

    let (target, _) = render(&RayTracePipeline, &camera, &[&turned]);
    assert!(count(&target, Rgba::GREEN) > 0);

    camera.set_backface_culling(true);
    let (target, stats) = render(&RayTracePipeline, &camera, &[&turned]);
    assert_eq!(count(&target, Rgba::GREEN), 0);
    assert_eq!(stats.faces_culled, 1);
}

#[test]
fn test_hits_beyond_far_are_ignored() {
    let mut camera = camera();
    camera.set_far_plane(8.0).unwrap();
    let square = quad(10.0, 2.0, Rgba::GREEN);
    let (target, stats) = render(&RayTracePipeline, &camera, &[&square]);
    assert_eq!(count(&target, Rgba::GREEN), 0);
    assert_eq!(stats.pixels_written, 0);
}
