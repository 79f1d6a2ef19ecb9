use glam::Vec2;
use crate::camera::ScreenPoint;
use crate::color::Rgba;
use crate::resource::Texture;
use crate::target::RenderTexture;
use super::*;

fn vertex(x: f32, y: f32, depth: f32) -> ScreenVertex {
    ScreenVertex { point: ScreenPoint::new(x, y, depth), uv: Vec2::ZERO }
}

fn target(size: u32) -> RenderTexture {
    let mut target = RenderTexture::new(size, size).unwrap();
    target.clear(Rgba::BLACK);
    target
}

// ============================================================================
// fill_triangle
// ============================================================================

#[test]
fn test_fill_covers_pixel_centres() {
    let mut target = target(10);
    let (a, b, c) = (vertex(0.0, 0.0, 1.0), vertex(10.0, 0.0, 1.0), vertex(0.0, 10.0, 1.0));
    let written = fill_triangle(&mut target, [&a, &b, &c], Shade::Flat(Rgba::RED), DepthMode::test(100.0)).unwrap();

    // centres with x + y <= 10 - 1 (inclusive edge)
    assert_eq!(written, 55);
    assert_eq!(target.pixel(0, 0), Some(Rgba::RED));
    assert_eq!(target.pixel(9, 0), Some(Rgba::RED));
    assert_eq!(target.pixel(9, 9), Some(Rgba::BLACK));
}

#[test]
fn test_fill_either_winding() {
    let mut target = target(10);
    let (a, b, c) = (vertex(0.0, 0.0, 1.0), vertex(0.0, 10.0, 1.0), vertex(10.0, 0.0, 1.0));
    let written = fill_triangle(&mut target, [&a, &b, &c], Shade::Flat(Rgba::RED), DepthMode::Overwrite).unwrap();
    assert_eq!(written, 55);
}

#[test]
fn test_degenerate_triangle_is_skipped() {
    let mut target = target(10);
    let (a, b, c) = (vertex(1.0, 1.0, 1.0), vertex(5.0, 5.0, 1.0), vertex(9.0, 9.0, 1.0));
    assert!(fill_triangle(&mut target, [&a, &b, &c], Shade::Flat(Rgba::RED), DepthMode::Overwrite).is_none());
}

#[test]
fn test_offscreen_parts_are_clipped() {
    let mut target = target(4);
    let (a, b, c) = (vertex(-100.0, -100.0, 1.0), vertex(100.0, -100.0, 1.0), vertex(0.0, 100.0, 1.0));
    let written = fill_triangle(&mut target, [&a, &b, &c], Shade::Flat(Rgba::RED), DepthMode::Overwrite).unwrap();
    assert_eq!(written, 16);
}

#[test]
fn test_depth_is_interpolated() {
    let mut target = target(10);
    let (a, b, c) = (vertex(0.0, 0.0, 2.0), vertex(20.0, 0.0, 2.0), vertex(0.0, 20.0, 2.0));
    fill_triangle(&mut target, [&a, &b, &c], Shade::Flat(Rgba::RED), DepthMode::test(100.0));
    assert!((target.depth(3, 3).unwrap() - 2.0).abs() < 1e-5);
}

// ============================================================================
// Depth modes
// ============================================================================

#[test]
fn test_depth_test_rejects_beyond_far() {
    let mut target = target(10);
    let (a, b, c) = (vertex(0.0, 0.0, 60.0), vertex(10.0, 0.0, 60.0), vertex(0.0, 10.0, 60.0));
    let written = fill_triangle(&mut target, [&a, &b, &c], Shade::Flat(Rgba::RED), DepthMode::test(50.0)).unwrap();
    assert_eq!(written, 0);
    assert!(target.depth_buffer().iter().all(|d| d.is_infinite()));
}

#[test]
fn test_overwrite_leaves_depth_untouched() {
    let mut target = target(10);
    let (a, b, c) = (vertex(0.0, 0.0, 5.0), vertex(10.0, 0.0, 5.0), vertex(0.0, 10.0, 5.0));
    fill_triangle(&mut target, [&a, &b, &c], Shade::Flat(Rgba::RED), DepthMode::Overwrite);
    assert!(target.depth_buffer().iter().all(|d| d.is_infinite()));
}

#[test]
fn test_nearer_triangle_wins() {
    let mut target = target(10);
    let far = [vertex(0.0, 0.0, 9.0), vertex(10.0, 0.0, 9.0), vertex(0.0, 10.0, 9.0)];
    let near = [vertex(0.0, 0.0, 3.0), vertex(10.0, 0.0, 3.0), vertex(0.0, 10.0, 3.0)];
    let mode = DepthMode::test(100.0);

    fill_triangle(&mut target, [&near[0], &near[1], &near[2]], Shade::Flat(Rgba::GREEN), mode);
    fill_triangle(&mut target, [&far[0], &far[1], &far[2]], Shade::Flat(Rgba::RED), mode);
    assert_eq!(target.pixel(1, 1), Some(Rgba::GREEN));
}

// ============================================================================
// Texturing
// ============================================================================

#[test]
fn test_textured_fill_samples_uvs() {
    let texture = Texture::checkerboard(2, 2, 1, Rgba::RED, Rgba::BLUE).unwrap();
    let mut target = target(10);
    let a = ScreenVertex { point: ScreenPoint::new(0.0, 0.0, 1.0), uv: Vec2::new(0.0, 0.0) };
    let b = ScreenVertex { point: ScreenPoint::new(20.0, 0.0, 1.0), uv: Vec2::new(2.0, 0.0) };
    let c = ScreenVertex { point: ScreenPoint::new(0.0, 20.0, 1.0), uv: Vec2::new(0.0, 2.0) };
    fill_triangle(&mut target, [&a, &b, &c], Shade::Textured(&texture), DepthMode::Overwrite);

    // uv = pixel / 10: top-left texel, then the one to its right
    assert_eq!(target.pixel(1, 1), Some(Rgba::RED));
    assert_eq!(target.pixel(7, 1), Some(Rgba::BLUE));
}

// ============================================================================
// Lines
// ============================================================================

#[test]
fn test_horizontal_line() {
    let mut target = target(10);
    let written = draw_line(&mut target, (Vec2::new(0.5, 2.5), 1.0), (Vec2::new(8.5, 2.5), 1.0), Rgba::WHITE, DepthMode::Overwrite);
    assert_eq!(written, 9);
    assert_eq!(target.pixel(0, 2), Some(Rgba::WHITE));
    assert_eq!(target.pixel(8, 2), Some(Rgba::WHITE));
    assert_eq!(target.pixel(9, 2), Some(Rgba::BLACK));
}

#[test]
fn test_offscreen_line_is_free() {
    let mut target = target(10);
    let written = draw_line(&mut target, (Vec2::new(-1e7, -50.0), 1.0), (Vec2::new(1e7, -50.0), 1.0), Rgba::WHITE, DepthMode::Overwrite);
    assert_eq!(written, 0);
}

#[test]
fn test_huge_line_is_clipped_to_texture() {
    let mut target = target(10);
    let written = draw_line(&mut target, (Vec2::new(-1e4, 4.5), 1.0), (Vec2::new(1e4, 4.5), 1.0), Rgba::WHITE, DepthMode::Overwrite);
    assert!((10..=12).contains(&written));
    assert!((0..10).all(|x| target.pixel(x, 4) == Some(Rgba::WHITE)));
}

#[test]
fn test_edge_bias_beats_own_face() {
    let mut target = target(10);
    let mode = DepthMode::test(100.0);
    let (a, b, c) = (vertex(0.0, 0.0, 5.0), vertex(10.0, 0.0, 5.0), vertex(0.0, 10.0, 5.0));
    fill_triangle(&mut target, [&a, &b, &c], Shade::Flat(Rgba::RED), mode);
    draw_line(&mut target, (Vec2::new(0.5, 0.5), 5.0), (Vec2::new(5.5, 0.5), 5.0), Rgba::WHITE, mode.for_edges());
    assert_eq!(target.pixel(3, 0), Some(Rgba::WHITE));
}

#[test]
fn test_clip_segment() {
    let min = Vec2::ZERO;
    let max = Vec2::splat(10.0);
    let (t0, t1) = clip_segment(Vec2::new(-10.0, 5.0), Vec2::new(20.0, 5.0), min, max).unwrap();
    assert!((t0 - 1.0 / 3.0).abs() < 1e-5);
    assert!((t1 - 2.0 / 3.0).abs() < 1e-5);
    assert!(clip_segment(Vec2::new(-5.0, -5.0), Vec2::new(-1.0, 20.0), min, max).is_none());
    assert_eq!(clip_segment(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), min, max), Some((0.0, 1.0)));
}
