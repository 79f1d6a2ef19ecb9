//! Tests for RenderTexture
//!
//! Allocation, clearing, depth-tested writes and blitting.

use super::*;
use crate::error::Error;

// ============================================================================
// Allocation
// ============================================================================

#[test]
fn test_new_allocates_matching_buffers() {
    let rt = RenderTexture::new(8, 4).unwrap();
    assert_eq!(rt.width(), 8);
    assert_eq!(rt.height(), 4);
    assert_eq!(rt.pixels().len(), 32);
    assert_eq!(rt.depth_buffer().len(), 32);
    assert_eq!(rt.as_bytes().len(), 32 * 4);
}

#[test]
fn test_new_zero_size_fails() {
    assert!(matches!(RenderTexture::new(0, 10), Err(Error::InvalidParameter(_))));
    assert!(matches!(RenderTexture::new(10, 0), Err(Error::InvalidParameter(_))));
}

#[test]
fn test_resize_discards_contents() {
    let mut rt = RenderTexture::new(4, 4).unwrap();
    rt.clear(Rgba::RED);
    rt.write_depth_tested(1, 1, 5.0, Rgba::BLUE);

    rt.resize(6, 3).unwrap();

    assert_eq!(rt.pixels().len(), 18);
    assert_eq!(rt.depth_buffer().len(), 18);
    assert!(rt.pixels().iter().all(|&p| p == Rgba::TRANSPARENT));
    assert!(rt.depth_buffer().iter().all(|d| *d == f32::INFINITY));
}

#[test]
fn test_resize_to_zero_keeps_old_texture() {
    let mut rt = RenderTexture::new(4, 4).unwrap();
    assert!(rt.resize(0, 4).is_err());
    assert_eq!(rt.width(), 4);
}

// ============================================================================
// Clear and writes
// ============================================================================

#[test]
fn test_clear_resets_depth_to_infinity() {
    let mut rt = RenderTexture::new(3, 3).unwrap();
    rt.write_depth_tested(0, 0, 1.0, Rgba::RED);
    rt.write_depth_tested(2, 2, 2.0, Rgba::RED);

    rt.clear(Rgba::BLACK);

    assert!(rt.depth_buffer().iter().all(|d| d.is_infinite() && *d > 0.0));
    assert!(rt.pixels().iter().all(|&p| p == Rgba::BLACK));
}

#[test]
fn test_depth_test_keeps_nearest() {
    let mut rt = RenderTexture::new(2, 2).unwrap();
    assert!(rt.write_depth_tested(1, 0, 10.0, Rgba::RED));
    assert!(rt.write_depth_tested(1, 0, 5.0, Rgba::GREEN));
    assert!(!rt.write_depth_tested(1, 0, 7.0, Rgba::BLUE));

    assert_eq!(rt.pixel(1, 0), Some(Rgba::GREEN));
    assert_eq!(rt.depth(1, 0), Some(5.0));
}

#[test]
fn test_out_of_bounds_writes_are_ignored() {
    let mut rt = RenderTexture::new(2, 2).unwrap();
    assert!(!rt.set_pixel(-1, 0, Rgba::RED));
    assert!(!rt.set_pixel(2, 0, Rgba::RED));
    assert!(!rt.write_depth_tested(0, 5, 1.0, Rgba::RED));
    assert!(rt.pixels().iter().all(|&p| p == Rgba::TRANSPARENT));
    assert_eq!(rt.pixel(2, 2), None);
}

// ============================================================================
// Blit
// ============================================================================

#[test]
fn test_blit_scales_nearest_neighbour() {
    let mut src = RenderTexture::new(2, 1).unwrap();
    src.set_pixel(0, 0, Rgba::RED);
    src.set_pixel(1, 0, Rgba::BLUE);

    let mut dst = RenderTexture::new(4, 2).unwrap();
    src.blit_to(&mut dst, 0, 0, 4, 2);

    for y in 0..2 {
        assert_eq!(dst.pixel(0, y), Some(Rgba::RED));
        assert_eq!(dst.pixel(1, y), Some(Rgba::RED));
        assert_eq!(dst.pixel(2, y), Some(Rgba::BLUE));
        assert_eq!(dst.pixel(3, y), Some(Rgba::BLUE));
    }
}

#[test]
fn test_blit_clips_to_surface() {
    let mut src = RenderTexture::new(2, 2).unwrap();
    src.clear(Rgba::GREEN);

    let mut dst = RenderTexture::new(3, 3).unwrap();
    src.blit_to(&mut dst, 2, -1, 2, 2);

    assert_eq!(dst.pixel(2, 0), Some(Rgba::GREEN));
    assert_eq!(dst.pixel(1, 0), Some(Rgba::TRANSPARENT));
    assert_eq!(dst.pixel(2, 1), Some(Rgba::TRANSPARENT));
}
