//! Shared pipeline front end: camera-space faces and their projection.

use glam::{Vec2, Vec3};
use crate::camera::{clip_near, RenderView, ScreenPoint, TexturedVertex};
use crate::math::signed_area2;
use crate::scene::{MeshInstance, MeshProvider, ResolvedTransform};
use super::stats::RenderStats;

/// One face of one mesh in camera space.
pub(crate) struct CameraFace<'a> {
    pub mesh: &'a MeshInstance,
    pub vertices: Vec<TexturedVertex>,
    /// The mesh has a texture and every vertex of this face has a UV
    pub textured: bool,
}

/// A projected polygon vertex.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScreenVertex {
    pub point: ScreenPoint,
    pub uv: Vec2,
}

/// Transform every valid face of the active meshes to camera space.
///
/// Vertices are transformed once per mesh, faces with fewer than three
/// indices or an out-of-range index are counted and skipped.
pub(crate) fn collect_faces<'a>(
    view: &RenderView,
    meshes: &[&'a dyn MeshProvider],
    stats: &mut RenderStats,
) -> Vec<CameraFace<'a>> {
    let mut faces = Vec::new();

    for &provider in meshes {
        if !provider.is_active() {
            continue;
        }
        let mesh = provider.mesh();
        let world = ResolvedTransform::resolve(&mesh.transform, provider.world_transform());
        let camera_vertices: Vec<Vec3> = mesh
            .vertices
            .iter()
            .map(|&v| view.transform().to_camera_space(world.transform_point(v)))
            .collect();

        for face in &mesh.faces {
            stats.faces_submitted += 1;
            if !mesh.is_face_valid(face) {
                stats.faces_skipped += 1;
                continue;
            }

            let uvs = mesh.face_uvs(face);
            let vertices = face
                .iter()
                .enumerate()
                .map(|(i, &index)| TexturedVertex {
                    position: camera_vertices[index],
                    uv: uvs.as_ref().map_or(Vec2::ZERO, |uvs| uvs[i]),
                })
                .collect();

            faces.push(CameraFace {
                mesh,
                vertices,
                textured: uvs.is_some(),
            });
        }
    }

    faces
}

/// Clip a face against the near plane, project it and apply back-face
/// culling.
///
/// Returns `None` (and bumps the matching counter) when nothing drawable is
/// left.
pub(crate) fn project_face(
    face: &CameraFace<'_>,
    view: &RenderView,
    stats: &mut RenderStats,
) -> Option<Vec<ScreenVertex>> {
    let projection = view.projection();
    let clipped = clip_near(&face.vertices, projection.near());
    if clipped.len() < 3 {
        stats.faces_clipped += 1;
        return None;
    }

    let mut polygon = Vec::with_capacity(clipped.len());
    for vertex in &clipped {
        match projection.project_unclipped(vertex.position) {
            Some(point) => polygon.push(ScreenVertex { point, uv: vertex.uv }),
            None => {
                stats.faces_clipped += 1;
                return None;
            }
        }
    }

    if view.backface_culling() && is_back_facing(&polygon) {
        stats.faces_culled += 1;
        return None;
    }

    Some(polygon)
}

/// Screen-space winding test on the first three vertices.
///
/// Front faces (outward normal toward the camera) have a positive signed
/// area with the screen Y axis pointing down.
pub(crate) fn is_back_facing(polygon: &[ScreenVertex]) -> bool {
    match polygon {
        [a, b, c, ..] => signed_area2(a.point.xy(), b.point.xy(), c.point.xy()) < 0.0,
        _ => false,
    }
}

/// Fan triangulation `(0, i, i + 1)` of a convex polygon.
pub(crate) fn fan<T>(polygon: &[T]) -> impl Iterator<Item = [&T; 3]> {
    (1..polygon.len().saturating_sub(1)).map(move |i| [&polygon[0], &polygon[i], &polygon[i + 1]])
}

#[cfg(test)]
#[path = "faces_tests.rs"]
mod tests;
