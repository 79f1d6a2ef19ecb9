//! Mesh instance: the geometry contract the camera consumes each frame.
//!
//! A mesh is an indexed polygon soup in object space. Faces are ordered
//! lists of at least three vertex indices, planar, wound counter-clockwise
//! (right-hand rule) around their outward normal.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use bitflags::bitflags;
use glam::{Vec2, Vec3};
use crate::color::Rgba;
use crate::engine_err;
use crate::error::{Error, Result};
use crate::resource::Texture;
use super::transform::LocalTransform;

bitflags! {
    /// Which parts of a face are drawn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderMode: u8 {
        /// Stroke face edges with the wireframe colour
        const WIREFRAME = 0b01;
        /// Fill faces with the face colour or texture
        const SOLID = 0b10;
        /// Fill, then stroke
        const BOTH = Self::WIREFRAME.bits() | Self::SOLID.bits();
    }
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        if *self == RenderMode::BOTH {
            "both"
        } else if self.contains(RenderMode::WIREFRAME) {
            "wireframe"
        } else if self.contains(RenderMode::SOLID) {
            "solid"
        } else {
            "none"
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wireframe" => Ok(RenderMode::WIREFRAME),
            "solid" => Ok(RenderMode::SOLID),
            "both" => Ok(RenderMode::BOTH),
            other => Err(engine_err!("soft3d::RenderMode", "unknown render mode '{}'", other)),
        }
    }
}

/// One mesh instance: geometry, appearance and local placement.
#[derive(Debug, Clone)]
pub struct MeshInstance {
    /// Object-space vertex positions
    pub vertices: Vec<Vec3>,
    /// Faces as vertex index lists
    pub faces: Vec<Vec<usize>>,
    pub render_mode: RenderMode,
    pub face_color: Rgba,
    pub wireframe_color: Rgba,
    pub texture: Option<Arc<Texture>>,
    /// Per-vertex UVs, indexed like `vertices`
    pub uv_coordinates: Option<Vec<Vec2>>,
    /// Offset relative to the owning entity
    pub transform: LocalTransform,
}

impl MeshInstance {
    /// Solid white mesh with a black wireframe colour and identity transform.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Vec<usize>>) -> Self {
        Self {
            vertices,
            faces,
            render_mode: RenderMode::SOLID,
            face_color: Rgba::WHITE,
            wireframe_color: Rgba::BLACK,
            texture: None,
            uv_coordinates: None,
            transform: LocalTransform::IDENTITY,
        }
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    pub fn with_face_color(mut self, color: Rgba) -> Self {
        self.face_color = color;
        self
    }

    pub fn with_wireframe_color(mut self, color: Rgba) -> Self {
        self.wireframe_color = color;
        self
    }

    pub fn with_transform(mut self, transform: LocalTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Attach a texture. Faces are textured only where every vertex has a UV.
    pub fn with_texture(mut self, texture: Arc<Texture>) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_uv_coordinates(mut self, uvs: Vec<Vec2>) -> Self {
        self.uv_coordinates = Some(uvs);
        self
    }

    /// A face is drawable when it has >= 3 indices, all in range.
    pub fn is_face_valid(&self, face: &[usize]) -> bool {
        face.len() >= 3 && face.iter().all(|&i| i < self.vertices.len())
    }

    /// UVs of a face, if the mesh is textured and every index has a UV.
    pub fn face_uvs(&self, face: &[usize]) -> Option<Vec<Vec2>> {
        self.texture.as_ref()?;
        let uvs = self.uv_coordinates.as_ref()?;
        face.iter().map(|&i| uvs.get(i).copied()).collect()
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
