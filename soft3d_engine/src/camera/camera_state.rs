//! Serializable camera state (the JSON form of a `Camera3D`)
//!
//! Keys are camelCase. Every field is optional when decoding and falls back
//! to the camera default.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use crate::color::Rgba;
use crate::render::RenderingMethod;

pub const DEFAULT_FIELD_OF_VIEW: f32 = 60.0;
pub const DEFAULT_NEAR_PLANE: f32 = 0.1;
pub const DEFAULT_FAR_PLANE: f32 = 1000.0;
pub const DEFAULT_TEXTURE_WIDTH: u32 = 320;
pub const DEFAULT_TEXTURE_HEIGHT: u32 = 240;

/// `{ "x": .., "y": .., "z": .. }`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector3State {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for Vector3State {
    fn from(v: Vec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl From<Vector3State> for Vec3 {
    fn from(v: Vector3State) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraState {
    pub position: Vector3State,
    /// Degrees: x = roll, y = pitch, z = yaw
    pub rotation: Vector3State,
    pub field_of_view: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    pub is_active: bool,
    pub background_color: Rgba,
    pub render_texture_width: u32,
    pub render_texture_height: u32,
    pub rendering_method: RenderingMethod,
    pub enable_backface_culling: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vector3State::default(),
            rotation: Vector3State::default(),
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
            is_active: true,
            background_color: Rgba::BLACK,
            render_texture_width: DEFAULT_TEXTURE_WIDTH,
            render_texture_height: DEFAULT_TEXTURE_HEIGHT,
            rendering_method: RenderingMethod::default(),
            enable_backface_culling: false,
        }
    }
}

#[cfg(test)]
#[path = "camera_state_tests.rs"]
mod tests;
