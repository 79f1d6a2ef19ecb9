/// Camera-space transform: world point to camera-local space.
///
/// Camera space has +X forward (depth), +Y horizontal (screen right) and
/// +Z vertical (screen up).

use glam::{Mat3, Vec3};
use crate::math::inverse_euler_rotation;
use crate::scene::TransformQuery;

/// World-to-camera transform for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    position: Vec3,
    world_to_camera: Mat3,
}

impl CameraTransform {
    /// Resolve the camera placement from its offsets and owning entity.
    ///
    /// The entity is planar: it contributes X/Y and yaw only. The camera
    /// offset supplies the height (Z), the pitch (rotation.y) and the roll
    /// (rotation.x). All angles are in degrees.
    pub fn new(offset: Vec3, rotation: Vec3, owner: &dyn TransformQuery) -> Self {
        let owner_position = owner.world_position();
        let yaw = owner.world_rotation() + rotation.z;

        Self {
            position: Vec3::new(
                owner_position.x + offset.x,
                owner_position.y + offset.y,
                offset.z,
            ),
            world_to_camera: inverse_euler_rotation(rotation.x, rotation.y, yaw),
        }
    }

    /// Camera world position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Rotation applied after translating by -position
    pub fn world_to_camera(&self) -> Mat3 {
        self.world_to_camera
    }

    /// Translate by -position, then un-yaw, un-pitch, un-roll.
    #[inline]
    pub fn to_camera_space(&self, world: Vec3) -> Vec3 {
        self.world_to_camera * (world - self.position)
    }
}

#[cfg(test)]
#[path = "camera_space_tests.rs"]
mod tests;
