//! Axis rotations in degrees.
//!
//! All rotations are right-handed about their axis (`glam::Mat3::from_rotation_*`).
//! An object is oriented by rolling about X, then pitching about Y, then
//! yawing about Z. The camera undoes that in the reverse order: Z, then Y,
//! then X. The order is not commutative and must not be changed.

use glam::{Mat3, Vec3};

/// Rotate `p` about the X axis by `degrees`.
pub fn rotate_x(p: Vec3, degrees: f32) -> Vec3 {
    Mat3::from_rotation_x(degrees.to_radians()) * p
}

/// Rotate `p` about the Y axis by `degrees`.
pub fn rotate_y(p: Vec3, degrees: f32) -> Vec3 {
    Mat3::from_rotation_y(degrees.to_radians()) * p
}

/// Rotate `p` about the Z axis by `degrees`.
pub fn rotate_z(p: Vec3, degrees: f32) -> Vec3 {
    Mat3::from_rotation_z(degrees.to_radians()) * p
}

/// Object orientation: `Rz(yaw) * Ry(pitch) * Rx(roll)`.
pub fn euler_rotation(roll: f32, pitch: f32, yaw: f32) -> Mat3 {
    Mat3::from_rotation_z(yaw.to_radians())
        * Mat3::from_rotation_y(pitch.to_radians())
        * Mat3::from_rotation_x(roll.to_radians())
}

/// Inverse of [`euler_rotation`]: un-yaw, then un-pitch, then un-roll.
pub fn inverse_euler_rotation(roll: f32, pitch: f32, yaw: f32) -> Mat3 {
    Mat3::from_rotation_x(-roll.to_radians())
        * Mat3::from_rotation_y(-pitch.to_radians())
        * Mat3::from_rotation_z(-yaw.to_radians())
}
