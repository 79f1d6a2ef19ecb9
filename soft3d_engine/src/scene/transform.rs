//! World transform contract between the scene graph and the camera.
//!
//! Entities are 2D: they expose a planar position, a rotation about the view
//! axis and a planar scale, plus a separate depth value. The camera and the
//! meshes add the third axis themselves through their local offsets.

use glam::{Mat3, Vec2, Vec3};
use crate::math::euler_rotation;

/// Read-only world transform of the entity owning a camera or a mesh.
///
/// Queried once per mesh instance per frame; implementations are expected to
/// answer in O(1) (cached by the scene graph).
pub trait TransformQuery {
    /// Planar world position
    fn world_position(&self) -> Vec2;

    /// World rotation about the depth axis, in degrees
    fn world_rotation(&self) -> f32;

    /// Planar world scale
    fn world_scale(&self) -> Vec2;

    /// Depth (world Z) of the entity
    fn world_depth(&self) -> f32 {
        0.0
    }
}

/// Plain-data entity transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityTransform {
    pub position: Vec2,
    /// Degrees
    pub rotation: f32,
    pub scale: Vec2,
    pub depth: f32,
}

impl EntityTransform {
    pub const IDENTITY: EntityTransform = EntityTransform {
        position: Vec2::ZERO,
        rotation: 0.0,
        scale: Vec2::ONE,
        depth: 0.0,
    };

    /// Identity transform placed at `position`
    pub fn at(position: Vec2) -> Self {
        Self { position, ..Self::IDENTITY }
    }
}

impl Default for EntityTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformQuery for EntityTransform {
    fn world_position(&self) -> Vec2 {
        self.position
    }

    fn world_rotation(&self) -> f32 {
        self.rotation
    }

    fn world_scale(&self) -> Vec2 {
        self.scale
    }

    fn world_depth(&self) -> f32 {
        self.depth
    }
}

/// 3D offset of a mesh relative to its owning entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    pub position: Vec3,
    /// Degrees: x = roll, y = pitch, z = yaw
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl LocalTransform {
    pub const IDENTITY: LocalTransform = LocalTransform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Identity transform placed at `position`
    pub fn at(position: Vec3) -> Self {
        Self { position, ..Self::IDENTITY }
    }
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Object-to-world transform resolved once per mesh per frame.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTransform {
    scale: Vec3,
    rotation: Mat3,
    translation: Vec3,
}

impl ResolvedTransform {
    /// Compose a mesh's local transform with its entity's world transform.
    pub fn resolve(local: &LocalTransform, entity: &dyn TransformQuery) -> Self {
        let entity_position = entity.world_position();
        let entity_scale = entity.world_scale();

        Self {
            scale: local.scale * Vec3::new(entity_scale.x, entity_scale.y, 1.0),
            rotation: euler_rotation(
                local.rotation.x,
                local.rotation.y,
                entity.world_rotation() + local.rotation.z,
            ),
            translation: Vec3::new(
                entity_position.x + local.position.x,
                entity_position.y + local.position.y,
                entity.world_depth() + local.position.z,
            ),
        }
    }

    /// Object-space point to world space: scale, rotate, translate.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.rotation * (p * self.scale) + self.translation
    }
}
