/// Scene: the set of mesh instances a camera renders.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. The camera never
/// looks the scene up itself; callers hand it `providers()` each frame.

use slotmap::{new_key_type, SlotMap};
use crate::engine_debug;
use super::mesh::MeshInstance;
use super::transform::{EntityTransform, TransformQuery};

new_key_type! {
    /// Stable key for a mesh registered in a [`Scene`]
    pub struct MeshKey;
}

/// Anything the camera can draw: a mesh plus the world transform of the
/// entity that owns it.
pub trait MeshProvider {
    fn mesh(&self) -> &MeshInstance;

    fn world_transform(&self) -> &dyn TransformQuery;

    /// Inactive providers are skipped by every pipeline
    fn is_active(&self) -> bool {
        true
    }
}

/// A mesh owned by the scene, attached to a plain-data entity transform.
#[derive(Debug, Clone)]
pub struct SceneMesh {
    pub mesh: MeshInstance,
    pub entity: EntityTransform,
    pub active: bool,
}

impl SceneMesh {
    pub fn new(mesh: MeshInstance, entity: EntityTransform) -> Self {
        Self { mesh, entity, active: true }
    }
}

impl MeshProvider for SceneMesh {
    fn mesh(&self) -> &MeshInstance {
        &self.mesh
    }

    fn world_transform(&self) -> &dyn TransformQuery {
        &self.entity
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Registry of scene meshes.
#[derive(Debug, Default)]
pub struct Scene {
    meshes: SlotMap<MeshKey, SceneMesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self { meshes: SlotMap::with_key() }
    }

    /// Add an active mesh owned by `entity`
    ///
    /// Returns a stable key that remains valid until the mesh is removed.
    pub fn add(&mut self, mesh: MeshInstance, entity: EntityTransform) -> MeshKey {
        let key = self.meshes.insert(SceneMesh::new(mesh, entity));
        engine_debug!("soft3d::Scene", "Added mesh {:?} ({} meshes)", key, self.meshes.len());
        key
    }

    /// Remove a mesh. Returns it, or `None` if the key is invalid.
    pub fn remove(&mut self, key: MeshKey) -> Option<SceneMesh> {
        let removed = self.meshes.remove(key);
        if removed.is_some() {
            engine_debug!("soft3d::Scene", "Removed mesh {:?}", key);
        }
        removed
    }

    pub fn get(&self, key: MeshKey) -> Option<&SceneMesh> {
        self.meshes.get(key)
    }

    pub fn get_mut(&mut self, key: MeshKey) -> Option<&mut SceneMesh> {
        self.meshes.get_mut(key)
    }

    /// Enable or disable a mesh. Returns false if the key is invalid.
    pub fn set_active(&mut self, key: MeshKey, active: bool) -> bool {
        match self.meshes.get_mut(key) {
            Some(entry) => {
                entry.active = active;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Iterate over all meshes (key, mesh), active or not
    pub fn iter(&self) -> impl Iterator<Item = (MeshKey, &SceneMesh)> {
        self.meshes.iter()
    }

    /// Active meshes, in the form `Camera3D::render3d` consumes
    pub fn providers(&self) -> Vec<&dyn MeshProvider> {
        self.meshes
            .values()
            .filter(|entry| entry.active)
            .map(|entry| entry as &dyn MeshProvider)
            .collect()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
