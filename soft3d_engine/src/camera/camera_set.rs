/// CameraSet: sibling cameras with at most one active at a time.
///
/// Activating a camera through the set deactivates every other camera in
/// it. Cameras toggled directly through `get_mut` bypass that rule.

use slotmap::{new_key_type, SlotMap};
use crate::engine_debug;
use super::camera::Camera3D;

new_key_type! {
    /// Stable key for a camera registered in a [`CameraSet`]
    pub struct CameraKey;
}

#[derive(Debug, Default)]
pub struct CameraSet {
    cameras: SlotMap<CameraKey, Camera3D>,
}

impl CameraSet {
    pub fn new() -> Self {
        Self { cameras: SlotMap::with_key() }
    }

    /// Add a camera. If it is active, it takes over from the current one.
    pub fn insert(&mut self, camera: Camera3D) -> CameraKey {
        let active = camera.is_active();
        let key = self.cameras.insert(camera);
        if active {
            self.deactivate_others(key);
        }
        key
    }

    pub fn remove(&mut self, key: CameraKey) -> Option<Camera3D> {
        self.cameras.remove(key)
    }

    pub fn get(&self, key: CameraKey) -> Option<&Camera3D> {
        self.cameras.get(key)
    }

    pub fn get_mut(&mut self, key: CameraKey) -> Option<&mut Camera3D> {
        self.cameras.get_mut(key)
    }

    /// Make `key` the only active camera. Returns false if the key is invalid.
    pub fn activate(&mut self, key: CameraKey) -> bool {
        match self.cameras.get_mut(key) {
            Some(camera) => camera.set_active(true),
            None => return false,
        }
        self.deactivate_others(key);
        engine_debug!("soft3d::CameraSet", "Camera {:?} activated", key);
        true
    }

    /// Returns false if the key is invalid.
    pub fn deactivate(&mut self, key: CameraKey) -> bool {
        match self.cameras.get_mut(key) {
            Some(camera) => {
                camera.set_active(false);
                true
            }
            None => false,
        }
    }

    /// Key of the first active camera
    pub fn active_key(&self) -> Option<CameraKey> {
        self.cameras
            .iter()
            .find(|(_, camera)| camera.is_active())
            .map(|(key, _)| key)
    }

    pub fn active_camera(&self) -> Option<&Camera3D> {
        self.active_key().and_then(|key| self.cameras.get(key))
    }

    pub fn active_camera_mut(&mut self) -> Option<&mut Camera3D> {
        let key = self.active_key()?;
        self.cameras.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CameraKey, &Camera3D)> {
        self.cameras.iter()
    }

    fn deactivate_others(&mut self, key: CameraKey) {
        for (other, camera) in self.cameras.iter_mut() {
            if other != key {
                camera.set_active(false);
            }
        }
    }
}

#[cfg(test)]
#[path = "camera_set_tests.rs"]
mod tests;
