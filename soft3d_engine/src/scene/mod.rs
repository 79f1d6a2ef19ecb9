//! Scene module
//!
//! Mesh data contract, entity transforms, primitive generators and the mesh
//! registry cameras draw from.

mod mesh;
mod primitives;
mod scene;
mod transform;

pub use mesh::{MeshInstance, RenderMode};
pub use primitives::MIN_SPHERE_SEGMENTS;
pub use scene::{MeshKey, MeshProvider, Scene, SceneMesh};
pub use transform::{EntityTransform, LocalTransform, ResolvedTransform, TransformQuery};
