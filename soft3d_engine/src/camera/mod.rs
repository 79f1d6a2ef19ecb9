//! Camera module: software 3D camera, its frame math and its state.
//!
//! The camera math runs in three steps shared by every pipeline: world to
//! camera space, near-plane clipping, perspective projection.

mod camera;
mod camera_set;
mod camera_space;
mod camera_state;
mod clipper;
mod projection;
mod render_view;

pub use camera::{Camera3D, MAX_FIELD_OF_VIEW, MIN_FIELD_OF_VIEW};
pub use camera_set::{CameraKey, CameraSet};
pub use camera_space::CameraTransform;
pub use camera_state::{
    CameraState, Vector3State,
    DEFAULT_FAR_PLANE, DEFAULT_FIELD_OF_VIEW, DEFAULT_NEAR_PLANE,
    DEFAULT_TEXTURE_HEIGHT, DEFAULT_TEXTURE_WIDTH,
};
pub use clipper::{clip_near, ClipVertex, TexturedVertex};
pub use projection::{Projection, ScreenPoint, MIN_PROJECTION_DEPTH};
pub use render_view::RenderView;
