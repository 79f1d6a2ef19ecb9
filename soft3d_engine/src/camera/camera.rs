//! Camera3D: software 3D camera attached to a 2D entity.
//!
//! The camera owns its render texture. Each frame, `render3d` clears it to
//! the background colour and hands it to the pipeline selected by the
//! rendering method. The rendered image can then be read back or blitted
//! onto any `Surface`.

use glam::Vec3;
use crate::color::Rgba;
use crate::error::Result;
use crate::render::{RenderStats, RenderingMethod};
use crate::scene::{MeshProvider, TransformQuery};
use crate::target::{RenderTexture, Surface};
use crate::{engine_bail, engine_debug, engine_err, engine_trace, engine_warn};
use super::camera_space::CameraTransform;
use super::camera_state::{
    CameraState, DEFAULT_FAR_PLANE, DEFAULT_FIELD_OF_VIEW, DEFAULT_NEAR_PLANE,
    DEFAULT_TEXTURE_HEIGHT, DEFAULT_TEXTURE_WIDTH,
};
use super::projection::{Projection, ScreenPoint, MIN_PROJECTION_DEPTH};
use super::render_view::RenderView;

const SOURCE: &str = "soft3d::Camera3D";

/// Field of view bounds, degrees
pub const MIN_FIELD_OF_VIEW: f32 = 1.0;
pub const MAX_FIELD_OF_VIEW: f32 = 179.0;

#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Offset from the owning entity
    position: Vec3,
    /// Degrees: x = roll, y = pitch, z = yaw offset
    rotation: Vec3,
    field_of_view: f32,
    near_plane: f32,
    far_plane: f32,
    is_active: bool,
    background_color: Rgba,
    texture_width: u32,
    texture_height: u32,
    /// `None` once released
    render_texture: Option<RenderTexture>,
    rendering_method: RenderingMethod,
    enable_backface_culling: bool,
}

impl Camera3D {
    /// Camera with default parameters and a 320x240 render texture.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
            is_active: true,
            background_color: Rgba::BLACK,
            texture_width: DEFAULT_TEXTURE_WIDTH,
            texture_height: DEFAULT_TEXTURE_HEIGHT,
            render_texture: RenderTexture::new(DEFAULT_TEXTURE_WIDTH, DEFAULT_TEXTURE_HEIGHT).ok(),
            rendering_method: RenderingMethod::default(),
            enable_backface_culling: false,
        }
    }

    /// Camera with default parameters and a custom render texture size.
    pub fn with_render_texture_size(width: u32, height: u32) -> Result<Self> {
        let mut camera = Self::new();
        camera.set_render_texture_size(width, height)?;
        Ok(camera)
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn background_color(&self) -> Rgba {
        self.background_color
    }

    /// Configured render texture size, kept even while the texture is released
    pub fn render_texture_size(&self) -> (u32, u32) {
        (self.texture_width, self.texture_height)
    }

    pub fn rendering_method(&self) -> RenderingMethod {
        self.rendering_method
    }

    pub fn backface_culling(&self) -> bool {
        self.enable_backface_culling
    }

    pub fn has_render_texture(&self) -> bool {
        self.render_texture.is_some()
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    /// Set the vertical field of view, clamped to [1, 179] degrees.
    pub fn set_field_of_view(&mut self, degrees: f32) {
        self.field_of_view = if degrees.is_nan() {
            DEFAULT_FIELD_OF_VIEW
        } else {
            degrees.clamp(MIN_FIELD_OF_VIEW, MAX_FIELD_OF_VIEW)
        };
    }

    /// # Errors
    ///
    /// `InvalidParameter` unless `0 < near < far`.
    pub fn set_near_plane(&mut self, near: f32) -> Result<()> {
        self.set_clip_planes(near, self.far_plane)
    }

    /// # Errors
    ///
    /// `InvalidParameter` unless `near < far`.
    pub fn set_far_plane(&mut self, far: f32) -> Result<()> {
        self.set_clip_planes(self.near_plane, far)
    }

    /// Set both clip planes at once; nothing changes on error.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) -> Result<()> {
        validate_clip_planes(near, far)?;
        self.near_plane = near;
        self.far_plane = far;
        Ok(())
    }

    pub fn set_active(&mut self, active: bool) {
        if active && !self.is_active && self.render_texture.is_none() {
            engine_warn!(SOURCE, "Camera activated without a render texture; nothing will render until it is resized");
        }
        self.is_active = active;
    }

    pub fn set_background_color(&mut self, color: Rgba) {
        self.background_color = color;
    }

    /// Reallocate the render texture. Old contents are discarded.
    ///
    /// Also re-creates a released texture.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if either dimension is zero; the camera is unchanged.
    pub fn set_render_texture_size(&mut self, width: u32, height: u32) -> Result<()> {
        let texture = RenderTexture::new(width, height)?;
        self.texture_width = width;
        self.texture_height = height;
        self.render_texture = Some(texture);
        engine_debug!(SOURCE, "Render texture allocated at {}x{}", width, height);
        Ok(())
    }

    /// Select the pipeline used from the next `render3d` on.
    pub fn set_rendering_method(&mut self, method: RenderingMethod) {
        if method != self.rendering_method {
            engine_debug!(SOURCE, "Rendering method {} -> {}", self.rendering_method, method);
        }
        self.rendering_method = method;
    }

    pub fn set_backface_culling(&mut self, enabled: bool) {
        self.enable_backface_culling = enabled;
    }

    // ===== PROJECTION =====

    /// Per-frame snapshot of this camera attached to `owner`.
    pub fn view(&self, owner: &dyn TransformQuery) -> RenderView {
        RenderView::new(
            CameraTransform::new(self.position, self.rotation, owner),
            self.projection(),
            self.enable_backface_culling,
        )
    }

    pub fn projection(&self) -> Projection {
        Projection::new(
            self.field_of_view,
            self.near_plane,
            self.far_plane,
            self.texture_width,
            self.texture_height,
        )
    }

    /// Project a world point to render texture pixels.
    ///
    /// `None` when the point is behind the camera or outside [near, far].
    pub fn project_point(&self, owner: &dyn TransformQuery, world: Vec3) -> Option<ScreenPoint> {
        let view = self.view(owner);
        view.projection().project(view.transform().to_camera_space(world))
    }

    /// Whether a world point projects inside the render texture.
    pub fn is_point_visible(&self, owner: &dyn TransformQuery, world: Vec3) -> bool {
        self.project_point(owner, world)
            .is_some_and(|point| self.projection().contains(&point))
    }

    // ===== RENDERING =====

    /// Clear the colour buffer to the background and the depth buffer to +inf.
    pub fn clear_render_texture(&mut self) {
        if let Some(texture) = self.render_texture.as_mut() {
            texture.clear(self.background_color);
        }
    }

    /// Render one frame of `meshes` as seen from this camera on `owner`.
    ///
    /// No-op returning `None` when the camera is inactive or its render
    /// texture has been released.
    pub fn render3d(
        &mut self,
        owner: &dyn TransformQuery,
        meshes: &[&dyn MeshProvider],
    ) -> Option<RenderStats> {
        if !self.is_active {
            return None;
        }
        let view = self.view(owner);
        let texture = self.render_texture.as_mut()?;

        texture.clear(self.background_color);
        let stats = self.rendering_method.pipeline().render(&view, meshes, texture);

        engine_trace!(
            SOURCE,
            "{} frame: {} faces submitted, {} drawn, {} culled, {} clipped, {} skipped, {} pixels",
            self.rendering_method,
            stats.faces_submitted,
            stats.faces_drawn,
            stats.faces_culled,
            stats.faces_clipped,
            stats.faces_skipped,
            stats.pixels_written,
        );
        Some(stats)
    }

    /// The last rendered image, or `None` once released
    pub fn rendered_texture(&self) -> Option<&RenderTexture> {
        self.render_texture.as_ref()
    }

    /// Blit the rendered image into `surface` at (x, y), scaled to
    /// `width` x `height`. Does nothing without a render texture.
    pub fn draw_rendered_texture(
        &self,
        surface: &mut dyn Surface,
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    ) {
        if let Some(texture) = &self.render_texture {
            texture.blit_to(surface, x, y, width, height);
        }
    }

    /// Free the render texture. The camera renders nothing until
    /// `set_render_texture_size` is called again.
    pub fn release_render_texture(&mut self) {
        if self.render_texture.take().is_some() {
            engine_debug!(SOURCE, "Render texture released");
        }
    }

    // ===== STATE =====

    pub fn to_state(&self) -> CameraState {
        CameraState {
            position: self.position.into(),
            rotation: self.rotation.into(),
            field_of_view: self.field_of_view,
            near_plane: self.near_plane,
            far_plane: self.far_plane,
            is_active: self.is_active,
            background_color: self.background_color,
            render_texture_width: self.texture_width,
            render_texture_height: self.texture_height,
            rendering_method: self.rendering_method,
            enable_backface_culling: self.enable_backface_culling,
        }
    }

    /// Build a camera from a decoded state, validating it.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for invalid clip planes or a zero texture size.
    pub fn from_state(state: &CameraState) -> Result<Self> {
        validate_clip_planes(state.near_plane, state.far_plane)?;

        let mut camera = Self::with_render_texture_size(
            state.render_texture_width,
            state.render_texture_height,
        )?;
        camera.position = state.position.into();
        camera.rotation = state.rotation.into();
        camera.set_field_of_view(state.field_of_view);
        camera.near_plane = state.near_plane;
        camera.far_plane = state.far_plane;
        camera.is_active = state.is_active;
        camera.background_color = state.background_color;
        camera.rendering_method = state.rendering_method;
        camera.enable_backface_culling = state.enable_backface_culling;
        Ok(camera)
    }

    /// Pretty-printed JSON state.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_state())
            .map_err(|err| engine_err!(SerializationError => SOURCE, "camera state encode failed: {}", err))
    }

    /// # Errors
    ///
    /// `SerializationError` for malformed JSON, `InvalidParameter` for
    /// out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let state: CameraState = serde_json::from_str(json)
            .map_err(|err| engine_err!(SerializationError => SOURCE, "camera state decode failed: {}", err))?;
        Self::from_state(&state)
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_clip_planes(near: f32, far: f32) -> Result<()> {
    if !near.is_finite() || near <= MIN_PROJECTION_DEPTH {
        engine_bail!(SOURCE, "near plane must be greater than {}, got {}", MIN_PROJECTION_DEPTH, near);
    }
    if far.is_nan() || near >= far {
        engine_bail!(SOURCE, "near plane ({}) must be closer than far plane ({})", near, far);
    }
    Ok(())
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
