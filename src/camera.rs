use glam::{Mat4, Vec3};

/// View and projection state for the viewer camera.
///
/// The fly camera controller rewrites the view matrix every frame it is
/// enabled; the renderer only ever reads the combined view-projection.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    view: Mat4,
    projection: Mat4,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }

    /// Set the view matrix from an eye position looking at a target (world up +Y)
    pub fn set_view_matrix(&mut self, eye: Vec3, target: Vec3) {
        self.view = Mat4::look_at_rh(eye, target, Vec3::Y);
    }

    /// Set a perspective projection (vertical fov in radians)
    pub fn set_perspective(&mut self, fov_y: f32, aspect_ratio: f32, near: f32, far: f32) {
        self.projection = Mat4::perspective_rh(fov_y, aspect_ratio, near, far);
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
