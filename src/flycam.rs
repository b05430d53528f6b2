use glam::{Mat3, Vec2, Vec3};

use crate::camera::Camera;
use crate::controller::{Button, Controller};
use crate::window::WindowContext;

pub const TRANSLATION_SPEED: f32 = 20.0;
pub const ROTATION_SPEED: f32 = 0.5;

/// First-person fly camera controller.
///
/// Space toggles control of the camera: while enabled the cursor is hidden,
/// WASD translates along the view basis (Shift doubles the speed) and mouse
/// movement rotates the view. While disabled the controller leaves the camera
/// completely untouched.
pub struct FlyCamera {
    position: Vec3,
    translation_speed: f32,
    rotation_speed: f32,
    enabled: bool,
    /// Toggle key state from the previous update, for rising-edge detection
    toggle_was_down: bool,
    /// Mouse position rotation deltas are measured against; reset on enable
    /// so the first frame of control never produces a jump
    reference_mouse: Vec2,
}

impl FlyCamera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            translation_speed: TRANSLATION_SPEED,
            rotation_speed: ROTATION_SPEED,
            enabled: false,
            toggle_was_down: false,
            reference_mouse: Vec2::ZERO,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Advance the controller by one frame and rewrite the camera's view
    /// matrix if the controller is enabled.
    pub fn update(
        &mut self,
        input: &dyn Controller,
        window: &dyn WindowContext,
        camera: &mut Camera,
        delta_time: f32,
    ) {
        let toggle_down = input.is_down(Button::Space);
        if toggle_down && !self.toggle_was_down {
            self.enabled = !self.enabled;

            window.set_cursor_visible(!self.enabled);
            self.reference_mouse = input.mouse_position();
        }
        self.toggle_was_down = toggle_down;

        if !self.enabled {
            return;
        }

        // Camera-local basis from the rotation block of the view matrix:
        // right is the transposed column 0, forward the negated column 2.
        let view_transposed = camera.view_matrix().transpose();
        let right = view_transposed.x_axis.truncate();
        let mut forward = -view_transposed.z_axis.truncate();

        // Translation. Within an opposing pair the later assignment wins,
        // so D beats A and S beats W when both are held.
        let mut translation = Vec2::ZERO;
        if input.is_down(Button::KeyA) {
            translation.x = -1.0;
        }
        if input.is_down(Button::KeyD) {
            translation.x = 1.0;
        }
        if input.is_down(Button::KeyW) {
            translation.y = 1.0;
        }
        if input.is_down(Button::KeyS) {
            translation.y = -1.0;
        }

        translation *= self.translation_speed * delta_time;

        // Double speed while Shift is held
        if input.is_down(Button::Shift) {
            translation *= 2.0;
        }

        self.position += translation.x * right + translation.y * forward;

        // Rotation from the mouse delta since the last update
        let mouse_position = input.mouse_position();
        let mouse_delta = mouse_position - self.reference_mouse;
        self.reference_mouse = mouse_position;

        let yaw = -mouse_delta.x * self.rotation_speed;
        let pitch = mouse_delta.y * self.rotation_speed;

        forward = Mat3::from_rotation_y(yaw) * Mat3::from_axis_angle(right, pitch) * forward;

        camera.set_view_matrix(self.position, self.position + forward);
    }
}
