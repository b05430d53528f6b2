use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controller::{Button, Controller};

/// Adapter that bridges winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Last observed cursor position in physical pixels
    cursor_position: Vec2,
    /// Window size used to normalize the cursor position
    window_size: Vec2,
}

impl WinitController {
    pub fn new(window_size: (u32, u32)) -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            cursor_position: Vec2::ZERO,
            window_size: Vec2::new(window_size.0 as f32, window_size.1 as f32),
        }
    }

    /// Process a winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    self.set_button(btn, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::Resized(size) => {
                self.window_size = Vec2::new(size.width as f32, size.height as f32);
            }
            _ => {}
        }
    }

    fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    /// Map winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn mouse_position(&self) -> Vec2 {
        if self.window_size.x <= 0.0 || self.window_size.y <= 0.0 {
            return Vec2::ZERO;
        }
        self.cursor_position / self.window_size
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit event construction requires fields that are not publicly
    // accessible, so these tests drive the internal state directly.

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new((800, 600));
        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys().len(), 0);
        assert_eq!(controller.mouse_position(), Vec2::ZERO);
    }

    #[test]
    fn test_press_and_release() {
        let mut controller = WinitController::new((800, 600));

        controller.set_button(Button::KeyW, ElementState::Pressed);
        controller.set_button(Button::Space, ElementState::Pressed);
        assert!(controller.is_down(Button::KeyW));
        assert!(controller.is_down(Button::Space));
        assert_eq!(controller.get_down_keys().len(), 2);

        controller.set_button(Button::KeyW, ElementState::Released);
        assert!(!controller.is_down(Button::KeyW));
        assert!(controller.is_down(Button::Space));
        assert_eq!(controller.get_down_keys().len(), 1);
    }

    #[test]
    fn test_repeated_press_not_duplicated() {
        let mut controller = WinitController::new((800, 600));

        controller.set_button(Button::KeyD, ElementState::Pressed);
        controller.set_button(Button::KeyD, ElementState::Pressed);
        assert_eq!(controller.get_down_keys().len(), 1);
    }

    #[test]
    fn test_mouse_position_normalized() {
        let mut controller = WinitController::new((800, 600));
        controller.cursor_position = Vec2::new(400.0, 150.0);

        assert_eq!(controller.mouse_position(), Vec2::new(0.5, 0.25));
    }

    #[test]
    fn test_mouse_position_tracks_resize() {
        let mut controller = WinitController::new((800, 600));
        controller.cursor_position = Vec2::new(400.0, 300.0);
        controller.window_size = Vec2::new(400.0, 300.0);

        assert_eq!(controller.mouse_position(), Vec2::new(1.0, 1.0));
    }
}
