use glam::Vec2;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    Shift,
    Escape,
    MouseLeft,
    MouseRight,
}

/// Controller - per-frame input queries
///
/// The fly camera only ever asks "is this button down" and "where is the
/// mouse", so anything implementing this trait can drive it (including the
/// mocks in the tests).
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Current mouse position in normalized window coordinates ([0,1] per axis)
    fn mouse_position(&self) -> Vec2;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_equality() {
        assert_eq!(Button::KeyW, Button::KeyW);
        assert_eq!(Button::Space, Button::Space);
        assert_ne!(Button::KeyW, Button::KeyA);
    }

    #[test]
    fn test_button_hash() {
        let mut set = HashSet::new();
        set.insert(Button::KeyW);
        set.insert(Button::KeyA);
        set.insert(Button::KeyW); // Duplicate

        assert!(set.contains(&Button::KeyW));
        assert!(set.contains(&Button::KeyA));
        assert!(!set.contains(&Button::KeyS));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_all_button_variants_unique() {
        let all_buttons = vec![
            Button::KeyW,
            Button::KeyA,
            Button::KeyS,
            Button::KeyD,
            Button::Space,
            Button::Shift,
            Button::Escape,
            Button::MouseLeft,
            Button::MouseRight,
        ];

        let set: HashSet<_> = all_buttons.iter().collect();
        assert_eq!(set.len(), 9);
    }

    struct MockController {
        pressed: Vec<Button>,
        mouse: Vec2,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn mouse_position(&self) -> Vec2 {
            self.mouse
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::KeyW, Button::Space],
            mouse: Vec2::new(0.5, 0.5),
        };

        assert!(controller.is_down(Button::KeyW));
        assert!(controller.is_down(Button::Space));
        assert!(!controller.is_down(Button::KeyA));
        assert_eq!(controller.mouse_position(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_controller_no_keys_pressed() {
        let controller = MockController {
            pressed: vec![],
            mouse: Vec2::ZERO,
        };

        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys().len(), 0);
    }
}
