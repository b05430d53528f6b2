use std::cell::Cell;

use glam::{Vec2, Vec3};

use obj_viewer::camera::Camera;
use obj_viewer::controller::{Button, Controller};
use obj_viewer::flycam::{FlyCamera, TRANSLATION_SPEED};
use obj_viewer::window::WindowContext;

struct MockController {
    pressed: Vec<Button>,
    mouse: Vec2,
}

impl MockController {
    fn new(pressed: Vec<Button>) -> Self {
        Self {
            pressed,
            mouse: Vec2::new(0.5, 0.5),
        }
    }

    fn with_mouse(pressed: Vec<Button>, mouse: Vec2) -> Self {
        Self { pressed, mouse }
    }
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

struct MockWindow {
    cursor_visible: Cell<bool>,
}

impl MockWindow {
    fn new() -> Self {
        Self {
            cursor_visible: Cell::new(true),
        }
    }
}

impl WindowContext for MockWindow {
    fn request_redraw(&self) {}

    fn inner_size(&self) -> (u32, u32) {
        (1024, 1024)
    }

    fn scale_factor(&self) -> f64 {
        1.0
    }

    fn set_cursor_visible(&self, visible: bool) {
        self.cursor_visible.set(visible);
    }
}

fn setup() -> (FlyCamera, Camera, MockWindow) {
    let position = Vec3::new(0.0, 30.0, 30.0);
    let mut camera = Camera::new();
    camera.set_view_matrix(position, Vec3::ZERO);
    camera.set_perspective(1.0, 1.0, 0.1, 1000.0);

    (FlyCamera::new(position), camera, MockWindow::new())
}

/// Forward direction as the controller derives it: negated row 2 of the view
fn view_forward(camera: &Camera) -> Vec3 {
    -camera.view_matrix().transpose().z_axis.truncate()
}

/// Press and release the toggle key so the controller ends up enabled
fn enable(flycam: &mut FlyCamera, camera: &mut Camera, window: &MockWindow) {
    flycam.update(
        &MockController::new(vec![Button::Space]),
        window,
        camera,
        0.0,
    );
    flycam.update(&MockController::new(vec![]), window, camera, 0.0);
    assert!(flycam.enabled());
}

#[test]
fn view_never_changes_while_toggle_never_pressed() {
    let (mut flycam, mut camera, window) = setup();
    let initial_view = camera.view_matrix();

    for _ in 0..10 {
        let input = MockController::with_mouse(
            vec![Button::KeyW, Button::KeyD, Button::Shift],
            Vec2::new(0.9, 0.1),
        );
        flycam.update(&input, &window, &mut camera, 1.0);
    }

    assert!(!flycam.enabled());
    assert_eq!(camera.view_matrix(), initial_view);
    assert_eq!(flycam.position(), Vec3::new(0.0, 30.0, 30.0));
}

#[test]
fn toggle_is_edge_triggered_not_level_triggered() {
    let (mut flycam, mut camera, window) = setup();

    let space = MockController::new(vec![Button::Space]);
    let released = MockController::new(vec![]);

    flycam.update(&space, &window, &mut camera, 0.0);
    assert!(flycam.enabled(), "rising edge should enable");

    // Held across consecutive frames: no further flips
    flycam.update(&space, &window, &mut camera, 0.0);
    flycam.update(&space, &window, &mut camera, 0.0);
    assert!(flycam.enabled(), "holding the key must flip only once");

    flycam.update(&released, &window, &mut camera, 0.0);
    assert!(flycam.enabled(), "releasing alone must not flip");

    flycam.update(&space, &window, &mut camera, 0.0);
    assert!(!flycam.enabled(), "next rising edge should disable");
}

#[test]
fn cursor_hidden_while_enabled_visible_while_disabled() {
    let (mut flycam, mut camera, window) = setup();

    let space = MockController::new(vec![Button::Space]);
    let released = MockController::new(vec![]);

    flycam.update(&space, &window, &mut camera, 0.0);
    assert!(!window.cursor_visible.get());

    flycam.update(&released, &window, &mut camera, 0.0);
    flycam.update(&space, &window, &mut camera, 0.0);
    assert!(window.cursor_visible.get());
}

#[test]
fn rotation_delta_is_zero_immediately_after_enable() {
    let (mut flycam, mut camera, window) = setup();
    let initial_forward = view_forward(&camera);

    // Mouse wanders while disabled
    for x in 0..5 {
        let input =
            MockController::with_mouse(vec![], Vec2::new(x as f32 * 0.2, 0.8));
        flycam.update(&input, &window, &mut camera, 0.016);
    }

    // Enable with the mouse far from where it started
    let mouse = Vec2::new(0.9, 0.8);
    flycam.update(
        &MockController::with_mouse(vec![Button::Space], mouse),
        &window,
        &mut camera,
        0.016,
    );
    // First enabled frame, mouse unmoved since the enable
    flycam.update(
        &MockController::with_mouse(vec![], mouse),
        &window,
        &mut camera,
        0.016,
    );

    let forward = view_forward(&camera);
    assert!(
        (forward - initial_forward).length() < 1e-5,
        "reference reset on enable must suppress the accumulated mouse delta, got {:?} vs {:?}",
        forward,
        initial_forward
    );
}

#[test]
fn forward_key_moves_along_view_forward() {
    let (mut flycam, mut camera, window) = setup();
    enable(&mut flycam, &mut camera, &window);

    let start = flycam.position();
    let forward = view_forward(&camera);

    flycam.update(
        &MockController::new(vec![Button::KeyW]),
        &window,
        &mut camera,
        1.0,
    );

    let expected = start + TRANSLATION_SPEED * forward;
    assert!(
        (flycam.position() - expected).length() < 1e-4,
        "expected {:?}, got {:?}",
        expected,
        flycam.position()
    );
}

#[test]
fn opposing_keys_resolve_in_favor_of_d() {
    let (mut flycam_both, mut camera_both, window_both) = setup();
    enable(&mut flycam_both, &mut camera_both, &window_both);
    flycam_both.update(
        &MockController::new(vec![Button::KeyA, Button::KeyD]),
        &window_both,
        &mut camera_both,
        1.0,
    );

    let (mut flycam_d, mut camera_d, window_d) = setup();
    enable(&mut flycam_d, &mut camera_d, &window_d);
    flycam_d.update(
        &MockController::new(vec![Button::KeyD]),
        &window_d,
        &mut camera_d,
        1.0,
    );

    assert!(
        (flycam_both.position() - flycam_d.position()).length() < 1e-6,
        "A+D must behave exactly like D alone"
    );
}

#[test]
fn opposing_keys_resolve_in_favor_of_s() {
    let (mut flycam_both, mut camera_both, window_both) = setup();
    enable(&mut flycam_both, &mut camera_both, &window_both);
    flycam_both.update(
        &MockController::new(vec![Button::KeyW, Button::KeyS]),
        &window_both,
        &mut camera_both,
        1.0,
    );

    let (mut flycam_s, mut camera_s, window_s) = setup();
    enable(&mut flycam_s, &mut camera_s, &window_s);
    flycam_s.update(
        &MockController::new(vec![Button::KeyS]),
        &window_s,
        &mut camera_s,
        1.0,
    );

    assert!(
        (flycam_both.position() - flycam_s.position()).length() < 1e-6,
        "W+S must behave exactly like S alone"
    );
}

#[test]
fn shift_doubles_translation_magnitude() {
    let (mut flycam_plain, mut camera_plain, window_plain) = setup();
    enable(&mut flycam_plain, &mut camera_plain, &window_plain);
    let start = flycam_plain.position();
    flycam_plain.update(
        &MockController::new(vec![Button::KeyW]),
        &window_plain,
        &mut camera_plain,
        0.25,
    );
    let plain_displacement = flycam_plain.position() - start;

    let (mut flycam_fast, mut camera_fast, window_fast) = setup();
    enable(&mut flycam_fast, &mut camera_fast, &window_fast);
    flycam_fast.update(
        &MockController::new(vec![Button::KeyW, Button::Shift]),
        &window_fast,
        &mut camera_fast,
        0.25,
    );
    let fast_displacement = flycam_fast.position() - start;

    assert!(
        (fast_displacement - 2.0 * plain_displacement).length() < 1e-5,
        "Shift must double the displacement exactly"
    );
}

#[test]
fn update_with_zero_delta_and_no_input_change_is_idempotent() {
    let (mut flycam, mut camera, window) = setup();
    enable(&mut flycam, &mut camera, &window);

    let input = MockController::new(vec![]);
    flycam.update(&input, &window, &mut camera, 0.0);

    let position = flycam.position();
    let view = camera.view_matrix();

    flycam.update(&input, &window, &mut camera, 0.0);

    assert_eq!(flycam.position(), position);
    assert!(
        camera.view_matrix().abs_diff_eq(view, 1e-6),
        "view must be unchanged, got {:?} vs {:?}",
        camera.view_matrix(),
        view
    );
}

#[test]
fn disabled_controller_ignores_movement_keys() {
    let (mut flycam, mut camera, window) = setup();
    enable(&mut flycam, &mut camera, &window);

    // Disable again
    flycam.update(
        &MockController::new(vec![Button::Space]),
        &window,
        &mut camera,
        0.0,
    );
    assert!(!flycam.enabled());

    let position = flycam.position();
    let view = camera.view_matrix();

    flycam.update(
        &MockController::new(vec![Button::KeyW, Button::KeyD]),
        &window,
        &mut camera,
        1.0,
    );

    assert_eq!(flycam.position(), position);
    assert_eq!(camera.view_matrix(), view);
}

#[test]
fn mouse_movement_rotates_forward_while_enabled() {
    let (mut flycam, mut camera, window) = setup();
    enable(&mut flycam, &mut camera, &window);

    let initial_forward = view_forward(&camera);
    let initial_position = flycam.position();

    flycam.update(
        &MockController::with_mouse(vec![], Vec2::new(0.7, 0.5)),
        &window,
        &mut camera,
        0.016,
    );

    let forward = view_forward(&camera);
    assert!(
        (forward - initial_forward).length() > 1e-3,
        "horizontal mouse movement should yaw the camera"
    );
    assert_eq!(flycam.position(), initial_position, "rotation must not translate");

    // Yaw alone rotates about world up, so the vertical component is preserved
    assert!((forward.y - initial_forward.y).abs() < 1e-4, "yaw must preserve pitch");
}
