use std::sync::Arc;

use winit::window::Window as WinitWindow;

/// Window lifecycle and cursor handling abstraction
pub trait WindowContext {
    /// Request the window to redraw
    fn request_redraw(&self);

    /// Get the inner size of the window in physical pixels
    fn inner_size(&self) -> (u32, u32);

    /// Get the scale factor for HiDPI displays
    fn scale_factor(&self) -> f64;

    /// Set cursor visibility
    fn set_cursor_visible(&self, visible: bool);
}

/// Wrapper around the winit window
pub struct ViewerWindow {
    inner: Arc<WinitWindow>,
}

impl ViewerWindow {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    pub fn aspect_ratio(&self) -> f32 {
        let size = self.inner.inner_size();
        if size.height == 0 {
            return 1.0;
        }
        size.width as f32 / size.height as f32
    }
}

impl WindowContext for ViewerWindow {
    fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    fn inner_size(&self) -> (u32, u32) {
        let size = self.inner.inner_size();
        (size.width, size.height)
    }

    fn scale_factor(&self) -> f64 {
        self.inner.scale_factor()
    }

    fn set_cursor_visible(&self, visible: bool) {
        self.inner.set_cursor_visible(visible);
    }
}
