use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::picking::PointerClick;

/// Turns winit window events into [`PointerClick`]s for the hit router.
///
/// A click is a left-button press followed by a release, reported at the
/// cursor position of the release together with the current window size.
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    /// Current cursor position (relative to window)
    cursor: Option<(f32, f32)>,
    viewport: (f32, f32),
    left_down: bool,
}

impl PointerInput {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            cursor: None,
            viewport: (viewport_width, viewport_height),
            left_down: false,
        }
    }

    /// Feed one window event; returns a click when one completes.
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<PointerClick> {
        match event {
            WindowEvent::Resized(size) => {
                self.on_resized(size.width as f32, size.height as f32);
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x as f32, position.y as f32);
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.left_down = false;
                None
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.on_left_button(*state == ElementState::Pressed),
            _ => None,
        }
    }

    pub fn on_resized(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }

    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = Some((x, y));
    }

    pub fn on_left_button(&mut self, pressed: bool) -> Option<PointerClick> {
        if pressed {
            self.left_down = true;
            return None;
        }

        let was_down = std::mem::replace(&mut self.left_down, false);
        let (x, y) = self.cursor?;
        was_down.then(|| PointerClick::new(x, y, self.viewport.0, self.viewport.1))
    }

    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }
}
