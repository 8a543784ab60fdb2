use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controllers::interactive::{InputEvent, Key, PointerButton};

/// Collects the current frame's input from winit window events.
///
/// winit reports button presses without a position, so the last cursor
/// position is tracked here and attached to button events.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WinitInputAdapter {
    cursor_x: i32,
    cursor_y: i32,
    pending: Vec<InputEvent>,
}

impl WinitInputAdapter {
    /// Translates and queues `event`. Returns whether it was relevant.
    pub fn push_window_event(&mut self, event: &WindowEvent) -> bool {
        match self.translate(event) {
            Some(input) => {
                self.pending.push(input);
                true
            }
            None => false,
        }
    }

    /// Hands over everything queued since the last call, in arrival order.
    pub fn take_frame(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn pending(&self) -> &[InputEvent] {
        &self.pending
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.cursor_moved(*position)),
            WindowEvent::MouseInput { state, button, .. } => Some(self.mouse_input(*state, *button)),
            WindowEvent::MouseWheel { delta, .. } => Some(Self::mouse_wheel(*delta)),
            WindowEvent::Resized(size) => Some(Self::resized(*size)),
            WindowEvent::KeyboardInput { event, .. } => Self::key(event.physical_key, event.state),
            WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),
            _ => None,
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> InputEvent {
        self.cursor_x = position.x.round() as i32;
        self.cursor_y = position.y.round() as i32;

        InputEvent::PointerMoved {
            x: self.cursor_x,
            y: self.cursor_y,
        }
    }

    pub fn mouse_input(&self, state: ElementState, button: MouseButton) -> InputEvent {
        let button = match button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Right => PointerButton::Right,
            MouseButton::Middle => PointerButton::Middle,
            _ => PointerButton::Other,
        };
        let (x, y) = (self.cursor_x, self.cursor_y);

        match state {
            ElementState::Pressed => InputEvent::ButtonPressed { button, x, y },
            ElementState::Released => InputEvent::ButtonReleased { button, x, y },
        }
    }

    /// Vertical wheel travel. Every wheel event is forwarded, so a zero
    /// vertical delta still counts as a zoom-in tick.
    pub fn mouse_wheel(delta: MouseScrollDelta) -> InputEvent {
        let vertical = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32,
        };

        InputEvent::Scrolled { delta: vertical }
    }

    pub fn resized(size: PhysicalSize<u32>) -> InputEvent {
        InputEvent::Resized {
            width: size.width,
            height: size.height,
        }
    }

    /// Keys act on release.
    pub fn key(physical_key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
        if state != ElementState::Released {
            return None;
        }

        let key = match physical_key {
            PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
            PhysicalKey::Code(KeyCode::Home) => Key::Home,
            _ => return None,
        };

        Some(InputEvent::KeyReleased { key })
    }
}
