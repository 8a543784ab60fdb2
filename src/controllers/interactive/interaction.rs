use crate::controllers::interactive::events::{InputEvent, Key, PointerButton};
use crate::core::data::PointerState;
use crate::core::view::{ViewState, ZoomDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
    /// Terminal. Every later event is ignored.
    Closed,
}

/// Drag-to-pan, scroll-to-zoom and the close latch.
///
/// Each event is fully applied to the view before the next one is handled.
/// Resize events are not interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionMachine {
    state: InteractionState,
    pointer: PointerState,
}

impl InteractionMachine {
    #[must_use]
    pub const fn state(&self) -> InteractionState {
        self.state
    }

    #[must_use]
    pub const fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Applies one event and returns the resulting state.
    pub fn handle(&mut self, event: &InputEvent, view: &mut ViewState) -> InteractionState {
        if self.state == InteractionState::Closed {
            return self.state;
        }

        match *event {
            InputEvent::PointerMoved { x, y } => self.on_pointer_moved(x, y, view),
            InputEvent::ButtonPressed { button, x, y } => {
                self.pointer.record(x, y);
                if button == PointerButton::Left {
                    self.pointer.drag_active = true;
                    self.transition(InteractionState::Dragging);
                }
            }
            InputEvent::ButtonReleased { button, x, y } => {
                self.pointer.record(x, y);
                if button == PointerButton::Left {
                    self.pointer.drag_active = false;
                    self.transition(InteractionState::Idle);
                }
            }
            InputEvent::Scrolled { delta } => {
                view.zoom(ZoomDirection::from_scroll_delta(delta));
                log::trace!("zoom step now {:e}", view.zoom_step());
            }
            InputEvent::KeyReleased { key: Key::Home } => {
                view.reset_view();
                log::debug!("view reset to home");
            }
            InputEvent::KeyReleased { key: Key::Escape } | InputEvent::CloseRequested => {
                self.pointer.drag_active = false;
                self.transition(InteractionState::Closed);
            }
            InputEvent::KeyReleased { key: Key::Other } | InputEvent::Resized { .. } => {}
        }

        self.state
    }

    fn on_pointer_moved(&mut self, x: i32, y: i32, view: &mut ViewState) {
        if self.state == InteractionState::Dragging {
            let (travel_x, travel_y) = self.pointer.travel_to(x, y);
            // The view follows the pointer sideways. Plane y grows down the
            // screen in the renderer, so vertical travel passes through as is.
            let pan_x = travel_x.saturating_neg();
            view.pan(pan_x, travel_y);
            log::trace!(
                "pan by ({}, {}) px, center now ({:e}, {:e})",
                pan_x,
                travel_y,
                view.center_x(),
                view.center_y()
            );
        }

        self.pointer.record(x, y);
    }

    fn transition(&mut self, next: InteractionState) {
        if self.state != next {
            log::debug!("interaction {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}
