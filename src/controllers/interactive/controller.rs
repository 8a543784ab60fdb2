use crate::controllers::interactive::events::InputEvent;
use crate::controllers::interactive::interaction::{InteractionMachine, InteractionState};
use crate::controllers::interactive::ports::{UniformSink, ViewSettings};
use crate::core::data::ScreenSize;
use crate::core::uniforms::FrameUniforms;
use crate::core::view::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Presented,
    Closed,
}

/// Frame loop owner of the view.
///
/// One frame is: feed every pending event through [`handle_event`], then
/// call [`finish_frame`] once to export uniforms from the settled view.
/// Nothing here blocks or spawns work; the caller's event loop paces frames.
///
/// [`handle_event`]: ExplorerController::handle_event
/// [`finish_frame`]: ExplorerController::finish_frame
#[derive(Debug, Clone)]
pub struct ExplorerController {
    view: ViewState,
    interaction: InteractionMachine,
    screen: ScreenSize,
    frame_index: u64,
}

impl ExplorerController {
    #[must_use]
    pub fn new(view: ViewState, screen: ScreenSize) -> Self {
        Self {
            view,
            interaction: InteractionMachine::default(),
            screen,
            frame_index: 0,
        }
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub const fn screen(&self) -> ScreenSize {
        self.screen
    }

    #[must_use]
    pub const fn interaction_state(&self) -> InteractionState {
        self.interaction.state()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.interaction.state() == InteractionState::Closed
    }

    /// Number of frames handed to a sink so far.
    #[must_use]
    pub const fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Capability handle for a settings panel.
    pub fn settings(&mut self) -> &mut dyn ViewSettings {
        &mut self.view
    }

    /// Applies one input event. Resizes update the screen size and bypass
    /// the interaction machine.
    pub fn handle_event(&mut self, event: &InputEvent) -> InteractionState {
        if let InputEvent::Resized { width, height } = *event {
            if !self.is_closed() && self.screen.resize(width, height) {
                log::debug!("screen resized to {width}x{height}");
            }
            return self.interaction.state();
        }

        self.interaction.handle(event, &mut self.view)
    }

    /// Exports this frame's uniforms to `sink`, unless the view was closed.
    pub fn finish_frame<S: UniformSink>(&mut self, sink: &mut S) -> Result<FrameStatus, S::Error> {
        if self.is_closed() {
            return Ok(FrameStatus::Closed);
        }

        let uniforms = FrameUniforms::export(&self.view, self.screen);
        sink.submit(self.frame_index, &uniforms)?;
        log::trace!("frame {} exported", self.frame_index);
        self.frame_index += 1;

        Ok(FrameStatus::Presented)
    }

    /// Drains `events` then finishes the frame. Events after a close signal
    /// are discarded.
    pub fn run_frame<I, S>(&mut self, events: I, sink: &mut S) -> Result<FrameStatus, S::Error>
    where
        I: IntoIterator<Item = InputEvent>,
        S: UniformSink,
    {
        for event in events {
            if self.handle_event(&event) == InteractionState::Closed {
                break;
            }
        }

        self.finish_frame(sink)
    }
}

impl Default for ExplorerController {
    fn default() -> Self {
        Self::new(ViewState::default(), ScreenSize::default())
    }
}
