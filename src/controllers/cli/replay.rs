use crate::controllers::cli::script::{EventScript, ScriptCommand};
use crate::controllers::interactive::{ExplorerController, FrameStatus, UniformSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub frames_presented: u64,
    pub closed: bool,
}

/// Feeds an [`EventScript`] through an [`ExplorerController`] one frame at
/// a time, the way a window event loop would.
pub struct ReplayController {
    controller: ExplorerController,
}

impl ReplayController {
    #[must_use]
    pub fn new(controller: ExplorerController) -> Self {
        Self { controller }
    }

    #[must_use]
    pub fn controller(&self) -> &ExplorerController {
        &self.controller
    }

    pub fn run<S: UniformSink>(
        &mut self,
        script: &EventScript,
        sink: &mut S,
    ) -> Result<ReplaySummary, S::Error> {
        let mut summary = ReplaySummary::default();

        for frame in script.frames() {
            for command in frame {
                if self.controller.is_closed() {
                    break;
                }

                match command {
                    ScriptCommand::Input(event) => {
                        self.controller.handle_event(event);
                    }
                    ScriptCommand::Setting(setting) => setting.apply(self.controller.settings()),
                    ScriptCommand::EndFrame => {}
                }
            }

            match self.controller.finish_frame(sink)? {
                FrameStatus::Presented => summary.frames_presented += 1,
                FrameStatus::Closed => {
                    summary.closed = true;
                    log::info!("close requested, stopping replay");
                    break;
                }
            }
        }

        Ok(summary)
    }
}
