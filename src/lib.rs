pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use config::{ConfigError, ExplorerConfig};
pub use controllers::cli::{EventScript, ReplayController, ReplaySummary, ScriptError};
pub use controllers::interactive::{
    ExplorerController, FrameStatus, InputEvent, InteractionState, Key, PointerButton,
    UniformSink, ViewSettings,
};
pub use crate::core::data::ScreenSize;
pub use crate::core::fractals::{ColourModes, FractalKinds};
pub use crate::core::precision::{SplitValue, split};
pub use crate::core::uniforms::{FrameUniforms, UniformBlock};
pub use crate::core::view::{ViewState, ZoomDirection, ZoomPolicy};
#[cfg(feature = "gui")]
pub use input::winit_adapter::WinitInputAdapter;
pub use presenters::{BlockHexPresenter, TextUniformPresenter};
