//! Interactive controller for pan-and-zoom exploration.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: `InputEvent`s from whatever window system drives the loop
//! - **Output**: `UniformSink` receiving one `FrameUniforms` per frame
//! - **Configuration**: `ViewSettings`, the setters a settings panel may use
//! - **Core**: camera and uniform export from `core/`

mod controller;
pub mod events;
pub mod interaction;
pub mod ports;

pub use controller::{ExplorerController, FrameStatus};
pub use events::{InputEvent, Key, PointerButton};
pub use interaction::{InteractionMachine, InteractionState};
pub use ports::{UniformSink, ViewSettings};
