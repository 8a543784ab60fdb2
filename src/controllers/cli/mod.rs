//! Headless driver that replays scripted input through the frame loop.

pub mod replay;
pub mod script;

pub use replay::{ReplayController, ReplaySummary};
pub use script::{EventScript, ScriptCommand, ScriptError, SettingCommand};
