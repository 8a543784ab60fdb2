//! Port definitions for the interactive controller.
//!
//! `UniformSink` is the rendering side that receives each frame's uniforms;
//! `ViewSettings` is the narrow surface a configuration UI may drive.

pub mod uniform_sink;
pub mod view_settings;

pub use uniform_sink::UniformSink;
pub use view_settings::ViewSettings;
