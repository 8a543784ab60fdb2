//! Input adapters for the fractal explorer.
//!
//! This module contains adapters that receive input from window systems
//! and translate them into `InputEvent`s for the interactive controller.

#[cfg(feature = "gui")]
pub mod winit_adapter;
