//! Per-frame parameter set handed to the GPU stage.
//!
//! The shader reconstructs every split pair as `head + residual` before use.

pub mod frame_uniforms;
pub mod uniform_block;
pub mod uniform_value;

pub use frame_uniforms::FrameUniforms;
pub use uniform_block::UniformBlock;
pub use uniform_value::{NamedUniform, UniformValue};
