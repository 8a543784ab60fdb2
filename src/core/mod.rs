pub mod data;
pub mod fractals;
pub mod precision;
pub mod uniforms;
pub mod view;
