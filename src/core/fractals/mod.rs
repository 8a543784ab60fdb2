pub mod colour_modes;
pub mod fractal_kinds;

pub use colour_modes::ColourModes;
pub use fractal_kinds::FractalKinds;
