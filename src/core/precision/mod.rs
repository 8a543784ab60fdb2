//! Host-side precision extension for a GPU that only offers 32-bit floats.

pub mod split_value;

pub use split_value::{SplitValue, split};
