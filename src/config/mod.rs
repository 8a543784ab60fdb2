//! TOML configuration for the explorer.

pub mod errors;
pub mod explorer_config;

pub use errors::ConfigError;
pub use explorer_config::{ExplorerConfig, FractalSection, ViewSection};
