use serde::{Deserialize, Serialize};

pub const DEFAULT_SCREEN_WIDTH: u32 = 800;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 600;

/// Drawable area in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

impl ScreenSize {
    /// Applies a resize. Zero-sized surfaces (minimised windows) are ignored.
    ///
    /// Returns whether the size changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }

        let changed = self.width != width || self.height != height;
        self.width = width;
        self.height = height;
        changed
    }
}
