pub mod pointer_state;
pub mod screen_size;

pub use pointer_state::PointerState;
pub use screen_size::ScreenSize;
