//! Camera model: where the view sits in the complex plane and how far in it
//! is zoomed, kept in `f64` on the host.

pub mod readout;
pub mod view_state;
pub mod zoom;

pub use readout::ViewReadout;
pub use view_state::{HomeView, ViewState};
pub use zoom::{ZOOM_STEP_CEILING, ZoomDirection, ZoomPolicy};
