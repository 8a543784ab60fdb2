//! winit adapter: window events in, `InputEvent`s out, queued per frame.

mod adapter;

pub use adapter::WinitInputAdapter;
