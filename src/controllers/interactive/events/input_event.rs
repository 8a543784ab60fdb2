#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Home,
    Other,
}

/// Discrete input delivered by the window's event source, in arrival order.
///
/// Coordinates are physical pixels from the top-left corner of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: i32, y: i32 },
    ButtonPressed { button: PointerButton, x: i32, y: i32 },
    ButtonReleased { button: PointerButton, x: i32, y: i32 },
    /// Only the sign of `delta` matters.
    Scrolled { delta: f32 },
    Resized { width: u32, height: u32 },
    KeyReleased { key: Key },
    CloseRequested,
}
