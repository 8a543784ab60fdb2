/// Last known pointer position and whether a left-button drag is latched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    pub last_x: i32,
    pub last_y: i32,
    pub drag_active: bool,
}

impl PointerState {
    pub fn record(&mut self, x: i32, y: i32) {
        self.last_x = x;
        self.last_y = y;
    }

    /// Screen travel from the recorded position to `(x, y)`, saturating at
    /// the `i32` range.
    #[must_use]
    pub const fn travel_to(&self, x: i32, y: i32) -> (i32, i32) {
        (x.saturating_sub(self.last_x), y.saturating_sub(self.last_y))
    }
}
