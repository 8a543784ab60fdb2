use crate::core::fractals::{ColourModes, FractalKinds};
use crate::core::view::readout::ViewReadout;
use crate::core::view::zoom::{ZoomDirection, ZoomPolicy};

pub const DEFAULT_ZOOM_STEP: f64 = 1.0 / 256.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const MIN_ITERATIONS: u32 = 100;
pub const MAX_ITERATIONS: u32 = 1000;
pub const JULIA_COMPONENT_MIN: f32 = -2.0;
pub const JULIA_COMPONENT_MAX: f32 = 2.0;

/// Center and zoom step restored by [`ViewState::reset_view`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomeView {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom_step: f64,
}

impl Default for HomeView {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

/// Single source of truth for the camera and the fractal parameters.
///
/// `zoom_step` is the plane distance covered by one screen pixel and is
/// always strictly positive. `max_iterations` stays in
/// `MIN_ITERATIONS..=MAX_ITERATIONS` and each Julia component in
/// `JULIA_COMPONENT_MIN..=JULIA_COMPONENT_MAX`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    center_x: f64,
    center_y: f64,
    zoom_step: f64,
    fractal_kind: FractalKinds,
    colour_mode: ColourModes,
    max_iterations: u32,
    julia_constant: [f32; 2],
    zoom_policy: ZoomPolicy,
    home: HomeView,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(HomeView::default(), ZoomPolicy::default())
    }
}

impl ViewState {
    /// Creates a view sitting at `home`.
    ///
    /// A non-positive or non-finite home zoom step falls back to the default.
    #[must_use]
    pub fn new(home: HomeView, zoom_policy: ZoomPolicy) -> Self {
        let home = if home.zoom_step.is_finite() && home.zoom_step > 0.0 {
            home
        } else {
            HomeView {
                zoom_step: DEFAULT_ZOOM_STEP,
                ..home
            }
        };

        Self {
            center_x: home.center_x,
            center_y: home.center_y,
            zoom_step: home.zoom_step,
            fractal_kind: FractalKinds::default(),
            colour_mode: ColourModes::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            julia_constant: [0.0, 0.0],
            zoom_policy,
            home,
        }
    }

    #[must_use]
    pub const fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub const fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub const fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    #[must_use]
    pub const fn fractal_kind(&self) -> FractalKinds {
        self.fractal_kind
    }

    #[must_use]
    pub const fn colour_mode(&self) -> ColourModes {
        self.colour_mode
    }

    #[must_use]
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub const fn julia_constant(&self) -> [f32; 2] {
        self.julia_constant
    }

    #[must_use]
    pub const fn zoom_policy(&self) -> &ZoomPolicy {
        &self.zoom_policy
    }

    #[must_use]
    pub const fn home(&self) -> HomeView {
        self.home
    }

    #[must_use]
    pub const fn readout(&self) -> ViewReadout<'_> {
        ViewReadout::new(self)
    }

    /// Moves the center by a screen-space delta scaled by the zoom step.
    ///
    /// Screen y grows downwards while plane y grows upwards, hence the
    /// opposite signs.
    pub fn pan(&mut self, delta_screen_x: i32, delta_screen_y: i32) {
        self.center_x += f64::from(delta_screen_x) * self.zoom_step;
        self.center_y -= f64::from(delta_screen_y) * self.zoom_step;
    }

    pub fn zoom(&mut self, direction: ZoomDirection) {
        self.zoom_step = self.zoom_policy.apply(self.zoom_step, direction);
    }

    pub fn set_fractal_kind(&mut self, fractal_kind: FractalKinds) {
        self.fractal_kind = fractal_kind;
    }

    pub fn set_colour_mode(&mut self, colour_mode: ColourModes) {
        self.colour_mode = colour_mode;
    }

    pub fn set_max_iterations(&mut self, max_iterations: i32) {
        let clamped = i64::from(max_iterations)
            .clamp(i64::from(MIN_ITERATIONS), i64::from(MAX_ITERATIONS));
        self.max_iterations = clamped as u32;
    }

    /// Sets the Julia constant, clamping each component. NaN components keep
    /// their previous value.
    pub fn set_julia_constant(&mut self, real: f32, imag: f32) {
        self.julia_constant = [
            clamp_julia_component(real, self.julia_constant[0]),
            clamp_julia_component(imag, self.julia_constant[1]),
        ];
    }

    /// Returns the camera to its home center and zoom step. Fractal
    /// parameters are left alone.
    pub fn reset_view(&mut self) {
        self.center_x = self.home.center_x;
        self.center_y = self.home.center_y;
        self.zoom_step = self.home.zoom_step;
    }
}

fn clamp_julia_component(value: f32, previous: f32) -> f32 {
    if value.is_nan() {
        return previous;
    }

    value.clamp(JULIA_COMPONENT_MIN, JULIA_COMPONENT_MAX)
}
