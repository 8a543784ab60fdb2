use crate::core::fractals::{ColourModes, FractalKinds};
use crate::core::view::ViewState;

/// Fractal parameters a settings panel may read and change.
///
/// Camera position and zoom are not exposed here; they only move through
/// pointer interaction.
pub trait ViewSettings {
    fn fractal_kind(&self) -> FractalKinds;
    fn set_fractal_kind(&mut self, fractal_kind: FractalKinds);

    fn colour_mode(&self) -> ColourModes;
    fn set_colour_mode(&mut self, colour_mode: ColourModes);

    fn max_iterations(&self) -> u32;
    /// Clamped to `100..=1000`.
    fn set_max_iterations(&mut self, max_iterations: i32);

    fn julia_constant(&self) -> [f32; 2];
    /// Each component clamped to `-2.0..=2.0`.
    fn set_julia_constant(&mut self, real: f32, imag: f32);
}

impl ViewSettings for ViewState {
    fn fractal_kind(&self) -> FractalKinds {
        ViewState::fractal_kind(self)
    }

    fn set_fractal_kind(&mut self, fractal_kind: FractalKinds) {
        ViewState::set_fractal_kind(self, fractal_kind);
    }

    fn colour_mode(&self) -> ColourModes {
        ViewState::colour_mode(self)
    }

    fn set_colour_mode(&mut self, colour_mode: ColourModes) {
        ViewState::set_colour_mode(self, colour_mode);
    }

    fn max_iterations(&self) -> u32 {
        ViewState::max_iterations(self)
    }

    fn set_max_iterations(&mut self, max_iterations: i32) {
        ViewState::set_max_iterations(self, max_iterations);
    }

    fn julia_constant(&self) -> [f32; 2] {
        ViewState::julia_constant(self)
    }

    fn set_julia_constant(&mut self, real: f32, imag: f32) {
        ViewState::set_julia_constant(self, real, imag);
    }
}

#[cfg(test)]
mod tests {
    use super::ViewSettings;
    use crate::core::fractals::{ColourModes, FractalKinds};
    use crate::core::view::ViewState;

    fn configure(settings: &mut dyn ViewSettings) {
        settings.set_fractal_kind(FractalKinds::Julia);
        settings.set_colour_mode(ColourModes::Sky);
        settings.set_max_iterations(5000);
        settings.set_julia_constant(0.285, -9.0);
    }

    #[test]
    fn trait_object_setters_reach_view_state() {
        let mut view = ViewState::default();

        configure(&mut view);

        assert_eq!(view.fractal_kind(), FractalKinds::Julia);
        assert_eq!(view.colour_mode(), ColourModes::Sky);
        assert_eq!(view.max_iterations(), 1000);
        assert_eq!(view.julia_constant(), [0.285, -2.0]);
    }

    #[test]
    fn settings_do_not_touch_camera() {
        let mut view = ViewState::default();

        configure(&mut view);

        assert_eq!(view.center_x(), 0.0);
        assert_eq!(view.center_y(), 0.0);
        assert_eq!(view.zoom_step(), 1.0 / 256.0);
    }

    #[test]
    fn getters_mirror_view_state() {
        let mut view = ViewState::default();
        view.set_max_iterations(321);
        let settings: &dyn ViewSettings = &view;

        assert_eq!(settings.max_iterations(), 321);
        assert_eq!(settings.fractal_kind(), FractalKinds::Mandelbrot);
        assert_eq!(settings.colour_mode(), ColourModes::Original);
        assert_eq!(settings.julia_constant(), [0.0, 0.0]);
    }
}
