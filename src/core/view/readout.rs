use std::fmt;

use crate::core::view::view_state::ViewState;

/// Status read-out of the camera, printed with 20 decimal places so deep
/// zoom positions stay legible. Colour and Julia lines appear only for
/// fractals that use them.
#[derive(Debug, Clone, Copy)]
pub struct ViewReadout<'a> {
    view: &'a ViewState,
}

impl<'a> ViewReadout<'a> {
    #[must_use]
    pub const fn new(view: &'a ViewState) -> Self {
        Self { view }
    }
}

impl fmt::Display for ViewReadout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fractal  : {}", self.view.fractal_kind())?;
        writeln!(f, "Zoom     : {:.20}", self.view.zoom_step())?;
        writeln!(f, "Center X : {:.20}", self.view.center_x())?;
        write!(f, "Center Y : {:.20}", self.view.center_y())?;

        let kind = self.view.fractal_kind();
        if kind.uses_colour_mode() {
            write!(f, "\nColour   : {}", self.view.colour_mode())?;
        }
        if kind.uses_julia_constant() {
            let [re, im] = self.view.julia_constant();
            write!(f, "\nJulia c  : {re} + {im}i")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::fractals::{ColourModes, FractalKinds};
    use crate::core::view::ViewState;

    #[test]
    fn readout_prints_twenty_decimals() {
        let view = ViewState::default();

        let text = view.readout().to_string();

        assert_eq!(
            text,
            "Fractal  : Mandelbrot\n\
             Zoom     : 0.00390625000000000000\n\
             Center X : 0.00000000000000000000\n\
             Center Y : 0.00000000000000000000\n\
             Colour   : Original"
        );
    }

    #[test]
    fn readout_tracks_pan() {
        let mut view = ViewState::default();
        view.pan(-256, 512);

        let text = view.readout().to_string();

        assert!(text.contains("Center X : -1.00000000000000000000"));
        assert!(text.contains("Center Y : -2.00000000000000000000"));
    }

    #[test]
    fn julia_readout_lists_constant() {
        let mut view = ViewState::default();
        view.set_fractal_kind(FractalKinds::Julia);
        view.set_colour_mode(ColourModes::Fire);
        view.set_julia_constant(-0.5, 0.25);

        let text = view.readout().to_string();

        assert!(text.ends_with("Colour   : Fire\nJulia c  : -0.5 + 0.25i"));
    }

    #[test]
    fn newton_readout_omits_colour_and_julia() {
        let mut view = ViewState::default();
        view.set_fractal_kind(FractalKinds::Newton2);

        let text = view.readout().to_string();

        assert!(!text.contains("Colour"));
        assert!(!text.contains("Julia c"));
        assert!(text.ends_with("Center Y : 0.00000000000000000000"));
    }
}
