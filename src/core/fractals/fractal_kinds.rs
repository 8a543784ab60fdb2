use serde::{Deserialize, Serialize};

/// Escape-time formula selected for the renderer.
///
/// The core only stores and forwards the tag; the shader interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Tricorn,
    Newton1,
    Newton2,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::BurningShip,
        Self::Tricorn,
        Self::Newton1,
        Self::Newton2,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
            Self::Tricorn => "Tricorn",
            Self::Newton1 => "Newton 1",
            Self::Newton2 => "Newton 2",
        }
    }

    /// Tag value of the `fractalKind` uniform.
    #[must_use]
    pub const fn shader_index(self) -> i32 {
        match self {
            Self::Mandelbrot => 0,
            Self::Julia => 1,
            Self::BurningShip => 2,
            Self::Tricorn => 3,
            Self::Newton1 => 4,
            Self::Newton2 => 5,
        }
    }

    #[must_use]
    pub const fn uses_julia_constant(self) -> bool {
        matches!(self, Self::Julia)
    }

    /// Newton fractals colour by root basin and ignore the colour mode.
    #[must_use]
    pub const fn uses_colour_mode(self) -> bool {
        !matches!(self, Self::Newton1 | Self::Newton2)
    }

    /// Looks a kind up by its config/script name, e.g. `burning_ship`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.config_name() == name)
    }

    #[must_use]
    pub const fn config_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burning_ship",
            Self::Tricorn => "tricorn",
            Self::Newton1 => "newton1",
            Self::Newton2 => "newton2",
        }
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
