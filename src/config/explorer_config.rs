use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::errors::ConfigError;
use crate::controllers::interactive::ExplorerController;
use crate::core::data::ScreenSize;
use crate::core::fractals::{ColourModes, FractalKinds};
use crate::core::view::view_state::{DEFAULT_MAX_ITERATIONS, DEFAULT_ZOOM_STEP};
use crate::core::precision::split_value::SPLIT_LIMIT;
use crate::core::view::{HomeView, ViewState, ZOOM_STEP_CEILING, ZoomPolicy};

/// Home camera position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSection {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom_step: f64,
}

impl Default for ViewSection {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

/// Initial fractal parameters. Out-of-range values are clamped when the
/// view is built, the same as UI edits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalSection {
    pub kind: FractalKinds,
    pub colour_mode: ColourModes,
    pub max_iterations: i32,
    pub julia_constant: [f32; 2],
}

impl Default for FractalSection {
    fn default() -> Self {
        Self {
            kind: FractalKinds::default(),
            colour_mode: ColourModes::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS as i32,
            julia_constant: [0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub view: ViewSection,
    pub zoom: ZoomPolicy,
    pub screen: ScreenSize,
    pub fractal: FractalSection,
}

impl ExplorerConfig {
    /// Parses and validates a TOML document. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        log::info!("config loaded from {}", path.display());
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(ConfigError::Io { .. }) => {
                log::info!("no config file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("ignoring config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_within_f32_range(self.view.center_x) {
            return Err(invalid("view.center_x", "must be finite and within f32 range"));
        }
        if !is_within_f32_range(self.view.center_y) {
            return Err(invalid("view.center_y", "must be finite and within f32 range"));
        }
        if !is_valid_zoom_step(self.view.zoom_step) {
            return Err(invalid("view.zoom_step", ZOOM_STEP_REASON));
        }

        let zoom = &self.zoom;
        if !(is_positive_finite(zoom.zoom_in_factor) && zoom.zoom_in_factor < 1.0) {
            return Err(invalid("zoom.zoom_in_factor", "must be between 0 and 1"));
        }
        if !(zoom.zoom_out_factor.is_finite() && zoom.zoom_out_factor > 1.0) {
            return Err(invalid("zoom.zoom_out_factor", "must be a finite number above 1"));
        }
        if zoom.min_zoom_step.is_some_and(|min| !is_valid_zoom_step(min)) {
            return Err(invalid("zoom.min_zoom_step", ZOOM_STEP_REASON));
        }
        if zoom.max_zoom_step.is_some_and(|max| !is_valid_zoom_step(max)) {
            return Err(invalid("zoom.max_zoom_step", ZOOM_STEP_REASON));
        }
        if let (Some(min), Some(max)) = (zoom.min_zoom_step, zoom.max_zoom_step) {
            if min > max {
                return Err(invalid("zoom.min_zoom_step", "must not exceed zoom.max_zoom_step"));
            }
        }

        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(invalid("screen", "width and height must be non-zero"));
        }

        Ok(())
    }

    #[must_use]
    pub fn home_view(&self) -> HomeView {
        HomeView {
            center_x: self.view.center_x,
            center_y: self.view.center_y,
            zoom_step: self.view.zoom_step,
        }
    }

    #[must_use]
    pub fn build_view_state(&self) -> ViewState {
        let mut view = ViewState::new(self.home_view(), self.zoom);
        let fractal = &self.fractal;

        view.set_fractal_kind(fractal.kind);
        view.set_colour_mode(fractal.colour_mode);
        view.set_max_iterations(fractal.max_iterations);
        view.set_julia_constant(fractal.julia_constant[0], fractal.julia_constant[1]);

        view
    }

    #[must_use]
    pub fn build_controller(&self) -> ExplorerController {
        ExplorerController::new(self.build_view_state(), self.screen)
    }
}

const ZOOM_STEP_REASON: &str = "must be positive and small enough for f32 screen edges";

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_within_f32_range(value: f64) -> bool {
    value.is_finite() && value.abs() <= SPLIT_LIMIT
}

fn is_valid_zoom_step(value: f64) -> bool {
    is_positive_finite(value) && value <= ZOOM_STEP_CEILING
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ExplorerConfig::from_toml_str("").unwrap();

        assert_eq!(config, ExplorerConfig::default());
        assert_eq!(config.build_view_state(), ViewState::default());
    }

    #[test]
    fn full_document_is_applied() {
        let config = ExplorerConfig::from_toml_str(
            r#"
            [view]
            center_x = -0.75
            center_y = 0.1
            zoom_step = 1e-6

            [zoom]
            zoom_in_factor = 0.9
            zoom_out_factor = 1.1
            min_zoom_step = 1e-15

            [screen]
            width = 1280
            height = 720

            [fractal]
            kind = "julia"
            colour_mode = "electrical"
            max_iterations = 400
            julia_constant = [-0.8, 0.156]
            "#,
        )
        .unwrap();

        let view = config.build_view_state();

        assert_eq!(view.center_x(), -0.75);
        assert_eq!(view.center_y(), 0.1);
        assert_eq!(view.zoom_step(), 1e-6);
        assert_eq!(view.zoom_policy().zoom_in_factor, 0.9);
        assert_eq!(view.zoom_policy().min_zoom_step, Some(1e-15));
        assert_eq!(view.zoom_policy().max_zoom_step, None);
        assert_eq!(view.fractal_kind(), FractalKinds::Julia);
        assert_eq!(view.colour_mode(), ColourModes::Electrical);
        assert_eq!(view.max_iterations(), 400);
        assert_eq!(view.julia_constant(), [-0.8, 0.156]);
        assert_eq!(config.screen, ScreenSize { width: 1280, height: 720 });
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = ExplorerConfig::from_toml_str("[screen]\nwidth = 1024\n").unwrap();

        assert_eq!(config.screen.width, 1024);
        assert_eq!(config.screen.height, 600);
        assert_eq!(config.zoom, ZoomPolicy::default());
    }

    #[test]
    fn out_of_range_fractal_values_are_clamped() {
        let config = ExplorerConfig::from_toml_str(
            "[fractal]\nmax_iterations = 5000\njulia_constant = [3.0, -2.5]\n",
        )
        .unwrap();

        let view = config.build_view_state();

        assert_eq!(view.max_iterations(), 1000);
        assert_eq!(view.julia_constant(), [2.0, -2.0]);
    }

    #[test]
    fn rejects_non_positive_zoom_step() {
        let error = ExplorerConfig::from_toml_str("[view]\nzoom_step = 0.0\n").unwrap_err();

        assert!(matches!(
            error,
            ConfigError::Invalid {
                field: "view.zoom_step",
                ..
            }
        ));
    }

    #[test]
    fn rejects_values_outside_f32_range() {
        let center = ExplorerConfig::from_toml_str("[view]\ncenter_x = 1e39\n").unwrap_err();
        let zoom_step = ExplorerConfig::from_toml_str("[view]\nzoom_step = 1e30\n").unwrap_err();
        let max_step = ExplorerConfig::from_toml_str("[zoom]\nmax_zoom_step = 1e35\n").unwrap_err();

        assert!(matches!(
            center,
            ConfigError::Invalid {
                field: "view.center_x",
                ..
            }
        ));
        assert!(matches!(
            zoom_step,
            ConfigError::Invalid {
                field: "view.zoom_step",
                ..
            }
        ));
        assert!(matches!(
            max_step,
            ConfigError::Invalid {
                field: "zoom.max_zoom_step",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zoom_factors_on_the_wrong_side_of_one() {
        let zoom_in = ExplorerConfig::from_toml_str("[zoom]\nzoom_in_factor = 1.04\n").unwrap_err();
        let zoom_out = ExplorerConfig::from_toml_str("[zoom]\nzoom_out_factor = 0.96\n").unwrap_err();

        assert!(matches!(
            zoom_in,
            ConfigError::Invalid {
                field: "zoom.zoom_in_factor",
                ..
            }
        ));
        assert!(matches!(
            zoom_out,
            ConfigError::Invalid {
                field: "zoom.zoom_out_factor",
                ..
            }
        ));
    }

    #[test]
    fn rejects_inverted_clamp_range() {
        let error = ExplorerConfig::from_toml_str(
            "[zoom]\nmin_zoom_step = 1.0\nmax_zoom_step = 0.5\n",
        )
        .unwrap_err();

        assert!(matches!(
            error,
            ConfigError::Invalid {
                field: "zoom.min_zoom_step",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_screen() {
        let error = ExplorerConfig::from_toml_str("[screen]\nheight = 0\n").unwrap_err();

        assert!(matches!(error, ConfigError::Invalid { field: "screen", .. }));
    }

    #[test]
    fn unknown_fractal_name_is_a_parse_error() {
        let error = ExplorerConfig::from_toml_str("[fractal]\nkind = \"koch\"\n").unwrap_err();

        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error_and_falls_back_to_defaults() {
        let path = Path::new("definitely/not/here/explorer.toml");

        assert!(matches!(
            ExplorerConfig::load_from_file(path),
            Err(ConfigError::Io { .. })
        ));
        assert_eq!(ExplorerConfig::load_or_default(path), ExplorerConfig::default());
    }

    #[test]
    fn serialised_defaults_parse_back() {
        let text = toml::to_string(&ExplorerConfig::default()).unwrap();

        assert_eq!(
            ExplorerConfig::from_toml_str(&text).unwrap(),
            ExplorerConfig::default()
        );
    }

    #[test]
    fn build_controller_uses_configured_screen() {
        let config = ExplorerConfig {
            screen: ScreenSize {
                width: 320,
                height: 200,
            },
            ..ExplorerConfig::default()
        };

        let controller = config.build_controller();

        assert_eq!(controller.screen(), config.screen);
        assert_eq!(controller.view(), &ViewState::default());
    }
}
