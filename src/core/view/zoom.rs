use serde::{Deserialize, Serialize};

pub const DEFAULT_ZOOM_IN_FACTOR: f64 = 0.96;
pub const DEFAULT_ZOOM_OUT_FACTOR: f64 = 1.04;
/// Largest zoom step whose screen edges stay within `f32` range for any
/// `u32` screen size.
pub const ZOOM_STEP_CEILING: f64 = f32::MAX as f64 / 2_147_483_648.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Scrolling up (positive delta) zooms out, anything else zooms in.
    #[must_use]
    pub fn from_scroll_delta(delta: f32) -> Self {
        if delta > 0.0 { Self::Out } else { Self::In }
    }
}

/// Per-tick growth factors for the zoom step and an optional clamp.
///
/// The default factors are not exact reciprocals (`0.96 * 1.04 = 0.9984`),
/// so equal numbers of in and out ticks drift slowly inwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomPolicy {
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    pub min_zoom_step: Option<f64>,
    pub max_zoom_step: Option<f64>,
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self {
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out_factor: DEFAULT_ZOOM_OUT_FACTOR,
            min_zoom_step: None,
            max_zoom_step: None,
        }
    }
}

impl ZoomPolicy {
    #[must_use]
    pub const fn factor(&self, direction: ZoomDirection) -> f64 {
        match direction {
            ZoomDirection::In => self.zoom_in_factor,
            ZoomDirection::Out => self.zoom_out_factor,
        }
    }

    /// Next zoom step after one tick in `direction`.
    ///
    /// A result that is not finite and strictly positive leaves the step
    /// unchanged, as does growing past [`ZOOM_STEP_CEILING`].
    #[must_use]
    pub fn apply(&self, zoom_step: f64, direction: ZoomDirection) -> f64 {
        let mut next = zoom_step * self.factor(direction);

        if let Some(min) = self.min_zoom_step {
            next = next.max(min);
        }
        if let Some(max) = self.max_zoom_step {
            next = next.min(max);
        }

        let within_ceiling = next <= ZOOM_STEP_CEILING || next < zoom_step;
        if next.is_finite() && next > 0.0 && within_ceiling {
            next
        } else {
            zoom_step
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn positive_scroll_zooms_out() {
        assert_eq!(ZoomDirection::from_scroll_delta(1.0), ZoomDirection::Out);
        assert_eq!(ZoomDirection::from_scroll_delta(0.25), ZoomDirection::Out);
    }

    #[test]
    fn negative_or_zero_scroll_zooms_in() {
        assert_eq!(ZoomDirection::from_scroll_delta(-1.0), ZoomDirection::In);
        assert_eq!(ZoomDirection::from_scroll_delta(0.0), ZoomDirection::In);
    }

    #[test]
    fn default_factors_bracket_one() {
        let policy = ZoomPolicy::default();

        assert!(policy.zoom_in_factor < 1.0);
        assert!(policy.zoom_out_factor > 1.0);
        assert_relative_eq!(
            policy.zoom_in_factor * policy.zoom_out_factor,
            0.9984,
            epsilon = 1e-12
        );
    }

    #[test]
    fn apply_multiplies_by_direction_factor() {
        let policy = ZoomPolicy::default();

        assert_relative_eq!(policy.apply(1.0, ZoomDirection::Out), 1.04);
        assert_relative_eq!(policy.apply(1.0, ZoomDirection::In), 0.96);
    }

    #[test]
    fn apply_honours_clamp_range() {
        let policy = ZoomPolicy {
            min_zoom_step: Some(0.5),
            max_zoom_step: Some(2.0),
            ..ZoomPolicy::default()
        };

        assert_eq!(policy.apply(0.51, ZoomDirection::In), 0.5);
        assert_eq!(policy.apply(1.99, ZoomDirection::Out), 2.0);
    }

    #[test]
    fn apply_keeps_step_when_result_underflows() {
        let policy = ZoomPolicy {
            zoom_in_factor: 0.25,
            ..ZoomPolicy::default()
        };
        let smallest = f64::from_bits(1);

        assert_eq!(policy.apply(smallest, ZoomDirection::In), smallest);
    }

    #[test]
    fn apply_keeps_step_when_result_overflows() {
        let policy = ZoomPolicy::default();

        assert_eq!(policy.apply(f64::MAX, ZoomDirection::Out), f64::MAX);
    }

    #[test]
    fn apply_stops_growing_at_ceiling() {
        let policy = ZoomPolicy::default();

        assert_eq!(
            policy.apply(ZOOM_STEP_CEILING, ZoomDirection::Out),
            ZOOM_STEP_CEILING
        );
        assert!(policy.apply(ZOOM_STEP_CEILING, ZoomDirection::In) < ZOOM_STEP_CEILING);
    }

    #[test]
    fn step_above_ceiling_can_still_zoom_in() {
        let policy = ZoomPolicy::default();
        let step = ZOOM_STEP_CEILING * 10.0;

        assert_relative_eq!(policy.apply(step, ZoomDirection::In), step * 0.96);
    }
}
