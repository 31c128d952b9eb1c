use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::DrawArea;
use crate::error::{ChartError, ChartResult};

/// Human-readable value axis derived from a set of readings.
///
/// Bounds are whole multiples of `step`, never the raw data extrema, and
/// `tick_values` runs from `upper_bound` down to `lower_bound` so labels can
/// be laid out top-to-bottom on a vertical axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    lower_bound: f64,
    upper_bound: f64,
    step: f64,
    tick_values: Vec<f64>,
}

impl AxisScale {
    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Distance between two adjacent ticks.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_values.len()
    }

    #[must_use]
    pub fn tick_values(&self) -> &[f64] {
        &self.tick_values
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Checks the invariants `compute_scale` guarantees.
    ///
    /// Scales built elsewhere (for example deserialized from JSON) must pass
    /// this before they are used for plotting.
    pub fn validate(&self) -> ChartResult<&Self> {
        let fields_finite = self.lower_bound.is_finite()
            && self.upper_bound.is_finite()
            && self.step.is_finite()
            && self.tick_values.iter().all(|value| value.is_finite());
        if !fields_finite {
            return Err(ChartError::invalid("axis scale values must be finite"));
        }
        if self.span() <= 0.0 || self.step <= 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "axis scale span {}..{} must be > 0",
                self.lower_bound, self.upper_bound
            )));
        }
        if self.tick_values.len() < 2 {
            return Err(ChartError::invalid("axis scale needs at least two ticks"));
        }
        Ok(self)
    }

    /// Maps a data value onto the vertical extent of `area`.
    ///
    /// `lower_bound` lands on the bottom edge of the plot region and
    /// `upper_bound` on the top edge. Values outside the bounds are not clamped.
    #[must_use]
    pub fn value_to_y(&self, value: f64, area: DrawArea) -> f64 {
        let normalized = (value - self.lower_bound) / self.span();
        area.bottom() - normalized * area.plot_height()
    }
}

/// Computes an evenly spaced, integer-stepped axis covering `readings`.
///
/// The step is `max(1, round(span / (desired_ticks - 1)))`; the lower bound is
/// the step multiple at or below the minimum reading. When the resulting
/// upper bound would fall short of the maximum, the step is widened (never
/// the tick count) until the maximum fits.
pub fn compute_scale(readings: &[f64], desired_ticks: usize) -> ChartResult<AxisScale> {
    if readings.is_empty() {
        return Err(ChartError::invalid("readings must not be empty"));
    }
    if desired_ticks < 2 {
        return Err(ChartError::InvalidInput(format!(
            "tick count must be >= 2, got {desired_ticks}"
        )));
    }
    if readings.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::invalid("readings must be finite"));
    }

    let min = readings
        .iter()
        .copied()
        .map(OrderedFloat)
        .min()
        .map_or(0.0, |value| value.0);
    let max = readings
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |value| value.0);

    let intervals = (desired_ticks - 1) as f64;
    let mut step = ((max - min) / intervals).round().max(1.0);
    let mut lower_bound = snapped_lower_bound(min, step);
    let mut upper_bound = lower_bound + step * intervals;

    while upper_bound < max {
        let required = ((max - lower_bound) / intervals).ceil().max(step + 1.0);
        // `step + 1.0` stops growing past 2^53.
        step = if required > step { required } else { step * 2.0 };
        lower_bound = snapped_lower_bound(min, step);
        upper_bound = lower_bound + step * intervals;
    }

    if !step.is_finite() || !lower_bound.is_finite() || !upper_bound.is_finite() {
        return Err(ChartError::InvalidInput(format!(
            "reading span {min}..{max} is too wide for a {desired_ticks}-tick axis"
        )));
    }

    let tick_values = (0..desired_ticks)
        .map(|index| upper_bound - step * index as f64)
        .collect();

    trace!(
        count = readings.len(),
        min,
        max,
        lower_bound,
        upper_bound,
        step,
        "computed axis scale"
    );

    Ok(AxisScale {
        lower_bound,
        upper_bound,
        step,
        tick_values,
    })
}

// Volumes are never negative, so non-negative data keeps a non-negative axis.
// Negative data still gets a bound at or below its minimum.
fn snapped_lower_bound(min: f64, step: f64) -> f64 {
    let snapped = (min / step).floor() * step;
    if min >= 0.0 { snapped.max(0.0) } else { snapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapped_lower_bound_never_crosses_zero_for_non_negative_minimum() {
        assert_eq!(snapped_lower_bound(0.0, 3.0), 0.0);
        assert_eq!(snapped_lower_bound(2.9, 3.0), 0.0);
        assert_eq!(snapped_lower_bound(7.0, 3.0), 6.0);
        assert_eq!(snapped_lower_bound(-0.5, 1.0), -1.0);
    }

    #[test]
    fn widening_keeps_tick_count() {
        let scale = compute_scale(&[1.4, 2.6], 2).expect("scale");
        assert_eq!(scale.tick_count(), 2);
        assert!(scale.upper_bound() >= 2.6);
        assert!(scale.lower_bound() <= 1.4);
    }
}
