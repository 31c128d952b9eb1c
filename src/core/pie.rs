use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_GAP_DEGREES: f64 = 4.0;
pub const DEFAULT_START_ANGLE: f64 = 270.0;

/// Labelled magnitude fed into the pie plotter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieItem {
    pub label: String,
    pub magnitude: f64,
}

impl PieItem {
    #[must_use]
    pub fn new(label: impl Into<String>, magnitude: f64) -> Self {
        Self {
            label: label.into(),
            magnitude,
        }
    }
}

/// Angular placement of one slice, in degrees.
///
/// Angles follow the drawing-surface convention of the host canvas: `0` points
/// right and positive sweeps run clockwise on a y-down surface. Start angles
/// are not wrapped, so later slices may report values above `360`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub magnitude: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub color_index: usize,
}

impl PieSlice {
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }
}

/// Splits the circle proportionally to item magnitudes.
///
/// Every slice is followed by a `gap_degrees` gap, so the sweeps add up to
/// `360 - items.len() * gap_degrees`.
pub fn plot_pie_slices(
    items: &[PieItem],
    gap_degrees: f64,
    start_angle: f64,
) -> ChartResult<Vec<PieSlice>> {
    if items.is_empty() {
        return Err(ChartError::invalid("pie chart needs at least one item"));
    }
    if !gap_degrees.is_finite() || gap_degrees < 0.0 {
        return Err(ChartError::invalid("gap angle must be finite and >= 0"));
    }
    if !start_angle.is_finite() {
        return Err(ChartError::invalid("start angle must be finite"));
    }
    if let Some(item) = items
        .iter()
        .find(|item| !item.magnitude.is_finite() || item.magnitude < 0.0)
    {
        return Err(ChartError::InvalidInput(format!(
            "magnitude of `{}` must be finite and >= 0, got {}",
            item.label, item.magnitude
        )));
    }

    let total: f64 = items.iter().map(|item| item.magnitude).sum();
    if total <= 0.0 {
        return Err(ChartError::invalid("pie chart total magnitude must be > 0"));
    }
    if !total.is_finite() {
        return Err(ChartError::invalid("pie chart total magnitude overflows f64"));
    }

    let available = 360.0 - items.len() as f64 * gap_degrees;
    if available <= 0.0 {
        return Err(ChartError::InvalidInput(format!(
            "{} gaps of {gap_degrees} degrees leave no room for slices",
            items.len()
        )));
    }

    let mut cursor = start_angle;
    let slices: Vec<PieSlice> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let sweep_angle = item.magnitude / total * available;
            let slice = PieSlice {
                label: item.label.clone(),
                magnitude: item.magnitude,
                start_angle: cursor,
                sweep_angle,
                color_index: index,
            };
            cursor += sweep_angle + gap_degrees;
            slice
        })
        .collect();

    debug!(slices = slices.len(), total, "plotted pie slices");
    Ok(slices)
}

/// [`plot_pie_slices`] with the default gap and a start at the top of the circle.
pub fn plot_pie_slices_default(items: &[PieItem]) -> ChartResult<Vec<PieSlice>> {
    plot_pie_slices(items, DEFAULT_GAP_DEGREES, DEFAULT_START_ANGLE)
}
