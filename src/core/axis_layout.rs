use serde::{Deserialize, Serialize};

use crate::core::line_series::category_center_x;
use crate::core::{AxisScale, DrawArea};
use crate::error::{ChartError, ChartResult};

/// Horizontal gridline for one tick value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisGridline {
    pub value: f64,
    pub label: String,
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
}

/// Category label anchored under the matching data column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMarker {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Axis decorations positioned with the same mapping used for data points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub gridlines: Vec<AxisGridline>,
    pub category_markers: Vec<CategoryMarker>,
}

pub fn layout_axes(
    scale: &AxisScale,
    category_labels: &[String],
    area: DrawArea,
) -> ChartResult<AxisLayout> {
    let area = area.validate()?;
    scale.validate()?;
    if category_labels.is_empty() {
        return Err(ChartError::invalid("category labels must not be empty"));
    }

    let gridlines = scale
        .tick_values()
        .iter()
        .map(|value| AxisGridline {
            value: *value,
            label: format_tick_label(*value),
            y: scale.value_to_y(*value, area),
            x_start: area.left(),
            x_end: area.right(),
        })
        .collect();

    let band_count = category_labels.len();
    let category_markers = category_labels
        .iter()
        .enumerate()
        .map(|(index, label)| CategoryMarker {
            label: label.clone(),
            x: category_center_x(index, band_count, area),
            y: area.bottom(),
        })
        .collect();

    Ok(AxisLayout {
        gridlines,
        category_markers,
    })
}

/// Renders a tick as an integer when it is one, which is always the case for
/// scales built by `compute_scale`.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
