use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{LineChartConfig, LineChartStyle, PieChartConfig, PieChartStyle};
use crate::core::{
    AxisLayout, AxisScale, DrawArea, LinePlot, PieItem, PieSlice, PlottedPoint, SeriesPalette,
    compute_scale, format_volume, layout_axes, plot_line_series, plot_pie_slices,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, CirclePrimitive, Color, CubicPathPrimitive, LinePrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};

/// Raw input for one line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartData {
    pub series: Vec<Vec<f64>>,
    pub category_labels: Vec<String>,
    pub palette: SeriesPalette,
}

impl LineChartData {
    #[must_use]
    pub fn new(
        series: Vec<Vec<f64>>,
        category_labels: Vec<String>,
        palette: SeriesPalette,
    ) -> Self {
        Self {
            series,
            category_labels,
            palette,
        }
    }
}

/// Raw input for one pie chart. `colors` runs parallel to `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartData {
    pub items: Vec<PieItem>,
    pub colors: Vec<Color>,
    pub unit: String,
}

impl PieChartData {
    #[must_use]
    pub fn new(items: Vec<PieItem>, colors: Vec<Color>, unit: impl Into<String>) -> Self {
        Self {
            items,
            colors,
            unit: unit.into(),
        }
    }
}

/// Everything needed to draw a line chart, in drawing space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartPlan {
    pub area: DrawArea,
    pub scale: AxisScale,
    pub axes: AxisLayout,
    pub plot: LinePlot,
}

/// Legend row for one pie slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub value_text: String,
    pub color: Color,
}

/// Everything needed to draw a pie chart and its legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartPlan {
    pub slices: Vec<PieSlice>,
    pub legend: Vec<LegendEntry>,
}

/// Scales all series together, then plots points, curves and axes.
pub fn plan_line_chart(data: &LineChartData, config: &LineChartConfig) -> ChartResult<LineChartPlan> {
    let area = config.draw_area().validate()?;
    let readings: Vec<f64> = data.series.iter().flatten().copied().collect();
    let scale = compute_scale(&readings, config.tick_count)?;
    let plot = plot_line_series(
        &data.series,
        &data.category_labels,
        &scale,
        area,
        &data.palette,
    )?;
    let axes = layout_axes(&scale, &data.category_labels, area)?;

    debug!(
        series = data.series.len(),
        lower_bound = scale.lower_bound(),
        upper_bound = scale.upper_bound(),
        "planned line chart"
    );

    Ok(LineChartPlan {
        area,
        scale,
        axes,
        plot,
    })
}

pub fn plan_pie_chart(data: &PieChartData, config: &PieChartConfig) -> ChartResult<PieChartPlan> {
    if data.colors.len() != data.items.len() {
        return Err(ChartError::InvalidInput(format!(
            "expected {} pie colors, got {}",
            data.items.len(),
            data.colors.len()
        )));
    }
    let slices = plot_pie_slices(&data.items, config.gap_degrees, config.start_angle)?;
    let legend = slices
        .iter()
        .map(|slice| LegendEntry {
            label: slice.label.clone(),
            value_text: format_volume(slice.magnitude, &data.unit),
            color: data.colors[slice.color_index],
        })
        .collect();

    Ok(PieChartPlan { slices, legend })
}

impl LineChartPlan {
    /// Translates the plan into draw primitives: gridlines, curves, dots, labels.
    pub fn to_render_frame(&self, style: &LineChartStyle) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.area.width, self.area.height);

        for gridline in &self.axes.gridlines {
            frame = frame
                .with_line(LinePrimitive::new(
                    gridline.x_start,
                    gridline.y,
                    gridline.x_end,
                    gridline.y,
                    style.grid_stroke_width,
                    style.grid_color,
                ))
                .with_text(TextPrimitive::new(
                    gridline.label.clone(),
                    gridline.x_start - style.tick_label_offset_px,
                    gridline.y,
                    style.font_size_px,
                    style.text_color,
                    TextHAlign::Right,
                ));
        }

        for (path, colors) in self.plot.paths.iter().zip(&self.plot.colors) {
            if !path.curves.is_empty() {
                frame = frame.with_path(CubicPathPrimitive::new(
                    path.curves.clone(),
                    style.line_stroke_width,
                    colors.line,
                ));
            }
            for point in &path.points {
                frame = frame.with_circle(CirclePrimitive::new(
                    *point,
                    style.dot_radius,
                    colors.dot,
                ));
            }
        }

        for marker in &self.axes.category_markers {
            frame = frame.with_text(TextPrimitive::new(
                marker.label.clone(),
                marker.x,
                marker.y + style.category_label_offset_px,
                style.font_size_px,
                style.text_color,
                TextHAlign::Center,
            ));
        }

        frame.validate()?;
        Ok(frame)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize plan: {e}")))
    }
}

impl PieChartPlan {
    /// Translates slices into ring arcs centered in a `style.size` square.
    pub fn to_render_frame(&self, style: &PieChartStyle) -> ChartResult<RenderFrame> {
        let center = PlottedPoint::new(style.size / 2.0, style.size / 2.0);
        let radius = style.size * style.ring_ratio / 2.0;

        let mut frame = RenderFrame::new(style.size, style.size);
        for slice in &self.slices {
            if slice.sweep_angle <= 0.0 {
                continue;
            }
            let color = self
                .legend
                .get(slice.color_index)
                .map(|entry| entry.color)
                .ok_or_else(|| {
                    ChartError::InvalidInput(format!(
                        "slice `{}` has no legend entry at {}",
                        slice.label, slice.color_index
                    ))
                })?;
            frame = frame.with_arc(ArcPrimitive {
                center,
                radius,
                start_angle: slice.start_angle,
                sweep_angle: slice.sweep_angle,
                stroke_width: style.stroke_width,
                color,
            });
        }

        frame.validate()?;
        Ok(frame)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize plan: {e}")))
    }
}
