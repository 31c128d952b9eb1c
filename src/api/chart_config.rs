use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_GAP_DEGREES, DEFAULT_START_ANGLE, DrawArea};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Chart colors used by the water statistics screens.
pub mod palette {
    use crate::render::Color;

    pub const CHART_BLUE: Color = Color::rgb(0.0, 135.0 / 255.0, 254.0 / 255.0);
    pub const CHART_GREEN: Color = Color::rgb(42.0 / 255.0, 209.0 / 255.0, 0.0);
    pub const CHART_RED: Color = Color::rgb(254.0 / 255.0, 46.0 / 255.0, 46.0 / 255.0);
    pub const CHART_YELLOW: Color = Color::rgb(226.0 / 255.0, 185.0 / 255.0, 59.0 / 255.0);
    pub const GRID_GREY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TEXT_BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
}

/// Geometry setup for a line chart.
///
/// Serializable so host applications can persist chart setup without
/// inventing their own format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(default = "default_line_width")]
    pub width: f64,
    #[serde(default = "default_line_height")]
    pub height: f64,
    #[serde(default = "default_line_padding")]
    pub padding: f64,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: default_line_width(),
            height: default_line_height(),
            padding: default_line_padding(),
            tick_count: default_tick_count(),
        }
    }
}

impl LineChartConfig {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn draw_area(self) -> DrawArea {
        DrawArea::new(self.width, self.height, self.padding)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidInput(format!("failed to parse config: {e}")))
    }
}

/// Angular setup for a pie chart, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    #[serde(default = "default_gap_degrees")]
    pub gap_degrees: f64,
    #[serde(default = "default_start_angle")]
    pub start_angle: f64,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            gap_degrees: default_gap_degrees(),
            start_angle: default_start_angle(),
        }
    }
}

impl PieChartConfig {
    #[must_use]
    pub fn with_gap_degrees(mut self, gap_degrees: f64) -> Self {
        self.gap_degrees = gap_degrees;
        self
    }

    #[must_use]
    pub fn with_start_angle(mut self, start_angle: f64) -> Self {
        self.start_angle = start_angle;
        self
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidInput(format!("failed to parse config: {e}")))
    }
}

/// Stroke and text styling used when turning a line plan into a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineChartStyle {
    pub line_stroke_width: f64,
    pub dot_radius: f64,
    pub grid_stroke_width: f64,
    pub grid_color: Color,
    pub text_color: Color,
    pub font_size_px: f64,
    /// Horizontal distance between the plot's left edge and tick labels.
    pub tick_label_offset_px: f64,
    /// Vertical distance between the plot's bottom edge and category labels.
    pub category_label_offset_px: f64,
}

impl Default for LineChartStyle {
    fn default() -> Self {
        Self {
            line_stroke_width: 3.0,
            dot_radius: 5.0,
            grid_stroke_width: 2.0,
            grid_color: palette::GRID_GREY,
            text_color: palette::TEXT_BLACK,
            font_size_px: 12.0,
            tick_label_offset_px: 8.0,
            category_label_offset_px: 16.0,
        }
    }
}

/// Ring styling for pie charts; slices are open arcs, not filled wedges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieChartStyle {
    pub size: f64,
    /// Ring diameter relative to `size`.
    pub ring_ratio: f64,
    pub stroke_width: f64,
}

impl Default for PieChartStyle {
    fn default() -> Self {
        Self {
            size: 180.0,
            ring_ratio: 0.5,
            stroke_width: 45.0,
        }
    }
}

fn default_line_width() -> f64 {
    360.0
}

fn default_line_height() -> f64 {
    200.0
}

fn default_line_padding() -> f64 {
    20.0
}

fn default_tick_count() -> usize {
    5
}

fn default_gap_degrees() -> f64 {
    DEFAULT_GAP_DEGREES
}

fn default_start_angle() -> f64 {
    DEFAULT_START_ANGLE
}
