#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisScale, DrawArea, PlottedPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Straight line segment in drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// One cubic Bezier piece between two consecutive plotted points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub start: PlottedPoint,
    pub control1: PlottedPoint,
    pub control2: PlottedPoint,
    pub end: PlottedPoint,
}

impl CubicSegment {
    /// Builds the S-curve used between two data points.
    ///
    /// Both control points sit halfway between the endpoints horizontally and
    /// keep their own endpoint's `y`, so the curve never leaves the vertical
    /// range spanned by `start` and `end`.
    #[must_use]
    pub fn smooth(start: PlottedPoint, end: PlottedPoint) -> Self {
        let mid_x = (start.x + end.x) / 2.0;
        Self {
            start,
            control1: PlottedPoint::new(mid_x, start.y),
            control2: PlottedPoint::new(mid_x, end.y),
            end,
        }
    }
}

/// Smooth curve through every point of one series.
///
/// `curves` holds `points.len() - 1` pieces; a single-point series has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub points: Vec<PlottedPoint>,
    pub curves: Vec<CubicSegment>,
}

impl PathSegment {
    #[must_use]
    pub fn through(points: Vec<PlottedPoint>) -> Self {
        let curves = points
            .windows(2)
            .map(|pair| CubicSegment::smooth(pair[0], pair[1]))
            .collect();
        Self { points, curves }
    }

    /// Straight polyline alternative to `curves`.
    #[must_use]
    pub fn line_segments(&self) -> Vec<LineSegment> {
        self.points
            .windows(2)
            .map(|pair| LineSegment {
                x1: pair[0].x,
                y1: pair[0].y,
                x2: pair[1].x,
                y2: pair[1].y,
            })
            .collect()
    }
}

/// Line and dot colors, one entry per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPalette {
    pub line_colors: Vec<Color>,
    pub dot_colors: Vec<Color>,
}

impl SeriesPalette {
    #[must_use]
    pub fn new(line_colors: Vec<Color>, dot_colors: Vec<Color>) -> Self {
        Self {
            line_colors,
            dot_colors,
        }
    }

    /// Same line and dot color for a single series.
    #[must_use]
    pub fn single(line_color: Color, dot_color: Color) -> Self {
        Self::new(vec![line_color], vec![dot_color])
    }
}

/// Colors resolved for one plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesColors {
    pub line: Color,
    pub dot: Color,
}

/// Drawing-space geometry for a multi-series line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePlot {
    pub points: Vec<Vec<PlottedPoint>>,
    pub paths: Vec<PathSegment>,
    pub colors: Vec<SeriesColors>,
}

/// Horizontal center of category band `index` out of `band_count`.
///
/// Shared with axis label placement so category labels line up with points.
#[must_use]
pub fn category_center_x(index: usize, band_count: usize, area: DrawArea) -> f64 {
    let band_width = area.plot_width() / band_count as f64;
    area.left() + band_width * (index as f64 + 0.5)
}

/// Maps every series onto `area` and builds one smooth path per series.
///
/// All preconditions are checked before any geometry is produced, so an
/// error never comes with partial output.
pub fn plot_line_series(
    series: &[Vec<f64>],
    category_labels: &[String],
    scale: &AxisScale,
    area: DrawArea,
    palette: &SeriesPalette,
) -> ChartResult<LinePlot> {
    let area = area.validate()?;
    scale.validate()?;
    validate_series(series, category_labels)?;
    if palette.line_colors.len() != series.len() || palette.dot_colors.len() != series.len() {
        return Err(ChartError::InvalidInput(format!(
            "expected {} line and dot colors, got {} line and {} dot colors",
            series.len(),
            palette.line_colors.len(),
            palette.dot_colors.len()
        )));
    }

    let band_count = category_labels.len();

    #[cfg(feature = "parallel-projection")]
    let points: Vec<Vec<PlottedPoint>> = series
        .par_iter()
        .map(|readings| project_series(readings, band_count, scale, area))
        .collect();

    #[cfg(not(feature = "parallel-projection"))]
    let points: Vec<Vec<PlottedPoint>> = series
        .iter()
        .map(|readings| project_series(readings, band_count, scale, area))
        .collect();

    let paths = points
        .iter()
        .map(|projected| PathSegment::through(projected.clone()))
        .collect();
    let colors = palette
        .line_colors
        .iter()
        .zip(&palette.dot_colors)
        .map(|(line, dot)| SeriesColors {
            line: *line,
            dot: *dot,
        })
        .collect();

    debug!(
        series = series.len(),
        categories = band_count,
        "plotted line series"
    );

    Ok(LinePlot {
        points,
        paths,
        colors,
    })
}

/// Single-series form of [`plot_line_series`].
pub fn plot_single_series(
    readings: &[f64],
    category_labels: &[String],
    scale: &AxisScale,
    area: DrawArea,
    line_color: Color,
    dot_color: Color,
) -> ChartResult<LinePlot> {
    plot_line_series(
        &[readings.to_vec()],
        category_labels,
        scale,
        area,
        &SeriesPalette::single(line_color, dot_color),
    )
}

fn validate_series(series: &[Vec<f64>], category_labels: &[String]) -> ChartResult<()> {
    if series.is_empty() {
        return Err(ChartError::invalid("at least one series is required"));
    }
    if category_labels.is_empty() {
        return Err(ChartError::invalid("category labels must not be empty"));
    }
    for (index, readings) in series.iter().enumerate() {
        if readings.len() != category_labels.len() {
            return Err(ChartError::InvalidInput(format!(
                "series {index} has {} readings but there are {} category labels",
                readings.len(),
                category_labels.len()
            )));
        }
        if readings.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidInput(format!(
                "series {index} contains a non-finite reading"
            )));
        }
    }
    Ok(())
}

fn project_series(
    readings: &[f64],
    band_count: usize,
    scale: &AxisScale,
    area: DrawArea,
) -> Vec<PlottedPoint> {
    readings
        .iter()
        .enumerate()
        .map(|(index, value)| {
            PlottedPoint::new(
                category_center_x(index, band_count, area),
                scale.value_to_y(*value, area),
            )
        })
        .collect()
}
