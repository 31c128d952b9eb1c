use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Rectangular drawing surface with a uniform inset on every side.
///
/// `width` and `height` are in drawing-space units (pixels or dp); the plot
/// region is `padding..width - padding` horizontally and
/// `padding..height - padding` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl DrawArea {
    #[must_use]
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.width.is_finite() || !self.height.is_finite() || !self.padding.is_finite() {
            return Err(ChartError::invalid(
                "draw area dimensions must be finite",
            ));
        }
        if self.padding < 0.0 {
            return Err(ChartError::invalid("draw area padding must be >= 0"));
        }
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "draw area {}x{} leaves no room inside padding {}",
                self.width, self.height, self.padding
            )));
        }
        Ok(self)
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.width - 2.0 * self.padding
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.height - 2.0 * self.padding
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.width - self.padding
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.height - self.padding
    }
}

/// Point in drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlottedPoint {
    pub x: f64,
    pub y: f64,
}

impl PlottedPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
