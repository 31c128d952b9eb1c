use serde::{Deserialize, Serialize};

use crate::core::{CubicSegment, PlottedPoint};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from a `0xRRGGBB` value.
    #[must_use]
    pub fn from_hex_rgb(hex: u32) -> Self {
        let channel = |shift: u32| f64::from((hex >> shift) & 0xFF) / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidInput(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn validate_stroke_width(stroke_width: f64, what: &str) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(ChartError::InvalidInput(format!(
            "{what} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}

fn validate_point(point: PlottedPoint, what: &str) -> ChartResult<()> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return Err(ChartError::InvalidInput(format!(
            "{what} coordinates must be finite"
        )));
    }
    Ok(())
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        validate_point(PlottedPoint::new(self.x1, self.y1), "line")?;
        validate_point(PlottedPoint::new(self.x2, self.y2), "line")?;
        validate_stroke_width(self.stroke_width, "line")?;
        self.color.validate()
    }
}

/// Stroked chain of cubic Bezier pieces.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicPathPrimitive {
    pub curves: Vec<CubicSegment>,
    pub stroke_width: f64,
    pub color: Color,
}

impl CubicPathPrimitive {
    #[must_use]
    pub fn new(curves: Vec<CubicSegment>, stroke_width: f64, color: Color) -> Self {
        Self {
            curves,
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for curve in &self.curves {
            for point in [curve.start, curve.control1, curve.control2, curve.end] {
                validate_point(point, "curve")?;
            }
        }
        validate_stroke_width(self.stroke_width, "curve")?;
        self.color.validate()
    }
}

/// Filled circle, used for data-point dots and legend swatches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center: PlottedPoint,
    pub radius: f64,
    pub color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(center: PlottedPoint, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        validate_point(self.center, "circle")?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::invalid("circle radius must be finite and > 0"));
        }
        self.color.validate()
    }
}

/// Open stroked arc; angles in degrees, clockwise on a y-down surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPrimitive {
    pub center: PlottedPoint,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl ArcPrimitive {
    pub fn validate(self) -> ChartResult<()> {
        validate_point(self.center, "arc")?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::invalid("arc radius must be finite and > 0"));
        }
        if !self.start_angle.is_finite() || !self.sweep_angle.is_finite() {
            return Err(ChartError::invalid("arc angles must be finite"));
        }
        validate_stroke_width(self.stroke_width, "arc")?;
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::invalid("text primitive must not be empty"));
        }
        validate_point(PlottedPoint::new(self.x, self.y), "text")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::invalid("font size must be finite and > 0"));
        }
        self.color.validate()
    }
}
