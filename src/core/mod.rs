pub mod axis_layout;
pub mod axis_scale;
pub mod line_series;
pub mod pie;
pub mod types;
pub mod units;

pub use axis_layout::{AxisGridline, AxisLayout, CategoryMarker, format_tick_label, layout_axes};
pub use axis_scale::{AxisScale, compute_scale};
pub use line_series::{
    CubicSegment, LinePlot, LineSegment, PathSegment, SeriesColors, SeriesPalette,
    category_center_x, plot_line_series, plot_single_series,
};
pub use pie::{
    DEFAULT_GAP_DEGREES, DEFAULT_START_ANGLE, PieItem, PieSlice, plot_pie_slices,
    plot_pie_slices_default,
};
pub use types::{DrawArea, PlottedPoint};
pub use units::format_volume;
