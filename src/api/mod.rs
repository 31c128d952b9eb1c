mod chart_config;
mod chart_plan;
mod statistics_state;

pub use chart_config::{
    LineChartConfig, LineChartStyle, PieChartConfig, PieChartStyle, palette,
};
pub use chart_plan::{
    LegendEntry, LineChartData, LineChartPlan, PieChartData, PieChartPlan, plan_line_chart,
    plan_pie_chart,
};
pub use statistics_state::{
    BEVERAGES, MONTHLY_PROGRESS, RATIO, StatisticsEvent, StatisticsState,
};
