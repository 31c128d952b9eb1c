use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::chart_config::palette;
use crate::api::{LineChartData, PieChartData};
use crate::core::{PieItem, SeriesPalette};
use crate::error::{ChartError, ChartResult};

pub const MONTHLY_PROGRESS: &str = "Monthly Progress";
pub const BEVERAGES: &str = "Beverages";
pub const RATIO: &str = "Ratio";

/// User-facing changes to the statistics screen.
#[derive(Debug, Clone, PartialEq)]
pub enum StatisticsEvent {
    InputChanged(String),
    TabSelected(usize),
    /// Parses the current input and stores it as reading `index` of
    /// `series` in line chart `chart`.
    SubmitReading {
        chart: String,
        series: usize,
        index: usize,
    },
}

/// Presentation state behind the water statistics screen.
///
/// State is only changed through [`StatisticsState::apply`], which returns a
/// new value and leaves `self` untouched when the event is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsState {
    tabs: Vec<String>,
    selected_tab: usize,
    input: String,
    line_charts: IndexMap<String, LineChartData>,
    pie_charts: IndexMap<String, PieChartData>,
}

impl StatisticsState {
    #[must_use]
    pub fn new(tabs: Vec<String>) -> Self {
        Self {
            tabs,
            selected_tab: 0,
            input: String::new(),
            line_charts: IndexMap::new(),
            pie_charts: IndexMap::new(),
        }
    }

    /// Demo datasets shown by the water statistics screen.
    #[must_use]
    pub fn water_statistics_demo() -> Self {
        let months: &[&str] = &["Jan", "Mar", "May", "Jul", "Sep", "Nov", "Dec"];
        let hours: &[&str] = &["6-7", "8-9", "10-11", "12-1", "2-3", "4-5", "6-7"];
        let to_labels = |labels: &[&str]| -> Vec<String> {
            labels.iter().map(|label| (*label).to_owned()).collect()
        };

        Self::new(
            ["DAY", "WEEK", "MONTH", "ALL"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        )
        .with_line_chart(
            MONTHLY_PROGRESS,
            LineChartData::new(
                vec![vec![6.0, 5.0, 4.0, 6.0, 7.5, 7.0, 6.0]],
                to_labels(months),
                SeriesPalette::single(palette::CHART_BLUE, palette::CHART_GREEN),
            ),
        )
        .with_pie_chart(
            RATIO,
            PieChartData::new(
                vec![
                    PieItem::new("Water", 1500.0),
                    PieItem::new("Juice", 300.0),
                    PieItem::new("Soft Drink", 500.0),
                ],
                vec![palette::CHART_BLUE, palette::CHART_GREEN, palette::CHART_RED],
                "mL",
            ),
        )
        .with_line_chart(
            BEVERAGES,
            LineChartData::new(
                vec![
                    vec![3.8, 3.0, 2.0, 3.9, 4.9, 4.2, 3.8],
                    vec![3.5, 2.2, 3.0, 3.4, 3.0, 4.4, 3.0],
                ],
                to_labels(hours),
                SeriesPalette::new(
                    vec![palette::CHART_GREEN, palette::CHART_BLUE],
                    vec![palette::CHART_RED, palette::CHART_YELLOW],
                ),
            ),
        )
    }

    #[must_use]
    pub fn with_line_chart(mut self, name: impl Into<String>, data: LineChartData) -> Self {
        self.line_charts.insert(name.into(), data);
        self
    }

    #[must_use]
    pub fn with_pie_chart(mut self, name: impl Into<String>, data: PieChartData) -> Self {
        self.pie_charts.insert(name.into(), data);
        self
    }

    #[must_use]
    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    #[must_use]
    pub fn selected_tab(&self) -> usize {
        self.selected_tab
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Line charts in insertion order.
    #[must_use]
    pub fn line_charts(&self) -> &IndexMap<String, LineChartData> {
        &self.line_charts
    }

    #[must_use]
    pub fn pie_charts(&self) -> &IndexMap<String, PieChartData> {
        &self.pie_charts
    }

    #[must_use]
    pub fn line_chart(&self, name: &str) -> Option<&LineChartData> {
        self.line_charts.get(name)
    }

    #[must_use]
    pub fn pie_chart(&self, name: &str) -> Option<&PieChartData> {
        self.pie_charts.get(name)
    }

    pub fn apply(&self, event: StatisticsEvent) -> ChartResult<Self> {
        let mut next = self.clone();
        match event {
            StatisticsEvent::InputChanged(input) => {
                next.input = input;
            }
            StatisticsEvent::TabSelected(tab) => {
                if tab >= self.tabs.len() {
                    return Err(ChartError::InvalidInput(format!(
                        "tab {tab} out of range for {} tabs",
                        self.tabs.len()
                    )));
                }
                next.selected_tab = tab;
            }
            StatisticsEvent::SubmitReading {
                chart,
                series,
                index,
            } => {
                let value = parse_reading(&self.input)?;
                let readings = next
                    .line_charts
                    .get_mut(&chart)
                    .ok_or_else(|| ChartError::InvalidInput(format!("unknown chart `{chart}`")))?
                    .series
                    .get_mut(series)
                    .ok_or_else(|| {
                        ChartError::InvalidInput(format!("chart `{chart}` has no series {series}"))
                    })?;
                let len = readings.len();
                let slot = readings.get_mut(index).ok_or_else(|| {
                    ChartError::InvalidInput(format!(
                        "reading index {index} out of range for series of {len}"
                    ))
                })?;
                *slot = value;
                debug!(chart = %chart, series, index, value, "replaced reading");
            }
        }
        Ok(next)
    }
}

fn parse_reading(input: &str) -> ChartResult<f64> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|source| ChartError::UnparsableReading {
            input: input.to_owned(),
            source,
        })?;
    if !value.is_finite() {
        warn!(input = trimmed, "rejected non-finite reading");
        return Err(ChartError::InvalidInput(format!(
            "reading `{trimmed}` must be finite"
        )));
    }
    Ok(value)
}
