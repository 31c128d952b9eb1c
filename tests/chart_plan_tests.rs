use water_charts::ChartError;
use water_charts::api::{
    BEVERAGES, LineChartConfig, LineChartData, LineChartStyle, MONTHLY_PROGRESS, PieChartConfig,
    PieChartData, PieChartStyle, RATIO, StatisticsState, palette, plan_line_chart, plan_pie_chart,
};
use water_charts::core::{PieItem, SeriesPalette};
use water_charts::render::{NullRenderer, Renderer};

fn demo() -> StatisticsState {
    StatisticsState::water_statistics_demo()
}

#[test]
fn monthly_plan_aligns_gridlines_and_labels_with_points() {
    let state = demo();
    let data = state.line_chart(MONTHLY_PROGRESS).expect("monthly chart");

    let plan = plan_line_chart(data, &LineChartConfig::default()).expect("plan");

    let labels: Vec<&str> = plan
        .axes
        .gridlines
        .iter()
        .map(|gridline| gridline.label.as_str())
        .collect();
    assert_eq!(labels, vec!["8", "7", "6", "5", "4"]);

    let six = &plan.axes.gridlines[2];
    assert_eq!(six.y, 100.0);
    assert_eq!(plan.plot.points[0][0].y, six.y);
    assert_eq!(six.x_start, 20.0);
    assert_eq!(six.x_end, 340.0);

    for (marker, point) in plan.axes.category_markers.iter().zip(&plan.plot.points[0]) {
        assert_eq!(marker.x, point.x);
        assert_eq!(marker.y, 180.0);
    }
    assert_eq!(plan.axes.category_markers[0].label, "Jan");
}

#[test]
fn beverages_plan_scales_both_series_together() {
    let state = demo();
    let data = state.line_chart(BEVERAGES).expect("beverages chart");

    let plan = plan_line_chart(data, &LineChartConfig::default()).expect("plan");

    assert_eq!(plan.scale.tick_values(), &[6.0, 5.0, 4.0, 3.0, 2.0]);
    assert_eq!(plan.plot.points.len(), 2);
    assert_eq!(plan.plot.colors[1].dot, palette::CHART_YELLOW);
}

#[test]
fn line_frame_contains_grid_curves_dots_and_labels() {
    let state = demo();
    let data = state.line_chart(MONTHLY_PROGRESS).expect("monthly chart");
    let plan = plan_line_chart(data, &LineChartConfig::default()).expect("plan");

    let frame = plan
        .to_render_frame(&LineChartStyle::default())
        .expect("frame");
    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 5);
    assert_eq!(renderer.last_path_count, 1);
    assert_eq!(renderer.last_circle_count, 7);
    assert_eq!(renderer.last_text_count, 12);
    assert_eq!(renderer.last_arc_count, 0);
    assert_eq!(frame.paths[0].curves.len(), 6);
}

#[test]
fn line_plan_rejects_invalid_tick_count() {
    let state = demo();
    let data = state.line_chart(MONTHLY_PROGRESS).expect("monthly chart");

    let err = plan_line_chart(data, &LineChartConfig::default().with_tick_count(1))
        .expect_err("tick count 1 must fail");
    assert!(err.is_invalid_input());
}

#[test]
fn line_plan_rejects_mismatched_palette() {
    let data = LineChartData::new(
        vec![vec![1.0, 2.0], vec![2.0, 3.0]],
        vec!["a".to_owned(), "b".to_owned()],
        SeriesPalette::single(palette::CHART_BLUE, palette::CHART_GREEN),
    );

    let err = plan_line_chart(&data, &LineChartConfig::default()).expect_err("must fail");
    assert!(err.is_invalid_input());
}

#[test]
fn pie_plan_formats_legend_volumes() {
    let state = demo();
    let data = state.pie_chart(RATIO).expect("ratio chart");

    let plan = plan_pie_chart(data, &PieChartConfig::default()).expect("plan");

    let values: Vec<&str> = plan
        .legend
        .iter()
        .map(|entry| entry.value_text.as_str())
        .collect();
    assert_eq!(values, vec!["1.5L", "300mL", "500mL"]);
    assert_eq!(plan.legend[2].color, palette::CHART_RED);

    let frame = plan
        .to_render_frame(&PieChartStyle::default())
        .expect("frame");
    assert_eq!(frame.arcs.len(), 3);
    assert_eq!(frame.arcs[0].start_angle, 270.0);
    assert_eq!(frame.arcs[0].radius, 45.0);
    assert_eq!(frame.arcs[0].center.x, 90.0);
}

#[test]
fn pie_plan_rejects_missing_colors() {
    let data = PieChartData::new(
        vec![PieItem::new("Water", 1.0), PieItem::new("Juice", 2.0)],
        vec![palette::CHART_BLUE],
        "mL",
    );

    let err = plan_pie_chart(&data, &PieChartConfig::default()).expect_err("must fail");
    assert!(format!("{err}").contains("pie colors"));
}

#[test]
fn configs_fill_missing_json_fields_with_defaults() {
    let line = LineChartConfig::from_json_str(r#"{"tick_count": 7}"#).expect("line config");
    assert_eq!(line.tick_count, 7);
    assert_eq!(line.width, 360.0);
    assert_eq!(line.padding, 20.0);

    let pie = PieChartConfig::from_json_str("{}").expect("pie config");
    assert_eq!(pie, PieChartConfig::default());
    assert_eq!(pie.gap_degrees, 4.0);
    assert_eq!(pie.start_angle, 270.0);

    let custom = LineChartConfig::new(640.0, 320.0).with_padding(32.0);
    let json = custom.to_json_pretty().expect("serialize");
    assert_eq!(LineChartConfig::from_json_str(&json).expect("parse"), custom);

    assert!(LineChartConfig::from_json_str("not json").is_err());
}

#[test]
fn plans_serialize_to_json() {
    let state = demo();
    let line = plan_line_chart(
        state.line_chart(MONTHLY_PROGRESS).expect("monthly chart"),
        &LineChartConfig::default(),
    )
    .expect("line plan");
    let pie = plan_pie_chart(
        state.pie_chart(RATIO).expect("ratio chart"),
        &PieChartConfig::default().with_gap_degrees(2.0),
    )
    .expect("pie plan");

    let line_json = line.to_json_pretty().expect("line json");
    assert!(line_json.contains("\"lower_bound\": 4.0"));
    let pie_json = pie.to_json_pretty().expect("pie json");
    assert!(pie_json.contains("\"Soft Drink\""));
}

#[test]
fn pie_frame_rejects_legend_shorter_than_slices() {
    let state = demo();
    let mut plan = plan_pie_chart(
        state.pie_chart(RATIO).expect("ratio chart"),
        &PieChartConfig::default(),
    )
    .expect("plan");
    plan.legend.truncate(1);

    let err = plan
        .to_render_frame(&PieChartStyle::default())
        .expect_err("missing legend entry must fail");
    assert!(err.is_invalid_input());
    assert!(format!("{err}").contains("legend entry"));
}

#[test]
fn config_parse_errors_are_invalid_input_not_serialization() {
    let err = PieChartConfig::from_json_str(r#"{"gap_degrees": "wide"}"#).expect_err("bad json");
    assert!(err.is_invalid_input());

    let serialization = ChartError::Serialization("failed to serialize plan".to_string());
    assert!(!serialization.is_invalid_input());
    assert!(format!("{serialization}").starts_with("serialization failed"));
}
