use water_charts::ChartError;
use water_charts::api::{
    BEVERAGES, LineChartConfig, MONTHLY_PROGRESS, RATIO, StatisticsEvent, StatisticsState,
    plan_line_chart,
};

fn submit_monthly(index: usize) -> StatisticsEvent {
    StatisticsEvent::SubmitReading {
        chart: MONTHLY_PROGRESS.to_owned(),
        series: 0,
        index,
    }
}

#[test]
fn demo_state_lists_tabs_and_charts_in_order() {
    let state = StatisticsState::water_statistics_demo();

    assert_eq!(state.tabs(), &["DAY", "WEEK", "MONTH", "ALL"]);
    assert_eq!(state.selected_tab(), 0);
    assert_eq!(state.input(), "");

    let line_names: Vec<&str> = state.line_charts().keys().map(String::as_str).collect();
    assert_eq!(line_names, vec![MONTHLY_PROGRESS, BEVERAGES]);
    assert!(state.pie_chart(RATIO).is_some());
}

#[test]
fn input_and_tab_events_produce_new_state() {
    let state = StatisticsState::water_statistics_demo();

    let next = state
        .apply(StatisticsEvent::InputChanged("9.5".to_owned()))
        .expect("input")
        .apply(StatisticsEvent::TabSelected(2))
        .expect("tab");

    assert_eq!(next.input(), "9.5");
    assert_eq!(next.selected_tab(), 2);
    assert_eq!(state.input(), "");
    assert_eq!(state.selected_tab(), 0);
}

#[test]
fn submitting_replaces_one_reading_and_rescales_the_chart() {
    let state = StatisticsState::water_statistics_demo()
        .apply(StatisticsEvent::InputChanged(" 12 ".to_owned()))
        .expect("input");

    let next = state.apply(submit_monthly(2)).expect("submit");

    let readings = &next.line_chart(MONTHLY_PROGRESS).expect("monthly").series[0];
    assert_eq!(readings, &vec![6.0, 5.0, 12.0, 6.0, 7.5, 7.0, 6.0]);
    let untouched = &state.line_chart(MONTHLY_PROGRESS).expect("monthly").series[0];
    assert_eq!(untouched[2], 4.0);

    let plan = plan_line_chart(
        next.line_chart(MONTHLY_PROGRESS).expect("monthly"),
        &LineChartConfig::default(),
    )
    .expect("plan");
    assert_eq!(plan.scale.tick_values(), &[12.0, 10.0, 8.0, 6.0, 4.0]);
}

#[test]
fn non_numeric_input_is_rejected_without_touching_state() {
    let state = StatisticsState::water_statistics_demo()
        .apply(StatisticsEvent::InputChanged("lots".to_owned()))
        .expect("input");

    let err = state.apply(submit_monthly(2)).expect_err("must fail");

    assert!(matches!(err, ChartError::UnparsableReading { ref input, .. } if input == "lots"));
    assert!(err.is_invalid_input());
    assert_eq!(
        state.line_chart(MONTHLY_PROGRESS).expect("monthly").series[0][2],
        4.0
    );
}

#[test]
fn non_finite_input_is_rejected() {
    let state = StatisticsState::water_statistics_demo()
        .apply(StatisticsEvent::InputChanged("inf".to_owned()))
        .expect("input");

    let err = state.apply(submit_monthly(0)).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn out_of_range_targets_are_rejected() {
    let state = StatisticsState::water_statistics_demo()
        .apply(StatisticsEvent::InputChanged("3".to_owned()))
        .expect("input");

    assert!(state.apply(submit_monthly(7)).is_err());
    assert!(
        state
            .apply(StatisticsEvent::SubmitReading {
                chart: MONTHLY_PROGRESS.to_owned(),
                series: 1,
                index: 0,
            })
            .is_err()
    );
    let err = state
        .apply(StatisticsEvent::SubmitReading {
            chart: "Weekly".to_owned(),
            series: 0,
            index: 0,
        })
        .expect_err("unknown chart");
    assert!(format!("{err}").contains("Weekly"));
    assert!(state.apply(StatisticsEvent::TabSelected(4)).is_err());
}

#[test]
fn state_round_trips_through_json() {
    let state = StatisticsState::water_statistics_demo();

    let json = serde_json::to_string(&state).expect("serialize");
    let restored: StatisticsState = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.tabs(), state.tabs());
    let names: Vec<&String> = restored.line_charts().keys().collect();
    assert_eq!(names, state.line_charts().keys().collect::<Vec<_>>());
    assert_eq!(
        restored.line_chart(BEVERAGES).expect("beverages").series,
        state.line_chart(BEVERAGES).expect("beverages").series
    );
    assert_eq!(
        restored.pie_chart(RATIO).expect("ratio").items,
        state.pie_chart(RATIO).expect("ratio").items
    );
}
