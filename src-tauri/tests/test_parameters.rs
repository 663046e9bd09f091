//! Parameter panel behavior: bounds, change events and snapshots.

use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use vtracer_gui_lib::core::{
    AppConfig, AppState, ColorMode, ControlKind, CurveMode, Hierarchical, ParameterChange,
    ParameterPanel, ParameterSnapshot,
};

fn any_change() -> impl Strategy<Value = ParameterChange> {
    prop_oneof![
        prop_oneof![Just(ColorMode::Color), Just(ColorMode::Binary)]
            .prop_map(ParameterChange::ColorMode),
        prop_oneof![Just(Hierarchical::Stacked), Just(Hierarchical::Cutout)]
            .prop_map(ParameterChange::Hierarchical),
        prop_oneof![Just(CurveMode::Spline), Just(CurveMode::Polygon), Just(CurveMode::Pixel)]
            .prop_map(ParameterChange::CurveMode),
        any::<i32>().prop_map(ParameterChange::FilterSpeckle),
        any::<i32>().prop_map(ParameterChange::ColorPrecision),
        any::<i32>().prop_map(ParameterChange::GradientStep),
        any::<i32>().prop_map(ParameterChange::CornerThreshold),
        any::<i32>().prop_map(ParameterChange::SegmentLength),
        any::<i32>().prop_map(ParameterChange::SpliceThreshold),
        (-50i32..250).prop_map(ParameterChange::SegmentLength),
    ]
}

proptest! {
    #[test]
    fn snapshot_stays_within_bounds(changes in prop::collection::vec(any_change(), 0..40)) {
        let mut panel = ParameterPanel::new();
        for change in changes {
            panel.apply(change);
            prop_assert!(panel.snapshot().is_within_bounds(), "{:?}", panel.snapshot());
        }
    }

    #[test]
    fn segment_length_lands_on_half_steps(position in any::<i32>()) {
        let mut panel = ParameterPanel::new();
        panel.apply(ParameterChange::SegmentLength(position));
        let length = panel.snapshot().length_threshold();
        prop_assert!((3.5..=10.0).contains(&length));
        prop_assert_eq!((length * 2.0).fract(), 0.0);
    }
}

#[test]
fn test_state_exposes_default_parameters() {
    let state = AppState::new(AppConfig::default());
    assert_eq!(state.parameters().unwrap(), ParameterSnapshot::default());
}

#[test]
fn test_update_is_visible_in_next_snapshot() {
    let state = AppState::new(AppConfig::default());
    let event = state
        .update_parameter(ParameterChange::SegmentLength(75))
        .unwrap();
    assert_eq!(event.label, "7.5");
    assert_eq!(state.parameters().unwrap().length_threshold(), 7.5);
}

#[test]
fn test_subscribers_receive_clamped_changes() {
    let state = AppState::new(AppConfig::default());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    state
        .subscribe_parameters(move |event| sink.lock().unwrap().push(event.change.clone()))
        .unwrap();

    state.update_parameter(ParameterChange::FilterSpeckle(500)).unwrap();
    state.update_parameter(ParameterChange::CornerThreshold(-1)).unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            ParameterChange::FilterSpeckle(128),
            ParameterChange::CornerThreshold(0),
        ]
    );
}

#[test]
fn test_reset_publishes_one_event_per_control() {
    let state = AppState::new(AppConfig::default());
    state.update_parameter(ParameterChange::ColorMode(ColorMode::Binary)).unwrap();

    let count = Arc::new(Mutex::new(0));
    let counter = count.clone();
    state
        .subscribe_parameters(move |_| *counter.lock().unwrap() += 1)
        .unwrap();

    assert_eq!(state.reset_parameters().unwrap(), ParameterSnapshot::default());
    assert_eq!(*count.lock().unwrap(), 9);
}

#[test]
fn test_descriptors_reflect_current_values() {
    let state = AppState::new(AppConfig::default());
    state.update_parameter(ParameterChange::ColorPrecision(3)).unwrap();

    let controls = state.controls().unwrap();
    let precision = controls.iter().find(|c| c.id == "colorPrecision").unwrap();
    assert_eq!(precision.group, "Clustering");
    match &precision.kind {
        ControlKind::Slider { min, max, value, display, .. } => {
            assert_eq!((*min, *max, *value), (1, 8, 3));
            assert_eq!(display, "3");
        }
        other => panic!("expected slider, got {other:?}"),
    }

    let mode = controls.iter().find(|c| c.id == "curveMode").unwrap();
    assert_eq!(mode.group, "Curve Fitting");
    match &mode.kind {
        ControlKind::Choice { options, current } => {
            let labels: Vec<_> = options.iter().map(|o| o.label).collect();
            assert_eq!(labels, ["Spline", "Polygon", "Pixel"]);
            assert_eq!(*current, "spline");
        }
        other => panic!("expected choice, got {other:?}"),
    }
}

#[test]
fn test_descriptor_wire_format() {
    let controls = ParameterPanel::new().controls();
    let json = serde_json::to_value(&controls[7]).unwrap();
    assert_eq!(json["id"], "segmentLength");
    assert_eq!(json["kind"], "slider");
    assert_eq!(json["min"], 35);
    assert_eq!(json["max"], 100);
    assert_eq!(json["step"], 5);
    assert_eq!(json["display"], "4.0");
}
