// File: crates/tickflex-core/tests/axes.rs
// Purpose: Axes layout: orientation mapping, value label order, label slots and metrics.

use tickflex_core::axes::AxisRole;
use tickflex_core::style::LabelStyleOverrides;
use tickflex_core::{Axes, AxisUnit, AxisVisibility, CategoryAxisMode, ChartError, Orientation, Scale, ValueAxisMode};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn vertical_maps_category_to_x() {
    let layout = Axes::new(Scale::new(0.0, 10.0, 5.0), labels(&["A", "B", "C"])).layout().unwrap();
    assert_eq!(layout.orientation, Orientation::Vertical);

    assert_eq!(layout.x.role, AxisRole::Category);
    assert_eq!(layout.x.mode, CategoryAxisMode::Range);
    assert_eq!(layout.x.units, vec![1.0; 3]);
    assert_eq!(layout.x.labels, ["A", "B", "C"]);
    assert_eq!(layout.x.label_slots, vec![AxisUnit::Flex(1.0); 3]);

    assert_eq!(layout.y.role, AxisRole::Value);
    assert_eq!(layout.y.mode, CategoryAxisMode::Point);
    assert_eq!(layout.y.units, vec![5.0, 5.0]);
    // top to bottom
    assert_eq!(layout.y.labels, ["10", "5", "0"]);
    assert_eq!(layout.y.label_slots, vec![AxisUnit::Flex(5.0), AxisUnit::Flex(5.0), AxisUnit::Fixed]);
}

#[test]
fn vertical_partial_unit_sits_on_top() {
    let layout = Axes::new(Scale::new(0.0, 10.0, 3.0), labels(&["A"])).layout().unwrap();
    assert_eq!(layout.y.units, vec![1.0, 3.0, 3.0, 3.0]);
    assert_eq!(layout.y.labels, ["10", "9", "6", "3", "0"]);
}

#[test]
fn horizontal_maps_value_to_x() {
    let layout = Axes::new(Scale::new(0.0, 10.0, 5.0), labels(&["A", "B"]))
        .orientation(Orientation::Horizontal)
        .layout()
        .unwrap();
    assert_eq!(layout.x.role, AxisRole::Value);
    assert_eq!(layout.x.labels, ["0", "5", "10"]);
    assert_eq!(layout.y.role, AxisRole::Category);
    assert_eq!(layout.y.labels, ["A", "B"]);
}

#[test]
fn inverted_vertical_reads_bottom_up_descending() {
    let layout = Axes::new(Scale::new(0.0, 10.0, 5.0), labels(&["A"]))
        .value_axis_mode(ValueAxisMode::Inverted)
        .layout()
        .unwrap();
    assert_eq!(layout.y.labels, ["0", "5", "10"]);
}

#[test]
fn point_mode_category_axis() {
    let layout = Axes::new(Scale::new(0.0, 10.0, 5.0), labels(&["A", "B", "C", "D"]))
        .category_axis_mode(CategoryAxisMode::Point)
        .layout()
        .unwrap();
    assert_eq!(layout.x.units, vec![1.0; 3]);
    assert_eq!(layout.x.label_slots.last(), Some(&AxisUnit::Fixed));
    assert_eq!(layout.metrics.x_label_margin, 20.0);
}

#[test]
fn explicit_value_labels_and_formatter() {
    let explicit = Axes::new(Scale::new(0.0, 10.0, 5.0), labels(&["A"]))
        .value_labels(labels(&["low", "mid", "high"]))
        .layout()
        .unwrap();
    assert_eq!(explicit.y.labels, ["high", "mid", "low"]);

    let formatted = Axes::new(Scale::new(0.0, 1.0, 0.5), labels(&["A"]))
        .value_label_formatter(|fixed: &str| format!("{fixed}%"))
        .layout()
        .unwrap();
    assert_eq!(formatted.y.labels, ["1.0%", "0.5%", "0.0%"]);
}

#[test]
fn default_metrics_vertical() {
    let m = Axes::new(Scale::new(0.0, 10.0, 5.0), labels(&["A"])).layout().unwrap().metrics;
    assert_eq!(m.x_label_width, 40.0);
    assert_eq!(m.y_label_width, 46.0);
    assert_eq!(m.y_label_height, 12.0);
    assert_eq!(m.y_tick_length, 6.0);
    assert_eq!(m.x_label_margin, 0.0);
    assert_eq!(m.y_label_margin, 6.0);
    assert_eq!(m.y_axis_min_width, 52.0);
}

#[test]
fn hidden_value_labels_and_ticks_shrink_metrics() {
    let hidden = AxisVisibility { labels: false, ticks: false, ..AxisVisibility::default() };
    let m = Axes::new(Scale::new(0.0, 10.0, 5.0), labels(&["A"]))
        .value_visibility(hidden)
        .layout()
        .unwrap()
        .metrics;
    assert_eq!(m.y_label_width, 0.0);
    assert_eq!(m.y_tick_length, 0.0);
    assert_eq!(m.y_axis_min_width, 0.0);
}

#[test]
fn label_style_overrides_apply() {
    let mut axes = Axes::new(Scale::new(0.0, 10.0, 5.0), labels(&["A"]));
    axes.value_label_style = LabelStyleOverrides { width: Some(60.0), ..Default::default() };
    let layout = axes.layout().unwrap();
    assert_eq!(layout.y.label_style.width, 60.0);
    assert_eq!(layout.y.label_style.font_size, 12.0);
    assert_eq!(layout.metrics.y_label_width, 66.0);
}

#[test]
fn missing_inputs_are_rejected() {
    let err = Axes::default().layout().unwrap_err();
    assert!(matches!(err, ChartError::MissingRequiredInput { .. }));

    let no_labels = Axes { category_labels: None, ..Axes::new(Scale::new(0.0, 1.0, 0.5), Vec::new()) };
    assert!(no_labels.layout().is_err());
}

#[test]
fn oversized_value_scale_is_rejected() {
    let err = Axes::new(Scale::new(0.0, 1e18, 1.0), labels(&["A"])).layout().unwrap_err();
    assert!(matches!(
        err,
        ChartError::InvalidScale { reason: tickflex_core::InvalidScaleReason::TooManyUnits { .. }, .. }
    ));
}
