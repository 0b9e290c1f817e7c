// File: crates/tickflex-core/tests/axis.rs
// Purpose: Axis unit division, tick labels and label slots.

use tickflex_core::axis::{label_slots, value_ticks};
use tickflex_core::format::to_fixed;
use tickflex_core::{
    category_units, decimal_places, value_labels, value_units, AxisUnit, CategoryAxisMode, ChartError, InvalidScaleReason,
    LabelFormatter, Scale, MAX_VALUE_UNITS,
};

#[test]
fn category_units_per_mode() {
    assert_eq!(category_units(4, CategoryAxisMode::Point), vec![1.0; 3]);
    assert_eq!(category_units(4, CategoryAxisMode::Range), vec![1.0; 4]);
    assert!(category_units(0, CategoryAxisMode::Point).is_empty());
    assert!(category_units(0, CategoryAxisMode::Range).is_empty());
}

#[test]
fn whole_units_only() {
    let s = Scale::new(0.0, 10.0, 2.5);
    assert_eq!(value_units(&s, false).unwrap(), vec![2.5; 4]);
}

#[test]
fn trailing_partial_unit() {
    let s = Scale::new(0.0, 10.0, 3.0);
    assert_eq!(value_units(&s, false).unwrap(), vec![3.0, 3.0, 3.0, 1.0]);
    assert_eq!(value_units(&s, true).unwrap(), vec![1.0, 3.0, 3.0, 3.0]);
}

#[test]
fn units_cover_the_span() {
    for s in [
        Scale::new(0.0, 10.0, 3.0),
        Scale::new(-0.6, 0.3, 0.1),
        Scale::new(0.5, 5.0, 0.5),
        Scale::new(-300.0, 0.0, 50.0),
    ] {
        let total = value_units(&s, false).unwrap().iter().sum::<f64>();
        assert!((total - s.span()).abs() < 1e-9, "{s:?} units sum to {total}");
    }
}

#[test]
fn ticks_bracket_units() {
    let s = Scale::new(0.0, 10.0, 3.0);
    let ticks = value_ticks(&s, false).unwrap();
    assert_eq!(ticks, vec![0.0, 3.0, 6.0, 9.0, 10.0]);
    assert_eq!(ticks.len(), value_units(&s, false).unwrap().len() + 1);
}

#[test]
fn labels_use_unit_precision() {
    let s = Scale::new(0.0, 10.0, 2.5);
    assert_eq!(value_labels(&s, false, None).unwrap(), ["0.0", "2.5", "5.0", "7.5", "10.0"]);
    assert_eq!(value_labels(&s, true, None).unwrap(), ["10.0", "7.5", "5.0", "2.5", "0.0"]);

    let s = Scale::new(-10.0, 10.0, 5.0);
    assert_eq!(value_labels(&s, false, None).unwrap(), ["-10", "-5", "0", "5", "10"]);
}

#[test]
fn labels_pass_through_formatter() {
    let kg = |fixed: &str| format!("{fixed} kg");
    let s = Scale::new(0.0, 4.0, 2.0);
    let formatter: &dyn LabelFormatter = &kg;
    assert_eq!(value_labels(&s, false, Some(formatter)).unwrap(), ["0 kg", "2 kg", "4 kg"]);
}

#[test]
fn decimal_places_of_units() {
    assert_eq!(decimal_places(5.0), 0);
    assert_eq!(decimal_places(0.5), 1);
    assert_eq!(decimal_places(0.25), 2);
    assert_eq!(decimal_places(-2.5), 1);
    assert_eq!(decimal_places(f64::NAN), 0);
}

#[test]
fn negative_zero_prints_as_zero() {
    assert_eq!(to_fixed(-0.0, 0), "0");
    assert_eq!(to_fixed(-0.0, 2), "0.00");
}

#[test]
fn label_slots_pad_with_fixed() {
    let slots = label_slots(&[1.0, 1.0, 1.0], 4);
    assert_eq!(
        slots,
        vec![AxisUnit::Flex(1.0), AxisUnit::Flex(1.0), AxisUnit::Flex(1.0), AxisUnit::Fixed]
    );
    assert_eq!(slots.iter().map(AxisUnit::weight).sum::<f64>(), 3.0);
    assert_eq!(label_slots(&[0.0, 2.0], 2), vec![AxisUnit::Fixed, AxisUnit::Flex(2.0)]);
}

#[test]
fn oversized_unit_count_is_rejected() {
    let s = Scale::new(0.0, 1e18, 1.0);
    for err in [
        value_units(&s, false).unwrap_err(),
        value_ticks(&s, true).unwrap_err(),
        value_labels(&s, false, None).unwrap_err(),
    ] {
        assert!(matches!(
            err,
            ChartError::InvalidScale { reason: InvalidScaleReason::TooManyUnits { limit: MAX_VALUE_UNITS, .. }, .. }
        ));
    }
}

#[test]
fn unit_count_at_the_limit_is_accepted() {
    let s = Scale::new(0.0, MAX_VALUE_UNITS as f64, 1.0);
    assert_eq!(value_units(&s, false).unwrap().len(), MAX_VALUE_UNITS);
    assert!(value_units(&Scale::new(0.0, MAX_VALUE_UNITS as f64 + 1.0, 1.0), false).is_err());
}

#[test]
fn unusable_unit_is_rejected() {
    for unit in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = value_units(&Scale::new(0.0, 10.0, unit), false).unwrap_err();
        assert!(
            matches!(err, ChartError::InvalidScale { reason: InvalidScaleReason::UnitOutOfSpan { .. }, .. }),
            "unit {unit} accepted"
        );
    }
}
