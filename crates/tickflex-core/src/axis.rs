// File: crates/tickflex-core/src/axis.rs
// Summary: Axis unit division (value and category axes) and value label generation.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, InvalidScaleReason, Result};
use crate::format::{decimal_places, to_fixed, LabelFormatter};
use crate::types::{CategoryAxisMode, Scale};

/// Remainders smaller than this fraction of a unit are rounding noise.
const REMAINDER_EPSILON: f64 = 1e-9;

/// Largest number of units a value axis may be divided into.
pub const MAX_VALUE_UNITS: usize = 10_000;

/// Flex share of one label slot along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "flex")]
pub enum AxisUnit {
    /// Grows with the given weight.
    Flex(f64),
    /// Fixed-size slot for a label sitting on the terminal boundary.
    Fixed,
}

impl AxisUnit {
    pub fn weight(&self) -> f64 {
        match *self {
            AxisUnit::Flex(w) => w,
            AxisUnit::Fixed => 0.0,
        }
    }
}

/// Reject an unusable unit or a scale dividing into more than [`MAX_VALUE_UNITS`] units.
fn check_unit_count(scale: &Scale) -> Result<()> {
    let span = scale.span();
    if !(scale.unit > 0.0 && scale.unit.is_finite() && span.is_finite()) {
        return Err(ChartError::invalid_scale(
            InvalidScaleReason::UnitOutOfSpan { min: scale.min, max: scale.max, unit: scale.unit },
            false,
        ));
    }
    let units = (span / scale.unit).ceil();
    if units > MAX_VALUE_UNITS as f64 {
        return Err(ChartError::invalid_scale(
            InvalidScaleReason::TooManyUnits { units, limit: MAX_VALUE_UNITS },
            false,
        ));
    }
    Ok(())
}

/// Whole-unit step count and the leftover partial unit, if any.
fn steps(scale: &Scale) -> Result<(usize, Option<f64>)> {
    check_unit_count(scale)?;
    let span = scale.span();
    let quotient = (span / scale.unit).floor();
    let count = if quotient > 0.0 { quotient as usize } else { 0 };
    let remainder = span - count as f64 * scale.unit;
    let partial = (remainder > scale.unit * REMAINDER_EPSILON).then_some(remainder);
    Ok((count, partial))
}

/// Divide the value axis into tick-aligned units: `floor(span / unit)` whole
/// units followed by one partial unit for any remainder.
/// Reversed for an inverted axis.
///
/// Fails for a non-positive unit or more than [`MAX_VALUE_UNITS`] units.
pub fn value_units(scale: &Scale, inverted: bool) -> Result<Vec<f64>> {
    let (count, partial) = steps(scale)?;
    let mut units = vec![scale.unit; count];
    units.extend(partial);
    if inverted {
        units.reverse();
    }
    Ok(units)
}

/// Tick values at every unit boundary, ending with `scale.max` when the last
/// unit is partial. One more entry than [`value_units`].
pub fn value_ticks(scale: &Scale, inverted: bool) -> Result<Vec<f64>> {
    let (count, partial) = steps(scale)?;
    let mut ticks = (0..=count).map(|i| scale.min + scale.unit * i as f64).collect::<Vec<_>>();
    if partial.is_some() {
        ticks.push(scale.max);
    }
    if inverted {
        ticks.reverse();
    }
    Ok(ticks)
}

/// Tick labels printed with as many decimals as `scale.unit` has, then passed
/// through `formatter` if one is given.
pub fn value_labels(scale: &Scale, inverted: bool, formatter: Option<&dyn LabelFormatter>) -> Result<Vec<String>> {
    let places = decimal_places(scale.unit);
    let labels = value_ticks(scale, inverted)?
        .into_iter()
        .map(|v| {
            let fixed = to_fixed(v, places);
            match formatter {
                Some(f) => f.format(&fixed),
                None => fixed,
            }
        })
        .collect();
    Ok(labels)
}

/// Equal bands for a category axis. `Range` mode gives one band per label;
/// `Point` mode one fewer, since labels sit on the boundaries.
pub fn category_units(label_count: usize, mode: CategoryAxisMode) -> Vec<f64> {
    let count = match mode {
        CategoryAxisMode::Range => label_count,
        CategoryAxisMode::Point => label_count.saturating_sub(1),
    };
    vec![1.0; count]
}

/// Pair each label with the unit it spans; labels past the last unit get a
/// fixed slot. A zero-weight unit is also treated as fixed.
pub fn label_slots(units: &[f64], label_count: usize) -> Vec<AxisUnit> {
    (0..label_count)
        .map(|i| match units.get(i) {
            Some(&u) if u != 0.0 => AxisUnit::Flex(u),
            _ => AxisUnit::Fixed,
        })
        .collect()
}
