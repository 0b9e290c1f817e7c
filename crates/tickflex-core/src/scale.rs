// File: crates/tickflex-core/src/scale.rs
// Summary: "Nice" scale generation from a raw data range.

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::types::{Range, Scale};

/// Upper bound on the unit search; f64 rounding can keep `max` from advancing.
const MAX_STEPS: u32 = 1_000;

/// Generate a human-readable scale that bounds `range`.
///
/// The unit is the power of ten just below the range's order of magnitude,
/// halved when the range fills less than half of that magnitude bucket. The
/// lower bound steps one unit below the floored minimum (never below zero for
/// non-negative data) and the upper bound is the first whole number of units
/// above it that reaches `range.max`.
///
/// A zero-width range is widened towards zero first (`{v, v}` becomes
/// `{0, v}` or `{v, 0}`, and `{0, 0}` becomes `{0, 1}`). Non-finite bounds are
/// rejected with [`ChartError::DegenerateRange`], as are finite ranges too
/// wide or too narrow for f64 to express a positive unit (`{-1e308, 1e308}`
/// overflows the span, `{0, 5e-324}` underflows the unit).
pub fn generate_scale(range: Range) -> Result<Scale> {
    if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
        return Err(ChartError::DegenerateRange { min: range.min, max: range.max });
    }
    let range = widen_degenerate(range);

    let diff = range.max - range.min;
    let diff_log = diff.log10().ceil();
    let diff_max = 10f64.powf(diff_log);
    let diff_min = 10f64.powf(diff_log - 1.0);
    let diff_rounded = (diff / diff_max).round();
    let unit = if diff_rounded != 0.0 { diff_min } else { diff_min / 2.0 };
    if !(diff.is_finite() && unit.is_finite() && unit > 0.0) {
        return Err(ChartError::DegenerateRange { min: range.min, max: range.max });
    }

    let mut min = (range.min / unit).floor() * unit - unit;
    if range.min >= 0.0 {
        min = min.max(0.0);
    }

    // smallest whole number of units from `min` reaching `range.max`
    let mut steps = 0u32;
    let mut max = min;
    while max < range.max {
        if steps >= MAX_STEPS {
            return Err(ChartError::DegenerateRange { min: range.min, max: range.max });
        }
        steps += 1;
        max = min + f64::from(steps) * unit;
    }
    if !(min.is_finite() && max.is_finite() && unit < max - min) {
        return Err(ChartError::DegenerateRange { min: range.min, max: range.max });
    }

    let scale = Scale::new(min, max, unit);
    debug!(range_min = range.min, range_max = range.max, ?scale, "generated scale");
    Ok(scale)
}

fn widen_degenerate(range: Range) -> Range {
    if range.max > range.min {
        return range;
    }
    let v = range.min;
    if v > 0.0 {
        Range::new(0.0, v)
    } else if v < 0.0 {
        Range::new(v, 0.0)
    } else {
        Range::new(0.0, 1.0)
    }
}

