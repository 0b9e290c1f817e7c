// File: crates/tickflex-core/src/validate.rs
// Summary: Scale validation gate run before any geometry is computed.

use tracing::warn;

use crate::axis::MAX_VALUE_UNITS;
use crate::error::{ChartError, InvalidScaleReason, Result};
use crate::range::resolve_range;
use crate::types::{Dataset, Scale};

/// Check that `scale` covers the range of `datasets` and has a usable unit
/// that splits the span into at most [`MAX_VALUE_UNITS`] units.
///
/// When no dataset has a present sample there is no range to cover and only
/// the unit is checked.
pub fn ensure_scale_covers_range(scale: Option<&Scale>, datasets: &[Dataset], totalize: bool) -> Result<()> {
    let result = check(scale, datasets, totalize);
    if let Err(e) = &result {
        warn!(error = %e, "scale rejected");
    }
    result
}

fn check(scale: Option<&Scale>, datasets: &[Dataset], totalize: bool) -> Result<()> {
    let scale = scale.ok_or(ChartError::invalid_scale(InvalidScaleReason::Missing, totalize))?;

    if let Some(range) = resolve_range(datasets, totalize) {
        if scale.min > range.min {
            return Err(ChartError::invalid_scale(
                InvalidScaleReason::MinAboveRange { scale_min: scale.min, range_min: range.min },
                totalize,
            ));
        }
        if scale.max < range.max {
            return Err(ChartError::invalid_scale(
                InvalidScaleReason::MaxBelowRange { scale_max: scale.max, range_max: range.max },
                totalize,
            ));
        }
    }

    // negated so a NaN unit or bound fails too
    if !(scale.unit > 0.0 && scale.unit < scale.span()) {
        return Err(ChartError::invalid_scale(
            InvalidScaleReason::UnitOutOfSpan { min: scale.min, max: scale.max, unit: scale.unit },
            totalize,
        ));
    }

    let units = (scale.span() / scale.unit).ceil();
    if units > MAX_VALUE_UNITS as f64 {
        return Err(ChartError::invalid_scale(
            InvalidScaleReason::TooManyUnits { units, limit: MAX_VALUE_UNITS },
            totalize,
        ));
    }
    Ok(())
}
