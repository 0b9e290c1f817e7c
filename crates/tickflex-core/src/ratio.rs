// File: crates/tickflex-core/src/ratio.rs
// Summary: Per-datum track ratios for bars (simple, split, stacked) and line/area endpoints.
//
// Every ratio is a fraction of the scale span `max - min`. A zero or
// non-finite span is rejected instead of producing NaN/inf flex weights.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, Result};
use crate::types::{present, Sample};

/// Filled vs. unfilled share of a plain bar track.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillRatio {
    pub filled: f64,
    pub empty: f64,
}

/// Share of a bar track used by the positive fill, the negative region and
/// the unfilled remainder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentRatios {
    pub positive: f64,
    pub negative: f64,
    pub empty: f64,
}

impl SegmentRatios {
    /// A bar with no visible fill.
    pub const EMPTY: Self = Self { positive: 0.0, negative: 0.0, empty: 1.0 };

    pub fn has_fill(&self) -> bool { self.positive != 0.0 }
}

/// Ratios for a stacked bar: the total, one additive share per segment, and
/// the unfilled remainder above the stack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackRatios {
    pub total: f64,
    pub segments: Vec<f64>,
    pub empty: f64,
}

/// Normalised endpoints of one line/area segment. `to` is `None` for an open
/// segment (the next sample is missing).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointRatios {
    pub from: f64,
    pub to: Option<f64>,
}

fn span(min: f64, max: f64) -> Result<f64> {
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        return Err(ChartError::DegenerateRange { min, max });
    }
    Ok(span)
}

/// `(value - min) / (max - min)` and its complement.
pub fn simple_ratio(value: f64, min: f64, max: f64) -> Result<FillRatio> {
    let filled = (value - min) / span(min, max)?;
    Ok(FillRatio { filled, empty: 1.0 - filled })
}

/// Split a clustered bar into positive/negative/empty shares.
///
/// The two signs are deliberately measured differently:
/// - a positive value fills from `min` up to the value, minus the negative
///   region below zero (non-zero only when `min < 0`);
/// - a negative value reserves `|min - value|` below the bar and fills by the
///   value's own magnitude.
///
/// Zero is an empty bar. The result is not clamped; a validated scale keeps
/// every share inside `[0, 1]`.
pub fn split_ratio(value: f64, min: f64, max: f64) -> Result<SegmentRatios> {
    let span = span(min, max)?;
    let (positive, negative) = if value > 0.0 {
        let negative = ((min - min.max(0.0)) / span).abs();
        ((value - min) / span - negative, negative)
    } else if value == 0.0 {
        (0.0, 0.0)
    } else {
        (value.abs() / span, ((min - value) / span).abs())
    };
    Ok(SegmentRatios { positive, negative, empty: 1.0 - positive - negative })
}

/// Stacked bar ratios for one category. Missing samples contribute nothing.
///
/// The first segment is measured from `min`, later ones by their own value,
/// so the segments always add up to `(total - min) / (max - min)`. This
/// intentionally departs from giving every segment its own simple ratio
/// `(v - min) / (max - min)`: those only add up when `min == 0`, where both
/// forms agree.
pub fn stacked_ratios(values: &[Sample], min: f64, max: f64) -> Result<StackRatios> {
    let span = span(min, max)?;
    let total = values.iter().filter_map(|v| present(*v)).sum::<f64>();
    let segments = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let v = present(*v).unwrap_or(0.0);
            if i == 0 { (v - min) / span } else { v / span }
        })
        .collect::<Vec<_>>();
    let total_ratio = (total - min) / span;
    trace!(total, total_ratio, segments = segments.len(), "stacked ratios");
    Ok(StackRatios { total: total_ratio, segments, empty: 1.0 - total_ratio })
}

/// Normalised endpoints of a segment from `from` to `to`; flipped (`1 - r`)
/// for an inverted value axis.
pub fn endpoint_ratios(from: f64, to: Option<f64>, min: f64, max: f64, inverted: bool) -> Result<EndpointRatios> {
    let span = span(min, max)?;
    let orient = |r: f64| if inverted { 1.0 - r } else { r };
    Ok(EndpointRatios {
        from: orient((from - min) / span),
        to: to.map(|t| orient((t - min) / span)),
    })
}
