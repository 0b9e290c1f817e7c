// File: crates/tickflex-core/src/range.rs
// Summary: Data range resolution across datasets (plain and totalized/stacked) and per-category transpose.

use tracing::trace;

use crate::types::{present, Dataset, Datum, Range};

/// Resolve the `{min, max}` extent of `datasets`.
///
/// With `totalize`, every category index contributes the sum of its present
/// samples (zero when the whole index is missing) and the upper bound is the
/// largest such total, since stacked bars grow by their total. The lower
/// bound is the smallest individual sample or total, so a negative bar keeps
/// its headroom and an all-negative stack (samples `-5` and `-3`, total `-8`)
/// still yields `min <= max`.
///
/// Returns `None` when no dataset has a present sample.
pub fn resolve_range(datasets: &[Dataset], totalize: bool) -> Option<Range> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;

    if totalize {
        for group in resolve_datasets(datasets) {
            let mut total = 0.0f64;
            for v in group.iter().filter_map(|d| present(d.value)) {
                min = min.min(v);
                total += v;
                any = true;
            }
            min = min.min(total);
            max = max.max(total);
        }
    } else {
        for v in datasets.iter().flat_map(Dataset::present) {
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
    }

    trace!(datasets = datasets.len(), totalize, any, min, max, "resolved range");
    if any { Some(Range::new(min, max)) } else { None }
}

/// Transpose datasets into one group per category index.
///
/// Group count is the length of the longest dataset; a dataset shorter than
/// that contributes a missing sample to the trailing groups so every group has
/// one datum per dataset, in dataset order.
pub fn resolve_datasets(datasets: &[Dataset]) -> Vec<Vec<Datum>> {
    let len = datasets.iter().map(|d| d.values.len()).max().unwrap_or(0);
    (0..len)
        .map(|i| {
            datasets
                .iter()
                .map(|d| Datum {
                    value: d.values.get(i).copied().flatten(),
                    name: d.name.clone(),
                    primary_color: d.primary_color.clone(),
                    secondary_color: d.secondary_color.clone(),
                })
                .collect()
        })
        .collect()
}

/// True when at least one dataset carries a present sample.
pub fn has_any_value(datasets: &[Dataset]) -> bool {
    datasets.iter().any(Dataset::has_values)
}
