// File: crates/tickflex-core/src/format.rs
// Summary: Fixed-decimal value label formatting and the caller-supplied formatter hook.

/// Post-processes a fixed-decimal label (e.g. `"2.5"` → `"2.5 kg"`).
pub trait LabelFormatter: Send + Sync {
    fn format(&self, fixed: &str) -> String;
}

impl<F> LabelFormatter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn format(&self, fixed: &str) -> String {
        self(fixed)
    }
}

/// Number of decimal places needed to print `n` exactly.
///
/// Multiplies `|n|` by growing powers of ten until the product is whole; stops
/// early if the product overflows.
pub fn decimal_places(n: f64) -> usize {
    let a = n.abs();
    let mut c = a;
    let mut count = 0usize;
    while c.fract() != 0.0 && c.is_finite() {
        count += 1;
        c = a * 10f64.powi(count as i32);
    }
    count
}

/// Print `value` with `places` decimals; negative zero prints as zero.
pub fn to_fixed(value: f64, places: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.prec$}", value, prec = places)
}
