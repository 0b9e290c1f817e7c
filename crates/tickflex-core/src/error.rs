// File: crates/tickflex-core/src/error.rs
// Summary: Error taxonomy for scale validation and ratio geometry.

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ChartError {
    #[error("{what} is required")]
    MissingRequiredInput { what: &'static str },

    #[error("invalid scale: {reason}, range is totalized: {totalized}")]
    InvalidScale { reason: InvalidScaleReason, totalized: bool },

    #[error("degenerate range: min {min} and max {max} leave no usable span")]
    DegenerateRange { min: f64, max: f64 },
}

/// Which bound of a scale failed validation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidScaleReason {
    #[error("scale is required")]
    Missing,

    #[error("scale.min: {scale_min}, must be lesser or equal to the minimum value of the range: {range_min}")]
    MinAboveRange { scale_min: f64, range_min: f64 },

    #[error("scale.max: {scale_max}, must be greater or equal to the maximum value of the range: {range_max}")]
    MaxBelowRange { scale_max: f64, range_max: f64 },

    #[error("scale.unit: {unit}, must be within scale range and greater than zero: {{min: {min}, max: {max}, unit: {unit}}}")]
    UnitOutOfSpan { min: f64, max: f64, unit: f64 },

    #[error("scale divides into {units} units, more than the limit of {limit}")]
    TooManyUnits { units: f64, limit: usize },
}

impl ChartError {
    pub(crate) fn invalid_scale(reason: InvalidScaleReason, totalized: bool) -> Self {
        ChartError::InvalidScale { reason, totalized }
    }
}
