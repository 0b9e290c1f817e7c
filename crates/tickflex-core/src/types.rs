// File: crates/tickflex-core/src/types.rs
// Summary: Shared value types (samples, datasets, ranges, scales) and axis/chart mode enums.

use serde::{Deserialize, Serialize};

/// One data point; `None` marks a missing sample.
pub type Sample = Option<f64>;

/// An ordered sequence of samples plus the colours/name a renderer needs.
/// Sample position is the category index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub values: Vec<Sample>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub name: Option<String>,
}

impl Dataset {
    pub fn new(values: Vec<Sample>) -> Self {
        Self { values, ..Self::default() }
    }

    /// Dataset with every sample present.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(values.into_iter().map(Some).collect())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_colors(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_color = Some(primary.into());
        self.secondary_color = Some(secondary.into());
        self
    }

    /// Samples that are present and finite.
    pub fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| present(*v))
    }

    pub fn has_values(&self) -> bool {
        self.present().next().is_some()
    }
}

/// Normalise a sample: non-finite numbers count as missing.
#[inline]
pub fn present(sample: Sample) -> Option<f64> {
    sample.filter(|v| v.is_finite())
}

/// A single sample tagged with the identity of the dataset it came from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    pub value: Sample,
    pub name: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

/// Raw data extent.
/// Contract: `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
    pub fn span(&self) -> f64 { self.max - self.min }
}

/// Axis bounds and tick granularity.
/// Contract: `unit > 0` and `unit < max - min`; checked by
/// [`crate::validate::ensure_scale_covers_range`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
    pub unit: f64,
}

impl Scale {
    pub const fn new(min: f64, max: f64, unit: f64) -> Self {
        Self { min, max, unit }
    }
    pub fn span(&self) -> f64 { self.max - self.min }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn is_vertical(self) -> bool { self == Orientation::Vertical }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Clustered,
    Stacked,
}

/// How category labels relate to ticks.
/// `Point`: labels sit on ticks. `Range`: labels sit in the band between ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryAxisMode {
    Point,
    #[default]
    Range,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueAxisMode {
    #[default]
    Normal,
    Inverted,
}

impl ValueAxisMode {
    pub fn is_inverted(self) -> bool { self == ValueAxisMode::Inverted }
}
