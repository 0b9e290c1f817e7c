// File: crates/tickflex-core/src/lib.rs
// Summary: Core library entry point; exports scale, range, ratio and axis/chart layout APIs.

pub mod axes;
pub mod axis;
pub mod bar;
pub mod error;
pub mod format;
pub mod line;
pub mod range;
pub mod ratio;
pub mod scale;
pub mod style;
pub mod types;
pub mod validate;

pub use axes::{Axes, AxesLayout, AxesMetrics, AxisLayout, AxisVisibility};
pub use axis::{category_units, value_labels, value_units, AxisUnit, MAX_VALUE_UNITS};
pub use bar::{BarChart, BarChartLayout, BarGroups};
pub use error::{ChartError, InvalidScaleReason, Result};
pub use format::{decimal_places, LabelFormatter};
pub use line::{LineChart, LineChartLayout, LineSlot, PointMode};
pub use range::{resolve_datasets, resolve_range};
pub use ratio::{endpoint_ratios, simple_ratio, split_ratio, stacked_ratios, FillRatio, SegmentRatios};
pub use scale::generate_scale;
pub use types::{CategoryAxisMode, Dataset, Datum, DisplayMode, Orientation, Range, Sample, Scale, ValueAxisMode};
pub use validate::ensure_scale_covers_range;
