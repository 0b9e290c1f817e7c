// File: crates/tickflex-core/src/line.rs
// Summary: Line/area chart layout: per-index segment endpoint ratios, point markers and area slots.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, InvalidScaleReason, Result};
use crate::range::has_any_value;
use crate::ratio::{endpoint_ratios, EndpointRatios};
use crate::types::{present, CategoryAxisMode, Dataset, Scale, ValueAxisMode};
use crate::validate::ensure_scale_covers_range;

/// Line chart inputs. Defaults: normal value axis, point category axis,
/// points shown, area hidden.
#[derive(Clone, Debug)]
pub struct LineChart {
    pub datasets: Vec<Dataset>,
    pub value_scale: Option<Scale>,
    pub value_axis_mode: ValueAxisMode,
    pub category_axis_mode: CategoryAxisMode,
    pub show_area: bool,
    pub show_points: bool,
    pub line_width: f64,
    pub point_radius: f64,
    pub point_border_width: f64,
}

impl Default for LineChart {
    fn default() -> Self {
        Self {
            datasets: Vec::new(),
            value_scale: None,
            value_axis_mode: ValueAxisMode::Normal,
            category_axis_mode: CategoryAxisMode::Point,
            show_area: false,
            show_points: true,
            line_width: 2.0,
            point_radius: 5.0,
            point_border_width: 2.0,
        }
    }
}

/// Which segment endpoints get a point marker. `Both` still skips the `to`
/// marker of an open segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointMode {
    #[default]
    None,
    From,
    Both,
}

/// What occupies one category index of a line track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum LineSlot {
    /// Missing sample: an empty band.
    Gap,
    /// Present sample followed by a missing one (past the first index):
    /// nothing is drawn and the slot takes no track space.
    Suppressed,
    Segment { ratios: EndpointRatios, points: PointMode },
}

/// Filled trapezoid between two endpoints, as a rectangle up to `bottom` and
/// a triangle from `bottom` to `top`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaSegment {
    pub top: f64,
    pub bottom: f64,
    /// The triangle slopes downwards (from > to) and must be mirrored.
    pub mirrored: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSeriesLayout {
    pub name: Option<String>,
    pub line_color: Option<String>,
    pub point_color: Option<String>,
    /// Flex share of the segment track (`samples - 1`).
    pub flex: f64,
    /// Flex of the half-band margin on both sides in range mode.
    pub edge_margin: Option<f64>,
    pub slots: Vec<LineSlot>,
    /// One entry per index when areas are shown, empty otherwise.
    pub areas: Vec<Option<AreaSegment>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineChartLayout {
    pub line_width: f64,
    pub point_radius: f64,
    pub point_border_width: f64,
    pub series: Vec<LineSeriesLayout>,
}

impl LineChart {
    pub fn new(datasets: Vec<Dataset>, value_scale: Scale) -> Self {
        Self { datasets, value_scale: Some(value_scale), ..Self::default() }
    }

    pub fn value_axis_mode(mut self, mode: ValueAxisMode) -> Self {
        self.value_axis_mode = mode;
        self
    }

    pub fn category_axis_mode(mut self, mode: CategoryAxisMode) -> Self {
        self.category_axis_mode = mode;
        self
    }

    pub fn show_area(mut self, show: bool) -> Self {
        self.show_area = show;
        self
    }

    pub fn show_points(mut self, show: bool) -> Self {
        self.show_points = show;
        self
    }

    pub fn layout(&self) -> Result<LineChartLayout> {
        let scale = self
            .value_scale
            .ok_or_else(|| ChartError::invalid_scale(InvalidScaleReason::Missing, false))?;
        // nothing to cover when every sample is missing
        if has_any_value(&self.datasets) {
            ensure_scale_covers_range(Some(&scale), &self.datasets, false)?;
        }
        debug!(datasets = self.datasets.len(), show_area = self.show_area, "line chart layout");

        let series = self
            .datasets
            .iter()
            .map(|d| self.series(d, &scale))
            .collect::<Result<Vec<_>>>()?;
        Ok(LineChartLayout {
            line_width: self.line_width,
            point_radius: self.point_radius,
            point_border_width: self.point_border_width,
            series,
        })
    }

    fn ratios(&self, from: f64, to: Option<f64>, scale: &Scale) -> Result<EndpointRatios> {
        endpoint_ratios(from, to, scale.min, scale.max, self.value_axis_mode.is_inverted())
    }

    fn series(&self, dataset: &Dataset, scale: &Scale) -> Result<LineSeriesLayout> {
        let values = dataset.values.iter().map(|v| present(*v)).collect::<Vec<_>>();
        let at = |i: usize| values.get(i).copied().flatten();

        let mut slots = Vec::with_capacity(values.len());
        for (i, value) in values.iter().enumerate() {
            let Some(from) = *value else {
                slots.push(LineSlot::Gap);
                continue;
            };
            let to = at(i + 1);
            if i > 0 && to.is_none() {
                slots.push(LineSlot::Suppressed);
                continue;
            }
            let points = match (self.show_points, at(i + 2)) {
                (false, _) => PointMode::None,
                (true, None) => PointMode::Both,
                (true, Some(_)) => PointMode::From,
            };
            slots.push(LineSlot::Segment { ratios: self.ratios(from, to, scale)?, points });
        }

        let areas = if self.show_area {
            (0..values.len())
                .map(|i| match (at(i), at(i + 1)) {
                    (Some(from), Some(to)) => {
                        let r = self.ratios(from, Some(to), scale)?;
                        Ok(Some(area_segment(r.from, r.to.unwrap_or(r.from))))
                    }
                    _ => Ok(None),
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            Vec::new()
        };

        Ok(LineSeriesLayout {
            name: dataset.name.clone(),
            line_color: dataset.primary_color.clone(),
            point_color: dataset.secondary_color.clone(),
            flex: values.len().saturating_sub(1) as f64,
            edge_margin: (self.category_axis_mode == CategoryAxisMode::Range).then_some(0.5),
            slots,
            areas,
        })
    }
}

/// Area piece between two endpoint ratios.
pub fn area_segment(from: f64, to: f64) -> AreaSegment {
    AreaSegment { top: from.max(to), bottom: from.min(to), mirrored: from > to }
}
