// File: crates/tickflex-core/src/bar.rs
// Summary: Bar chart layout (clustered split bars and stacked bars) as flex descriptors.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ChartError, InvalidScaleReason, Result};
use crate::range::resolve_datasets;
use crate::ratio::{split_ratio, stacked_ratios, SegmentRatios};
use crate::style::{BarStyle, LineStyle};
use crate::types::{present, Dataset, Datum, DisplayMode, Orientation, Scale};
use crate::validate::ensure_scale_covers_range;

/// Bar chart inputs. Defaults match a vertical clustered chart.
#[derive(Clone, Debug)]
pub struct BarChart {
    pub datasets: Vec<Dataset>,
    pub value_scale: Option<Scale>,
    pub orientation: Orientation,
    pub display_mode: DisplayMode,
    /// Space between clusters/stacks.
    pub spacing: f64,
    /// Space between bars inside a cluster.
    pub cluster_spacing: f64,
    pub bar_border_width: f64,
    pub bar_border_style: LineStyle,
    pub bar_style: BarStyle,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            datasets: Vec::new(),
            value_scale: None,
            orientation: Orientation::Vertical,
            display_mode: DisplayMode::Clustered,
            spacing: 10.0,
            cluster_spacing: 0.0,
            bar_border_width: 2.0,
            bar_border_style: LineStyle::Solid,
            bar_style: BarStyle::default(),
        }
    }
}

/// One of the three flex pieces that make up a clustered bar's track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarPiece {
    Empty,
    Positive,
    Negative,
}

/// Leading/trailing margin of a bar along the cluster axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BarMargins {
    pub start: f64,
    pub end: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub name: Option<String>,
    pub value: Option<f64>,
    pub ratios: SegmentRatios,
    pub fill_color: String,
    pub border_color: String,
    /// Zero when the bar has no fill.
    pub border_width: f64,
    pub border_style: LineStyle,
    pub margins: BarMargins,
    /// Render order of the track pieces along the flex direction.
    pub pieces: [BarPiece; 3],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarClusterLayout {
    /// Outer margin on each side of the cluster.
    pub margin: f64,
    pub bars: Vec<BarLayout>,
}

/// A piece of a stacked bar, in render order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum StackPiece {
    Empty { ratio: f64 },
    Segment {
        /// Index of the dataset this segment belongs to.
        dataset: usize,
        name: Option<String>,
        value: Option<f64>,
        ratio: f64,
        fill_color: String,
        border_color: String,
        border_width: f64,
        border_style: LineStyle,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarStackLayout {
    pub margin: f64,
    pub total_ratio: f64,
    pub pieces: Vec<StackPiece>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "groups")]
pub enum BarGroups {
    Clustered(Vec<BarClusterLayout>),
    Stacked(Vec<BarStackLayout>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarChartLayout {
    pub orientation: Orientation,
    pub groups: BarGroups,
}

impl BarChartLayout {
    pub fn group_count(&self) -> usize {
        match &self.groups {
            BarGroups::Clustered(g) => g.len(),
            BarGroups::Stacked(g) => g.len(),
        }
    }
}

impl BarChart {
    pub fn new(datasets: Vec<Dataset>, value_scale: Scale) -> Self {
        Self { datasets, value_scale: Some(value_scale), ..Self::default() }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn cluster_spacing(mut self, spacing: f64) -> Self {
        self.cluster_spacing = spacing;
        self
    }

    pub fn bar_border(mut self, width: f64, style: LineStyle) -> Self {
        self.bar_border_width = width;
        self.bar_border_style = style;
        self
    }

    /// Validate the scale against the datasets, then lay out every category.
    pub fn layout(&self) -> Result<BarChartLayout> {
        let stacked = self.display_mode == DisplayMode::Stacked;
        let scale = self
            .value_scale
            .ok_or_else(|| ChartError::invalid_scale(InvalidScaleReason::Missing, stacked))?;
        ensure_scale_covers_range(Some(&scale), &self.datasets, stacked)?;

        let groups = resolve_datasets(&self.datasets);
        debug!(categories = groups.len(), datasets = self.datasets.len(), stacked, "bar chart layout");

        let groups = if stacked {
            BarGroups::Stacked(groups.iter().map(|g| self.stack(g, &scale)).collect::<Result<_>>()?)
        } else {
            BarGroups::Clustered(groups.iter().map(|g| self.cluster(g, &scale)).collect::<Result<_>>()?)
        };
        Ok(BarChartLayout { orientation: self.orientation, groups })
    }

    fn fill_color(&self, datum: &Datum) -> String {
        datum.primary_color.clone().unwrap_or_else(|| self.bar_style.fill_color.clone())
    }

    fn border_color(&self, datum: &Datum) -> String {
        datum.secondary_color.clone().unwrap_or_else(|| self.bar_style.border_color.clone())
    }

    fn cluster(&self, data: &[Datum], scale: &Scale) -> Result<BarClusterLayout> {
        let half = self.cluster_spacing / 2.0;
        let pieces = if self.orientation.is_vertical() {
            [BarPiece::Empty, BarPiece::Positive, BarPiece::Negative]
        } else {
            [BarPiece::Negative, BarPiece::Positive, BarPiece::Empty]
        };
        let last = data.len().saturating_sub(1);
        let bars = data
            .iter()
            .enumerate()
            .map(|(i, datum)| {
                let value = present(datum.value);
                let ratios = match value {
                    Some(v) => split_ratio(v, scale.min, scale.max)?,
                    None => SegmentRatios::EMPTY,
                };
                trace!(index = i, ?value, ?ratios, "cluster bar");
                Ok(BarLayout {
                    name: datum.name.clone(),
                    value,
                    ratios,
                    fill_color: self.fill_color(datum),
                    border_color: self.border_color(datum),
                    border_width: if ratios.has_fill() { self.bar_border_width } else { 0.0 },
                    border_style: self.bar_border_style,
                    margins: BarMargins {
                        start: if i > 0 { half } else { 0.0 },
                        end: if i == last { 0.0 } else { half },
                    },
                    pieces,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(BarClusterLayout { margin: self.spacing / 2.0, bars })
    }

    fn stack(&self, data: &[Datum], scale: &Scale) -> Result<BarStackLayout> {
        let values = data.iter().map(|d| d.value).collect::<Vec<_>>();
        let ratios = stacked_ratios(&values, scale.min, scale.max)?;

        // vertical stacks render top-down: filler, then the last dataset first
        let mut pieces = vec![StackPiece::Empty { ratio: ratios.empty }];
        pieces.extend(data.iter().zip(&ratios.segments).enumerate().rev().map(|(i, (datum, &ratio))| {
            StackPiece::Segment {
                dataset: i,
                name: datum.name.clone(),
                value: present(datum.value),
                ratio,
                fill_color: self.fill_color(datum),
                border_color: self.border_color(datum),
                border_width: if ratio != 0.0 { self.bar_border_width } else { 0.0 },
                border_style: self.bar_border_style,
            }
        }));
        if !self.orientation.is_vertical() {
            pieces.reverse();
        }
        Ok(BarStackLayout { margin: self.spacing / 2.0, total_ratio: ratios.total, pieces })
    }
}
