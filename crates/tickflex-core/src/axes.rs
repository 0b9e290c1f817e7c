// File: crates/tickflex-core/src/axes.rs
// Summary: Axes layout: maps category/value axes onto x/y, computes units, labels, visibility and margins.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::{category_units, label_slots, value_labels, value_units, AxisUnit};
use crate::error::{ChartError, Result};
use crate::format::LabelFormatter;
use crate::style::{AxisStyle, AxisStyleOverrides, LabelStyle, LabelStyleOverrides};
use crate::types::{CategoryAxisMode, Orientation, Scale, ValueAxisMode};

/// Which parts of an axis are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisVisibility {
    pub line: bool,
    pub labels: bool,
    pub ticks: bool,
    pub gridlines: bool,
}

impl Default for AxisVisibility {
    fn default() -> Self {
        Self { line: true, labels: true, ticks: true, gridlines: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisRole {
    Category,
    Value,
}

/// Axes inputs. `value_scale` and `category_labels` are required.
#[derive(Clone, Default)]
pub struct Axes {
    pub orientation: Orientation,

    pub category_labels: Option<Vec<String>>,
    pub category_axis_mode: CategoryAxisMode,
    pub category_visibility: AxisVisibility,
    pub category_axis_style: AxisStyleOverrides,
    pub category_label_style: LabelStyleOverrides,

    pub value_scale: Option<Scale>,
    pub value_axis_mode: ValueAxisMode,
    pub value_visibility: AxisVisibility,
    pub value_axis_style: AxisStyleOverrides,
    pub value_label_style: LabelStyleOverrides,
    /// Explicit value labels, bottom/left first; replaces generated ones.
    pub value_labels: Option<Vec<String>>,
    pub value_label_formatter: Option<Arc<dyn LabelFormatter>>,
}

impl fmt::Debug for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axes")
            .field("orientation", &self.orientation)
            .field("category_labels", &self.category_labels)
            .field("category_axis_mode", &self.category_axis_mode)
            .field("value_scale", &self.value_scale)
            .field("value_axis_mode", &self.value_axis_mode)
            .field("value_labels", &self.value_labels)
            .field("value_label_formatter", &self.value_label_formatter.is_some())
            .finish_non_exhaustive()
    }
}

/// One resolved axis, in render order (left to right, top to bottom).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub role: AxisRole,
    pub mode: CategoryAxisMode,
    pub units: Vec<f64>,
    pub labels: Vec<String>,
    pub label_slots: Vec<AxisUnit>,
    pub visibility: AxisVisibility,
    pub style: AxisStyle,
    pub label_style: LabelStyle,
}

/// Fixed sizes the renderer needs to align the plot area with the axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxesMetrics {
    pub x_label_width: f64,
    /// Y label box width plus its offset from the ticks.
    pub y_label_width: f64,
    pub y_label_height: f64,
    pub y_tick_length: f64,
    /// Half an x label hangs past the plot in point mode.
    pub x_label_margin: f64,
    /// Half a y label hangs past the plot in point mode.
    pub y_label_margin: f64,
    pub y_axis_min_width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxesLayout {
    pub orientation: Orientation,
    pub x: AxisLayout,
    pub y: AxisLayout,
    pub metrics: AxesMetrics,
}

impl Axes {
    pub fn new(value_scale: Scale, category_labels: Vec<String>) -> Self {
        Self {
            value_scale: Some(value_scale),
            category_labels: Some(category_labels),
            ..Self::default()
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn category_axis_mode(mut self, mode: CategoryAxisMode) -> Self {
        self.category_axis_mode = mode;
        self
    }

    pub fn value_axis_mode(mut self, mode: ValueAxisMode) -> Self {
        self.value_axis_mode = mode;
        self
    }

    pub fn category_visibility(mut self, visibility: AxisVisibility) -> Self {
        self.category_visibility = visibility;
        self
    }

    pub fn value_visibility(mut self, visibility: AxisVisibility) -> Self {
        self.value_visibility = visibility;
        self
    }

    pub fn value_labels(mut self, labels: Vec<String>) -> Self {
        self.value_labels = Some(labels);
        self
    }

    pub fn value_label_formatter(mut self, formatter: impl LabelFormatter + 'static) -> Self {
        self.value_label_formatter = Some(Arc::new(formatter));
        self
    }

    pub fn layout(&self) -> Result<AxesLayout> {
        let (Some(scale), Some(category_labels)) = (self.value_scale.as_ref(), self.category_labels.as_ref()) else {
            return Err(ChartError::MissingRequiredInput { what: "valueScale and categoryLabels" });
        };
        let inverted = self.value_axis_mode.is_inverted();
        let vertical = self.orientation.is_vertical();

        // value units/labels come out bottom-up (or left-to-right)
        let mut v_units = value_units(scale, inverted)?;
        let mut v_labels = match &self.value_labels {
            Some(labels) => labels.clone(),
            None => value_labels(scale, inverted, self.value_label_formatter.as_deref())?,
        };
        if vertical {
            v_units.reverse();
            v_labels.reverse();
        }

        let category = axis_layout(
            AxisRole::Category,
            self.category_axis_mode,
            category_units(category_labels.len(), self.category_axis_mode),
            category_labels.clone(),
            self.category_visibility,
            &self.category_axis_style,
            &self.category_label_style,
        );
        let value = axis_layout(
            AxisRole::Value,
            CategoryAxisMode::Point,
            v_units,
            v_labels,
            self.value_visibility,
            &self.value_axis_style,
            &self.value_label_style,
        );

        let (x, y) = if vertical { (category, value) } else { (value, category) };
        let metrics = metrics(&x, &y);
        debug!(
            orientation = ?self.orientation,
            x_units = x.units.len(),
            y_units = y.units.len(),
            "axes layout"
        );
        Ok(AxesLayout { orientation: self.orientation, x, y, metrics })
    }
}

fn axis_layout(
    role: AxisRole,
    mode: CategoryAxisMode,
    units: Vec<f64>,
    labels: Vec<String>,
    visibility: AxisVisibility,
    style: &AxisStyleOverrides,
    label_style: &LabelStyleOverrides,
) -> AxisLayout {
    let label_slots = label_slots(&units, labels.len());
    AxisLayout {
        role,
        mode,
        units,
        labels,
        label_slots,
        visibility,
        style: AxisStyle::default().with_overrides(style),
        label_style: LabelStyle::default().with_overrides(label_style),
    }
}

fn metrics(x: &AxisLayout, y: &AxisLayout) -> AxesMetrics {
    let y_label_width = if y.visibility.labels { y.label_style.width + y.style.label_offset } else { 0.0 };
    let y_label_height = if y.visibility.labels { y.label_style.font_size } else { 0.0 };
    let y_tick_length = if y.visibility.ticks { y.style.tick_length } else { 0.0 };
    let x_label_width = if x.visibility.labels { x.label_style.width } else { 0.0 };
    let x_label_margin = if x.mode == CategoryAxisMode::Point { x_label_width / 2.0 } else { 0.0 };
    let y_label_margin = if y.mode == CategoryAxisMode::Point { y_label_height / 2.0 } else { 0.0 };
    AxesMetrics {
        x_label_width,
        y_label_width,
        y_label_height,
        y_tick_length,
        x_label_margin,
        y_label_margin,
        y_axis_min_width: x_label_margin.max(y_label_width + y_tick_length),
    }
}
