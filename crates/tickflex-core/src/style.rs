// File: crates/tickflex-core/src/style.rs
// Summary: Axis, label and bar styling defaults handed to the renderer, with partial overrides.

use serde::{Deserialize, Serialize};

/// Default label box width in layout units.
pub const DEFAULT_AXIS_LABEL_WIDTH: f64 = 40.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dotted,
    Dashed,
}

/// Axis line, tick and gridline styling. Colours are opaque to the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub axis_line_width: f64,
    pub axis_line_color: String,
    pub tick_length: f64,
    pub label_offset: f64,
    pub gridline_width: f64,
    pub gridline_color: String,
    pub gridline_style: LineStyle,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            axis_line_width: 1.0,
            axis_line_color: "gray".to_string(),
            tick_length: 6.0,
            label_offset: 6.0,
            gridline_width: 1.0,
            gridline_color: "gray".to_string(),
            gridline_style: LineStyle::Solid,
        }
    }
}

/// Caller-supplied partial [`AxisStyle`]; unset fields keep the base value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisStyleOverrides {
    pub axis_line_width: Option<f64>,
    pub axis_line_color: Option<String>,
    pub tick_length: Option<f64>,
    pub label_offset: Option<f64>,
    pub gridline_width: Option<f64>,
    pub gridline_color: Option<String>,
    pub gridline_style: Option<LineStyle>,
}

impl AxisStyle {
    pub fn with_overrides(&self, o: &AxisStyleOverrides) -> Self {
        Self {
            axis_line_width: o.axis_line_width.unwrap_or(self.axis_line_width),
            axis_line_color: o.axis_line_color.clone().unwrap_or_else(|| self.axis_line_color.clone()),
            tick_length: o.tick_length.unwrap_or(self.tick_length),
            label_offset: o.label_offset.unwrap_or(self.label_offset),
            gridline_width: o.gridline_width.unwrap_or(self.gridline_width),
            gridline_color: o.gridline_color.clone().unwrap_or_else(|| self.gridline_color.clone()),
            gridline_style: o.gridline_style.unwrap_or(self.gridline_style),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub width: f64,
    pub font_size: f64,
    pub color: String,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self { width: DEFAULT_AXIS_LABEL_WIDTH, font_size: 12.0, color: "gray".to_string() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelStyleOverrides {
    pub width: Option<f64>,
    pub font_size: Option<f64>,
    pub color: Option<String>,
}

impl LabelStyle {
    pub fn with_overrides(&self, o: &LabelStyleOverrides) -> Self {
        Self {
            width: o.width.unwrap_or(self.width),
            font_size: o.font_size.unwrap_or(self.font_size),
            color: o.color.clone().unwrap_or_else(|| self.color.clone()),
        }
    }
}

/// Fallback bar colours when a dataset carries none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarStyle {
    pub fill_color: String,
    pub border_color: String,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self { fill_color: "#CBDDE6".to_string(), border_color: "#A2C3D2".to_string() }
    }
}
