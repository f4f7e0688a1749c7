// Parser configuration: parameter names, size bounds and compatibility switches

use serde::Deserialize;

/// How the third axis label is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum AxisLabelMapping {
    /// Third label overwrites the Y axis label; Z is never set
    #[serde(rename = "legacy")]
    #[default]
    Legacy,
    /// Third label goes to the Z axis
    #[serde(rename = "corrected")]
    Corrected,
}

/// Query parameter names recognized by the parser
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamNames {
    pub title: String,
    pub size: String,
    pub axis_labels: String,
    pub data: String,
    pub series_labels: String,
    pub line_style: String,
}

impl Default for ParamNames {
    fn default() -> Self {
        Self {
            title: "chtt".to_string(),
            size: "chs".to_string(),
            axis_labels: "chxl".to_string(),
            data: "chd".to_string(),
            series_labels: "chdl".to_string(),
            line_style: "chls".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    pub params: ParamNames,
    /// Exclusive upper bound for the chart width
    pub max_width: u32,
    /// Exclusive upper bound for the chart height
    pub max_height: u32,
    pub axis_labels: AxisLabelMapping,
    /// Reject incomplete or non-positive line style groups instead of dropping them
    pub strict_line_styles: bool,
}

pub const DEFAULT_MAX_WIDTH: u32 = 800;
pub const DEFAULT_MAX_HEIGHT: u32 = 800;

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            params: ParamNames::default(),
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            axis_labels: AxisLabelMapping::default(),
            strict_line_styles: false,
        }
    }
}

impl ParserConfig {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
