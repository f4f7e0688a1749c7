// Request orchestrator: runs the parameter parsers in a fixed order

use super::axis::parse_axis_labels;
use super::data::parse_data;
use super::labels::parse_series_labels;
use super::line_style::parse_line_style;
use super::size::parse_size;
use crate::chart::{Chart, Coordinate, LineStyle};
use crate::config::ParserConfig;
use crate::error::ChartResult;
use crate::params::ParamMap;
use tracing::debug;

/// Builds `Chart`s from parameter maps using one configuration.
///
/// Holds no state between calls, so a single parser can be shared across
/// request handlers.
#[derive(Debug, Clone, Default)]
pub struct ChartParser {
    config: ParserConfig,
}

impl ChartParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a complete chart request.
    ///
    /// Series labels are applied after the data parameter has created the
    /// series. Without a line style parameter the chart gets one default
    /// style.
    pub fn parse(&self, params: &ParamMap, is_3d: bool) -> ChartResult<Chart> {
        let names = &self.config.params;
        let mut chart = Chart::new();

        if let Some(title) = params.get(&names.title).filter(|t| !t.is_empty()) {
            chart.title = Some(title.to_string());
        }

        if let Some(size) = params.get(&names.size) {
            parse_size(&mut chart, size, self.config.max_width, self.config.max_height)?;
        }

        if let Some(labels) = params.get(&names.axis_labels) {
            parse_axis_labels(&mut chart, labels, self.config.axis_labels);
        }

        if let Some(data) = params.get(&names.data) {
            let max_coordinate = if is_3d { Coordinate::Z } else { Coordinate::Y };
            parse_data(&mut chart, data, max_coordinate)?;
        }

        if let Some(labels) = params.get(&names.series_labels) {
            parse_series_labels(&mut chart, labels);
        }

        if let Some(styles) = params.get(&names.line_style) {
            parse_line_style(&mut chart, styles, self.config.strict_line_styles)?;
        }
        if chart.line_styles.is_empty() {
            chart.add_line_style(LineStyle::default());
        }

        debug!(
            is_3d,
            has_z = chart.is_3d(),
            series = chart.series.len(),
            line_styles = chart.line_styles.len(),
            legend = chart.legend,
            "parsed chart request"
        );
        Ok(chart)
    }
}

/// Parse a chart request with the default configuration
pub fn parse_chart(params: &ParamMap, is_3d: bool) -> ChartResult<Chart> {
    ChartParser::default().parse(params, is_3d)
}
