// Series label parser: pipe-separated labels aligned with existing series

use super::lexer::split_labels;
use crate::chart::Chart;
use tracing::debug;

/// Assign labels to the chart's series by position.
///
/// Must run after the data parser has created the series. Any label turns the
/// legend on; labels past the last series are discarded.
pub fn parse_series_labels(chart: &mut Chart, input: &str) {
    let mut labels = split_labels(input).peekable();
    if labels.peek().is_some() {
        chart.legend = true;
    }

    for series in chart.series.iter_mut() {
        match labels.next() {
            Some(label) => series.label = Some(label.to_string()),
            None => break,
        }
    }

    let discarded = labels.count();
    if discarded > 0 {
        debug!(discarded, "discarding series labels without a matching series");
    }
}
