// Size parser: WIDTHxHEIGHT

use crate::chart::Chart;
use crate::error::{ChartError, ChartResult};
use tracing::debug;

/// Parse a size specification
/// Format: 200x150
///
/// A dimension outside `(0, max)` is dropped without error. A token that is
/// not an integer fails the parse.
pub fn parse_size(chart: &mut Chart, input: &str, max_width: u32, max_height: u32) -> ChartResult<()> {
    let mut tokens = input.split('x').filter(|t| !t.is_empty());

    if let Some(token) = tokens.next() {
        chart.width = bounded_dimension(token, max_width, "width")?.or(chart.width);
    }
    if let Some(token) = tokens.next() {
        chart.height = bounded_dimension(token, max_height, "height")?.or(chart.height);
    }

    Ok(())
}

fn bounded_dimension(token: &str, max: u32, name: &str) -> ChartResult<Option<u32>> {
    let value: i32 = token.parse().map_err(|_| ChartError::MalformedSize {
        token: token.to_string(),
    })?;

    match u32::try_from(value) {
        Ok(v) if v > 0 && v < max => Ok(Some(v)),
        _ => {
            debug!(value, max, dimension = name, "ignoring out-of-range chart dimension");
            Ok(None)
        }
    }
}
