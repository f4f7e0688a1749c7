// Data parser: t:x,x|y,y[|z,z]|... interleaved coordinate streams per series

use super::lexer::{NumberStream, Separator};
use crate::chart::{Chart, Coordinate, Series};
use crate::error::{ChartError, ChartResult, DataParameter};
use tracing::{debug, trace};

/// Prefix marking the text encoding of the data parameter
pub const TEXT_ENCODING_PREFIX: &str = "t:";

/// Parse a data specification and append its series to the chart.
///
/// Commas separate samples within one coordinate stream. A pipe closes the
/// stream; when the stream belongs to `max_coordinate` it also closes the
/// series, otherwise the next stream belongs to the next axis.
///
/// Input without the `t:` prefix, or with nothing after it, adds no series.
pub fn parse_data(chart: &mut Chart, input: &str, max_coordinate: Coordinate) -> ChartResult<()> {
    if !input.starts_with(TEXT_ENCODING_PREFIX) {
        debug!("data parameter has no text encoding prefix, ignoring");
        return Ok(());
    }
    if input.len() == TEXT_ENCODING_PREFIX.len() {
        debug!("data parameter is empty, ignoring");
        return Ok(());
    }

    let mut series_count = 0usize;
    let mut current = Series::new(series_count.to_string());
    let mut coordinate = Coordinate::X;

    for event in NumberStream::starting_at(input, TEXT_ENCODING_PREFIX.len()) {
        let (value, sep) = event.map_err(|e| ChartError::malformed(DataParameter::Data, e))?;
        current.push(coordinate, value);

        match sep {
            Separator::Comma => {}
            Separator::Pipe if coordinate == max_coordinate => {
                trace!(id = %current.id, points = current.len(), "series complete");
                series_count += 1;
                let finished = std::mem::replace(&mut current, Series::new(series_count.to_string()));
                chart.add_series(finished);
                coordinate = Coordinate::X;
            }
            Separator::Pipe => coordinate = coordinate.next(),
            Separator::End => break,
        }
    }

    trace!(id = %current.id, points = current.len(), "series complete");
    chart.add_series(current);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(input: &str, max: Coordinate) -> ChartResult<Vec<Series>> {
        let mut chart = Chart::new();
        parse_data(&mut chart, input, max)?;
        Ok(chart.series)
    }

    #[test]
    fn test_parse_single_series_2d() {
        let series = data("t:1,2,3|4,5,6", Coordinate::Y).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].id, "0");
        assert_eq!(series[0].xs, vec![1.0, 2.0, 3.0]);
        assert_eq!(series[0].ys, vec![4.0, 5.0, 6.0]);
        assert!(series[0].zs.is_empty());
    }

    #[test]
    fn test_parse_two_series_2d() {
        let series = data("t:0,1|2,3|4,5|6,7", Coordinate::Y).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].id, "1");
        assert_eq!(series[1].xs, vec![4.0, 5.0]);
        assert_eq!(series[1].ys, vec![6.0, 7.0]);
    }

    #[test]
    fn test_parse_two_series_3d() {
        let series = data("t:0,1|2,3|4,5|6,7|8,9|10,11", Coordinate::Z).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].xs, vec![0.0, 1.0]);
        assert_eq!(series[0].ys, vec![2.0, 3.0]);
        assert_eq!(series[0].zs, vec![4.0, 5.0]);
        assert_eq!(series[1].xs, vec![6.0, 7.0]);
        assert_eq!(series[1].ys, vec![8.0, 9.0]);
        assert_eq!(series[1].zs, vec![10.0, 11.0]);
    }

    #[test]
    fn test_parse_negative_and_fractional() {
        let series = data("t:-1.5,.5|2.,-0.25", Coordinate::Y).unwrap();
        assert_eq!(series[0].xs, vec![-1.5, 0.5]);
        assert_eq!(series[0].ys, vec![2.0, -0.25]);
    }

    #[test]
    fn test_parse_input_ending_mid_point() {
        let series = data("t:1,2,3", Coordinate::Y).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].xs, vec![1.0, 2.0, 3.0]);
        assert!(series[0].ys.is_empty());
    }

    #[test]
    fn test_missing_prefix_adds_nothing() {
        assert!(data("1,2|3,4", Coordinate::Y).unwrap().is_empty());
        assert!(data("s:ABC", Coordinate::Y).unwrap().is_empty());
        assert!(data("", Coordinate::Y).unwrap().is_empty());
        assert!(data("t:", Coordinate::Y).unwrap().is_empty());
    }

    #[test]
    fn test_unexpected_character() {
        let result = data("t:1,2,a|3,4", Coordinate::Y);
        assert!(matches!(
            result,
            Err(ChartError::MalformedData {
                param: DataParameter::Data,
                ..
            })
        ));
    }

    #[test]
    fn test_unparseable_number() {
        assert!(data("t:1,2-3|4,5", Coordinate::Y).is_err());
        assert!(data("t:1,,2|4,5", Coordinate::Y).is_err());
        assert!(data("t:1,2|", Coordinate::Y).is_err());
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(data("t:1, 2|3,4", Coordinate::Y).is_err());
    }

    #[test]
    fn test_error_message_names_offset() {
        let err = data("t:1,x", Coordinate::Y).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid data specification: unexpected character 'x' at offset 4"
        );
    }
}
