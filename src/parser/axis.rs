// Axis label parser: pipe-separated labels assigned to X, Y and the third axis

use super::lexer::split_labels;
use crate::chart::{Axis, Chart, Coordinate};
use crate::config::AxisLabelMapping;
use tracing::trace;

/// Parse axis labels
/// Format: time|amplitude|phase
///
/// Labels are assigned by position and the cycle restarts at X after the
/// third. With `AxisLabelMapping::Legacy` the third label lands on the Y axis.
pub fn parse_axis_labels(chart: &mut Chart, input: &str, mapping: AxisLabelMapping) {
    let mut slot = Coordinate::X;

    for label in split_labels(input) {
        let target = match (slot, mapping) {
            (Coordinate::Z, AxisLabelMapping::Legacy) => Coordinate::Y,
            (coordinate, _) => coordinate,
        };
        trace!(?target, label, "axis label");
        *chart.axis_mut(target) = Some(Axis::new(label));
        slot = slot.next();
    }
}
