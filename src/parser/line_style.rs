// Line style parser: width,dash,space groups separated by pipes

use super::lexer::{Separator, TokenStream};
use crate::chart::{Chart, LineStyle};
use crate::error::{ChartError, ChartResult, DataParameter};
use tracing::{debug, trace};

/// Position within a `width,dash,space` group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupSlot {
    Thickness,
    DashLength,
    SpaceLength,
}

fn malformed(reason: impl std::fmt::Display) -> ChartError {
    ChartError::malformed(DataParameter::LineStyle, reason)
}

/// Parse line style groups
/// Format: 2.0,3.0,1.0|1.5,0.5,0.5
///
/// A trailing group with fewer than three values is dropped, or rejected when
/// `strict` is set. Strict mode also rejects values that are not positive.
pub fn parse_line_style(chart: &mut Chart, input: &str, strict: bool) -> ChartResult<()> {
    if input.is_empty() {
        return Ok(());
    }

    let mut styles = Vec::new();
    let mut slot = GroupSlot::Thickness;
    let mut style = LineStyle::default();

    for token in TokenStream::new(input) {
        let token = token.map_err(malformed)?;

        match (slot, token.sep) {
            (GroupSlot::Thickness, Separator::Comma) => {
                style.width = token.value().map_err(malformed)?;
                slot = GroupSlot::DashLength;
            }
            (GroupSlot::DashLength, Separator::Comma) => {
                style.dash_length = token.value().map_err(malformed)?;
                slot = GroupSlot::SpaceLength;
            }
            (GroupSlot::SpaceLength, Separator::Comma) => {
                return Err(malformed(format!(
                    "group {} has more than three values",
                    styles.len() + 1
                )));
            }
            (GroupSlot::SpaceLength, Separator::Pipe | Separator::End) => {
                style.space_length = token.value().map_err(malformed)?;
                if strict && !style.is_positive() {
                    return Err(malformed(format!(
                        "group {} has a value that is not positive",
                        styles.len() + 1
                    )));
                }
                trace!(?style, "line style");
                styles.push(style);
                style = LineStyle::default();
                slot = GroupSlot::Thickness;
            }
            (_, Separator::Pipe) => {
                return Err(malformed(format!(
                    "group {} ends before its space length",
                    styles.len() + 1
                )));
            }
            // Partial trailing group: its last token is never converted
            (_, Separator::End) => {
                if strict {
                    return Err(malformed(format!(
                        "trailing group {} has fewer than three values",
                        styles.len() + 1
                    )));
                }
                debug!(?slot, "dropping incomplete trailing line style group");
            }
        }
    }

    for style in styles {
        chart.add_line_style(style);
    }
    Ok(())
}
