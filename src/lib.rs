// Library exports for chartquery

pub mod chart;
pub mod config;
pub mod error;
pub mod params;
pub mod parser;

pub use chart::{Axis, Chart, Coordinate, LineStyle, Series};
pub use config::{AxisLabelMapping, ParamNames, ParserConfig};
pub use error::{ChartError, ChartResult, DataParameter};
pub use params::ParamMap;
pub use parser::{parse_chart, ChartParser};
