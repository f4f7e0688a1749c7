// Chart request parser module

pub mod axis;
pub mod data;
pub mod labels;
pub mod lexer;
pub mod line_style;
pub mod request;
pub mod size;

// Public API re-exports
pub use request::{parse_chart, ChartParser};
