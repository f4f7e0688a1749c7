// Chart model produced by the request parser

use serde::{Deserialize, Serialize};

/// Coordinate axis a data value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coordinate {
    X,
    Y,
    Z,
}

impl Coordinate {
    /// Next axis in the X -> Y -> Z -> X cycle
    pub fn next(self) -> Self {
        match self {
            Coordinate::X => Coordinate::Y,
            Coordinate::Y => Coordinate::Z,
            Coordinate::Z => Coordinate::X,
        }
    }
}

/// Complete chart specification, ready for a renderer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chart {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub x_axis: Option<Axis>,
    pub y_axis: Option<Axis>,
    pub z_axis: Option<Axis>,
    pub series: Vec<Series>,
    pub line_styles: Vec<LineStyle>,
    pub legend: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_line_style(&mut self, style: LineStyle) {
        self.line_styles.push(style);
    }

    /// Axis slot for a coordinate
    pub fn axis_mut(&mut self, coordinate: Coordinate) -> &mut Option<Axis> {
        match coordinate {
            Coordinate::X => &mut self.x_axis,
            Coordinate::Y => &mut self.y_axis,
            Coordinate::Z => &mut self.z_axis,
        }
    }

    pub fn is_3d(&self) -> bool {
        self.series.iter().any(|s| !s.zs.is_empty())
    }
}

/// One data series: parallel coordinate streams rendered as a single curve
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub label: Option<String>,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub zs: Vec<f64>,
}

impl Series {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Append a value to the stream of the given coordinate
    pub fn push(&mut self, coordinate: Coordinate, value: f64) {
        match coordinate {
            Coordinate::X => self.xs.push(value),
            Coordinate::Y => self.ys.push(value),
            Coordinate::Z => self.zs.push(value),
        }
    }

    /// Number of complete points (shortest active stream)
    pub fn len(&self) -> usize {
        let planar = self.xs.len().min(self.ys.len());
        if self.zs.is_empty() {
            planar
        } else {
            planar.min(self.zs.len())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Stroke pattern for one series' line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: f64,
    pub dash_length: f64,
    pub space_length: f64,
}

impl LineStyle {
    pub fn new(width: f64, dash_length: f64, space_length: f64) -> Self {
        Self {
            width,
            dash_length,
            space_length,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.dash_length > 0.0 && self.space_length > 0.0
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}
