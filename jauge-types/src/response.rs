//! Chart-ready responses and their wire shapes.
//!
//! Field names (`axe`, `x`, `y`, `year`, `values`, `dates`, `label`, `axeX`,
//! `axeY`, `date`) are consumed verbatim by the dashboard front-end.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// One label on a chart axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisLabel {
    /// ISO week number, serialized as an integer.
    Week(u32),
    /// Display text (weekday or hour).
    Text(String),
}

impl fmt::Display for AxisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week(w) => write!(f, "{w}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

impl From<&str> for AxisLabel {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AxisLabel {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Two-dimensional axis definition of a repartition view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Column labels.
    pub x: Vec<AxisLabel>,
    /// Row labels.
    pub y: Vec<AxisLabel>,
    /// ISO years aligned 1:1 with the week-valued axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Vec<i32>>,
}

impl Axis {
    /// Same axis with X and Y swapped; the year sequence follows the weeks.
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self {
            x: self.y.clone(),
            y: self.x.clone(),
            year: self.year.clone(),
        }
    }
}

/// Heatmap cell: either blank (no data) or an aggregated value.
///
/// The blank sentinel is serialized as `""` so charts can tell it from `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Cell {
    /// No tuple landed on this cell.
    #[default]
    Blank,
    /// Value merged from the store.
    Value(f64),
}

impl Cell {
    /// Numeric value, `None` when blank.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Blank => None,
            Self::Value(v) => Some(v),
        }
    }

    /// True for the blank sentinel.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Blank => serializer.serialize_str(""),
            Self::Value(v) => serializer.serialize_f64(*v),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Ok(Self::Value(v)),
            Raw::Text(t) if t.is_empty() => Ok(Self::Blank),
            Raw::Text(t) => Err(de::Error::custom(format!("unexpected cell text '{t}'"))),
        }
    }
}

/// Dense heatmap payload; `values[i]` is described by `dates[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Cell values in axis order.
    pub values: Vec<Cell>,
    /// Bucket descriptions in the same order.
    pub dates: Vec<String>,
}

impl Grid {
    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Response of the repartition endpoint: `{axe, data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepartitionResponse {
    /// Axis labels as displayed.
    pub axe: Axis,
    /// Cells and their descriptions.
    pub data: Grid,
}

/// Response of the evolution and sum-group-by endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResponse {
    /// Long labels, one per bucket.
    pub label: Vec<String>,
    /// Axis labels, one per bucket.
    #[serde(rename = "axeX")]
    pub axe_x: Vec<String>,
    /// Values, zero where the store had nothing.
    #[serde(rename = "axeY")]
    pub axe_y: Vec<f64>,
}

/// Response of the XY scatter endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct XyResponse {
    /// Values of the X feed.
    #[serde(rename = "axeX")]
    pub axe_x: Vec<f64>,
    /// Values of the Y feed.
    #[serde(rename = "axeY")]
    pub axe_y: Vec<f64>,
    /// Formatted bucket dates.
    pub date: Vec<String>,
}
