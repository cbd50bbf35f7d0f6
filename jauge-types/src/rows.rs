//! Rows exchanged with the aggregate store.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{DataType, JaugeError};

/// A monitored place (building, meter site, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Store identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// One measurement stream of a location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feed {
    /// Store identifier of the feed.
    pub id: String,
    /// Owning location id.
    pub location_id: String,
    /// Measurement carried by the feed.
    pub data_type: DataType,
}

/// Column a store groups raw values by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisField {
    /// Weekday ordinal, 0 = Monday.
    #[serde(rename = "weekDay")]
    WeekDay,
    /// Hour of day, 0..=23.
    #[serde(rename = "hour")]
    Hour,
    /// ISO week number.
    #[serde(rename = "week")]
    Week,
}

impl AxisField {
    /// Column name as the store knows it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeekDay => "weekDay",
            Self::Hour => "hour",
            Self::Week => "week",
        }
    }
}

impl fmt::Display for AxisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisField {
    type Err = JaugeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "weekDay" | "weekday" | "WEEKDAY" => Ok(Self::WeekDay),
            "hour" | "HOUR" => Ok(Self::Hour),
            "week" | "WEEK" => Ok(Self::Week),
            other => Err(JaugeError::InvalidArg(format!("unknown group column '{other}'"))),
        }
    }
}

/// Aggregate computed by the store for one heatmap cell.
///
/// For week-style grids `x_key` is the weekday ordinal and `y_key` the hour.
/// For year-style grids `x_key` is the ISO week, `y_key` the weekday ordinal
/// (0 = Monday) and `year` the ISO year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridAggregate {
    /// Key along the X field.
    pub x_key: u32,
    /// Key along the Y field.
    pub y_key: u32,
    /// ISO year, required for year-style grids.
    pub year: Option<i32>,
    /// Aggregated value.
    pub value: f64,
}

/// Aggregate for one calendar bucket, keyed by the bucket's start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    /// Bucket start.
    pub date: NaiveDateTime,
    /// Aggregated value.
    pub value: f64,
}

/// Aggregate for one category of a group-by query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupedValue {
    /// Category ordinal.
    pub group_key: i64,
    /// Aggregated value.
    pub value: f64,
}

/// Paired aggregates of two feeds for the same bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XyPoint {
    /// Bucket start.
    pub date: NaiveDateTime,
    /// Value of the X feed.
    pub x_value: f64,
    /// Value of the Y feed.
    pub y_value: f64,
}

/// Statistic the store computes per bucket for pass-through endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Statistic {
    /// Sum of values.
    Sum,
    /// Mean of values.
    Average,
    /// Largest value.
    Max,
    /// Smallest value.
    Min,
    /// Number of values strictly below the threshold.
    CountBelow(f64),
}

impl Statistic {
    /// Capability label used in logs and timeout errors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Average => "average",
            Self::Max => "max",
            Self::Min => "min",
            Self::CountBelow(_) => "count_below",
        }
    }
}
