//! Jauge data transfer objects, configuration primitives and the shared error type.
#![warn(missing_docs)]

mod config;
mod data_type;
mod error;
pub mod frequency;
mod period;
mod repartition;
pub mod response;
pub mod rows;

pub use config::{JaugeConfig, WeekdayLabels};
pub use data_type::DataType;
pub use error::JaugeError;
pub use frequency::Frequency;
pub use period::Period;
pub use repartition::RepartitionType;
pub use response::{
    Axis, AxisLabel, Cell, Grid, RepartitionResponse, SeriesResponse, XyResponse,
};
pub use rows::{
    AxisField, DatedValue, Feed, GridAggregate, GroupedValue, Location, Statistic, XyPoint,
};
