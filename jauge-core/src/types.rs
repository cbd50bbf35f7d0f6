//! Re-export of the shared types from `jauge-types`.
// Consolidated re-exports so downstream crates can depend on `jauge-core` only

pub use jauge_types::{
    AxisField, DataType, DatedValue, Feed, Frequency, GridAggregate, GroupedValue, JaugeConfig,
    JaugeError, Location, Period, RepartitionType, Statistic, WeekdayLabels, XyPoint,
};

pub use jauge_types::{
    Axis, AxisLabel, Cell, Grid, RepartitionResponse, SeriesResponse, XyResponse,
};
