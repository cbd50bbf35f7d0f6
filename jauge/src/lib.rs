//! Jauge turns per-location sensor aggregates into chart-ready responses.
//!
//! Overview
//! - Resolves a location and its feed through an [`AggregateStore`], asks the
//!   store for aggregates and shapes them with the `jauge_core` builders.
//! - Axes are built from the requested period alone, so a response always has
//!   the same shape for the same request, whatever data the store holds.
//! - Errors are uniform [`JaugeError`] values; store calls can be capped by a
//!   timeout configured on the builder.
//!
//! Views
//! - `repartition`: weekly (day × hour) or yearly (ISO week × weekday) heatmaps.
//! - `evolution`: one value per calendar bucket, zero-filled.
//! - `sum_group_by`: totals per weekday.
//! - `sum`, `average`, `max`, `min`, `count_below`: per-bucket statistics.
//! - `xy`: two feeds of one location paired bucket by bucket.
//!
//! [`RouteParams`] parses raw route segments into the typed arguments above.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use jauge::Jauge;
//! use jauge_core::{DataType, RepartitionType};
//!
//! let jauge = Jauge::builder()
//!     .with_store(Arc::new(my_store))
//!     .store_timeout(std::time::Duration::from_secs(2))
//!     .build()?;
//!
//! let period = jauge.period(Some("2018-01-01"), Some("2018-03-31"))?;
//! let heatmap = jauge
//!     .repartition("home", DataType::ConsoElec, RepartitionType::YearHorizontal, period)
//!     .await?;
//! ```
#![warn(missing_docs)]

mod core;
pub mod request;
mod router;

pub use crate::core::{Jauge, JaugeBuilder};
pub use request::RouteParams;
pub use jauge_core::{
    AggregateStore, DataType, Frequency, JaugeConfig, JaugeError, Period, RepartitionType,
};
