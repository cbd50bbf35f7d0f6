//! jauge-core
//!
//! Time-bucketing and axis-alignment engine behind jauge dashboards.
//!
//! - `calendar`: bucket enumeration and labels for a frequency over a range.
//! - `axis`: axis definitions of repartition (heatmap) views.
//! - `grid`: cell indexing, ISO week-date reconstruction and tuple merging.
//! - `series`: gap-filled evolution and group-by series.
//! - `store`: the `AggregateStore` trait and its capability role traits.
//!
//! Every builder is a pure synchronous function of its inputs. Axes are fully
//! built before any tuple is merged, so the shape of a response never depends
//! on what the store returned.
#![warn(missing_docs)]

/// Repartition axis construction.
pub mod axis;
/// Calendar stepping and bucket labels.
pub mod calendar;
/// Repartition grids.
pub mod grid;
/// Evolution and group-by series.
pub mod series;
/// Aggregate store contracts.
pub mod store;
pub mod types;

pub use axis::RepartitionAxis;
pub use calendar::CalendarLabels;
pub use grid::index::{GridStyle, cell_index, decompose, reconstruct_date};
pub use store::{
    AggregateStore, RepartitionProvider, RepartitionQuery, SeriesProvider, StatisticProvider,
    XyProvider,
};
pub use types::*;
