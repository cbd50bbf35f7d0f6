use async_trait::async_trait;

use crate::{
    AxisField, DataType, DatedValue, Feed, Frequency, GridAggregate, GroupedValue, JaugeError,
    Location, Period, RepartitionType, Statistic, XyPoint,
};

/// Parameters of a repartition aggregate query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepartitionQuery {
    /// Requested range.
    pub period: Period,
    /// Column keyed along X.
    pub x_field: AxisField,
    /// Column keyed along Y.
    pub y_field: AxisField,
    /// Bucket frequency the values are aggregated at.
    pub frequency: Frequency,
    /// Layout being built.
    pub kind: RepartitionType,
}

/// Focused role trait for stores that aggregate heatmap cells.
#[async_trait]
pub trait RepartitionProvider: Send + Sync {
    /// Aggregate the feed per `(x_field, y_field)` cell.
    async fn repartition(
        &self,
        feed: &Feed,
        query: RepartitionQuery,
    ) -> Result<Vec<GridAggregate>, JaugeError>;
}

/// Focused role trait for stores that aggregate calendar buckets.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// One row per bucket that has data, ordered by date.
    async fn values(
        &self,
        feed: &Feed,
        period: Period,
        frequency: Frequency,
    ) -> Result<Vec<DatedValue>, JaugeError>;

    /// Sum of bucket values grouped by a categorical column.
    async fn sum_group_by(
        &self,
        feed: &Feed,
        period: Period,
        frequency: Frequency,
        column: AxisField,
    ) -> Result<Vec<GroupedValue>, JaugeError>;
}

/// Focused role trait for stores that compute per-bucket statistics.
#[async_trait]
pub trait StatisticProvider: Send + Sync {
    /// Per-bucket statistic, ordered by date.
    async fn statistic(
        &self,
        feed: &Feed,
        period: Period,
        frequency: Frequency,
        statistic: Statistic,
    ) -> Result<Vec<DatedValue>, JaugeError>;
}

/// Focused role trait for stores that pair two feeds bucket by bucket.
#[async_trait]
pub trait XyProvider: Send + Sync {
    /// Buckets where both feeds have a value, ordered by date.
    async fn xy(
        &self,
        x: &Feed,
        y: &Feed,
        period: Period,
        frequency: Frequency,
    ) -> Result<Vec<XyPoint>, JaugeError>;
}

/// The storage collaborator behind every dashboard view.
///
/// Lookups are required; aggregate capabilities are advertised through the
/// `as_*_provider` accessors and default to unsupported.
#[async_trait]
pub trait AggregateStore: Send + Sync {
    /// Stable store name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Resolve a location by id.
    ///
    /// # Errors
    /// `JaugeError::NotFound` when no such location exists.
    async fn find_location(&self, id: &str) -> Result<Location, JaugeError>;

    /// Resolve the feed of `location` carrying `data_type`.
    ///
    /// # Errors
    /// `JaugeError::NotFound` when the location has no such feed.
    async fn find_feed(&self, location: &Location, data_type: DataType) -> Result<Feed, JaugeError>;

    /// Heatmap aggregation capability.
    fn as_repartition_provider(&self) -> Option<&dyn RepartitionProvider> {
        None
    }

    /// Calendar bucket aggregation capability.
    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        None
    }

    /// Per-bucket statistics capability.
    fn as_statistic_provider(&self) -> Option<&dyn StatisticProvider> {
        None
    }

    /// Paired feed capability.
    fn as_xy_provider(&self) -> Option<&dyn XyProvider> {
        None
    }
}
