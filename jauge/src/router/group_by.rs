use jauge_core::series::group_by::group_by;
use jauge_core::{AxisField, DataType, Frequency, JaugeError, Period, SeriesResponse};

use crate::Jauge;

impl Jauge {
    /// Totals of `period` per weekday, Monday first.
    ///
    /// The store is always asked to group by [`AxisField::WeekDay`]; its keys
    /// are weekday ordinals (`0` = Monday).
    ///
    /// # Errors
    /// `InvalidGroupKey` when the store returns a key outside `0..=6`,
    /// `NotFound` for an unknown location or feed, `Unsupported` when the store
    /// has no series capability, and any store or timeout error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "jauge::router",
            skip_all,
            fields(location = %location, data_type = %data_type, frequency = %frequency),
        )
    )]
    pub async fn sum_group_by(
        &self,
        location: &str,
        data_type: DataType,
        frequency: Frequency,
        period: Period,
    ) -> Result<SeriesResponse, JaugeError> {
        let feed = self.resolve_feed(location, data_type).await?;
        let provider = self.series_provider()?;
        let rows = self
            .store_call(
                "sum_group_by",
                provider.sum_group_by(&feed, period, frequency, AxisField::WeekDay),
            )
            .await?;
        group_by(&self.cfg.weekday_labels, &rows)
    }
}
