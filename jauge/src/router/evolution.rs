use jauge_core::series::evolution::evolution;
use jauge_core::{DataType, Frequency, JaugeError, Period, SeriesResponse, calendar};

use crate::Jauge;

impl Jauge {
    /// One value per `frequency` bucket of `period`, missing buckets at `0`.
    ///
    /// # Errors
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
    pub async fn evolution(
        &self,
        location: &str,
        data_type: DataType,
        frequency: Frequency,
        period: Period,
    ) -> Result<SeriesResponse, JaugeError> {
        let feed = self.resolve_feed(location, data_type).await?;
        let provider = self.series_provider()?;
        let rows = self
            .store_call("values", provider.values(&feed, period, frequency))
            .await?;
        let labels = calendar::labels(frequency, period.start(), period.end());
        Ok(evolution(labels, frequency, &rows))
    }
}
