use jauge_core::{DataType, DatedValue, Frequency, JaugeError, Period, Statistic};

use crate::Jauge;

impl Jauge {
    /// Per-bucket `statistic` as computed by the store, ordered by date.
    ///
    /// Rows are passed through untouched: no zero-filling, no axis.
    ///
    /// # Errors
    /// `NotFound` for an unknown location or feed, `Unsupported` when the store
    /// has no statistic capability, and any store or timeout error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "jauge::router",
            skip_all,
            fields(location = %location, data_type = %data_type, statistic = statistic.label()),
        )
    )]
    pub async fn statistic(
        &self,
        location: &str,
        data_type: DataType,
        frequency: Frequency,
        statistic: Statistic,
        period: Period,
    ) -> Result<Vec<DatedValue>, JaugeError> {
        let feed = self.resolve_feed(location, data_type).await?;
        let provider = self.statistic_provider()?;
        self.store_call(
            statistic.label(),
            provider.statistic(&feed, period, frequency, statistic),
        )
        .await
    }

    /// Daily sums over `period`.
    ///
    /// # Errors
    /// See [`statistic`](Self::statistic).
    pub async fn sum(
        &self,
        location: &str,
        data_type: DataType,
        period: Period,
    ) -> Result<Vec<DatedValue>, JaugeError> {
        self.statistic(location, data_type, Frequency::Day, Statistic::Sum, period)
            .await
    }

    /// Mean of each `frequency` bucket.
    ///
    /// # Errors
    /// See [`statistic`](Self::statistic).
    pub async fn average(
        &self,
        location: &str,
        data_type: DataType,
        frequency: Frequency,
        period: Period,
    ) -> Result<Vec<DatedValue>, JaugeError> {
        self.statistic(location, data_type, frequency, Statistic::Average, period)
            .await
    }

    /// Largest value of each `frequency` bucket.
    ///
    /// # Errors
    /// See [`statistic`](Self::statistic).
    pub async fn max(
        &self,
        location: &str,
        data_type: DataType,
        frequency: Frequency,
        period: Period,
    ) -> Result<Vec<DatedValue>, JaugeError> {
        self.statistic(location, data_type, frequency, Statistic::Max, period)
            .await
    }

    /// Smallest value of each `frequency` bucket.
    ///
    /// # Errors
    /// See [`statistic`](Self::statistic).
    pub async fn min(
        &self,
        location: &str,
        data_type: DataType,
        frequency: Frequency,
        period: Period,
    ) -> Result<Vec<DatedValue>, JaugeError> {
        self.statistic(location, data_type, frequency, Statistic::Min, period)
            .await
    }

    /// Number of readings strictly below `threshold` in each `frequency` bucket.
    ///
    /// # Errors
    /// `InvalidArg` for a NaN threshold; otherwise see [`statistic`](Self::statistic).
    pub async fn count_below(
        &self,
        location: &str,
        data_type: DataType,
        threshold: f64,
        frequency: Frequency,
        period: Period,
    ) -> Result<Vec<DatedValue>, JaugeError> {
        if threshold.is_nan() {
            return Err(JaugeError::InvalidArg("threshold must be a number".into()));
        }
        self.statistic(
            location,
            data_type,
            frequency,
            Statistic::CountBelow(threshold),
            period,
        )
        .await
    }
}
