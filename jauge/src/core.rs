use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use jauge_core::store::{RepartitionProvider, SeriesProvider, StatisticProvider, XyProvider};
use jauge_core::{
    AggregateStore, DataType, Feed, JaugeConfig, JaugeError, Location, Period, WeekdayLabels,
};

/// Orchestrator that serves dashboard views from one aggregate store.
pub struct Jauge {
    pub(crate) store: Arc<dyn AggregateStore>,
    pub(crate) cfg: JaugeConfig,
}

/// Builder for constructing a `Jauge` orchestrator with custom configuration.
pub struct JaugeBuilder {
    store: Option<Arc<dyn AggregateStore>>,
    cfg: JaugeConfig,
}

impl Default for JaugeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JaugeBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts with no store; register one via [`with_store`](Self::with_store).
    /// Defaults: French weekday labels, 2018-01-01 as the default period
    /// start, no store timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            cfg: JaugeConfig::default(),
        }
    }

    /// Register the aggregate store. A later call replaces the earlier store.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn AggregateStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: JaugeConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Labels of Monday..Sunday used on weekday axes and group-by series.
    #[must_use]
    pub fn weekday_labels(mut self, labels: WeekdayLabels) -> Self {
        self.cfg.weekday_labels = labels;
        self
    }

    /// Start of the period when a request gives no start date.
    #[must_use]
    pub const fn default_start(mut self, date: NaiveDate) -> Self {
        self.cfg.default_start = date;
        self
    }

    /// Cap every store call; an elapsed call fails with `StoreTimeout`.
    #[must_use]
    pub const fn store_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.store_timeout = Some(timeout);
        self
    }

    /// Build the `Jauge` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no store has been registered via [`with_store`](Self::with_store).
    pub fn build(self) -> Result<Jauge, JaugeError> {
        let Some(store) = self.store else {
            return Err(JaugeError::InvalidArg(
                "no store registered; add one via with_store(...)".to_string(),
            ));
        };
        Ok(Jauge {
            store,
            cfg: self.cfg,
        })
    }
}

impl Jauge {
    /// Start building a new `Jauge` instance.
    #[must_use]
    pub fn builder() -> JaugeBuilder {
        JaugeBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &JaugeConfig {
        &self.cfg
    }

    /// Resolve the requested range from optional `YYYY-MM-DD` bounds.
    ///
    /// A missing start falls back to the configured default start, a missing
    /// end to today (UTC).
    ///
    /// # Errors
    /// `InvalidArg` for unparsable dates or a start after the end.
    pub fn period(&self, start: Option<&str>, end: Option<&str>) -> Result<Period, JaugeError> {
        Period::resolve(start, end, self.cfg.default_start, Self::today())
    }

    /// Current UTC date.
    #[must_use]
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Wrap a store future with the configured timeout.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "jauge::core::store_call",
            skip_all,
            fields(store = self.store.name(), capability = capability),
        )
    )]
    pub(crate) async fn store_call<T, Fut>(
        &self,
        capability: &'static str,
        fut: Fut,
    ) -> Result<T, JaugeError>
    where
        Fut: core::future::Future<Output = Result<T, JaugeError>>,
    {
        match self.cfg.store_timeout {
            Some(timeout) => (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
                Err(JaugeError::store_timeout(self.store.name(), capability))
            }),
            None => fut.await,
        }
    }

    pub(crate) async fn location(&self, id: &str) -> Result<Location, JaugeError> {
        self.store_call("location", self.store.find_location(id))
            .await
    }

    pub(crate) async fn feed(
        &self,
        location: &Location,
        data_type: DataType,
    ) -> Result<Feed, JaugeError> {
        self.store_call("feed", self.store.find_feed(location, data_type))
            .await
    }

    /// Location lookup followed by feed lookup.
    pub(crate) async fn resolve_feed(
        &self,
        location_id: &str,
        data_type: DataType,
    ) -> Result<Feed, JaugeError> {
        let location = self.location(location_id).await?;
        self.feed(&location, data_type).await
    }

    pub(crate) fn repartition_provider(&self) -> Result<&dyn RepartitionProvider, JaugeError> {
        self.store
            .as_repartition_provider()
            .ok_or_else(|| JaugeError::unsupported("repartition"))
    }

    pub(crate) fn series_provider(&self) -> Result<&dyn SeriesProvider, JaugeError> {
        self.store
            .as_series_provider()
            .ok_or_else(|| JaugeError::unsupported("series"))
    }

    pub(crate) fn statistic_provider(&self) -> Result<&dyn StatisticProvider, JaugeError> {
        self.store
            .as_statistic_provider()
            .ok_or_else(|| JaugeError::unsupported("statistic"))
    }

    pub(crate) fn xy_provider(&self) -> Result<&dyn XyProvider, JaugeError> {
        self.store
            .as_xy_provider()
            .ok_or_else(|| JaugeError::unsupported("xy"))
    }
}
