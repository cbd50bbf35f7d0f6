//! Deterministic in-memory aggregate store for jauge tests and demos.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use jauge_core::store::{
    AggregateStore, RepartitionProvider, RepartitionQuery, SeriesProvider, StatisticProvider,
    XyProvider,
};
use jauge_core::{
    AxisField, DataType, DatedValue, Feed, Frequency, GridAggregate, GroupedValue, JaugeError,
    Location, Period, RepartitionType, Statistic, XyPoint,
};

pub mod bucket;
mod fixtures;

pub use bucket::Reading;

/// Location id whose lookup always fails with a store error.
pub const FAIL: &str = "FAIL";
/// Location id whose lookup sleeps before answering.
pub const SLOW: &str = "SLOW";
/// Location id served by [`MockStore::fixture`].
pub const HOME: &str = "home";

const NAME: &str = "jauge-mock";

/// In-memory aggregate store for CI-safe tests and examples.
///
/// Holds raw readings per `(location, data type)` and aggregates them on
/// demand (sums per bucket), the way a time-series database would.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    locations: HashMap<String, Location>,
    readings: HashMap<(String, DataType), Vec<Reading>>,
    delay: Duration,
}

impl MockStore {
    /// Empty store: every location lookup is `NotFound`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(200),
            ..Self::default()
        }
    }

    /// Store with one location, [`HOME`], carrying hourly electricity
    /// consumption and daily temperature over the first quarter of 2018.
    #[must_use]
    pub fn fixture() -> Self {
        let first = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap_or(NaiveDate::MIN);
        Self::new()
            .with_location(HOME, "Maison")
            .with_location(SLOW, "Slow site")
            .with_readings(
                HOME,
                DataType::ConsoElec,
                fixtures::readings::hourly_consumption(first, 90),
            )
            .with_readings(
                HOME,
                DataType::Temperature,
                fixtures::readings::daily_temperature(first, 90),
            )
            .with_readings(
                SLOW,
                DataType::ConsoElec,
                fixtures::readings::hourly_consumption(first, 7),
            )
    }

    /// Register a location.
    #[must_use]
    pub fn with_location(mut self, id: &str, name: &str) -> Self {
        self.locations.insert(
            id.to_string(),
            Location {
                id: id.to_string(),
                name: name.to_string(),
            },
        );
        self
    }

    /// Attach raw readings to a location's feed, creating the feed.
    #[must_use]
    pub fn with_readings(
        mut self,
        location_id: &str,
        data_type: DataType,
        readings: impl IntoIterator<Item = Reading>,
    ) -> Self {
        self.readings
            .entry((location_id.to_string(), data_type))
            .or_default()
            .extend(readings);
        self
    }

    /// Delay applied to lookups of [`SLOW`].
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn feed_readings(&self, feed: &Feed) -> Result<&[Reading], JaugeError> {
        self.readings
            .get(&(feed.location_id.clone(), feed.data_type))
            .map(Vec::as_slice)
            .ok_or_else(|| JaugeError::not_found(format!("feed {}", feed.id)))
    }

    fn bucketed(
        &self,
        feed: &Feed,
        period: Period,
        frequency: Frequency,
    ) -> Result<BTreeMap<NaiveDateTime, Vec<f64>>, JaugeError> {
        let readings = self.feed_readings(feed)?;
        Ok(bucket::group(bucket::within(readings, period), |ts| {
            bucket::bucket_start(frequency, ts)
        }))
    }
}

#[async_trait]
impl AggregateStore for MockStore {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn find_location(&self, id: &str) -> Result<Location, JaugeError> {
        match id {
            FAIL => return Err(JaugeError::store(NAME, "forced failure: location")),
            SLOW => tokio::time::sleep(self.delay).await,
            _ => {}
        }
        self.locations
            .get(id)
            .cloned()
            .ok_or_else(|| JaugeError::not_found(format!("location {id}")))
    }

    async fn find_feed(&self, location: &Location, data_type: DataType) -> Result<Feed, JaugeError> {
        if !self
            .readings
            .contains_key(&(location.id.clone(), data_type))
        {
            return Err(JaugeError::not_found(format!(
                "{data_type} feed for location {}",
                location.id
            )));
        }
        Ok(Feed {
            id: format!("{}:{}", location.id, data_type.as_str().to_ascii_lowercase()),
            location_id: location.id.clone(),
            data_type,
        })
    }

    fn as_repartition_provider(&self) -> Option<&dyn RepartitionProvider> {
        Some(self as &dyn RepartitionProvider)
    }
    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }
    fn as_statistic_provider(&self) -> Option<&dyn StatisticProvider> {
        Some(self as &dyn StatisticProvider)
    }
    fn as_xy_provider(&self) -> Option<&dyn XyProvider> {
        Some(self as &dyn XyProvider)
    }
}

#[async_trait]
impl RepartitionProvider for MockStore {
    async fn repartition(
        &self,
        feed: &Feed,
        query: RepartitionQuery,
    ) -> Result<Vec<GridAggregate>, JaugeError> {
        let readings = bucket::within(self.feed_readings(feed)?, query.period);
        let rows: Vec<GridAggregate> = match query.kind {
            RepartitionType::Week => bucket::group(readings, |ts| {
                (ts.weekday().num_days_from_monday(), ts.hour())
            })
            .into_iter()
            .map(|((day, hour), values)| GridAggregate {
                x_key: day,
                y_key: hour,
                year: None,
                value: bucket::sum(&values),
            })
            .collect(),
            RepartitionType::YearHorizontal | RepartitionType::YearVertical => {
                bucket::group(readings, |ts| {
                    let iso = ts.iso_week();
                    (iso.year(), iso.week(), ts.weekday().num_days_from_monday())
                })
                .into_iter()
                .map(|((year, week, day), values)| GridAggregate {
                    x_key: week,
                    y_key: day,
                    year: Some(year),
                    value: bucket::sum(&values),
                })
                .collect()
            }
        };
        Ok(rows)
    }
}

#[async_trait]
impl SeriesProvider for MockStore {
    async fn values(
        &self,
        feed: &Feed,
        period: Period,
        frequency: Frequency,
    ) -> Result<Vec<DatedValue>, JaugeError> {
        Ok(self
            .bucketed(feed, period, frequency)?
            .into_iter()
            .map(|(date, values)| DatedValue {
                date,
                value: bucket::sum(&values),
            })
            .collect())
    }

    async fn sum_group_by(
        &self,
        feed: &Feed,
        period: Period,
        _frequency: Frequency,
        column: AxisField,
    ) -> Result<Vec<GroupedValue>, JaugeError> {
        let readings = bucket::within(self.feed_readings(feed)?, period);
        Ok(bucket::group(readings, |ts| bucket::column_key(column, ts))
            .into_iter()
            .map(|(group_key, values)| GroupedValue {
                group_key,
                value: bucket::sum(&values),
            })
            .collect())
    }
}

#[async_trait]
impl StatisticProvider for MockStore {
    async fn statistic(
        &self,
        feed: &Feed,
        period: Period,
        frequency: Frequency,
        statistic: Statistic,
    ) -> Result<Vec<DatedValue>, JaugeError> {
        Ok(self
            .bucketed(feed, period, frequency)?
            .into_iter()
            .map(|(date, values)| DatedValue {
                date,
                value: compute(statistic, &values),
            })
            .collect())
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute(statistic: Statistic, values: &[f64]) -> f64 {
    match statistic {
        Statistic::Sum => bucket::sum(values),
        Statistic::Average => bucket::sum(values) / values.len().max(1) as f64,
        Statistic::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        Statistic::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        Statistic::CountBelow(t) => values.iter().filter(|&&v| v < t).count() as f64,
    }
}

#[async_trait]
impl XyProvider for MockStore {
    async fn xy(
        &self,
        x: &Feed,
        y: &Feed,
        period: Period,
        frequency: Frequency,
    ) -> Result<Vec<XyPoint>, JaugeError> {
        let xs = self.bucketed(x, period, frequency)?;
        let ys = self.bucketed(y, period, frequency)?;
        Ok(xs
            .into_iter()
            .filter_map(|(date, xv)| {
                ys.get(&date).map(|yv| XyPoint {
                    date,
                    x_value: bucket::sum(&xv),
                    y_value: bucket::sum(yv),
                })
            })
            .collect())
    }
}
