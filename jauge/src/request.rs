//! Typed parsing of raw route segments.

use chrono::NaiveDate;
use jauge_core::{DataType, Frequency, JaugeConfig, JaugeError, Period, RepartitionType};

/// Raw segments of a dashboard route, as extracted by an HTTP router.
///
/// Every accessor parses on demand and reports the first invalid segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    /// Location id.
    pub location: String,
    /// Data type key, e.g. `conso_elec`.
    pub data_type: String,
    /// Frequency key, e.g. `day` or `DAY`.
    pub frequency: Option<String>,
    /// Repartition key: `week`, `year_h` or `year_v`.
    pub repartition: Option<String>,
    /// Optional `YYYY-MM-DD` start.
    pub start: Option<String>,
    /// Optional `YYYY-MM-DD` end.
    pub end: Option<String>,
}

impl RouteParams {
    /// Route for `location` and `data_type` with no optional segment.
    #[must_use]
    pub fn new(location: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            data_type: data_type.into(),
            ..Self::default()
        }
    }

    /// Set the frequency segment.
    #[must_use]
    pub fn frequency(mut self, key: impl Into<String>) -> Self {
        self.frequency = Some(key.into());
        self
    }

    /// Set the repartition segment.
    #[must_use]
    pub fn repartition(mut self, key: impl Into<String>) -> Self {
        self.repartition = Some(key.into());
        self
    }

    /// Set the date segments.
    #[must_use]
    pub fn dates(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.start = start.map(str::to_string);
        self.end = end.map(str::to_string);
        self
    }

    /// Parsed data type.
    ///
    /// # Errors
    /// `InvalidDataType` for an unknown key.
    pub fn parse_data_type(&self) -> Result<DataType, JaugeError> {
        self.data_type.parse()
    }

    /// Parsed frequency.
    ///
    /// # Errors
    /// `InvalidArg` when the segment is missing, `InvalidFrequency` when unknown.
    pub fn parse_frequency(&self) -> Result<Frequency, JaugeError> {
        required(self.frequency.as_deref(), "frequency")?.parse()
    }

    /// Parsed repartition type.
    ///
    /// # Errors
    /// `InvalidArg` when the segment is missing, `InvalidRepartitionType` when unknown.
    pub fn parse_repartition(&self) -> Result<RepartitionType, JaugeError> {
        required(self.repartition.as_deref(), "repartition")?.parse()
    }

    /// Requested period, defaulting from `cfg` and `today`.
    ///
    /// # Errors
    /// `InvalidArg` for unparsable dates or a start after the end.
    pub fn period(&self, cfg: &JaugeConfig, today: NaiveDate) -> Result<Period, JaugeError> {
        Period::resolve(
            self.start.as_deref(),
            self.end.as_deref(),
            cfg.default_start,
            today,
        )
    }
}

fn required<'a>(segment: Option<&'a str>, name: &str) -> Result<&'a str, JaugeError> {
    segment.ok_or_else(|| JaugeError::InvalidArg(format!("missing {name} segment")))
}
