use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::JaugeError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive request range, in naive UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Period {
    /// Build a period from explicit bounds.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `start` is after `end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, JaugeError> {
        if start > end {
            return Err(JaugeError::InvalidArg(format!(
                "period start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Whole days from the first midnight of `start` to the last second of `end`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `start` is after `end`.
    pub fn days(start: NaiveDate, end: NaiveDate) -> Result<Self, JaugeError> {
        Self::new(start.and_time(NaiveTime::MIN), end_of_day(end))
    }

    /// Resolve optional `YYYY-MM-DD` route segments into a period.
    ///
    /// A missing start falls back to `default_start`; a missing end falls back
    /// to `today`. The end always covers its whole day.
    ///
    /// # Errors
    /// Returns `InvalidArg` for unparsable dates or an inverted range.
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
        default_start: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, JaugeError> {
        let start = start.map(parse_date).transpose()?.unwrap_or(default_start);
        let end = end.map(parse_date).transpose()?.unwrap_or(today);
        Self::days(start, end)
    }

    /// First instant of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Last instant of the range (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, JaugeError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| JaugeError::InvalidArg(format!("invalid date '{raw}': {e}")))
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}
