//! Bucketing frequency and its display patterns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::JaugeError;

/// Calendar bucketing frequency.
///
/// Each variant carries a calendar step (see `jauge_core::calendar`) and the
/// strftime patterns used to label buckets on chart axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    /// One bucket per hour.
    Hour,
    /// One bucket per day.
    Day,
    /// One bucket per 7 days.
    Week,
    /// One bucket per calendar month.
    Month,
    /// One bucket per calendar year.
    Year,
}

impl Frequency {
    /// All frequencies, finest first.
    pub const ALL: [Self; 5] = [Self::Hour, Self::Day, Self::Week, Self::Month, Self::Year];

    /// Uppercase wire key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "HOUR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Year => "YEAR",
        }
    }

    /// Pattern of the axis labels; storage dates are formatted with it to find
    /// their bucket.
    #[must_use]
    pub const fn axis_format(self) -> &'static str {
        match self {
            Self::Hour => "%d/%m/%Y %H:%M",
            Self::Day | Self::Week => "%d/%m/%Y",
            Self::Month => "%b %Y",
            Self::Year => "%Y",
        }
    }

    /// Pattern of the long, human-facing labels.
    #[must_use]
    pub const fn label_format(self) -> &'static str {
        match self {
            Self::Hour => "%A %d/%m/%Y %H:%M",
            Self::Day => "%A %d/%m/%Y",
            Self::Week => "%d/%m/%Y",
            Self::Month => "%b %Y",
            Self::Year => "%Y",
        }
    }

    /// Pattern of the per-point dates in XY scatter responses.
    #[must_use]
    pub const fn xy_format(self) -> &'static str {
        match self {
            Self::Hour => "%d/%m/%Y %H:%M",
            Self::Day => "%A %d/%m/%Y",
            Self::Week => "%d/%m/%Y",
            Self::Month => "%b %Y",
            Self::Year => "%Y",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = JaugeError;

    /// Case-insensitive parse of the wire key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == key)
            .ok_or_else(|| JaugeError::InvalidFrequency(s.to_string()))
    }
}
