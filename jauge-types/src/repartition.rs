use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::JaugeError;

/// Layout of a repartition (heatmap) view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepartitionType {
    /// Weekday columns by hour rows.
    #[serde(rename = "WEEK")]
    Week,
    /// ISO week columns by weekday rows.
    #[serde(rename = "YEAR_H")]
    YearHorizontal,
    /// Weekday columns by ISO week rows.
    #[serde(rename = "YEAR_V")]
    YearVertical,
}

impl RepartitionType {
    /// Uppercase wire key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "WEEK",
            Self::YearHorizontal => "YEAR_H",
            Self::YearVertical => "YEAR_V",
        }
    }

    /// Week-style grids carry a closing hour label that is not a real row.
    #[must_use]
    pub const fn is_week_style(self) -> bool {
        matches!(self, Self::Week)
    }
}

impl fmt::Display for RepartitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepartitionType {
    type Err = JaugeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WEEK" => Ok(Self::Week),
            "YEAR_H" => Ok(Self::YearHorizontal),
            "YEAR_V" => Ok(Self::YearVertical),
            _ => Err(JaugeError::InvalidRepartitionType(s.to_string())),
        }
    }
}
