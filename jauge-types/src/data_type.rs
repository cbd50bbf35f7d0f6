use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::JaugeError;

/// Kind of measurement a feed carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    /// Electricity consumption.
    ConsoElec,
    /// Outside temperature.
    Temperature,
    /// Heating degree days.
    Dju,
    /// Atmospheric pressure.
    Pressure,
    /// Cloud cover.
    Nebulosity,
    /// Relative humidity.
    Humidity,
}

impl DataType {
    /// Every known data type.
    pub const ALL: [Self; 6] = [
        Self::ConsoElec,
        Self::Temperature,
        Self::Dju,
        Self::Pressure,
        Self::Nebulosity,
        Self::Humidity,
    ];

    /// Uppercase wire key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConsoElec => "CONSO_ELEC",
            Self::Temperature => "TEMPERATURE",
            Self::Dju => "DJU",
            Self::Pressure => "PRESSURE",
            Self::Nebulosity => "NEBULOSITY",
            Self::Humidity => "HUMIDITY",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = JaugeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == key)
            .ok_or_else(|| JaugeError::InvalidDataType(s.to_string()))
    }
}
