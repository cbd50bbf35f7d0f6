//! Configuration types shared by the orchestrator and its callers.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The seven weekday labels, Monday first.
///
/// Text comes from the caller's localization layer; the engine only places it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayLabels([String; 7]);

impl WeekdayLabels {
    /// Build from labels ordered Monday through Sunday.
    #[must_use]
    pub const fn new(labels: [String; 7]) -> Self {
        Self(labels)
    }

    /// Labels in Monday → Sunday order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Owned copy of the labels.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.to_vec()
    }
}

impl Default for WeekdayLabels {
    fn default() -> Self {
        Self(["Lun.", "Mar.", "Mer.", "Jeu.", "Ven.", "Sam.", "Dim."].map(String::from))
    }
}

/// Global configuration for the `Jauge` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JaugeConfig {
    /// Start of the requested range when the caller gives none.
    pub default_start: NaiveDate,
    /// Weekday labels placed on repartition and group-by axes.
    pub weekday_labels: WeekdayLabels,
    /// Optional bound on each aggregate store call.
    pub store_timeout: Option<Duration>,
}

impl Default for JaugeConfig {
    fn default() -> Self {
        Self {
            default_start: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap_or(NaiveDate::MIN),
            weekday_labels: WeekdayLabels::default(),
            store_timeout: None,
        }
    }
}
