use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the jauge workspace.
///
/// Covers request-key validation, storage-tagged failures, not-found
/// conditions propagated from the store, and malformed axis data.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum JaugeError {
    /// The configured store does not implement the requested capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label (e.g. "repartition", "xy").
        capability: String,
    },

    /// The frequency key is not one of `HOUR`, `DAY`, `WEEK`, `MONTH`, `YEAR`.
    #[error("invalid frequency: {0}")]
    InvalidFrequency(String),

    /// The repartition key is not one of `WEEK`, `YEAR_H`, `YEAR_V`.
    #[error("invalid repartition type: {0}")]
    InvalidRepartitionType(String),

    /// The data type key does not name a known measurement.
    #[error("invalid data type: {0}")]
    InvalidDataType(String),

    /// Invalid input argument (unparsable dates, inverted ranges, ...).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A group-by ordinal returned by the store lies outside the weekday axis.
    #[error("group key {key} outside of 0..=6")]
    InvalidGroupKey {
        /// Offending ordinal.
        key: i64,
    },

    /// Issues with the axis or returned data (missing year sequence, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// A location, feed or other resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "location 42".
        what: String,
    },

    /// The aggregate store returned an error.
    #[error("{store} failed: {msg}")]
    Store {
        /// Store name that failed.
        store: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A store call exceeded the configured timeout.
    #[error("store timed out: {capability} via {store}")]
    StoreTimeout {
        /// Store name that timed out.
        store: String,
        /// Capability label (e.g. "repartition", "values").
        capability: String,
    },
}

impl JaugeError {
    /// Helper: build an `Unsupported` error for a capability label.
    #[must_use]
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Store` error with the store name and message.
    #[must_use]
    pub fn store(store: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Store {
            store: store.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `StoreTimeout` error.
    #[must_use]
    pub fn store_timeout(store: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::StoreTimeout {
            store: store.into(),
            capability: capability.into(),
        }
    }

    /// Returns true if the error stems from the request itself (bad keys or
    /// arguments, unknown location or feed) and should be reported to the
    /// client as such.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFrequency(_)
                | Self::InvalidRepartitionType(_)
                | Self::InvalidDataType(_)
                | Self::InvalidArg(_)
                | Self::NotFound { .. }
        )
    }
}
