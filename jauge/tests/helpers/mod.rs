
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use jauge::{Jauge, Period};
use jauge_mock::MockStore;

pub use jauge_mock::{FAIL, HOME, SLOW};
pub use scripted_store::ScriptedStore;

#[allow(dead_code)]
pub const MISSING: &str = "MISSING";

/// Inclusive day range, both ends in 2018.
pub fn days(from: (u32, u32), to: (u32, u32)) -> Period {
    Period::days(
        NaiveDate::from_ymd_opt(2018, from.0, from.1).unwrap(),
        NaiveDate::from_ymd_opt(2018, to.0, to.1).unwrap(),
    )
    .unwrap()
}

/// Orchestrator over the fixture mock store.
pub fn fixture_jauge() -> Jauge {
    Jauge::builder()
        .with_store(Arc::new(MockStore::fixture()))
        .build()
        .unwrap()
}

/// Orchestrator over the fixture mock store with a store timeout.
#[allow(dead_code)]
pub fn fixture_jauge_with_timeout(timeout: Duration) -> Jauge {
    Jauge::builder()
        .with_store(Arc::new(MockStore::fixture()))
        .store_timeout(timeout)
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
