use std::sync::Arc;

use jauge::Jauge;
use jauge_core::AggregateStore;
use jauge_mock::MockStore;

/// Location id every demo queries.
pub const LOCATION: &str = jauge_mock::HOME;

#[must_use]
pub fn get_store() -> Arc<dyn AggregateStore> {
    Arc::new(MockStore::fixture())
}

/// Orchestrator over the fixture store.
///
/// # Errors
/// Propagates builder validation errors.
pub fn get_jauge() -> Result<Jauge, jauge::JaugeError> {
    Jauge::builder()
        .with_store(get_store())
        .store_timeout(std::time::Duration::from_secs(2))
        .build()
}
