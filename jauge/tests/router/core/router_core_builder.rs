use std::sync::Arc;

use chrono::NaiveDate;
use jauge::{Jauge, JaugeError, RouteParams};
use jauge_core::WeekdayLabels;
use jauge_mock::MockStore;

#[test]
fn build_without_store_is_invalid_arg() {
    assert!(matches!(
        Jauge::builder().build(),
        Err(JaugeError::InvalidArg(_))
    ));
}

#[test]
fn builder_settings_reach_config() {
    let labels = WeekdayLabels::new(["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"].map(String::from));
    let start = NaiveDate::from_ymd_opt(2019, 3, 1).unwrap();
    let jauge = Jauge::builder()
        .with_store(Arc::new(MockStore::fixture()))
        .weekday_labels(labels.clone())
        .default_start(start)
        .store_timeout(std::time::Duration::from_millis(250))
        .build()
        .unwrap();
    assert_eq!(jauge.config().weekday_labels, labels);
    assert_eq!(jauge.config().default_start, start);
    assert_eq!(
        jauge.config().store_timeout,
        Some(std::time::Duration::from_millis(250))
    );
}

#[test]
fn period_defaults_to_configured_start() {
    let jauge = crate::helpers::fixture_jauge();
    let p = jauge.period(None, Some("2018-02-01")).unwrap();
    assert_eq!(p.start().to_string(), "2018-01-01 00:00:00");
    assert_eq!(p.end().to_string(), "2018-02-01 23:59:59");
    assert!(matches!(
        jauge.period(Some("01/02/2018"), None),
        Err(JaugeError::InvalidArg(_))
    ));
}

#[tokio::test]
async fn route_params_drive_a_view() {
    let jauge = crate::helpers::fixture_jauge();
    let route = RouteParams::new(crate::helpers::HOME, "CONSO_ELEC")
        .frequency("day")
        .dates(Some("2018-01-01"), Some("2018-01-03"));
    let period = route.period(jauge.config(), Jauge::today()).unwrap();
    let series = jauge
        .evolution(
            &route.location,
            route.parse_data_type().unwrap(),
            route.parse_frequency().unwrap(),
            period,
        )
        .await
        .unwrap();
    assert_eq!(series.axe_y, [44.0, 44.0, 44.0]);
}
