use std::sync::Arc;

use chrono::NaiveDate;
use jauge::{DataType, Frequency, Jauge};
use jauge_core::DatedValue;

use crate::helpers::{HOME, ScriptedStore, approx, days, fixture_jauge};

#[tokio::test]
async fn daily_consumption_over_one_week() {
    let jauge = fixture_jauge();
    let s = jauge
        .evolution(HOME, DataType::ConsoElec, Frequency::Day, days((1, 1), (1, 7)))
        .await
        .unwrap();
    assert_eq!(s.axe_x.first().map(String::as_str), Some("01/01/2018"));
    assert_eq!(s.label.first().map(String::as_str), Some("Monday 01/01/2018"));
    assert_eq!(s.axe_y, [44.0, 44.0, 44.0, 44.0, 44.0, 12.0, 12.0]);
}

#[tokio::test]
async fn buckets_past_the_data_are_zero() {
    let jauge = fixture_jauge();
    // Temperature readings stop on 2018-03-31.
    let s = jauge
        .evolution(HOME, DataType::Temperature, Frequency::Day, days((3, 25), (4, 5)))
        .await
        .unwrap();
    assert_eq!(s.axe_x.len(), 12);
    assert!(approx(s.axe_y[0], 3.0));
    assert!(approx(s.axe_y[6], 9.0));
    assert!(s.axe_y[7..].iter().all(|&v| v == 0.0));
}

#[tokio::test]
async fn monthly_buckets_follow_the_calendar() {
    let jauge = fixture_jauge();
    let s = jauge
        .evolution(HOME, DataType::Temperature, Frequency::Month, days((1, 1), (3, 31)))
        .await
        .unwrap();
    assert_eq!(s.axe_x, ["Jan 2018", "Feb 2018", "Mar 2018"]);
    // Days 0..=30 cycle 0..9: three full cycles then a 0.
    assert!(approx(s.axe_y[0], 135.0));
}

#[tokio::test]
async fn rows_off_the_axis_are_ignored() {
    let noon = |d| {
        NaiveDate::from_ymd_opt(2018, 1, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    };
    let store = ScriptedStore::with_values(vec![DatedValue {
        date: noon(2),
        value: 5.0,
    }, DatedValue {
        date: noon(20),
        value: 9.0,
    }]);
    let jauge = Jauge::builder().with_store(Arc::new(store)).build().unwrap();
    let s = jauge
        .evolution("x", DataType::Dju, Frequency::Day, days((1, 1), (1, 3)))
        .await
        .unwrap();
    assert_eq!(s.axe_y, [0.0, 5.0, 0.0]);
}
