use std::sync::Arc;

use jauge::{DataType, Frequency, Jauge, JaugeError};
use jauge_core::{AxisField, GroupedValue};

use crate::helpers::{HOME, ScriptedStore, days, fixture_jauge};

#[tokio::test]
async fn two_weeks_of_consumption_per_weekday() {
    let jauge = fixture_jauge();
    let s = jauge
        .sum_group_by(
            HOME,
            DataType::ConsoElec,
            Frequency::Day,
            days((1, 1), (1, 14)),
        )
        .await
        .unwrap();
    assert_eq!(s.axe_x, ["Lun.", "Mar.", "Mer.", "Jeu.", "Ven.", "Sam.", "Dim."]);
    assert_eq!(s.axe_y, [88.0, 88.0, 88.0, 88.0, 88.0, 24.0, 24.0]);
}

#[tokio::test]
async fn absent_weekdays_are_zero() {
    let jauge = fixture_jauge();
    // Wednesday only.
    let s = jauge
        .sum_group_by(
            HOME,
            DataType::ConsoElec,
            Frequency::Day,
            days((1, 3), (1, 3)),
        )
        .await
        .unwrap();
    assert_eq!(s.axe_y, [0.0, 0.0, 44.0, 0.0, 0.0, 0.0, 0.0]);
}

#[tokio::test]
async fn out_of_range_group_key_is_rejected() {
    let store = ScriptedStore::with_groups(vec![
        GroupedValue {
            group_key: 2,
            value: 1.0,
        },
        GroupedValue {
            group_key: 7,
            value: 1.0,
        },
    ]);
    let jauge = Jauge::builder().with_store(Arc::new(store)).build().unwrap();
    let err = jauge
        .sum_group_by(
            "x",
            DataType::ConsoElec,
            Frequency::Day,
            days((1, 1), (1, 7)),
        )
        .await
        .unwrap_err();
    assert_eq!(err, JaugeError::InvalidGroupKey { key: 7 });
}

#[tokio::test]
async fn store_is_always_grouped_by_weekday() {
    let store = ScriptedStore::with_groups(vec![GroupedValue {
        group_key: 0,
        value: 3.0,
    }]);
    let grouped_by = store.grouped_by.clone();
    let jauge = Jauge::builder().with_store(Arc::new(store)).build().unwrap();
    for frequency in [Frequency::Hour, Frequency::Day, Frequency::Week] {
        let s = jauge
            .sum_group_by("x", DataType::ConsoElec, frequency, days((1, 1), (1, 7)))
            .await
            .unwrap();
        assert_eq!(s.axe_y, [3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }
    assert_eq!(
        *grouped_by.lock().unwrap(),
        [AxisField::WeekDay, AxisField::WeekDay, AxisField::WeekDay]
    );
}

#[tokio::test]
async fn hourly_readings_stay_on_the_weekday_axis() {
    let jauge = fixture_jauge();
    // Every hour of Monday is summed onto "Lun.", none on another weekday.
    let s = jauge
        .sum_group_by(HOME, DataType::ConsoElec, Frequency::Hour, days((1, 1), (1, 1)))
        .await
        .unwrap();
    assert_eq!(s.axe_x.len(), 7);
    assert_eq!(s.axe_y, [44.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
}
