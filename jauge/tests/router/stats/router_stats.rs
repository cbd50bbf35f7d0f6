use jauge::{DataType, Frequency, JaugeError};

use crate::helpers::{FAIL, HOME, approx, days, fixture_jauge};

#[tokio::test]
async fn sum_is_daily() {
    let jauge = fixture_jauge();
    let rows = jauge
        .sum(HOME, DataType::ConsoElec, days((1, 1), (1, 3)))
        .await
        .unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].date.to_string(), "2018-01-01 00:00:00");
    assert!(rows.iter().all(|r| approx(r.value, 44.0)));
}

#[tokio::test]
async fn extremes_and_mean_per_bucket() {
    let jauge = fixture_jauge();
    let monday = days((1, 1), (1, 1));
    let max = jauge
        .max(HOME, DataType::ConsoElec, Frequency::Day, monday)
        .await
        .unwrap();
    let min = jauge
        .min(HOME, DataType::ConsoElec, Frequency::Day, monday)
        .await
        .unwrap();
    let avg = jauge
        .average(HOME, DataType::ConsoElec, Frequency::Day, days((1, 6), (1, 6)))
        .await
        .unwrap();
    assert!(approx(max[0].value, 3.0));
    assert!(approx(min[0].value, 1.0));
    assert!(approx(avg[0].value, 0.5));
}

#[tokio::test]
async fn count_below_counts_readings() {
    let jauge = fixture_jauge();
    let rows = jauge
        .count_below(HOME, DataType::ConsoElec, 2.0, Frequency::Day, days((1, 1), (1, 1)))
        .await
        .unwrap();
    assert!(approx(rows[0].value, 14.0));

    assert!(matches!(
        jauge
            .count_below(HOME, DataType::ConsoElec, f64::NAN, Frequency::Day, days((1, 1), (1, 1)))
            .await,
        Err(JaugeError::InvalidArg(_))
    ));
}

#[tokio::test]
async fn statistics_are_passed_through_without_gap_filling() {
    let jauge = fixture_jauge();
    // Readings stop on 2018-03-31.
    let rows = jauge
        .sum(HOME, DataType::Temperature, days((3, 30), (4, 10)))
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert!(matches!(
        jauge.sum(FAIL, DataType::Temperature, days((1, 1), (1, 2))).await,
        Err(JaugeError::Store { .. })
    ));
}
