use jauge::{DataType, Frequency, JaugeError};

use crate::helpers::{HOME, days, fixture_jauge};

#[tokio::test]
async fn pairs_two_feeds_per_day() {
    let jauge = fixture_jauge();
    let xy = jauge
        .xy(
            HOME,
            DataType::ConsoElec,
            DataType::Temperature,
            Frequency::Day,
            days((1, 1), (1, 3)),
        )
        .await
        .unwrap();
    assert_eq!(xy.axe_x, [44.0, 44.0, 44.0]);
    assert_eq!(xy.axe_y, [0.0, 1.0, 2.0]);
    assert_eq!(xy.date[0], "Monday 01/01/2018");

    let json = serde_json::to_value(&xy).unwrap();
    assert_eq!(json["axeX"][2], 44.0);
    assert_eq!(json["date"][2], "Wednesday 03/01/2018");
}

#[tokio::test]
async fn monthly_pairs_use_month_labels() {
    let jauge = fixture_jauge();
    let xy = jauge
        .xy(
            HOME,
            DataType::ConsoElec,
            DataType::Temperature,
            Frequency::Month,
            days((1, 1), (2, 28)),
        )
        .await
        .unwrap();
    assert_eq!(xy.date, ["Jan 2018", "Feb 2018"]);
}

#[tokio::test]
async fn either_missing_feed_is_not_found() {
    let jauge = fixture_jauge();
    let p = days((1, 1), (1, 3));
    assert!(matches!(
        jauge
            .xy(HOME, DataType::Pressure, DataType::Temperature, Frequency::Day, p)
            .await,
        Err(JaugeError::NotFound { .. })
    ));
    assert!(matches!(
        jauge
            .xy(HOME, DataType::ConsoElec, DataType::Humidity, Frequency::Day, p)
            .await,
        Err(JaugeError::NotFound { .. })
    ));
}
