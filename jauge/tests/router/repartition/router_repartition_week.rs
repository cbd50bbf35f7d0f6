use jauge::{DataType, RepartitionType};
use jauge_core::{AxisLabel, Cell};

use crate::helpers::{HOME, days, fixture_jauge};

#[tokio::test]
async fn week_heatmap_sums_each_weekday_hour() {
    let jauge = fixture_jauge();
    let resp = jauge
        .repartition(HOME, DataType::ConsoElec, RepartitionType::Week, days((1, 1), (1, 14)))
        .await
        .unwrap();

    assert_eq!(resp.axe.x.len(), 7);
    assert_eq!(resp.axe.y.len(), 25);
    assert_eq!(resp.axe.y[24], AxisLabel::from("24h"));
    assert!(resp.axe.year.is_none());

    assert_eq!(resp.data.len(), 168);
    assert_eq!(resp.data.dates[8], "Lun. 08h -> 09h");
    // Two Mondays at 3.0 during working hours, 1.0 at night.
    assert_eq!(resp.data.values[8], Cell::Value(6.0));
    assert_eq!(resp.data.values[0], Cell::Value(2.0));
    // Saturday 03h.
    assert_eq!(resp.data.values[5 * 24 + 3], Cell::Value(1.0));
}

#[tokio::test]
async fn week_heatmap_keeps_blank_cells_without_data() {
    let jauge = fixture_jauge();
    // Tuesday and Wednesday only.
    let resp = jauge
        .repartition(HOME, DataType::ConsoElec, RepartitionType::Week, days((1, 2), (1, 3)))
        .await
        .unwrap();
    assert_eq!(resp.data.len(), 168);
    let filled = resp.data.values.iter().filter(|c| !c.is_blank()).count();
    assert_eq!(filled, 48);
    assert!(resp.data.values[..24].iter().all(|c| c.is_blank()));
    assert_eq!(resp.data.values[24 + 12], Cell::Value(3.0));
}

#[tokio::test]
async fn week_heatmap_serializes_blank_as_empty_string() {
    let jauge = fixture_jauge();
    let resp = jauge
        .repartition(HOME, DataType::ConsoElec, RepartitionType::Week, days((1, 2), (1, 2)))
        .await
        .unwrap();
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["data"]["values"][0], "");
    assert_eq!(json["data"]["values"][24], 1.0);
    assert!(json["axe"].get("year").is_none());
}
