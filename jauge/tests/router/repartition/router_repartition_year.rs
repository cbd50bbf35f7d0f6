use std::sync::Arc;

use chrono::NaiveDate;
use jauge::{DataType, Jauge, Period, RepartitionType};
use jauge_core::{AxisLabel, Cell};
use jauge_mock::MockStore;

use crate::helpers::{HOME, days, fixture_jauge};

#[tokio::test]
async fn horizontal_year_heatmap_lays_weeks_out_as_columns() {
    let jauge = fixture_jauge();
    let resp = jauge
        .repartition(
            HOME,
            DataType::ConsoElec,
            RepartitionType::YearHorizontal,
            days((1, 1), (1, 10)),
        )
        .await
        .unwrap();

    assert_eq!(resp.axe.x, [AxisLabel::Week(1), AxisLabel::Week(2)]);
    assert_eq!(resp.axe.y.len(), 7);
    assert_eq!(resp.axe.year, Some(vec![2018, 2018]));

    assert_eq!(resp.data.len(), 14);
    assert_eq!(resp.data.dates[0], "01/01/18");
    assert_eq!(resp.data.dates[13], "14/01/18");
    assert_eq!(resp.data.values[0], Cell::Value(44.0));
    assert_eq!(resp.data.values[5], Cell::Value(12.0));
    assert_eq!(resp.data.values[9], Cell::Value(44.0));
    // The axis runs to the end of the week; the period does not.
    assert!(resp.data.values[10..].iter().all(|c| c.is_blank()));
}

#[tokio::test]
async fn vertical_year_heatmap_transposes_the_axis_only() {
    let jauge = fixture_jauge();
    let p = days((1, 1), (1, 10));
    let h = jauge
        .repartition(HOME, DataType::ConsoElec, RepartitionType::YearHorizontal, p)
        .await
        .unwrap();
    let v = jauge
        .repartition(HOME, DataType::ConsoElec, RepartitionType::YearVertical, p)
        .await
        .unwrap();

    assert_eq!(v.axe.x, h.axe.y);
    assert_eq!(v.axe.y, h.axe.x);
    assert_eq!(v.axe.year, h.axe.year);
    assert_eq!(v.data, h.data);
}

#[tokio::test]
async fn year_heatmap_across_a_53_week_year() {
    let at = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    let store = MockStore::new().with_location("b", "Bureau").with_readings(
        "b",
        DataType::Dju,
        [
            (at(2021, 1, 1).and_hms_opt(12, 0, 0).unwrap(), 7.0),
            (at(2021, 1, 4).and_hms_opt(12, 0, 0).unwrap(), 2.0),
        ],
    );
    let jauge = Jauge::builder().with_store(Arc::new(store)).build().unwrap();
    let period = Period::days(at(2020, 12, 28), at(2021, 1, 6)).unwrap();
    let resp = jauge
        .repartition("b", DataType::Dju, RepartitionType::YearHorizontal, period)
        .await
        .unwrap();

    assert_eq!(resp.axe.x, [AxisLabel::Week(53), AxisLabel::Week(1)]);
    assert_eq!(resp.axe.year, Some(vec![2020, 2021]));
    // Friday of 2020-W53.
    assert_eq!(resp.data.dates[4], "01/01/21");
    assert_eq!(resp.data.values[4], Cell::Value(7.0));
    assert_eq!(resp.data.dates[7], "04/01/21");
    assert_eq!(resp.data.values[7], Cell::Value(2.0));
    assert_eq!(resp.data.values.iter().filter(|c| !c.is_blank()).count(), 2);
}
