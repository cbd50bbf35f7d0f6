use chrono::{NaiveDate, TimeDelta};
use jauge::{DataType, Period, RepartitionType};
use proptest::prelude::*;

use crate::helpers::{HOME, fixture_jauge};

fn period(offset: i64, len: i64) -> Period {
    let first = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap() + TimeDelta::try_days(offset).unwrap();
    Period::days(first, first + TimeDelta::try_days(len).unwrap()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]

    #[test]
    fn year_heatmap_shape_depends_on_the_period_only(offset in 0i64..80, len in 0i64..60) {
        tokio_test::block_on(async move {
            let jauge = fixture_jauge();
            let p = period(offset, len);
            let h = jauge
                .repartition(HOME, DataType::ConsoElec, RepartitionType::YearHorizontal, p)
                .await
                .unwrap();
            let missing = jauge
                .repartition(HOME, DataType::Pressure, RepartitionType::YearHorizontal, p)
                .await;
            let v = jauge
                .repartition(HOME, DataType::ConsoElec, RepartitionType::YearVertical, p)
                .await
                .unwrap();

            assert!(missing.is_err());
            assert_eq!(h.data.len(), 7 * h.axe.x.len());
            assert_eq!(h.axe.year.as_ref().map(Vec::len), Some(h.axe.x.len()));
            // Every week column covers the period from its first day on.
            assert!(h.axe.x.len() * 7 >= usize::try_from(len + 1).unwrap());
            assert_eq!(v.data, h.data);
        });
    }

    // Fixture readings cover 2018-01-01 through 2018-03-31.
    #[test]
    fn week_heatmap_always_has_168_cells(offset in 0i64..60, len in 0i64..30) {
        tokio_test::block_on(async move {
            let jauge = fixture_jauge();
            let resp = jauge
                .repartition(HOME, DataType::ConsoElec, RepartitionType::Week, period(offset, len))
                .await
                .unwrap();
            assert_eq!(resp.data.len(), 168);
            let filled = resp.data.values.iter().filter(|c| !c.is_blank()).count();
            let days = usize::try_from(len + 1).unwrap().min(7);
            assert_eq!(filled, days * 24);
        });
    }
}
