//! Raw reading bucketing, standing in for the database's GROUP BY.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use jauge_core::{AxisField, Frequency, Period};

/// One raw measurement.
pub type Reading = (NaiveDateTime, f64);

/// Start of the bucket holding `ts`.
pub fn bucket_start(frequency: Frequency, ts: NaiveDateTime) -> NaiveDateTime {
    let date = ts.date();
    let day = match frequency {
        Frequency::Hour => {
            return date
                .and_hms_opt(ts.hour(), 0, 0)
                .unwrap_or_else(|| date.and_time(NaiveTime::MIN));
        }
        Frequency::Day => date,
        Frequency::Week => date.week(chrono::Weekday::Mon).first_day(),
        Frequency::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date),
        Frequency::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
    };
    day.and_time(NaiveTime::MIN)
}

/// Categorical key of `ts` for a group-by column.
pub fn column_key(column: AxisField, ts: NaiveDateTime) -> i64 {
    match column {
        AxisField::WeekDay => i64::from(ts.weekday().num_days_from_monday()),
        AxisField::Hour => i64::from(ts.hour()),
        AxisField::Week => i64::from(ts.iso_week().week()),
    }
}

/// Readings inside the period.
pub fn within(readings: &[Reading], period: Period) -> impl Iterator<Item = &Reading> {
    readings
        .iter()
        .filter(move |(ts, _)| *ts >= period.start() && *ts <= period.end())
}

/// Group values under `key`, keeping key order.
pub fn group<'a, K, F>(readings: impl Iterator<Item = &'a Reading>, key: F) -> BTreeMap<K, Vec<f64>>
where
    K: Ord,
    F: Fn(NaiveDateTime) -> K,
{
    let mut out: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for (ts, v) in readings {
        out.entry(key(*ts)).or_default().push(*v);
    }
    out
}

/// Sum of a bucket.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}
