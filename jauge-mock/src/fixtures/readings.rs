use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::bucket::Reading;

/// Hourly electricity readings from `first` for `days` days.
///
/// Weekday working hours (08h-18h) read 3.0, other hours 1.0, weekends 0.5.
pub fn hourly_consumption(first: NaiveDate, days: i64) -> Vec<Reading> {
    let Some(start) = first.and_hms_opt(0, 0, 0) else {
        return Vec::new();
    };
    (0..days * 24)
        .filter_map(|h| start.checked_add_signed(TimeDelta::try_hours(h)?))
        .map(|ts| (ts, consumption_at(ts)))
        .collect()
}

fn consumption_at(ts: NaiveDateTime) -> f64 {
    let weekend = ts.weekday().num_days_from_monday() >= 5;
    match (weekend, ts.hour()) {
        (true, _) => 0.5,
        (false, 8..=17) => 3.0,
        (false, _) => 1.0,
    }
}

/// Daily temperature readings at noon from `first` for `days` days.
///
/// Cycles 0.0, 1.0, ... 9.0 so every value is exact.
pub fn daily_temperature(first: NaiveDate, days: i64) -> Vec<Reading> {
    (0..days)
        .filter_map(|d| {
            let day = first.checked_add_signed(TimeDelta::try_days(d)?)?;
            let ts = day.and_hms_opt(12, 0, 0)?;
            #[allow(clippy::cast_precision_loss)]
            let value = (d % 10) as f64;
            Some((ts, value))
        })
        .collect()
}
