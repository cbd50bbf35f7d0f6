use std::collections::HashMap;

use crate::calendar::CalendarLabels;
use crate::{DatedValue, Frequency, SeriesResponse};

/// Place store rows on a calendar axis.
///
/// Each row's date is formatted with `frequency`'s axis pattern and matched
/// against `labels.primary` by exact text. Buckets without a row are `0`; rows
/// without a bucket are dropped. A later row for the same bucket wins.
///
/// ```
/// use chrono::NaiveDate;
/// use jauge_core::{DatedValue, Frequency, calendar, series::evolution::evolution};
///
/// let day = |d| NaiveDate::from_ymd_opt(2020, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let labels = calendar::labels(Frequency::Day, day(1), day(3));
/// let s = evolution(labels, Frequency::Day, &[DatedValue { date: day(2), value: 5.0 }]);
/// assert_eq!(s.axe_y, [0.0, 5.0, 0.0]);
/// ```
#[must_use]
pub fn evolution(labels: CalendarLabels, frequency: Frequency, rows: &[DatedValue]) -> SeriesResponse {
    let mut values = vec![0.0; labels.len()];
    let mut dropped = 0usize;
    {
        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(labels.len());
        for (i, label) in labels.primary.iter().enumerate() {
            positions.entry(label.as_str()).or_insert(i);
        }
        for row in rows {
            let key = row.date.format(frequency.axis_format()).to_string();
            match positions.get(key.as_str()) {
                Some(&i) => values[i] = row.value,
                None => dropped += 1,
            }
        }
    }
    if dropped > 0 {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "jauge::series",
            dropped,
            frequency = %frequency,
            "dropped rows outside the calendar axis"
        );
    }

    SeriesResponse {
        label: labels.long,
        axe_x: labels.primary,
        axe_y: values,
    }
}
