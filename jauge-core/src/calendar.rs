//! Calendar bucket enumeration for evolution axes.
//!
//! Buckets are enumerated in naive UTC: every day has exactly 24 hour buckets
//! and month/year steps are calendar steps, not fixed durations.

use chrono::{Months, NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::Frequency;

/// Labels of every bucket between two instants.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CalendarLabels {
    /// Axis labels, formatted with [`Frequency::axis_format`].
    pub primary: Vec<String>,
    /// Long labels, formatted with [`Frequency::label_format`].
    pub long: Vec<String>,
}

impl CalendarLabels {
    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    /// True when the range held no bucket.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }
}

/// The instant `n` calendar steps after `start`.
///
/// Month and year steps are taken from `start` in one go, so the day of month
/// of `start` is kept and only clipped for shorter months (Jan 31 → Feb 29 →
/// Mar 31). Returns `None` on overflow.
#[must_use]
pub fn nth_step(frequency: Frequency, start: NaiveDateTime, n: u32) -> Option<NaiveDateTime> {
    let n64 = i64::from(n);
    match frequency {
        Frequency::Hour => start.checked_add_signed(TimeDelta::try_hours(n64)?),
        Frequency::Day => start.checked_add_signed(TimeDelta::try_days(n64)?),
        Frequency::Week => start.checked_add_signed(TimeDelta::try_weeks(n64)?),
        Frequency::Month => start.checked_add_months(Months::new(n)),
        Frequency::Year => start.checked_add_months(Months::new(n.checked_mul(12)?)),
    }
}

/// Every bucket start from `start` up to and including `end`.
#[must_use]
pub fn instants(frequency: Frequency, start: NaiveDateTime, end: NaiveDateTime) -> Vec<NaiveDateTime> {
    let mut out = Vec::new();
    let mut n: u32 = 0;
    while let Some(at) = nth_step(frequency, start, n) {
        if at > end {
            break;
        }
        out.push(at);
        let Some(next) = n.checked_add(1) else {
            break;
        };
        n = next;
    }
    out
}

/// Primary and long labels of every bucket from `start` through `end`.
///
/// ```
/// use chrono::NaiveDate;
/// use jauge_core::{Frequency, calendar::labels};
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let end = NaiveDate::from_ymd_opt(2020, 1, 3).unwrap().and_hms_opt(23, 59, 59).unwrap();
/// let l = labels(Frequency::Day, start, end);
/// assert_eq!(l.primary, ["01/01/2020", "02/01/2020", "03/01/2020"]);
/// assert_eq!(l.long[0], "Wednesday 01/01/2020");
/// ```
#[must_use]
pub fn labels(frequency: Frequency, start: NaiveDateTime, end: NaiveDateTime) -> CalendarLabels {
    let buckets = instants(frequency, start, end);
    let mut out = CalendarLabels {
        primary: Vec::with_capacity(buckets.len()),
        long: Vec::with_capacity(buckets.len()),
    };
    for at in buckets {
        out.primary
            .push(at.format(frequency.axis_format()).to_string());
        out.long.push(at.format(frequency.label_format()).to_string());
    }
    out
}
