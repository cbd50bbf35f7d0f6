//! Axis definitions of repartition (heatmap) views.

use chrono::{Datelike, NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::{Axis, AxisField, AxisLabel, Frequency, RepartitionType, WeekdayLabels};

/// Hour labels on a week-style Y axis: 24 buckets plus the closing `"24h"`.
pub const HOUR_LABELS: usize = 25;

/// Axis of a repartition view together with the store fields behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepartitionAxis {
    /// Labels as displayed.
    pub axis: Axis,
    /// Store column feeding the X axis.
    pub x_field: AxisField,
    /// Store column feeding the Y axis.
    pub y_field: AxisField,
    /// Bucketing frequency the store aggregates at.
    pub frequency: Frequency,
}

/// `"00h"` through `"24h"`.
#[must_use]
pub fn hour_labels() -> Vec<AxisLabel> {
    (0..HOUR_LABELS)
        .map(|h| AxisLabel::Text(format!("{h:02}h")))
        .collect()
}

fn weekday_labels(labels: &WeekdayLabels) -> Vec<AxisLabel> {
    labels.as_slice().iter().cloned().map(AxisLabel::Text).collect()
}

/// Push `end` forward past the next Sunday boundary so the last week is whole.
///
/// Counts days from Sunday = 0 and adds `7 - w`; an end already on a Sunday is
/// pushed one full week.
#[must_use]
pub fn widened_end(end: NaiveDateTime) -> NaiveDateTime {
    let w = i64::from(end.weekday().num_days_from_sunday());
    TimeDelta::try_days(7 - w)
        .and_then(|d| end.checked_add_signed(d))
        .unwrap_or(end)
}

/// ISO week numbers and ISO years stepped weekly from `start` through the
/// widened `end`.
#[must_use]
pub fn iso_weeks(start: NaiveDateTime, end: NaiveDateTime) -> (Vec<AxisLabel>, Vec<i32>) {
    let last = widened_end(end);
    let mut weeks = Vec::new();
    let mut years = Vec::new();
    for at in crate::calendar::instants(Frequency::Week, start, last) {
        let iso = at.iso_week();
        weeks.push(AxisLabel::Week(iso.week()));
        years.push(iso.year());
    }
    (weeks, years)
}

/// Build the axis of a repartition view.
///
/// ```
/// use chrono::NaiveDate;
/// use jauge_core::{RepartitionType, WeekdayLabels, axis::build};
///
/// let day = |d| NaiveDate::from_ymd_opt(2018, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let a = build(RepartitionType::YearHorizontal, day(1), day(8), &WeekdayLabels::default());
/// assert_eq!(a.axis.x.len(), 2);
/// assert_eq!(a.axis.year, Some(vec![2018, 2018]));
/// ```
#[must_use]
pub fn build(
    kind: RepartitionType,
    start: NaiveDateTime,
    end: NaiveDateTime,
    labels: &WeekdayLabels,
) -> RepartitionAxis {
    match kind {
        RepartitionType::Week => RepartitionAxis {
            axis: Axis {
                x: weekday_labels(labels),
                y: hour_labels(),
                year: None,
            },
            x_field: AxisField::WeekDay,
            y_field: AxisField::Hour,
            frequency: Frequency::Hour,
        },
        RepartitionType::YearHorizontal => {
            let (weeks, years) = iso_weeks(start, end);
            RepartitionAxis {
                axis: Axis {
                    x: weeks,
                    y: weekday_labels(labels),
                    year: Some(years),
                },
                x_field: AxisField::Week,
                y_field: AxisField::WeekDay,
                frequency: Frequency::Day,
            }
        }
        RepartitionType::YearVertical => {
            let (weeks, years) = iso_weeks(start, end);
            RepartitionAxis {
                axis: Axis {
                    x: weekday_labels(labels),
                    y: weeks,
                    year: Some(years),
                },
                x_field: AxisField::Week,
                y_field: AxisField::WeekDay,
                frequency: Frequency::Day,
            }
        }
    }
}
