use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::RepartitionType;

/// How a grid's Y axis maps to rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridStyle {
    /// Y carries one trailing boundary label (`"24h"`) that closes the last
    /// bucket, so there are `|Y| - 1` rows.
    Week,
    /// Every Y label is a row.
    Year,
}

impl GridStyle {
    /// Style used for a repartition layout.
    #[must_use]
    pub const fn of(kind: RepartitionType) -> Self {
        if kind.is_week_style() {
            Self::Week
        } else {
            Self::Year
        }
    }

    /// Number of real rows for a Y axis of `y_len` labels.
    #[must_use]
    pub const fn row_count(self, y_len: usize) -> usize {
        match self {
            Self::Week => y_len.saturating_sub(1),
            Self::Year => y_len,
        }
    }

    /// Number of cells for an `x_len` × `y_len` axis.
    #[must_use]
    pub const fn cell_count(self, x_len: usize, y_len: usize) -> usize {
        x_len * self.row_count(y_len)
    }
}

/// Flat position of cell `(x, y)`; column-major with `row_count` rows per column.
#[must_use]
pub const fn cell_index(x: usize, y: usize, y_len: usize, style: GridStyle) -> usize {
    x * style.row_count(y_len) + y
}

/// Inverse of [`cell_index`]. `None` when the axis has no rows.
#[must_use]
pub const fn decompose(index: usize, y_len: usize, style: GridStyle) -> Option<(usize, usize)> {
    let rows = style.row_count(y_len);
    if rows == 0 {
        return None;
    }
    Some((index / rows, index % rows))
}

/// Calendar date of an ISO-8601 week date.
///
/// Week 1 is the week holding the year's first Thursday; weekday 1 is Monday
/// and 7 is Sunday. Values past the end of a week or year roll over, so week 53
/// of a 52-week year lands in week 1 of the next year and week 0 is the last
/// week of the previous year.
///
/// ```
/// use chrono::NaiveDate;
/// use jauge_core::grid::index::reconstruct_date;
///
/// assert_eq!(reconstruct_date(2020, 1, 1), NaiveDate::from_ymd_opt(2019, 12, 30));
/// assert_eq!(reconstruct_date(2020, 53, 7), NaiveDate::from_ymd_opt(2021, 1, 3));
/// ```
#[must_use]
pub fn reconstruct_date(iso_year: i32, iso_week: u32, iso_weekday: u32) -> Option<NaiveDate> {
    // Jan 4th is always in ISO week 1.
    let jan4 = NaiveDate::from_ymd_opt(iso_year, 1, 4)?;
    let back = i64::from(jan4.weekday().num_days_from_monday());
    let week1_monday = jan4.checked_sub_signed(TimeDelta::try_days(back)?)?;
    let offset = (i64::from(iso_week) - 1) * 7 + (i64::from(iso_weekday) - 1);
    week1_monday.checked_add_signed(TimeDelta::try_days(offset)?)
}
