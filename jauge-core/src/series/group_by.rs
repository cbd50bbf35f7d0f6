use crate::{GroupedValue, JaugeError, SeriesResponse, WeekdayLabels};

/// Place store rows on the fixed Monday → Sunday axis.
///
/// `group_key` is the weekday ordinal (0 = Monday). Missing weekdays are `0`.
///
/// # Errors
/// Returns `Err(JaugeError::InvalidGroupKey)` for an ordinal outside `0..=6`.
pub fn group_by(labels: &WeekdayLabels, rows: &[GroupedValue]) -> Result<SeriesResponse, JaugeError> {
    let names = labels.to_vec();
    let mut values = vec![0.0; names.len()];
    for row in rows {
        let slot = usize::try_from(row.group_key)
            .ok()
            .filter(|&i| i < values.len())
            .ok_or(JaugeError::InvalidGroupKey { key: row.group_key })?;
        values[slot] = row.value;
    }
    Ok(SeriesResponse {
        label: names.clone(),
        axe_x: names,
        axe_y: values,
    })
}
