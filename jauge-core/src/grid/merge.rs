use std::collections::HashMap;

use crate::grid::index::{GridStyle, cell_index, reconstruct_date};
use crate::{Axis, AxisLabel, Cell, Grid, GridAggregate, JaugeError};

/// Pattern of year-style cell descriptions, e.g. `13/02/18`.
pub const YEAR_CELL_FORMAT: &str = "%d/%m/%y";

/// A grid whose cells are initialized from its axis and are waiting for tuples.
///
/// Year-style grids also keep a description → index map so every tuple is
/// located by its reconstructed date rather than by its raw coordinates.
#[derive(Debug, Clone)]
pub struct PreparedGrid {
    style: GridStyle,
    columns: usize,
    y_len: usize,
    grid: Grid,
    by_date: HashMap<String, usize>,
}

impl PreparedGrid {
    /// Allocate blank cells and their descriptions for `axis`.
    ///
    /// # Errors
    /// Returns `Err(JaugeError::Data)` for a year-style axis whose `year`
    /// sequence is missing or misaligned, whose X labels are not week
    /// numbers, or whose weeks cannot be placed on the calendar.
    pub fn initialize(axis: &Axis, style: GridStyle) -> Result<Self, JaugeError> {
        let columns = axis.x.len();
        let y_len = axis.y.len();
        let size = style.cell_count(columns, y_len);
        let mut grid = Grid {
            values: vec![Cell::Blank; size],
            dates: vec![String::new(); size],
        };
        let mut by_date = HashMap::new();

        match style {
            GridStyle::Week => {
                for (x, day) in axis.x.iter().enumerate() {
                    for y in 0..style.row_count(y_len) {
                        let idx = cell_index(x, y, y_len, style);
                        grid.dates[idx] = format!("{day} {} -> {}", axis.y[y], axis.y[y + 1]);
                    }
                }
            }
            GridStyle::Year => {
                let years = axis
                    .year
                    .as_deref()
                    .ok_or_else(|| JaugeError::Data("year-style axis has no ISO years".into()))?;
                if years.len() != columns {
                    return Err(JaugeError::Data(format!(
                        "{} ISO years for {columns} week columns",
                        years.len()
                    )));
                }
                for (x, (label, &year)) in axis.x.iter().zip(years).enumerate() {
                    let AxisLabel::Week(week) = *label else {
                        return Err(JaugeError::Data(format!(
                            "year-style column '{label}' is not a week number"
                        )));
                    };
                    for y in 0..y_len {
                        let idx = cell_index(x, y, y_len, style);
                        let weekday = u32::try_from(y + 1).unwrap_or(u32::MAX);
                        let date = reconstruct_date(year, week, weekday).ok_or_else(|| {
                            JaugeError::Data(format!("no calendar date for {year}-W{week}-{weekday}"))
                        })?;
                        let text = date.format(YEAR_CELL_FORMAT).to_string();
                        by_date.entry(text.clone()).or_insert(idx);
                        grid.dates[idx] = text;
                    }
                }
            }
        }

        Ok(Self {
            style,
            columns,
            y_len,
            grid,
            by_date,
        })
    }

    /// Position of a tuple on this grid, `None` when it falls outside.
    #[must_use]
    pub fn locate(&self, agg: &GridAggregate) -> Option<usize> {
        match self.style {
            GridStyle::Week => {
                let x = usize::try_from(agg.x_key).ok()?;
                let y = usize::try_from(agg.y_key).ok()?;
                // A y past the last row would alias into the next column.
                if x >= self.columns || y >= self.style.row_count(self.y_len) {
                    return None;
                }
                Some(cell_index(x, y, self.y_len, self.style))
            }
            GridStyle::Year => {
                let date = reconstruct_date(agg.year?, agg.x_key, agg.y_key.saturating_add(1))?;
                self.by_date
                    .get(&date.format(YEAR_CELL_FORMAT).to_string())
                    .copied()
            }
        }
    }

    /// Write every tuple onto its cell, later tuples overwriting earlier ones.
    ///
    /// Returns how many tuples matched no cell and were dropped.
    pub fn apply(&mut self, aggregates: &[GridAggregate]) -> usize {
        let mut dropped = 0;
        for agg in aggregates {
            match self.locate(agg) {
                Some(idx) => self.grid.values[idx] = Cell::Value(agg.value),
                None => dropped += 1,
            }
        }
        dropped
    }

    /// The finished grid.
    #[must_use]
    pub fn finish(self) -> Grid {
        self.grid
    }
}

/// Initialize a grid for `axis` and merge `aggregates` onto it.
///
/// Tuples that land outside the axis are dropped. The output length and order
/// depend only on the axis.
///
/// # Errors
/// Propagates [`PreparedGrid::initialize`] failures.
pub fn merge(axis: &Axis, style: GridStyle, aggregates: &[GridAggregate]) -> Result<Grid, JaugeError> {
    let mut prepared = PreparedGrid::initialize(axis, style)?;
    let dropped = prepared.apply(aggregates);
    if dropped > 0 {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "jauge::grid",
            dropped,
            received = aggregates.len(),
            style = ?style,
            "dropped aggregates outside the axis"
        );
    }
    Ok(prepared.finish())
}
