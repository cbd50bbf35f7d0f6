//! One-dimensional chart series.
//!
//! Both builders fill gaps with `0`, unlike grids which keep a blank sentinel.
/// Calendar-ordered series keyed by formatted bucket dates.
pub mod evolution;
/// Weekday-ordered series keyed by category ordinals.
pub mod group_by;
