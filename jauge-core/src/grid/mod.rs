//! Repartition (heatmap) grids.
//!
//! Modules include:
//! - `index`: flat cell positions and ISO week-date reconstruction
//! - `merge`: blank-initialized grids and tuple merging
/// Index arithmetic shared by initialization and merge.
pub mod index;
/// Grid initialization and aggregate merging.
pub mod merge;

use crate::axis::RepartitionAxis;
use crate::{GridAggregate, JaugeError, RepartitionResponse, RepartitionType};
use index::GridStyle;

/// Shape store aggregates into the response of a repartition view.
///
/// Vertical year views are merged on the transposed axis (weeks as columns),
/// so their cells are week-major like the horizontal view; the response keeps
/// the axis as displayed.
///
/// # Errors
/// Returns `Err(JaugeError::Data)` if the axis cannot be initialized.
pub fn repartition(
    kind: RepartitionType,
    axis: &RepartitionAxis,
    aggregates: &[GridAggregate],
) -> Result<RepartitionResponse, JaugeError> {
    let style = GridStyle::of(kind);
    let data = match kind {
        RepartitionType::YearVertical => merge::merge(&axis.axis.transposed(), style, aggregates)?,
        RepartitionType::Week | RepartitionType::YearHorizontal => {
            merge::merge(&axis.axis, style, aggregates)?
        }
    };
    Ok(RepartitionResponse {
        axe: axis.axis.clone(),
        data,
    })
}
