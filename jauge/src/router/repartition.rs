use jauge_core::grid;
use jauge_core::store::RepartitionQuery;
use jauge_core::{DataType, JaugeError, Period, RepartitionResponse, RepartitionType};

use crate::Jauge;

impl Jauge {
    /// Heatmap of a feed over `period`.
    ///
    /// The axis is built from `period` before the store is queried. Week views
    /// are 7 days × 24 hours; year views are ISO weeks × weekdays, horizontal
    /// or transposed. Cells without data stay blank.
    ///
    /// # Errors
    /// `NotFound` for an unknown location or feed, `Unsupported` when the store
    /// cannot aggregate heatmap cells, and any store or timeout error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "jauge::router",
            skip_all,
            fields(location = %location, data_type = %data_type, kind = %kind),
        )
    )]
    pub async fn repartition(
        &self,
        location: &str,
        data_type: DataType,
        kind: RepartitionType,
        period: Period,
    ) -> Result<RepartitionResponse, JaugeError> {
        let feed = self.resolve_feed(location, data_type).await?;
        let provider = self.repartition_provider()?;

        let axis = jauge_core::axis::build(
            kind,
            period.start(),
            period.end(),
            &self.cfg.weekday_labels,
        );
        let query = RepartitionQuery {
            period,
            x_field: axis.x_field,
            y_field: axis.y_field,
            frequency: axis.frequency,
            kind,
        };
        let aggregates = self
            .store_call("repartition", provider.repartition(&feed, query))
            .await?;
        grid::repartition(kind, &axis, &aggregates)
    }
}
