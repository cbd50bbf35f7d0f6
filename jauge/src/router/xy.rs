use jauge_core::{DataType, Frequency, JaugeError, Period, XyResponse};

use crate::Jauge;

impl Jauge {
    /// Two feeds of one location paired bucket by bucket.
    ///
    /// Both feeds are looked up concurrently once the location is known. Dates
    /// are formatted with the frequency's XY pattern.
    ///
    /// # Errors
    /// `NotFound` for an unknown location or either feed, `Unsupported` when
    /// the store cannot pair feeds, and any store or timeout error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "jauge::router",
            skip_all,
            fields(location = %location, x = %data_type_x, y = %data_type_y, frequency = %frequency),
        )
    )]
    pub async fn xy(
        &self,
        location: &str,
        data_type_x: DataType,
        data_type_y: DataType,
        frequency: Frequency,
        period: Period,
    ) -> Result<XyResponse, JaugeError> {
        let place = self.location(location).await?;
        let (x_feed, y_feed) = futures::try_join!(
            self.feed(&place, data_type_x),
            self.feed(&place, data_type_y),
        )?;
        let provider = self.xy_provider()?;
        let points = self
            .store_call("xy", provider.xy(&x_feed, &y_feed, period, frequency))
            .await?;

        let pattern = frequency.xy_format();
        let mut out = XyResponse {
            axe_x: Vec::with_capacity(points.len()),
            axe_y: Vec::with_capacity(points.len()),
            date: Vec::with_capacity(points.len()),
        };
        for p in points {
            out.axe_x.push(p.x_value);
            out.axe_y.push(p.y_value);
            out.date.push(p.date.format(pattern).to_string());
        }
        Ok(out)
    }
}
