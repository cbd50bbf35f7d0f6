use jauge::{DataType, Frequency, RepartitionType};
use jauge_demos::common::{LOCATION, get_jauge};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,jauge=trace,jauge_core=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let jauge = get_jauge()?;
    let period = jauge.period(Some("2018-01-01"), Some("2018-01-31"))?;

    let _ = jauge
        .repartition(LOCATION, DataType::ConsoElec, RepartitionType::Week, period)
        .await?;
    let _ = jauge
        .evolution(LOCATION, DataType::Temperature, Frequency::Week, period)
        .await?;
    let _ = jauge
        .sum_group_by(LOCATION, DataType::ConsoElec, Frequency::Day, period)
        .await?;

    // Readings end on 2018-03-31: the tail of this axis is zero-filled.
    let late = jauge.period(Some("2018-03-01"), Some("2018-04-30"))?;
    let _ = jauge
        .evolution(LOCATION, DataType::ConsoElec, Frequency::Day, late)
        .await?;

    tracing::info!(target: "jauge_demos", "done");
    Ok(())
}
