use jauge::{DataType, RepartitionType};
use jauge_demos::common::{LOCATION, get_jauge};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let jauge = get_jauge()?;
    let period = jauge.period(Some("2018-01-01"), Some("2018-03-31"))?;

    for kind in [RepartitionType::YearHorizontal, RepartitionType::YearVertical] {
        let resp = jauge
            .repartition(LOCATION, DataType::ConsoElec, kind, period)
            .await?;
        println!(
            "{kind}: {} x {} labels, {} cells",
            resp.axe.x.len(),
            resp.axe.y.len(),
            resp.data.len()
        );
    }

    // Wire shape of a short horizontal view.
    let short = jauge.period(Some("2018-01-01"), Some("2018-01-03"))?;
    let resp = jauge
        .repartition(LOCATION, DataType::ConsoElec, RepartitionType::YearHorizontal, short)
        .await?;
    println!("{}", serde_json::to_string_pretty(&resp)?);
    Ok(())
}
