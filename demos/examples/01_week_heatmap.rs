use jauge::{DataType, RepartitionType};
use jauge_core::Cell;
use jauge_demos::common::{LOCATION, get_jauge};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the orchestrator over the fixture store.
    let jauge = get_jauge()?;

    // 2. Heatmap of January 2018: 7 weekdays × 24 hours.
    let period = jauge.period(Some("2018-01-01"), Some("2018-01-31"))?;
    let resp = jauge
        .repartition(LOCATION, DataType::ConsoElec, RepartitionType::Week, period)
        .await?;

    // 3. Print one row per weekday.
    for (x, day) in resp.axe.x.iter().enumerate() {
        let row: Vec<String> = resp.data.values[x * 24..(x + 1) * 24]
            .iter()
            .map(|c| match c {
                Cell::Value(v) => format!("{v:>5.1}"),
                Cell::Blank => "    .".to_string(),
            })
            .collect();
        println!("{day:<5} {}", row.join(""));
    }
    Ok(())
}
