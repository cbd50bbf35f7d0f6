use jauge::{DataType, Frequency};
use jauge_demos::common::{LOCATION, get_jauge};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let jauge = get_jauge()?;
    let period = jauge.period(Some("2018-01-01"), Some("2018-06-30"))?;

    for frequency in [Frequency::Week, Frequency::Month] {
        let series = jauge
            .evolution(LOCATION, DataType::ConsoElec, frequency, period)
            .await?;
        println!("-- {frequency} --");
        for (label, value) in series.label.iter().zip(&series.axe_y) {
            println!("{label:<24} {value:>8.1}");
        }
    }
    Ok(())
}
