use jauge::{DataType, Frequency};
use jauge_demos::common::{LOCATION, get_jauge};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let jauge = get_jauge()?;
    let period = jauge.period(Some("2018-01-01"), Some("2018-01-14"))?;

    let daily = jauge.sum(LOCATION, DataType::ConsoElec, period).await?;
    let peaks = jauge
        .max(LOCATION, DataType::ConsoElec, Frequency::Week, period)
        .await?;
    let cold = jauge
        .count_below(LOCATION, DataType::Temperature, 3.0, Frequency::Week, period)
        .await?;
    println!("daily sums: {}", daily.len());
    for row in peaks.iter().chain(&cold) {
        println!("{} {:.1}", row.date.format("%d/%m/%Y"), row.value);
    }

    let xy = jauge
        .xy(
            LOCATION,
            DataType::Temperature,
            DataType::ConsoElec,
            Frequency::Day,
            period,
        )
        .await?;
    for ((date, x), y) in xy.date.iter().zip(&xy.axe_x).zip(&xy.axe_y) {
        println!("{date:<26} {x:>4.1} {y:>6.1}");
    }
    Ok(())
}
