use aeris::{daily_text_report, station_today, Aeris, AerisError, Metric};
use chrono::Duration;
use std::env;

#[tokio::main]
async fn main() -> Result<(), AerisError> {
    let base_url = env::var("AERIS_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let email = env::var("AERIS_EMAIL").unwrap_or_else(|_| "demo@example.com".to_string());
    let password = env::var("AERIS_PASSWORD").unwrap_or_else(|_| "demo".to_string());

    let client = Aeris::new(base_url);
    client.login(&email, &password).await?;

    let end = station_today();
    let start = end - Duration::days(6);

    let report = client
        .daily()
        .report()
        .start(start)
        .end(end)
        .call()
        .await?;

    println!("{}", daily_text_report(&report, &Metric::ALL));

    for day in &report.days {
        println!(
            "{}  temp {:>6}  co2 {:>7}  pm2.5 {:>6}",
            day.key.label(),
            cell(day.temperature),
            cell(day.co2),
            cell(day.pm25),
        );
    }

    Ok(())
}

fn cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}
