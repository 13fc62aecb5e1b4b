use aeris::{
    calculate_aqi, classify_aqi, display_aqi, evaluate_alerts, hourly_text_report, trend, Aeris,
    AerisError, Metric, Severity,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), AerisError> {
    let base_url = env::var("AERIS_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let email = env::var("AERIS_EMAIL").unwrap_or_else(|_| "demo@example.com".to_string());
    let password = env::var("AERIS_PASSWORD").unwrap_or_else(|_| "demo".to_string());

    let client = Aeris::new(base_url);
    client.login(&email, &password).await?;

    let reading = client.current().await?;
    println!("Latest reading at {}", reading.timestamp);
    for metric in Metric::ALL {
        if let Some(value) = reading.value(metric) {
            println!("  {:<12} {:>8.1} {}", metric.name(), value, metric.unit());
        }
    }

    if let (Some(pm25), Some(pm10)) = (reading.pm25, reading.pm10) {
        let aqi = calculate_aqi(pm25, pm10);
        println!(
            "\nAQI: {} ({})",
            display_aqi(aqi),
            classify_aqi(aqi)
        );
    }

    let settings = client.settings().await?;
    let alerts = evaluate_alerts(&reading, &settings.thresholds);
    println!("Status: {}", Severity::from_active(alerts.len()));
    for alert in &alerts {
        println!(
            "  {} at {:.1} (threshold {:.1})",
            alert.metric.name(),
            alert.value,
            alert.threshold
        );
    }

    let series = client.hourly().latest().await?;
    println!("\n{}", hourly_text_report(&series));
    println!(
        "CO2 trend: {}",
        trend(&series.metric_values(Metric::Co2))
    );

    Ok(())
}
