//! Plain-text report rendering.
//!
//! Renders a [`DailyReport`] or an [`HourlySeries`] into the text blocks
//! used for exported reports. One decimal place throughout; statistics
//! recomputed from daily means are annotated so the reader knows the
//! numbers are lower fidelity.

use crate::clients::daily_client::DailyReport;
use crate::types::metric::Metric;
use crate::types::stats::StatsBasis;
use crate::types::summary::HourlySeries;
use std::fmt::Write;

/// Renders the statistics section of a range report.
///
/// Metrics missing from the report are skipped. The header names the date
/// window; each metric gets a block of min/max/mean/stddev lines.
///
/// # Examples
///
/// ```no_run
/// # use aeris::{Aeris, AerisError, Metric, daily_text_report};
/// # use chrono::NaiveDate;
/// # async fn run() -> Result<(), AerisError> {
/// # let client = Aeris::new("http://localhost:8000");
/// let report = client
///     .daily()
///     .report()
///     .start(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
///     .end(NaiveDate::from_ymd_opt(2024, 5, 7).unwrap())
///     .call()
///     .await?;
/// println!("{}", daily_text_report(&report, &Metric::ALL));
/// # Ok(())
/// # }
/// ```
pub fn daily_text_report(report: &DailyReport, metrics: &[Metric]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Air quality report, {} to {}",
        report.start.format("%Y-%m-%d"),
        report.end.format("%Y-%m-%d")
    );
    let _ = writeln!(out, "{} day(s) with readings", report.days.len());

    for metric in metrics {
        let Some(stats) = report.statistics.get(metric) else {
            continue;
        };
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", metric.name(), metric.unit());
        let _ = writeln!(out, "  Minimum:            {:.1}", stats.min);
        let _ = writeln!(out, "  Maximum:            {:.1}", stats.max);
        let _ = writeln!(out, "  Average:            {:.1}", stats.mean);
        let _ = writeln!(out, "  Standard Deviation: {:.1}", stats.stddev);
        if stats.basis == StatsBasis::DailyMeans {
            let _ = writeln!(out, "  (computed from daily means)");
        }
    }
    out
}

/// Renders an hourly series as a table of per-hour means.
///
/// Placeholder series get a banner above the table so simulated values
/// are never mistaken for observations.
pub fn hourly_text_report(series: &HourlySeries) -> String {
    let mut out = String::new();
    if series.is_placeholder() {
        let _ = writeln!(out, "*** SIMULATED DATA: no readings available ***");
        let _ = writeln!(out);
    }
    let _ = writeln!(
        out,
        "{:<6} {:>6} {:>6} {:>7} {:>7} {:>7} {:>6}",
        "Hour", "Temp", "Hum", "CO2", "PM2.5", "PM10", "VOC"
    );
    for row in &series.rows {
        let _ = writeln!(
            out,
            "{:<6} {:>6} {:>6} {:>7} {:>7} {:>7} {:>6}",
            row.key.label(),
            cell(row.temperature),
            cell(row.humidity),
            cell(row.co2),
            cell(row.pm25),
            cell(row.pm10),
            cell(row.voc),
        );
    }
    out
}

fn cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::stats::RangeStatistics;
    use crate::types::summary::{AggregateSummary, BucketKey, SeriesSource};
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::collections::BTreeMap;

    fn report_with(basis: StatsBasis) -> DailyReport {
        let mut statistics = BTreeMap::new();
        statistics.insert(
            Metric::Co2,
            RangeStatistics {
                min: 410.0,
                max: 780.5,
                mean: 560.25,
                stddev: 90.125,
                basis,
            },
        );
        DailyReport {
            days: vec![],
            statistics,
            start: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 5, 7).unwrap(),
        }
    }

    #[test]
    fn daily_report_rounds_to_one_decimal() {
        let text = daily_text_report(&report_with(StatsBasis::RawReadings), &[Metric::Co2]);
        assert!(text.contains("Air quality report, 2024-05-01 to 2024-05-07"));
        assert!(text.contains("CO2 (ppm)"));
        assert!(text.contains("Average:            560.2"));
        assert!(text.contains("Standard Deviation: 90.1"));
        assert!(!text.contains("daily means"));
    }

    #[test]
    fn fallback_statistics_are_annotated() {
        let text = daily_text_report(&report_with(StatsBasis::DailyMeans), &[Metric::Co2]);
        assert!(text.contains("(computed from daily means)"));
    }

    #[test]
    fn missing_metrics_are_skipped() {
        let text = daily_text_report(&report_with(StatsBasis::RawReadings), &[Metric::Voc]);
        assert!(!text.contains("VOC"));
    }

    #[test]
    fn placeholder_series_gets_a_banner() {
        let series = HourlySeries {
            rows: vec![AggregateSummary {
                key: BucketKey::Hour("09:00".to_string()),
                timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap(),
                temperature: Some(22.5),
                humidity: None,
                co2: Some(500.0),
                pm25: Some(12.0),
                pm10: Some(30.0),
                voc: Some(1.0),
            }],
            source: SeriesSource::Placeholder,
        };
        let text = hourly_text_report(&series);
        assert!(text.contains("SIMULATED DATA"));
        assert!(text.contains("09:00"));
        assert!(text.contains("22.5"));

        let observed = HourlySeries {
            source: SeriesSource::Observed,
            ..series
        };
        assert!(!hourly_text_report(&observed).contains("SIMULATED DATA"));
    }
}
