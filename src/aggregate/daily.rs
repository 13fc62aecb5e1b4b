//! Groups raw readings by calendar day and computes range statistics.

use crate::aggregate::accumulate::BucketAccumulator;
use crate::time::day_label;
use crate::types::metric::Metric;
use crate::types::reading::RawReading;
use crate::types::summary::{AggregateSummary, BucketKey};
use crate::types::stats::{RangeStatistics, StatsBasis};
use std::collections::HashMap;

/// Aggregates raw readings into one summary per station-local calendar day.
///
/// Days with zero contributing readings are simply absent from the output;
/// no zero-filled gaps. Rows are sorted ascending by representative
/// timestamp (the earliest reading of each day).
pub fn daily_summaries(readings: &[RawReading]) -> Vec<AggregateSummary> {
    let mut buckets: HashMap<String, BucketAccumulator> = HashMap::new();
    for reading in readings {
        let label = day_label(reading.timestamp);
        buckets
            .entry(label)
            .and_modify(|acc| acc.add(reading))
            .or_insert_with(|| BucketAccumulator::new(reading));
    }

    let mut rows: Vec<AggregateSummary> = buckets
        .into_iter()
        .map(|(label, acc)| acc.into_summary(BucketKey::Day(label)))
        .collect();
    rows.sort_by_key(|row| row.timestamp);
    rows
}

/// Population statistics (divisor `N`) over every raw reading in the window
/// that carries a value for `metric`. Returns `None` when nothing does.
///
/// # Examples
///
/// ```
/// use aeris::{range_statistics, Metric, RawReading};
/// use chrono::{TimeZone, Utc};
///
/// let readings: Vec<RawReading> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &v)| RawReading {
///         timestamp: Utc.with_ymd_and_hms(2024, 5, 1, i as u32, 0, 0).unwrap(),
///         temperature: None,
///         humidity: None,
///         co2: Some(v),
///         pm25: None,
///         pm10: None,
///         voc: None,
///     })
///     .collect();
///
/// let stats = range_statistics(&readings, Metric::Co2).unwrap();
/// assert_eq!(stats.stddev, 2.0);
/// ```
pub fn range_statistics(readings: &[RawReading], metric: Metric) -> Option<RangeStatistics> {
    let values: Vec<f64> = readings.iter().filter_map(|r| r.value(metric)).collect();
    population(&values).map(|(min, max, mean, stddev)| RangeStatistics {
        min,
        max,
        mean,
        stddev,
        basis: StatsBasis::RawReadings,
    })
}

/// Fallback statistics computed over already-aggregated per-day means.
///
/// Used when the raw statistics query fails; the population is the day
/// means, not the raw readings, so the result is lower fidelity and is
/// tagged [`StatsBasis::DailyMeans`]. Both paths use the same exact
/// population formula.
pub fn fallback_statistics(days: &[AggregateSummary], metric: Metric) -> Option<RangeStatistics> {
    let values: Vec<f64> = days.iter().filter_map(|d| d.mean(metric)).collect();
    population(&values).map(|(min, max, mean, stddev)| RangeStatistics {
        min,
        max,
        mean,
        stddev,
        basis: StatsBasis::DailyMeans,
    })
}

fn population(values: &[f64]) -> Option<(f64, f64, f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    let mean = sum / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some((min, max, mean, variance.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reading(day: u32, hour: u32, pm25: f64) -> RawReading {
        RawReading {
            timestamp: Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap(),
            temperature: None,
            humidity: None,
            co2: None,
            pm25: Some(pm25),
            pm10: None,
            voc: None,
        }
    }

    #[test]
    fn days_without_readings_are_absent() {
        // Readings on May 1 and May 3, nothing on May 2.
        let readings = vec![reading(1, 8, 10.0), reading(3, 8, 20.0)];
        let days = daily_summaries(&readings);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].key, BucketKey::Day("2024-05-01".into()));
        assert_eq!(days[1].key, BucketKey::Day("2024-05-03".into()));
    }

    #[test]
    fn day_boundary_follows_the_station_offset() {
        // 22:00 UTC on May 1 is 01:00 May 2 at +3h.
        let days = daily_summaries(&[reading(1, 22, 10.0)]);
        assert_eq!(days[0].key, BucketKey::Day("2024-05-02".into()));
    }

    #[test]
    fn per_day_means_average_all_contributions() {
        let readings = vec![
            reading(1, 6, 10.0),
            reading(1, 12, 20.0),
            reading(1, 18, 30.0),
        ];
        let days = daily_summaries(&readings);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].pm25, Some(20.0));
    }

    #[test]
    fn population_stddev_uses_divisor_n() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let (min, max, mean, stddev) = population(&values).unwrap();
        assert_eq!(min, 2.0);
        assert_eq!(max, 9.0);
        assert_eq!(mean, 5.0);
        assert_eq!(stddev, 2.0);
    }

    #[test]
    fn fallback_statistics_are_tagged() {
        let readings = vec![reading(1, 8, 10.0), reading(2, 8, 20.0)];
        let days = daily_summaries(&readings);
        let stats = fallback_statistics(&days, Metric::Pm25).unwrap();

        assert_eq!(stats.basis, StatsBasis::DailyMeans);
        assert_eq!(stats.mean, 15.0);
        let raw = range_statistics(&readings, Metric::Pm25).unwrap();
        assert_eq!(raw.basis, StatsBasis::RawReadings);
    }

    #[test]
    fn no_values_means_no_statistics() {
        let readings = vec![reading(1, 8, 10.0)];
        assert!(range_statistics(&readings, Metric::Co2).is_none());
        assert!(fallback_statistics(&daily_summaries(&readings), Metric::Voc).is_none());
    }
}
