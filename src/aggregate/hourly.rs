//! Groups raw readings into hour-of-day buckets.
//!
//! The hourly view backs the dashboard trend table: per-metric means for
//! the most recent hours, station-local labels, newest bucket last.

use crate::aggregate::accumulate::BucketAccumulator;
use crate::time::hour_label;
use crate::types::metric::Metric;
use crate::types::reading::RawReading;
use crate::types::summary::{AggregateSummary, BucketKey, HourlySeries, SeriesSource};
use chrono::{DateTime, Duration, Timelike, Utc};
use log::warn;
use rand::Rng;
use std::collections::HashMap;

/// Maximum number of hourly rows kept per aggregation run.
pub const HOURLY_WINDOW: usize = 7;

/// Aggregates raw readings into hourly summaries.
///
/// Readings are grouped by their station-local `HH:00` label, each bucket
/// gets per-metric arithmetic means (missing values skipped), and the result
/// is sorted ascending by representative timestamp and truncated to the
/// [`HOURLY_WINDOW`] most recent buckets.
///
/// An empty input never produces an empty chart: it back-fills to a
/// synthesized series for the most recent seven hours, tagged
/// [`SeriesSource::Placeholder`] so it can never pass for observed data.
///
/// # Examples
///
/// ```
/// use aeris::{hourly_summaries, RawReading, SeriesSource};
/// use chrono::{TimeZone, Utc};
///
/// let readings: Vec<RawReading> = (0..24)
///     .map(|h| RawReading {
///         timestamp: Utc.with_ymd_and_hms(2024, 5, 1, h, 0, 0).unwrap(),
///         temperature: Some(20.0 + h as f64),
///         humidity: None,
///         co2: None,
///         pm25: None,
///         pm10: None,
///         voc: None,
///     })
///     .collect();
///
/// let series = hourly_summaries(&readings);
/// assert_eq!(series.source, SeriesSource::Observed);
/// assert_eq!(series.rows.len(), 7);
/// ```
pub fn hourly_summaries(readings: &[RawReading]) -> HourlySeries {
    if readings.is_empty() {
        warn!("no readings to aggregate; synthesizing hourly placeholder series");
        return placeholder_series(Utc::now());
    }

    let mut buckets: HashMap<String, BucketAccumulator> = HashMap::new();
    for reading in readings {
        let label = hour_label(reading.timestamp);
        buckets
            .entry(label)
            .and_modify(|acc| acc.add(reading))
            .or_insert_with(|| BucketAccumulator::new(reading));
    }

    let mut rows: Vec<AggregateSummary> = buckets
        .into_iter()
        .map(|(label, acc)| acc.into_summary(BucketKey::Hour(label)))
        .collect();
    rows.sort_by_key(|row| row.timestamp);

    if rows.len() > HOURLY_WINDOW {
        rows = rows.split_off(rows.len() - HOURLY_WINDOW);
    }

    HourlySeries {
        rows,
        source: SeriesSource::Observed,
    }
}

/// Synthesizes a placeholder series for the seven whole hours ending at
/// `now`, with per-metric values drawn from plausible bounded ranges.
///
/// Callers that hit a fetch error (rather than an empty result) can use
/// this directly to keep a UI rendering; the `Placeholder` tag travels with
/// the series either way.
pub fn placeholder_series(now: DateTime<Utc>) -> HourlySeries {
    let top_of_hour = now
        .with_minute(0)
        .and_then(|dt| dt.with_second(0))
        .and_then(|dt| dt.with_nanosecond(0))
        .expect("truncating to start of hour failed unexpectedly");

    let mut rng = rand::thread_rng();
    let rows = (0..HOURLY_WINDOW as i64)
        .rev()
        .map(|hours_back| {
            let ts = top_of_hour - Duration::hours(hours_back);
            let mut sample = |metric: Metric| {
                let (lo, hi) = metric.placeholder_range();
                Some(rng.gen_range(lo..hi))
            };
            AggregateSummary {
                key: BucketKey::Hour(hour_label(ts)),
                timestamp: ts,
                temperature: sample(Metric::Temperature),
                humidity: sample(Metric::Humidity),
                co2: sample(Metric::Co2),
                pm25: sample(Metric::Pm25),
                pm10: sample(Metric::Pm10),
                voc: sample(Metric::Voc),
            }
        })
        .collect();

    HourlySeries {
        rows,
        source: SeriesSource::Placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reading_at(hour: u32, minute: u32, temperature: f64) -> RawReading {
        RawReading {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap(),
            temperature: Some(temperature),
            humidity: Some(50.0),
            co2: Some(600.0),
            pm25: Some(15.0),
            pm10: Some(30.0),
            voc: Some(1.0),
        }
    }

    #[test]
    fn mean_is_invariant_under_reordering() {
        let mut readings = vec![
            reading_at(10, 0, 21.0),
            reading_at(10, 20, 23.0),
            reading_at(10, 40, 25.0),
        ];
        let forward = hourly_summaries(&readings);
        readings.reverse();
        let backward = hourly_summaries(&readings);

        assert_eq!(forward.rows.len(), 1);
        assert_eq!(forward.rows[0].temperature, Some(23.0));
        assert_eq!(forward.rows, backward.rows);
    }

    #[test]
    fn output_is_bounded_and_sorted() {
        let readings: Vec<RawReading> = (0..24).map(|h| reading_at(h, 0, 20.0)).collect();
        let series = hourly_summaries(&readings);

        assert!(series.rows.len() <= HOURLY_WINDOW);
        assert!(series
            .rows
            .windows(2)
            .all(|pair| pair[0].timestamp < pair[1].timestamp));
    }

    #[test]
    fn keeps_the_seven_most_recent_hours() {
        // One reading per hour of the day, each with a distinct value.
        let readings: Vec<RawReading> =
            (0..24).map(|h| reading_at(h, 0, h as f64)).collect();
        let series = hourly_summaries(&readings);

        assert_eq!(series.source, SeriesSource::Observed);
        assert_eq!(series.rows.len(), HOURLY_WINDOW);
        // Hours 17..=23 UTC survive, in ascending order.
        let temps: Vec<f64> = series.rows.iter().filter_map(|r| r.temperature).collect();
        assert_eq!(temps, vec![17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0]);
    }

    #[test]
    fn hour_labels_are_station_local() {
        let series = hourly_summaries(&[reading_at(10, 0, 20.0)]);
        // 10:00 UTC is 13:00 at the station's +3h offset.
        assert_eq!(series.rows[0].key, BucketKey::Hour("13:00".into()));
    }

    #[test]
    fn empty_input_backfills_a_marked_placeholder() {
        let series = hourly_summaries(&[]);

        assert!(series.is_placeholder());
        assert_eq!(series.rows.len(), HOURLY_WINDOW);
        for row in &series.rows {
            for metric in Metric::ALL {
                let (lo, hi) = metric.placeholder_range();
                let value = row.mean(metric).unwrap();
                assert!(value >= lo && value < hi, "{metric}: {value} outside range");
            }
        }
    }

    #[test]
    fn placeholder_hours_end_at_the_given_instant() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 15, 42, 10).unwrap();
        let series = placeholder_series(now);

        let last = series.rows.last().unwrap();
        assert_eq!(
            last.timestamp,
            Utc.with_ymd_and_hms(2024, 5, 1, 15, 0, 0).unwrap()
        );
        let first = series.rows.first().unwrap();
        assert_eq!(
            first.timestamp,
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
        );
    }
}
