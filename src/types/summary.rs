//! Aggregated summary rows produced by the hourly and daily aggregators.

use crate::types::metric::Metric;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// The time-grouping key of an aggregation bucket.
///
/// Hour labels wrap daily (24 distinct values); day labels are calendar
/// dates. Within one aggregation run there is exactly one summary per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum BucketKey {
    /// `HH:00`, station-local, zero-padded.
    Hour(String),
    /// `YYYY-MM-DD`, station-local.
    Day(String),
}

impl BucketKey {
    /// The display label of the bucket.
    pub fn label(&self) -> &str {
        match self {
            BucketKey::Hour(label) | BucketKey::Day(label) => label,
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One aggregated row: per-metric arithmetic means over the readings that
/// fell into one bucket.
///
/// `timestamp` is the representative instant used for chronological sorting:
/// the earliest raw timestamp mapped into the bucket during the run. A metric
/// nobody reported in the bucket stays `None`; a bucket with zero contributing
/// readings is never emitted at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSummary {
    pub key: BucketKey,
    pub timestamp: DateTime<Utc>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub co2: Option<f64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub voc: Option<f64>,
}

impl AggregateSummary {
    /// The bucket mean for `metric`, if any reading contributed a value.
    pub fn mean(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
            Metric::Co2 => self.co2,
            Metric::Pm25 => self.pm25,
            Metric::Pm10 => self.pm10,
            Metric::Voc => self.voc,
        }
    }
}

/// Provenance of a summary series.
///
/// When a fetch comes back empty the aggregator substitutes synthesized
/// filler, and the substitution is explicit so placeholder output can never
/// be mistaken for real data downstream (reports check this flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeriesSource {
    /// Aggregated from readings the station actually reported.
    Observed,
    /// Synthesized filler so a UI has something to render; non-authoritative.
    Placeholder,
}

/// The result of an hourly aggregation run: at most seven rows, ascending by
/// representative timestamp, tagged with their provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlySeries {
    pub rows: Vec<AggregateSummary>,
    pub source: SeriesSource,
}

impl HourlySeries {
    /// Whether the series was synthesized rather than observed.
    pub fn is_placeholder(&self) -> bool {
        self.source == SeriesSource::Placeholder
    }

    /// The bucket means for one metric, in chronological order, skipping
    /// buckets where the metric is absent. Feed this to [`crate::trend`].
    pub fn metric_values(&self, metric: Metric) -> Vec<f64> {
        self.rows.iter().filter_map(|row| row.mean(metric)).collect()
    }
}
