//! Shared per-bucket accumulation for the hourly and daily aggregators.

use crate::types::metric::Metric;
use crate::types::reading::RawReading;
use crate::types::summary::{AggregateSummary, BucketKey};
use chrono::{DateTime, Utc};

/// Running sums and counts for one bucket.
///
/// A reading that is missing a metric contributes neither to that metric's
/// sum nor to its count; missing is never treated as zero.
#[derive(Debug)]
pub(crate) struct BucketAccumulator {
    /// Earliest raw timestamp mapped into the bucket; the summary's
    /// representative instant for chronological sorting.
    earliest: DateTime<Utc>,
    sums: [f64; 6],
    counts: [u32; 6],
}

impl BucketAccumulator {
    pub(crate) fn new(first: &RawReading) -> Self {
        let mut acc = BucketAccumulator {
            earliest: first.timestamp,
            sums: [0.0; 6],
            counts: [0; 6],
        };
        acc.add(first);
        acc
    }

    pub(crate) fn add(&mut self, reading: &RawReading) {
        if reading.timestamp < self.earliest {
            self.earliest = reading.timestamp;
        }
        for metric in Metric::ALL {
            if let Some(value) = reading.value(metric) {
                let i = metric.index();
                self.sums[i] += value;
                self.counts[i] += 1;
            }
        }
    }

    fn mean(&self, metric: Metric) -> Option<f64> {
        let i = metric.index();
        if self.counts[i] == 0 {
            None
        } else {
            Some(self.sums[i] / self.counts[i] as f64)
        }
    }

    pub(crate) fn into_summary(self, key: BucketKey) -> AggregateSummary {
        AggregateSummary {
            key,
            timestamp: self.earliest,
            temperature: self.mean(Metric::Temperature),
            humidity: self.mean(Metric::Humidity),
            co2: self.mean(Metric::Co2),
            pm25: self.mean(Metric::Pm25),
            pm10: self.mean(Metric::Pm10),
            voc: self.mean(Metric::Voc),
        }
    }
}
