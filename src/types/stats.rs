//! Descriptive statistics for a metric over a query window.

use serde::{Deserialize, Serialize};

/// The population the statistics were computed over.
///
/// The primary path computes over every raw reading in the window (the
/// server does this in SQL). When that query fails, statistics are
/// recomputed client-side over the per-day means already produced, a
/// different, lower-fidelity population. The distinction is preserved
/// here instead of being silently collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatsBasis {
    /// Population statistics over every contributing raw reading.
    RawReadings,
    /// Fallback: population statistics over the per-day means.
    DailyMeans,
}

/// Min/max/mean/standard deviation for one metric over one query window.
///
/// All values are population statistics (divisor `N`, not `N-1`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
    pub basis: StatsBasis,
}

/// Wire shape of `GET /api/stats`. Any field may be null when the window
/// holds no rows; a null is treated as a failed statistics query.
#[derive(Debug, Deserialize)]
pub(crate) struct StatsResponse {
    #[allow(dead_code)]
    pub metric: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
    pub stddev: Option<f64>,
}

impl StatsResponse {
    pub(crate) fn into_statistics(self) -> Option<RangeStatistics> {
        Some(RangeStatistics {
            min: self.min?,
            max: self.max?,
            mean: self.avg?,
            stddev: self.stddev?,
            basis: StatsBasis::RawReadings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_fields_mean_no_statistics() {
        let resp: StatsResponse = serde_json::from_str(
            r#"{"metric": "co2", "min": null, "max": null, "avg": null, "stddev": null}"#,
        )
        .unwrap();
        assert!(resp.into_statistics().is_none());
    }

    #[test]
    fn full_response_converts() {
        let resp: StatsResponse = serde_json::from_str(
            r#"{"metric": "pm25", "min": 4.0, "max": 38.5, "avg": 17.2, "stddev": 6.3}"#,
        )
        .unwrap();
        let stats = resp.into_statistics().unwrap();
        assert_eq!(stats.mean, 17.2);
        assert_eq!(stats.basis, StatsBasis::RawReadings);
    }
}
