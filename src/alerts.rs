//! Threshold alerting over the current reading.
//!
//! Evaluation is level-triggered: the exceeded set is recomputed each
//! refresh cycle from current values against the configured thresholds.
//! Notification is edge-triggered: [`AlertTracker`] reports only the
//! false→true transitions so the embedding application fires its sound /
//! OS notification exactly once per breach.

use crate::types::metric::Metric;
use crate::types::reading::RawReading;
use crate::types::settings::Thresholds;
use std::collections::HashSet;
use std::fmt;

/// The metrics that carry alert thresholds.
pub const ALERT_METRICS: [Metric; 4] = [Metric::Co2, Metric::Pm25, Metric::Pm10, Metric::Voc];

/// One currently-exceeded threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricAlert {
    pub metric: Metric,
    pub value: f64,
    pub threshold: f64,
}

/// Recomputes the exceeded set for one reading.
///
/// A metric is exceeded when its current value is strictly greater than its
/// threshold; each metric is judged independently (no combined hysteresis).
/// Metrics missing from the reading are never exceeded.
pub fn evaluate_alerts(reading: &RawReading, thresholds: &Thresholds) -> Vec<MetricAlert> {
    ALERT_METRICS
        .iter()
        .filter_map(|&metric| {
            let value = reading.value(metric)?;
            let threshold = thresholds.value_for(metric)?;
            (value > threshold).then_some(MetricAlert {
                metric,
                value,
                threshold,
            })
        })
        .collect()
}

/// Display severity derived from the number of active alerts, independent
/// of which metrics are involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// No thresholds exceeded.
    AllNormal,
    /// One or two metrics high, a warning.
    SomeHigh,
    /// Three or more metrics high, an error.
    Critical,
}

impl Severity {
    /// Classifies an active-alert count.
    pub fn from_active(count: usize) -> Severity {
        match count {
            0 => Severity::AllNormal,
            1 | 2 => Severity::SomeHigh,
            _ => Severity::Critical,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::AllNormal => "all normal",
            Severity::SomeHigh => "some high",
            Severity::Critical => "critical",
        };
        write!(f, "{label}")
    }
}

/// Remembers the previous cycle's exceeded set and reports transitions.
///
/// The displayed badge should use the full level-triggered set from
/// [`evaluate_alerts`]; the one-shot notification side effect should use
/// the transitions returned by [`AlertTracker::update`].
#[derive(Debug, Default)]
pub struct AlertTracker {
    exceeded: HashSet<Metric>,
}

impl AlertTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one cycle's active alerts; returns the alerts that were not
    /// active on the previous cycle. A metric that drops back below its
    /// threshold re-arms and will be reported again on its next breach.
    pub fn update(&mut self, active: &[MetricAlert]) -> Vec<MetricAlert> {
        let current: HashSet<Metric> = active.iter().map(|a| a.metric).collect();
        let newly: Vec<MetricAlert> = active
            .iter()
            .copied()
            .filter(|a| !self.exceeded.contains(&a.metric))
            .collect();
        self.exceeded = current;
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reading(co2: f64, pm25: f64, pm10: f64, voc: f64) -> RawReading {
        RawReading {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            temperature: Some(22.0),
            humidity: Some(50.0),
            co2: Some(co2),
            pm25: Some(pm25),
            pm10: Some(pm10),
            voc: Some(voc),
        }
    }

    #[test]
    fn exceeded_means_strictly_greater() {
        let thresholds = Thresholds::default();
        // Exactly at threshold: not exceeded.
        let at = reading(1000.0, 35.0, 150.0, 3.0);
        assert!(evaluate_alerts(&at, &thresholds).is_empty());

        let above = reading(1000.1, 35.0, 150.0, 3.0);
        let alerts = evaluate_alerts(&above, &thresholds);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].metric, Metric::Co2);
    }

    #[test]
    fn severity_bands_by_active_count() {
        assert_eq!(Severity::from_active(0), Severity::AllNormal);
        assert_eq!(Severity::from_active(2), Severity::SomeHigh);
        assert_eq!(Severity::from_active(3), Severity::Critical);
        assert_eq!(Severity::from_active(4), Severity::Critical);
    }

    #[test]
    fn missing_metric_never_alerts() {
        let thresholds = Thresholds::default();
        let mut partial = reading(2000.0, 0.0, 0.0, 0.0);
        partial.co2 = None;
        assert!(evaluate_alerts(&partial, &thresholds).is_empty());
    }

    #[test]
    fn tracker_fires_once_per_breach() {
        let thresholds = Thresholds::default();
        let mut tracker = AlertTracker::new();

        let high = evaluate_alerts(&reading(1500.0, 0.0, 0.0, 0.0), &thresholds);
        assert_eq!(tracker.update(&high).len(), 1);
        // Still high on the next cycle: level-triggered set unchanged,
        // no new notification.
        assert!(tracker.update(&high).is_empty());

        // Recovers, then breaches again: re-armed.
        let normal = evaluate_alerts(&reading(400.0, 0.0, 0.0, 0.0), &thresholds);
        assert!(tracker.update(&normal).is_empty());
        assert_eq!(tracker.update(&high).len(), 1);
    }
}
