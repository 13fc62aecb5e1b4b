//! Defines the set of sensor metrics reported by the monitoring station.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six quantities measured by the station.
///
/// The variant order is the canonical metric order used throughout the crate
/// (aggregation accumulators, reports, default metric selections).
///
/// # Examples
///
/// ```
/// use aeris::Metric;
///
/// assert_eq!(Metric::Pm25.id(), "pm25");
/// assert_eq!(format!("{}", Metric::Co2), "co2");
/// assert_eq!(Metric::Temperature.unit(), "°C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Air temperature in degrees Celsius.
    Temperature,
    /// Relative humidity in percent.
    Humidity,
    /// Carbon dioxide concentration in ppm.
    Co2,
    /// Fine particulate matter (≤ 2.5 µm) in µg/m³.
    Pm25,
    /// Coarse particulate matter (≤ 10 µm) in µg/m³.
    Pm10,
    /// Volatile organic compounds. The backend reports a unitless float;
    /// the unit label is a display concern only.
    Voc,
}

impl Metric {
    /// All metrics, in canonical order.
    pub const ALL: [Metric; 6] = [
        Metric::Temperature,
        Metric::Humidity,
        Metric::Co2,
        Metric::Pm25,
        Metric::Pm10,
        Metric::Voc,
    ];

    /// The identifier used in backend query strings and wire payloads.
    pub fn id(&self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::Co2 => "co2",
            Metric::Pm25 => "pm25",
            Metric::Pm10 => "pm10",
            Metric::Voc => "voc",
        }
    }

    /// Human-readable name for reports and UIs.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::Humidity => "Humidity",
            Metric::Co2 => "CO2",
            Metric::Pm25 => "PM2.5",
            Metric::Pm10 => "PM10",
            Metric::Voc => "VOC",
        }
    }

    /// Display unit for the metric.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::Co2 => "ppm",
            Metric::Pm25 => "µg/m³",
            Metric::Pm10 => "µg/m³",
            Metric::Voc => "ppm",
        }
    }

    /// Position of this metric in [`Metric::ALL`]; used to index accumulators.
    pub(crate) fn index(&self) -> usize {
        match self {
            Metric::Temperature => 0,
            Metric::Humidity => 1,
            Metric::Co2 => 2,
            Metric::Pm25 => 3,
            Metric::Pm10 => 4,
            Metric::Voc => 5,
        }
    }

    /// Plausible value range used when synthesizing placeholder readings,
    /// so placeholder charts look like real station output while remaining
    /// clearly marked as non-authoritative at the series level.
    pub(crate) fn placeholder_range(&self) -> (f64, f64) {
        match self {
            Metric::Temperature => (20.0, 30.0),
            Metric::Humidity => (40.0, 70.0),
            Metric::Co2 => (400.0, 900.0),
            Metric::Pm25 => (10.0, 40.0),
            Metric::Pm10 => (20.0, 70.0),
            Metric::Voc => (0.5, 2.5),
        }
    }
}

/// Formats a `Metric` using its wire identifier.
impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_serde() {
        for metric in Metric::ALL {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric.id()));
            let back: Metric = serde_json::from_str(&json).unwrap();
            assert_eq!(back, metric);
        }
    }

    #[test]
    fn index_matches_canonical_order() {
        for (i, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(metric.index(), i);
        }
    }
}
