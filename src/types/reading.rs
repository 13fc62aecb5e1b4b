//! Wire types for raw sensor samples.

use crate::types::metric::Metric;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw sensor sample as returned by `/api/sensors/current` and
/// `/api/sensors/history`.
///
/// Readings are immutable once fetched; the aggregators consume them and
/// nothing is cached across refresh cycles. A metric the station failed to
/// report arrives as `null` and stays `None`; it never contributes to a
/// bucket mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReading {
    /// Sample instant. The backend emits naive station-relative timestamps;
    /// see [`lenient_timestamp`] for the accepted shapes.
    #[serde(with = "lenient_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub co2: Option<f64>,
    #[serde(default)]
    pub pm25: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub voc: Option<f64>,
}

impl RawReading {
    /// The sampled value for `metric`, if the station reported one.
    pub fn value(&self, metric: Metric) -> Option<f64> {
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

/// The reduced sample shape served by `/api/sensors/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialReading {
    #[serde(with = "lenient_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub pm25: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
}

/// Timestamp (de)serialization tolerant of the backend's two shapes.
///
/// The FastAPI backend emits naive `%Y-%m-%dT%H:%M:%S` strings; test
/// fixtures and other tooling emit RFC 3339. RFC 3339 is tried first, then
/// the naive form is taken as UTC. Serialization always writes RFC 3339.
pub(crate) mod lenient_timestamp {
    use super::*;
    use serde::{de, Deserializer, Serializer};

    const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&ts.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(de)?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, NAIVE_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|_| de::Error::custom(format!("unrecognized timestamp '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn deserializes_backend_naive_timestamp() {
        let reading: RawReading = serde_json::from_str(
            r#"{
                "timestamp": "2024-05-01T12:30:00",
                "temperature": 23.4,
                "humidity": 51.0,
                "co2": 640.0,
                "pm25": 18.2,
                "pm10": 33.0,
                "voc": 1.1
            }"#,
        )
        .unwrap();
        assert_eq!(
            reading.timestamp,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
        );
        assert_eq!(reading.value(Metric::Co2), Some(640.0));
    }

    #[test]
    fn deserializes_rfc3339_timestamp() {
        let reading: RawReading =
            serde_json::from_str(r#"{"timestamp": "2024-05-01T12:30:00+03:00"}"#).unwrap();
        assert_eq!(
            reading.timestamp,
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn missing_metrics_stay_none() {
        let reading: RawReading =
            serde_json::from_str(r#"{"timestamp": "2024-05-01T12:30:00", "pm25": null}"#).unwrap();
        assert_eq!(reading.pm25, None);
        assert_eq!(reading.value(Metric::Voc), None);
    }
}
