//! User-configurable notification settings served by `/api/settings`.

use crate::types::metric::Metric;
use serde::{Deserialize, Serialize};

/// Per-metric alert thresholds. Only the four pollutant metrics carry
/// thresholds; temperature and humidity are never alerted on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub co2: f64,
    pub pm25: f64,
    pub pm10: f64,
    pub voc: f64,
}

impl Thresholds {
    /// The configured threshold for `metric`, or `None` for metrics that
    /// are not alertable.
    pub fn value_for(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Co2 => Some(self.co2),
            Metric::Pm25 => Some(self.pm25),
            Metric::Pm10 => Some(self.pm10),
            Metric::Voc => Some(self.voc),
            Metric::Temperature | Metric::Humidity => None,
        }
    }
}

/// Fallback thresholds, used until the user's stored settings have loaded.
impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            co2: 1000.0,
            pm25: 35.0,
            pm10: 150.0,
            voc: 3.0,
        }
    }
}

/// Stored user settings as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub id: i64,
    pub notifications: bool,
    /// Display format, `"metric"` or `"imperial"`. Presentation-only.
    pub format: String,
    pub thresholds: Thresholds,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Body of `POST /api/settings`. The backend fills in `id` and `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsUpdate {
    pub notifications: bool,
    pub format: String,
    pub thresholds: Thresholds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_wire_shape_round_trips() {
        let json = r#"{
            "id": 3,
            "notifications": true,
            "format": "metric",
            "thresholds": {"co2": 1000, "pm25": 35, "pm10": 150, "voc": 3},
            "user_id": 7
        }"#;
        let settings: UserSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.thresholds, Thresholds::default());
        assert_eq!(settings.user_id, Some(7));
    }

    #[test]
    fn only_pollutants_have_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.value_for(Metric::Co2), Some(1000.0));
        assert_eq!(thresholds.value_for(Metric::Temperature), None);
        assert_eq!(thresholds.value_for(Metric::Humidity), None);
    }
}
