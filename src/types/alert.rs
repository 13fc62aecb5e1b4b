//! Alert records served by `/api/alerts/recent`.

use crate::types::metric::Metric;
use serde::{Deserialize, Serialize};

/// One historical threshold breach as recorded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    /// The metric that breached its threshold.
    #[serde(rename = "type")]
    pub kind: Metric,
    /// The value observed at breach time.
    pub value: f64,
    /// The threshold configured at breach time.
    pub threshold: f64,
    /// Backend-formatted breach instant; display-only.
    pub timestamp: String,
    #[serde(default)]
    pub acknowledged: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_alert() {
        let alert: Alert = serde_json::from_str(
            r#"{
                "id": 1,
                "type": "co2",
                "value": 1200.0,
                "threshold": 1000.0,
                "timestamp": "2024-05-01T12:00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(alert.kind, Metric::Co2);
        assert_eq!(alert.acknowledged, None);
    }
}
