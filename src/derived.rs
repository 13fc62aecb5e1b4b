//! Derived metrics: air-quality index and trend direction.
//!
//! Pure functions, no I/O. Everything here is recomputed from the latest
//! aggregates on every cycle; nothing is cached.

use std::fmt;

/// Computes the composite air-quality index from particulate readings.
///
/// `max(pm25 / 12 * 50, pm10 / 55 * 50)`: each particulate is scaled so
/// that its "good" ceiling maps to 50, and the worse of the two wins. The
/// result is not clamped; values above 500 are legitimate. Capping happens
/// at display time only ([`display_aqi`]).
///
/// # Examples
///
/// ```
/// use aeris::calculate_aqi;
///
/// assert_eq!(calculate_aqi(12.0, 0.0), 50.0);
/// assert_eq!(calculate_aqi(0.0, 55.0), 50.0);
/// assert_eq!(calculate_aqi(24.0, 0.0), 100.0);
/// ```
pub fn calculate_aqi(pm25: f64, pm10: f64) -> f64 {
    let pm25_index = pm25 / 12.0 * 50.0;
    let pm10_index = pm10 / 55.0 * 50.0;
    pm25_index.max(pm10_index)
}

/// Rounds an AQI for display and caps it at 999.
///
/// ```
/// use aeris::display_aqi;
///
/// assert_eq!(display_aqi(87.5), 88);
/// assert_eq!(display_aqi(1520.0), 999);
/// ```
pub fn display_aqi(aqi: f64) -> u32 {
    (aqi.round() as i64).clamp(0, 999) as u32
}

/// Qualitative AQI bands. Boundary values belong to the lower (better)
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiCategory {
    Good,
    Moderate,
    Poor,
    VeryPoor,
    Hazardous,
}

impl AqiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "good",
            AqiCategory::Moderate => "moderate",
            AqiCategory::Poor => "poor",
            AqiCategory::VeryPoor => "very-poor",
            AqiCategory::Hazardous => "hazardous",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies an AQI value with inclusive upper bounds: ≤50 good,
/// ≤100 moderate, ≤150 poor, ≤200 very-poor, else hazardous.
///
/// ```
/// use aeris::{classify_aqi, AqiCategory};
///
/// assert_eq!(classify_aqi(50.0), AqiCategory::Good);
/// assert_eq!(classify_aqi(51.0), AqiCategory::Moderate);
/// assert_eq!(classify_aqi(201.0), AqiCategory::Hazardous);
/// ```
pub fn classify_aqi(aqi: f64) -> AqiCategory {
    if aqi <= 50.0 {
        AqiCategory::Good
    } else if aqi <= 100.0 {
        AqiCategory::Moderate
    } else if aqi <= 150.0 {
        AqiCategory::Poor
    } else if aqi <= 200.0 {
        AqiCategory::VeryPoor
    } else {
        AqiCategory::Hazardous
    }
}

/// Direction of a metric over its recent aggregated points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Stable => "stable",
        };
        write!(f, "{label}")
    }
}

/// Trend over the last up-to-5 points of a metric's summary series.
///
/// Compares the first and last point of the window: strictly greater is
/// rising, strictly less is falling, equal is stable. No magnitude
/// weighting. Fewer than two points carry no trend signal.
///
/// ```
/// use aeris::{trend, Trend};
///
/// assert_eq!(trend(&[10.0, 10.0, 10.0, 10.0, 20.0]), Trend::Rising);
/// assert_eq!(trend(&[20.0, 10.0]), Trend::Falling);
/// assert_eq!(trend(&[10.0, 10.0]), Trend::Stable);
/// assert_eq!(trend(&[10.0]), Trend::Stable);
/// ```
pub fn trend(values: &[f64]) -> Trend {
    let window = if values.len() > 5 {
        &values[values.len() - 5..]
    } else {
        values
    };
    match (window.first(), window.last()) {
        (Some(first), Some(last)) if window.len() >= 2 => {
            if last > first {
                Trend::Rising
            } else if last < first {
                Trend::Falling
            } else {
                Trend::Stable
            }
        }
        _ => Trend::Stable,
    }
}
