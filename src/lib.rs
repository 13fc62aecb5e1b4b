mod aeris;
mod aggregate;
mod alerts;
mod api;
mod clients;
mod derived;
mod error;
mod poll;
mod report;
mod time;
mod types;

pub use aeris::Aeris;
pub use error::AerisError;

pub use api::error::ApiError;
pub use api::session::{Session, SessionState};

pub use clients::daily_client::{DailyClient, DailyReport};
pub use clients::hourly_client::HourlyClient;

pub use aggregate::daily::{daily_summaries, fallback_statistics, range_statistics};
pub use aggregate::hourly::{hourly_summaries, placeholder_series, HOURLY_WINDOW};

pub use alerts::{evaluate_alerts, AlertTracker, MetricAlert, Severity, ALERT_METRICS};
pub use derived::{calculate_aqi, classify_aqi, display_aqi, trend, AqiCategory, Trend};
pub use poll::{PollUpdate, Poller, DEFAULT_POLL_PERIOD};
pub use report::{daily_text_report, hourly_text_report};
pub use time::{station_today, STATION_UTC_OFFSET_HOURS};

pub use types::alert::Alert;
pub use types::auth::{TokenResponse, UserProfile};
pub use types::metric::Metric;
pub use types::reading::{PartialReading, RawReading};
pub use types::settings::{SettingsUpdate, Thresholds, UserSettings};
pub use types::stats::{RangeStatistics, StatsBasis};
pub use types::summary::{AggregateSummary, BucketKey, HourlySeries, SeriesSource};
