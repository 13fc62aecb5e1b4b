//! This module provides the main entry point for talking to an Aeris
//! air-quality backend. It covers authentication, raw sensor readings,
//! server-side statistics, alerts and user settings, and hands out the
//! aggregation sub-clients via [`Aeris::hourly`] and [`Aeris::daily`].

use crate::api::http::ApiClient;
use crate::api::session::Session;
use crate::clients::daily_client::DailyClient;
use crate::clients::hourly_client::HourlyClient;
use crate::error::AerisError;
use crate::time::{window_end, window_start};
use crate::types::alert::Alert;
use crate::types::auth::{TokenResponse, UserProfile};
use crate::types::metric::Metric;
use crate::types::reading::{PartialReading, RawReading};
use crate::types::settings::{SettingsUpdate, UserSettings};
use crate::types::stats::RangeStatistics;
use bon::bon;
use chrono::NaiveDate;
use std::sync::Arc;

/// The main client struct for accessing an Aeris backend.
///
/// This struct wraps the HTTP plumbing and the authentication session and
/// exposes one method per backend operation. Protected endpoints require a
/// valid session; log in with [`Aeris::login`] or construct the client with
/// an existing session via [`Aeris::with_session`].
///
/// # Examples
///
/// ```no_run
/// # use aeris::{Aeris, AerisError};
/// # async fn run() -> Result<(), AerisError> {
/// let client = Aeris::new("http://localhost:8000");
/// client.login("alice@example.com", "hunter2").await?;
/// let reading = client.current().await?;
/// println!("CO2 is now {:?} ppm", reading.co2);
/// # Ok(())
/// # }
/// ```
pub struct Aeris {
    api: ApiClient,
}

#[bon]
impl Aeris {
    /// Creates a new client for the backend at `base_url` with no session.
    ///
    /// A trailing slash on `base_url` is tolerated. Until [`Aeris::login`]
    /// succeeds, every protected call fails fast with
    /// [`ApiError::NoSession`](crate::ApiError::NoSession).
    ///
    /// # Examples
    ///
    /// ```
    /// use aeris::Aeris;
    ///
    /// let client = Aeris::new("http://localhost:8000");
    /// assert!(!client.session().is_valid());
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_session(base_url, Arc::new(Session::anonymous()))
    }

    /// Creates a new client reusing an existing [`Session`].
    ///
    /// Useful when a token was persisted across restarts, or when several
    /// clients should share one session so that an expiry observed by one
    /// is visible to all.
    ///
    /// # Examples
    ///
    /// ```
    /// use aeris::{Aeris, Session};
    /// use std::sync::Arc;
    ///
    /// let session = Arc::new(Session::with_token("stored-token"));
    /// let client = Aeris::with_session("http://localhost:8000", session);
    /// assert!(client.session().is_valid());
    /// ```
    pub fn with_session(base_url: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            api: ApiClient::new(base_url, session),
        }
    }

    /// The authentication session shared by all calls on this client.
    pub fn session(&self) -> &Arc<Session> {
        self.api.session()
    }

    /// Logs in with email and password.
    ///
    /// On success the received token is stored in the session and all
    /// protected endpoints become available.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`](crate::ApiError::Unauthorized) on
    /// bad credentials, or a transport/decode error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aeris::{Aeris, AerisError};
    /// # async fn run() -> Result<(), AerisError> {
    /// let client = Aeris::new("http://localhost:8000");
    /// client.login("alice@example.com", "hunter2").await?;
    /// assert!(client.session().is_valid());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, AerisError> {
        Ok(self.api.login(email, password).await?)
    }

    /// Registers a new account. Does not log in; call [`Aeris::login`]
    /// afterwards.
    pub async fn register(&self, email: &str, password: &str) -> Result<UserProfile, AerisError> {
        Ok(self.api.register(email, password).await?)
    }

    /// Fetches the profile of the authenticated user.
    pub async fn me(&self) -> Result<UserProfile, AerisError> {
        Ok(self.api.me().await?)
    }

    /// Discards the stored token. Purely local; the backend keeps no
    /// server-side session state.
    pub fn logout(&self) {
        self.session().clear();
    }

    /// Fetches the most recent raw reading from the station.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aeris::{Aeris, AerisError};
    /// # async fn run() -> Result<(), AerisError> {
    /// # let client = Aeris::new("http://localhost:8000");
    /// let reading = client.current().await?;
    /// println!("{}: PM2.5 {:?}", reading.timestamp, reading.pm25);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn current(&self) -> Result<RawReading, AerisError> {
        Ok(self.api.get_json("/api/sensors/current", &[]).await?)
    }

    /// Fetches raw readings, optionally restricted to a date window.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.start(NaiveDate)`: Optional. First day of the window (station-local,
    ///   inclusive from midnight). Omitted: no lower bound.
    /// * `.end(NaiveDate)`: Optional. Last day of the window (station-local,
    ///   inclusive through 23:59:59). Omitted: no upper bound.
    ///
    /// # Returns
    ///
    /// All matching readings, in the order the backend returns them.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aeris::{Aeris, AerisError};
    /// # use chrono::NaiveDate;
    /// # async fn run() -> Result<(), AerisError> {
    /// # let client = Aeris::new("http://localhost:8000");
    /// let readings = client
    ///     .history()
    ///     .start(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    ///     .end(NaiveDate::from_ymd_opt(2024, 5, 7).unwrap())
    ///     .call()
    ///     .await?;
    /// println!("{} readings in the first week of May", readings.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn history(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<RawReading>, AerisError> {
        let query = history_query(start, end);
        Ok(self.api.get_json("/api/sensors/history", &query).await?)
    }

    /// Fetches server-computed statistics for one metric over a date window.
    ///
    /// The backend computes population statistics over every raw reading in
    /// the window. For a version that falls back to client-side statistics
    /// over daily means when this endpoint fails, see
    /// [`DailyClient::report`](crate::DailyClient).
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.metric(Metric)`: **Required.** The metric to summarize.
    /// * `.start(NaiveDate)`: **Required.** First day of the window.
    /// * `.end(NaiveDate)`: **Required.** Last day of the window, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`AerisError::StatisticsUnavailable`] when the window holds
    /// no readings for the metric (the backend reports nulls).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aeris::{Aeris, AerisError, Metric};
    /// # use chrono::NaiveDate;
    /// # async fn run() -> Result<(), AerisError> {
    /// # let client = Aeris::new("http://localhost:8000");
    /// let stats = client
    ///     .stats()
    ///     .metric(Metric::Co2)
    ///     .start(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    ///     .end(NaiveDate::from_ymd_opt(2024, 5, 7).unwrap())
    ///     .call()
    ///     .await?;
    /// println!("CO2 mean: {:.1} ppm (σ {:.1})", stats.mean, stats.stddev);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn stats(
        &self,
        metric: Metric,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RangeStatistics, AerisError> {
        let query = stats_query(metric, start, end);
        let resp: crate::types::stats::StatsResponse =
            self.api.get_json("/api/stats", &query).await?;
        resp.into_statistics()
            .ok_or(AerisError::StatisticsUnavailable { metric })
    }

    /// Fetches the reduced per-reading summary rows for a date window.
    ///
    /// The summary endpoint returns only the timestamp, temperature,
    /// humidity and particulate fields of each reading, which keeps report
    /// payloads small.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.start(NaiveDate)`: **Required.** First day of the window.
    /// * `.end(NaiveDate)`: **Required.** Last day of the window, inclusive.
    #[builder]
    pub async fn summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PartialReading>, AerisError> {
        let query = summary_query(start, end);
        Ok(self.api.get_json("/api/sensors/summary", &query).await?)
    }

    /// Fetches the alerts most recently recorded by the backend, newest
    /// first.
    pub async fn recent_alerts(&self) -> Result<Vec<Alert>, AerisError> {
        Ok(self.api.get_json("/api/alerts/recent", &[]).await?)
    }

    /// Fetches the authenticated user's settings, including the alert
    /// thresholds used by [`evaluate_alerts`](crate::evaluate_alerts).
    pub async fn settings(&self) -> Result<UserSettings, AerisError> {
        Ok(self.api.get_json("/api/settings", &[]).await?)
    }

    /// Replaces the authenticated user's settings and returns the stored
    /// result.
    pub async fn update_settings(
        &self,
        update: &SettingsUpdate,
    ) -> Result<UserSettings, AerisError> {
        Ok(self.api.post_json("/api/settings", update).await?)
    }

    /// Returns a client for fetching hourly aggregates.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aeris::{Aeris, AerisError};
    /// # async fn run() -> Result<(), AerisError> {
    /// # let client = Aeris::new("http://localhost:8000");
    /// let series = client.hourly().latest().await?;
    /// for row in &series.rows {
    ///     println!("{}: {:?}", row.key, row.temperature);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn hourly(&self) -> HourlyClient<'_> {
        HourlyClient::new(self)
    }

    /// Returns a client for fetching daily aggregates and range reports.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aeris::{Aeris, AerisError};
    /// # use chrono::NaiveDate;
    /// # async fn run() -> Result<(), AerisError> {
    /// # let client = Aeris::new("http://localhost:8000");
    /// let report = client
    ///     .daily()
    ///     .report()
    ///     .start(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    ///     .end(NaiveDate::from_ymd_opt(2024, 5, 7).unwrap())
    ///     .call()
    ///     .await?;
    /// println!("{} days covered", report.days.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn daily(&self) -> DailyClient<'_> {
        DailyClient::new(self)
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }
}

/// Query for `/api/sensors/history`. The history and stats endpoints take
/// `start`/`end`; only the summary endpoint uses `start_time`/`end_time`.
fn history_query(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(start) = start {
        query.push(("start", window_start(start)));
    }
    if let Some(end) = end {
        query.push(("end", window_end(end)));
    }
    query
}

/// Query for `/api/stats`. All three parameters are required server-side.
fn stats_query(metric: Metric, start: NaiveDate, end: NaiveDate) -> [(&'static str, String); 3] {
    [
        ("metric", metric.id().to_string()),
        ("start", window_start(start)),
        ("end", window_end(end)),
    ]
}

/// Query for `/api/sensors/summary`, the one endpoint with the long
/// parameter names.
fn summary_query(start: NaiveDate, end: NaiveDate) -> [(&'static str, String); 2] {
    [
        ("start_time", window_start(start)),
        ("end_time", window_end(end)),
    ]
}
