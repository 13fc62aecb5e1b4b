//! Provides the `HourlyClient` for fetching hour-by-hour aggregates.
//!
//! This client acts as an intermediate builder, obtained via
//! [`Aeris::hourly()`], that fetches raw readings from the backend and
//! collapses them into per-hour mean rows client-side.

use crate::aggregate::hourly::hourly_summaries;
use crate::error::AerisError;
use crate::types::summary::HourlySeries;
use crate::Aeris;
use bon::bon;
use chrono::NaiveDate;

/// A client builder specifically for hourly aggregates.
///
/// Instances are created by calling [`Aeris::hourly()`]. The returned
/// series holds at most [`HOURLY_WINDOW`](crate::HOURLY_WINDOW) rows,
/// oldest first, labelled in station-local time. When the backend holds
/// no readings for the window, a placeholder series is returned and
/// tagged as such; check [`HourlySeries::is_placeholder`] before treating
/// the values as observations.
pub struct HourlyClient<'a> {
    client: &'a Aeris,
}

#[bon]
impl<'a> HourlyClient<'a> {
    /// Creates a new `HourlyClient`.
    ///
    /// This is typically called internally by [`Aeris::hourly()`] and not
    /// directly by users.
    pub(crate) fn new(client: &'a Aeris) -> Self {
        Self { client }
    }

    /// Fetches the most recent hourly aggregates across the full history.
    ///
    /// # Returns
    ///
    /// An [`HourlySeries`] with up to seven rows, oldest first.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aeris::{Aeris, AerisError};
    /// # async fn run() -> Result<(), AerisError> {
    /// # let client = Aeris::new("http://localhost:8000");
    /// let series = client.hourly().latest().await?;
    /// if series.is_placeholder() {
    ///     println!("no data yet, showing simulated values");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn latest(&self) -> Result<HourlySeries, AerisError> {
        let readings = self.client.history().call().await?;
        Ok(hourly_summaries(&readings))
    }

    /// Fetches hourly aggregates restricted to a date window.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.start(NaiveDate)`: **Required.** First day of the window.
    /// * `.end(NaiveDate)`: **Required.** Last day of the window, inclusive.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aeris::{Aeris, AerisError};
    /// # use chrono::NaiveDate;
    /// # async fn run() -> Result<(), AerisError> {
    /// # let client = Aeris::new("http://localhost:8000");
    /// let series = client
    ///     .hourly()
    ///     .range()
    ///     .start(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    ///     .end(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    ///     .call()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HourlySeries, AerisError> {
        let readings = self.client.history().start(start).end(end).call().await?;
        Ok(hourly_summaries(&readings))
    }
}
