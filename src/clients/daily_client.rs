//! Provides the `DailyClient` for fetching day-by-day aggregates and
//! building range reports.
//!
//! Obtained via [`Aeris::daily()`]. A report combines per-day mean rows
//! with per-metric range statistics. Statistics come from the backend's
//! stats endpoint when it answers; when it fails or reports an empty
//! window, they are recomputed client-side over the per-day means and
//! tagged with [`StatsBasis::DailyMeans`](crate::StatsBasis).

use crate::aggregate::daily::{daily_summaries, fallback_statistics};
use crate::error::AerisError;
use crate::types::metric::Metric;
use crate::types::stats::RangeStatistics;
use crate::types::summary::AggregateSummary;
use crate::Aeris;
use bon::bon;
use chrono::NaiveDate;
use log::warn;
use std::collections::BTreeMap;

/// Per-day aggregates and per-metric range statistics for one date window.
///
/// Days with no readings are simply absent from `days`. A metric is absent
/// from `statistics` when neither the backend nor the fallback could
/// produce a value for it.
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub days: Vec<AggregateSummary>,
    pub statistics: BTreeMap<Metric, RangeStatistics>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A client builder specifically for daily aggregates.
///
/// Instances are created by calling [`Aeris::daily()`].
pub struct DailyClient<'a> {
    client: &'a Aeris,
}

#[bon]
impl<'a> DailyClient<'a> {
    /// Creates a new `DailyClient`.
    ///
    /// This is typically called internally by [`Aeris::daily()`] and not
    /// directly by users.
    pub(crate) fn new(client: &'a Aeris) -> Self {
        Self { client }
    }

    /// Fetches the per-day mean rows for a date window, oldest first.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.start(NaiveDate)`: **Required.** First day of the window.
    /// * `.end(NaiveDate)`: **Required.** Last day of the window, inclusive.
    #[builder]
    pub async fn summaries(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AggregateSummary>, AerisError> {
        let readings = self.client.history().start(start).end(end).call().await?;
        Ok(daily_summaries(&readings))
    }

    /// Builds a full range report: per-day means plus range statistics for
    /// the requested metrics.
    ///
    /// Statistics are requested from the backend per metric. A failed or
    /// empty answer falls back to client-side statistics over the per-day
    /// means; if those are empty too the metric is omitted from the report.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.start(NaiveDate)`: **Required.** First day of the window.
    /// * `.end(NaiveDate)`: **Required.** Last day of the window, inclusive.
    /// * `.metrics(Vec<Metric>)`: Optional. Metrics to include in the
    ///   statistics table. Defaults to all six.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aeris::{Aeris, AerisError, Metric};
    /// # use chrono::NaiveDate;
    /// # async fn run() -> Result<(), AerisError> {
    /// # let client = Aeris::new("http://localhost:8000");
    /// let report = client
    ///     .daily()
    ///     .report()
    ///     .start(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    ///     .end(NaiveDate::from_ymd_opt(2024, 5, 7).unwrap())
    ///     .metrics(vec![Metric::Pm25, Metric::Pm10])
    ///     .call()
    ///     .await?;
    /// for (metric, stats) in &report.statistics {
    ///     println!("{}: {:.1}..{:.1}", metric, stats.min, stats.max);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        metrics: Option<Vec<Metric>>,
    ) -> Result<DailyReport, AerisError> {
        let metrics = metrics.unwrap_or_else(|| Metric::ALL.to_vec());

        let readings = self.client.history().start(start).end(end).call().await?;
        let days = daily_summaries(&readings);

        let mut statistics = BTreeMap::new();
        for metric in metrics {
            let stats = match self
                .client
                .stats()
                .metric(metric)
                .start(start)
                .end(end)
                .call()
                .await
            {
                Ok(stats) => Some(stats),
                Err(err) => {
                    warn!(
                        "Statistics query for {} failed ({}); recomputing from daily means",
                        metric, err
                    );
                    fallback_statistics(&days, metric)
                }
            };
            if let Some(stats) = stats {
                statistics.insert(metric, stats);
            }
        }

        Ok(DailyReport {
            days,
            statistics,
            start,
            end,
        })
    }
}
