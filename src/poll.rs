//! Background polling of the current-reading endpoint.
//!
//! [`Poller::spawn`] starts a tokio task that fetches the latest reading
//! immediately and then once per period, publishing every outcome on a
//! watch channel. Fetches run concurrently with the tick loop, so a slow
//! response never delays the next tick; a sequence number gates the
//! channel so a late response can never overwrite a newer one.

use crate::error::AerisError;
use crate::types::reading::RawReading;
use crate::Aeris;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Default polling period.
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(30);

/// One published polling outcome. Errors are published too, so
/// subscribers can surface a stale-data state instead of showing the
/// last good value as current.
#[derive(Debug, Clone)]
pub struct PollUpdate {
    /// Monotonically increasing fetch number, starting at 1.
    pub seq: u64,
    pub result: Result<RawReading, Arc<AerisError>>,
}

/// Handle to a running polling task.
///
/// Dropping the handle does not stop the task; call [`Poller::shutdown`]
/// for a clean stop.
///
/// # Examples
///
/// ```no_run
/// # use aeris::{Aeris, Poller, DEFAULT_POLL_PERIOD};
/// # use std::sync::Arc;
/// # async fn run() {
/// let client = Arc::new(Aeris::new("http://localhost:8000"));
/// let poller = Poller::spawn(client, DEFAULT_POLL_PERIOD);
/// let mut updates = poller.subscribe();
///
/// while updates.changed().await.is_ok() {
///     if let Some(update) = updates.borrow().as_ref() {
///         match &update.result {
///             Ok(reading) => println!("#{}: {:?}", update.seq, reading.co2),
///             Err(err) => eprintln!("#{}: {}", update.seq, err),
///         }
///     }
/// }
/// # }
/// ```
pub struct Poller {
    cancel: CancellationToken,
    tx: watch::Sender<Option<PollUpdate>>,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Starts polling `client.current()` every `period`.
    ///
    /// The first fetch happens immediately. Ticks that land while a fetch
    /// is still in flight start a new fetch rather than waiting.
    pub fn spawn(client: Arc<Aeris>, period: Duration) -> Poller {
        let cancel = CancellationToken::new();
        let (tx, _) = watch::channel(None);

        let loop_cancel = cancel.clone();
        let loop_tx = tx.clone();
        let handle = tokio::spawn(async move {
            info!("Polling current reading every {:?}", period);
            let mut seq: u64 = 0;
            let mut ticks = tokio::time::interval(period);
            ticks.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = loop_cancel.cancelled() => {
                        info!("Polling stopped");
                        return;
                    }
                    _ = ticks.tick() => {}
                }

                seq += 1;
                let client = Arc::clone(&client);
                let tx = loop_tx.clone();
                let cancel = loop_cancel.clone();
                tokio::spawn(async move {
                    let result = tokio::select! {
                        _ = cancel.cancelled() => return,
                        result = client.current() => result,
                    };
                    if let Err(err) = &result {
                        warn!("Fetch #{} failed: {}", seq, err);
                    }
                    let update = PollUpdate {
                        seq,
                        result: result.map_err(Arc::new),
                    };
                    if !publish(&tx, update) {
                        debug!("Fetch #{} finished after a newer one; dropped", seq);
                    }
                });
            }
        });

        Poller { cancel, tx, handle }
    }

    /// A receiver for published updates. Starts out holding `None` until
    /// the first fetch completes.
    pub fn subscribe(&self) -> watch::Receiver<Option<PollUpdate>> {
        self.tx.subscribe()
    }

    /// Stops the tick loop and any in-flight fetch, then waits for the
    /// task to finish.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        let _ = self.handle.await;
    }
}

/// Publishes an update unless a newer one already landed. Returns whether
/// the update was accepted. The check and the write happen under the
/// watch channel's own lock, so two concurrent fetches cannot publish
/// out of order.
fn publish(tx: &watch::Sender<Option<PollUpdate>>, update: PollUpdate) -> bool {
    tx.send_if_modified(|slot| {
        let newer = slot.as_ref().map_or(true, |prev| update.seq > prev.seq);
        if newer {
            *slot = Some(update);
        }
        newer
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn update(seq: u64) -> PollUpdate {
        PollUpdate {
            seq,
            result: Ok(RawReading {
                timestamp: Utc::now(),
                temperature: Some(seq as f64),
                humidity: None,
                co2: None,
                pm25: None,
                pm10: None,
                voc: None,
            }),
        }
    }

    #[test]
    fn stale_update_never_overwrites_a_newer_one() {
        let (tx, rx) = watch::channel(None);
        assert!(publish(&tx, update(2)));
        assert!(!publish(&tx, update(1)));
        assert_eq!(rx.borrow().as_ref().unwrap().seq, 2);
    }

    #[test]
    fn updates_apply_in_sequence_order() {
        let (tx, rx) = watch::channel(None);
        assert!(publish(&tx, update(1)));
        assert!(publish(&tx, update(2)));
        assert_eq!(rx.borrow().as_ref().unwrap().seq, 2);
    }

    #[tokio::test]
    async fn shutdown_stops_the_task() {
        let client = Arc::new(Aeris::new("http://localhost:1"));
        let poller = Poller::spawn(client, Duration::from_secs(3600));
        poller.shutdown().await;
    }
}
