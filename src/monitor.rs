use crate::feed::FeedStore;
use crate::generator::ThreatGenerator;
use crate::models::SecurityEvent;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{debug, info};

/// Drives the generator on a fixed cadence while monitoring is active.
///
/// Two states: stopped (initial) and running. `start` schedules recurring
/// ticks, `stop` cancels future ticks; both are idempotent. A tick that has
/// already begun completes its ingest before cancellation takes effect, since
/// the task only yields between ticks.
pub struct Monitor {
    feed: Arc<Mutex<FeedStore>>,
    generator: Arc<Mutex<ThreatGenerator>>,
    tx: broadcast::Sender<SecurityEvent>,
    ticker: Option<JoinHandle<()>>,
}

impl Monitor {
    pub fn new(feed: Arc<Mutex<FeedStore>>, tx: broadcast::Sender<SecurityEvent>) -> Self {
        Self {
            feed,
            generator: Arc::new(Mutex::new(ThreatGenerator::new())),
            tx,
            ticker: None,
        }
    }

    /// Begins ticking once per `interval`. A no-op while already running;
    /// rejects a zero interval.
    pub fn start(&mut self, interval: Duration) -> anyhow::Result<()> {
        if interval.is_zero() {
            anyhow::bail!("invalid monitor interval: 0ms (must be positive)");
        }
        if self.is_active() {
            debug!("monitor already running; ignoring duplicate start");
            return Ok(());
        }

        let feed = Arc::clone(&self.feed);
        let generator = Arc::clone(&self.generator);
        let tx = self.tx.clone();
        self.ticker = Some(tokio::spawn(async move {
            loop {
                sleep(interval).await;

                let event = {
                    let mut generator = generator.lock().unwrap_or_else(|e| e.into_inner());
                    generator.tick()
                };
                {
                    let mut feed = feed.lock().unwrap_or_else(|e| e.into_inner());
                    feed.ingest(event.clone());
                }
                if let Err(err) = tx.send(event) {
                    debug!(
                        event_id = err.0.id,
                        "no watch subscribers; event retained in feed only"
                    );
                }
            }
        }));
        info!(interval_ms = interval.as_millis() as u64, "monitoring started");
        Ok(())
    }

    /// Cancels future ticks. Idempotent when already stopped.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            info!("monitoring stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.ticker
            .as_ref()
            .is_some_and(|ticker| !ticker.is_finished())
    }
}

impl Drop for Monitor {
    fn drop(&mut self) {
        self.stop();
    }
}
