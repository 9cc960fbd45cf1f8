//! TelemetryPoller - Keeps the telemetry panel fresh.
//!
//! Fetches a snapshot immediately, then once per poll interval. Each
//! completed fetch replaces the published [`PollState`].
//!
//! ## Cancellation
//!
//! [`TelemetryPoller::spawn`] returns a [`PollerHandle`] that owns the task.
//! Calling [`PollerHandle::shutdown`] or dropping the handle stops the timer.
//! A fetch still in flight at that point is abandoned and its result never
//! reaches the state.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `poll_interval` | 30s | Time between fetches, at least 1ms |

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;

use crate::config::DashboardConfig;
use crate::domain::dashboard::{PollPhase, PollState};
use crate::domain::telemetry::TelemetrySnapshot;
use crate::ports::DashboardApi;

/// Shortest period the poll loop runs with.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Configuration for the TelemetryPoller.
#[derive(Debug, Clone)]
pub struct TelemetryPollerConfig {
    pub poll_interval: Duration,
}

impl Default for TelemetryPollerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(30),
        }
    }
}

impl TelemetryPollerConfig {
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

impl From<&DashboardConfig> for TelemetryPollerConfig {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            poll_interval: config.poll_interval(),
        }
    }
}

/// Polling consumer of the telemetry endpoint.
pub struct TelemetryPoller {
    api: Arc<dyn DashboardApi>,
    config: TelemetryPollerConfig,
    state: watch::Sender<PollState>,
}

impl TelemetryPoller {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self::with_config(api, TelemetryPollerConfig::default())
    }

    pub fn with_config(api: Arc<dyn DashboardApi>, config: TelemetryPollerConfig) -> Self {
        let (state, _) = watch::channel(PollState::Loading);
        Self { api, config, state }
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<PollState> {
        self.state.subscribe()
    }

    /// Current state.
    pub fn state(&self) -> PollState {
        self.state.borrow().clone()
    }

    /// Fetch once and publish the outcome.
    pub async fn poll_once(&self) -> PollPhase {
        let outcome = self.api.fetch_telemetry().await;
        self.publish(outcome.map_err(|e| e.to_string()))
    }

    fn publish(&self, outcome: Result<TelemetrySnapshot, String>) -> PollPhase {
        if let Err(message) = &outcome {
            tracing::warn!(error = %message, "Telemetry poll failed");
        }
        let next = self.state.borrow().after_poll(outcome);
        let phase = next.phase();
        self.state.send_replace(next);
        tracing::debug!(phase = ?phase, "Telemetry state updated");
        phase
    }

    /// Run the poll loop until shutdown is signalled or the sender is dropped.
    ///
    /// The first fetch starts immediately.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.poll_interval.max(MIN_POLL_INTERVAL));
        interval.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        return;
                    }
                }

                _ = interval.tick() => {
                    tokio::select! {
                        biased;

                        changed = shutdown.changed() => {
                            if changed.is_err() || *shutdown.borrow() {
                                tracing::debug!("Discarding in-flight telemetry fetch");
                                return;
                            }
                        }

                        outcome = self.api.fetch_telemetry() => {
                            self.publish(outcome.map_err(|e| e.to_string()));
                        }
                    }
                }
            }
        }
    }

    /// Start polling in the background.
    pub fn spawn(self) -> PollerHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let state = self.subscribe();
        let task = tokio::spawn(async move { self.run(shutdown_rx).await });

        PollerHandle {
            shutdown: shutdown_tx,
            task: Some(task),
            state,
        }
    }
}

/// Owner of a running poll task. Dropping it cancels the task.
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
    state: watch::Receiver<PollState>,
}

impl PollerHandle {
    pub fn state(&self) -> PollState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PollState> {
        self.state.clone()
    }

    /// Stop polling and wait for the task to exit.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!(error = %e, "Telemetry poller task failed");
            }
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
