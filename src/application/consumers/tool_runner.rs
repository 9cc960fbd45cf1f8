//! ToolRunner - On-demand consumer behind the tool tester.
//!
//! Each trigger moves the state to `Loading`, calls the API and settles in
//! `Ready` or `Error`. Triggers arriving while a call is in flight are
//! rejected rather than queued.
//!
//! A trigger future dropped mid-call settles the state in `Error` with
//! [`CANCELLED_MESSAGE`], so the runner accepts the next trigger.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

use crate::domain::dashboard::InvocationState;
use crate::domain::tools::ToolInvocationResult;
use crate::ports::DashboardApi;

/// Error shown when a call is abandoned before the API answers.
pub const CANCELLED_MESSAGE: &str = "Tool call cancelled";

/// Why a trigger was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    #[error("Please select a tool")]
    NoToolSelected,

    #[error("A tool call is already in progress")]
    Busy,
}

/// On-demand consumer of the tool endpoint.
pub struct ToolRunner {
    api: Arc<dyn DashboardApi>,
    state: watch::Sender<InvocationState>,
}

impl ToolRunner {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        let (state, _) = watch::channel(InvocationState::Idle);
        Self { api, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<InvocationState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> InvocationState {
        self.state.borrow().clone()
    }

    /// Run `tool` with `input` and return the settled state.
    ///
    /// # Errors
    ///
    /// Rejects a blank tool name, and any trigger while a call is in flight.
    /// API failures are not errors here; they land in `InvocationState::Error`.
    pub async fn trigger(
        &self,
        tool: &str,
        input: Option<&str>,
    ) -> Result<InvocationState, TriggerError> {
        if tool.trim().is_empty() {
            return Err(TriggerError::NoToolSelected);
        }

        let mut accepted = false;
        self.state.send_if_modified(|state| match state.begin(tool) {
            Ok(next) => {
                *state = next;
                accepted = true;
                true
            }
            Err(_) => false,
        });
        if !accepted {
            tracing::debug!(tool = %tool, "Trigger rejected while a call is in flight");
            return Err(TriggerError::Busy);
        }

        let run = InFlight::new(&self.state);
        let outcome = self
            .api
            .invoke_tool(tool, input)
            .await
            .map_err(|e| e.to_string());
        if let Err(message) = &outcome {
            tracing::warn!(tool = %tool, error = %message, "Tool call failed");
        }

        run.settle(outcome);
        Ok(self.state())
    }

    /// Clear a finished call. Does nothing while a call is in flight.
    pub fn reset(&self) {
        self.state.send_if_modified(|state| match state.reset() {
            Ok(next) => {
                *state = next;
                true
            }
            Err(_) => false,
        });
    }
}

/// Settles the call in flight, as cancelled if dropped unsettled.
struct InFlight<'a> {
    state: &'a watch::Sender<InvocationState>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a watch::Sender<InvocationState>) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self, outcome: Result<ToolInvocationResult, String>) {
        self.settled = true;
        finish(self.state, outcome);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!("Tool call dropped before completion");
            finish(self.state, Err(CANCELLED_MESSAGE.to_string()));
        }
    }
}

fn finish(state: &watch::Sender<InvocationState>, outcome: Result<ToolInvocationResult, String>) {
    state.send_modify(|state| match state.finish(outcome) {
        Ok(next) => *state = next,
        Err(e) => tracing::error!(error = %e, "Tool runner state out of sync"),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::ThreadRngSource;
    use crate::domain::dashboard::InvocationPhase;
    use crate::domain::telemetry::TelemetrySnapshot;
    use crate::domain::tools::{ToolName, ToolSimulator};
    use crate::ports::DashboardClientError;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Semaphore;

    /// Runs the simulator in-process; each call waits for a permit.
    struct GatedApi {
        simulator: ToolSimulator,
        gate: Semaphore,
    }

    impl GatedApi {
        fn open() -> Self {
            Self::with_permits(Semaphore::MAX_PERMITS)
        }

        fn closed() -> Self {
            Self::with_permits(0)
        }

        fn with_permits(permits: usize) -> Self {
            Self {
                simulator: ToolSimulator::new(Arc::new(ThreadRngSource::new())),
                gate: Semaphore::new(permits),
            }
        }
    }

    #[async_trait]
    impl DashboardApi for GatedApi {
        async fn fetch_telemetry(&self) -> Result<TelemetrySnapshot, DashboardClientError> {
            unreachable!("tool runner never fetches telemetry")
        }

        async fn invoke_tool(
            &self,
            tool: &str,
            input: Option<&str>,
        ) -> Result<ToolInvocationResult, DashboardClientError> {
            let _permit = self
                .gate
                .acquire()
                .await
                .map_err(|e| DashboardClientError::Transport(e.to_string()))?;
            self.simulator
                .invoke(tool, input)
                .map_err(|e| DashboardClientError::api(500, e.to_string()))
        }
    }

    #[tokio::test]
    async fn successful_call_ends_ready() {
        let runner = ToolRunner::new(Arc::new(GatedApi::open()));
        let state = runner.trigger("penetration-test", Some("api")).await.unwrap();

        assert_eq!(state.phase(), InvocationPhase::Ready);
        assert_eq!(state.result().unwrap().tool(), ToolName::PenetrationTest);
    }

    #[tokio::test]
    async fn api_error_ends_in_error_with_message() {
        let runner = ToolRunner::new(Arc::new(GatedApi::open()));
        let state = runner.trigger("laser-cannon", None).await.unwrap();

        assert_eq!(state.error(), Some("Unknown tool: laser-cannon"));
    }

    #[tokio::test]
    async fn blank_tool_is_rejected_before_calling() {
        let runner = ToolRunner::new(Arc::new(GatedApi::closed()));
        assert_eq!(
            runner.trigger(" ", None).await.unwrap_err(),
            TriggerError::NoToolSelected
        );
        assert_eq!(runner.state(), InvocationState::Idle);
    }

    #[tokio::test]
    async fn trigger_while_loading_is_busy() {
        let api = Arc::new(GatedApi::closed());
        let runner = Arc::new(ToolRunner::new(api.clone()));
        let mut rx = runner.subscribe();

        let first = {
            let runner = runner.clone();
            tokio::spawn(async move { runner.trigger("roll-dice", Some("20")).await })
        };

        tokio::time::timeout(Duration::from_secs(1), async {
            while !rx.borrow_and_update().is_loading() {
                rx.changed().await.unwrap();
            }
        })
        .await
        .unwrap();

        assert_eq!(
            runner.trigger("person-app", None).await.unwrap_err(),
            TriggerError::Busy
        );

        api.gate.add_permits(1);
        let settled = first.await.unwrap().unwrap();
        assert_eq!(settled.result().unwrap().tool(), ToolName::RollDice);
    }

    #[tokio::test]
    async fn abandoned_trigger_does_not_leave_runner_busy() {
        let api = Arc::new(GatedApi::closed());
        let runner = ToolRunner::new(api.clone());

        let abandoned =
            tokio::time::timeout(Duration::from_millis(20), runner.trigger("roll-dice", None)).await;
        assert!(abandoned.is_err());
        assert_eq!(runner.state(), InvocationState::Error(CANCELLED_MESSAGE.to_string()));

        api.gate.add_permits(1);
        let state = runner.trigger("roll-dice", Some("12")).await.unwrap();
        assert_eq!(state.result().unwrap().tool(), ToolName::RollDice);

        runner.reset();
        assert_eq!(runner.state(), InvocationState::Idle);
    }

    #[tokio::test]
    async fn finished_call_accepts_new_trigger_and_reset() {
        let runner = ToolRunner::new(Arc::new(GatedApi::open()));
        runner.trigger("roll-dice", None).await.unwrap();
        let state = runner.trigger("digital-twin", Some("twin-9")).await.unwrap();
        assert_eq!(state.result().unwrap().tool(), ToolName::DigitalTwin);

        runner.reset();
        assert_eq!(runner.state(), InvocationState::Idle);
    }
}
