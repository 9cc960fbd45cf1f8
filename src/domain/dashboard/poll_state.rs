//! Polling consumer lifecycle.
//!
//! Starts in `Loading`. Every completed poll replaces the state outright with
//! either `Ready` or `Error`; nothing is merged between polls.

use crate::domain::foundation::StateMachine;
use crate::domain::telemetry::TelemetrySnapshot;
use serde::{Deserialize, Serialize};

/// Phase of the polling consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollPhase {
    /// First fetch not yet completed.
    Loading,
    Ready,
    Error,
}

impl StateMachine for PollPhase {
    fn valid_transitions(&self) -> Vec<Self> {
        use PollPhase::*;
        match self {
            Loading | Ready | Error => vec![Ready, Error],
        }
    }
}

/// What the polling consumer currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PollState {
    #[default]
    Loading,
    Ready(TelemetrySnapshot),
    Error(String),
}

impl PollState {
    pub fn phase(&self) -> PollPhase {
        match self {
            PollState::Loading => PollPhase::Loading,
            PollState::Ready(_) => PollPhase::Ready,
            PollState::Error(_) => PollPhase::Error,
        }
    }

    /// State after a completed poll. The previous content is discarded.
    pub fn after_poll(&self, outcome: Result<TelemetrySnapshot, String>) -> PollState {
        match outcome {
            Ok(snapshot) => PollState::Ready(snapshot),
            Err(message) => PollState::Error(message),
        }
    }

    pub fn snapshot(&self) -> Option<&TelemetrySnapshot> {
        match self {
            PollState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PollState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::TelemetryGenerator;

    #[test]
    fn loading_cannot_return_to_loading() {
        assert!(PollPhase::Loading.transition_to(PollPhase::Loading).is_err());
        assert!(!PollPhase::Ready.can_transition_to(&PollPhase::Loading));
    }

    #[test]
    fn every_phase_can_publish_a_poll_outcome() {
        for phase in [PollPhase::Loading, PollPhase::Ready, PollPhase::Error] {
            assert_eq!(phase.valid_transitions(), vec![PollPhase::Ready, PollPhase::Error]);
        }
    }

    #[test]
    fn every_state_produced_by_after_poll_is_reachable() {
        let snapshot = TelemetryGenerator::new().snapshot();
        let states = [
            PollState::Loading,
            PollState::Ready(snapshot.clone()),
            PollState::Error("boom".to_string()),
        ];
        for state in &states {
            for outcome in [Ok(snapshot.clone()), Err("down".to_string())] {
                let next = state.after_poll(outcome);
                assert!(state.phase().can_transition_to(&next.phase()));
            }
        }
    }

    #[test]
    fn error_replaces_previous_snapshot() {
        let ready = PollState::Ready(TelemetryGenerator::new().snapshot());
        let next = ready.after_poll(Err("Failed to fetch telemetry data".to_string()));
        assert_eq!(next.error(), Some("Failed to fetch telemetry data"));
        assert!(next.snapshot().is_none());
    }

    #[test]
    fn default_is_loading() {
        assert_eq!(PollState::default().phase(), PollPhase::Loading);
    }
}
