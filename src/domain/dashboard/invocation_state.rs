//! On-demand consumer lifecycle.
//!
//! `Idle → Loading → {Ready, Error}`. A finished run accepts a new trigger
//! right away; a run in flight does not.

use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::tools::ToolInvocationResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationPhase {
    Idle,
    Loading,
    Ready,
    Error,
}

impl StateMachine for InvocationPhase {
    fn valid_transitions(&self) -> Vec<Self> {
        use InvocationPhase::*;
        match self {
            Idle => vec![Loading],
            Loading => vec![Ready, Error],
            Ready | Error => vec![Loading, Idle],
        }
    }
}

/// What the on-demand consumer currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InvocationState {
    #[default]
    Idle,
    Loading {
        tool: String,
    },
    Ready(ToolInvocationResult),
    Error(String),
}

impl InvocationState {
    pub fn phase(&self) -> InvocationPhase {
        match self {
            InvocationState::Idle => InvocationPhase::Idle,
            InvocationState::Loading { .. } => InvocationPhase::Loading,
            InvocationState::Ready(_) => InvocationPhase::Ready,
            InvocationState::Error(_) => InvocationPhase::Error,
        }
    }

    /// Start a run for `tool`.
    ///
    /// # Errors
    ///
    /// Fails with an invalid transition while a run is already in flight.
    pub fn begin(&self, tool: impl Into<String>) -> Result<InvocationState, ValidationError> {
        self.phase().transition_to(InvocationPhase::Loading)?;
        Ok(InvocationState::Loading { tool: tool.into() })
    }

    /// Finish the run in flight.
    ///
    /// # Errors
    ///
    /// Fails with an invalid transition when no run is in flight.
    pub fn finish(
        &self,
        outcome: Result<ToolInvocationResult, String>,
    ) -> Result<InvocationState, ValidationError> {
        let next = match outcome {
            Ok(result) => InvocationState::Ready(result),
            Err(message) => InvocationState::Error(message),
        };
        self.phase().transition_to(next.phase())?;
        Ok(next)
    }

    /// Clear a finished run.
    pub fn reset(&self) -> Result<InvocationState, ValidationError> {
        self.phase().transition_to(InvocationPhase::Idle)?;
        Ok(InvocationState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == InvocationPhase::Loading
    }

    pub fn result(&self) -> Option<&ToolInvocationResult> {
        match self {
            InvocationState::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            InvocationState::Error(message) => Some(message),
            _ => None,
        }
    }
}
