//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state transitions
//! across the dashboard consumer lifecycles (polling and on-demand).

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors list the valid targets of each state and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for InvocationPhase {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![Loading],
///             Loading => vec![Ready, Error],
///             // ... etc
///         }
///     }
/// }
///
/// // Usage:
/// let next = current_phase.transition_to(InvocationPhase::Loading)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(
                format!("{:?}", self),
                format!("{:?}", target),
            ))
        }
    }
}
