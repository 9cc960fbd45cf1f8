//! Dashboard module - View state of the dashboard consumers.
//!
//! - `PollState` - telemetry panel refreshed on a timer
//! - `InvocationState` - tool tester driven by explicit triggers

mod invocation_state;
mod poll_state;

pub use invocation_state::{InvocationPhase, InvocationState};
pub use poll_state::{PollPhase, PollState};
