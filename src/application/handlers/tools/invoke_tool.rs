//! InvokeToolHandler - Command handler for running a simulated tool.
//!
//! Validates the request, then delegates to the stateless simulator.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::tools::{ToolInvocationResult, ToolSimulator};
use crate::ports::RandomSource;

/// Request to invoke a tool.
#[derive(Debug, Clone, Default)]
pub struct InvokeToolCommand {
    /// Wire name of the tool. Missing or empty is rejected.
    pub tool: Option<String>,
    /// Free-form input. Empty counts as absent.
    pub input: Option<String>,
}

impl InvokeToolCommand {
    pub fn new(tool: impl Into<String>, input: Option<String>) -> Self {
        Self {
            tool: Some(tool.into()),
            input,
        }
    }
}

/// Errors from tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeToolError {
    #[error("Tool name is required")]
    MissingTool,

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The request body could not be read as a tool request.
    #[error("{0}")]
    MalformedBody(String),
}

pub type InvokeToolResult = ToolInvocationResult;

/// Handler for invoking simulated tools.
pub struct InvokeToolHandler {
    simulator: ToolSimulator,
}

impl InvokeToolHandler {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self {
            simulator: ToolSimulator::new(random),
        }
    }

    pub fn handle(&self, cmd: InvokeToolCommand) -> Result<InvokeToolResult, InvokeToolError> {
        let tool = cmd
            .tool
            .filter(|t| !t.is_empty())
            .ok_or(InvokeToolError::MissingTool)?;

        let result = self
            .simulator
            .invoke(&tool, cmd.input.as_deref())
            .map_err(|e| InvokeToolError::UnknownTool(e.name))?;

        tracing::debug!(tool = %tool, "Tool invoked");
        Ok(result)
    }
}
