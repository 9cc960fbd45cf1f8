//! ListToolsHandler - Query handler for the tool catalog.

use crate::domain::tools::{ToolDescriptor, ToolName};

/// Handler returning every simulated tool in catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListToolsHandler;

impl ListToolsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> Vec<ToolDescriptor> {
        ToolName::all().iter().copied().map(ToolDescriptor::from).collect()
    }
}
