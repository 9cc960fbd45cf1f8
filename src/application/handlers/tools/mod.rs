//! Tool handlers.

mod invoke_tool;
mod list_tools;

pub use invoke_tool::{
    InvokeToolCommand, InvokeToolError, InvokeToolHandler, InvokeToolResult,
};
pub use list_tools::ListToolsHandler;
