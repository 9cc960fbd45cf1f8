//! Tools module - The six simulated MCP tools.
//!
//! # Overview
//!
//! `ToolName` is the closed set of tools. `ToolSimulator` dispatches over it
//! and builds a `ToolInvocationResult` per call. The security tools read
//! from immutable literal tables in `catalog`.

mod catalog;
mod records;
mod simulator;
mod tool_name;

pub use records::{
    AssessmentTypeInput, DiceInput, DiceRoll, DigitalTwinSnapshot, Finding, OverallStatus,
    PenetrationTestReport, PersonRecord, Protection, ProtectionStatus, ScanMetrics,
    ScanTypeInput, SecurityScanReport, Severity, SeveritySummary, TargetInput,
    ToolInvocationResult, TwinMetrics, Vulnerability, VulnerabilityAssessmentReport,
    VulnerabilityStatus,
};
pub use simulator::{parse_sides, ToolSimulator, DEFAULT_DICE_SIDES};
pub use tool_name::{ToolDescriptor, ToolName, UnknownToolError};
