//! Result records produced by the tool simulator.
//!
//! Every record is built fresh for a single invocation and serialized with
//! camelCase field names, the shape the dashboard widgets read.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, Timestamp};

use super::ToolName;

// ═══════════════════════════════════════════════════════════════════════════
// Tagged result
// ═══════════════════════════════════════════════════════════════════════════

/// Outcome of one tool invocation: `{ tool, input, result }` on the wire.
///
/// `input` is the echoed, normalized input for that tool (defaults applied).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "kebab-case")]
pub enum ToolInvocationResult {
    RollDice {
        input: DiceInput,
        result: DiceRoll,
    },
    PersonApp {
        input: String,
        result: PersonRecord,
    },
    DigitalTwin {
        input: String,
        result: DigitalTwinSnapshot,
    },
    PenetrationTest {
        input: TargetInput,
        result: PenetrationTestReport,
    },
    SecurityScan {
        input: ScanTypeInput,
        result: SecurityScanReport,
    },
    VulnerabilityAssessment {
        input: AssessmentTypeInput,
        result: VulnerabilityAssessmentReport,
    },
}

impl ToolInvocationResult {
    /// The tool that produced this result.
    pub fn tool(&self) -> ToolName {
        match self {
            ToolInvocationResult::RollDice { .. } => ToolName::RollDice,
            ToolInvocationResult::PersonApp { .. } => ToolName::PersonApp,
            ToolInvocationResult::DigitalTwin { .. } => ToolName::DigitalTwin,
            ToolInvocationResult::PenetrationTest { .. } => ToolName::PenetrationTest,
            ToolInvocationResult::SecurityScan { .. } => ToolName::SecurityScan,
            ToolInvocationResult::VulnerabilityAssessment { .. } => {
                ToolName::VulnerabilityAssessment
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Echoed inputs
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceInput {
    pub sides: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetInput {
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanTypeInput {
    pub scan_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentTypeInput {
    pub assessment_type: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// Toy tools
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub value: u32,
    pub sides: u32,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalTwinSnapshot {
    pub id: String,
    pub status: String,
    pub metrics: TwinMetrics,
    pub timestamp: Timestamp,
}

/// Utilisation percentages in `[0, 100)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwinMetrics {
    pub cpu: f64,
    pub memory: f64,
    pub network: f64,
}

// ═══════════════════════════════════════════════════════════════════════════
// Penetration test
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VulnerabilityStatus {
    Mitigated,
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub id: String,
    pub severity: Severity,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: VulnerabilityStatus,
    pub protection: String,
}

/// Counts over a vulnerability list.
///
/// `high + medium + low == total` and `total` equals the list length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeveritySummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub mitigated: usize,
}

impl SeveritySummary {
    pub fn tally(vulnerabilities: &[Vulnerability]) -> Self {
        vulnerabilities
            .iter()
            .fold(SeveritySummary::default(), |mut summary, v| {
                summary.total += 1;
                match v.severity {
                    Severity::High => summary.high += 1,
                    Severity::Medium => summary.medium += 1,
                    Severity::Low => summary.low += 1,
                }
                if v.status == VulnerabilityStatus::Mitigated {
                    summary.mitigated += 1;
                }
                summary
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenetrationTestReport {
    pub target: String,
    pub scan_date: Timestamp,
    pub vulnerabilities_found: usize,
    pub vulnerabilities_mitigated: usize,
    pub protection_rate: Percentage,
    pub vulnerabilities: Vec<Vulnerability>,
    pub summary: SeveritySummary,
    pub timestamp: Timestamp,
}

// ═══════════════════════════════════════════════════════════════════════════
// Security scan
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtectionStatus {
    Active,
    Disabled,
}

/// Roll-up of the protection layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Protected,
    Exposed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protection {
    pub name: String,
    pub status: ProtectionStatus,
    pub blocked: u64,
    pub last24h: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanMetrics {
    pub uptime: String,
    pub response_time: String,
    pub threat_detection_rate: String,
    pub false_positive_rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScanReport {
    pub scan_type: String,
    pub scan_date: Timestamp,
    pub overall_status: OverallStatus,
    pub protection_layers: usize,
    pub total_threats_blocked: u64,
    pub protections: Vec<Protection>,
    pub metrics: ScanMetrics,
    pub timestamp: Timestamp,
}

// ═══════════════════════════════════════════════════════════════════════════
// Vulnerability assessment
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: String,
    pub issues: u32,
    pub protected: bool,
    pub protection: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityAssessmentReport {
    pub assessment_type: String,
    pub assessment_date: Timestamp,
    pub total_issues: u32,
    pub all_protected: bool,
    pub protection_coverage: Percentage,
    pub findings: Vec<Finding>,
    pub recommendations: Vec<String>,
    pub timestamp: Timestamp,
}
