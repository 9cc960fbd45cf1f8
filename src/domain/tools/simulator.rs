//! Tool Simulator - Canned responses for the six mock MCP tools.
//!
//! Each invocation is a pure function of the tool, its optional input, the
//! wall clock and a [`RandomSource`]. Nothing is stored between calls.
//!
//! # Input handling
//!
//! Input is permissive: an empty string counts as absent, and `roll-dice`
//! falls back to a six-sided die whenever the input does not start with a
//! positive integer.

use std::sync::Arc;

use crate::domain::foundation::{Percentage, Timestamp};
use crate::ports::RandomSource;

use super::catalog::{self, FINDINGS, PROTECTIONS, RECOMMENDATIONS, VULNERABILITIES};
use super::records::{
    AssessmentTypeInput, DiceInput, DiceRoll, DigitalTwinSnapshot, Finding, OverallStatus,
    PenetrationTestReport, PersonRecord, Protection, ProtectionStatus, ScanTypeInput,
    SecurityScanReport, SeveritySummary, TargetInput, ToolInvocationResult, TwinMetrics,
    Vulnerability, VulnerabilityAssessmentReport,
};
use super::{ToolName, UnknownToolError};

pub const DEFAULT_DICE_SIDES: u32 = 6;
pub const DEFAULT_ECHO_INPUT: &str = "default";
pub const DEFAULT_PERSON_NAME: &str = "John Doe";
pub const DEFAULT_EMAIL_LOCAL_PART: &str = "john";
pub const DEFAULT_PERSON_AGE: u32 = 30;
pub const DEFAULT_TWIN_ID: &str = "twin-001";
pub const DEFAULT_PENTEST_TARGET: &str = "web-application";
pub const DEFAULT_SCAN_TYPE: &str = "full";
pub const DEFAULT_ASSESSMENT_TYPE: &str = "comprehensive";

/// Stateless simulator for the mock tools.
#[derive(Clone)]
pub struct ToolSimulator {
    random: Arc<dyn RandomSource>,
}

impl ToolSimulator {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Invoke a tool by its wire name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownToolError`] when `tool` names none of the simulated tools.
    pub fn invoke(
        &self,
        tool: &str,
        input: Option<&str>,
    ) -> Result<ToolInvocationResult, UnknownToolError> {
        let tool: ToolName = tool.parse()?;
        Ok(self.run(tool, input))
    }

    /// Invoke a known tool. Never fails.
    pub fn run(&self, tool: ToolName, input: Option<&str>) -> ToolInvocationResult {
        let input = input.filter(|s| !s.is_empty());
        let now = Timestamp::now();

        match tool {
            ToolName::RollDice => self.roll_dice(input, now),
            ToolName::PersonApp => person_app(input, now),
            ToolName::DigitalTwin => self.digital_twin(input, now),
            ToolName::PenetrationTest => penetration_test(input, now),
            ToolName::SecurityScan => security_scan(input, now),
            ToolName::VulnerabilityAssessment => vulnerability_assessment(input, now),
        }
    }

    fn roll_dice(&self, input: Option<&str>, now: Timestamp) -> ToolInvocationResult {
        let sides = parse_sides(input);
        let value = self.random.uniform_inclusive(1, sides);
        ToolInvocationResult::RollDice {
            input: DiceInput { sides },
            result: DiceRoll {
                value,
                sides,
                timestamp: now,
            },
        }
    }

    fn digital_twin(&self, input: Option<&str>, now: Timestamp) -> ToolInvocationResult {
        let metrics = TwinMetrics {
            cpu: self.percent(),
            memory: self.percent(),
            network: self.percent(),
        };
        ToolInvocationResult::DigitalTwin {
            input: input.unwrap_or(DEFAULT_ECHO_INPUT).to_string(),
            result: DigitalTwinSnapshot {
                id: input.unwrap_or(DEFAULT_TWIN_ID).to_string(),
                status: "active".to_string(),
                metrics,
                timestamp: now,
            },
        }
    }

    fn percent(&self) -> f64 {
        self.random.unit() * 100.0
    }
}

/// Number of die sides from free-form input.
///
/// Reads the leading integer after optional whitespace and `+` sign, so
/// `"8"`, `" 8 "` and `"8-sided"` all give 8. Anything else, including zero,
/// negative numbers and values that overflow `u32`, gives the default.
pub fn parse_sides(input: Option<&str>) -> u32 {
    let Some(raw) = input else {
        return DEFAULT_DICE_SIDES;
    };
    // Decimal only: "0x10" reads as 0 and falls back.
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..digits_end].parse::<u32>() {
        Ok(sides) if sides > 0 => sides,
        _ => DEFAULT_DICE_SIDES,
    }
}

fn person_app(input: Option<&str>, now: Timestamp) -> ToolInvocationResult {
    ToolInvocationResult::PersonApp {
        input: input.unwrap_or(DEFAULT_ECHO_INPUT).to_string(),
        result: PersonRecord {
            name: input.unwrap_or(DEFAULT_PERSON_NAME).to_string(),
            age: DEFAULT_PERSON_AGE,
            email: format!("{}@example.com", input.unwrap_or(DEFAULT_EMAIL_LOCAL_PART)),
            timestamp: now,
        },
    }
}

fn penetration_test(input: Option<&str>, now: Timestamp) -> ToolInvocationResult {
    let target = input.unwrap_or(DEFAULT_PENTEST_TARGET).to_string();
    let vulnerabilities: Vec<Vulnerability> = VULNERABILITIES.iter().map(Vulnerability::from).collect();
    let summary = SeveritySummary::tally(&vulnerabilities);

    ToolInvocationResult::PenetrationTest {
        input: TargetInput {
            target: target.clone(),
        },
        result: PenetrationTestReport {
            target,
            scan_date: now,
            vulnerabilities_found: summary.total,
            vulnerabilities_mitigated: summary.mitigated,
            protection_rate: Percentage::of(summary.mitigated, summary.total),
            vulnerabilities,
            summary,
            timestamp: now,
        },
    }
}

fn security_scan(input: Option<&str>, now: Timestamp) -> ToolInvocationResult {
    let scan_type = input.unwrap_or(DEFAULT_SCAN_TYPE).to_string();
    let protections: Vec<Protection> = PROTECTIONS.iter().map(Protection::from).collect();
    let overall_status = if protections
        .iter()
        .all(|p| p.status == ProtectionStatus::Active)
    {
        OverallStatus::Protected
    } else {
        OverallStatus::Exposed
    };

    ToolInvocationResult::SecurityScan {
        input: ScanTypeInput {
            scan_type: scan_type.clone(),
        },
        result: SecurityScanReport {
            scan_type,
            scan_date: now,
            overall_status,
            protection_layers: protections.len(),
            total_threats_blocked: protections.iter().map(|p| p.blocked).sum(),
            protections,
            metrics: catalog::scan_metrics(),
            timestamp: now,
        },
    }
}

fn vulnerability_assessment(input: Option<&str>, now: Timestamp) -> ToolInvocationResult {
    let assessment_type = input.unwrap_or(DEFAULT_ASSESSMENT_TYPE).to_string();
    let findings: Vec<Finding> = FINDINGS.iter().map(Finding::from).collect();
    let protected = findings.iter().filter(|f| f.protected).count();

    ToolInvocationResult::VulnerabilityAssessment {
        input: AssessmentTypeInput {
            assessment_type: assessment_type.clone(),
        },
        result: VulnerabilityAssessmentReport {
            assessment_type,
            assessment_date: now,
            total_issues: findings.iter().map(|f| f.issues).sum(),
            all_protected: protected == findings.len(),
            protection_coverage: Percentage::of(protected, findings.len()),
            findings,
            recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
            timestamp: now,
        },
    }
}
