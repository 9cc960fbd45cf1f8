//! ToolName enum covering the six simulated MCP tools.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a tool name does not match any simulated tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tool: {name}")]
pub struct UnknownToolError {
    pub name: String,
}

/// The simulated tools, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolName {
    RollDice,
    PersonApp,
    DigitalTwin,
    PenetrationTest,
    SecurityScan,
    VulnerabilityAssessment,
}

impl ToolName {
    /// Returns all tools in catalog order.
    pub fn all() -> &'static [ToolName] {
        &[
            ToolName::RollDice,
            ToolName::PersonApp,
            ToolName::DigitalTwin,
            ToolName::PenetrationTest,
            ToolName::SecurityScan,
            ToolName::VulnerabilityAssessment,
        ]
    }

    /// Wire name of the tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::RollDice => "roll-dice",
            ToolName::PersonApp => "person-app",
            ToolName::DigitalTwin => "digital-twin",
            ToolName::PenetrationTest => "penetration-test",
            ToolName::SecurityScan => "security-scan",
            ToolName::VulnerabilityAssessment => "vulnerability-assessment",
        }
    }

    /// One-line description shown by the tool tester.
    pub fn description(&self) -> &'static str {
        match self {
            ToolName::RollDice => "Roll a dice with specified number of sides",
            ToolName::PersonApp => "Get person information",
            ToolName::DigitalTwin => "Digital twin operations",
            ToolName::PenetrationTest => "Run penetration testing and view protection outcomes",
            ToolName::SecurityScan => "Perform comprehensive security scanning",
            ToolName::VulnerabilityAssessment => "Assess vulnerabilities and protection coverage",
        }
    }

    /// Name of the mock server the tool is attributed to.
    pub fn server(&self) -> &'static str {
        match self {
            ToolName::RollDice => "roll-dice-server",
            ToolName::PersonApp => "person-app-server",
            ToolName::DigitalTwin => "digital-twin-server",
            ToolName::PenetrationTest
            | ToolName::SecurityScan
            | ToolName::VulnerabilityAssessment => "security-server",
        }
    }

    /// True for the three security tools backed by literal finding tables.
    pub fn is_security_tool(&self) -> bool {
        self.server() == "security-server"
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = UnknownToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::all()
            .iter()
            .copied()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| UnknownToolError {
                name: s.to_string(),
            })
    }
}

/// Catalog entry describing a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: ToolName,
    pub description: String,
    pub server: String,
}

impl From<ToolName> for ToolDescriptor {
    fn from(name: ToolName) -> Self {
        Self {
            name,
            description: name.description().to_string(),
            server: name.server().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_names_parse_back_to_themselves() {
        for tool in ToolName::all() {
            assert_eq!(tool.as_str().parse::<ToolName>(), Ok(*tool));
        }
    }

    #[test]
    fn unknown_name_error_mentions_the_name() {
        let err = "laser-cannon".parse::<ToolName>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: laser-cannon");
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Roll-Dice".parse::<ToolName>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case_wire_names() {
        let json = serde_json::to_string(&ToolName::VulnerabilityAssessment).unwrap();
        assert_eq!(json, "\"vulnerability-assessment\"");
        let parsed: ToolName = serde_json::from_str("\"roll-dice\"").unwrap();
        assert_eq!(parsed, ToolName::RollDice);
    }

    #[test]
    fn security_tools_share_one_server() {
        let security: Vec<_> = ToolName::all()
            .iter()
            .filter(|t| t.is_security_tool())
            .collect();
        assert_eq!(security.len(), 3);
        assert_eq!(ToolName::RollDice.server(), "roll-dice-server");
    }

    #[test]
    fn descriptor_copies_catalog_text() {
        let descriptor = ToolDescriptor::from(ToolName::SecurityScan);
        assert_eq!(descriptor.description, "Perform comprehensive security scanning");
        assert_eq!(descriptor.server, "security-server");
    }
}
