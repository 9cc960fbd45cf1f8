//! Literal finding tables used by the security tools.
//!
//! These stand in for a findings database. Rows are immutable; each
//! invocation converts them into fresh owned records.

use super::records::{
    Finding, Protection, ProtectionStatus, ScanMetrics, Severity, Vulnerability,
    VulnerabilityStatus,
};

pub(crate) struct VulnerabilityRow {
    pub id: &'static str,
    pub severity: Severity,
    pub kind: &'static str,
    pub status: VulnerabilityStatus,
    pub protection: &'static str,
}

pub(crate) struct ProtectionRow {
    pub name: &'static str,
    pub status: ProtectionStatus,
    pub blocked: u64,
}

pub(crate) struct FindingRow {
    pub category: &'static str,
    pub issues: u32,
    pub protected: bool,
    pub protection: &'static str,
}

pub(crate) const VULNERABILITIES: &[VulnerabilityRow] = &[
    VulnerabilityRow {
        id: "VULN-001",
        severity: Severity::High,
        kind: "SQL Injection",
        status: VulnerabilityStatus::Mitigated,
        protection: "WAF rules active",
    },
    VulnerabilityRow {
        id: "VULN-002",
        severity: Severity::Medium,
        kind: "XSS",
        status: VulnerabilityStatus::Mitigated,
        protection: "Content Security Policy",
    },
    VulnerabilityRow {
        id: "VULN-003",
        severity: Severity::Low,
        kind: "CSRF",
        status: VulnerabilityStatus::Mitigated,
        protection: "CSRF tokens",
    },
    VulnerabilityRow {
        id: "VULN-004",
        severity: Severity::High,
        kind: "Authentication Bypass",
        status: VulnerabilityStatus::Mitigated,
        protection: "MFA enforced",
    },
    VulnerabilityRow {
        id: "VULN-005",
        severity: Severity::Medium,
        kind: "Insecure Direct Object Reference",
        status: VulnerabilityStatus::Mitigated,
        protection: "Access controls",
    },
];

pub(crate) const PROTECTIONS: &[ProtectionRow] = &[
    ProtectionRow {
        name: "Web Application Firewall",
        status: ProtectionStatus::Active,
        blocked: 1234,
    },
    ProtectionRow {
        name: "Rate Limiting",
        status: ProtectionStatus::Active,
        blocked: 89,
    },
    ProtectionRow {
        name: "DDoS Protection",
        status: ProtectionStatus::Active,
        blocked: 456,
    },
    ProtectionRow {
        name: "Intrusion Detection",
        status: ProtectionStatus::Active,
        blocked: 23,
    },
];

pub(crate) const FINDINGS: &[FindingRow] = &[
    FindingRow {
        category: "Network Security",
        issues: 2,
        protected: true,
        protection: "Firewall + IDS",
    },
    FindingRow {
        category: "Application Security",
        issues: 3,
        protected: true,
        protection: "WAF + Security Headers",
    },
    FindingRow {
        category: "Data Security",
        issues: 1,
        protected: true,
        protection: "Encryption at rest/transit",
    },
    FindingRow {
        category: "Access Control",
        issues: 0,
        protected: true,
        protection: "RBAC + MFA",
    },
];

pub(crate) const RECOMMENDATIONS: &[&str] = &[
    "All identified vulnerabilities have been mitigated with appropriate protections",
    "Security controls are actively monitoring and blocking threats",
    "Regular security assessments recommended to maintain protection",
];

pub(crate) fn scan_metrics() -> ScanMetrics {
    ScanMetrics {
        uptime: "99.9%".to_string(),
        response_time: "45ms".to_string(),
        threat_detection_rate: "98.5%".to_string(),
        false_positive_rate: "0.2%".to_string(),
    }
}

impl From<&VulnerabilityRow> for Vulnerability {
    fn from(row: &VulnerabilityRow) -> Self {
        Self {
            id: row.id.to_string(),
            severity: row.severity,
            kind: row.kind.to_string(),
            status: row.status,
            protection: row.protection.to_string(),
        }
    }
}

impl From<&ProtectionRow> for Protection {
    fn from(row: &ProtectionRow) -> Self {
        Self {
            name: row.name.to_string(),
            status: row.status,
            blocked: row.blocked,
            last24h: true,
        }
    }
}

impl From<&FindingRow> for Finding {
    fn from(row: &FindingRow) -> Self {
        Self {
            category: row.category.to_string(),
            issues: row.issues,
            protected: row.protected,
            protection: row.protection.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn vulnerability_ids_are_unique() {
        let ids: HashSet<_> = VULNERABILITIES.iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), VULNERABILITIES.len());
    }

    #[test]
    fn protection_rows_convert_with_last24h_flag() {
        let protection = Protection::from(&PROTECTIONS[0]);
        assert_eq!(protection.name, "Web Application Firewall");
        assert_eq!(protection.blocked, 1234);
        assert!(protection.last24h);
    }
}
