//! Telemetry Snapshot Generator.
//!
//! Produces the same metrics on every call; only the timestamp moves. There
//! are no counters behind these numbers.

use crate::domain::foundation::Timestamp;
use crate::domain::tools::ToolName;

use super::snapshot::{
    ArcjetLast24h, ArcjetTelemetry, McpLast24h, McpTelemetry, ServerStatus, TelemetrySnapshot,
    TypeCount, WafLast24h, WafTelemetry,
};

const WAF_TOP_THREATS: &[(&str, u64)] = &[
    ("SQL Injection", 456),
    ("XSS", 234),
    ("CSRF", 189),
    ("Path Traversal", 123),
    ("Command Injection", 98),
];

const ARCJET_TOP_PROTECTIONS: &[(&str, u64)] = &[
    ("Rate Limiting", 234),
    ("Bot Detection", 123),
    ("IP Reputation", 89),
    ("Behavioral Analysis", 67),
    ("Geolocation Filtering", 54),
];

const MCP_SERVERS: &[(ToolName, u64)] = &[
    (ToolName::RollDice, 36000),
    (ToolName::PersonApp, 42000),
    (ToolName::DigitalTwin, 30000),
];

/// Builds telemetry snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryGenerator;

impl TelemetryGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Snapshot stamped with the current time.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        self.snapshot_at(Timestamp::now())
    }

    /// Snapshot stamped with `timestamp`.
    pub fn snapshot_at(&self, timestamp: Timestamp) -> TelemetrySnapshot {
        TelemetrySnapshot {
            waf: waf(),
            arcjet: arcjet(),
            mcp: mcp(),
            timestamp,
        }
    }
}

fn type_counts(rows: &[(&str, u64)]) -> Vec<TypeCount> {
    rows.iter()
        .map(|(kind, count)| TypeCount::new(*kind, *count))
        .collect()
}

fn waf() -> WafTelemetry {
    let last24h = WafLast24h {
        blocked: 1234,
        allowed: 45678,
        threats: 23,
    };
    WafTelemetry {
        requests_blocked: last24h.blocked,
        requests_allowed: last24h.allowed,
        threats_detected: last24h.threats,
        rules_active: 156,
        top_threats: type_counts(WAF_TOP_THREATS),
        response_time: "12ms".to_string(),
        uptime: "99.9%".to_string(),
        last24h,
    }
}

fn arcjet() -> ArcjetTelemetry {
    let last24h = ArcjetLast24h {
        analyzed: 67890,
        blocked: 567,
        rate_limited: 234,
    };
    ArcjetTelemetry {
        requests_analyzed: last24h.analyzed,
        threats_blocked: last24h.blocked,
        rate_limit_hits: last24h.rate_limited,
        bot_detections: 123,
        suspicious_activity: 45,
        protection_rate: "99.2%".to_string(),
        avg_response_time: "8ms".to_string(),
        last24h,
        top_protections: type_counts(ARCJET_TOP_PROTECTIONS),
    }
}

fn mcp() -> McpTelemetry {
    let server_status: Vec<ServerStatus> = MCP_SERVERS
        .iter()
        .map(|(tool, requests)| ServerStatus {
            name: tool.server().to_string(),
            status: "active".to_string(),
            requests: *requests,
        })
        .collect();
    let total_requests: u64 = server_status.iter().map(|s| s.requests).sum();
    let errors = 108;

    McpTelemetry {
        active_connections: server_status.len() as u32,
        requests_per_second: 12.5,
        total_requests,
        error_rate: "0.1%".to_string(),
        avg_latency: "45ms".to_string(),
        tools_active: ToolName::all().len(),
        last24h: McpLast24h {
            requests: total_requests,
            errors,
            successful: total_requests - errors,
        },
        server_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn two_snapshots_differ_only_in_timestamp() {
        let generator = TelemetryGenerator::new();
        let first = generator.snapshot();
        let second = generator.snapshot();
        assert!(first.same_metrics(&second));
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn mcp_counts_match_published_figures() {
        let snapshot = TelemetryGenerator::new().snapshot();
        assert_eq!(snapshot.mcp.active_connections, 3);
        assert_eq!(snapshot.mcp.total_requests, 108000);
        assert_eq!(snapshot.mcp.last24h.successful, 107892);
        assert_eq!(snapshot.mcp.tools_active, 6);
        assert_eq!(snapshot.mcp.server_status[1].name, "person-app-server");
    }

    #[test]
    fn serializes_with_camel_case_and_type_labels() {
        let at = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());
        let json = serde_json::to_value(TelemetryGenerator::new().snapshot_at(at)).unwrap();

        assert_eq!(json["timestamp"], "2026-01-02T03:04:05.000Z");
        assert_eq!(json["waf"]["requestsBlocked"], 1234);
        assert_eq!(json["waf"]["topThreats"][0]["type"], "SQL Injection");
        assert_eq!(json["arcjet"]["last24h"]["rateLimited"], 234);
        assert_eq!(json["arcjet"]["topProtections"][4]["count"], 54);
        assert_eq!(json["mcp"]["requestsPerSecond"], 12.5);
        assert_eq!(json["mcp"]["serverStatus"][0]["status"], "active");
    }

    #[test]
    fn snapshot_deserializes_back() {
        let snapshot = TelemetryGenerator::new().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert!(parsed.same_metrics(&snapshot));
    }
}
