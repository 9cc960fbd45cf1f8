//! Telemetry snapshot shapes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Aggregate metrics shown by the telemetry dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub waf: WafTelemetry,
    pub arcjet: ArcjetTelemetry,
    pub mcp: McpTelemetry,
    pub timestamp: Timestamp,
}

impl TelemetrySnapshot {
    /// True when both snapshots carry the same metrics, ignoring `timestamp`.
    pub fn same_metrics(&self, other: &TelemetrySnapshot) -> bool {
        self.waf == other.waf && self.arcjet == other.arcjet && self.mcp == other.mcp
    }
}

/// Labelled counter, used for top-threat and top-protection lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u64,
}

impl TypeCount {
    pub fn new(kind: impl Into<String>, count: u64) -> Self {
        Self {
            kind: kind.into(),
            count,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// WAF
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WafTelemetry {
    pub requests_blocked: u64,
    pub requests_allowed: u64,
    pub threats_detected: u64,
    pub rules_active: u32,
    pub top_threats: Vec<TypeCount>,
    pub response_time: String,
    pub uptime: String,
    pub last24h: WafLast24h,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WafLast24h {
    pub blocked: u64,
    pub allowed: u64,
    pub threats: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Arcjet
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcjetTelemetry {
    pub requests_analyzed: u64,
    pub threats_blocked: u64,
    pub rate_limit_hits: u64,
    pub bot_detections: u64,
    pub suspicious_activity: u64,
    pub protection_rate: String,
    pub avg_response_time: String,
    pub last24h: ArcjetLast24h,
    pub top_protections: Vec<TypeCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcjetLast24h {
    pub analyzed: u64,
    pub blocked: u64,
    pub rate_limited: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// MCP
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpTelemetry {
    pub active_connections: u32,
    pub requests_per_second: f64,
    pub total_requests: u64,
    pub error_rate: String,
    pub avg_latency: String,
    pub tools_active: usize,
    pub last24h: McpLast24h,
    pub server_status: Vec<ServerStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpLast24h {
    pub requests: u64,
    pub errors: u64,
    pub successful: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub name: String,
    pub status: String,
    pub requests: u64,
}
