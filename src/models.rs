use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        };
        write!(f, "{text}")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatCategory {
    PortScan,
    BruteForce,
    DdosAttempt,
    MalwareCommunication,
    SqlInjection,
    UnauthorizedAccess,
}

impl ThreatCategory {
    pub const ALL: [ThreatCategory; 6] = [
        ThreatCategory::PortScan,
        ThreatCategory::BruteForce,
        ThreatCategory::DdosAttempt,
        ThreatCategory::MalwareCommunication,
        ThreatCategory::SqlInjection,
        ThreatCategory::UnauthorizedAccess,
    ];

    /// Fixed category-to-severity mapping; every category has exactly one severity.
    pub fn severity(self) -> Severity {
        match self {
            ThreatCategory::PortScan => Severity::Medium,
            ThreatCategory::BruteForce => Severity::High,
            ThreatCategory::DdosAttempt => Severity::High,
            ThreatCategory::MalwareCommunication => Severity::Critical,
            ThreatCategory::SqlInjection => Severity::High,
            ThreatCategory::UnauthorizedAccess => Severity::Medium,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ThreatCategory::PortScan => "Suspicious port scanning detected",
            ThreatCategory::BruteForce => "Multiple failed login attempts",
            ThreatCategory::DdosAttempt => "Unusual traffic volume detected",
            ThreatCategory::MalwareCommunication => "Suspicious outbound connections",
            ThreatCategory::SqlInjection => "Malicious database queries detected",
            ThreatCategory::UnauthorizedAccess => "Access from unknown location",
        }
    }
}

impl std::fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ThreatCategory::PortScan => "Port Scan",
            ThreatCategory::BruteForce => "Brute Force",
            ThreatCategory::DdosAttempt => "DDoS Attempt",
            ThreatCategory::MalwareCommunication => "Malware Communication",
            ThreatCategory::SqlInjection => "SQL Injection",
            ThreatCategory::UnauthorizedAccess => "Unauthorized Access",
        };
        write!(f, "{text}")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseAction {
    Blocked,
    Monitored,
    Quarantined,
}

impl std::fmt::Display for ResponseAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ResponseAction::Blocked => "BLOCKED",
            ResponseAction::Monitored => "MONITORED",
            ResponseAction::Quarantined => "QUARANTINED",
        };
        write!(f, "{text}")
    }
}

/// One synthetic security observation. Immutable once generated; the feed
/// evicts it when the retention window is exceeded, nothing mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityEvent {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub category: ThreatCategory,
    pub severity: Severity,
    pub description: String,
    pub source_address: String,
    pub action: ResponseAction,
}

pub const INITIAL_SECURITY_SCORE: f64 = 85.0;
pub const SECURITY_SCORE_FLOOR: f64 = 60.0;
pub const SECURITY_SCORE_CEIL: f64 = 100.0;

/// Running aggregates over the full ingestion history. Counters are never
/// recomputed from the retained window; eviction does not touch them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    pub total_connections: u64,
    pub suspicious_activity: u64,
    pub blocked_attempts: u64,
    pub security_score: f64,
}

impl NetworkStats {
    pub fn new(initial_security_score: f64) -> Self {
        Self {
            total_connections: 0,
            suspicious_activity: 0,
            blocked_attempts: 0,
            security_score: initial_security_score
                .clamp(SECURITY_SCORE_FLOOR, SECURITY_SCORE_CEIL),
        }
    }
}

impl Default for NetworkStats {
    fn default() -> Self {
        Self::new(INITIAL_SECURITY_SCORE)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentStatus {
    Investigating,
    Contained,
    Resolved,
    Escalated,
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IncidentStatus::Investigating => "INVESTIGATING",
            IncidentStatus::Contained => "CONTAINED",
            IncidentStatus::Resolved => "RESOLVED",
            IncidentStatus::Escalated => "ESCALATED",
        };
        write!(f, "{text}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub time: String,
    pub action: String,
    pub user: String,
}

/// Static demo entity; no transition rules beyond the seed data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub category: String,
    pub reported_by: String,
    pub assigned_to: String,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub affected_systems: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
}
