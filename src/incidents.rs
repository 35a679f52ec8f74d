use crate::models::{Incident, IncidentStatus, Severity, TimelineEntry};
use chrono::Duration;
use serde::Serialize;

pub const AVG_RESPONSE_TIME: &str = "2.3h";

fn entry(time: &str, action: &str, user: &str) -> TimelineEntry {
    TimelineEntry {
        time: time.to_string(),
        action: action.to_string(),
        user: user.to_string(),
    }
}

/// Sample incidents seeded on view mount. Timestamps are expressed relative
/// to now so the "time ago" rendering stays plausible.
pub fn seed_incidents() -> Vec<Incident> {
    let now = chrono::Utc::now();
    vec![
        Incident {
            id: "INC-2024-001".to_string(),
            title: "Suspicious Network Activity Detected".to_string(),
            severity: Severity::High,
            status: IncidentStatus::Investigating,
            category: "Network Security".to_string(),
            reported_by: "Security Monitoring System".to_string(),
            assigned_to: "John Smith".to_string(),
            created_at: now - Duration::hours(2),
            description: "Unusual outbound traffic patterns detected from internal servers"
                .to_string(),
            affected_systems: vec![
                "Web Server 01".to_string(),
                "Database Server 02".to_string(),
            ],
            timeline: vec![
                entry("14:30", "Incident detected by SIEM", "System"),
                entry("14:35", "Assigned to security team", "Auto-Assignment"),
                entry("14:45", "Initial investigation started", "John Smith"),
            ],
        },
        Incident {
            id: "INC-2024-002".to_string(),
            title: "Failed Login Attempts - Brute Force Attack".to_string(),
            severity: Severity::Medium,
            status: IncidentStatus::Contained,
            category: "Authentication".to_string(),
            reported_by: "Sarah Johnson".to_string(),
            assigned_to: "Mike Davis".to_string(),
            created_at: now - Duration::hours(4),
            description: "Multiple failed login attempts detected from external IP addresses"
                .to_string(),
            affected_systems: vec!["Login Portal".to_string(), "User Database".to_string()],
            timeline: vec![
                entry("12:15", "Brute force attack detected", "System"),
                entry("12:20", "IP addresses blocked", "Mike Davis"),
                entry("12:30", "Additional monitoring enabled", "Mike Davis"),
                entry("13:00", "Threat contained", "Mike Davis"),
            ],
        },
        Incident {
            id: "INC-2024-003".to_string(),
            title: "Malware Detection on Workstation".to_string(),
            severity: Severity::Critical,
            status: IncidentStatus::Resolved,
            category: "Malware".to_string(),
            reported_by: "Emily Chen".to_string(),
            assigned_to: "Alex Rodriguez".to_string(),
            created_at: now - Duration::hours(8),
            description: "Trojan malware detected on employee workstation in Finance department"
                .to_string(),
            affected_systems: vec![
                "WS-FIN-045".to_string(),
                "Shared Network Drive".to_string(),
            ],
            timeline: vec![
                entry("08:30", "Malware detected by antivirus", "System"),
                entry("08:35", "Workstation isolated", "Alex Rodriguez"),
                entry("09:15", "Malware removed and system cleaned", "Alex Rodriguez"),
                entry("10:30", "System restored and monitoring enabled", "Alex Rodriguez"),
                entry("11:00", "Incident resolved", "Alex Rodriguez"),
            ],
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentSummary {
    pub total_incidents: usize,
    pub active_incidents: usize,
    pub resolved_incidents: usize,
    pub avg_response_time: String,
}

impl IncidentSummary {
    pub fn from_incidents(incidents: &[Incident]) -> Self {
        let resolved = incidents
            .iter()
            .filter(|incident| incident.status == IncidentStatus::Resolved)
            .count();
        Self {
            total_incidents: incidents.len(),
            active_incidents: incidents.len() - resolved,
            resolved_incidents: resolved,
            avg_response_time: AVG_RESPONSE_TIME.to_string(),
        }
    }
}

pub fn parse_status_filter(status: Option<&str>) -> anyhow::Result<Option<IncidentStatus>> {
    let Some(value) = status else {
        return Ok(None);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(None),
        "investigating" => Ok(Some(IncidentStatus::Investigating)),
        "contained" => Ok(Some(IncidentStatus::Contained)),
        "resolved" => Ok(Some(IncidentStatus::Resolved)),
        "escalated" => Ok(Some(IncidentStatus::Escalated)),
        _ => Err(anyhow::anyhow!(
            "invalid --status value: {value} (use all|investigating|contained|resolved|escalated)"
        )),
    }
}

pub fn filter_by_status(incidents: &[Incident], status: Option<IncidentStatus>) -> Vec<Incident> {
    incidents
        .iter()
        .filter(|incident| status.is_none_or(|wanted| incident.status == wanted))
        .cloned()
        .collect()
}
