use crate::feed::FeedSnapshot;
use crate::incidents::IncidentSummary;
use crate::models::{Incident, NetworkStats, SecurityEvent};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MONITORING_PERIOD: &str = "24 hours";

pub const ANALYSIS_RECOMMENDATIONS: [&str; 4] = [
    "Update firewall rules to block suspicious IPs",
    "Implement rate limiting for login attempts",
    "Enable intrusion detection system alerts",
    "Review and update security policies",
];

pub const INCIDENT_RECOMMENDATIONS: [&str; 4] = [
    "Implement automated incident response workflows",
    "Enhance monitoring capabilities for early detection",
    "Conduct regular incident response training",
    "Review and update incident response procedures",
];

/// Point-in-time export of the threat feed. Field names are part of the
/// consumer contract; keep them camelCase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub monitoring_period: String,
    pub network_stats: NetworkStats,
    pub threats: Vec<SecurityEvent>,
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    /// Pure snapshot operation; the store is untouched.
    pub fn build(snapshot: &FeedSnapshot) -> Self {
        Self {
            generated_at: Utc::now(),
            monitoring_period: MONITORING_PERIOD.to_string(),
            network_stats: snapshot.stats,
            threats: snapshot.events.clone(),
            recommendations: ANALYSIS_RECOMMENDATIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentReport {
    pub generated_at: DateTime<Utc>,
    pub summary: IncidentSummary,
    pub incidents: Vec<Incident>,
    pub recommendations: Vec<String>,
}

impl IncidentReport {
    pub fn build(incidents: &[Incident]) -> Self {
        Self {
            generated_at: Utc::now(),
            summary: IncidentSummary::from_incidents(incidents),
            incidents: incidents.to_vec(),
            recommendations: INCIDENT_RECOMMENDATIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{AnalysisReport, IncidentReport};
    use crate::feed::FeedStore;
    use crate::generator::ThreatGenerator;
    use crate::incidents::seed_incidents;
    use serde_json::Value;

    #[test]
    fn analysis_report_preserves_consumer_field_names() {
        let mut feed = FeedStore::with_seed(11);
        let mut generator = ThreatGenerator::with_seed(11);
        for _ in 0..4 {
            feed.ingest(generator.tick());
        }

        let report = AnalysisReport::build(&feed.snapshot());
        let json = report.to_json().expect("serialize report");
        let value: Value = serde_json::from_str(&json).expect("parse report");

        assert!(value["generatedAt"].is_string());
        assert_eq!(value["monitoringPeriod"], "24 hours");
        assert!(value["networkStats"]["totalConnections"].is_u64());
        assert!(value["networkStats"]["suspiciousActivity"].is_u64());
        assert!(value["networkStats"]["blockedAttempts"].is_u64());
        assert!(value["networkStats"]["securityScore"].is_f64());
        assert_eq!(value["threats"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["recommendations"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn analysis_report_keeps_feed_order() {
        let mut feed = FeedStore::with_seed(12);
        let mut generator = ThreatGenerator::with_seed(12);
        for _ in 0..6 {
            feed.ingest(generator.tick());
        }

        let report = AnalysisReport::build(&feed.snapshot());
        let ids: Vec<u64> = report.threats.iter().map(|event| event.id).collect();
        assert_eq!(ids, vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn incident_report_shape_matches_consumer_document() {
        let incidents = seed_incidents();
        let report = IncidentReport::build(&incidents);
        let json = report.to_json().expect("serialize incident report");
        let value: Value = serde_json::from_str(&json).expect("parse incident report");

        assert!(value["generatedAt"].is_string());
        assert_eq!(value["summary"]["totalIncidents"], 3);
        assert_eq!(value["incidents"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["recommendations"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["incidents"][0]["id"], "INC-2024-001");
        assert!(value["incidents"][0]["affectedSystems"].is_array());
        assert!(value["incidents"][0]["timeline"].is_array());
    }
}
