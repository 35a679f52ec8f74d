use crate::incidents::IncidentSummary;
use crate::models::{Incident, IncidentStatus, NetworkStats, ResponseAction, SecurityEvent, Severity};
use nu_ansi_term::{AnsiString, Color, Style};

pub fn render_watch_ui(
    events: &[SecurityEvent],
    stats: &NetworkStats,
    monitoring_active: bool,
    started_at: chrono::DateTime<chrono::Utc>,
) {
    print!("\x1b[2J\x1b[H");
    let now = chrono::Local::now();
    let uptime = chrono::Utc::now() - started_at;
    let status = if monitoring_active {
        Color::Green.bold().paint("MONITORING ACTIVE")
    } else {
        Color::Red.bold().paint("MONITORING STOPPED")
    };
    println!(
        "{}  {}  {}  uptime={}s",
        Style::new().bold().paint("VIGIL WATCH"),
        now.format("%Y-%m-%d %H:%M:%S"),
        status,
        uptime.num_seconds()
    );
    println!("{}", "─".repeat(90));

    println!(
        "connections: {}   suspicious: {}   blocked: {}   score: {}%",
        Color::Cyan.paint(stats.total_connections.to_string()),
        Color::Yellow.paint(stats.suspicious_activity.to_string()),
        Color::Red.paint(stats.blocked_attempts.to_string()),
        Color::Green.paint(format!("{:.0}", stats.security_score))
    );
    println!("{}", "─".repeat(90));

    if events.is_empty() {
        println!("No threats detected. Start monitoring to see real-time activity.");
        return;
    }

    for event in events {
        println!(
            "{} {} {} {}",
            color_for_severity(event.severity),
            Color::Cyan.paint(format!("[{}]", event.category)),
            color_for_action(event.action),
            event
                .timestamp
                .with_timezone(&chrono::Local)
                .format("%H:%M:%S")
        );
        println!("   {}", event.description);
        println!(
            "   source: {}",
            Style::new().bold().paint(event.source_address.clone())
        );
        println!("{}", Style::new().dimmed().paint("·".repeat(90)));
    }
}

pub fn render_incident_list(incidents: &[Incident], summary: &IncidentSummary) {
    println!(
        "{}  total={}  active={}  resolved={}  avg_response={}",
        Style::new().bold().paint("INCIDENTS"),
        summary.total_incidents,
        Color::Yellow.paint(summary.active_incidents.to_string()),
        Color::Green.paint(summary.resolved_incidents.to_string()),
        summary.avg_response_time
    );
    println!("{}", "─".repeat(90));

    if incidents.is_empty() {
        println!("No incidents match the filter.");
        return;
    }

    for incident in incidents {
        println!(
            "{} {} {}  {}",
            color_for_severity(incident.severity),
            color_for_status(incident.status),
            Style::new().bold().paint(incident.id.clone()),
            incident.title
        );
        println!("   {}", incident.description);
        println!(
            "   assigned: {}  reported by: {}  created: {}",
            incident.assigned_to,
            incident.reported_by,
            incident
                .created_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
        );
        println!("   systems: {}", incident.affected_systems.join(", "));
        for entry in &incident.timeline {
            println!("   {}  {} ({})", entry.time, entry.action, entry.user);
        }
        println!("{}", Style::new().dimmed().paint("·".repeat(90)));
    }
}

fn color_for_severity(severity: Severity) -> AnsiString<'static> {
    match severity {
        Severity::Low => Color::Blue.bold().paint("LOW"),
        Severity::Medium => Color::Yellow.bold().paint("MEDIUM"),
        Severity::High => Color::Fixed(208).bold().paint("HIGH"),
        Severity::Critical => Color::Red.bold().paint("CRITICAL"),
    }
}

fn color_for_action(action: ResponseAction) -> AnsiString<'static> {
    match action {
        ResponseAction::Blocked => Color::Red.paint("BLOCKED"),
        ResponseAction::Quarantined => Color::Fixed(208).paint("QUARANTINED"),
        ResponseAction::Monitored => Color::Blue.paint("MONITORED"),
    }
}

fn color_for_status(status: IncidentStatus) -> AnsiString<'static> {
    match status {
        IncidentStatus::Investigating => Color::Blue.bold().paint("INVESTIGATING"),
        IncidentStatus::Contained => Color::Fixed(208).bold().paint("CONTAINED"),
        IncidentStatus::Resolved => Color::Green.bold().paint("RESOLVED"),
        IncidentStatus::Escalated => Color::Red.bold().paint("ESCALATED"),
    }
}
