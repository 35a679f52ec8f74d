use crate::config::Config;
use crate::display::{render_incident_list, render_watch_ui};
use crate::feed::FeedStore;
use crate::generator::ThreatGenerator;
use crate::incidents;
use crate::models::{NetworkStats, SecurityEvent};
use crate::monitor::Monitor;
use crate::report::{AnalysisReport, IncidentReport};
use nu_ansi_term::Color;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tokio::time::{Duration, interval};
use tracing::{debug, error, info, warn};

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vigil=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run_watch(cfg: Config, json_output: bool) -> anyhow::Result<()> {
    if !json_output {
        print_startup_banner();
    }

    let (event_tx, _) = broadcast::channel::<SecurityEvent>(1_024);
    let feed = Arc::new(Mutex::new(FeedStore::with_stats(NetworkStats::new(
        cfg.feed.initial_security_score,
    ))));
    let mut monitor = Monitor::new(Arc::clone(&feed), event_tx.clone());
    monitor.start(Duration::from_millis(cfg.monitor_interval_ms))?;

    let started_at = chrono::Utc::now();
    let watch_handle = tokio::spawn(watch_events(
        Arc::clone(&feed),
        event_tx.subscribe(),
        json_output,
        Duration::from_millis(cfg.watch_refresh_ms),
        started_at,
    ));

    info!("Vigil is running. Press Ctrl-C to stop.");
    tokio::signal::ctrl_c().await?;
    info!("Shutdown requested.");

    monitor.stop();
    watch_handle.abort();

    if !json_output {
        let snapshot = feed.lock().unwrap_or_else(|e| e.into_inner()).snapshot();
        render_watch_ui(&snapshot.events, &snapshot.stats, monitor.is_active(), started_at);
    }

    Ok(())
}

async fn watch_events(
    feed: Arc<Mutex<FeedStore>>,
    mut rx: broadcast::Receiver<SecurityEvent>,
    json_output: bool,
    refresh: Duration,
    started_at: chrono::DateTime<chrono::Utc>,
) {
    let mut ticker = interval(refresh);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if json_output {
                    debug!("watch loop heartbeat");
                } else {
                    let snapshot = feed.lock().unwrap_or_else(|e| e.into_inner()).snapshot();
                    render_watch_ui(&snapshot.events, &snapshot.stats, true, started_at);
                }
            }
            msg = rx.recv() => {
                match msg {
                    Ok(event) => {
                        if json_output {
                            match serde_json::to_string(&event) {
                                Ok(line) => println!("{line}"),
                                Err(err) => error!(?err, "failed to serialize event"),
                            }
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!(lagged = n, "watch subscriber lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }
}

/// Samples the generator into a fresh feed, then exports the point-in-time
/// analysis document. The export itself never touches the store.
pub fn run_report(cfg: Config, ticks: u32) -> anyhow::Result<()> {
    let mut feed = FeedStore::with_stats(NetworkStats::new(cfg.feed.initial_security_score));
    let mut generator = ThreatGenerator::new();
    for _ in 0..ticks {
        feed.ingest(generator.tick());
    }

    let report = AnalysisReport::build(&feed.snapshot());
    println!("{}", report.to_json()?);
    Ok(())
}

pub fn run_incidents(status: Option<&str>, json_output: bool) -> anyhow::Result<()> {
    let wanted = incidents::parse_status_filter(status)?;
    let all = incidents::seed_incidents();
    let filtered = incidents::filter_by_status(&all, wanted);

    if json_output {
        let report = IncidentReport::build(&filtered);
        println!("{}", report.to_json()?);
    } else {
        let summary = incidents::IncidentSummary::from_incidents(&all);
        render_incident_list(&filtered, &summary);
    }

    Ok(())
}

pub fn init_config(json_output: bool) -> anyhow::Result<()> {
    let home = std::env::var("HOME").map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    let target = PathBuf::from(home).join(".config/vigil/config.yaml");
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    let template = include_str!("../config/default.yaml");
    fs::write(&target, template)?;

    if json_output {
        let value = serde_json::json!({
            "initialized": true,
            "path": target,
            "timestamp": chrono::Utc::now(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Initialized vigil config at {}", target.display());
    }

    Ok(())
}

fn print_startup_banner() {
    println!(
        "{}",
        Color::Cyan.bold().paint(
            r#"
__     __   ___    ____  ___   _
\ \   / /  |_ _|  / ___||_ _| | |
 \ \ / /    | |  | |  _  | |  | |
  \ V /     | |  | |_| | | |  | |___
   \_/     |___|  \____||___| |_____|
"#
        )
    );
}
