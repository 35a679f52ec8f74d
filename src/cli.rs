use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "vigil", version, about = "Watch a synthetic network threat feed.")]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config YAML")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Machine-readable JSON output")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Initialize ~/.config/vigil/config.yaml from template")]
    Init,
    #[command(about = "Start monitoring and stream the live threat feed")]
    Watch,
    #[command(about = "Sample the generator and print a security analysis report")]
    Report {
        #[arg(
            long,
            default_value_t = 10,
            help = "Generator ticks to sample into the feed before exporting"
        )]
        ticks: u32,
    },
    #[command(about = "List demo incidents with summary stats")]
    Incidents {
        #[arg(long, help = "Filter by status: all|investigating|contained|resolved|escalated")]
        status: Option<String>,
    },
}
