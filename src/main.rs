use clap::Parser;
use vigil::app;
use vigil::cli::{Cli, Commands};
use vigil::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            app::init_config(cli.json)?;
        }
        Commands::Watch => {
            let cfg = Config::load(cli.config.as_deref())?;
            app::run_watch(cfg, cli.json).await?;
        }
        Commands::Report { ticks } => {
            let cfg = Config::load(cli.config.as_deref())?;
            app::run_report(cfg, ticks)?;
        }
        Commands::Incidents { status } => {
            app::run_incidents(status.as_deref(), cli.json)?;
        }
    }

    Ok(())
}
