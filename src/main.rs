use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use megaverse::adapters::outbound::{
    flush_file_logger, init_combined_logger, init_tracing, ReqwestTransport,
};
use megaverse::application::{goal_map_summary, megaverse_summary, ApiClient, MegaverseBuilder};
use megaverse::domains::logger::DynLogger;
use megaverse::{build_commands, Config, GoalGrid, MegaverseError};

/// Rebuild the megaverse goal map through the challenge API.
#[derive(Debug, Parser)]
#[command(name = "megaverse", version)]
struct Args {
    /// TOML config file; CANDIDATE_ID and API_URL are read from the environment otherwise.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the creation commands without sending them.
    #[arg(long)]
    dry_run: bool,

    /// Build an X of Polyanets on a SIZE x SIZE grid instead of fetching the goal map.
    #[arg(long, value_name = "SIZE")]
    cross: Option<usize>,

    /// Rows left empty above and below the X.
    #[arg(long, default_value_t = 2)]
    margin: usize,

    /// Also append diagnostics to this file.
    #[arg(long)]
    log_file: Option<String>,
}

impl Args {
    /// The layout to build when no request has to be sent at all.
    fn offline_grid(&self) -> Option<GoalGrid> {
        match (self.cross, self.dry_run) {
            (Some(size), true) => Some(GoalGrid::cross(size, self.margin)),
            _ => None,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = init_tracing("warn") {
        eprintln!("{}", e);
    }

    let args = Args::parse();
    let logger = init_combined_logger(args.log_file.as_deref());

    let outcome = run(&args, logger).await;
    flush_file_logger();
    outcome
}

async fn run(args: &Args, logger: DynLogger) -> anyhow::Result<()> {
    if let Some(grid) = args.offline_grid() {
        println!("{}", goal_map_summary(&grid));
        println!("{}", megaverse_summary(&build_commands(&grid)));
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .await
            .map_err(MegaverseError::from)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::from_env().map_err(MegaverseError::from)?,
    };
    info!(api_url = %config.api_url, "configuration loaded");

    let transport = ReqwestTransport::new(config.request_timeout()).context("building HTTP client")?;
    let client = ApiClient::new(&config, Arc::new(transport)).with_logger(logger.clone());
    let builder = MegaverseBuilder::new(Arc::new(client), &config.replay).with_logger(logger.clone());

    let grid = match args.cross {
        Some(size) => GoalGrid::cross(size, args.margin),
        None => builder.fetch_goal().await?,
    };
    println!("{}", goal_map_summary(&grid));

    if args.dry_run {
        println!("{}", megaverse_summary(&build_commands(&grid)));
        return Ok(());
    }

    let report = builder.create_megaverse(&grid).await.map_err(MegaverseError::from)?;
    println!("{}", megaverse_summary(&report.commands));
    for (command, err) in &report.failures {
        logger.error(&format!("Not created: {} ({})", command, err));
    }
    info!(created = report.created(), total = report.commands.len(), "megaverse replay finished");

    Ok(())
}
