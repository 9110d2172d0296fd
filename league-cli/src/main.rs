//! League CLI - Command-line interface
//!
//! Commands:
//! - serve: Start the HTTP API server
//! - simulate: Play a season and print results and the final table
//! - schedule: Print the generated fixture list

mod schedule_cmd;
mod server;
mod simulate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use league_core::LeagueConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "league")]
#[command(about = "Round-robin league simulator")]
struct Cli {
    /// League config JSON file (defaults to the built-in four-team league)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Random seed for reproducible results
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve(server::ServerArgs),
    /// Simulate a season week by week
    Simulate(simulate::SimulateArgs),
    /// Print the fixture list
    Schedule(schedule_cmd::ScheduleArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.seed)?;

    match cli.command {
        Commands::Serve(args) => server::run(args, config),
        Commands::Simulate(args) => simulate::run(args, config),
        Commands::Schedule(args) => schedule_cmd::run(args, config),
    }
}

/// Build the league config from an optional file and seed override
fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<LeagueConfig> {
    let mut config = match path {
        Some(path) => LeagueConfig::load(path)?,
        None => LeagueConfig::default(),
    };

    if let Some(seed) = seed {
        config.seed = Some(seed);
    }

    config
        .validate()
        .with_context(|| format!("Invalid league config '{}'", config.name))?;

    Ok(config)
}
