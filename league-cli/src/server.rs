//! Server command - start the league HTTP API
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to league-server crate)
//! - Level 4: configuration validation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use league_core::LeagueConfig;
use league_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// SQLite database file (omit to keep the league in memory)
    #[arg(long, value_name = "FILE")]
    pub db: Option<PathBuf>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
///
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServerArgs, league: LeagueConfig) -> Result<()> {
    let config = configure_server(&args, league)?;

    tracing::info!("Starting league server on port {}", config.port);

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs, league: LeagueConfig) -> Result<ServerConfig> {
    if let Some(db) = &args.db {
        validate_db_path(db)?;
    }

    Ok(ServerConfig {
        port: args.port,
        db_path: args.db.clone(),
        league,
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config).await })
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// The database path must not point at a directory
fn validate_db_path(path: &PathBuf) -> Result<()> {
    if path.is_dir() {
        anyhow::bail!(
            "Database path is a directory, expected a file: {}",
            path.display()
        );
    }
    if !path.exists() {
        tracing::info!("Database {} will be created", path.display());
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
