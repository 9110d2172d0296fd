//! League Server - HTTP API over the league engine
//!
//! This crate is the thin transport around `league-core`:
//! - REST API for playing weeks, resetting and correcting results
//! - Standings and per-week fixture listings
//! - A single lock serializing every request against the engine
//! - SQLite persistence of teams and results

mod error;
mod routes;
mod sqlite;
mod state;

use axum::{
    routing::{get, post, put},
    Router,
};
use league_core::LeagueConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::ApiError;
pub use sqlite::SqliteStore;
pub use state::{LeagueSession, ServerState};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    /// SQLite file; `None` keeps everything in memory
    pub db_path: Option<PathBuf>,
    pub league: LeagueConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            db_path: None,
            league: LeagueConfig::default(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Standings
        .route("/api/table", get(routes::table::get_table))
        .route("/api/league", get(routes::table::get_league_info))
        // Week progression
        .route("/api/playweek", post(routes::weeks::play_week))
        .route("/api/playall", post(routes::weeks::play_all))
        .route("/api/reset", post(routes::weeks::reset))
        .route(
            "/api/matches/week/:week",
            get(routes::weeks::matches_for_week),
        )
        // Result corrections
        .route("/api/match", put(routes::matches::correct_match))
        // Shared state
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::from_config(&config)?);
    let router = create_router(state);

    tracing::info!("League server starting on http://0.0.0.0:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
