//! Example to run the league server standalone
//!
//! Run with: cargo run -p league-server --example run_server

use league_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig {
        port: 8080,
        db_path: Some("league.db".into()),
        ..Default::default()
    };

    println!("Starting league server on port {}", config.port);
    println!("Try: curl -X POST http://localhost:{}/api/playweek", config.port);

    run_server(config).await
}
