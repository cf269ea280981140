//! Babysitter pay HTTP server.
//!
//! Loads the pay configuration, builds the router and serves it.
//!
//! # Environment Variables
//!
//! - `BABYSITTER_PAY_CONFIG`: Path to the YAML configuration (default: config/default.yaml)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use babysitter_pay::api::{AppState, create_router};
use babysitter_pay::config::ConfigLoader;

const DEFAULT_CONFIG_PATH: &str = "config/default.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config_path =
        env::var("BABYSITTER_PAY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let loader = ConfigLoader::load(&config_path)?;
    let rules = loader.config().rules;
    info!(
        path = %config_path,
        earliest_start_time = rules.earliest_start_time,
        latest_end_time = rules.latest_end_time,
        "Configuration loaded"
    );

    let app = create_router(AppState::from_loader(&loader)?);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
