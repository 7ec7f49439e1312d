//! Sentinel-PM - Machine Health Intelligence service
//!
//! HTTP service wrapping the sensor health reasoning engine.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (0.0.0.0:8080, ./data)
//! cargo run --release
//!
//! # Run with an explicit config file and address
//! cargo run --release -- --config machine_config.toml --addr 127.0.0.1:9090
//! ```
//!
//! # Environment Variables
//!
//! - `SENTINEL_CONFIG`: Path to the machine config TOML file
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sentinel_pm::api::{create_app, ApiState};
use sentinel_pm::config::{self, MachineConfig};
use sentinel_pm::engine::HealthReasoner;
use sentinel_pm::storage::RiskHistoryStorage;

#[derive(Parser, Debug)]
#[command(name = "sentinel-pm")]
#[command(about = "Machine Health Intelligence service")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default from config, "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Path to the machine config TOML file (overrides SENTINEL_CONFIG)
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// Disable the sled-backed risk history store
    #[arg(long)]
    no_history: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = CliArgs::parse();

    let machine_config = match &args.config {
        Some(path) => MachineConfig::load_from_file(std::path::Path::new(path))
            .with_context(|| format!("failed to load config from {path}"))?,
        None => MachineConfig::load(),
    };
    machine_config
        .validate()
        .context("machine configuration is invalid")?;
    config::init(machine_config.clone());

    let addr = args
        .addr
        .unwrap_or_else(|| machine_config.server.addr.clone());

    let history = if args.no_history {
        None
    } else {
        let path = std::path::Path::new(&machine_config.server.data_dir).join("risk_history");
        Some(
            RiskHistoryStorage::open(&path)
                .with_context(|| format!("failed to open risk history at {}", path.display()))?,
        )
    };

    info!(
        machine = %machine_config.machine.name,
        site = %machine_config.machine.site,
        history = history.is_some(),
        "starting sentinel-pm"
    );

    let state = ApiState::new(HealthReasoner::new(machine_config), history);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
