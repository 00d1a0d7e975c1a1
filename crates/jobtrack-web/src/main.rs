mod error;
mod handlers;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use jobtrack::{load_config, Config, Tracker};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use crate::routes::build_router;
use crate::state::AppState;

/// Installs the tracing subscriber and forwards `log` records from the
/// library into it.
fn init_logging() -> Result<()> {
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer());
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;
    tracing_log::LogTracer::init().context("Failed to forward log records")?;
    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "jobtrack-web")]
#[command(version)]
#[command(about = "Kanban board for tracking job applications")]
struct Cli {
    /// JSON config file (uploadDirectory, databasePath, bindAddress)
    config: Option<PathBuf>,
}

impl Cli {
    /// The config file's settings, or the defaults when none was given.
    fn load_settings(&self) -> Result<Config> {
        match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load config from {}", path.display())),
            None => Ok(Config::default()),
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    let config = cli.load_settings()?;

    info!("Starting jobtrack-web v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Database: {}, resumes: {}",
        config.database_path.display(),
        config.upload_directory.display()
    );

    let tracker = Tracker::open(&config).context("Failed to open tracker storage")?;
    let app = build_router(AppState::new(tracker)).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
