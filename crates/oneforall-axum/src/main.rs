//! `oneforall-server` entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oneforall_axum::{ServerConfig, start_server};
use oneforall_core::AppConfig;

/// 1forall backend HTTP server.
#[derive(Debug, Parser)]
#[command(name = "oneforall-server", version, about)]
struct Cli {
    /// Port to listen on (overrides PORT).
    #[arg(long)]
    port: Option<u16>,

    /// Directory holding the JSON data files (overrides DATA_DIR).
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    init_tracing()?;

    let cli = Cli::parse();

    let mut app_config = AppConfig::from_env()?;
    if let Some(port) = cli.port {
        app_config.port = port;
    }
    if let Some(data_dir) = cli.data_dir {
        app_config.data_dir = data_dir;
    }

    info!(
        environment = %app_config.environment,
        port = app_config.port,
        production = app_config.is_production(),
        data_dir = %app_config.data_dir.display(),
        storage_path = %app_config.storage_path.display(),
        upload_dir = %app_config.upload_dir.display(),
        max_file_size = app_config.upload_limits.max_file_size,
        allowed_file_types = ?app_config.upload_limits.allowed_extensions,
        "Starting 1forall backend"
    );

    start_server(ServerConfig::from_app_config(&app_config)).await
}

/// Initialize tracing subscriber.
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oneforall=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    Ok(())
}
