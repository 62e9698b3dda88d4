//! Axum server bootstrap - the composition root.
//!
//! This module is the only place where the store, the core services and the
//! HTTP layer are wired together.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use oneforall_core::services::AppCore;
use oneforall_core::{AppConfig, UploadLimits};
use oneforall_store::{StoreFactory, StorePaths};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// Any origin when `origins` is empty, otherwise exactly those origins.
    pub fn from_origins(origins: Vec<String>) -> Self {
        if origins.is_empty() {
            Self::AllowAll
        } else {
            Self::AllowOrigins(origins)
        }
    }
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Directory holding the JSON data files.
    pub data_dir: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Limits applied to conversion requests.
    pub upload_limits: UploadLimits,
}

impl ServerConfig {
    /// Derive the server configuration from application configuration.
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            port: config.port,
            data_dir: config.data_dir.clone(),
            cors: CorsConfig::from_origins(config.cors_origins.clone()),
            upload_limits: config.upload_limits.clone(),
        }
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

/// Open the store and assemble the services.
pub async fn bootstrap(config: ServerConfig) -> Result<AxumContext> {
    let paths = StorePaths::new(&config.data_dir);

    tracing::info!(
        target: "oneforall.paths",
        data_dir = %paths.data_dir.display(),
        uploads_dir = %paths.uploads_dir.display(),
        "Axum bootstrap resolved paths"
    );

    let store = StoreFactory::open_store(paths).await?;
    let core = Arc::new(StoreFactory::build_app_core(store, config.upload_limits));

    Ok(AxumContext { core })
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(config.clone()).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("1forall backend listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_from_empty_origins_allows_all() {
        assert!(matches!(
            CorsConfig::from_origins(Vec::new()),
            CorsConfig::AllowAll
        ));
        assert!(matches!(
            CorsConfig::from_origins(vec!["https://1forall.in".into()]),
            CorsConfig::AllowOrigins(o) if o.len() == 1
        ));
    }

    #[test]
    fn test_server_config_follows_app_config() {
        let app = AppConfig {
            port: 9100,
            data_dir: PathBuf::from("/srv/oneforall"),
            ..AppConfig::default()
        };
        let config = ServerConfig::from_app_config(&app);
        assert_eq!(config.port, 9100);
        assert_eq!(config.data_dir, PathBuf::from("/srv/oneforall"));
        assert!(matches!(config.cors, CorsConfig::AllowAll));
        assert_eq!(config.upload_limits, UploadLimits::default());
    }
}
