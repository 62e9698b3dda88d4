//! Environment-driven application configuration.
//!
//! Values are read from the process environment. Entry points load a `.env`
//! file (via `dotenvy`) before calling [`AppConfig::from_env`].

use std::path::PathBuf;

use thiserror::Error;

/// Maximum accepted upload size: 1 GiB.
pub const MAX_FILE_SIZE: i64 = 1_073_741_824;

/// Upload file types advertised by the server.
pub const DEFAULT_ALLOWED_FILE_TYPES: &[&str] = &[
    ".pdf", ".jpg", ".jpeg", ".png", ".docx", ".doc", ".xlsx", ".pptx",
];

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default environment label.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Limits applied to incoming conversion requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadLimits {
    /// Largest accepted file, in bytes.
    pub max_file_size: i64,
    /// Upload types advertised to clients, lowercase with the leading dot.
    /// Conversion requests are not checked against this list.
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
            allowed_extensions: DEFAULT_ALLOWED_FILE_TYPES
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Deployment label ("development", "production", ...). Informational only.
    pub environment: String,
    pub upload_limits: UploadLimits,
    pub storage_path: PathBuf,
    pub upload_dir: PathBuf,
    /// Directory holding `exams.json`, `tools.json` and `conversions.json`.
    pub data_dir: PathBuf,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            upload_limits: UploadLimits::default(),
            storage_path: PathBuf::from("./data"),
            upload_dir: PathBuf::from("./uploads"),
            data_dir: PathBuf::from("./data"),
            cors_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "PORT",
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => defaults.port,
        };

        let cors_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            port,
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            upload_limits: defaults.upload_limits,
            storage_path: lookup("STORAGE_PATH").map_or(defaults.storage_path, PathBuf::from),
            upload_dir: lookup("UPLOAD_DIR").map_or(defaults.upload_dir, PathBuf::from),
            data_dir: lookup("DATA_DIR").map_or(defaults.data_dir, PathBuf::from),
            cors_origins,
        })
    }

    /// Whether this deployment is labelled as production.
    pub fn is_production(&self) -> bool {
        matches!(
            self.environment.to_ascii_lowercase().as_str(),
            "production" | "prod"
        )
    }
}
