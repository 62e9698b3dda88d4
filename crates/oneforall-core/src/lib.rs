#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{AppConfig, ConfigError, DEFAULT_ALLOWED_FILE_TYPES, MAX_FILE_SIZE, UploadLimits};
pub use domain::{
    ConversionRequest, ConversionStatus, Document, Exam, NewConversion, ParseStatusError, Tool,
    ToolCategory,
};
pub use paths::{PathError, ensure_directory};
pub use ports::{
    ConversionRepository, CoreError, ExamRepository, Repos, RepositoryError, ToolRepository,
};
pub use services::{AppCore, ConversionService, ExamService, ToolService};

// Dev-dependencies used only by unit tests
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio as _;
