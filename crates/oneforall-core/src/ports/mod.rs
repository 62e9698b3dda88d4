//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No file paths or serialization formats in any signature
//! - Traits are minimal and CRUD-focused for repositories
//! - Lookups that miss return `RepositoryError::NotFound`

pub mod conversion_repository;
pub mod exam_repository;
pub mod tool_repository;

use std::sync::Arc;
use thiserror::Error;

// Re-export repository traits for convenience
pub use conversion_repository::ConversionRepository;
pub use exam_repository::ExamRepository;
pub use tool_repository::ToolRepository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across adapters
/// without coupling them to concrete implementations. It lives in
/// `oneforall-core` so that `AppCore` can accept it without depending on
/// `oneforall-store`.
///
/// # Example
///
/// ```ignore
/// // In oneforall-store factory:
/// pub fn build_repos(store: Arc<JsonStore>) -> Repos { ... }
///
/// // In adapter bootstrap:
/// let repos = StoreFactory::build_repos(store);
/// let core = AppCore::new(repos, limits);
/// ```
#[derive(Clone)]
pub struct Repos {
    /// Read-only exam catalog.
    pub exams: Arc<dyn ExamRepository>,
    /// Read-only tool catalog.
    pub tools: Arc<dyn ToolRepository>,
    /// Conversion request store.
    pub conversions: Arc<dyn ConversionRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        exams: Arc<dyn ExamRepository>,
        tools: Arc<dyn ToolRepository>,
        conversions: Arc<dyn ConversionRepository>,
    ) -> Self {
        Self {
            exams,
            tools,
            conversions,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., I/O
/// or JSON errors) and provides a clean interface for services to handle
/// storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Whether this error means the requested entity does not exist.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound(_)))
    }
}
