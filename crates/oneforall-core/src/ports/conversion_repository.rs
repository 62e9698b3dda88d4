//! Conversion repository trait definition.
//!
//! This port defines the interface for conversion request persistence.
//! Implementations handle identifier generation, timestamps and storage.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{ConversionRequest, ConversionStatus, NewConversion};

/// Repository for conversion requests.
///
/// Each method is atomic on its own; no transaction spans several calls.
#[async_trait]
pub trait ConversionRepository: Send + Sync {
    /// Record a new request.
    ///
    /// The returned request has a fresh unique id, status `Pending` and
    /// `created_at == updated_at`. The request is durable once this returns.
    async fn insert(&self, conversion: NewConversion) -> Result<ConversionRequest, RepositoryError>;

    /// Get a request by id.
    async fn get_by_id(&self, id: &str) -> Result<ConversionRequest, RepositoryError>;

    /// Overwrite the status and error message of a request and refresh its
    /// update timestamp. Returns the updated request.
    async fn update_status(
        &self,
        id: &str,
        status: ConversionStatus,
        error_msg: Option<String>,
    ) -> Result<ConversionRequest, RepositoryError>;

    /// All requests made by a user, in creation order.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<ConversionRequest>, RepositoryError>;

    /// All requests made for an exam, in creation order.
    async fn list_by_exam(&self, exam_id: &str) -> Result<Vec<ConversionRequest>, RepositoryError>;
}
