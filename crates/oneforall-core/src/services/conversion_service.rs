//! Conversion service - validates and records conversion requests.

use crate::config::UploadLimits;
use crate::domain::{ConversionRequest, ConversionStatus, NewConversion};
use crate::ports::{ConversionRepository, CoreError};
use crate::utils::validation::validate_new_conversion;
use std::sync::Arc;

/// Service for conversion request operations.
///
/// Creation requests are validated against the configured [`UploadLimits`]
/// before they reach the repository.
pub struct ConversionService {
    repo: Arc<dyn ConversionRepository>,
    limits: UploadLimits,
}

impl ConversionService {
    /// Create a new conversion service.
    pub fn new(repo: Arc<dyn ConversionRepository>, limits: UploadLimits) -> Self {
        Self { repo, limits }
    }

    /// The limits applied to new requests.
    pub const fn limits(&self) -> &UploadLimits {
        &self.limits
    }

    /// Validate and record a new conversion request.
    pub async fn request(&self, conversion: NewConversion) -> Result<ConversionRequest, CoreError> {
        let conversion = validate_new_conversion(conversion, &self.limits)?;
        let created = self.repo.insert(conversion).await?;
        tracing::info!(
            conversion_id = %created.id,
            user_id = %created.user_id,
            exam_id = %created.exam_id,
            document_id = %created.document_id,
            file_size = created.file_size,
            "Conversion request recorded"
        );
        Ok(created)
    }

    /// Get a conversion request by id.
    pub async fn get(&self, id: &str) -> Result<ConversionRequest, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// List a user's requests in creation order.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<ConversionRequest>, CoreError> {
        self.repo.list_by_user(user_id).await.map_err(CoreError::from)
    }

    /// List an exam's requests in creation order.
    pub async fn list_for_exam(&self, exam_id: &str) -> Result<Vec<ConversionRequest>, CoreError> {
        self.repo.list_by_exam(exam_id).await.map_err(CoreError::from)
    }

    /// Record a status change.
    ///
    /// Any status may follow any other; no transition table is enforced.
    pub async fn update_status(
        &self,
        id: &str,
        status: ConversionStatus,
        error_msg: Option<String>,
    ) -> Result<ConversionRequest, CoreError> {
        let updated = self.repo.update_status(id, status, error_msg).await?;
        tracing::debug!(conversion_id = %id, status = %status, "Conversion status updated");
        Ok(updated)
    }
}
