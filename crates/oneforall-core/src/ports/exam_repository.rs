//! Exam repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::Exam;

/// Read access to the exam catalog.
#[async_trait]
pub trait ExamRepository: Send + Sync {
    /// List all exams in catalog order.
    async fn list(&self) -> Result<Vec<Exam>, RepositoryError>;

    /// Get an exam by its identifier.
    async fn get_by_id(&self, id: &str) -> Result<Exam, RepositoryError>;
}
