//! Exam service - read access to the exam catalog.

use crate::domain::Exam;
use crate::ports::{CoreError, ExamRepository};
use std::sync::Arc;

/// Service for exam lookups.
///
/// A thin facade over the injected `ExamRepository`.
pub struct ExamService {
    repo: Arc<dyn ExamRepository>,
}

impl ExamService {
    /// Create a new exam service with the given repository.
    pub fn new(repo: Arc<dyn ExamRepository>) -> Self {
        Self { repo }
    }

    /// List all exams.
    pub async fn list(&self) -> Result<Vec<Exam>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get an exam by id.
    pub async fn get(&self, id: &str) -> Result<Exam, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }
}
