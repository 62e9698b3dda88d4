//! Tool service.

use crate::domain::ToolCategory;
use crate::ports::{CoreError, ToolRepository};
use std::sync::Arc;

/// Service for the tool catalog.
pub struct ToolService {
    repo: Arc<dyn ToolRepository>,
}

impl ToolService {
    pub fn new(repo: Arc<dyn ToolRepository>) -> Self {
        Self { repo }
    }

    /// List all tool categories.
    pub async fn list(&self) -> Result<Vec<ToolCategory>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }
}
