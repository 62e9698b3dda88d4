//! Tool catalog repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::ToolCategory;

/// Read access to the tool catalog.
#[async_trait]
pub trait ToolRepository: Send + Sync {
    /// List all tool categories in catalog order.
    async fn list(&self) -> Result<Vec<ToolCategory>, RepositoryError>;
}
