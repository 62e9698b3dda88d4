//! Composition utilities for building `AppCore` on top of a [`JsonStore`].
//!
//! Construction only; no domain logic lives here.

use std::sync::Arc;

use oneforall_core::{AppCore, Repos, UploadLimits};

use crate::error::StoreError;
use crate::json_store::JsonStore;
use crate::layout::StorePaths;

/// Factory for wiring repositories backed by JSON files.
pub struct StoreFactory;

impl StoreFactory {
    /// Open the store rooted at `paths`.
    pub async fn open_store(paths: StorePaths) -> Result<Arc<JsonStore>, StoreError> {
        Ok(Arc::new(JsonStore::open(paths).await?))
    }

    /// Build every repository port from one shared store.
    ///
    /// All three ports point at the same `JsonStore`, so they share its lock.
    pub fn build_repos(store: Arc<JsonStore>) -> Repos {
        Repos::new(store.clone(), store.clone(), store)
    }

    /// Build a complete `AppCore` from a store and the upload limits.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = StoreFactory::build_repos(store);
    /// let core = AppCore::new(repos, limits);
    /// ```
    pub fn build_app_core(store: Arc<JsonStore>, limits: UploadLimits) -> AppCore {
        AppCore::new(Self::build_repos(store), limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oneforall_core::{ConversionStatus, CoreError, NewConversion};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_app_core_over_json_store() {
        let temp = tempdir().unwrap();
        let store = StoreFactory::open_store(StorePaths::new(temp.path()))
            .await
            .unwrap();
        let core = StoreFactory::build_app_core(Arc::clone(&store), UploadLimits::default());

        let created = core
            .conversions()
            .request(NewConversion {
                user_id: "u1".into(),
                exam_id: "neet".into(),
                document_id: "photo".into(),
                file_name: "photo.jpg".into(),
                file_size: 2048,
            })
            .await
            .unwrap();
        assert_eq!(created.status, ConversionStatus::Pending);
        assert_eq!(store.conversion_count().await, 1);

        let err = core.exams().get("missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(core.tools().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_store() {
        let temp = tempdir().unwrap();
        let store = StoreFactory::open_store(StorePaths::new(temp.path()))
            .await
            .unwrap();
        let core = StoreFactory::build_app_core(Arc::clone(&store), UploadLimits::default());

        let err = core
            .conversions()
            .request(NewConversion {
                user_id: "u1".into(),
                exam_id: "neet".into(),
                document_id: "photo".into(),
                file_name: "photo.jpg".into(),
                file_size: 0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(store.conversion_count().await, 0);
        assert!(!store.paths().conversions_file.exists());
    }
}
