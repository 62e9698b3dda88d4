//! JSON file implementation of the repository ports.
//!
//! One `JsonStore` owns all three collections behind a single
//! `tokio::sync::RwLock`. Reads share the lock; mutations hold it
//! exclusively for the whole in-memory change plus the file rewrite, so at
//! most one write to `conversions.json` is in flight at any time.

use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::sync::RwLock;
use uuid::Uuid;

use oneforall_core::{
    ConversionRepository, ConversionRequest, ConversionStatus, Exam, ExamRepository,
    NewConversion, RepositoryError, ToolCategory, ToolRepository, ensure_directory,
};

use crate::error::StoreError;
use crate::layout::StorePaths;
use crate::persist::{quarantine, read_json_array, write_json_array};

#[derive(Debug, Default)]
struct StoreState {
    exams: Vec<Exam>,
    tools: Vec<ToolCategory>,
    conversions: Vec<ConversionRequest>,
}

/// In-memory record store persisted as flat JSON files.
///
/// Exams and tool categories are read once at startup and never written.
/// Conversion requests are appended or updated in memory and the whole
/// collection is rewritten to disk before the call returns. If the rewrite
/// fails the in-memory change is rolled back, so memory never runs ahead of
/// the file.
#[derive(Debug)]
pub struct JsonStore {
    paths: StorePaths,
    state: RwLock<StoreState>,
}

impl JsonStore {
    /// Prepare the data directory and load every collection.
    ///
    /// Creates the data and uploads directories if needed. Missing or
    /// unreadable catalog files are logged and treated as empty. A missing
    /// conversions file simply means nothing has been recorded yet; an
    /// unreadable one is renamed to `conversions.json.corrupt-<timestamp>`
    /// and the store starts empty. Fails if a directory cannot be created or
    /// the unreadable file cannot be moved aside.
    pub async fn open(paths: StorePaths) -> Result<Self, StoreError> {
        for dir in [&paths.data_dir, &paths.uploads_dir] {
            ensure_directory(dir).map_err(|source| StoreError::Init {
                path: dir.clone(),
                source,
            })?;
        }

        let exams = load_catalog::<Exam>(&paths.exams_file, "exams").await;
        let tools = load_catalog::<ToolCategory>(&paths.tools_file, "tools").await;
        let conversions = match read_json_array(&paths.conversions_file).await {
            Ok(Some(conversions)) => conversions,
            Ok(None) => Vec::new(),
            Err(e) => {
                // The next write would replace the file, so keep its bytes
                let moved_to = quarantine(&paths.conversions_file).await.map_err(|source| {
                    StoreError::Quarantine {
                        path: paths.conversions_file.clone(),
                        source,
                    }
                })?;
                tracing::warn!(
                    path = %paths.conversions_file.display(),
                    moved_to = %moved_to.display(),
                    error = %e,
                    "Unreadable conversions file moved aside, starting empty"
                );
                Vec::new()
            }
        };

        tracing::info!(
            target: "oneforall.store",
            data_dir = %paths.data_dir.display(),
            exams = exams.len(),
            tool_categories = tools.len(),
            conversions = conversions.len(),
            "Storage initialized"
        );

        Ok(Self {
            paths,
            state: RwLock::new(StoreState {
                exams,
                tools,
                conversions,
            }),
        })
    }

    /// Paths this store reads and writes.
    pub const fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Number of conversion requests currently held.
    pub async fn conversion_count(&self) -> usize {
        self.state.read().await.conversions.len()
    }

    async fn persist_conversions(
        &self,
        conversions: &[ConversionRequest],
    ) -> Result<(), RepositoryError> {
        write_json_array(&self.paths.conversions_file, conversions)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    path = %self.paths.conversions_file.display(),
                    error = %e,
                    "Failed to persist conversions"
                );
            })
    }
}

async fn load_catalog<T: DeserializeOwned>(path: &Path, what: &str) -> Vec<T> {
    match read_json_array(path).await {
        Ok(Some(items)) => items,
        Ok(None) => {
            tracing::warn!(path = %path.display(), "No {what} file found, starting empty");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to load {what}, starting empty");
            Vec::new()
        }
    }
}

/// A v4 UUID not already used by any stored request.
fn fresh_id(conversions: &[ConversionRequest]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !conversions.iter().any(|c| c.id == id) {
            return id;
        }
    }
}

#[async_trait]
impl ExamRepository for JsonStore {
    async fn list(&self) -> Result<Vec<Exam>, RepositoryError> {
        Ok(self.state.read().await.exams.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Exam, RepositoryError> {
        self.state
            .read()
            .await
            .exams
            .iter()
            .find(|exam| exam.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("exam not found: {id}")))
    }
}

#[async_trait]
impl ToolRepository for JsonStore {
    async fn list(&self) -> Result<Vec<ToolCategory>, RepositoryError> {
        Ok(self.state.read().await.tools.clone())
    }
}

#[async_trait]
impl ConversionRepository for JsonStore {
    async fn insert(&self, conversion: NewConversion) -> Result<ConversionRequest, RepositoryError> {
        let mut state = self.state.write().await;

        let id = fresh_id(&state.conversions);
        let record = conversion.into_request(id, Utc::now());
        state.conversions.push(record.clone());

        if let Err(e) = self.persist_conversions(&state.conversions).await {
            state.conversions.pop();
            return Err(e);
        }
        Ok(record)
    }

    async fn get_by_id(&self, id: &str) -> Result<ConversionRequest, RepositoryError> {
        self.state
            .read()
            .await
            .conversions
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("conversion not found: {id}")))
    }

    async fn update_status(
        &self,
        id: &str,
        status: ConversionStatus,
        error_msg: Option<String>,
    ) -> Result<ConversionRequest, RepositoryError> {
        let mut state = self.state.write().await;

        let index = state
            .conversions
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("conversion not found: {id}")))?;

        let previous = state.conversions[index].clone();
        let record = &mut state.conversions[index];
        record.status = status;
        record.error_msg = error_msg;
        // Clock steps backwards must not break updated_at >= created_at
        record.updated_at = Utc::now().max(previous.updated_at);

        if let Err(e) = self.persist_conversions(&state.conversions).await {
            state.conversions[index] = previous;
            return Err(e);
        }
        Ok(state.conversions[index].clone())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<ConversionRequest>, RepositoryError> {
        Ok(self
            .state
            .read()
            .await
            .conversions
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_by_exam(&self, exam_id: &str) -> Result<Vec<ConversionRequest>, RepositoryError> {
        Ok(self
            .state
            .read()
            .await
            .conversions
            .iter()
            .filter(|c| c.exam_id == exam_id)
            .cloned()
            .collect())
    }
}
