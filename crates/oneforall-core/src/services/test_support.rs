//! In-memory port implementations for service tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{ConversionRequest, ConversionStatus, Exam, NewConversion, ToolCategory};
use crate::ports::{ConversionRepository, ExamRepository, RepositoryError, ToolRepository};

#[derive(Default)]
pub struct InMemoryConversions {
    records: Mutex<Vec<ConversionRequest>>,
    inserts: AtomicUsize,
}

impl InMemoryConversions {
    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConversionRepository for InMemoryConversions {
    async fn insert(&self, conversion: NewConversion) -> Result<ConversionRequest, RepositoryError> {
        let n = self.inserts.fetch_add(1, Ordering::SeqCst);
        let record = conversion.into_request(format!("conv-{n}"), Utc::now());
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn get_by_id(&self, id: &str) -> Result<ConversionRequest, RepositoryError> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("conversion {id}")))
    }

    async fn update_status(
        &self,
        id: &str,
        status: ConversionStatus,
        error_msg: Option<String>,
    ) -> Result<ConversionRequest, RepositoryError> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("conversion {id}")))?;
        record.status = status;
        record.error_msg = error_msg;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<ConversionRequest>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_by_exam(&self, exam_id: &str) -> Result<Vec<ConversionRequest>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.exam_id == exam_id)
            .cloned()
            .collect())
    }
}

pub struct StaticExams(pub Vec<Exam>);

#[async_trait]
impl ExamRepository for StaticExams {
    async fn list(&self) -> Result<Vec<Exam>, RepositoryError> {
        Ok(self.0.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Exam, RepositoryError> {
        self.0
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("exam {id}")))
    }
}

pub struct StaticTools(pub Vec<ToolCategory>);

#[async_trait]
impl ToolRepository for StaticTools {
    async fn list(&self) -> Result<Vec<ToolCategory>, RepositoryError> {
        Ok(self.0.clone())
    }
}
