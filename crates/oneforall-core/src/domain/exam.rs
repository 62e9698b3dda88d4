//! Exam domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entrance exam and the documents an applicant must upload for it.
///
/// Exams are seed data: they are loaded from disk at startup and never
/// created or modified through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub description: String,
    /// Required documents, in display order.
    #[serde(default)]
    pub documents: Vec<Document>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A document required by an exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    /// Human readable size hint, e.g. "10-200 KB".
    pub size: String,
    pub format: String,
    /// Maximum accepted size in bytes.
    pub max_size: i64,
    #[serde(default)]
    pub required: bool,
}
