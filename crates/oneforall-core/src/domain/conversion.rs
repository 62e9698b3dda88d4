//! Conversion request domain types.
//!
//! A conversion request records a user's intent to convert one document for
//! an exam. Nothing in this codebase performs the conversion; the status is
//! bookkeeping that an external worker may advance.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of a conversion request.
///
/// New requests always start as `Pending`. Any status may be written at any
/// time; `Completed` and `Failed` are terminal by convention only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

impl ConversionStatus {
    /// Parse a status from its wire representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Convert status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ConversionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is not a known conversion status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid conversion status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for ConversionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// A tracked conversion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub id: String,
    pub user_id: String,
    pub exam_id: String,
    pub document_id: String,
    pub file_name: String,
    /// Size of the source file in bytes.
    pub file_size: i64,
    pub status: ConversionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new conversion request.
///
/// The store assigns the id, status and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConversion {
    pub user_id: String,
    pub exam_id: String,
    pub document_id: String,
    pub file_name: String,
    pub file_size: i64,
}

impl NewConversion {
    /// Build the stored record for this request.
    pub fn into_request(self, id: String, now: DateTime<Utc>) -> ConversionRequest {
        ConversionRequest {
            id,
            user_id: self.user_id,
            exam_id: self.exam_id,
            document_id: self.document_id,
            file_name: self.file_name,
            file_size: self.file_size,
            status: ConversionStatus::Pending,
            error_msg: None,
            created_at: now,
            updated_at: now,
        }
    }
}
