//! Conversion request and response DTOs.

use oneforall_core::{ConversionRequest, ConversionStatus, NewConversion};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/conversions/request`.
///
/// Every field is mandatory; emptiness and size bounds are checked by the
/// conversion service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConversionRequest {
    pub user_id: String,
    pub exam_id: String,
    pub document_id: String,
    pub file_name: String,
    pub file_size: i64,
}

impl From<CreateConversionRequest> for NewConversion {
    fn from(req: CreateConversionRequest) -> Self {
        Self {
            user_id: req.user_id,
            exam_id: req.exam_id,
            document_id: req.document_id,
            file_name: req.file_name,
            file_size: req.file_size,
        }
    }
}

/// Progress view of a conversion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub id: String,
    pub status: ConversionStatus,
    pub input_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    /// Percent complete. Always 0: no conversion is performed here.
    pub progress: u8,
    pub message: String,
}

impl ConversionResponse {
    fn from_record(record: &ConversionRequest, message: &str) -> Self {
        Self {
            id: record.id.clone(),
            status: record.status,
            input_file: record.file_name.clone(),
            output_file: None,
            progress: 0,
            message: message.to_string(),
        }
    }

    /// Response for a freshly created request.
    pub fn queued(record: &ConversionRequest) -> Self {
        Self::from_record(record, "Conversion queued")
    }

    /// Response for a status lookup.
    pub fn in_progress(record: &ConversionRequest) -> Self {
        Self::from_record(record, "Conversion in progress")
    }
}
