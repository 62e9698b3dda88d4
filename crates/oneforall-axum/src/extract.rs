//! Request extractors.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// JSON body extractor that rejects with a 400 envelope.
///
/// Axum's own `Json` answers malformed or mistyped bodies with 415/422 and a
/// plain-text body; every client error here is a 400 `ApiResponse`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let message = match rejection {
                    JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
                    JsonRejection::JsonSyntaxError(err) => {
                        format!("JSON syntax error: {}", err.body_text())
                    }
                    JsonRejection::MissingJsonContentType(_) => {
                        "Missing 'Content-Type: application/json' header".to_string()
                    }
                    other => format!("Failed to parse JSON: {}", other.body_text()),
                };
                Err(HttpError::BadRequest(message))
            }
        }
    }
}
