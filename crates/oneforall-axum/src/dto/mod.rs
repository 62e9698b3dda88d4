//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the wire format with explicit serialization control
//! and decouple domain types from their external representation.

pub mod conversion;
pub mod envelope;
pub mod health;

pub use conversion::{ConversionResponse, CreateConversionRequest};
pub use envelope::ApiResponse;
pub use health::HealthResponse;
