//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and domain logic. Services here are
//! pure orchestrators - they don't know about concrete implementations.

mod app_core;
mod conversion_service;
mod exam_service;
mod tool_service;

pub use app_core::AppCore;
pub use conversion_service::ConversionService;
pub use exam_service::ExamService;
pub use tool_service::ToolService;

#[cfg(test)]
pub(crate) mod test_support;
