//! HTTP request handlers for the Axum web server.
//!
//! Each submodule covers one API area. Handlers are thin wrappers that
//! delegate to `AppCore` and wrap results in the response envelope.

pub mod conversions;
pub mod exams;
pub mod tools;
