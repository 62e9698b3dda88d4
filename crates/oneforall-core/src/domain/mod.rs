//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (JSON files, HTTP, etc.).
//!
//! # Structure
//!
//! - `exam` - Entrance exams and the documents they require
//! - `tool` - The tool catalog shown to users
//! - `conversion` - Conversion requests and their status

mod conversion;
mod exam;
mod tool;

pub use conversion::{ConversionRequest, ConversionStatus, NewConversion, ParseStatusError};
pub use exam::{Document, Exam};
pub use tool::{Tool, ToolCategory};
