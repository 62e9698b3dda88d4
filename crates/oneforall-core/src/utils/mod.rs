//! Utility functions.

pub mod validation;
