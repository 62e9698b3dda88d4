#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod error;
pub mod factory;
pub mod json_store;
pub mod layout;
mod persist;

// Re-export factory for convenient access
pub use factory::StoreFactory;

pub use error::StoreError;
pub use json_store::JsonStore;
pub use layout::StorePaths;
