//! Directory helpers shared by the store and entry points.

mod ensure;
mod error;

pub use ensure::ensure_directory;
pub use error::PathError;
