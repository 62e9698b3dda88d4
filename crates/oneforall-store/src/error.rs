//! Store setup errors.

use std::path::PathBuf;

use oneforall_core::{PathError, RepositoryError};
use thiserror::Error;

/// Errors raised while opening a [`JsonStore`](crate::JsonStore).
///
/// Unreadable data files degrade to empty collections. Startup fails only when
/// a directory cannot be prepared or an unreadable conversions file cannot be
/// moved aside before it would be overwritten.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required directory could not be prepared.
    #[error("Failed to initialize storage at {path}: {source}")]
    Init {
        path: PathBuf,
        #[source]
        source: PathError,
    },

    /// An unreadable conversions file could not be preserved.
    #[error("Failed to move unreadable {path} aside: {source}")]
    Quarantine {
        path: PathBuf,
        #[source]
        source: RepositoryError,
    },
}
