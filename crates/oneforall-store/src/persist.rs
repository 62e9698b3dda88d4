//! JSON array files on disk.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use oneforall_core::RepositoryError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

/// Read a JSON array from `path`.
///
/// Returns `Ok(None)` when the file does not exist, so callers can tell
/// "nothing stored yet" apart from a real read or parse failure.
pub(crate) async fn read_json_array<T: DeserializeOwned>(
    path: &Path,
) -> Result<Option<Vec<T>>, RepositoryError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(RepositoryError::Storage(format!(
                "read {}: {e}",
                path.display()
            )));
        }
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| RepositoryError::Serialization(format!("parse {}: {e}", path.display())))
}

/// Replace `path` with the pretty-printed JSON array `items`.
///
/// The array goes to a temporary file in the same directory, which is synced
/// and then renamed over the target. Readers and crashes see either the old
/// file or the new one, never a partial write.
pub(crate) async fn write_json_array<T: Serialize>(
    path: &Path,
    items: &[T],
) -> Result<(), RepositoryError> {
    let bytes = serde_json::to_vec_pretty(items)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || replace_file(&path, &bytes))
        .await
        .map_err(|e| RepositoryError::Storage(format!("write task failed: {e}")))?
}

fn replace_file(path: &Path, bytes: &[u8]) -> Result<(), RepositoryError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| {
        RepositoryError::Storage(format!(
            "create temporary file in {}: {e}",
            parent.display()
        ))
    })?;
    let write_err = |e: std::io::Error| {
        RepositoryError::Storage(format!("write temporary file for {}: {e}", path.display()))
    };
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // On failure the returned NamedTempFile is dropped, which deletes it
    tmp.persist(path).map_err(|e| {
        RepositoryError::Storage(format!("replace {}: {}", path.display(), e.error))
    })?;
    Ok(())
}

/// Move an unreadable file aside as `<name>.corrupt-<timestamp>`.
///
/// Returns the new location.
pub(crate) async fn quarantine(path: &Path) -> Result<PathBuf, RepositoryError> {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(
        ".corrupt-{}",
        Utc::now().format("%Y%m%dT%H%M%S%.3fZ")
    ));
    let target = path.with_file_name(name);

    tokio::fs::rename(path, &target).await.map_err(|e| {
        RepositoryError::Storage(format!(
            "move {} to {}: {e}",
            path.display(),
            target.display()
        ))
    })?;
    Ok(target)
}
