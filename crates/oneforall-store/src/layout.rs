//! On-disk layout of the data directory.

use std::path::{Path, PathBuf};

/// File name of the exam catalog.
pub const EXAMS_FILE: &str = "exams.json";
/// File name of the tool catalog.
pub const TOOLS_FILE: &str = "tools.json";
/// File name of the conversion request log.
pub const CONVERSIONS_FILE: &str = "conversions.json";
/// Subdirectory reserved for uploaded files.
pub const UPLOADS_DIR: &str = "uploads";

/// Resolved paths of every file the store touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub data_dir: PathBuf,
    pub uploads_dir: PathBuf,
    pub exams_file: PathBuf,
    pub tools_file: PathBuf,
    pub conversions_file: PathBuf,
}

impl StorePaths {
    /// Standard layout rooted at `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            uploads_dir: data_dir.join(UPLOADS_DIR),
            exams_file: data_dir.join(EXAMS_FILE),
            tools_file: data_dir.join(TOOLS_FILE),
            conversions_file: data_dir.join(CONVERSIONS_FILE),
            data_dir,
        }
    }
}
