//! Input validation for conversion requests.
//!
//! These checks run before a request reaches the store; the store itself
//! trusts its input.

use crate::config::UploadLimits;
use crate::domain::NewConversion;
use crate::ports::CoreError;

/// Characters replaced by `_` in stored file names.
const ILLEGAL_FILE_NAME_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Whether `file_size` is positive and at most `max_size`.
pub const fn validate_file_size(file_size: i64, max_size: i64) -> bool {
    file_size > 0 && file_size <= max_size
}

/// Replace path separators and shell-hostile characters with `_`.
///
/// ```rust
/// use oneforall_core::utils::validation::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("../etc/passwd"), ".._etc_passwd");
/// ```
pub fn sanitize_file_name(file_name: &str) -> String {
    file_name.replace(ILLEGAL_FILE_NAME_CHARS, "_")
}

/// Validate a creation request against `limits`.
///
/// Checks that every identifier and the file name are non-blank and that the
/// size lies in `1..=limits.max_file_size`. The file type is not checked.
/// Returns the request with its file name sanitized.
pub fn validate_new_conversion(
    conversion: NewConversion,
    limits: &UploadLimits,
) -> Result<NewConversion, CoreError> {
    let required = [
        ("user_id", &conversion.user_id),
        ("exam_id", &conversion.exam_id),
        ("document_id", &conversion.document_id),
        ("file_name", &conversion.file_name),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!("{field} is required")));
        }
    }

    if !validate_file_size(conversion.file_size, limits.max_file_size) {
        return Err(CoreError::Validation(format!(
            "file_size must be between 1 and {} bytes",
            limits.max_file_size
        )));
    }

    Ok(NewConversion {
        file_name: sanitize_file_name(&conversion.file_name),
        ..conversion
    })
}
