//! Filename helpers shared by every track kind, plus small formatting utilities.
//!
//! All helpers operate on plain strings so that local paths and the last
//! segment of a web resource's URL path go through the same rules.

use crate::error::{CoreError, CoreResult};
use std::path::Path;

/// Extracts the final path segment of a local path.
/// Returns an error if the path has no filename component.
pub fn get_filename_safe(path: &str) -> CoreResult<String> {
    Ok(Path::new(path)
        .file_name()
        .ok_or_else(|| CoreError::PathError(format!("Failed to get filename for {path}")))?
        .to_string_lossy()
        .to_string())
}

fn last_period(file_name: &str) -> CoreResult<usize> {
    file_name
        .rfind('.')
        .ok_or_else(|| CoreError::NoExtension(file_name.to_string()))
}

/// Returns the extension of `file_name`, including the leading period.
pub fn extension(file_name: &str) -> CoreResult<&str> {
    Ok(&file_name[last_period(file_name)?..])
}

/// Returns `file_name` with its extension stripped.
pub fn file_stem(file_name: &str) -> CoreResult<&str> {
    Ok(&file_name[..last_period(file_name)?])
}

/// Derives a human readable title: the stem with underscores turned into spaces.
pub fn title_from_filename(file_name: &str) -> CoreResult<String> {
    Ok(file_stem(file_name)?.replace('_', " "))
}

/// Formats seconds as HH:MM:SS (e.g., 3725 -> "01:02:05").
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}
