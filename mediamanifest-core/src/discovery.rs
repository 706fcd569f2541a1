//! Expansion of command-line inputs into an ordered list of identifiers.
//!
//! A single directory argument stands for its immediate files, and its name
//! becomes the folder prefix used when building URLs. Files in it without an
//! extension (README, LICENSE) are skipped; an explicitly named one still
//! fails classification. Anything else is passed through untouched, in the
//! order given.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Inputs ready for assembly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputSet {
    /// Identifiers in processing order
    pub identifiers: Vec<String>,
    /// `"<directory-name>/"` when a directory was expanded, otherwise empty
    pub folder_prefix: String,
}

/// Expands the raw inputs.
///
/// # Errors
///
/// * `CoreError::PathError` - no inputs were given, or the directory has no usable name
/// * `CoreError::Io` - the directory could not be read
pub fn expand_inputs<S: AsRef<str>>(inputs: &[S]) -> CoreResult<InputSet> {
    match inputs {
        [] => Err(CoreError::PathError("No input files given".to_string())),
        [single] if Path::new(single.as_ref()).is_dir() => {
            let dir = Path::new(single.as_ref());
            let folder_prefix = format!("{}/", directory_name(dir)?);
            let identifiers = find_directory_files(dir)?
                .into_iter()
                .filter(|path| {
                    let has_extension = path
                        .file_name()
                        .is_some_and(|name| name.to_string_lossy().contains('.'));
                    if !has_extension {
                        log::warn!("File was not valid, skipping: {}", path.display());
                    }
                    has_extension
                })
                .map(|path| path.to_string_lossy().into_owned())
                .collect();
            Ok(InputSet {
                identifiers,
                folder_prefix,
            })
        }
        _ => Ok(InputSet {
            identifiers: inputs.iter().map(|s| s.as_ref().to_string()).collect(),
            folder_prefix: String::new(),
        }),
    }
}

/// Lists the regular files directly inside `dir`, sorted by file name.
/// Subdirectories are not searched.
pub fn find_directory_files(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.is_file().then_some(path)
        })
        .collect();
    files.sort();

    log::debug!("Found {} files in {}", files.len(), dir.display());
    Ok(files)
}

/// Base name of a directory, resolving `.` and similar through the filesystem.
fn directory_name(dir: &Path) -> CoreResult<String> {
    let resolved = dir.canonicalize()?;
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            CoreError::PathError(format!("Could not determine directory name for '{}'", dir.display()))
        })
}
