//! Writing the manifest (and the optional access-control file) to disk.

use crate::classify::Identifier;
use crate::config::ManifestConfig;
use crate::error::{CoreError, CoreResult};
use crate::manifest::Manifest;

use std::fs;
use std::path::{Path, PathBuf};

/// Name of the access-control file written next to the manifest.
pub const HTACCESS_FILE_NAME: &str = ".htaccess";

/// Lets the playback platform fetch text tracks cross-origin.
pub const HTACCESS_CONTENTS: &str = "Header set Access-Control-Allow-Origin \"*\"";

/// Decides where the manifest is written.
///
/// An explicit override wins. Otherwise the manifest goes next to the first
/// video source when that is a local file, or to the configured output
/// directory (falling back to the current directory) when it is remote.
pub fn resolve_output_dir(
    manifest: &Manifest,
    config: &ManifestConfig,
    override_dir: Option<&Path>,
) -> CoreResult<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    let primary = manifest.primary_source().ok_or(CoreError::NoPrimarySource)?;
    match Identifier::parse(&primary.origin)? {
        Identifier::Local(path) => Ok(Path::new(&path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)),
        Identifier::Web(_) => Ok(config
            .output_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))),
    }
}

/// File name of the manifest: `<title>.json`.
pub fn manifest_file_name(manifest: &Manifest) -> String {
    format!("{}.json", manifest.title)
}

/// Writes the manifest as pretty JSON into `dir`, returning the file path.
pub fn write_manifest(manifest: &Manifest, dir: &Path) -> CoreResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(manifest_file_name(manifest));
    fs::write(&path, manifest.to_json_pretty()?)?;
    log::info!("Wrote manifest to {}", path.display());
    Ok(path)
}

/// The access-control file is only needed for text tracks, and only when enabled.
pub fn should_write_htaccess(manifest: &Manifest, config: &ManifestConfig) -> bool {
    config.create_htaccess && !manifest.text_tracks.is_empty()
}

/// Writes the access-control file into `dir`, returning its path.
pub fn write_htaccess(dir: &Path) -> CoreResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(HTACCESS_FILE_NAME);
    fs::write(&path, HTACCESS_CONTENTS)?;
    log::info!("Wrote htaccess to {}", dir.display());
    Ok(path)
}
