// mediamanifest-core/tests/output_tests.rs

mod common;

use common::{BASE_URL, StubProbe};
use mediamanifest_core::config::{CONFIG_FILE_NAME, DEFAULT_BASE_URL};
use mediamanifest_core::output::{
    HTACCESS_CONTENTS, HTACCESS_FILE_NAME, resolve_output_dir, should_write_htaccess,
    write_htaccess, write_manifest,
};
use mediamanifest_core::{Manifest, ManifestAssembler, ManifestConfig, ManifestConfigBuilder, TrackBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn assemble(inputs: &[&str]) -> Manifest {
    let probe = StubProbe::returning(1080, 600, 4_000_000);
    ManifestAssembler::new(TrackBuilder::new(BASE_URL, "", &probe))
        .assemble(inputs)
        .unwrap()
}

#[test]
fn test_output_dir_next_to_local_source() {
    let manifest = assemble(&["/srv/media/Big_Movie.mp4", "/srv/media/subs.vtt"]);
    let config = ManifestConfig::default();
    assert_eq!(
        resolve_output_dir(&manifest, &config, None).unwrap(),
        PathBuf::from("/srv/media")
    );

    let manifest = assemble(&["movie.mp4"]);
    assert_eq!(
        resolve_output_dir(&manifest, &config, None).unwrap(),
        PathBuf::from(".")
    );
}

#[test]
fn test_output_dir_for_remote_source() {
    let manifest = assemble(&["https://cdn.example.com/media/movie.mp4"]);

    let config = ManifestConfig::default();
    assert_eq!(
        resolve_output_dir(&manifest, &config, None).unwrap(),
        PathBuf::from(".")
    );

    let config = ManifestConfigBuilder::new()
        .output_directory("/var/manifests")
        .build()
        .unwrap();
    assert_eq!(
        resolve_output_dir(&manifest, &config, None).unwrap(),
        PathBuf::from("/var/manifests")
    );
    assert_eq!(
        resolve_output_dir(&manifest, &config, Some(Path::new("/override"))).unwrap(),
        PathBuf::from("/override")
    );
}

#[test]
fn test_write_manifest_named_after_title() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let manifest = assemble(&["Big_Movie.mp4"]);

    let path = write_manifest(&manifest, dir.path())?;
    assert_eq!(path, dir.path().join("Big Movie.json"));

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(written["title"], "Big Movie");
    assert_eq!(written["duration"], 600);
    Ok(())
}

#[test]
fn test_htaccess_trigger() -> Result<(), Box<dyn std::error::Error>> {
    let with_subs = assemble(&["movie.mp4", "subs.vtt"]);
    let without_subs = assemble(&["movie.mp4"]);
    let enabled = ManifestConfigBuilder::new().create_htaccess(true).build()?;
    let disabled = ManifestConfig::default();

    assert!(should_write_htaccess(&with_subs, &enabled));
    assert!(!should_write_htaccess(&without_subs, &enabled));
    assert!(!should_write_htaccess(&with_subs, &disabled));

    let dir = tempdir()?;
    let path = write_htaccess(dir.path())?;
    assert_eq!(path, dir.path().join(HTACCESS_FILE_NAME));
    assert_eq!(fs::read_to_string(path)?, HTACCESS_CONTENTS);
    Ok(())
}

#[test]
fn test_config_created_when_missing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join(CONFIG_FILE_NAME);

    let config = ManifestConfig::load_or_create(&path)?;
    assert!(path.exists());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert!(!config.create_htaccess);

    fs::write(&path, r#"{ "baseUrl": "https://files.example.net/cytube/", "createHtAccess": true }"#)?;
    let config = ManifestConfig::load_or_create(&path)?;
    assert_eq!(config.base_url, "https://files.example.net/cytube");
    assert!(config.create_htaccess);
    Ok(())
}
