use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn mediamanifest_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mediamanifest").expect("Failed to find mediamanifest binary");
    cmd.env_remove("MEDIAMANIFEST_CONFIG")
        .env_remove("MEDIAMANIFEST_BASE_URL");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    mediamanifest_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("generate"))
        .stdout(contains("info"));
}

#[test]
fn test_generate_requires_inputs() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    mediamanifest_cmd()
        .arg("generate")
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .assert()
        .failure();
    Ok(())
}

#[test]
fn test_generate_rejects_insecure_input() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    mediamanifest_cmd()
        .arg("generate")
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .arg("http://cdn.example.com/movie.mp4")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Insecure resource"));
    Ok(())
}

#[test]
fn test_generate_subtitles_only_has_no_primary_source() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let subs = dir.path().join("subs.vtt");
    std::fs::write(&subs, "WEBVTT\n")?;

    mediamanifest_cmd()
        .arg("generate")
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .arg(&subs)
        .assert()
        .failure()
        .stderr(contains("no primary source"));

    // Nothing is written when assembly fails
    assert!(!dir.path().join("subs.json").exists());
    Ok(())
}

#[test]
fn test_generate_file_without_extension() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let license = dir.path().join("LICENSE");
    std::fs::write(&license, "MIT")?;

    mediamanifest_cmd()
        .arg("generate")
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .arg(&license)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("No file extension"));
    Ok(())
}

#[test]
fn test_missing_config_is_created() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let config_path = dir.path().join("config.json");
    let subs = dir.path().join("subs.vtt");
    std::fs::write(&subs, "WEBVTT\n")?;

    // Fails on the missing video, after the config has been loaded
    mediamanifest_cmd()
        .arg("generate")
        .arg("--config")
        .arg(&config_path)
        .arg(&subs)
        .assert()
        .failure();

    let written = std::fs::read_to_string(&config_path)?;
    assert!(written.contains("\"baseUrl\""));
    assert!(written.contains("https://example.com/media"));
    Ok(())
}

#[test]
fn test_insecure_configured_base_url() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, r#"{ "baseUrl": "http://insecure.example.com" }"#)?;

    mediamanifest_cmd()
        .arg("generate")
        .arg("--config")
        .arg(&config_path)
        .arg("movie.mp4")
        .assert()
        .failure()
        .stderr(contains("does not begin with"));
    Ok(())
}

#[test]
fn test_invalid_base_url_flag() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    mediamanifest_cmd()
        .arg("generate")
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .arg("--base-url")
        .arg("ftp://files.example.com")
        .arg("movie.mp4")
        .assert()
        .failure()
        .stderr(contains("Invalid configuration"));
    Ok(())
}

#[test]
fn test_info_rejects_insecure_input() {
    // Fails at the ffprobe check or at URL parsing, whichever comes first
    mediamanifest_cmd()
        .arg("info")
        .arg("http://cdn.example.com/movie.mp4")
        .assert()
        .failure();
}
