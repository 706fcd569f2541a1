// ============================================================================
// mediamanifest-cli/src/commands/generate.rs
// ============================================================================
//
// GENERATE COMMAND: builds and writes a manifest
//
// Flow:
// 1. Read (or create) config.json, apply --base-url, then validate
// 2. Expand inputs (a single directory becomes its files)
// 3. Assemble the manifest, probing each video
// 4. Write <title>.json, plus .htaccess when subtitles are present and enabled
//    (or print the manifest with --stdout)

use crate::cli::GenerateArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::output::{print_heading, print_info, print_section};

use mediamanifest_core::config::CONFIG_FILE_NAME;
use mediamanifest_core::output::{resolve_output_dir, should_write_htaccess, write_htaccess, write_manifest};
use mediamanifest_core::{
    CoreError, FfprobeMediaProbe, Manifest, ManifestAssembler, ManifestConfig,
    ManifestConfigBuilder, MediaProbe, TrackBuilder, expand_inputs, format_duration,
};

use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;

/// Resolves the configuration path: explicit flag, or config.json next to the executable.
pub fn config_path(explicit: Option<PathBuf>) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let exe = std::env::current_exe().cli_context("Could not locate the running executable")?;
    let dir = exe.parent().ok_or_else(|| {
        CoreError::PathError(format!("Executable {} has no parent directory", exe.display()))
    })?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Reads the configuration file and layers command-line overrides on top.
///
/// Validation runs once, on the merged values, so a valid `--base-url` can
/// stand in for a bad one in the file.
pub fn load_config(args: &GenerateArgs) -> CliResult<ManifestConfig> {
    let path = config_path(args.config.clone())?;
    debug!("Using configuration file {}", path.display());

    let mut builder = ManifestConfigBuilder::from_config(ManifestConfig::read_or_create(&path)?);
    if let Some(base_url) = &args.base_url {
        debug!("Overriding base URL with {}", base_url);
        builder = builder.base_url(base_url.as_str());
    }
    builder.build()
}

/// Executes the generate command with ffprobe.
pub fn run_generate(args: GenerateArgs) -> CliResult<()> {
    let probe = FfprobeMediaProbe::new();
    generate_with(&args, &probe, &mut io::stdout().lock())
}

/// Runs the generate command against any probe. With `--stdout` the JSON
/// goes to `out`; otherwise files are written and a summary is printed.
pub fn generate_with<W: Write>(
    args: &GenerateArgs,
    probe: &dyn MediaProbe,
    out: &mut W,
) -> CliResult<()> {
    let config = load_config(args)?;
    let inputs = expand_inputs(&args.inputs)?;
    debug!(
        "Processing {} input(s) with folder prefix '{}'",
        inputs.identifiers.len(),
        inputs.folder_prefix
    );

    let builder = TrackBuilder::new(&config.base_url, &inputs.folder_prefix, probe);
    let manifest = ManifestAssembler::new(builder).assemble(&inputs.identifiers)?;

    if args.stdout {
        writeln!(out, "{}", manifest.to_json_pretty()?)?;
        return Ok(());
    }

    let output_dir = resolve_output_dir(&manifest, &config, args.output_dir.as_deref())?;
    let manifest_path = write_manifest(&manifest, &output_dir)
        .cli_with_context(|| format!("Writing manifest to {}", output_dir.display()))?;

    let htaccess_path = if should_write_htaccess(&manifest, &config) {
        Some(write_htaccess(&output_dir)?)
    } else {
        None
    };

    print_summary(&manifest);
    print_section("Output");
    print_info("Manifest", manifest_path.display());
    if let Some(path) = htaccess_path {
        print_info("Access control", path.display());
    }

    info!("Manifest '{}' generated", manifest.title);
    Ok(())
}

fn print_summary(manifest: &Manifest) {
    print_heading(&manifest.title);
    print_info("Duration", format_duration(manifest.duration));

    print_section("Sources");
    for source in &manifest.sources {
        print_info(
            &format!("{} {} kbps", source.quality, source.bitrate),
            &source.url,
        );
    }

    if !manifest.audio_tracks.is_empty() {
        print_section("Audio tracks");
        for track in &manifest.audio_tracks {
            print_info(&track.label, &track.url);
        }
    }

    if !manifest.text_tracks.is_empty() {
        print_section("Text tracks");
        for track in &manifest.text_tracks {
            let label = if track.is_default {
                format!("{} (default)", track.name)
            } else {
                track.name.clone()
            };
            print_info(&label, &track.url);
        }
    }
}
