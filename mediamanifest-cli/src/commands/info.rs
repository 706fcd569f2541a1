// mediamanifest-cli/src/commands/info.rs
//
// Probes one video and shows the values the manifest would carry for it.

use crate::cli::InfoArgs;
use crate::error::CliResult;
use crate::output::{print_heading, print_info};

use mediamanifest_core::external::check_dependency;
use mediamanifest_core::{FfprobeMediaProbe, Identifier, MediaProbe, format_duration, nearest_quality};

use std::io::{self, Write};

pub fn run_info(args: InfoArgs) -> CliResult<()> {
    check_dependency("ffprobe")?;
    info_with(&args, &FfprobeMediaProbe::new(), &mut io::stdout().lock())
}

/// Probes `args.input`. JSON goes to `out`; the labelled view is printed directly.
pub fn info_with<W: Write>(args: &InfoArgs, probe: &dyn MediaProbe, out: &mut W) -> CliResult<()> {
    let identifier = Identifier::parse(&args.input)?;
    let properties = probe.probe(identifier.as_str())?;

    let quality = nearest_quality(properties.height);
    let bitrate_kbps = properties.bitrate_bps / 1000;

    if args.json {
        let summary = serde_json::json!({
            "height": properties.height,
            "quality": quality,
            "duration": properties.duration_secs,
            "bitrate": bitrate_kbps,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    print_heading(&identifier.file_name()?);
    print_info("Height", format!("{} px", properties.height));
    print_info("Quality", quality);
    print_info("Duration", format_duration(properties.duration_secs));
    print_info("Bitrate", format!("{} kbps", bitrate_kbps));
    Ok(())
}
