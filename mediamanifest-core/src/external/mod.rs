// ============================================================================
// mediamanifest-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Media Probing Through ffprobe
//
// This module encapsulates the only external process the generator talks to.
// Video tracks need a frame height, a duration and a bitrate, and those come
// from ffprobe. The capability is expressed as the `MediaProbe` trait so the
// manifest logic can be exercised with a stub instead of a real binary.
//
// KEY COMPONENTS:
// - MediaProbe: trait for "given an input, return its video properties"
// - MediaProperties: the three values a video track needs
// - FfprobeMediaProbe: implementation backed by the ffprobe crate
// - Dependency checking for the ffprobe binary

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the ffprobe-backed implementation of [`MediaProbe`]
pub mod ffprobe_executor;

#[cfg(test)]
pub(crate) mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::FfprobeMediaProbe;

// ============================================================================
// PROBE CAPABILITY
// ============================================================================

/// Raw properties of the first video stream of a media input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MediaProperties {
    /// Frame height in pixels
    pub height: u32,
    /// Duration in whole seconds (fractional part truncated)
    pub duration_secs: u64,
    /// Bitrate in bits per second
    pub bitrate_bps: u64,
}

/// Capability to read video properties from an input.
///
/// Implementations are synchronous and may block on an external process.
/// Any timeout is the caller's responsibility.
///
/// # Errors
///
/// * `CoreError::ProbeUnavailable` - the tool could not be invoked or failed
/// * `CoreError::ProbeEmptyOutput` - the tool produced nothing usable
/// * `CoreError::ProbeParse` - a returned field is not a valid number
pub trait MediaProbe {
    fn probe(&self, input: &str) -> CoreResult<MediaProperties>;
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that a required external command can be started.
///
/// Runs `cmd_name -version` with output discarded. Any exit status counts as
/// found; only a failure to spawn is an error.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                log::warn!("Dependency '{}' not found.", cmd_name);
            } else {
                log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            }
            Err(CoreError::ProbeUnavailable(cmd_name.to_string(), e.to_string()))
        }
    }
}
