//! FFprobe integration for reading video properties.
//!
//! The first video stream supplies the height. Duration and bitrate are read
//! from that stream and fall back to the container (format) level when the
//! stream does not carry them, which is common for WebM.
use super::{MediaProbe, MediaProperties};
use crate::error::{CoreError, CoreResult, probe_failed_error, probe_start_error};
use ffprobe::{FfProbeError, ffprobe};

/// [`MediaProbe`] backed by the `ffprobe` binary on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfprobeMediaProbe;

impl FfprobeMediaProbe {
    pub fn new() -> Self {
        Self
    }
}

impl MediaProbe for FfprobeMediaProbe {
    fn probe(&self, input: &str) -> CoreResult<MediaProperties> {
        log::debug!("Running ffprobe (via crate) for video properties on: {}", input);
        match ffprobe(input) {
            Ok(metadata) => {
                let video_stream = metadata
                    .streams
                    .iter()
                    .find(|s| s.codec_type.as_deref() == Some("video"));

                let raw = RawProperties {
                    has_video_stream: video_stream.is_some(),
                    height: video_stream.and_then(|s| s.height),
                    stream_duration: video_stream.and_then(|s| s.duration.as_deref()),
                    format_duration: metadata.format.duration.as_deref(),
                    stream_bit_rate: video_stream.and_then(|s| s.bit_rate.as_deref()),
                    format_bit_rate: metadata.format.bit_rate.as_deref(),
                };
                raw.parse(input)
            }
            Err(err) => {
                log::error!("ffprobe failed for video properties on {}: {:?}", input, err);
                Err(map_ffprobe_error(err, input))
            }
        }
    }
}

/// Unparsed fields pulled out of ffprobe's report.
#[derive(Debug, Default)]
struct RawProperties<'a> {
    has_video_stream: bool,
    height: Option<i64>,
    stream_duration: Option<&'a str>,
    format_duration: Option<&'a str>,
    stream_bit_rate: Option<&'a str>,
    format_bit_rate: Option<&'a str>,
}

impl RawProperties<'_> {
    fn parse(&self, input: &str) -> CoreResult<MediaProperties> {
        if !self.has_video_stream {
            return Err(CoreError::ProbeEmptyOutput(
                input.to_string(),
                "no video stream found".to_string(),
            ));
        }

        let height = self.height.ok_or_else(|| missing(input, "height"))?;
        let height = u32::try_from(height).map_err(|_| {
            CoreError::ProbeParse(input.to_string(), format!("invalid height {height}"))
        })?;

        let duration = self
            .stream_duration
            .or(self.format_duration)
            .ok_or_else(|| missing(input, "duration"))?;
        let bit_rate = self
            .stream_bit_rate
            .or(self.format_bit_rate)
            .ok_or_else(|| missing(input, "bit_rate"))?;

        Ok(MediaProperties {
            height,
            duration_secs: parse_truncated(duration, "duration", input)?,
            bitrate_bps: parse_truncated(bit_rate, "bit_rate", input)?,
        })
    }
}

fn missing(input: &str, field: &str) -> CoreError {
    CoreError::ProbeEmptyOutput(input.to_string(), format!("video stream missing {field}"))
}

/// Parses a decimal field and truncates it toward zero.
fn parse_truncated(value: &str, field: &str, input: &str) -> CoreResult<u64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(missing(input, field));
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed >= 0.0 => Ok(parsed as u64),
        _ => Err(CoreError::ProbeParse(
            input.to_string(),
            format!("{field} '{trimmed}' is not a valid number"),
        )),
    }
}

fn map_ffprobe_error(err: FfProbeError, input: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => probe_start_error(input, io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            probe_failed_error(input, output.status, stderr)
        }
        FfProbeError::Deserialize(err) => {
            CoreError::ProbeParse(input.to_string(), format!("output deserialization: {err}"))
        }
        #[allow(unreachable_patterns)]
        _ => CoreError::ProbeUnavailable(input.to_string(), format!("{err:?}")),
    }
}
