//! The manifest document and its assembly from an ordered list of inputs.

use crate::classify::{Classification, Identifier, classify};
use crate::error::{CoreError, CoreResult};
use crate::tracks::{AudioTrack, SubtitleTrack, Track, TrackBuilder, VideoTrack};
use crate::utils;

use serde::{Deserialize, Serialize};

/// The custom media manifest.
///
/// Serializes to exactly the keys the playback platform expects: `title`,
/// `duration`, `live`, `sources`, `audioTracks` and `textTracks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub title: String,
    /// Duration in seconds, taken from the first video source
    pub duration: u64,
    pub live: bool,
    pub sources: Vec<VideoTrack>,
    pub audio_tracks: Vec<AudioTrack>,
    pub text_tracks: Vec<SubtitleTrack>,
}

impl Manifest {
    /// The first video source. Present on every assembled manifest.
    pub fn primary_source(&self) -> Option<&VideoTrack> {
        self.sources.first()
    }

    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Assembles manifests in a single ordered pass over the inputs.
pub struct ManifestAssembler<'a> {
    builder: TrackBuilder<'a>,
}

impl<'a> ManifestAssembler<'a> {
    pub fn new(builder: TrackBuilder<'a>) -> Self {
        Self { builder }
    }

    /// Builds a manifest from identifiers in caller order.
    ///
    /// All identifiers are screened for insecure URLs before anything is
    /// probed. Unsupported extensions are skipped with a warning; every other
    /// failure aborts. Title and duration come from the first video source,
    /// and only the first subtitle is marked default.
    ///
    /// # Errors
    ///
    /// * `CoreError::InsecureResource` - an identifier is an `http` URL
    /// * `CoreError::NoExtension` - a filename has no extension
    /// * `CoreError::Probe*` - a video input could not be probed
    /// * `CoreError::NoPrimarySource` - no video source was found
    pub fn assemble<S: AsRef<str>>(&self, inputs: &[S]) -> CoreResult<Manifest> {
        let identifiers = inputs
            .iter()
            .map(|raw| Identifier::parse(raw.as_ref()))
            .collect::<CoreResult<Vec<_>>>()?;

        let mut manifest = Manifest {
            title: String::new(),
            duration: 0,
            live: false,
            sources: Vec::new(),
            audio_tracks: Vec::new(),
            text_tracks: Vec::new(),
        };

        for identifier in &identifiers {
            let (kind, content_type) = match classify(identifier)? {
                Classification::Track { kind, content_type } => (kind, content_type),
                Classification::Unsupported => {
                    log::warn!("File was not valid, skipping: {}", identifier);
                    continue;
                }
            };

            let first_subtitle = manifest.text_tracks.is_empty();
            let track = self.builder.build(identifier, kind, content_type, first_subtitle)?;
            log::info!("Added {} track {}", track.kind(), track.url());
            match track {
                Track::Video(video) => {
                    if manifest.sources.is_empty() {
                        manifest.title = utils::title_from_filename(&identifier.file_name()?)?;
                        manifest.duration = video.duration_secs;
                    }
                    log::debug!("Video quality {} at {} kbps", video.quality, video.bitrate);
                    manifest.sources.push(video);
                }
                Track::Audio(audio) => manifest.audio_tracks.push(audio),
                Track::Subtitle(subtitle) => manifest.text_tracks.push(subtitle),
            }
        }

        if manifest.sources.is_empty() {
            return Err(CoreError::NoPrimarySource);
        }
        Ok(manifest)
    }
}
