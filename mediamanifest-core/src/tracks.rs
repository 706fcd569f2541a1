//! Track records and the builder that turns one classified input into one.
//!
//! Field names follow the manifest's JSON contract (`contentType`, `label`,
//! `default`, ...). Values that only matter while assembling are kept on the
//! records but never serialized.

use crate::classify::{Identifier, TrackKind};
use crate::error::CoreResult;
use crate::external::MediaProbe;
use crate::quality::{QualityLevel, nearest_quality};
use crate::utils;

use serde::{Deserialize, Serialize};

/// Language tag given to every audio track.
pub const DEFAULT_AUDIO_LANGUAGE: &str = "EN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoTrack {
    pub url: String,
    pub content_type: String,
    pub quality: QualityLevel,
    /// Bitrate in kbps
    pub bitrate: u64,
    /// Seeds the manifest duration when this is the first video track.
    #[serde(skip)]
    pub duration_secs: u64,
    /// The identifier this track was built from.
    #[serde(skip)]
    pub origin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTrack {
    pub url: String,
    pub content_type: String,
    pub label: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleTrack {
    pub url: String,
    pub content_type: String,
    pub name: String,
    #[serde(rename = "default")]
    pub is_default: bool,
}

/// A built track of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Track {
    Video(VideoTrack),
    Audio(AudioTrack),
    Subtitle(SubtitleTrack),
}

impl Track {
    pub fn kind(&self) -> TrackKind {
        match self {
            Track::Video(_) => TrackKind::Video,
            Track::Audio(_) => TrackKind::Audio,
            Track::Subtitle(_) => TrackKind::Subtitle,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Track::Video(t) => &t.url,
            Track::Audio(t) => &t.url,
            Track::Subtitle(t) => &t.url,
        }
    }
}

/// Builds track records for classified identifiers.
///
/// Holds the URL settings for the run and the probe used for video inputs.
pub struct TrackBuilder<'a> {
    base_url: String,
    folder_prefix: String,
    probe: &'a dyn MediaProbe,
}

impl<'a> TrackBuilder<'a> {
    /// Creates a builder. Trailing slashes on `base_url` are dropped.
    pub fn new(base_url: &str, folder_prefix: &str, probe: &'a dyn MediaProbe) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            folder_prefix: folder_prefix.to_string(),
            probe,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves the public URL of an identifier.
    ///
    /// Web resources are used verbatim. Local files become
    /// `base_url/folder_prefix + filename`.
    pub fn resolve_url(&self, identifier: &Identifier) -> CoreResult<String> {
        match identifier {
            Identifier::Web(raw) => Ok(raw.clone()),
            Identifier::Local(_) => {
                let url = format!(
                    "{}/{}{}",
                    self.base_url,
                    self.folder_prefix,
                    identifier.file_name()?
                );
                log::debug!("Resolved {} to {}", identifier, url);
                Ok(url)
            }
        }
    }

    /// Builds a track of the given kind.
    ///
    /// `first_subtitle` is only consulted for subtitles and becomes their
    /// `default` flag.
    pub fn build(
        &self,
        identifier: &Identifier,
        kind: TrackKind,
        content_type: &str,
        first_subtitle: bool,
    ) -> CoreResult<Track> {
        Ok(match kind {
            TrackKind::Video => Track::Video(self.build_video(identifier, content_type)?),
            TrackKind::Audio => Track::Audio(self.build_audio(identifier, content_type)?),
            TrackKind::Subtitle => {
                Track::Subtitle(self.build_subtitle(identifier, content_type, first_subtitle)?)
            }
        })
    }

    /// Probes the input and maps its properties. Probe failures propagate.
    pub fn build_video(&self, identifier: &Identifier, content_type: &str) -> CoreResult<VideoTrack> {
        let url = self.resolve_url(identifier)?;
        let properties = self.probe.probe(identifier.as_str())?;
        log::debug!("Probed {}: {:?}", identifier, properties);

        Ok(VideoTrack {
            url,
            content_type: content_type.to_string(),
            quality: nearest_quality(properties.height),
            bitrate: properties.bitrate_bps / 1000,
            duration_secs: properties.duration_secs,
            origin: identifier.as_str().to_string(),
        })
    }

    pub fn build_audio(&self, identifier: &Identifier, content_type: &str) -> CoreResult<AudioTrack> {
        Ok(AudioTrack {
            url: self.resolve_url(identifier)?,
            content_type: content_type.to_string(),
            label: utils::title_from_filename(&identifier.file_name()?)?,
            language: DEFAULT_AUDIO_LANGUAGE.to_string(),
        })
    }

    pub fn build_subtitle(
        &self,
        identifier: &Identifier,
        content_type: &str,
        is_default: bool,
    ) -> CoreResult<SubtitleTrack> {
        Ok(SubtitleTrack {
            url: self.resolve_url(identifier)?,
            content_type: content_type.to_string(),
            name: utils::title_from_filename(&identifier.file_name()?)?,
            is_default,
        })
    }
}
