//! Input identifiers and their classification into track kinds.
//!
//! An identifier is either a local filesystem path or an absolute `https`
//! URL (a *web resource*). Plain `http` URLs are rejected outright. The kind
//! of a track is decided solely by the extension of its final path segment,
//! matched case-sensitively against the fixed tables below.

use crate::error::{CoreError, CoreResult};
use crate::utils;

use std::fmt;
use url::Url;

/// Extension to MIME type table for video sources.
pub const VIDEO_MIME_TYPES: &[(&str, &str)] = &[
    (".mp4", "video/mp4"),
    (".webm", "video/webm"),
    (".ogv", "video/ogg"),
];

/// Extension to MIME type table for audio tracks.
pub const AUDIO_MIME_TYPES: &[(&str, &str)] = &[
    (".aac", "audio/aac"),
    (".mp3", "audio/mpeg"),
    (".mpga", "audio/mpeg"),
    (".ogg", "audio/ogg"),
    (".oga", "audio/ogg"),
];

/// Extension to MIME type table for subtitle tracks.
pub const SUBTITLE_MIME_TYPES: &[(&str, &str)] = &[(".vtt", "text/vtt")];

/// A caller supplied input, already screened for insecure URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// An absolute `https` URL, used verbatim as the track URL.
    Web(String),
    /// Anything else, treated as a path on the local filesystem.
    Local(String),
}

impl Identifier {
    /// Parses a raw input string.
    ///
    /// Inputs that parse as an absolute URI with the `https` scheme become
    /// [`Identifier::Web`]. The `http` scheme fails with
    /// [`CoreError::InsecureResource`]. Every other input, including relative
    /// paths and Windows drive letters that happen to parse as a URI scheme,
    /// is a [`Identifier::Local`] path.
    pub fn parse(raw: &str) -> CoreResult<Self> {
        match Url::parse(raw) {
            Ok(url) if url.scheme() == "https" => Ok(Identifier::Web(raw.to_string())),
            Ok(url) if url.scheme() == "http" => Err(CoreError::InsecureResource(raw.to_string())),
            _ => Ok(Identifier::Local(raw.to_string())),
        }
    }

    /// The identifier exactly as the caller supplied it.
    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Web(raw) | Identifier::Local(raw) => raw,
        }
    }

    /// Final path segment: the filename of a local path, or the last segment
    /// of a web resource's URL path (query and fragment excluded).
    pub fn file_name(&self) -> CoreResult<String> {
        match self {
            Identifier::Local(path) => utils::get_filename_safe(path),
            Identifier::Web(raw) => {
                let url = Url::parse(raw)
                    .map_err(|e| CoreError::PathError(format!("Invalid URL {raw}: {e}")))?;
                url.path_segments()
                    .and_then(|mut segments| segments.next_back())
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .ok_or_else(|| {
                        CoreError::PathError(format!("Failed to get filename for {raw}"))
                    })
            }
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    Video,
    Audio,
    Subtitle,
}

impl TrackKind {
    pub const ALL: [TrackKind; 3] = [TrackKind::Video, TrackKind::Audio, TrackKind::Subtitle];

    /// The extension to MIME type table for this kind.
    pub fn mime_table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            TrackKind::Video => VIDEO_MIME_TYPES,
            TrackKind::Audio => AUDIO_MIME_TYPES,
            TrackKind::Subtitle => SUBTITLE_MIME_TYPES,
        }
    }

    /// Looks up the MIME type for an extension (leading period included).
    pub fn content_type(self, extension: &str) -> Option<&'static str> {
        self.mime_table()
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, mime)| *mime)
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrackKind::Video => "video",
            TrackKind::Audio => "audio",
            TrackKind::Subtitle => "subtitle",
        };
        f.write_str(name)
    }
}

/// Outcome of classifying one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Track {
        kind: TrackKind,
        content_type: &'static str,
    },
    /// Extension not found in any table. Not an error: the item is skipped.
    Unsupported,
}

/// Classifies an identifier by the extension of its final path segment.
///
/// Fails with [`CoreError::NoExtension`] when the filename contains no period.
pub fn classify(identifier: &Identifier) -> CoreResult<Classification> {
    let file_name = identifier.file_name()?;
    let extension = utils::extension(&file_name)
        .map_err(|_| CoreError::NoExtension(identifier.to_string()))?;

    let classification = TrackKind::ALL
        .into_iter()
        .find_map(|kind| {
            kind.content_type(extension)
                .map(|content_type| Classification::Track { kind, content_type })
        })
        .unwrap_or(Classification::Unsupported);

    log::debug!("Classified {} as {:?}", identifier, classification);
    Ok(classification)
}
