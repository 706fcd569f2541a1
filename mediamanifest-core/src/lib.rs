//! Core library for building custom media manifests.
//!
//! Given an ordered list of media files or `https` URLs, this crate
//! classifies each input as video, audio or subtitle, probes video inputs
//! with ffprobe, maps frame heights onto the platform's quality ladder and
//! assembles a single manifest document.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediamanifest_core::{
//!     FfprobeMediaProbe, ManifestAssembler, ManifestConfig, TrackBuilder, expand_inputs,
//! };
//! use std::path::Path;
//!
//! let config = ManifestConfig::load_or_create(Path::new("config.json")).unwrap();
//! let inputs = expand_inputs(&["movie.mp4", "subs.vtt"]).unwrap();
//! let probe = FfprobeMediaProbe::new();
//!
//! let builder = TrackBuilder::new(&config.base_url, &inputs.folder_prefix, &probe);
//! let manifest = ManifestAssembler::new(builder)
//!     .assemble(&inputs.identifiers)
//!     .unwrap();
//! println!("{}", manifest.to_json_pretty().unwrap());
//! ```

pub mod classify;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod manifest;
pub mod output;
pub mod quality;
pub mod tracks;
pub mod utils;

// Re-exports for public API
pub use classify::{Classification, Identifier, TrackKind, classify};
pub use config::{ManifestConfig, ManifestConfigBuilder};
pub use discovery::{InputSet, expand_inputs};
pub use error::{CoreError, CoreResult};
pub use external::{FfprobeMediaProbe, MediaProbe, MediaProperties};
pub use manifest::{Manifest, ManifestAssembler};
pub use quality::{QualityLevel, nearest_quality};
pub use tracks::{AudioTrack, SubtitleTrack, Track, TrackBuilder, VideoTrack};
pub use utils::format_duration;
