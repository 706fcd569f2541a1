//! The fixed quality ladder of the target platform and the height mapping onto it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported vertical resolutions, ascending.
pub const QUALITY_LADDER: [u32; 8] = [240, 360, 480, 540, 720, 1080, 1440, 2160];

/// One rung of [`QUALITY_LADDER`]. Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct QualityLevel(u32);

impl QualityLevel {
    pub const MAX: QualityLevel = QualityLevel(QUALITY_LADDER[QUALITY_LADDER.len() - 1]);

    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for QualityLevel {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if QUALITY_LADDER.contains(&value) {
            Ok(QualityLevel(value))
        } else {
            Err(format!(
                "{value} is not a supported quality (expected one of {QUALITY_LADDER:?})"
            ))
        }
    }
}

impl From<QualityLevel> for u32 {
    fn from(level: QualityLevel) -> Self {
        level.0
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}p", self.0)
    }
}

/// Maps a frame height onto the ladder, rounding up.
///
/// Picks the smallest ladder value that is at least `height`. Heights above
/// the top of the ladder clamp to 2160, and anything at or below 240
/// (including 0) maps to 240.
#[must_use]
pub fn nearest_quality(height: u32) -> QualityLevel {
    QUALITY_LADDER
        .iter()
        .copied()
        .find(|&rung| rung >= height)
        .map_or(QualityLevel::MAX, QualityLevel)
}
