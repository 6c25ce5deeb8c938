//! Video metadata records returned by the catalog, and the selection result.

use serde::{Deserialize, Serialize};

/// One trailer/teaser/clip record as returned by the catalog's videos
/// endpoint. Fetched fresh per request and discarded after selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoCandidate {
    /// Hosting platform, e.g. `"YouTube"`.
    pub site: String,
    /// `"Trailer"`, `"Teaser"`, `"Clip"`, or anything else TMDB invents.
    #[serde(rename = "type")]
    pub kind: String,
    /// Opaque identifier, unique per video on its platform.
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_639_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_3166_1: Option<String>,
}

impl VideoCandidate {
    pub fn language(&self) -> Option<&str> {
        self.iso_639_1.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.iso_3166_1.as_deref()
    }
}

/// Outcome of trailer selection. Both fields `None` means "no usable
/// trailer found", which is a valid terminal state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailerPick {
    pub site: Option<String>,
    pub key: Option<String>,
}

impl TrailerPick {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_candidate(candidate: &VideoCandidate) -> Self {
        Self {
            site: Some(candidate.site.clone()),
            key: Some(candidate.key.clone()),
        }
    }
}
