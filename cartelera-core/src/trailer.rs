//! Trailer selection over localized video metadata.
//!
//! TMDB returns different video lists per request language, so the same
//! movie is queried across a fixed locale preference list plus one
//! locale-agnostic call. The merged candidates then run through a
//! preference cascade: an authoritative trailer in the viewer's implied
//! locale (Spanish/Mexico) beats lesser video types, degrading through
//! English down to "anything available" instead of failing outright.

use crate::providers::TmdbClient;
use cartelera_model::{TrailerPick, VideoCandidate};
use futures::future::join_all;
use std::collections::HashMap;
use tracing::debug;

/// The only hosting platform the front-end can embed.
pub const VIDEO_SITE: &str = "YouTube";

/// Locale variants queried per movie, most preferred first. `None` is the
/// locale-agnostic query that catches region-less uploads.
pub const LOCALE_PREFERENCES: [Option<&str>; 6] = [
    Some("es-MX"),
    Some("es-ES"),
    Some("es"),
    Some("en-US"),
    Some("en"),
    None,
];

/// Concatenate per-locale batches in preference order and deduplicate by
/// video key. A later occurrence overwrites the earlier one in place, so
/// final ordering is insertion order of first appearance.
pub fn merge_candidates(
    batches: Vec<Vec<VideoCandidate>>,
) -> Vec<VideoCandidate> {
    let mut merged: Vec<VideoCandidate> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    for candidate in batches.into_iter().flatten() {
        match seen.get(candidate.key.as_str()) {
            Some(&index) => merged[index] = candidate,
            None => {
                seen.insert(candidate.key.clone(), merged.len());
                merged.push(candidate);
            }
        }
    }
    merged
}

/// Run the preference cascade over merged candidates. Only records hosted
/// on [`VIDEO_SITE`] are considered; `None` when nothing usable remains.
pub fn pick_best(candidates: &[VideoCandidate]) -> Option<&VideoCandidate> {
    let hosted: Vec<&VideoCandidate> = candidates
        .iter()
        .filter(|video| video.site == VIDEO_SITE)
        .collect();

    let find = |predicate: &dyn Fn(&VideoCandidate) -> bool| {
        hosted.iter().copied().find(|video| predicate(video))
    };
    let trailer = |v: &VideoCandidate| v.kind == "Trailer";
    let teaser = |v: &VideoCandidate| v.kind == "Teaser";
    let clip = |v: &VideoCandidate| v.kind == "Clip";
    let es = |v: &VideoCandidate| v.language() == Some("es");
    let en = |v: &VideoCandidate| v.language() == Some("en");

    find(&|v| trailer(v) && es(v) && v.region() == Some("MX"))
        .or_else(|| find(&|v| trailer(v) && es(v)))
        .or_else(|| find(&|v| trailer(v) && en(v)))
        .or_else(|| find(&|v| teaser(v) && es(v)))
        .or_else(|| find(&|v| teaser(v) && en(v)))
        .or_else(|| find(&|v| clip(v) && es(v)))
        .or_else(|| find(&trailer))
        .or_else(|| find(&|v| teaser(v) || clip(v)))
        .or_else(|| hosted.first().copied())
}

/// Fetch every locale variant concurrently, merge, and pick. A failed or
/// timed-out locale fetch contributes an empty batch; it never aborts the
/// selection. Always computes fresh from the supplied catalog state.
pub async fn find_trailer(client: &TmdbClient, movie_id: u64) -> TrailerPick {
    let fetches = LOCALE_PREFERENCES
        .iter()
        .map(|locale| client.movie_videos(movie_id, *locale));

    let batches = join_all(fetches)
        .await
        .into_iter()
        .zip(LOCALE_PREFERENCES)
        .map(|(result, locale)| match result {
            Ok(videos) => videos,
            Err(error) => {
                debug!(
                    movie_id,
                    locale = locale.unwrap_or("any"),
                    %error,
                    "video fetch failed, contributing no candidates"
                );
                Vec::new()
            }
        })
        .collect();

    let merged = merge_candidates(batches);
    pick_best(&merged)
        .map(TrailerPick::from_candidate)
        .unwrap_or_default()
}
