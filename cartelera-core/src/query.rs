//! Pure mapping from an [`Intent`] to catalog discovery parameters.

use crate::lexicon;
use cartelera_model::{DiscoverParams, Energy, Intent, Language, Mood, Recency};
use chrono::{Datelike, NaiveDate};

/// Upper bound TMDB accepts for "classic" releases.
const CLASSIC_CUTOFF: &str = "2000-01-01";

/// Years subtracted from `today` for the "recent" window.
const RECENT_WINDOW_YEARS: i32 = 5;

/// Build the `/discover/movie` query for an intent. Deterministic and
/// side-effect-free: the only non-pure input is `today`, injected by the
/// caller so the recency window is testable.
pub fn discover_params(intent: &Intent, today: NaiveDate) -> DiscoverParams {
    let mut params = DiscoverParams::new();
    params.set("sort_by", "popularity.desc");
    params.set("include_adult", false);
    params.set("vote_count.gte", 200i64);

    match intent.mood {
        Mood::Light => params.set("with_genres", "35"),
        Mood::Romantic => params.set("with_genres", "10749"),
        Mood::Horror => params.set("with_genres", "27"),
        Mood::Suspense => params.set("with_genres", "53"),
        Mood::Adventure => params.set("with_genres", "12,28"),
        Mood::Intense => params.set("vote_average.gte", 7.0),
        Mood::None => {}
    }

    match intent.energy {
        Energy::High => {
            params.set("sort_by", "vote_average.desc");
            let floor = params.get_f64("vote_average.gte").unwrap_or(0.0);
            params.set("vote_average.gte", floor.max(7.3));
        }
        Energy::Low => params.set("sort_by", "popularity.desc"),
        Energy::Medium | Energy::None => {}
    }

    match intent.recency {
        Recency::Recent => {
            params.set(
                "primary_release_date.gte",
                years_back(today, RECENT_WINDOW_YEARS)
                    .format("%Y-%m-%d")
                    .to_string(),
            );
        }
        Recency::Classic => {
            params.set("primary_release_date.lte", CLASSIC_CUTOFF);
        }
        Recency::None => {}
    }

    if let Some(code) = intent.language.code() {
        params.set("with_original_language", code);
    }

    let include: Vec<&str> = intent
        .include_genres
        .iter()
        .filter_map(|name| lexicon::genre_code(name))
        .collect();
    if !include.is_empty() {
        let mut merged: Vec<String> = params
            .get_str("with_genres")
            .map(|existing| existing.split(',').map(str::to_owned).collect())
            .unwrap_or_default();
        // Codes the mood already contributed are not repeated; duplicates
        // inside the include list itself are kept as-is.
        let from_mood: Vec<String> = merged.clone();
        for code in include {
            if !from_mood.iter().any(|existing| existing == code) {
                merged.push(code.to_owned());
            }
        }
        params.set("with_genres", merged.join(","));
    }

    let exclude: Vec<&str> = intent
        .exclude_genres
        .iter()
        .filter_map(|name| lexicon::genre_code(name))
        .collect();
    if !exclude.is_empty() {
        params.set("without_genres", exclude.join(","));
    }

    params
}

/// `today` shifted back by `years`, rolling Feb 29 over to Mar 1 when the
/// target year is not a leap year.
fn years_back(today: NaiveDate, years: i32) -> NaiveDate {
    let year = today.year() - years;
    today.with_year(year).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1).expect("valid rollover date")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartelera_model::{Energy, Language, Mood};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn baseline_is_always_present() {
        let params = discover_params(&Intent::default(), date(2026, 8, 30));
        assert_eq!(params.get_str("sort_by"), Some("popularity.desc"));
        assert_eq!(
            params.get("include_adult"),
            Some(&cartelera_model::ParamValue::Bool(false))
        );
        assert_eq!(params.get_f64("vote_count.gte"), Some(200.0));
        assert_eq!(params.iter().count(), 3);
    }

    #[test]
    fn synthesis_is_deterministic() {
        let intent = Intent {
            mood: Mood::Adventure,
            energy: Energy::High,
            recency: cartelera_model::Recency::Recent,
            language: Language::Es,
            include_genres: vec!["drama".into(), "drama".into()],
            exclude_genres: vec!["western".into()],
        };
        let today = date(2026, 8, 30);
        let a = discover_params(&intent, today);
        let b = discover_params(&intent, today);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn high_energy_overrides_sort_and_raises_floor() {
        for mood in [Mood::None, Mood::Light, Mood::Intense, Mood::Horror] {
            let intent = Intent {
                mood,
                energy: Energy::High,
                ..Intent::default()
            };
            let params = discover_params(&intent, date(2026, 8, 30));
            assert_eq!(params.get_str("sort_by"), Some("vote_average.desc"));
            assert!(params.get_f64("vote_average.gte").unwrap() >= 7.3);
        }
    }

    #[test]
    fn intense_floor_is_max_not_sum() {
        let alone = discover_params(
            &Intent {
                mood: Mood::Intense,
                ..Intent::default()
            },
            date(2026, 8, 30),
        );
        assert_eq!(alone.get_f64("vote_average.gte"), Some(7.0));
        assert_eq!(alone.get_str("with_genres"), None);

        let combined = discover_params(
            &Intent {
                mood: Mood::Intense,
                energy: Energy::High,
                ..Intent::default()
            },
            date(2026, 8, 30),
        );
        assert_eq!(combined.get_f64("vote_average.gte"), Some(7.3));
    }

    #[test]
    fn recency_maps_to_date_bounds() {
        let recent = discover_params(
            &Intent {
                recency: cartelera_model::Recency::Recent,
                ..Intent::default()
            },
            date(2026, 8, 30),
        );
        assert_eq!(
            recent.get_str("primary_release_date.gte"),
            Some("2021-08-30")
        );

        let classic = discover_params(
            &Intent {
                recency: cartelera_model::Recency::Classic,
                ..Intent::default()
            },
            date(2026, 8, 30),
        );
        assert_eq!(
            classic.get_str("primary_release_date.lte"),
            Some("2000-01-01")
        );
    }

    #[test]
    fn leap_day_window_rolls_over_to_march() {
        let params = discover_params(
            &Intent {
                recency: cartelera_model::Recency::Recent,
                ..Intent::default()
            },
            date(2028, 2, 29),
        );
        // 2023 has no Feb 29.
        assert_eq!(
            params.get_str("primary_release_date.gte"),
            Some("2023-03-01")
        );
    }

    #[test]
    fn include_genres_merge_onto_mood_filter() {
        let intent = Intent {
            mood: Mood::Light,
            include_genres: vec![
                "drama".into(),
                "desconocido".into(),
                "drama".into(),
            ],
            exclude_genres: vec!["terror".into(), "inexistente".into()],
            ..Intent::default()
        };
        let params = discover_params(&intent, date(2026, 8, 30));
        assert_eq!(params.get_str("with_genres"), Some("35,18,18"));
        assert_eq!(params.get_str("without_genres"), Some("27"));
    }

    #[test]
    fn romantic_calm_spanish_end_to_end() {
        let extractor = crate::KeywordExtractor::new();
        let intent =
            extractor.classify("algo romántico y tranquilo en español");
        let params = discover_params(&intent, date(2026, 8, 30));
        assert_eq!(params.get_str("with_genres"), Some("10749"));
        assert_eq!(params.get_str("sort_by"), Some("popularity.desc"));
        assert_eq!(params.get_str("with_original_language"), Some("es"));
    }
}
