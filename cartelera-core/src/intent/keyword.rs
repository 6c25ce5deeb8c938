//! Deterministic keyword classifier, the dependency-free extraction path.

use super::IntentExtractor;
use crate::lexicon;
use async_trait::async_trait;
use cartelera_model::{Energy, Intent, Language, Mood, Recency};
use regex::Regex;

/// Regex-group classifier over lowercased input. Groups per field are
/// disjoint and evaluated in a fixed order with early exit, so ties cannot
/// happen. Total: any input maps to an `Intent`.
#[derive(Debug)]
pub struct KeywordExtractor {
    mood_rules: Vec<(Regex, Mood)>,
    energy_rules: Vec<(Regex, Energy)>,
    recent: Regex,
    classic: Regex,
    spanish: Regex,
    english: Regex,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        let rule = |pattern: &str| Regex::new(pattern).unwrap();
        Self {
            mood_rules: vec![
                (rule(r"comedia|ligera|reír|risa|livian"), Mood::Light),
                (rule(r"romántic|amor|romance"), Mood::Romantic),
                (rule(r"terror|miedo|horror"), Mood::Horror),
                (rule(r"suspenso|thriller|intriga"), Mood::Suspense),
                (rule(r"aventura|acción|accion|épica"), Mood::Adventure),
                (
                    rule(r"intens[oa]|fuerte|impactante|dram[aá]"),
                    Mood::Intense,
                ),
            ],
            energy_rules: vec![
                (rule(r"baja|tranqui|tranquila|suave|lenta"), Energy::Low),
                (rule(r"media|normal"), Energy::Medium),
                (
                    rule(r"alta|rápid[ao]|movida|dinámica|tensa"),
                    Energy::High,
                ),
            ],
            recent: rule(r"recient|nueva|últimos|ultimos"),
            classic: rule(r"clásic|clasico|antiguas|viejas|ochentas|noventas"),
            spanish: rule(r"en español|español|latino"),
            english: rule(r"en inglés|ingles|subtítulos en inglés"),
        }
    }

    /// Synchronous classification; the async trait wrapper delegates here.
    pub fn classify(&self, text: &str) -> Intent {
        let lowered = text.to_lowercase();
        let mut intent = Intent::default();

        for (pattern, mood) in &self.mood_rules {
            if pattern.is_match(&lowered) {
                intent.mood = *mood;
                break;
            }
        }

        for (pattern, energy) in &self.energy_rules {
            if pattern.is_match(&lowered) {
                intent.energy = *energy;
                break;
            }
        }

        // Later matches overwrite: a text naming both periods reads as
        // classic, and an explicit English ask wins over Spanish.
        if self.recent.is_match(&lowered) {
            intent.recency = Recency::Recent;
        }
        if self.classic.is_match(&lowered) {
            intent.recency = Recency::Classic;
        }
        if self.spanish.is_match(&lowered) {
            intent.language = Language::Es;
        }
        if self.english.is_match(&lowered) {
            intent.language = Language::En;
        }

        intent.include_genres = lexicon::genre_names()
            .filter(|name| lowered.contains(name))
            .map(str::to_owned)
            .collect();

        intent
    }
}

#[async_trait]
impl IntentExtractor for KeywordExtractor {
    async fn extract(&self, text: &str) -> Intent {
        self.classify(text)
    }
}
