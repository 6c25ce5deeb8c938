//! Free-text genre names mapped to TMDB genre codes.
//!
//! Keys cover Spanish and English spellings, with and without accents.
//! Unknown names resolve to `None` and are silently dropped by callers;
//! they never abort the pipeline.

/// (lowercase name, TMDB genre id). Kept sorted by concept, not
/// alphabetically, so related spellings stay together.
const GENRES: &[(&str, &str)] = &[
    ("accion", "28"),
    ("acción", "28"),
    ("adventure", "12"),
    ("aventura", "12"),
    ("animation", "16"),
    ("animacion", "16"),
    ("animación", "16"),
    ("comedia", "35"),
    ("crime", "80"),
    ("crimen", "80"),
    ("documental", "99"),
    ("drama", "18"),
    ("family", "10751"),
    ("familiar", "10751"),
    ("fantasia", "14"),
    ("fantasía", "14"),
    ("historia", "36"),
    ("terror", "27"),
    ("misterio", "9648"),
    ("romance", "10749"),
    ("romantico", "10749"),
    ("romántico", "10749"),
    ("ciencia ficcion", "878"),
    ("ciencia ficción", "878"),
    ("suspenso", "53"),
    ("thriller", "53"),
    ("guerra", "10752"),
    ("western", "37"),
];

/// Case-insensitive lookup of a genre name to its catalog code.
pub fn genre_code(name: &str) -> Option<&'static str> {
    let lowered = name.trim().to_lowercase();
    GENRES
        .iter()
        .find(|(key, _)| *key == lowered)
        .map(|(_, code)| *code)
}

/// Every known genre name, for substring scanning over free text.
pub fn genre_names() -> impl Iterator<Item = &'static str> {
    GENRES.iter().map(|(key, _)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        for name in ["Terror", "terror", "TERROR"] {
            assert_eq!(genre_code(name), Some("27"), "failed for {name}");
        }
    }

    #[test]
    fn accented_and_plain_spellings_share_a_code() {
        assert_eq!(genre_code("acción"), genre_code("accion"));
        assert_eq!(genre_code("ciencia ficción"), Some("878"));
        assert_eq!(genre_code("romance"), genre_code("romántico"));
    }

    #[test]
    fn both_languages_resolve() {
        assert_eq!(genre_code("adventure"), Some("12"));
        assert_eq!(genre_code("aventura"), Some("12"));
        assert_eq!(genre_code("family"), genre_code("familiar"));
    }

    #[test]
    fn unknown_names_are_absent() {
        assert_eq!(genre_code("telenovela"), None);
        assert_eq!(genre_code(""), None);
    }
}
