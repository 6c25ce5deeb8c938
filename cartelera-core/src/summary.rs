//! Page clamping and the human-readable response summary.

use cartelera_model::MovieItem;
use serde_json::Value;

/// TMDB's documented maximum page for discovery queries.
pub const MAX_PAGE: u32 = 500;

/// How many results feed the summary line.
const SUMMARY_LIMIT: usize = 5;

const UNTITLED: &str = "Sin título";
const UNDATED: &str = "s/f";

/// Clamp an arbitrary client-supplied page value to `[1, MAX_PAGE]`.
/// Missing, non-numeric, zero, or negative input means page 1; numeric
/// strings count as numbers.
pub fn clamp_page(raw: Option<&Value>) -> u32 {
    let number = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n >= 1.0 => (n as u32).min(MAX_PAGE),
        _ => 1,
    }
}

/// Condense the top results into one bullet-delimited line:
/// `• Title (YYYY) • Title (YYYY) …`. Empty input yields an empty string.
pub fn summarize(results: &[MovieItem]) -> String {
    results
        .iter()
        .take(SUMMARY_LIMIT)
        .map(|item| {
            let title = item
                .title
                .as_deref()
                .or(item.name.as_deref())
                .filter(|t| !t.is_empty())
                .unwrap_or(UNTITLED);
            let year = item
                .release_date
                .as_deref()
                .or(item.first_air_date.as_deref())
                .map(|date| date.chars().take(4).collect::<String>())
                .filter(|y| !y.is_empty())
                .unwrap_or_else(|| UNDATED.to_owned());
            format!("• {title} ({year})")
        })
        .collect::<Vec<_>>()
        .join(" • ")
}

/// Wrap a summary into the assistant's reply, or the fixed "no clear
/// matches" message when there was nothing to summarize.
pub fn assistant_line(summary: &str) -> String {
    if summary.is_empty() {
        "No encontré coincidencias claras. ¿Quieres probar con otra \
         descripción (género, época, ritmo)?"
            .to_owned()
    } else {
        format!(
            "Según lo que pides, podrían gustarte: {summary}. ¿Quieres \
             afinar (p. ej., “más románticas recientes, energía baja”)?"
        )
    }
}
