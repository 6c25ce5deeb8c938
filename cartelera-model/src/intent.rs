//! Structured viewer preference extracted from free text.
//!
//! All wire tokens are the Spanish values the extraction prompt asks for
//! (`"ligero"`, `"baja"`, ...); English equivalents are accepted on input.
//! Deserialization is deliberately lenient because the upstream producer is
//! a language model: an unrecognized, missing, or mistyped field collapses
//! to its none/default variant instead of failing the whole record.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

trait WireToken: Default {
    fn parse(token: &str) -> Self;
    fn as_str(&self) -> &'static str;
}

fn serialize_token<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: WireToken,
{
    serializer.serialize_str(value.as_str())
}

fn deserialize_token<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: WireToken,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(T::parse).unwrap_or_default())
}

fn deserialize_tokens<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Some(items) = value.as_array() else {
        return Ok(Vec::new());
    };
    Ok(items
        .iter()
        .filter_map(|item| item.as_str().map(str::to_owned))
        .collect())
}

macro_rules! wire_token_serde {
    ($name:ident) => {
        impl Serialize for $name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serialize_token(self, serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                deserialize_token(deserializer)
            }
        }
    };
}

/// Tone the viewer is in the mood for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mood {
    #[default]
    None,
    Light,
    Intense,
    Romantic,
    Suspense,
    Horror,
    Adventure,
}

impl WireToken for Mood {
    fn parse(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "ligero" | "light" => Self::Light,
            "intenso" | "intense" => Self::Intense,
            "romantico" | "romántico" | "romantic" => Self::Romantic,
            "suspenso" | "suspense" => Self::Suspense,
            "terror" | "horror" => Self::Horror,
            "aventura" | "adventure" => Self::Adventure,
            _ => Self::None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Light => "ligero",
            Self::Intense => "intenso",
            Self::Romantic => "romantico",
            Self::Suspense => "suspenso",
            Self::Horror => "terror",
            Self::Adventure => "aventura",
        }
    }
}

wire_token_serde!(Mood);

/// Desired pacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Energy {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl WireToken for Energy {
    fn parse(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "baja" | "low" => Self::Low,
            "media" | "medium" => Self::Medium,
            "alta" | "high" => Self::High,
            _ => Self::None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Low => "baja",
            Self::Medium => "media",
            Self::High => "alta",
        }
    }
}

wire_token_serde!(Energy);

/// Preferred release period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Recency {
    #[default]
    None,
    Recent,
    Classic,
}

impl WireToken for Recency {
    fn parse(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "reciente" | "recent" => Self::Recent,
            "clasico" | "clásico" | "classic" => Self::Classic,
            _ => Self::None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Recent => "reciente",
            Self::Classic => "clasico",
        }
    }
}

wire_token_serde!(Recency);

/// Preferred original language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    None,
    Es,
    En,
}

impl WireToken for Language {
    fn parse(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "es" => Self::Es,
            "en" => Self::En,
            _ => Self::None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Es => "es",
            Self::En => "en",
        }
    }
}

wire_token_serde!(Language);

impl Language {
    /// ISO 639-1 code, when a preference was expressed.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Es => Some("es"),
            Self::En => Some("en"),
        }
    }
}

/// Structured viewer preference. Immutable once produced; every field has a
/// valid empty default, so "no signal" is always representable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intent {
    pub mood: Mood,
    pub energy: Energy,
    pub recency: Recency,
    pub language: Language,
    /// Free-text genre tokens; duplicates allowed, resolved downstream.
    #[serde(deserialize_with = "deserialize_tokens")]
    pub include_genres: Vec<String>,
    #[serde(deserialize_with = "deserialize_tokens")]
    pub exclude_genres: Vec<String>,
}
