//! Request and response models for the JSON endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /generate`. All fields arrive as optional strings so the
/// handler controls validation order and error messages.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl GenerateRequest {
    /// True when no field was supplied at all; the API treats this the
    /// same as a missing body.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.language.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
}

/// Query parameters of `GET /wiki_images`.
#[derive(Debug, Deserialize)]
pub struct WikiImageParams {
    #[serde(default)]
    pub title: Option<String>,
}

/// The closed set of article languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
    Kannada,
    Telugu,
    Marathi,
}

impl Language {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "English" => Some(Language::English),
            "Hindi" => Some(Language::Hindi),
            "Kannada" => Some(Language::Kannada),
            "Telugu" => Some(Language::Telugu),
            "Marathi" => Some(Language::Marathi),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Kannada => "Kannada",
            Language::Telugu => "Telugu",
            Language::Marathi => "Marathi",
        }
    }

    /// Script instruction embedded in the generation prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            Language::English => "Write in English.",
            Language::Hindi => "Write ONLY in Hindi using Devanagari script.",
            Language::Kannada => "Write ONLY in Kannada script.",
            Language::Telugu => "Write ONLY in Telugu script.",
            Language::Marathi => "Write ONLY in Marathi using Devanagari script.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fieldless_request_counts_as_empty() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.is_empty());

        let request: GenerateRequest = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert!(!request.is_empty());
    }

    #[test]
    fn parses_known_languages() {
        assert_eq!(Language::parse("English"), Some(Language::English));
        assert_eq!(Language::parse("Hindi"), Some(Language::Hindi));
        assert_eq!(Language::parse("Kannada"), Some(Language::Kannada));
        assert_eq!(Language::parse("Telugu"), Some(Language::Telugu));
        assert_eq!(Language::parse("Marathi"), Some(Language::Marathi));
    }

    #[test]
    fn rejects_unknown_languages() {
        assert_eq!(Language::parse("French"), None);
        assert_eq!(Language::parse("english"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn every_language_carries_a_script_instruction() {
        for lang in [
            Language::English,
            Language::Hindi,
            Language::Kannada,
            Language::Telugu,
            Language::Marathi,
        ] {
            assert!(lang.instruction().starts_with("Write"));
        }
    }
}
