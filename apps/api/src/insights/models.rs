use serde::{Deserialize, Serialize};

pub const ENGLISH: &str = "English";
pub const ARABIC: &str = "Arabic";

/// Display-ready insight line. The pool may come from outside the generator,
/// so the language tag is kept as free text and matched by prefix, and every
/// field falls back to its default when absent. Lines with no text are never
/// served.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InsightRecord {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub impact_score: f64,
}

impl InsightRecord {
    pub fn is_english(&self) -> bool {
        self.has_text() && self.language.to_lowercase().starts_with("eng")
    }

    pub fn is_arabic(&self) -> bool {
        self.has_text() && self.language.to_lowercase().starts_with("arab")
    }

    fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_insight(language: &str) -> InsightRecord {
        InsightRecord {
            language: language.to_string(),
            category: "General".to_string(),
            text: "x".to_string(),
            impact_score: 0.7,
        }
    }

    #[test]
    fn test_language_prefix_matching() {
        assert!(make_insight("English").is_english());
        assert!(make_insight("eng").is_english());
        assert!(make_insight("ARABIC").is_arabic());
        assert!(!make_insight("French").is_english());
        assert!(!make_insight("French").is_arabic());
    }

    #[test]
    fn test_external_pool_line_with_only_language_and_text() {
        let line: InsightRecord =
            serde_json::from_str(r#"{"language": "English", "text": "pool en"}"#).unwrap();
        assert!(line.is_english());
        assert!(line.category.is_empty());

        let blank: InsightRecord = serde_json::from_str(r#"{"language": "Arabic"}"#).unwrap();
        assert!(!blank.is_arabic());
    }
}
