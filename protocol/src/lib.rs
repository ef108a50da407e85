//! Wire types for the trivia HTTP service.
//!
//! Only the fields the game reads are modelled, everything else in the payload
//! is ignored on decode.

use serde::{Deserialize, Serialize};

/// Identifier the service assigns to a category.
pub type CategoryId = u32;

/// One entry of `GET /categories?count=N`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub title: String,
    pub clues_count: u32,
}

/// Category reference embedded in every clue record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueCategory {
    pub title: String,
}

/// One entry of `GET /clues?category=ID`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClue {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub category: Option<ClueCategory>,
}

impl RawClue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: None,
        }
    }

    /// A clue is playable when both sides carry visible text.
    pub fn is_playable(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }

    pub fn category_title(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.title.as_str())
    }
}

pub fn categories_path(base: &str, count: u16) -> String {
    format!("{}/categories?count={}", base.trim_end_matches('/'), count)
}

pub fn clues_path(base: &str, category: CategoryId) -> String {
    format!("{}/clues?category={}", base.trim_end_matches('/'), category)
}

pub fn decode_categories(body: &str) -> serde_json::Result<Vec<CategorySummary>> {
    serde_json::from_str(body)
}

pub fn decode_clues(body: &str) -> serde_json::Result<Vec<RawClue>> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_pool_ignores_unknown_fields() {
        let body = r#"[
            {"id": 11531, "title": "mixed bag", "clues_count": 5},
            {"id": 11532, "title": "let's \"ch\"at", "clues_count": 10, "created_at": "2014-02-11T23:04:26.191Z"}
        ]"#;
        let pool = decode_categories(body).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].id, 11531);
        assert_eq!(pool[1].title, "let's \"ch\"at");
        assert_eq!(pool[1].clues_count, 10);
    }

    #[test]
    fn clue_record_keeps_text_and_category_title() {
        let body = r#"[
            {"id": 1, "answer": "Shakespeare", "question": "Hamlet Author", "value": 200,
             "category_id": 7, "category": {"id": 7, "title": "literature", "clues_count": 5}}
        ]"#;
        let clues = decode_clues(body).unwrap();
        assert_eq!(clues[0].question, "Hamlet Author");
        assert_eq!(clues[0].answer, "Shakespeare");
        assert_eq!(clues[0].category_title(), Some("literature"));
    }

    #[test]
    fn missing_text_decodes_as_unplayable() {
        let clues = decode_clues(r#"[{"answer": "Plath", "question": "  "}, {"answer": "x"}]"#).unwrap();
        assert!(!clues[0].is_playable());
        assert!(!clues[1].is_playable());
        assert!(RawClue::new("2+2", "4").is_playable());
    }

    #[test]
    fn category_without_clue_count_is_rejected() {
        let err = decode_categories(r#"[{"id": 1, "title": "mixed bag"}]"#).unwrap_err();
        assert!(err.to_string().contains("clues_count"));
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(decode_categories("<html>oops</html>").is_err());
        assert!(decode_clues(r#"{"error": "not found"}"#).is_err());
    }

    #[test]
    fn paths_tolerate_trailing_slash() {
        assert_eq!(
            categories_path("https://jservice.io/api/", 50),
            "https://jservice.io/api/categories?count=50"
        );
        assert_eq!(clues_path("http://localhost:3000", 42), "http://localhost:3000/clues?category=42");
    }
}
