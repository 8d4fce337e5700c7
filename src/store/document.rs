//! Document record types for the vault

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Grouping tag for stored documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocCategory {
    Guidelines,
    Templates,
    Standards,
    Other,
}

impl fmt::Display for DocCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocCategory::Guidelines => write!(f, "guidelines"),
            DocCategory::Templates => write!(f, "templates"),
            DocCategory::Standards => write!(f, "standards"),
            DocCategory::Other => write!(f, "other"),
        }
    }
}

impl FromStr for DocCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guidelines" => Ok(DocCategory::Guidelines),
            "templates" => Ok(DocCategory::Templates),
            "standards" => Ok(DocCategory::Standards),
            "other" => Ok(DocCategory::Other),
            other => Err(format!(
                "unknown category {other:?} (expected guidelines, templates, standards, or other)"
            )),
        }
    }
}

/// A stored markdown document.
///
/// All fields are required on import; there is no schema version and no
/// migration path - the persisted form is exactly this struct as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: DocCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Whether `query` occurs in the title or content, case-insensitively
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.content.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, content: &str) -> Document {
        Document {
            id: "d1".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: DocCategory::Other,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let document = doc("Style Guide", "Always run the linter.");
        assert!(document.matches("style"));
        assert!(document.matches("LINTER"));
        assert!(!document.matches("deploy"));
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("standards".parse::<DocCategory>(), Ok(DocCategory::Standards));
        assert!("nope".parse::<DocCategory>().is_err());
    }

    #[test]
    fn test_import_rejects_missing_field() {
        // No "title" key - deserialization is the presence check
        let raw = r#"{"id":"x","content":"c","category":"other",
                      "created_at":"2026-01-01T00:00:00Z","updated_at":"2026-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<Document>(raw).is_err());
    }
}
