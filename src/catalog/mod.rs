//! Snippet catalog - the immutable registry of prompt templates
//!
//! The catalog is built once at startup (from the embedded builtin set or a
//! user-supplied TOML file) and never mutated afterwards. Lookup misses are
//! ordinary `None` values: callers map "unknown id" and "nothing selected"
//! to the same neutral state.

mod builtin;
pub mod lint;
mod snippet;

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub use snippet::{Category, FieldDecl, FieldGuide, FieldKind, Snippet};

/// Errors that can occur while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two snippets share an id
    #[error("duplicate snippet id: {id}")]
    DuplicateSnippet { id: String },

    /// A snippet declares the same field id twice
    #[error("duplicate field id {field:?} in snippet {snippet:?}")]
    DuplicateField { snippet: String, field: String },

    /// Error reading a catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing catalog TOML
    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// TOML structure of a catalog document
#[derive(Deserialize)]
struct CatalogDoc {
    #[serde(default)]
    snippets: Vec<Snippet>,
}

/// Immutable, append-only collection of snippets with id lookup
#[derive(Debug, Default)]
pub struct Catalog {
    snippets: Vec<Snippet>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The builtin snippet set shipped with the binary.
    ///
    /// The embedded documents are authored alongside this crate and covered
    /// by the content tests, so a parse failure here is a packaging bug.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for doc in builtin::DOCUMENTS {
            catalog
                .extend_from_toml(doc)
                .expect("builtin catalog should be valid TOML");
        }
        catalog
    }

    /// Load a catalog from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.extend_from_toml(content)?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml(&content)?;
        debug!(path = %path.display(), snippets = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Append every snippet of a TOML document, keeping declaration order
    pub fn extend_from_toml(&mut self, content: &str) -> Result<(), CatalogError> {
        let doc: CatalogDoc = toml::from_str(content)?;
        for snippet in doc.snippets {
            self.insert(snippet)?;
        }
        Ok(())
    }

    fn insert(&mut self, snippet: Snippet) -> Result<(), CatalogError> {
        if self.index.contains_key(&snippet.id) {
            return Err(CatalogError::DuplicateSnippet { id: snippet.id });
        }

        let mut seen = std::collections::HashSet::new();
        for field in &snippet.fields {
            if !seen.insert(field.id.as_str()) {
                return Err(CatalogError::DuplicateField {
                    snippet: snippet.id.clone(),
                    field: field.id.clone(),
                });
            }
        }

        self.index.insert(snippet.id.clone(), self.snippets.len());
        self.snippets.push(snippet);
        Ok(())
    }

    /// Get a snippet by id; an unknown id is an absent result, not an error
    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.index.get(id).map(|&i| &self.snippets[i])
    }

    /// Whether a snippet with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate snippets in declaration order (selector order)
    pub fn iter(&self) -> impl Iterator<Item = &Snippet> {
        self.snippets.iter()
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}
