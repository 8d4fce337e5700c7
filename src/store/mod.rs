//! Document vault - JSON-file persistence for user documents
//!
//! The whole collection lives as one serialized array in a single file, the
//! way the rest of this crate treats it: a flat blob with linear-scan
//! search, read fully on every operation and written back fully after every
//! mutation. Good enough for the hundreds of documents this is meant for.

mod document;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

pub use document::{DocCategory, Document};

/// Errors that can occur during vault operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access document store: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid document data: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed document collection
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Open a store at the given file path; the file is created lazily on
    /// the first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location for this platform
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("promptsmith")
            .join("documents.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All documents, newest `updated_at` first
    pub fn list(&self) -> Result<Vec<Document>, StoreError> {
        let mut documents = self.load()?;
        documents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(documents)
    }

    /// Look up one document by id
    pub fn get(&self, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self.load()?.into_iter().find(|doc| doc.id == id))
    }

    /// Create a new document with a fresh id and timestamps
    pub fn create(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        category: DocCategory,
    ) -> Result<Document, StoreError> {
        let now = chrono::Utc::now();
        let document = Document {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
            category,
            created_at: now,
            updated_at: now,
        };

        let mut documents = self.load()?;
        documents.push(document.clone());
        self.persist(&documents)?;

        debug!(id = %document.id, "document created");
        Ok(document)
    }

    /// Update an existing document, bumping `updated_at` and keeping
    /// `created_at`. Returns the updated record, or `None` for an unknown id.
    pub fn update(
        &self,
        id: &str,
        title: Option<String>,
        content: Option<String>,
        category: Option<DocCategory>,
    ) -> Result<Option<Document>, StoreError> {
        let mut documents = self.load()?;
        let Some(document) = documents.iter_mut().find(|doc| doc.id == id) else {
            return Ok(None);
        };

        if let Some(title) = title {
            document.title = title;
        }
        if let Some(content) = content {
            document.content = content;
        }
        if let Some(category) = category {
            document.category = category;
        }
        document.updated_at = chrono::Utc::now();
        let updated = document.clone();

        self.persist(&documents)?;
        debug!(id, "document updated");
        Ok(Some(updated))
    }

    /// Delete a document by id; returns whether anything was removed
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut documents = self.load()?;
        let before = documents.len();
        documents.retain(|doc| doc.id != id);

        if documents.len() == before {
            return Ok(false);
        }
        self.persist(&documents)?;
        debug!(id, "document deleted");
        Ok(true)
    }

    /// Remove the whole collection
    pub fn delete_all(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        debug!("document store cleared");
        Ok(())
    }

    /// Case-insensitive substring search over title and content.
    ///
    /// A blank query returns everything, in the same order as
    /// [`list`](Self::list).
    pub fn search(&self, query: &str) -> Result<Vec<Document>, StoreError> {
        let documents = self.list()?;
        if query.trim().is_empty() {
            return Ok(documents);
        }
        Ok(documents
            .into_iter()
            .filter(|doc| doc.matches(query))
            .collect())
    }

    /// Serialize the whole collection as pretty-printed JSON
    pub fn export(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.list()?)?)
    }

    /// Import a serialized collection.
    ///
    /// The input must be a JSON array of complete document records;
    /// deserialization is the only validation (a record missing a required
    /// field fails the whole import, and nothing is written). With `merge`
    /// the imported records are appended, otherwise they replace the
    /// collection. Returns the number of imported records.
    pub fn import(&self, json: &str, merge: bool) -> Result<usize, StoreError> {
        let imported: Vec<Document> = serde_json::from_str(json)?;
        let count = imported.len();

        let documents = if merge {
            let mut existing = self.load()?;
            existing.extend(imported);
            existing
        } else {
            imported
        };

        self.persist(&documents)?;
        debug!(count, merge, "documents imported");
        Ok(count)
    }

    fn load(&self) -> Result<Vec<Document>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn persist(&self, documents: &[Document]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(documents)?)?;
        Ok(())
    }
}
