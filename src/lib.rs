//! Promptsmith - snippet-driven prompt builder
//!
//! This library provides a catalog of prompt templates ("snippets"), a form
//! session that manages per-field values, and a pure renderer that
//! substitutes `{{name}}` tokens into the template text. A separate document
//! vault stores free-form markdown notes next to the snippets.
//!
//! # Example
//!
//! ```rust
//! use promptsmith::{Catalog, FormSession};
//!
//! let catalog = Catalog::builtin();
//! let mut session = FormSession::new();
//!
//! assert!(session.select(&catalog, "quick-task"));
//! session.set_scalar("task", "Fix the flaky login test");
//!
//! let prompt = session.render().unwrap();
//! assert!(prompt.contains("Task: Fix the flaky login test"));
//! ```

pub mod catalog;
pub mod form;
pub mod settings;
pub mod store;
pub mod template;

pub use catalog::{Catalog, CatalogError, Category, FieldDecl, FieldKind, Snippet};
pub use form::{FieldValue, FormSession, ValueMap};
pub use settings::{Settings, SettingsError, Theme};
pub use store::{DocCategory, Document, DocumentStore, StoreError};
pub use template::substitute;

/// One-shot render: select a snippet, apply scalar values, render.
///
/// Convenience wrapper over [`FormSession`] for callers that have all values
/// up front and no list fields to edit. Returns `None` when the snippet id
/// is unknown.
///
/// # Example
///
/// ```rust
/// use promptsmith::{render_snippet, Catalog};
///
/// let catalog = Catalog::builtin();
/// let prompt = render_snippet(
///     &catalog,
///     "quick-task",
///     &[("task", "Tidy the changelog")],
/// )
/// .unwrap();
///
/// assert!(prompt.contains("Tidy the changelog"));
/// ```
pub fn render_snippet(
    catalog: &Catalog,
    snippet_id: &str,
    values: &[(&str, &str)],
) -> Option<String> {
    let mut session = FormSession::new();
    if !session.select(catalog, snippet_id) {
        return None;
    }
    for (field, value) in values {
        session.set_scalar(field, *value);
    }
    session.render()
}
