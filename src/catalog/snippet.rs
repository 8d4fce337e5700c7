//! Static schema types for the snippet catalog

use std::fmt;

use serde::Deserialize;

/// Input shape of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line scalar input
    Line,
    /// Multi-line scalar input; substitutes the same as `Line`
    Block,
    /// Scalar constrained to a fixed option set
    Choice,
    /// Ordered sequence of lines, rendered as a bullet list
    List,
}

impl FieldKind {
    /// Whether values of this kind are a sequence rather than one string
    pub fn is_list(self) -> bool {
        matches!(self, FieldKind::List)
    }
}

/// Declaration of one form field within a snippet
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDecl {
    /// Token name; `{{id}}` occurrences in the template refer to this field
    pub id: String,
    /// Display name for the form
    pub label: String,
    pub kind: FieldKind,
    /// Advisory only; rendering never blocks on an unmet requirement
    #[serde(default)]
    pub required: bool,
    /// Example text shown in an empty input
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Initial value for scalar and choice fields
    #[serde(default)]
    pub default: Option<String>,
    /// Valid values for choice fields; empty for every other kind
    #[serde(default)]
    pub options: Vec<String>,
}

/// Authoring help for one field, shown as a tooltip next to its label.
///
/// Kept apart from [`FieldDecl`] so presentation text never leaks into the
/// substitution-relevant schema.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldGuide {
    /// Matches a [`FieldDecl::id`] of the same snippet
    pub field: String,
    pub explanation: String,
    pub example: String,
    #[serde(default)]
    pub tips: Option<String>,
}

/// Catalog grouping tag for the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Start,
    Component,
    Fix,
    Refactor,
    Api,
    Test,
    Docs,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Start => write!(f, "start"),
            Category::Component => write!(f, "component"),
            Category::Fix => write!(f, "fix"),
            Category::Refactor => write!(f, "refactor"),
            Category::Api => write!(f, "api"),
            Category::Test => write!(f, "test"),
            Category::Docs => write!(f, "docs"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// One prompt template with its field schema and documentation
#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    /// Unique key within the catalog
    pub id: String,
    pub name: String,
    /// One-line description for the selector
    pub description: String,
    pub category: Category,
    pub icon: String,
    /// Raw template text with zero or more `{{fieldId}}` tokens
    pub template: String,
    /// Field declarations in form-rendering order
    #[serde(default)]
    pub fields: Vec<FieldDecl>,

    // Extended documentation, surfaced by `info`
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub when_to_use: String,
    #[serde(default)]
    pub use_case: String,
    #[serde(default)]
    pub guide: Vec<FieldGuide>,
}

impl Snippet {
    /// Look up a field declaration by id
    pub fn field(&self, id: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|field| field.id == id)
    }

    /// Look up the guide entry for a field, if the author wrote one
    pub fn guide_for(&self, field_id: &str) -> Option<&FieldGuide> {
        self.guide.iter().find(|guide| guide.field == field_id)
    }
}
