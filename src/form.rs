//! Form session state - owns the value map for the active snippet
//!
//! The session is a two-state machine: Idle (nothing selected, no values) and
//! Editing (a snippet selected, one initialized value entry per declared
//! field). Selecting a snippet always rebuilds the whole map; there is no
//! merging of values across selections, even when two snippets declare a
//! field with the same id.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{Catalog, FieldKind, Snippet};
use crate::template::substitute;

/// Runtime value of a single field, shaped by its declared kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Line, block, and choice fields hold one string
    Scalar(String),
    /// List fields hold an ordered sequence of lines, never empty
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(value) => Some(value),
            FieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            FieldValue::Scalar(_) => None,
        }
    }
}

/// Mapping from field id to its current value
pub type ValueMap = HashMap<String, FieldValue>;

#[derive(Debug)]
struct ActiveForm {
    snippet: Snippet,
    values: ValueMap,
}

/// Editing session for one snippet at a time
#[derive(Debug, Default)]
pub struct FormSession {
    active: Option<ActiveForm>,
}

impl FormSession {
    /// Create a new session in the Idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a snippet is currently selected
    pub fn is_editing(&self) -> bool {
        self.active.is_some()
    }

    /// The currently selected snippet, if any
    pub fn snippet(&self) -> Option<&Snippet> {
        self.active.as_ref().map(|form| &form.snippet)
    }

    /// The current value map, if a snippet is selected
    pub fn values(&self) -> Option<&ValueMap> {
        self.active.as_ref().map(|form| &form.values)
    }

    /// The current value of one field
    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values().and_then(|values| values.get(field))
    }

    /// Select a snippet by id, replacing any previous selection.
    ///
    /// On a hit the value map is rebuilt in one step: scalar and choice
    /// fields start at their declared default (empty string otherwise), list
    /// fields always start as a single empty line. An unknown id clears the
    /// selection, same as [`reset`](Self::reset) - callers treat "nothing
    /// selected" and "no such snippet" identically.
    ///
    /// Returns whether the id resolved to a snippet.
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> bool {
        match catalog.get(id) {
            Some(snippet) => {
                let values = initial_values(snippet);
                debug!(snippet = %snippet.id, fields = values.len(), "form initialized");
                self.active = Some(ActiveForm {
                    snippet: snippet.clone(),
                    values,
                });
                true
            }
            None => {
                debug!(snippet = id, "unknown snippet id, clearing selection");
                self.active = None;
                false
            }
        }
    }

    /// Clear the selection and discard all values
    pub fn reset(&mut self) {
        debug!("form reset");
        self.active = None;
    }

    /// Replace the value of a scalar or choice field.
    ///
    /// The value is stored verbatim; choice fields are not checked against
    /// their option set here. Unknown field ids and list fields are ignored.
    pub fn set_scalar(&mut self, field: &str, value: impl Into<String>) {
        if let Some(form) = &mut self.active {
            if let Some(slot) = form.values.get_mut(field) {
                if matches!(slot, FieldValue::Scalar(_)) {
                    *slot = FieldValue::Scalar(value.into());
                }
            }
        }
    }

    /// Replace one line of a list field.
    ///
    /// `index` must address an existing line; the caller only ever replays
    /// indices it obtained from the current value map, so an out-of-bounds
    /// index is a bug in the caller and panics.
    pub fn set_list_item(&mut self, field: &str, index: usize, value: impl Into<String>) {
        if let Some(form) = &mut self.active {
            if let Some(FieldValue::List(items)) = form.values.get_mut(field) {
                items[index] = value.into();
            }
        }
    }

    /// Append an empty line to a list field
    pub fn push_list_item(&mut self, field: &str) {
        if let Some(form) = &mut self.active {
            if let Some(FieldValue::List(items)) = form.values.get_mut(field) {
                items.push(String::new());
            }
        }
    }

    /// Remove one line of a list field.
    ///
    /// The last remaining line cannot be removed; the call is a no-op so the
    /// list always keeps at least one (possibly blank) entry. A blank-only
    /// list renders the same as an empty one, so the floor never shows up in
    /// output.
    pub fn remove_list_item(&mut self, field: &str, index: usize) {
        if let Some(form) = &mut self.active {
            if let Some(FieldValue::List(items)) = form.values.get_mut(field) {
                if items.len() > 1 {
                    items.remove(index);
                }
            }
        }
    }

    /// Render the selected snippet's template against the current values.
    ///
    /// Returns `None` in the Idle state. Pure with respect to the session:
    /// rendering never mutates values.
    pub fn render(&self) -> Option<String> {
        self.active
            .as_ref()
            .map(|form| substitute(&form.snippet.template, &form.values))
    }
}

fn initial_values(snippet: &Snippet) -> ValueMap {
    snippet
        .fields
        .iter()
        .map(|field| {
            let value = match field.kind {
                // A scalar default on a list field has no meaning and is ignored
                FieldKind::List => FieldValue::List(vec![String::new()]),
                _ => FieldValue::Scalar(field.default.clone().unwrap_or_default()),
            };
            (field.id.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::catalog::Catalog;

    use super::*;

    const TEST_CATALOG: &str = r#"
[[snippets]]
id = "greet"
name = "Greeting"
description = "Greets someone with tasks"
category = "other"
icon = "t"
template = "Hi {{name}}, tasks:\n{{items}}"

[[snippets.fields]]
id = "name"
label = "Name"
kind = "line"
default = "World"

[[snippets.fields]]
id = "items"
label = "Tasks"
kind = "list"

[[snippets]]
id = "farewell"
name = "Farewell"
description = "Says goodbye"
category = "other"
icon = "t"
template = "Bye {{name}}"

[[snippets.fields]]
id = "name"
label = "Name"
kind = "line"
"#;

    fn catalog() -> Catalog {
        Catalog::from_toml(TEST_CATALOG).expect("test catalog should parse")
    }

    #[test]
    fn test_starts_idle() {
        let session = FormSession::new();
        assert!(!session.is_editing());
        assert_eq!(session.render(), None);
    }

    #[test]
    fn test_select_initializes_defaults() {
        let catalog = catalog();
        let mut session = FormSession::new();
        assert!(session.select(&catalog, "greet"));

        assert_eq!(
            session.value("name"),
            Some(&FieldValue::Scalar("World".to_string()))
        );
        assert_eq!(
            session.value("items"),
            Some(&FieldValue::List(vec![String::new()]))
        );
    }

    #[test]
    fn test_select_unknown_id_clears_selection() {
        let catalog = catalog();
        let mut session = FormSession::new();
        session.select(&catalog, "greet");
        assert!(!session.select(&catalog, "nope"));
        assert!(!session.is_editing());
        assert_eq!(session.render(), None);
    }

    #[test]
    fn test_reselect_replaces_shared_field() {
        let catalog = catalog();
        let mut session = FormSession::new();
        session.select(&catalog, "greet");
        session.set_scalar("name", "Sam");

        // Re-selection rebuilds the map; the shared "name" id starts over
        session.select(&catalog, "farewell");
        assert_eq!(
            session.value("name"),
            Some(&FieldValue::Scalar(String::new()))
        );
        assert_eq!(session.value("items"), None);
    }

    #[test]
    fn test_set_scalar_on_unknown_field_is_ignored() {
        let catalog = catalog();
        let mut session = FormSession::new();
        session.select(&catalog, "greet");
        session.set_scalar("ghost", "value");
        assert_eq!(session.value("ghost"), None);
    }

    #[test]
    fn test_set_scalar_on_list_field_is_ignored() {
        let catalog = catalog();
        let mut session = FormSession::new();
        session.select(&catalog, "greet");
        session.set_scalar("items", "not a list");
        assert_eq!(
            session.value("items"),
            Some(&FieldValue::List(vec![String::new()]))
        );
    }

    #[test]
    fn test_list_edit_cycle() {
        let catalog = catalog();
        let mut session = FormSession::new();
        session.select(&catalog, "greet");

        session.set_list_item("items", 0, "wash car");
        session.push_list_item("items");
        session.set_list_item("items", 1, "buy milk");
        assert_eq!(
            session.value("items").unwrap().as_list().unwrap(),
            &["wash car".to_string(), "buy milk".to_string()]
        );

        session.remove_list_item("items", 0);
        assert_eq!(
            session.value("items").unwrap().as_list().unwrap(),
            &["buy milk".to_string()]
        );
    }

    #[test]
    fn test_last_line_floor() {
        let catalog = catalog();
        let mut session = FormSession::new();
        session.select(&catalog, "greet");

        session.set_list_item("items", 0, "only line");
        session.remove_list_item("items", 0);
        assert_eq!(
            session.value("items").unwrap().as_list().unwrap(),
            &["only line".to_string()]
        );
    }

    #[test]
    fn test_render_with_defaults() {
        let catalog = catalog();
        let mut session = FormSession::new();
        session.select(&catalog, "greet");
        assert_eq!(session.render().unwrap(), "Hi World, tasks:\n");
    }

    #[test]
    fn test_setters_in_idle_state_are_noops() {
        let mut session = FormSession::new();
        session.set_scalar("name", "Sam");
        session.push_list_item("items");
        session.remove_list_item("items", 0);
        assert!(!session.is_editing());
    }
}
