//! Integration tests for the select -> edit -> render pipeline

use promptsmith::{Catalog, FieldValue, FormSession};

const CATALOG: &str = r#"
[[snippets]]
id = "greeting"
name = "Greeting"
description = "Greets someone with tasks"
category = "other"
icon = "g"
template = "Hi {{name}}, tasks:\n{{items}}"

[[snippets.fields]]
id = "name"
label = "Name"
kind = "line"

[[snippets.fields]]
id = "items"
label = "Tasks"
kind = "list"

[[snippets]]
id = "echo-twice"
name = "Echo Twice"
description = "Repeats one token"
category = "other"
icon = "e"
template = "{{x}} and {{x}}"

[[snippets.fields]]
id = "x"
label = "X"
kind = "line"

[[snippets]]
id = "with-default"
name = "With Default"
description = "Default-valued field"
category = "other"
icon = "d"
template = "value: {{slot}}"

[[snippets.fields]]
id = "slot"
label = "Slot"
kind = "choice"
options = ["alpha", "beta"]
default = "alpha"

[[snippets]]
id = "haunted"
name = "Haunted"
description = "References an undeclared field"
category = "other"
icon = "h"
template = "before {{ghost}} after"

[[snippets]]
id = "shares-name"
name = "Shares Name"
description = "Declares the same field id as greeting"
category = "other"
icon = "s"
template = "Bye {{name}}"

[[snippets.fields]]
id = "name"
label = "Name"
kind = "line"
"#;

fn catalog() -> Catalog {
    Catalog::from_toml(CATALOG).expect("test catalog should parse")
}

#[test]
fn test_render_is_idempotent() {
    let catalog = catalog();
    let mut session = FormSession::new();
    session.select(&catalog, "greeting");
    session.set_scalar("name", "Sam");
    session.set_list_item("items", 0, "wash car");

    assert_eq!(session.render(), session.render());
}

#[test]
fn test_default_value_renders_verbatim() {
    let catalog = catalog();
    let mut session = FormSession::new();
    session.select(&catalog, "with-default");

    assert_eq!(session.render().unwrap(), "value: alpha");
}

#[test]
fn test_repeated_token_substitutes_all_occurrences() {
    let catalog = catalog();
    let mut session = FormSession::new();
    session.select(&catalog, "echo-twice");
    session.set_scalar("x", "A");

    assert_eq!(session.render().unwrap(), "A and A");
}

#[test]
fn test_list_formatting_drops_blanks_and_joins() {
    let catalog = catalog();
    let mut session = FormSession::new();
    session.select(&catalog, "greeting");

    session.set_list_item("items", 0, "a");
    session.push_list_item("items");
    session.push_list_item("items");
    session.set_list_item("items", 2, "  ");
    session.push_list_item("items");
    session.set_list_item("items", 3, "b");

    let rendered = session.render().unwrap();
    assert!(rendered.ends_with("tasks:\n- a\n- b"));
}

#[test]
fn test_all_blank_list_renders_as_empty_string() {
    let catalog = catalog();
    let mut session = FormSession::new();
    session.select(&catalog, "greeting");
    session.set_scalar("name", "Sam");

    // The single-element default [""] is blank
    assert_eq!(session.render().unwrap(), "Hi Sam, tasks:\n");
}

#[test]
fn test_selection_reset_law() {
    let catalog = catalog();
    let mut session = FormSession::new();
    session.select(&catalog, "greeting");
    session.set_scalar("name", "Sam");
    session.set_list_item("items", 0, "wash car");

    // Switching snippets rebuilds the map even for the shared "name" id
    session.select(&catalog, "shares-name");
    let values = session.values().unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(
        values.get("name"),
        Some(&FieldValue::Scalar(String::new()))
    );
    assert_eq!(session.render().unwrap(), "Bye ");
}

#[test]
fn test_last_line_floor_on_single_element() {
    let catalog = catalog();
    let mut session = FormSession::new();
    session.select(&catalog, "greeting");

    session.remove_list_item("items", 0);
    assert_eq!(
        session.value("items"),
        Some(&FieldValue::List(vec![String::new()]))
    );
}

#[test]
fn test_unmatched_token_passes_through_literally() {
    let catalog = catalog();
    let mut session = FormSession::new();
    session.select(&catalog, "haunted");

    assert_eq!(session.render().unwrap(), "before {{ghost}} after");
}

#[test]
fn test_full_scenario() {
    let catalog = catalog();
    let mut session = FormSession::new();
    session.select(&catalog, "greeting");

    session.set_scalar("name", "Sam");
    session.set_list_item("items", 0, "wash car");
    session.push_list_item("items");
    session.push_list_item("items");
    session.set_list_item("items", 2, "buy milk");

    insta::assert_snapshot!(session.render().unwrap(), @r"
    Hi Sam, tasks:
    - wash car
    - buy milk
    ");
}

#[test]
fn test_reset_returns_to_idle() {
    let catalog = catalog();
    let mut session = FormSession::new();
    session.select(&catalog, "greeting");
    session.reset();

    assert!(!session.is_editing());
    assert_eq!(session.render(), None);
    assert_eq!(session.values(), None);
}

#[test]
fn test_copying_the_result_does_not_touch_state() {
    // The clipboard hand-off operates on the rendered string only; the
    // session is unchanged by whatever happens to that string afterwards.
    let catalog = catalog();
    let mut session = FormSession::new();
    session.select(&catalog, "echo-twice");
    session.set_scalar("x", "A");

    let rendered = session.render().unwrap();
    let _owned_elsewhere = rendered.clone();
    drop(rendered);

    assert_eq!(session.render().unwrap(), "A and A");
}
