//! Placeholder substitution - expands a template against a form value map
//!
//! Pure string-to-string transformation: no I/O, no state, identical inputs
//! produce identical output.

use crate::form::{FieldValue, ValueMap};

use super::lexer::{scan, Segment};

/// Substitute every `{{name}}` token in `template` with the value of the
/// field named `name`.
///
/// Scalar values are inserted verbatim. List values are formatted as
/// markdown bullet lines: entries that are blank after trimming are dropped,
/// each survivor is prefixed with `"- "`, and the lines are joined with a
/// single newline (an all-blank list becomes the empty string). A token with
/// no entry in the value map passes through literally, braces and all.
///
/// Every occurrence of a repeated token is substituted, not just the first.
pub fn substitute(template: &str, values: &ValueMap) -> String {
    let mut out = String::with_capacity(template.len());

    for segment in scan(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Token { name, span } => match values.get(name) {
                Some(FieldValue::Scalar(value)) => out.push_str(value),
                Some(FieldValue::List(items)) => push_list(&mut out, items),
                None => out.push_str(&template[span]),
            },
        }
    }

    out
}

fn push_list(out: &mut String, items: &[String]) {
    let mut first = true;
    for item in items.iter().filter(|item| !item.trim().is_empty()) {
        if !first {
            out.push('\n');
        }
        out.push_str("- ");
        out.push_str(item);
        first = false;
    }
}
