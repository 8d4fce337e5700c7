//! Lint engine for detecting authoring defects in catalog content.
//!
//! The runtime tolerates all of these (unmatched tokens pass through,
//! inert fields do nothing), so they are caught here instead: at authoring
//! time and in the content test over the builtin catalog.

use std::collections::HashSet;
use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::template::{tokens, Span};

use super::{Catalog, FieldKind, Snippet};

/// A lint finding about one snippet
#[derive(Debug)]
pub struct LintFinding {
    pub category: LintCategory,
    /// Id of the snippet the finding is about
    pub snippet: String,
    pub message: String,
    /// Byte range into the snippet's template text, when the finding has one
    pub span: Option<Span>,
}

/// Category of authoring defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    /// The template references a field no declaration provides
    UndeclaredToken,
    /// A declared field whose token never appears in the template
    InertField,
    /// A choice field with a broken option set or default
    ChoiceOptions,
}

impl LintCategory {
    /// Whether findings of this category break the authoring contract.
    ///
    /// Inert fields are legal (the declaration simply has no effect) and
    /// only reported as a cleanup hint.
    pub fn is_error(self) -> bool {
        match self {
            LintCategory::UndeclaredToken | LintCategory::ChoiceOptions => true,
            LintCategory::InertField => false,
        }
    }
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::UndeclaredToken => write!(f, "undeclared-token"),
            LintCategory::InertField => write!(f, "inert-field"),
            LintCategory::ChoiceOptions => write!(f, "choice-options"),
        }
    }
}

impl LintFinding {
    /// Format the finding with template context using ariadne
    pub fn format(&self, template: &str) -> String {
        let (kind, kind_name) = if self.category.is_error() {
            (ReportKind::Error, "error")
        } else {
            (ReportKind::Warning, "warning")
        };

        match &self.span {
            Some(span) => {
                let mut buf = Vec::new();
                Report::build(kind, self.snippet.as_str(), span.start)
                    .with_message(&self.message)
                    .with_label(
                        Label::new((self.snippet.as_str(), span.clone()))
                            .with_message(format!("{}", self.category))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((self.snippet.as_str(), Source::from(template)), &mut buf)
                    .unwrap();
                String::from_utf8(buf).unwrap()
            }
            None => format!(
                "{kind_name}[{}] {}: {}",
                self.category, self.snippet, self.message
            ),
        }
    }
}

/// Run all lint checks on every snippet of a catalog.
pub fn check(catalog: &Catalog) -> Vec<LintFinding> {
    let mut findings = Vec::new();
    for snippet in catalog.iter() {
        check_snippet(snippet, &mut findings);
    }
    findings
}

/// Run all lint checks on a single snippet.
pub fn check_snippet(snippet: &Snippet, findings: &mut Vec<LintFinding>) {
    check_tokens(snippet, findings);
    check_inert_fields(snippet, findings);
    check_choice_options(snippet, findings);
}

// ── Token / declaration cross-reference ───────────────────────────

fn check_tokens(snippet: &Snippet, findings: &mut Vec<LintFinding>) {
    let declared: HashSet<&str> = snippet.fields.iter().map(|f| f.id.as_str()).collect();
    let mut reported = HashSet::new();

    for (name, span) in tokens(&snippet.template) {
        if !declared.contains(name) && reported.insert(name.to_string()) {
            findings.push(LintFinding {
                category: LintCategory::UndeclaredToken,
                snippet: snippet.id.clone(),
                message: format!("template references undeclared field {name:?}"),
                span: Some(span),
            });
        }
    }
}

fn check_inert_fields(snippet: &Snippet, findings: &mut Vec<LintFinding>) {
    let used: HashSet<&str> = tokens(&snippet.template).map(|(name, _)| name).collect();

    for field in &snippet.fields {
        if !used.contains(field.id.as_str()) {
            findings.push(LintFinding {
                category: LintCategory::InertField,
                snippet: snippet.id.clone(),
                message: format!("field {:?} has no token in the template", field.id),
                span: None,
            });
        }
    }
}

// ── Choice option sets ────────────────────────────────────────────

fn check_choice_options(snippet: &Snippet, findings: &mut Vec<LintFinding>) {
    for field in &snippet.fields {
        if field.kind != FieldKind::Choice {
            continue;
        }

        if field.options.is_empty() {
            findings.push(LintFinding {
                category: LintCategory::ChoiceOptions,
                snippet: snippet.id.clone(),
                message: format!("choice field {:?} has no options", field.id),
                span: None,
            });
            continue;
        }

        if let Some(default) = &field.default {
            if !field.options.contains(default) {
                findings.push(LintFinding {
                    category: LintCategory::ChoiceOptions,
                    snippet: snippet.id.clone(),
                    message: format!(
                        "default {default:?} of choice field {:?} is not one of its options",
                        field.id
                    ),
                    span: None,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet_from_toml(doc: &str) -> Snippet {
        let catalog = Catalog::from_toml(doc).expect("lint fixture should parse");
        let snippet = catalog.iter().next().expect("fixture has one snippet").clone();
        snippet
    }

    #[test]
    fn test_clean_snippet_has_no_findings() {
        let snippet = snippet_from_toml(
            r#"
[[snippets]]
id = "clean"
name = "Clean"
description = "No defects"
category = "other"
icon = "c"
template = "Do {{task}}"

[[snippets.fields]]
id = "task"
label = "Task"
kind = "line"
"#,
        );
        let mut findings = Vec::new();
        check_snippet(&snippet, &mut findings);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_undeclared_token_reported_once_with_span() {
        let snippet = snippet_from_toml(
            r#"
[[snippets]]
id = "ghostly"
name = "Ghostly"
description = "Undeclared token, twice"
category = "other"
icon = "g"
template = "{{ghost}} and {{ghost}}"
"#,
        );
        let mut findings = Vec::new();
        check_snippet(&snippet, &mut findings);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, LintCategory::UndeclaredToken);
        assert!(findings[0].category.is_error());
        assert_eq!(findings[0].span, Some(0..9));
    }

    #[test]
    fn test_inert_field_is_warning() {
        let snippet = snippet_from_toml(
            r#"
[[snippets]]
id = "inert"
name = "Inert"
description = "Field without token"
category = "other"
icon = "i"
template = "static text"

[[snippets.fields]]
id = "unused"
label = "Unused"
kind = "line"
"#,
        );
        let mut findings = Vec::new();
        check_snippet(&snippet, &mut findings);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, LintCategory::InertField);
        assert!(!findings[0].category.is_error());
    }

    #[test]
    fn test_choice_default_outside_options() {
        let snippet = snippet_from_toml(
            r#"
[[snippets]]
id = "choosy"
name = "Choosy"
description = "Bad default"
category = "other"
icon = "c"
template = "{{mood}}"

[[snippets.fields]]
id = "mood"
label = "Mood"
kind = "choice"
options = ["calm", "bold"]
default = "loud"
"#,
        );
        let mut findings = Vec::new();
        check_snippet(&snippet, &mut findings);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, LintCategory::ChoiceOptions);
    }

    #[test]
    fn test_format_with_span_renders_report() {
        let finding = LintFinding {
            category: LintCategory::UndeclaredToken,
            snippet: "ghostly".to_string(),
            message: "template references undeclared field \"ghost\"".to_string(),
            span: Some(0..9),
        };
        let report = finding.format("{{ghost}} and more");
        assert!(report.contains("ghost"));
    }
}
