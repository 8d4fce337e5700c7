//! Template text handling
//!
//! This module scans raw template text for `{{name}}` placeholder tokens and
//! renders a template against a form value map.
//!
//! # Example
//!
//! ```text
//! // Template text
//! Hi {{name}}, tasks:
//! {{items}}
//!
//! // Rendered with name = "Sam", items = ["wash car", "buy milk"]
//! Hi Sam, tasks:
//! - wash car
//! - buy milk
//! ```

mod lexer;
mod render;

pub use lexer::{scan, tokens, Segment, Span};
pub use render::substitute;
