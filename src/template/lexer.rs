//! Lexer for template text using logos
//!
//! Splits a raw template string into literal runs and `{{name}}` placeholder
//! tokens. Anything that does not form a complete token (a stray brace, an
//! unterminated `{{`, a malformed name) stays literal text.

use logos::Logos;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
enum RawToken {
    /// A complete placeholder: `{{` identifier `}}`
    #[regex(r"\{\{[A-Za-z_][A-Za-z0-9_]*\}\}")]
    Placeholder,

    /// A run of text containing no opening brace
    #[regex(r"[^{]+")]
    Text,

    /// A brace that did not open a well-formed placeholder
    #[token("{")]
    Brace,
}

/// One piece of a scanned template
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Verbatim template text
    Literal(&'a str),
    /// A `{{name}}` placeholder; `span` covers the whole token including braces
    Token { name: &'a str, span: Span },
}

/// Scan template text into literal and token segments.
///
/// The concatenation of all segment source slices reproduces the input
/// exactly, so a renderer that emits unmatched tokens verbatim loses nothing.
pub fn scan(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut lexer = RawToken::lexer(text);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(RawToken::Placeholder) => {
                let slice = lexer.slice();
                segments.push(Segment::Token {
                    name: &slice[2..slice.len() - 2],
                    span,
                });
            }
            // Text, stray braces, and anything the lexer rejects are literal
            _ => segments.push(Segment::Literal(&text[span])),
        }
    }

    segments
}

/// Iterate the placeholder tokens of a template in order of appearance.
pub fn tokens(text: &str) -> impl Iterator<Item = (&str, Span)> {
    scan(text).into_iter().filter_map(|seg| match seg {
        Segment::Token { name, span } => Some((name, span)),
        Segment::Literal(_) => None,
    })
}
