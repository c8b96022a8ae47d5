//! # minixml: a parser-combinator toolkit for a small markup language
//!
//! The crate builds a complete recursive-descent parser for a strict subset
//! of XML (elements, attributes and nested children) out of small, composable
//! parsers, without a parser generator or regular expressions.
//!
//! ## Layers
//!
//! - Combinators ([`analyzer::combinators`], [`analyzer::prelude`]): generic
//!   building blocks that know nothing about markup.
//! - Primitives ([`analyzer::parsers::primitives`]): the only parsers that
//!   read text directly.
//! - Grammar ([`analyzer::parsers::element`]): identifiers, quoted strings,
//!   attributes and elements composed from the two layers above.
//! - Formatting ([`formatter`]): turns an [`Element`] tree back into markup.
//!
//! ```text
//! Source Text → element() → Element tree → formatter::render → Source Text
//! ```
//!
//! ## Example
//!
//! ```
//! use minixml::{parse_document, Element};
//!
//! let root = parse_document(r#"<top label="Top"><bottom/></top>"#).unwrap();
//! assert_eq!(root.attribute("label"), Some("Top"));
//! assert_eq!(root.children, vec![Element::new("bottom")]);
//! ```

pub mod analyzer;
pub mod ast;
pub mod error;
pub mod formatter;

use tracing::instrument;

// Re-exports
pub use analyzer::parsers::element::parse_document;
pub use ast::*;
pub use error::*;
pub use formatter::config::FormatterConfig;

/// Parses a whole document and renders it again with `config`.
#[instrument(level = "debug", skip(input))]
pub fn reformat(input: &str, config: &FormatterConfig) -> InternalResult<String> {
    let root = parse_document(input)?;
    Ok(formatter::render(&root, config)?)
}
