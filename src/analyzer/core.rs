//! # Core Parser Definitions
//!
//! This module defines the fundamental parser interface and error types
//! that form the foundation of the combinator system.

use thiserror::Error;

/// Parser trait defines the core parsing interface.
///
/// A parser receives the remaining, not yet consumed input and either succeeds
/// with the input left after it plus an output value, or fails with a
/// [`ParseError`]. The input is never modified; on success the returned input
/// is always a suffix of the input the parser was given.
///
/// # Type Parameters
///
/// * `'a` - The lifetime of the input text
/// * `O` - The output value type
pub trait Parser<'a, O> {
    /// Attempts to parse the start of `input`.
    ///
    /// # Returns
    ///
    /// * `Ok((remaining, output))` - If parsing succeeds
    /// * `Err(error)` - If parsing fails
    fn parse(&self, input: &'a str) -> ParseResult<'a, O>;
}

/// Result type for parsing operations.
///
/// On success, returns a tuple of the remaining input and the parsed value.
/// On failure, returns a ParseError.
pub type ParseResult<'a, O> = Result<(&'a str, O), ParseError>;

/// Any function from input to [`ParseResult`] is a parser.
impl<'a, F, O> Parser<'a, O> for F
where
    F: Fn(&'a str) -> ParseResult<'a, O>,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, O> {
        self(input)
    }
}

/// Error type for parsing operations.
///
/// Each variant is one distinct cause of failure. Variants that carry input
/// hold the input as it was when the failing parser started.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A literal was not found at the start of the input
    #[error("Expected {expected:?}, found {found:?}")]
    Expected { expected: String, found: String },
    /// The parsed value was rejected by a predicate
    #[error("Predicate rejected input: {input:?}")]
    Predicate { input: String },
    /// Input ran out while a character was required
    #[error("Unexpected EOF")]
    UnexpectedEOF,
    /// A one-or-more repetition did not match even once
    #[error("No match: expected at least one at {input:?}")]
    NoMatch { input: String },
    /// No alternative was given to choose from
    #[error("No alternative")]
    NoAlternative,
    /// Explicit failure
    #[error("Fail: {0}")]
    Fail(String),
    #[error("{message}: {inner}")]
    WithContext {
        message: String,
        inner: Box<ParseError>,
    },
    /// A document parsed but left input behind
    #[error("Trailing input: {remaining:?}")]
    TrailingInput { remaining: String },
}

impl ParseError {
    pub fn expected(expected: &str, found: &str) -> Self {
        ParseError::Expected {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn with_context(self, ctx: &str) -> Self {
        ParseError::WithContext {
            message: ctx.to_string(),
            inner: Box::new(self),
        }
    }

    /// Returns the innermost error beneath any context annotations.
    pub fn root_cause(&self) -> &ParseError {
        match self {
            ParseError::WithContext { inner, .. } => inner.root_cause(),
            other => other,
        }
    }
}
