//! # Primitive Parsers
//!
//! The only parsers that look at the input text directly. Everything else is
//! composed from these through the combinators.

use crate::analyzer::core::{ParseError, ParseResult, Parser};

/// Consumes exactly one character.
///
/// Fails with [`ParseError::UnexpectedEOF`] on empty input.
pub fn any_char(input: &str) -> ParseResult<'_, char> {
    match input.chars().next() {
        Some(c) => Ok((&input[c.len_utf8()..], c)),
        None => Err(ParseError::UnexpectedEOF),
    }
}

/// MatchLiteral: Matches a fixed string at the start of the input
#[derive(Debug, Clone, Copy)]
pub struct MatchLiteral<'e> {
    expected: &'e str,
}

impl<'e> MatchLiteral<'e> {
    pub fn new(expected: &'e str) -> Self {
        Self { expected }
    }
}

impl<'a> Parser<'a, ()> for MatchLiteral<'_> {
    fn parse(&self, input: &'a str) -> ParseResult<'a, ()> {
        match input.strip_prefix(self.expected) {
            Some(rest) => Ok((rest, ())),
            None => Err(ParseError::expected(self.expected, input)),
        }
    }
}

pub fn match_literal(expected: &str) -> MatchLiteral<'_> {
    MatchLiteral::new(expected)
}

/// Consumes the longest run of ASCII letters and hyphens.
///
/// Never fails: when the input does not start with such a character the
/// result is an empty string and nothing is consumed. Callers that need a
/// non-empty name have to check for it themselves.
pub fn identifier(input: &str) -> ParseResult<'_, String> {
    let end = input
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '-'))
        .unwrap_or(input.len());
    Ok((&input[end..], input[..end].to_string()))
}
