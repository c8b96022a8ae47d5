//! # Element Grammar
//!
//! Recursive-descent grammar for the markup subset, built only from the
//! combinators and the primitive parsers:
//!
//! ```text
//! element        = space0 (single_element | parent_element) space0
//! single_element = element_start "/>"
//! parent_element = element_start ">" element* "</" identifier ">"
//! element_start  = "<" identifier (space1 attribute_pair)*
//! attribute_pair = identifier "=" quoted_string
//! ```
//!
//! The identifier in a closing tag must equal the opening tag's name.

use std::str::FromStr;

use tracing::instrument;

use super::super::{combinators::BoxedParser, core::*, prelude::*};
use super::primitives::{any_char, identifier, match_literal};
use crate::ast::{Attribute, Element};

/// A single space or newline. Tabs are not whitespace here.
pub fn whitespace_char<'a>() -> impl Parser<'a, char> {
    pred(any_char, |c: &char| *c == ' ' || *c == '\n')
}

pub fn space1<'a>() -> impl Parser<'a, Vec<char>> {
    one_or_more(whitespace_char())
}

pub fn space0<'a>() -> impl Parser<'a, Vec<char>> {
    zero_or_more(whitespace_char())
}

/// Allows optional whitespace on both sides of `parser`.
pub fn whitespace_wrap<'a, P, O>(parser: P) -> impl Parser<'a, O>
where
    P: Parser<'a, O>,
{
    delimited(as_unit(space0()), parser, as_unit(space0()))
}

/// A double-quoted string. The quotes are stripped, nothing is unescaped.
pub fn quoted_string<'a>() -> impl Parser<'a, String> {
    map(
        delimited(
            match_literal("\""),
            zero_or_more(pred(any_char, |c: &char| *c != '"')),
            match_literal("\""),
        ),
        |chars: Vec<char>| chars.into_iter().collect::<String>(),
    )
}

pub fn attribute_pair<'a>() -> impl Parser<'a, Attribute> {
    pair(identifier, right(match_literal("="), quoted_string()))
}

/// Zero or more attributes, each preceded by at least one whitespace character.
pub fn attributes<'a>() -> impl Parser<'a, Vec<Attribute>> {
    zero_or_more(right(space1(), attribute_pair()))
}

fn element_start<'a>() -> impl Parser<'a, (String, Vec<Attribute>)> {
    right(match_literal("<"), pair(identifier, attributes()))
}

/// `<name attr="value"/>`
pub fn single_element<'a>() -> impl Parser<'a, Element> {
    map(
        left(element_start(), match_literal("/>")),
        |(name, attributes): (String, Vec<Attribute>)| Element {
            name,
            attributes,
            children: vec![],
        },
    )
}

/// `<name attr="value">`, the childless first half of a parent element.
pub fn open_element<'a>() -> impl Parser<'a, Element> {
    map(
        left(element_start(), match_literal(">")),
        |(name, attributes): (String, Vec<Attribute>)| Element {
            name,
            attributes,
            children: vec![],
        },
    )
}

/// `</name>` where the name must be exactly `expected_name`.
pub fn close_element<'a>(expected_name: String) -> impl Parser<'a, String> {
    pred(
        right(match_literal("</"), left(identifier, match_literal(">"))),
        move |name: &String| name == &expected_name,
    )
}

/// An opening tag, its child elements, and the matching closing tag.
pub fn parent_element<'a>() -> impl Parser<'a, Element> {
    and_then(open_element(), |open: Element| {
        let expected_name = open.name.clone();
        // `map` needs an `Fn`, so each call finishes its own copy of the
        // childless open tag; the parsed children are moved in.
        map(
            left(zero_or_more(lazy(self::element)), close_element(expected_name)),
            move |children: Vec<Element>| open.clone().with_children(children),
        )
    })
}

/// Entry point of the grammar.
///
/// Parses one element, self-closing or with children, together with the
/// whitespace around it. Whatever follows is returned as remaining input.
pub fn element<'a>() -> BoxedParser<'a, Element> {
    boxed(whitespace_wrap(either(single_element(), parent_element())))
}

/// Parses a whole document: one root element and nothing after it.
#[instrument(level = "debug", skip(input))]
pub fn parse_document(input: &str) -> Result<Element, ParseError> {
    let (remaining, root) = element().parse(input)?;
    if remaining.is_empty() {
        tracing::debug!(root = %root.name, "document parsed");
        Ok(root)
    } else {
        Err(ParseError::TrailingInput {
            remaining: remaining.to_string(),
        })
    }
}

impl FromStr for Element {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_document(s)
    }
}
