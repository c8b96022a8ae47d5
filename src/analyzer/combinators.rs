//! # Parser Combinators
//!
//! This module implements the parser combinators that form the building blocks
//! of the parsing system. Each combinator is a struct holding its inner
//! parser(s) and implementing [`Parser`] itself, so combinators nest without
//! limit. The functions in [`super::prelude`] are the usual way to build them.
//!
//! ## Combinator Types
//!
//! * **Basic Combinators**: `Zero`, `Fail`
//! * **Sequential Combinators**: `Pair`, `Delimited`, `AndThen`
//! * **Alternative Combinators**: `Either`, `Choice`, `Optional`
//! * **Repetition Combinators**: `Many`, `Many1`
//! * **Transformation Combinators**: `Map`, `AsUnit`, `Pred`
//! * **Structural Combinators**: `WithContext`, `Lazy`, `BoxedParser`

use super::core::ParseError;
use super::core::ParseResult;
use super::core::Parser;
use std::marker::PhantomData;

// Zero: 常に zero_value を返すパーサー
#[derive(Clone)]
pub struct Zero<O> {
    zero_value: O,
}

impl<O> Zero<O> {
    pub fn new(zero_value: O) -> Self {
        Self { zero_value }
    }
}

impl<'a, O: Clone> Parser<'a, O> for Zero<O> {
    fn parse(&self, input: &'a str) -> ParseResult<'a, O> {
        Ok((input, self.zero_value.clone()))
    }
}

#[derive(Clone)]
pub struct Fail<O> {
    message: String,
    _phantom: PhantomData<O>,
}

impl<O> Fail<O> {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl<'a, O> Parser<'a, O> for Fail<O> {
    fn parse(&self, _input: &'a str) -> ParseResult<'a, O> {
        Err(ParseError::Fail(self.message.clone()))
    }
}

/// Map: Transforms the output of a parser using a function
///
/// The remaining input is the inner parser's; a failure is passed on unchanged.
#[derive(Clone)]
pub struct Map<P, F, A, B> {
    /// The parser whose output will be transformed
    parser: P,
    /// The transformation function
    f: F,
    _phantom: PhantomData<(A, B)>,
}

impl<P, F, A, B> Map<P, F, A, B> {
    /// Creates a new Map parser
    ///
    /// # Arguments
    ///
    /// * `parser` - The parser whose output will be transformed
    /// * `f` - The function to apply to the parser's output
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<'a, P, F, A, B> Parser<'a, B> for Map<P, F, A, B>
where
    P: Parser<'a, A>,
    F: Fn(A) -> B,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, B> {
        self.parser
            .parse(input)
            .map(|(rest, value)| (rest, (self.f)(value)))
    }
}

#[derive(Clone)]
pub struct AsUnit<P, O> {
    parser: P,
    _phantom: PhantomData<O>,
}

impl<P, O> AsUnit<P, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<'a, P, O> Parser<'a, ()> for AsUnit<P, O>
where
    P: Parser<'a, O>,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, ()> {
        self.parser.parse(input).map(|(rest, _)| (rest, ()))
    }
}

/// Pair: Runs two parsers in sequence and returns both results
///
/// The second parser starts where the first one stopped. There is no
/// backtracking into the first parser when the second one fails.
#[derive(Clone)]
pub struct Pair<P1, P2, O1, O2> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(O1, O2)>,
}

impl<P1, P2, O1, O2> Pair<P1, P2, O1, O2> {
    /// Creates a new Pair parser
    ///
    /// # Arguments
    ///
    /// * `parser1` - The first parser to apply
    /// * `parser2` - The second parser, applied to the first one's remaining input
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<'a, P1, P2, O1, O2> Parser<'a, (O1, O2)> for Pair<P1, P2, O1, O2>
where
    P1: Parser<'a, O1>,
    P2: Parser<'a, O2>,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, (O1, O2)> {
        let (rest, result1) = self.parser1.parse(input)?;
        let (rest, result2) = self.parser2.parse(rest)?;
        Ok((rest, (result1, result2)))
    }
}

/// Delimited: Parses content between left and right delimiters
///
/// Applies the left delimiter parser, then the content parser, then the right
/// delimiter parser, returning only the content parser's result.
#[derive(Clone)]
pub struct Delimited<L, P, R, O> {
    /// Parser for the left delimiter
    left: L,
    /// Parser for the content between delimiters
    parser: P,
    /// Parser for the right delimiter
    right: R,
    _phantom: PhantomData<O>,
}

impl<L, P, R, O> Delimited<L, P, R, O> {
    /// Creates a new Delimited parser
    pub fn new(left: L, parser: P, right: R) -> Self {
        Self {
            left,
            parser,
            right,
            _phantom: PhantomData,
        }
    }
}

impl<'a, L, P, R, O> Parser<'a, O> for Delimited<L, P, R, O>
where
    L: Parser<'a, ()>,
    P: Parser<'a, O>,
    R: Parser<'a, ()>,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, O> {
        let (rest, _) = self.left.parse(input)?;
        let (rest, value) = self.parser.parse(rest)?;
        let (rest, _) = self.right.parse(rest)?;
        Ok((rest, value))
    }
}

/// Either: Tries the first parser, and on failure the second from the same input
///
/// The first parser's error is discarded once the second parser runs. When
/// both fail, the second parser's error is returned.
#[derive(Clone)]
pub struct Either<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Either<P1, P2> {
    /// Creates a new Either parser
    ///
    /// # Arguments
    ///
    /// * `first` - The parser to try first
    /// * `second` - The parser to try if the first one fails
    pub fn new(first: P1, second: P2) -> Self {
        Self { first, second }
    }
}

impl<'a, P1, P2, O> Parser<'a, O> for Either<P1, P2>
where
    P1: Parser<'a, O>,
    P2: Parser<'a, O>,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, O> {
        match self.first.parse(input) {
            Ok(result) => Ok(result),
            Err(e) => {
                tracing::trace!(
                    target: "parser::either",
                    error = %e,
                    "first alternative failed, trying second"
                );
                self.second.parse(input)
            }
        }
    }
}

/// BoxedParser: A type-erased parser
///
/// Used where the concrete parser type cannot be named or would be
/// recursive, e.g. the alternatives of a [`Choice`] or a grammar rule that
/// refers to itself.
pub struct BoxedParser<'a, O> {
    parser: Box<dyn Parser<'a, O> + 'a>,
}

impl<'a, O> BoxedParser<'a, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'a, O> + 'a,
    {
        Self {
            parser: Box::new(parser),
        }
    }
}

impl<'a, O> Parser<'a, O> for BoxedParser<'a, O> {
    fn parse(&self, input: &'a str) -> ParseResult<'a, O> {
        self.parser.parse(input)
    }
}

/// Choice: Tries multiple parsers and succeeds with the first successful one
///
/// Every alternative starts from the same input. If all of them fail, the
/// last alternative's error is returned; with no alternatives at all the
/// result is [`ParseError::NoAlternative`].
pub struct Choice<'a, O> {
    /// The list of parsers to try
    parsers: Vec<BoxedParser<'a, O>>,
}

impl<'a, O> Choice<'a, O> {
    /// Creates a new Choice parser
    ///
    /// # Arguments
    ///
    /// * `parsers` - The alternatives, tried in order
    pub fn new(parsers: Vec<BoxedParser<'a, O>>) -> Self {
        Self { parsers }
    }
}

impl<'a, O> Parser<'a, O> for Choice<'a, O> {
    fn parse(&self, input: &'a str) -> ParseResult<'a, O> {
        let mut last_error = ParseError::NoAlternative;
        for parser in &self.parsers {
            match parser.parse(input) {
                Ok(result) => return Ok(result),
                Err(e) => {
                    tracing::trace!(target: "parser::choice", error = %e, "alternative failed");
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}

/// Repeats `parser` from `input` until it fails, appending to `results`.
///
/// A success that consumes nothing would repeat forever, so it ends the
/// repetition as well and its value is dropped.
fn collect_while_ok<'a, P, O>(
    parser: &P,
    mut input: &'a str,
    mut results: Vec<O>,
) -> (&'a str, Vec<O>)
where
    P: Parser<'a, O>,
{
    loop {
        match parser.parse(input) {
            Ok((rest, _)) if rest.len() == input.len() => {
                tracing::warn!(
                    target: "parser::many",
                    items_collected = results.len(),
                    "inner parser succeeded without consuming input, stopping repetition"
                );
                break;
            }
            Ok((rest, value)) => {
                results.push(value);
                input = rest;
            }
            Err(e) => {
                tracing::trace!(
                    target: "parser::many",
                    error = %e,
                    items_collected = results.len(),
                    "repetition stopped"
                );
                break;
            }
        }
    }
    (input, results)
}

/// Many: Applies a parser zero or more times
///
/// Repeatedly applies the inner parser until it fails, collecting all
/// successful results into a vector. It always succeeds, even if the inner
/// parser never succeeds (returning an empty vector and the original input).
#[derive(Clone)]
pub struct Many<P, O> {
    /// The parser to apply repeatedly
    parser: P,
    _phantom: PhantomData<O>,
}

impl<P, O> Many<P, O> {
    /// Creates a new Many parser
    ///
    /// # Arguments
    ///
    /// * `parser` - The parser to apply repeatedly
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<'a, P, O> Parser<'a, Vec<O>> for Many<P, O>
where
    P: Parser<'a, O>,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, Vec<O>> {
        Ok(collect_while_ok(&self.parser, input, Vec::new()))
    }
}

/// Many1: Applies a parser one or more times
///
/// Similar to Many, but fails with [`ParseError::NoMatch`] naming the
/// original input if the inner parser fails on the first attempt. A first
/// success that consumes nothing is dropped like any later one, giving an
/// empty vector, so both repetitions agree whenever the first attempt succeeds.
#[derive(Clone)]
pub struct Many1<P, O> {
    /// The parser to apply repeatedly
    parser: P,
    _phantom: PhantomData<O>,
}

impl<P, O> Many1<P, O> {
    /// Creates a new Many1 parser
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<'a, P, O> Parser<'a, Vec<O>> for Many1<P, O>
where
    P: Parser<'a, O>,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, Vec<O>> {
        let (rest, first) = self.parser.parse(input).map_err(|e| {
            tracing::trace!(target: "parser::many1", error = %e, "first application failed");
            ParseError::NoMatch {
                input: input.to_string(),
            }
        })?;
        if rest.len() == input.len() {
            tracing::warn!(
                target: "parser::many1",
                "inner parser succeeded without consuming input, stopping repetition"
            );
            return Ok((input, Vec::new()));
        }
        Ok(collect_while_ok(&self.parser, rest, vec![first]))
    }
}

#[derive(Clone)]
pub struct Optional<P, O> {
    parser: P,
    _phantom: PhantomData<O>,
}

impl<P, O> Optional<P, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<'a, P, O> Parser<'a, Option<O>> for Optional<P, O>
where
    P: Parser<'a, O>,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, Option<O>> {
        match self.parser.parse(input) {
            Ok((rest, value)) => Ok((rest, Some(value))),
            Err(e) => {
                tracing::trace!(
                    target: "parser::optional",
                    error = %e,
                    "Optional parser suppressed an error"
                );
                Ok((input, None))
            }
        }
    }
}

/// Pred: Succeeds only if the parsed value satisfies a predicate
///
/// A rejected value fails with [`ParseError::Predicate`] holding the input as
/// it was before the inner parser ran. Failures of the inner parser are
/// passed on unchanged.
#[derive(Clone)]
pub struct Pred<P, F, O> {
    parser: P,
    predicate: F,
    _phantom: PhantomData<O>,
}

impl<P, F, O> Pred<P, F, O> {
    /// Creates a new Pred parser
    ///
    /// # Arguments
    ///
    /// * `parser` - The parser producing the value to test
    /// * `predicate` - Returns `true` for values that are accepted
    pub fn new(parser: P, predicate: F) -> Self {
        Self {
            parser,
            predicate,
            _phantom: PhantomData,
        }
    }
}

impl<'a, P, F, O> Parser<'a, O> for Pred<P, F, O>
where
    P: Parser<'a, O>,
    F: Fn(&O) -> bool,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, O> {
        let (rest, value) = self.parser.parse(input)?;
        if (self.predicate)(&value) {
            Ok((rest, value))
        } else {
            Err(ParseError::Predicate {
                input: input.to_string(),
            })
        }
    }
}

/// AndThen: Chooses the next parser from the result of the previous one
///
/// Runs the inner parser, hands its output to `f` to obtain a second parser
/// and runs that on the remaining input.
#[derive(Clone)]
pub struct AndThen<P, F, A> {
    parser: P,
    f: F,
    _phantom: PhantomData<A>,
}

impl<P, F, A> AndThen<P, F, A> {
    /// Creates a new AndThen parser
    ///
    /// # Arguments
    ///
    /// * `parser` - The parser to apply first
    /// * `f` - Builds the next parser from the first parser's output
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<'a, P, F, A, NextP, B> Parser<'a, B> for AndThen<P, F, A>
where
    P: Parser<'a, A>,
    F: Fn(A) -> NextP,
    NextP: Parser<'a, B>,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, B> {
        let (rest, value) = self.parser.parse(input)?;
        (self.f)(value).parse(rest)
    }
}

#[derive(Clone)]
pub struct WithContext<P, C> {
    parser: P,
    context: C,
}

impl<P, C> WithContext<P, C> {
    pub fn new(parser: P, context: C) -> Self {
        Self { parser, context }
    }
}

impl<'a, O, P, C: ToString> Parser<'a, O> for WithContext<P, C>
where
    P: Parser<'a, O>,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, O> {
        self.parser
            .parse(input)
            .map_err(|e| e.with_context(&self.context.to_string()))
    }
}

#[derive(Clone)]
pub struct Lazy<F> {
    f: F,
}

impl<F> Lazy<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<'a, O, F, P> Parser<'a, O> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'a, O>,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, O> {
        (self.f)().parse(input)
    }
}
