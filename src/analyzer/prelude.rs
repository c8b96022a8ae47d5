use super::combinators::*;
use super::core::Parser;

pub fn zero<O: Clone>(zero_value: O) -> Zero<O> {
    Zero::new(zero_value)
}

pub fn fail<O>(message: &str) -> Fail<O> {
    Fail::new(message)
}

pub fn map<'a, P, F, A, B>(parser: P, f: F) -> Map<P, F, A, B>
where
    P: Parser<'a, A>,
    F: Fn(A) -> B,
{
    Map::new(parser, f)
}

pub fn as_unit<'a, P, O>(parser: P) -> AsUnit<P, O>
where
    P: Parser<'a, O>,
{
    AsUnit::new(parser)
}

pub fn pair<'a, P1, P2, O1, O2>(parser1: P1, parser2: P2) -> Pair<P1, P2, O1, O2>
where
    P1: Parser<'a, O1>,
    P2: Parser<'a, O2>,
{
    Pair::new(parser1, parser2)
}

/// Runs both parsers in sequence and keeps the first result.
pub fn left<'a, P1, P2, O1, O2>(parser1: P1, parser2: P2) -> impl Parser<'a, O1>
where
    P1: Parser<'a, O1>,
    P2: Parser<'a, O2>,
{
    map(pair(parser1, parser2), |(left, _right): (O1, O2)| left)
}

/// Runs both parsers in sequence and keeps the second result.
pub fn right<'a, P1, P2, O1, O2>(parser1: P1, parser2: P2) -> impl Parser<'a, O2>
where
    P1: Parser<'a, O1>,
    P2: Parser<'a, O2>,
{
    map(pair(parser1, parser2), |(_left, right): (O1, O2)| right)
}

pub fn delimited<'a, L, P, R, O>(left: L, parser: P, right: R) -> Delimited<L, P, R, O>
where
    L: Parser<'a, ()>,
    P: Parser<'a, O>,
    R: Parser<'a, ()>,
{
    Delimited::new(left, parser, right)
}

pub fn either<'a, P1, P2, O>(first: P1, second: P2) -> Either<P1, P2>
where
    P1: Parser<'a, O>,
    P2: Parser<'a, O>,
{
    Either::new(first, second)
}

pub fn choice<O>(parsers: Vec<BoxedParser<'_, O>>) -> Choice<'_, O> {
    Choice::new(parsers)
}

pub fn boxed<'a, P, O>(parser: P) -> BoxedParser<'a, O>
where
    P: Parser<'a, O> + 'a,
{
    BoxedParser::new(parser)
}

pub fn zero_or_more<'a, P, O>(parser: P) -> Many<P, O>
where
    P: Parser<'a, O>,
{
    Many::new(parser)
}

pub fn one_or_more<'a, P, O>(parser: P) -> Many1<P, O>
where
    P: Parser<'a, O>,
{
    Many1::new(parser)
}

pub fn optional<'a, P, O>(parser: P) -> Optional<P, O>
where
    P: Parser<'a, O>,
{
    Optional::new(parser)
}

pub fn pred<'a, P, F, O>(parser: P, predicate: F) -> Pred<P, F, O>
where
    P: Parser<'a, O>,
    F: Fn(&O) -> bool,
{
    Pred::new(parser, predicate)
}

pub fn and_then<'a, P, F, A, NextP, B>(parser: P, f: F) -> AndThen<P, F, A>
where
    P: Parser<'a, A>,
    F: Fn(A) -> NextP,
    NextP: Parser<'a, B>,
{
    AndThen::new(parser, f)
}

pub fn with_context<'a, P, O, C>(parser: P, c: C) -> WithContext<P, C>
where
    P: Parser<'a, O>,
    C: ToString,
{
    WithContext::new(parser, c)
}

pub fn lazy<'a, O, F, P>(f: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'a, O>,
{
    Lazy::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::core::ParseError;
    use crate::analyzer::parsers::primitives::{any_char, identifier, match_literal};

    #[test]
    fn test_right_combinator() {
        let tag_opener = right(match_literal("<"), identifier);
        assert_eq!(
            tag_opener.parse("<my-first-element/>"),
            Ok(("/>", "my-first-element".to_string()))
        );
        assert_eq!(
            tag_opener.parse("oops"),
            Err(ParseError::expected("<", "oops"))
        );
        assert_eq!(
            tag_opener.parse("!oops"),
            Err(ParseError::expected("<", "!oops"))
        );
    }

    #[test]
    fn test_left_combinator() {
        let name_then_close = left(identifier, match_literal(">"));
        assert_eq!(name_then_close.parse("div>x"), Ok(("x", "div".to_string())));
        assert_eq!(
            name_then_close.parse("div/>"),
            Err(ParseError::expected(">", "/>"))
        );
    }

    #[test]
    fn test_composition_through_builders() {
        // a run of 'a' characters followed by a run of 'b' characters
        let letter = |target: char| pred(any_char, move |c: &char| *c == target);
        let parser = pair(one_or_more(letter('a')), zero_or_more(letter('b')));
        assert_eq!(
            parser.parse("aabbbc"),
            Ok(("c", (vec!['a', 'a'], vec!['b', 'b', 'b'])))
        );
        assert_eq!(parser.parse("ac"), Ok(("c", (vec!['a'], vec![]))));
        assert_eq!(
            parser.parse("bc"),
            Err(ParseError::NoMatch {
                input: "bc".to_string()
            })
        );
    }

    #[test]
    fn test_and_then_name_matching() {
        let open = delimited(match_literal("<"), identifier, match_literal(">"));
        let parser = and_then(open, |name: String| {
            right(
                match_literal("</"),
                pred(left(identifier, match_literal(">")), move |closing: &String| {
                    *closing == name
                }),
            )
        });
        assert_eq!(parser.parse("<a></a>"), Ok(("", "a".to_string())));
        assert_eq!(
            parser.parse("<a></b>"),
            Err(ParseError::Predicate {
                input: "b>".to_string()
            })
        );
    }

    #[test]
    fn test_choice_and_optional() {
        let parser = pair(
            optional(match_literal("-")),
            choice(vec![
                boxed(map(match_literal("yes"), |_: ()| true)),
                boxed(map(match_literal("no"), |_: ()| false)),
            ]),
        );
        assert_eq!(parser.parse("-yes"), Ok(("", (Some(()), true))));
        assert_eq!(parser.parse("no"), Ok(("", (None, false))));
        assert_eq!(parser.parse("maybe"), Err(ParseError::expected("no", "maybe")));
    }

    #[test]
    fn test_zero_fail_and_context() {
        let parser = either(fail::<&str>("never"), zero("default"));
        assert_eq!(parser.parse("abc"), Ok(("abc", "default")));

        let parser = with_context(as_unit(one_or_more(match_literal(" "))), "whitespace");
        assert_eq!(parser.parse("  x"), Ok(("x", ())));
        assert_eq!(
            parser.parse("x").map_err(|e| e.root_cause().clone()),
            Err(ParseError::NoMatch {
                input: "x".to_string()
            })
        );
    }

    #[test]
    fn test_lazy_defers_construction() {
        fn nested<'a>() -> BoxedParser<'a, usize> {
            boxed(either(
                map(
                    delimited(match_literal("("), lazy(nested), match_literal(")")),
                    |depth: usize| depth + 1,
                ),
                zero(0),
            ))
        }
        assert_eq!(nested().parse("((()))!"), Ok(("!", 3)));
        assert_eq!(nested().parse("(()"), Ok(("(()", 0)));
    }
}
