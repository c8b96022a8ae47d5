use minixml::analyzer::{
    parsers::*,
    prelude::*,
    ParseError, Parser,
};

#[test]
fn test_unmet_literal() {
    let error = match_literal("</").parse("<a>").unwrap_err();
    assert_eq!(
        error,
        ParseError::Expected {
            expected: "</".to_string(),
            found: "<a>".to_string(),
        }
    );
    assert!(error.to_string().contains("\"</\""));
}

#[test]
fn test_predicate_rejection() {
    let error = close_element("a".to_string()).parse("</b>").unwrap_err();
    assert_eq!(
        error,
        ParseError::Predicate {
            input: "</b>".to_string()
        }
    );
}

#[test]
fn test_empty_input_exhaustion() {
    assert_eq!(any_char(""), Err(ParseError::UnexpectedEOF));
    assert_eq!(
        pred(any_char, |c: &char| c.is_alphabetic()).parse(""),
        Err(ParseError::UnexpectedEOF)
    );
}

#[test]
fn test_one_or_more_zero_matches() {
    assert_eq!(
        one_or_more(match_literal("x")).parse("yyy"),
        Err(ParseError::NoMatch {
            input: "yyy".to_string()
        })
    );
    // zero_or_more never reports it
    assert_eq!(zero_or_more(match_literal("x")).parse("yyy"), Ok(("yyy", vec![])));
}

#[test]
fn test_sequence_forwards_first_failure() {
    let parser = pair(match_literal("<"), pair(identifier, match_literal(">")));
    assert_eq!(
        parser.parse("<div/>"),
        Err(ParseError::expected(">", "/>"))
    );
    let parser = map(parser, |(_, (name, _)): ((), (String, ()))| name);
    assert_eq!(
        parser.parse("<div/>"),
        Err(ParseError::expected(">", "/>"))
    );
}

#[test]
fn test_either_reports_only_second_error() {
    let parser = either(match_literal("a"), match_literal("b"));
    assert_eq!(parser.parse("c"), Err(ParseError::expected("b", "c")));
}

#[test]
fn test_trailing_input() {
    assert_eq!(
        parse_document("<a/>x"),
        Err(ParseError::TrailingInput {
            remaining: "x".to_string()
        })
    );
}
