mod common;

use std::error::Error;

use pretty_assertions::assert_eq;
use ravel::prelude::*;
use ravel::{run, seq};

fn greeting() -> Seq<()> {
    seq!["hello", "world"]
}

#[test]
fn test_generic_error_is_not_unparsed_input() {
    let err: Box<dyn Error> = "something went wrong".into();
    assert!(err.downcast_ref::<UnparsedInputError>().is_none());
    assert!(err.downcast_ref::<ParseError>().is_none());
}

#[test]
fn test_unparsed_input_error_is_classified() {
    let err: Box<dyn Error> = Box::new(UnparsedInputError::new("!"));
    let unparsed = err.downcast_ref::<UnparsedInputError>().unwrap();
    assert_eq!(unparsed.leftover, "!");
    assert_eq!(err.to_string(), "left unparsed: !");
}

#[test]
fn test_run_distinguishes_leftovers_from_mismatches() {
    let leftover = run(&greeting(), "hello world!").unwrap_err();
    assert!(leftover.is_unparsed_input());
    assert_eq!(leftover.position(), None);
    assert!(matches!(
        &leftover,
        ParseError::UnparsedInput(err) if err.leftover == "!"
    ));

    let mismatch = run(&greeting(), "hello there").unwrap_err();
    assert!(!mismatch.is_unparsed_input());
    assert_eq!(mismatch.position(), Some(6));
    assert_eq!(mismatch, ParseError::Match(MatchError::new(6, "world")));
}

#[test]
fn test_mismatch_is_not_classified_as_unparsed() {
    // same wording as a leftover report, still a grammar mismatch
    let parser: Seq<()> = seq!["a", "left unparsed: b"];
    let err = run(&parser, "a c").unwrap_err();
    assert_eq!(err.to_string(), "offset 2: expected left unparsed: b");
    assert!(!err.is_unparsed_input());

    let boxed: Box<dyn Error> = Box::new(err);
    assert!(boxed.downcast_ref::<UnparsedInputError>().is_none());
}

#[test]
fn test_grammar_errors() {
    let err = regex("(unclosed").unwrap_err();
    assert!(matches!(
        err,
        GrammarError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"
    ));
    assert!(err.source().is_some());

    let rule: Rule<()> = Rule::declare();
    rule.define("x").unwrap();
    assert!(matches!(rule.define("y"), Err(GrammarError::RuleRedefined)));
}

#[test]
fn test_undefined_rule_fails_without_panicking() {
    let rule: Rule<()> = Rule::declare();
    let err = run(&rule, "x").unwrap_err();
    assert_eq!(err.to_string(), "offset 0: expected !UNDEFINED");
}
