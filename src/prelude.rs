//! Constructor functions for every matcher and combinator, plus the core
//! types needed to write grammars. `use ravel::prelude::*;` is the usual way
//! in.

pub use crate::combinators::*;
pub use crate::core::{boxed, BoxedParser, ParseResult, Parser, ParserExt};
pub use crate::error::{GrammarError, MatchError, ParseError, UnparsedInputError};
pub use crate::literals::{Chars, Exact, Regex};
pub use crate::node::Node;
pub use crate::rule::{Rule, RuleRef};
pub use crate::state::{ascii_whitespace, no_whitespace, unicode_whitespace, State};

pub fn exact(literal: impl Into<String>) -> Exact {
    Exact::new(literal)
}

pub fn chars(matcher: impl Into<String>) -> Chars {
    Chars::new(matcher)
}

pub fn not_chars(matcher: impl Into<String>) -> Chars {
    Chars::not(matcher)
}

pub fn regex(pattern: &str) -> Result<Regex, GrammarError> {
    Regex::new(pattern)
}

pub fn named_regex(name: impl Into<String>, pattern: &str) -> Result<Regex, GrammarError> {
    Regex::named(name, pattern)
}

pub fn seq<V>(parsers: Vec<BoxedParser<V>>) -> Seq<V> {
    Seq::new(parsers)
}

pub fn any<V>(alternatives: Vec<BoxedParser<V>>) -> Any<V> {
    Any::new(alternatives)
}

pub fn any_with_name<V>(
    name: impl Into<String>,
    alternatives: Vec<BoxedParser<V>>,
) -> AnyWithName<V> {
    AnyWithName::new(name, alternatives)
}

pub fn longest<V>(name: impl Into<String>, alternatives: Vec<BoxedParser<V>>) -> Longest<V> {
    Longest::new(name, alternatives)
}

/// Zero or more.
pub fn many<P, V>(operand: P) -> Many<P, V>
where
    P: Parser<V>,
{
    Many::new(operand, 0)
}

/// Zero or more, separated by `separator`.
pub fn many_sep<P, S, V>(operand: P, separator: S) -> Many<P, V>
where
    P: Parser<V>,
    S: Parser<V> + 'static,
{
    Many::new(operand, 0).with_separator(boxed(separator))
}

/// One or more.
pub fn some<P, V>(operand: P) -> Many<P, V>
where
    P: Parser<V>,
{
    Many::new(operand, 1)
}

/// One or more, separated by `separator`.
pub fn some_sep<P, S, V>(operand: P, separator: S) -> Many<P, V>
where
    P: Parser<V>,
    S: Parser<V> + 'static,
{
    Many::new(operand, 1).with_separator(boxed(separator))
}

pub fn maybe<P>(parser: P) -> Maybe<P> {
    Maybe::new(parser)
}

pub fn cut() -> Cut {
    Cut
}

pub fn bind<P, V>(parser: P, value: V) -> Bind<P, V>
where
    P: Parser<V>,
    V: Clone,
{
    Bind::new(parser, value)
}

pub fn map<P, F, V>(parser: P, f: F) -> Map<P, F>
where
    P: Parser<V>,
    F: Fn(&mut Node<V>),
{
    Map::new(parser, f)
}

pub fn merge<P>(parser: P) -> Merge<P> {
    Merge::new(parser)
}

pub fn no_auto_ws<P>(parser: P) -> NoAutoWs<P> {
    NoAutoWs::new(parser)
}

pub fn signal_seq<V>(noise: BoxedParser<V>, signals: Vec<BoxedParser<V>>) -> SignalSeq<V> {
    SignalSeq::new(noise, signals)
}
