//! # Core Parser Definitions
//!
//! This module defines the parser interface every matcher and combinator
//! implements, and the adapter that lets plain string literals stand in for
//! exact-match parsers wherever a parser is expected.

use std::rc::Rc;

use crate::combinators::{Bind, Map, Merge};
use crate::error::MatchError;
use crate::literals::Exact;
use crate::node::Node;
use crate::state::State;

/// Parser trait defines the core parsing interface.
///
/// A parser reads from the shared [`State`] starting at its current offset.
///
/// * On success it returns the populated [`Node`], with the cursor advanced
///   past the consumed input.
/// * On failure it returns a [`MatchError`] describing what was expected.
///   Composite parsers restore the cursor to their entry offset; leaf
///   matchers leave it where the match was attempted (after whitespace).
///
/// # Type Parameters
///
/// * `V` - The semantic value type attached to result nodes
pub trait Parser<V> {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V>;
}

/// Result type for parsing operations.
pub type ParseResult<V> = Result<Node<V>, MatchError>;

pub type BoxedParser<V> = Box<dyn Parser<V>>;

/// Type-erases a parser so it can sit next to differently typed siblings.
pub fn boxed<V, P>(parser: P) -> BoxedParser<V>
where
    P: Parser<V> + 'static,
{
    Box::new(parser)
}

/// Method-style shorthands for the transforming combinators, available on
/// every parser.
///
/// ```
/// use ravel::prelude::*;
///
/// let word = chars("a-z").map(|node: &mut Node<String>| {
///     node.value = Some(node.token.clone());
/// });
/// assert_eq!(ravel::run(&word, "hello").unwrap().value.as_deref(), Some("hello"));
/// ```
pub trait ParserExt<V>: Parser<V> + Sized {
    /// Wraps `self` in a [`Map`].
    fn map<F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(&mut Node<V>),
    {
        Map::new(self, f)
    }

    /// Wraps `self` in a [`Bind`].
    fn bind(self, value: V) -> Bind<Self, V>
    where
        V: Clone,
    {
        Bind::new(self, value)
    }

    /// Wraps `self` in a [`Merge`].
    fn merge(self) -> Merge<Self> {
        Merge::new(self)
    }

    fn boxed(self) -> BoxedParser<V>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<V, P: Parser<V>> ParserExt<V> for P {}

impl<V, P: Parser<V> + ?Sized> Parser<V> for Box<P> {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        (**self).parse(state)
    }
}

impl<V, P: Parser<V> + ?Sized> Parser<V> for Rc<P> {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        (**self).parse(state)
    }
}

// A bare literal is an exact match.
impl<V> Parser<V> for &str {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        Exact::match_literal(self, state)
    }
}

impl<V> Parser<V> for String {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        Exact::match_literal(self, state)
    }
}
