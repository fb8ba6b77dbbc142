//! # Parser Combinators
//!
//! This module implements the combinators that compose leaf matchers into
//! grammars. All of them share one [`State`] and report failure by value.
//!
//! ## Combinator Types
//!
//! * **Sequential**: [`Seq`]
//! * **Alternative**: [`Any`], [`AnyWithName`], [`Longest`]
//! * **Repetition**: [`Many`] (also `Some` via a minimum count), [`SignalSeq`]
//! * **Optional / Commit**: [`Maybe`], [`Cut`]
//! * **Transformation**: [`Bind`], [`Map`], [`Merge`]
//! * **Whitespace control**: [`NoAutoWs`]
//!
//! ## Backtracking and Cuts
//!
//! A failed combinator puts the cursor back at its entry offset. Whether the
//! failure may be recovered from depends on the cut barrier: once a [`Cut`]
//! has raised it past the offset where an alternation, option or repetition
//! started, that combinator forwards the failure instead of trying something
//! else.

use crate::core::{BoxedParser, ParseResult, Parser};
use crate::error::{MatchError, END_OF_INPUT, PAST_CUT};
use crate::node::Node;
use crate::state::{no_whitespace, State};

/// Runs `attempt` and reports the invocation to the trace sink.
fn traced<V>(
    name: &str,
    state: &mut State<'_>,
    attempt: impl FnOnce(&mut State<'_>) -> ParseResult<V>,
) -> ParseResult<V> {
    let entry = state.pos();
    let result = attempt(state);
    state.trace(name, entry, &result);
    result
}

/// Seq: Applies parsers in order, one child per parser.
///
/// The token is the verbatim input slice covered by the whole sequence,
/// interior whitespace included.
pub struct Seq<V> {
    /// The parsers to apply in order
    parsers: Vec<BoxedParser<V>>,
}

impl<V> Seq<V> {
    /// Creates a new Seq parser
    ///
    /// # Arguments
    ///
    /// * `parsers` - Boxed parsers to apply one after another
    pub fn new(parsers: Vec<BoxedParser<V>>) -> Self {
        Self { parsers }
    }
}

impl<V> Parser<V> for Seq<V> {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        traced("Seq", state, |state| {
            let start = state.pos();
            let mut children = Vec::with_capacity(self.parsers.len());
            for parser in &self.parsers {
                match parser.parse(state) {
                    Ok(node) => children.push(node),
                    Err(err) => {
                        state.restore(start);
                        return Err(err);
                    }
                }
            }
            Ok(Node::branch(state.slice(start, state.pos()), children))
        })
    }
}

/// Common prologue of the alternation family: skip whitespace, refuse to
/// start at end of input or below a raised cut. Returns the entry offset
/// (before whitespace) and the offset alternatives are tried at.
fn enter_alternation(state: &mut State<'_>) -> Result<(usize, usize), MatchError> {
    let entry = state.pos();
    state.skip_whitespace();
    if state.at_end() {
        let err = state.fail(END_OF_INPUT);
        state.restore(entry);
        return Err(err);
    }
    let start = state.pos();
    if state.committed_past(start) {
        let err = match state.error() {
            Some(err) => err.clone(),
            None => state.fail_at(start, PAST_CUT),
        };
        state.restore(entry);
        return Err(err);
    }
    state.recover();
    Ok((entry, start))
}

/// Forwards a failure that a cut made unrecoverable.
fn committed<V>(state: &mut State<'_>, entry: usize, err: MatchError) -> ParseResult<V> {
    state.restore(entry);
    state.set_error(&err);
    Err(err)
}

/// Any: First successful alternative wins.
///
/// When every alternative fails, the error reaching furthest into the input
/// is reported; on equal positions the later alternative's error wins.
pub struct Any<V> {
    /// The alternatives, tried in order
    alternatives: Vec<BoxedParser<V>>,
}

impl<V> Any<V> {
    /// Creates a new Any parser
    ///
    /// # Arguments
    ///
    /// * `alternatives` - Boxed parsers to try in order; must not be empty
    pub fn new(alternatives: Vec<BoxedParser<V>>) -> Self {
        debug_assert!(!alternatives.is_empty(), "Any needs at least one alternative");
        Self { alternatives }
    }
}

impl<V> Parser<V> for Any<V> {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        traced("Any", state, |state| {
            let (entry, start) = enter_alternation(state)?;
            let mut furthest: Option<MatchError> = None;
            for alternative in &self.alternatives {
                match alternative.parse(state) {
                    Ok(node) => return Ok(node),
                    Err(err) => {
                        state.restore(start);
                        if state.committed_past(start) {
                            return committed(state, entry, err);
                        }
                        if furthest.as_ref().map_or(true, |best| err.outranks(best)) {
                            furthest = Some(err);
                        }
                        state.recover();
                    }
                }
            }
            state.restore(entry);
            let err = furthest.unwrap_or_else(|| MatchError::new(start, END_OF_INPUT));
            state.set_error(&err);
            Err(err)
        })
    }
}

/// AnyWithName: First successful alternative wins; a total failure is
/// reported under the group name instead of any sub-error.
pub struct AnyWithName<V> {
    /// Reported as the expectation when no alternative matches
    name: String,
    /// The alternatives, tried in order
    alternatives: Vec<BoxedParser<V>>,
}

impl<V> AnyWithName<V> {
    /// Creates a new AnyWithName parser
    ///
    /// # Arguments
    ///
    /// * `name` - What the group is reported as on failure
    /// * `alternatives` - Boxed parsers to try in order; must not be empty
    pub fn new(name: impl Into<String>, alternatives: Vec<BoxedParser<V>>) -> Self {
        debug_assert!(!alternatives.is_empty(), "AnyWithName needs at least one alternative");
        Self {
            name: name.into(),
            alternatives,
        }
    }
}

impl<V> Parser<V> for AnyWithName<V> {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        traced(&self.name, state, |state| {
            let (entry, start) = enter_alternation(state)?;
            for alternative in &self.alternatives {
                match alternative.parse(state) {
                    Ok(node) => return Ok(node),
                    Err(err) => {
                        state.restore(start);
                        if state.committed_past(start) {
                            return committed(state, entry, err);
                        }
                        state.recover();
                    }
                }
            }
            state.restore(entry);
            Err(state.fail_at(start, self.name.as_str()))
        })
    }
}

/// Longest: Tries every alternative and keeps the one that advanced the
/// cursor furthest. Ties keep the earliest alternative.
pub struct Longest<V> {
    /// Reported as the expectation when nothing advances the cursor
    name: String,
    alternatives: Vec<BoxedParser<V>>,
}

impl<V> Longest<V> {
    /// Creates a new Longest parser
    ///
    /// # Arguments
    ///
    /// * `name` - What the group is reported as on failure
    /// * `alternatives` - Boxed parsers, all of which are tried
    pub fn new(name: impl Into<String>, alternatives: Vec<BoxedParser<V>>) -> Self {
        debug_assert!(!alternatives.is_empty(), "Longest needs at least one alternative");
        Self {
            name: name.into(),
            alternatives,
        }
    }
}

impl<V> Parser<V> for Longest<V> {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        traced(&self.name, state, |state| {
            let (entry, start) = enter_alternation(state)?;
            let mut best: Option<(usize, Node<V>)> = None;
            for alternative in &self.alternatives {
                match alternative.parse(state) {
                    Ok(node) => {
                        let end = state.pos();
                        let best_end = best.as_ref().map_or(start, |(end, _)| *end);
                        if end > best_end {
                            best = Some((end, node));
                        }
                        state.restore(start);
                    }
                    Err(err) => {
                        state.restore(start);
                        if state.committed_past(start) {
                            if best.is_none() {
                                return committed(state, entry, err);
                            }
                            break;
                        }
                        state.recover();
                    }
                }
            }
            match best {
                Some((end, node)) => {
                    state.restore(end);
                    state.recover();
                    Ok(node)
                }
                None => {
                    state.restore(entry);
                    Err(state.fail_at(start, self.name.as_str()))
                }
            }
        })
    }
}

/// Many: Repeats an operand, optionally separated, at least `min` times.
///
/// An operand failure ends the repetition successfully once `min` matches
/// are in, unless a cut blocks backtracking there. A separator failure always
/// ends it successfully, so a trailing separator is tolerated.
pub struct Many<P, V> {
    /// The repeated parser
    operand: P,
    /// Matched between operands; its result is discarded
    separator: Option<BoxedParser<V>>,
    /// Fewest operand matches that count as success (0 for Many, 1 for Some)
    min: usize,
}

impl<P, V> Many<P, V> {
    /// Creates a new Many parser without a separator
    ///
    /// # Arguments
    ///
    /// * `operand` - The parser to repeat
    /// * `min` - The minimum number of matches
    pub fn new(operand: P, min: usize) -> Self {
        Self {
            operand,
            separator: None,
            min,
        }
    }

    /// Requires `separator` between consecutive operands.
    pub fn with_separator(mut self, separator: BoxedParser<V>) -> Self {
        self.separator = Some(separator);
        self
    }

    fn name(&self) -> &'static str {
        if self.min == 0 {
            "Many"
        } else {
            "Some"
        }
    }
}

impl<P, V> Parser<V> for Many<P, V>
where
    P: Parser<V>,
{
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        traced(self.name(), state, |state| {
            let start = state.pos();
            let mut children = Vec::new();
            loop {
                let attempt = state.pos();
                match self.operand.parse(state) {
                    Ok(node) => children.push(node),
                    Err(err) => {
                        if children.len() < self.min || state.committed_past(attempt) {
                            return committed(state, start, err);
                        }
                        state.recover();
                        state.restore(attempt);
                        break;
                    }
                }
                if let Some(separator) = &self.separator {
                    let after_operand = state.pos();
                    if separator.parse(state).is_err() {
                        state.recover();
                        state.restore(after_operand);
                        break;
                    }
                }
                if state.pos() == attempt {
                    // a zero-width match would repeat forever
                    break;
                }
            }
            Ok(Node::branch(state.slice(start, state.pos()), children))
        })
    }
}

/// Maybe: Zero or one match. A miss yields an empty node, unless a cut
/// inside the operand made the miss a hard error.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<V, P: Parser<V>> Parser<V> for Maybe<P> {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        traced("Maybe", state, |state| {
            let start = state.pos();
            match self.parser.parse(state) {
                Ok(node) => Ok(node),
                Err(err) if state.committed_past(start) => committed(state, start, err),
                Err(_) => {
                    state.recover();
                    state.restore(start);
                    Ok(Node::default())
                }
            }
        })
    }
}

/// Cut: Consumes nothing and commits to everything parsed so far.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cut;

impl<V> Parser<V> for Cut {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        state.raise_cut(state.pos());
        Ok(Node::default())
    }
}

/// Bind: Attaches a constant value on success.
pub struct Bind<P, V> {
    parser: P,
    /// Cloned into every successful node
    value: V,
}

impl<P, V> Bind<P, V> {
    pub fn new(parser: P, value: V) -> Self {
        Self { parser, value }
    }
}

impl<P, V> Parser<V> for Bind<P, V>
where
    P: Parser<V>,
    V: Clone,
{
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        let mut node = self.parser.parse(state)?;
        node.value = Some(self.value.clone());
        Ok(node)
    }
}

/// Map: Hands the populated node to a callback on success, which may set
/// the value or rewrite the token.
pub struct Map<P, F> {
    parser: P,
    /// Called with the node after every successful match
    f: F,
}

impl<P, F> Map<P, F> {
    /// Creates a new Map parser
    ///
    /// # Arguments
    ///
    /// * `parser` - The parser whose result is transformed
    /// * `f` - Callback that may set the value or rewrite the token
    pub fn new(parser: P, f: F) -> Self {
        Self { parser, f }
    }
}

impl<V, P, F> Parser<V> for Map<P, F>
where
    P: Parser<V>,
    F: Fn(&mut Node<V>),
{
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        let mut node = self.parser.parse(state)?;
        (self.f)(&mut node);
        Ok(node)
    }
}

/// Merge: Collapses the token to the concatenation of all leaf tokens
/// below it, keeping the child tree intact.
pub struct Merge<P> {
    parser: P,
}

impl<P> Merge<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<V, P: Parser<V>> Parser<V> for Merge<P> {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        let mut node = self.parser.parse(state)?;
        node.token = node.flattened_token();
        Ok(node)
    }
}

/// NoAutoWs: Disables whitespace skipping for everything beneath it.
pub struct NoAutoWs<P> {
    parser: P,
}

impl<P> NoAutoWs<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<V, P: Parser<V>> Parser<V> for NoAutoWs<P> {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        let previous = state.replace_whitespace(no_whitespace);
        let result = self.parser.parse(state);
        state.replace_whitespace(previous);
        result
    }
}

/// SignalSeq: Finds an ordered run of signals embedded in noise.
///
/// At each position the next expected signal is tried before the noise
/// parser. Noise that carries no value is tagged as filler; noise that does
/// carry a value is kept like a signal. Scanning stops when neither matches,
/// and the cursor is left after the last kept (non-filler) child, so
/// trailing filler stays unconsumed. The token joins the kept tokens with
/// single spaces.
pub struct SignalSeq<V> {
    /// Consumes one unit of filler between signals
    noise: BoxedParser<V>,
    /// The signals, which must all be found in this order
    signals: Vec<BoxedParser<V>>,
}

impl<V> SignalSeq<V> {
    /// Creates a new SignalSeq parser
    ///
    /// # Arguments
    ///
    /// * `noise` - Parser for filler; attach a value to keep a match
    /// * `signals` - The ordered signals to look for
    pub fn new(noise: BoxedParser<V>, signals: Vec<BoxedParser<V>>) -> Self {
        Self { noise, signals }
    }
}

impl<V> Parser<V> for SignalSeq<V> {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        traced("SignalSeq", state, |state| {
            let start = state.pos();
            let mut children: Vec<Node<V>> = Vec::new();
            let mut next = 0;
            let mut kept = (0, start);
            let mut stalled: Option<MatchError> = None;

            loop {
                let attempt = state.pos();
                if let Some(signal) = self.signals.get(next) {
                    match signal.parse(state) {
                        Ok(node) => {
                            children.push(node);
                            next += 1;
                            kept = (children.len(), state.pos());
                            continue;
                        }
                        Err(err) => {
                            state.restore(attempt);
                            if state.committed_past(attempt) {
                                return committed(state, start, err);
                            }
                            state.recover();
                            stalled = Some(err);
                        }
                    }
                }
                match self.noise.parse(state) {
                    Ok(node) if state.pos() > attempt => {
                        if node.value.is_some() {
                            children.push(node);
                            kept = (children.len(), state.pos());
                        } else {
                            children.push(node.into_noise());
                        }
                    }
                    Ok(_) => {
                        state.restore(attempt);
                        break;
                    }
                    Err(err) => {
                        state.restore(attempt);
                        if state.committed_past(attempt) {
                            return committed(state, start, err);
                        }
                        state.recover();
                        break;
                    }
                }
            }

            if next < self.signals.len() {
                let (position, expected) = match stalled {
                    Some(err) => (err.position, err.expected),
                    None => (state.pos(), END_OF_INPUT.to_string()),
                };
                state.restore(start);
                return Err(state.fail_at(position, format!("{} or noise", expected)));
            }

            let (kept_len, kept_end) = kept;
            children.truncate(kept_len);
            state.restore(kept_end);
            let token = children
                .iter()
                .filter(|child| !child.is_noise())
                .map(|child| child.token.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            Ok(Node::branch(token, children))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::boxed;
    use crate::literals::Chars;
    use pretty_assertions::assert_eq;

    fn run<P: Parser<()>>(parser: &P, input: &str) -> (ParseResult<()>, usize) {
        let mut state = State::new(input);
        let result = parser.parse(&mut state);
        (result, state.pos())
    }

    fn tokens(node: &Node<()>) -> Vec<&str> {
        node.children.iter().map(|n| n.token.as_str()).collect()
    }

    #[test]
    fn test_seq_token_is_verbatim() {
        let parser: Seq<()> = Seq::new(vec![boxed("hello"), boxed("world")]);
        let (result, pos) = run(&parser, "hello   world!");
        let node = result.unwrap();
        assert_eq!(node.token, "hello   world");
        assert_eq!(tokens(&node), vec!["hello", "world"]);
        assert_eq!(pos, 13);
    }

    #[test]
    fn test_seq_restores_on_failure() {
        let parser: Seq<()> = Seq::new(vec![boxed("hello"), boxed("world")]);
        let (result, pos) = run(&parser, "hello there");
        assert_eq!(result, Err(MatchError::new(6, "world")));
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_any_first_match() {
        let parser: Any<()> = Any::new(vec![boxed("hello"), boxed("hell")]);
        let (result, pos) = run(&parser, "hello");
        assert_eq!(result.unwrap().token, "hello");
        assert_eq!(pos, 5);
    }

    #[test]
    fn test_any_tie_prefers_later_error() {
        let parser: Any<()> = Any::new(vec![boxed("x"), boxed("y")]);
        let (result, _) = run(&parser, "z");
        assert_eq!(result, Err(MatchError::new(0, "y")));
    }

    #[test]
    fn test_any_at_end_of_input() {
        let parser: Any<()> = Any::new(vec![boxed("x")]);
        let (result, pos) = run(&parser, "   ");
        assert_eq!(result, Err(MatchError::new(3, END_OF_INPUT)));
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_any_with_name_reports_name() {
        let parser: AnyWithName<()> =
            AnyWithName::new("greeting", vec![boxed("aloha"), boxed("hola")]);
        let (result, pos) = run(&parser, "  hello");
        assert_eq!(result, Err(MatchError::new(2, "greeting")));
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_longest_picks_furthest() {
        let parser: Longest<()> = Longest::new("ab", vec![boxed("a"), boxed("ab"), boxed("ab")]);
        let (result, pos) = run(&parser, "abc");
        assert_eq!(result.unwrap().token, "ab");
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_longest_fails_with_name() {
        let parser: Longest<()> = Longest::new("letter", vec![boxed("a"), boxed("b")]);
        let (result, pos) = run(&parser, "c");
        assert_eq!(result, Err(MatchError::new(0, "letter")));
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_longest_ignores_zero_width_success() {
        let parser: Longest<()> = Longest::new(
            "digits",
            vec![boxed(Chars::repeated("0-9", 0, None)), boxed("x")],
        );
        let (result, _) = run(&parser, "abc");
        assert_eq!(result, Err(MatchError::new(0, "digits")));
    }

    #[test]
    fn test_longest_keeps_best_after_commit() {
        let committing: Seq<()> = Seq::new(vec![boxed("a"), boxed(Cut), boxed("b")]);
        let parser: Longest<()> = Longest::new(
            "ab",
            vec![boxed("a"), boxed(committing), boxed("abc")],
        );
        let (result, pos) = run(&parser, "ac");
        assert_eq!(result.unwrap().token, "a");
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_many_zero_matches() {
        let parser: Many<Chars, ()> = Many::new(Chars::new("a-c"), 0);
        let (result, pos) = run(&parser, "xyz");
        let node = result.unwrap();
        assert!(node.children.is_empty());
        assert_eq!(node.token, "");
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_some_requires_one() {
        let parser: Many<Chars, ()> = Many::new(Chars::new("a-c"), 1);
        let (result, pos) = run(&parser, "xyz");
        assert_eq!(result, Err(MatchError::new(0, "a-c")));
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_many_separator_failure_rewinds_whitespace() {
        let parser: Many<Chars, ()> = Many::new(Chars::new("a-z"), 0).with_separator(boxed(","));
        let (result, pos) = run(&parser, "a, b c");
        assert_eq!(tokens(&result.unwrap()), vec!["a", "b"]);
        assert_eq!(pos, 4);
    }

    #[test]
    fn test_many_stops_on_zero_width_operand() {
        let parser: Many<Maybe<&str>, ()> = Many::new(Maybe::new("x"), 0);
        let (result, pos) = run(&parser, "xxy");
        assert_eq!(tokens(&result.unwrap()), vec!["x", "x", ""]);
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_maybe_absent() {
        let (result, pos) = run(&Maybe::new("world"), "hello world");
        assert_eq!(result, Ok(Node::default()));
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_cut_raises_barrier_without_consuming() {
        let mut state = State::new("  abc");
        state.advance(3);
        let node: Node<()> = Cut.parse(&mut state).unwrap();
        assert_eq!(node, Node::default());
        assert_eq!(state.cut(), 3);
        assert_eq!(state.pos(), 3);
    }

    #[test]
    fn test_cut_through_maybe() {
        let inner: Seq<()> = Seq::new(vec![boxed("var"), boxed(Cut), boxed("hello")]);
        let (result, pos) = run(&Maybe::new(inner), "var");
        assert_eq!(result.unwrap_err().to_string(), "offset 3: expected hello");
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_any_reentered_below_cut() {
        let mut state = State::new("abc");
        state.raise_cut(2);
        let parser: Any<()> = Any::new(vec![boxed("a")]);
        let result = parser.parse(&mut state);
        assert_eq!(result, Err(MatchError::new(0, PAST_CUT)));
        assert_eq!(state.pos(), 0);
    }

    #[test]
    fn test_bind_and_map() {
        let parser = Bind::new("true", true);
        let mut state = State::new("true");
        assert_eq!(parser.parse(&mut state).unwrap().value, Some(true));

        let mut state = State::new("nil");
        let err = parser.parse(&mut state).unwrap_err();
        assert_eq!(err.to_string(), "offset 0: expected true");

        let upper = Map::new(Chars::new("a-z"), |node: &mut Node<String>| {
            node.value = Some(node.token.to_uppercase());
        });
        let mut state = State::new("abc");
        let node = Parser::<String>::parse(&upper, &mut state).unwrap();
        assert_eq!(node.value.as_deref(), Some("ABC"));
    }

    #[test]
    fn test_merge_flattens_token() {
        let inner: Seq<()> = Seq::new(vec![boxed("a"), boxed("b")]);
        let parser = Merge::new(inner);
        let (result, _) = run(&parser, "a   b");
        let node = result.unwrap();
        assert_eq!(node.token, "ab");
        assert_eq!(tokens(&node), vec!["a", "b"]);
    }

    #[test]
    fn test_no_auto_ws() {
        let strict: Seq<()> = Seq::new(vec![boxed("a"), boxed("b")]);
        let parser = NoAutoWs::new(strict);
        let (result, _) = run(&parser, "a b");
        assert_eq!(result, Err(MatchError::new(1, "b")));

        let mut state = State::new("ab  c");
        assert!(Parser::<()>::parse(&parser, &mut state).is_ok());
        // the outer policy is back in force
        assert!(Parser::<()>::parse(&"c", &mut state).is_ok());
    }

    #[test]
    fn test_signal_seq_filler_is_tagged() {
        let parser: SignalSeq<()> = SignalSeq::new(
            boxed(Chars::new("a-z")),
            vec![boxed(Chars::new("0-9")), boxed("!")],
        );
        let (result, pos) = run(&parser, "buy 12 now ! later");
        let node = result.unwrap();
        assert_eq!(tokens(&node), vec!["buy", "12", "now", "!"]);
        assert!(node.children[0].is_noise());
        assert!(!node.children[1].is_noise());
        assert_eq!(node.token, "12 !");
        assert_eq!(pos, 12);
    }
}
