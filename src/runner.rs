//! # Driver
//!
//! Runs a grammar over a whole input. [`Runner::run`] additionally demands
//! that the input be fully consumed and reports leftovers as
//! [`UnparsedInputError`], distinct from a grammar mismatch.

use tracing::debug;

use crate::config::{RunConfig, TraceMode};
use crate::core::{ParseResult, Parser};
use crate::error::{ParseError, UnparsedInputError};
use crate::node::Node;
use crate::state::{State, Whitespace, NOOP_SINK};
use crate::trace::{TraceSink, TracingSink};

static TRACING_SINK: TracingSink = TracingSink;

/// Outcome of [`Runner::run_partial`]: the raw parse result and the state
/// the parse finished in, for inspecting leftovers and the cut barrier.
#[derive(Debug)]
pub struct Partial<'a, V> {
    pub result: ParseResult<V>,
    pub state: State<'a>,
}

impl<'a, V> Partial<'a, V> {
    /// Input left unconsumed.
    pub fn leftover(&self) -> &'a str {
        self.state.remaining()
    }
}

#[derive(Default)]
pub struct Runner<'s> {
    config: RunConfig,
    whitespace: Option<Whitespace>,
    sink: Option<&'s dyn TraceSink>,
}

impl<'s> Runner<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RunConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Overrides the configured whitespace policy with a custom function.
    pub fn whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = Some(whitespace);
        self
    }

    /// Sends trace events to `sink` regardless of the configured trace mode.
    pub fn sink(mut self, sink: &'s dyn TraceSink) -> Self {
        self.sink = Some(sink);
        self
    }

    fn state<'a>(&self, input: &'a str) -> State<'a>
    where
        's: 'a,
    {
        let sink: &'a dyn TraceSink = match (self.sink, self.config.trace) {
            (Some(sink), _) => sink,
            (None, TraceMode::Off) => &NOOP_SINK,
            (None, TraceMode::Log) => &TRACING_SINK,
        };
        let whitespace = self
            .whitespace
            .unwrap_or_else(|| self.config.whitespace.skipper());
        State::new(input).with_whitespace(whitespace).with_sink(sink)
    }

    /// Parses a prefix of `input` without demanding full consumption.
    pub fn run_partial<'a, V, P>(&self, parser: &P, input: &'a str) -> Partial<'a, V>
    where
        P: Parser<V> + ?Sized,
        's: 'a,
    {
        let mut state = self.state(input);
        state.skip_whitespace();
        let result = parser.parse(&mut state);
        Partial { result, state }
    }

    /// Parses all of `input`. Trailing whitespace is skipped before checking
    /// for leftovers.
    pub fn run<V, P>(&self, parser: &P, input: &str) -> Result<Node<V>, ParseError>
    where
        P: Parser<V> + ?Sized,
    {
        let Partial { result, mut state } = self.run_partial(parser, input);
        let node = result.map_err(|err| {
            debug!(target: "ravel::run", error = %err, "grammar did not match");
            err
        })?;
        state.skip_whitespace();
        if !state.at_end() {
            let leftover = state.remaining();
            debug!(
                target: "ravel::run",
                position = state.pos(),
                leftover_len = leftover.len(),
                "grammar matched but left input unparsed"
            );
            return Err(UnparsedInputError::new(leftover).into());
        }
        Ok(node)
    }
}

/// Parses all of `input` with the default configuration.
pub fn run<V, P>(parser: &P, input: &str) -> Result<Node<V>, ParseError>
where
    P: Parser<V> + ?Sized,
{
    Runner::new().run(parser, input)
}

/// Parses a prefix of `input` with the default configuration.
pub fn run_partial<'a, V, P>(parser: &P, input: &'a str) -> Partial<'a, V>
where
    P: Parser<V> + ?Sized,
{
    Runner::new().run_partial(parser, input)
}
