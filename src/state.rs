//! # Scan State
//!
//! [`State`] is the cursor shared by every parser during one run: the input,
//! the current byte offset, the cut barrier, the most recent unrecovered
//! failure, the whitespace policy, and the trace sink.

use crate::core::ParseResult;
use crate::error::MatchError;
use crate::trace::{NoopSink, Outcome, TraceEvent, TraceSink};

/// Whitespace-skipping policy, run before each primitive and alternation.
pub type Whitespace = fn(&mut State<'_>);

pub(crate) static NOOP_SINK: NoopSink = NoopSink;

/// Skips any Unicode whitespace. This is the default policy.
pub fn unicode_whitespace(state: &mut State<'_>) {
    let skipped = state
        .remaining()
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(state.remaining().len(), |(idx, _)| idx);
    state.advance(skipped);
}

/// Skips ASCII space, tab, carriage return and newline.
pub fn ascii_whitespace(state: &mut State<'_>) {
    let skipped = state
        .remaining()
        .bytes()
        .take_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
        .count();
    state.advance(skipped);
}

pub fn no_whitespace(_state: &mut State<'_>) {}

pub struct State<'a> {
    input: &'a str,
    pos: usize,
    cut: usize,
    error: Option<MatchError>,
    whitespace: Whitespace,
    sink: &'a dyn TraceSink,
}

impl<'a> State<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            cut: 0,
            error: None,
            whitespace: unicode_whitespace,
            sink: &NOOP_SINK,
        }
    }

    pub fn with_whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }

    pub fn with_sink(mut self, sink: &'a dyn TraceSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Unconsumed input.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Moves forward by `len` bytes, clamped to the end of input.
    pub fn advance(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.input.len());
    }

    /// Rewinds (or moves) the cursor to an offset obtained from [`State::pos`].
    pub fn restore(&mut self, pos: usize) {
        debug_assert!(self.input.is_char_boundary(pos));
        self.pos = pos.min(self.input.len());
    }

    /// Slice of the input between two offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    pub fn skip_whitespace(&mut self) {
        (self.whitespace)(self);
    }

    /// Installs a new policy and returns the previous one.
    pub fn replace_whitespace(&mut self, whitespace: Whitespace) -> Whitespace {
        std::mem::replace(&mut self.whitespace, whitespace)
    }

    pub fn cut(&self) -> usize {
        self.cut
    }

    /// Raises the cut barrier to `pos`. The barrier never moves back.
    pub fn raise_cut(&mut self, pos: usize) {
        self.cut = self.cut.max(pos);
    }

    /// True when a commit fired beyond `pos`, so a failure there must not
    /// be recovered from.
    pub fn committed_past(&self, pos: usize) -> bool {
        self.cut > pos
    }

    /// Records a failure at the current offset.
    pub fn fail(&mut self, expected: impl Into<String>) -> MatchError {
        self.fail_at(self.pos, expected)
    }

    pub fn fail_at(&mut self, position: usize, expected: impl Into<String>) -> MatchError {
        let err = MatchError::new(position, expected);
        self.error = Some(err.clone());
        err
    }

    /// Re-records an error produced deeper in the grammar as the current one.
    pub fn set_error(&mut self, err: &MatchError) {
        self.error = Some(err.clone());
    }

    /// Clears the current failure; the caller has decided to backtrack.
    pub fn recover(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<&MatchError> {
        self.error.as_ref()
    }

    pub fn errored(&self) -> bool {
        self.error.is_some()
    }

    /// Reports one invocation of `name`, started at `start`, to the sink.
    pub fn trace<V>(&self, name: &str, start: usize, result: &ParseResult<V>) {
        let outcome = match result {
            Ok(_) => Outcome::Matched { end: self.pos },
            Err(err) => Outcome::Failed(err),
        };
        self.sink.record(&TraceEvent {
            name,
            position: start,
            input: &self.input[start.min(self.input.len())..],
            outcome,
        });
    }
}

impl std::fmt::Debug for State<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("pos", &self.pos)
            .field("cut", &self.cut)
            .field("error", &self.error)
            .field("remaining", &self.remaining())
            .finish()
    }
}
