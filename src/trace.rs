//! # Diagnostic Trace Sinks
//!
//! Combinators report each invocation to the [`TraceSink`] carried by the
//! [`State`](crate::State). The sink is chosen per run; the default
//! [`NoopSink`] discards everything. Tracing never influences results.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::MatchError;

/// How one invocation ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome<'a> {
    Matched { end: usize },
    Failed(&'a MatchError),
}

/// A single combinator invocation.
#[derive(Debug, Clone, Copy)]
pub struct TraceEvent<'a> {
    pub name: &'a str,
    pub position: usize,
    /// Input from `position` to the end.
    pub input: &'a str,
    pub outcome: Outcome<'a>,
}

pub trait TraceSink {
    fn record(&self, event: &TraceEvent<'_>);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn record(&self, _event: &TraceEvent<'_>) {}
}

/// Forwards events to `tracing` at TRACE level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

const PREVIEW_CHARS: usize = 20;

fn preview(input: &str) -> &str {
    match input.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

impl TraceSink for TracingSink {
    fn record(&self, event: &TraceEvent<'_>) {
        match event.outcome {
            Outcome::Matched { end } => tracing::trace!(
                target: "ravel::trace",
                parser = event.name,
                position = event.position,
                input = preview(event.input),
                end,
                "matched"
            ),
            Outcome::Failed(err) => tracing::trace!(
                target: "ravel::trace",
                parser = event.name,
                position = event.position,
                input = preview(event.input),
                error = %err,
                "failed"
            ),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParserStats {
    pub calls: usize,
    pub matched: usize,
    pub failed: usize,
}

/// Aggregates call counts per parser name, useful for spotting hot or
/// heavily backtracking rules.
#[derive(Debug, Default)]
pub struct StatsSink {
    stats: RefCell<BTreeMap<String, ParserStats>>,
}

impl StatsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<ParserStats> {
        self.stats.borrow().get(name).copied()
    }

    pub fn snapshot(&self) -> BTreeMap<String, ParserStats> {
        self.stats.borrow().clone()
    }

    pub fn reset(&self) {
        self.stats.borrow_mut().clear();
    }
}

impl TraceSink for StatsSink {
    fn record(&self, event: &TraceEvent<'_>) {
        let mut stats = self.stats.borrow_mut();
        let entry = stats.entry(event.name.to_string()).or_default();
        entry.calls += 1;
        match event.outcome {
            Outcome::Matched { .. } => entry.matched += 1,
            Outcome::Failed(_) => entry.failed += 1,
        }
    }
}

impl fmt::Display for StatsSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<30} {:>8} {:>8} {:>8}", "parser", "calls", "matched", "failed")?;
        for (name, stats) in self.stats.borrow().iter() {
            writeln!(
                f,
                "{:<30} {:>8} {:>8} {:>8}",
                name, stats.calls, stats.matched, stats.failed
            )?;
        }
        Ok(())
    }
}
