//! # ravel
//!
//! A backtracking parser-combinator engine over text. Grammars are built by
//! composing small parsers; running one produces a tree of [`Node`]s holding
//! the matched spans and optional semantic values.
//!
//! ## Core Components
//!
//! * **[`State`]**: the scan cursor shared by one parse (offset, cut
//!   barrier, whitespace policy, trace sink)
//! * **[`Node`]**: matched token, ordered children and a semantic value
//! * **[`Parser`]**: the contract every matcher and combinator implements
//! * **Combinators**: [`Seq`](combinators::Seq), [`Any`](combinators::Any),
//!   [`AnyWithName`](combinators::AnyWithName), [`Longest`](combinators::Longest),
//!   [`Many`](combinators::Many), [`Maybe`](combinators::Maybe),
//!   [`Cut`](combinators::Cut), [`Bind`](combinators::Bind),
//!   [`Map`](combinators::Map), [`Merge`](combinators::Merge),
//!   [`NoAutoWs`](combinators::NoAutoWs), [`SignalSeq`](combinators::SignalSeq)
//! * **Driver**: [`run`] / [`Runner`], which also reports unconsumed input
//!
//! ## Error Handling
//!
//! Mismatches are values, never panics. The error with the furthest offset
//! wins among failed alternatives, and a [`Cut`](combinators::Cut) turns
//! later failures into hard errors that no enclosing alternative may hide.
//!
//! ## Usage Example
//!
//! ```
//! use ravel::prelude::*;
//! use ravel::{any, seq};
//!
//! let tag: Seq<()> = seq!["<", cut(), chars("a-z"), ">"];
//! let text = many(any![tag, chars("a-z")]);
//!
//! assert!(ravel::run(&text, "hello <world>").is_ok());
//! assert_eq!(
//!     ravel::run(&text, "hello <world").unwrap_err().to_string(),
//!     "offset 12: expected >"
//! );
//! ```

#[macro_use]
mod macros;

pub mod combinators;
pub mod config;
pub mod core;
pub mod error;
pub mod literals;
pub mod node;
pub mod prelude;
pub mod rule;
pub mod runner;
pub mod state;
pub mod trace;

pub use crate::core::{boxed, BoxedParser, ParseResult, Parser, ParserExt};
pub use config::{RunConfig, TraceMode, WhitespacePolicy};
pub use error::{ConfigError, GrammarError, MatchError, ParseError, UnparsedInputError};
pub use node::Node;
pub use rule::{Rule, RuleRef};
pub use runner::{run, run_partial, Partial, Runner};
pub use state::{State, Whitespace};
pub use trace::{NoopSink, Outcome, StatsSink, TraceEvent, TraceSink, TracingSink};
