//! # Leaf Matchers
//!
//! Primitive parsers that match text directly. Each one skips whitespace
//! under the active policy, then either consumes a span and returns it as a
//! leaf [`Node`], or fails at the attempted offset naming what it expected.

use crate::core::{ParseResult, Parser};
use crate::error::GrammarError;
use crate::node::Node;
use crate::state::State;

/// Matches a fixed string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exact {
    literal: String,
}

impl Exact {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    pub(crate) fn match_literal<V>(literal: &str, state: &mut State<'_>) -> ParseResult<V> {
        state.skip_whitespace();
        let start = state.pos();
        let result = if state.remaining().starts_with(literal) {
            state.advance(literal.len());
            Ok(Node::leaf(literal))
        } else {
            Err(state.fail(literal))
        };
        state.trace(literal, start, &result);
        result
    }
}

impl<V> Parser<V> for Exact {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        Exact::match_literal(&self.literal, state)
    }
}

/// A character set written like `a-zA-Z_`: single characters plus inclusive
/// ranges. A `-` at either end is literal.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CharSet {
    singles: Vec<char>,
    ranges: Vec<(char, char)>,
}

impl CharSet {
    fn parse(matcher: &str) -> Self {
        let chars: Vec<char> = matcher.chars().collect();
        let mut singles = Vec::new();
        let mut ranges = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            if i + 2 < chars.len() && chars[i + 1] == '-' {
                ranges.push((chars[i], chars[i + 2]));
                i += 3;
            } else {
                singles.push(chars[i]);
                i += 1;
            }
        }
        Self { singles, ranges }
    }

    fn contains(&self, c: char) -> bool {
        self.singles.contains(&c) || self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi)
    }
}

/// Matches a run of characters drawn from (or, via [`Chars::not`], absent
/// from) a character set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chars {
    matcher: String,
    set: CharSet,
    min: usize,
    max: Option<usize>,
    negated: bool,
}

impl Chars {
    /// One or more characters from `matcher`.
    pub fn new(matcher: impl Into<String>) -> Self {
        let matcher = matcher.into();
        Self {
            set: CharSet::parse(&matcher),
            matcher,
            min: 1,
            max: None,
            negated: false,
        }
    }

    /// Between `min` and `max` (inclusive) characters; `None` is unbounded.
    pub fn repeated(matcher: impl Into<String>, min: usize, max: Option<usize>) -> Self {
        Self {
            min,
            max,
            ..Self::new(matcher)
        }
    }

    /// One or more characters that are *not* in `matcher`.
    pub fn not(matcher: impl Into<String>) -> Self {
        Self {
            negated: true,
            ..Self::new(matcher)
        }
    }

    fn accepts(&self, c: char) -> bool {
        self.set.contains(c) != self.negated
    }
}

impl<V> Parser<V> for Chars {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        state.skip_whitespace();
        let start = state.pos();
        let limit = self.max.unwrap_or(usize::MAX);
        let mut count = 0;
        let mut len = 0;
        for c in state.remaining().chars() {
            if count >= limit || !self.accepts(c) {
                break;
            }
            count += 1;
            len += c.len_utf8();
        }
        let result = if count < self.min {
            Err(state.fail(self.matcher.as_str()))
        } else {
            state.advance(len);
            Ok(Node::leaf(state.slice(start, start + len)))
        };
        state.trace(&self.matcher, start, &result);
        result
    }
}

/// Matches a regular expression anchored at the cursor.
#[derive(Debug, Clone)]
pub struct Regex {
    name: String,
    regex: regex::Regex,
}

impl Regex {
    /// Failures report the pattern itself as what was expected.
    pub fn new(pattern: &str) -> Result<Self, GrammarError> {
        Self::named(pattern, pattern)
    }

    /// Failures report `name` instead of the pattern.
    pub fn named(name: impl Into<String>, pattern: &str) -> Result<Self, GrammarError> {
        let regex = regex::Regex::new(&format!("^(?:{})", pattern)).map_err(|source| {
            GrammarError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self {
            name: name.into(),
            regex,
        })
    }
}

impl<V> Parser<V> for Regex {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        state.skip_whitespace();
        let start = state.pos();
        let result = match self.regex.find(state.remaining()) {
            Some(found) => {
                state.advance(found.end());
                Ok(Node::leaf(found.as_str()))
            }
            None => Err(state.fail(self.name.as_str())),
        };
        state.trace(&self.name, start, &result);
        result
    }
}
