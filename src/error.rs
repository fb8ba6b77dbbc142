//! # Parse Errors
//!
//! Failures are ordinary values. A [`MatchError`] is produced whenever the
//! grammar does not match; the driver adds [`UnparsedInputError`] when the
//! grammar matched but left input behind. Both are folded into [`ParseError`]
//! so callers can classify them with a plain `match`.

use thiserror::Error;

/// Sentinel description used when an alternation starts at end of input.
pub const END_OF_INPUT: &str = "!EOF";

/// Reported when an alternation is re-entered below an already raised cut
/// and no earlier failure is on record.
pub const PAST_CUT: &str = "!CUT";

/// Reported when a late-bound rule is parsed before it has been defined.
pub const UNDEFINED_RULE: &str = "!UNDEFINED";

/// A grammar mismatch at a byte offset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("offset {position}: expected {expected}")]
pub struct MatchError {
    pub position: usize,
    pub expected: String,
}

impl MatchError {
    pub fn new(position: usize, expected: impl Into<String>) -> Self {
        Self {
            position,
            expected: expected.into(),
        }
    }

    /// Furthest-failure ranking: `self` wins when it sits at or beyond
    /// `other`, so the more recently produced error wins a tie.
    pub fn outranks(&self, other: &MatchError) -> bool {
        self.position >= other.position
    }
}

/// The grammar succeeded without consuming all of the input.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("left unparsed: {leftover}")]
pub struct UnparsedInputError {
    pub leftover: String,
}

impl UnparsedInputError {
    pub fn new(leftover: impl Into<String>) -> Self {
        Self {
            leftover: leftover.into(),
        }
    }
}

/// Everything [`crate::run`] can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error(transparent)]
    UnparsedInput(#[from] UnparsedInputError),
}

impl ParseError {
    pub fn is_unparsed_input(&self) -> bool {
        matches!(self, ParseError::UnparsedInput(_))
    }

    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Match(err) => Some(err.position),
            ParseError::UnparsedInput(_) => None,
        }
    }
}

/// Faults raised while building a grammar, before any input is seen.
#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("rule is already defined")]
    RuleRedefined,
}

/// Errors while loading a [`crate::config::RunConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_error_display() {
        let err = MatchError::new(11, ".");
        assert_eq!(err.to_string(), "offset 11: expected .");
    }

    #[test]
    fn test_outranks_prefers_later_on_tie() {
        let earlier = MatchError::new(4, "a");
        let later = MatchError::new(4, "b");
        assert!(later.outranks(&earlier));
        assert!(earlier.outranks(&later));
        assert!(!MatchError::new(3, "c").outranks(&later));
    }

    #[test]
    fn test_parse_error_classification() {
        let unparsed: ParseError = UnparsedInputError::new("<foo").into();
        let mismatch: ParseError = MatchError::new(0, "left unparsed: <foo").into();
        assert!(unparsed.is_unparsed_input());
        assert!(!mismatch.is_unparsed_input());
        assert_eq!(unparsed.to_string(), "left unparsed: <foo");
        assert_eq!(unparsed.position(), None);
        assert_eq!(mismatch.position(), Some(0));
    }
}
