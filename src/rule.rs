//! # Late-Bound Rules
//!
//! Self-referential grammars (balanced brackets, nested expressions) need a
//! parser that mentions itself. A [`Rule`] is declared first, handed out as
//! weak [`RuleRef`] handles while its body is built, and defined last:
//!
//! ```
//! use ravel::prelude::*;
//! use ravel::{seq, Rule};
//!
//! let parens: Rule<()> = Rule::declare();
//! parens
//!     .define(seq!["(", maybe(parens.handle()), ")"])
//!     .expect("defined once");
//! assert!(ravel::run(&parens, "(())").is_ok());
//! ```
//!
//! The handles do not keep the rule alive, so a grammar that refers to
//! itself does not form a reference cycle.

use std::rc::{Rc, Weak};

use once_cell::unsync::OnceCell;

use crate::core::{boxed, BoxedParser, ParseResult, Parser};
use crate::error::{GrammarError, UNDEFINED_RULE};
use crate::state::State;

type Slot<V> = OnceCell<BoxedParser<V>>;

pub struct Rule<V> {
    slot: Rc<Slot<V>>,
}

impl<V> Rule<V> {
    pub fn declare() -> Self {
        Self {
            slot: Rc::new(OnceCell::new()),
        }
    }

    /// Supplies the rule body. A rule can only be defined once.
    pub fn define<P>(&self, parser: P) -> Result<(), GrammarError>
    where
        P: Parser<V> + 'static,
    {
        self.slot
            .set(boxed(parser))
            .map_err(|_| GrammarError::RuleRedefined)
    }

    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }

    pub fn handle(&self) -> RuleRef<V> {
        RuleRef {
            slot: Rc::downgrade(&self.slot),
        }
    }
}

impl<V> Clone for Rule<V> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

fn parse_slot<V>(slot: &Slot<V>, state: &mut State<'_>) -> ParseResult<V> {
    match slot.get() {
        Some(parser) => parser.parse(state),
        None => Err(state.fail(UNDEFINED_RULE)),
    }
}

impl<V> Parser<V> for Rule<V> {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        parse_slot(&self.slot, state)
    }
}

/// Non-owning handle to a [`Rule`]. Parsing through a handle whose rule has
/// been dropped fails like an undefined rule.
pub struct RuleRef<V> {
    slot: Weak<Slot<V>>,
}

impl<V> Clone for RuleRef<V> {
    fn clone(&self) -> Self {
        Self {
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<V> Parser<V> for RuleRef<V> {
    fn parse(&self, state: &mut State<'_>) -> ParseResult<V> {
        match self.slot.upgrade() {
            Some(slot) => parse_slot(&slot, state),
            None => Err(state.fail(UNDEFINED_RULE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{Maybe, Seq};
    use crate::error::MatchError;

    #[test]
    fn test_undefined_rule_fails() {
        let rule: Rule<()> = Rule::declare();
        let mut state = State::new("x");
        assert_eq!(
            rule.parse(&mut state),
            Err(MatchError::new(0, UNDEFINED_RULE))
        );
        assert!(!rule.is_defined());
    }

    #[test]
    fn test_define_twice() {
        let rule: Rule<()> = Rule::declare();
        assert!(rule.define("a").is_ok());
        assert!(matches!(rule.define("b"), Err(GrammarError::RuleRedefined)));
    }

    #[test]
    fn test_recursive_rule() {
        let nested: Rule<()> = Rule::declare();
        nested
            .define(Seq::new(vec![
                boxed("["),
                boxed(Maybe::new(nested.handle())),
                boxed("]"),
            ]))
            .unwrap();
        let mut state = State::new("[[[]]]");
        let node = nested.parse(&mut state).unwrap();
        assert_eq!(node.token, "[[[]]]");
        assert!(state.at_end());
    }

    #[test]
    fn test_handle_does_not_keep_rule_alive() {
        let rule: Rule<()> = Rule::declare();
        rule.define("a").unwrap();
        let handle = rule.handle();
        drop(rule);
        let mut state = State::new("a");
        assert_eq!(
            handle.parse(&mut state),
            Err(MatchError::new(0, UNDEFINED_RULE))
        );
    }
}
