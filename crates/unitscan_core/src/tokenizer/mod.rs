//! Zero-copy splitting on a separator unit.
//!
//! The tokenizer is a two-state machine:
//!
//! ```text
//! Scanning(o) --separator at p--> emit [o, p), Scanning(p + 1)
//! Scanning(o) --end of units----> emit [o, len), Done
//! ```
//!
//! starting in `Scanning(0)`. Every state emits exactly one token, so:
//!
//! - an empty input yields one empty token,
//! - a leading separator yields an empty first token,
//! - consecutive separators yield empty tokens between them,
//! - a trailing separator yields an empty last token.
//!
//! Joining the tokens with the separator reproduces the input exactly.
//! Tokens are [`UnitSpan`]s into the input; nothing is copied.

use std::iter::FusedIterator;

use crate::{CodeUnit, UnitSpan};

/// Lazy sequence of the tokens of `units` delimited by `separator`.
#[inline]
pub fn tokenize<U: CodeUnit>(units: &[U], separator: U) -> Tokenize<'_, U> {
    Tokenize {
        units,
        separator,
        state: State::Scanning(0),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Next token starts at this offset; always `<= units.len()`.
    Scanning(usize),
    Done,
}

/// Cursor produced by [`tokenize`].
///
/// `Clone` forks the cursor at its current position.
#[derive(Clone, Debug)]
pub struct Tokenize<'a, U: CodeUnit> {
    units: &'a [U],
    separator: U,
    state: State,
}

impl<U: CodeUnit> Tokenize<'_, U> {
    /// The separator this cursor splits on.
    #[inline]
    pub fn separator(&self) -> U {
        self.separator
    }

    /// Offset where the next token starts, or `None` once all tokens have
    /// been produced.
    #[inline]
    pub fn position(&self) -> Option<usize> {
        match self.state {
            State::Scanning(start) => Some(start),
            State::Done => None,
        }
    }
}

impl<'a, U: CodeUnit> Iterator for Tokenize<'a, U> {
    type Item = UnitSpan<'a, U>;

    fn next(&mut self) -> Option<UnitSpan<'a, U>> {
        let State::Scanning(start) = self.state else {
            return None;
        };
        let rest = &self.units[start..];
        match U::find_in(rest, self.separator) {
            Some(found) => {
                self.state = State::Scanning(start + found + 1);
                Some(UnitSpan::new(&rest[..found]))
            }
            None => {
                self.state = State::Done;
                Some(UnitSpan::new(rest))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            // At least the final token; at most one per remaining unit plus one.
            State::Scanning(start) => (1, Some(self.units.len() - start + 1)),
            State::Done => (0, Some(0)),
        }
    }
}

impl<U: CodeUnit> FusedIterator for Tokenize<'_, U> {}
