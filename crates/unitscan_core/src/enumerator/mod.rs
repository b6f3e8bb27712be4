//! Lazy `(index, unit)` enumeration.
//!
//! Each call to [`enumerate`] creates a new cursor starting at index 0, so
//! independent consumers of the same units never share iteration state.
//! Stopping early needs no cleanup: the cursor only borrows.

use std::iter::FusedIterator;

use crate::CodeUnit;

/// Lazy sequence of `(index, unit)` pairs over `units`, in ascending order.
#[inline]
pub fn enumerate<U: CodeUnit>(units: &[U]) -> Enumerate<'_, U> {
    Enumerate { units, index: 0 }
}

/// Cursor produced by [`enumerate`].
///
/// `Clone` forks the cursor at its current position.
#[derive(Clone, Debug)]
pub struct Enumerate<'a, U: CodeUnit> {
    units: &'a [U],
    /// Index of the next pair to yield.
    index: usize,
}

impl<U: CodeUnit> Enumerate<'_, U> {
    /// Index the next call to `next` will yield.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }
}

impl<U: CodeUnit> Iterator for Enumerate<'_, U> {
    type Item = (usize, U);

    #[inline]
    fn next(&mut self) -> Option<(usize, U)> {
        let unit = *self.units.get(self.index)?;
        let index = self.index;
        self.index += 1;
        Some((index, unit))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len() - self.index;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<(usize, U)> {
        self.index = self.index.saturating_add(n).min(self.units.len());
        self.next()
    }
}

impl<U: CodeUnit> ExactSizeIterator for Enumerate<'_, U> {}

impl<U: CodeUnit> FusedIterator for Enumerate<'_, U> {}

#[cfg(test)]
mod tests;
