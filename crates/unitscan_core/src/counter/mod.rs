//! Occurrence counting.

use crate::CodeUnit;

/// Number of units in `units` equal to `target`.
///
/// One left-to-right pass with no early exit; an empty slice counts 0.
/// Byte units go through `memchr`.
#[inline]
pub fn count<U: CodeUnit>(units: &[U], target: U) -> usize {
    U::count_in(units, target)
}

#[cfg(test)]
mod tests;
