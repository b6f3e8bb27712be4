//! Non-owning views over code units.
//!
//! [`UnitSpan`] is the hand-off point between the raw buffer and every
//! scanning algorithm: it pairs a base pointer with a length, and the Rust
//! lifetime keeps it from outliving the storage it borrows. Sub-spans and
//! tokens alias the same storage; nothing is copied.

#![allow(
    unsafe_code,
    reason = "adapts raw buffer pointers into slices and exposes unchecked reads"
)]

use std::fmt;
use std::ptr::NonNull;

use crate::{CodeUnit, Enumerate, TextBuffer, Tokenize};

/// Error when a sub-range cannot be taken from a span.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Sub-range start is negative.
    #[error("span start {0} is negative")]
    NegativeStart(isize),
    /// Sub-range length is negative.
    #[error("span length {0} is negative")]
    NegativeLength(isize),
    /// Sub-range extends past the end of the span.
    #[error("range {start}..{start}+{len} is out of bounds for a span of {available} units")]
    OutOfBounds {
        start: usize,
        len: usize,
        available: usize,
    },
}

/// Borrowed `(pointer, length)` view over code units.
///
/// `Copy`: passing a span around never copies the units it covers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UnitSpan<'a, U: CodeUnit> {
    units: &'a [U],
}

impl<'a, U: CodeUnit> UnitSpan<'a, U> {
    /// Wrap a slice.
    #[inline]
    pub const fn new(units: &'a [U]) -> Self {
        UnitSpan { units }
    }

    /// View a whole [`TextBuffer`], starting from its raw first-unit pointer.
    #[inline]
    pub fn from_buffer(buffer: &'a TextBuffer<U>) -> Self {
        // SAFETY: `first_unit_ref` points at `buffer.len()` initialized units
        // that live as long as `buffer`.
        unsafe { Self::from_raw_parts(buffer.first_unit_ref(), buffer.len()) }
    }

    /// Build a span from a first-unit pointer and a length.
    ///
    /// # Safety
    ///
    /// `first` must point to `len` initialized, aligned units that stay
    /// valid and unmodified for `'a`. The lifetime is not checked.
    #[inline]
    pub unsafe fn from_raw_parts(first: NonNull<U>, len: usize) -> Self {
        // SAFETY: forwarded precondition.
        let units = unsafe { std::slice::from_raw_parts(first.as_ptr(), len) };
        UnitSpan { units }
    }

    /// Number of units.
    #[inline]
    pub const fn len(self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the span covers no units.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.units.is_empty()
    }

    /// The underlying slice, with the span's full lifetime.
    #[inline]
    pub const fn as_slice(self) -> &'a [U] {
        self.units
    }

    /// Pointer to unit 0 (dangling but aligned when empty).
    #[inline]
    pub fn first_unit_ref(self) -> NonNull<U> {
        NonNull::from(self.units).cast::<U>()
    }

    /// Unit at `index`, or `None` past the end.
    #[inline]
    pub fn get(self, index: usize) -> Option<U> {
        self.units.get(index).copied()
    }

    /// Reference to the unit at `index`, without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(self, index: usize) -> &'a U {
        debug_assert!(
            index < self.units.len(),
            "unit index {index} out of bounds for span of {} units",
            self.units.len()
        );
        // SAFETY: the caller guarantees `index < len`.
        unsafe { self.units.get_unchecked(index) }
    }

    /// Sub-span of `len` units starting at `start`.
    pub fn sub_span(self, start: usize, len: usize) -> Result<Self, SpanError> {
        let out_of_bounds = || SpanError::OutOfBounds {
            start,
            len,
            available: self.units.len(),
        };
        let end = start.checked_add(len).ok_or_else(out_of_bounds)?;
        let units = self.units.get(start..end).ok_or_else(out_of_bounds)?;
        Ok(UnitSpan { units })
    }

    /// Sub-span from signed coordinates, as handed over by callers that
    /// track offsets in signed integers.
    pub fn sub_span_signed(self, start: isize, len: isize) -> Result<Self, SpanError> {
        let start = usize::try_from(start).map_err(|_| SpanError::NegativeStart(start))?;
        let len = usize::try_from(len).map_err(|_| SpanError::NegativeLength(len))?;
        self.sub_span(start, len)
    }

    /// Unit offset of `self` inside `parent`, if `self` aliases a range of it.
    ///
    /// Compares addresses, not contents: two equal texts in different
    /// buffers are unrelated.
    pub fn offset_within(self, parent: UnitSpan<'_, U>) -> Option<usize> {
        let base = parent.units.as_ptr() as usize;
        let addr = self.units.as_ptr() as usize;
        let byte_offset = addr.checked_sub(base)?;
        if byte_offset % U::WIDTH != 0 {
            return None;
        }
        let offset = byte_offset / U::WIDTH;
        let end = offset.checked_add(self.units.len())?;
        (end <= parent.units.len()).then_some(offset)
    }

    /// Number of units equal to `target`. See [`crate::count`].
    #[inline]
    pub fn count(self, target: U) -> usize {
        crate::count(self.units, target)
    }

    /// Lazy `(index, unit)` pairs. See [`crate::enumerate`].
    #[inline]
    pub fn enumerate(self) -> Enumerate<'a, U> {
        crate::enumerate(self.units)
    }

    /// Lazy tokens split on `separator`. See [`crate::tokenize`].
    #[inline]
    pub fn tokenize(self, separator: U) -> Tokenize<'a, U> {
        crate::tokenize(self.units, separator)
    }

    /// Djb2 hash of the covered units. See [`crate::djb2_hash`].
    #[inline]
    pub fn djb2_hash(self) -> u32 {
        crate::djb2_hash(self.units)
    }
}

impl<'a> UnitSpan<'a, u8> {
    /// Render byte units as text, replacing invalid UTF-8.
    pub fn to_string_lossy(self) -> std::borrow::Cow<'a, str> {
        String::from_utf8_lossy(self.units)
    }
}

impl<'a, U: CodeUnit> From<&'a [U]> for UnitSpan<'a, U> {
    #[inline]
    fn from(units: &'a [U]) -> Self {
        UnitSpan::new(units)
    }
}

impl<'a, U: CodeUnit> From<&'a TextBuffer<U>> for UnitSpan<'a, U> {
    #[inline]
    fn from(buffer: &'a TextBuffer<U>) -> Self {
        UnitSpan::from_buffer(buffer)
    }
}

impl<'a> From<&'a str> for UnitSpan<'a, u8> {
    #[inline]
    fn from(text: &'a str) -> Self {
        UnitSpan::new(text.as_bytes())
    }
}

impl<U: CodeUnit> fmt::Debug for UnitSpan<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.units).finish()
    }
}

impl<'a, U: CodeUnit> IntoIterator for UnitSpan<'a, U> {
    type Item = &'a U;
    type IntoIter = std::slice::Iter<'a, U>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}
