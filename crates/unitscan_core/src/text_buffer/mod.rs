//! Header-prefixed, immutable text buffer with raw element access.
//!
//! A [`TextBuffer`] is a single heap allocation laid out as a length header
//! immediately followed by the code units:
//!
//! ```text
//! [Header { len: usize }][unit 0][unit 1]...[unit len-1]
//!  ^                      ^
//!  allocation start       allocation start + DATA_OFFSET
//! ```
//!
//! Because the layout is fixed, the first unit is found by skipping
//! [`TextBuffer::DATA_OFFSET`] bytes from the header, with no lookup and no
//! bounds check. [`TextBuffer::unit_ref_at`] extends that to an arbitrary
//! offset and leaves the range check to the caller.
//!
//! The buffer never changes after construction, so any number of
//! [`UnitSpan`]s may borrow it at once, from any thread.

#![allow(
    unsafe_code,
    reason = "owns a manually laid out allocation and hands out raw views into it"
)]

use std::alloc::{self, Layout, LayoutError};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;
use std::ptr::{self, NonNull};

use crate::{CodeUnit, UnitSpan};

/// Leading header of every buffer allocation.
#[repr(C)]
struct Header {
    /// Number of code units that follow the header.
    len: usize,
}

// Units start right after the header only if no unit type needs stricter
// alignment than the header itself.
const _: () = assert!(std::mem::align_of::<u8>() <= std::mem::align_of::<Header>());
const _: () = assert!(std::mem::align_of::<u16>() <= std::mem::align_of::<Header>());
const _: () = assert!(std::mem::align_of::<u32>() <= std::mem::align_of::<Header>());

/// Error when a buffer cannot be allocated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// Header plus `units` code units exceed `isize::MAX` bytes.
    #[error("text buffer of {units} units exceeds the maximum allocation size")]
    CapacityOverflow { units: usize },
}

/// Immutable, fixed-length sequence of code units behind a length header.
///
/// Dereferences to `[U]`, so `buffer[i]` is the checked way to read a unit.
pub struct TextBuffer<U: CodeUnit> {
    header: NonNull<Header>,
    _units: PhantomData<U>,
}

// SAFETY: the allocation is uniquely owned and never mutated after
// construction; `U` is a plain integer type.
unsafe impl<U: CodeUnit> Send for TextBuffer<U> {}
// SAFETY: shared access only ever reads.
unsafe impl<U: CodeUnit> Sync for TextBuffer<U> {}

impl<U: CodeUnit> TextBuffer<U> {
    /// Byte offset from the start of the allocation to unit 0.
    pub const DATA_OFFSET: usize = std::mem::size_of::<Header>();

    /// Copy `units` into a new buffer.
    ///
    /// # Panics
    ///
    /// Panics if the allocation size overflows, like `Vec` does.
    /// Use [`try_from_units`](Self::try_from_units) to handle that case.
    pub fn from_units(units: &[U]) -> Self {
        Self::try_from_units(units).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Copy `units` into a new buffer, reporting allocation size overflow.
    pub fn try_from_units(units: &[U]) -> Result<Self, BufferError> {
        let len = units.len();
        let layout =
            Self::layout_for(len).map_err(|_| BufferError::CapacityOverflow { units: len })?;

        // SAFETY: `layout` has non-zero size (it always contains the header).
        let raw = unsafe { alloc::alloc(layout) };
        let Some(header) = NonNull::new(raw.cast::<Header>()) else {
            alloc::handle_alloc_error(layout);
        };

        // SAFETY: `raw` is a fresh allocation of `layout`, which holds a
        // `Header` at offset 0 and `len` units at `DATA_OFFSET`. The source
        // slice cannot overlap a fresh allocation.
        unsafe {
            header.as_ptr().write(Header { len });
            let data = raw.add(Self::DATA_OFFSET).cast::<U>();
            ptr::copy_nonoverlapping(units.as_ptr(), data, len);
        }

        tracing::trace!(
            units = len,
            bytes = layout.size(),
            width = U::WIDTH,
            "allocated text buffer"
        );

        Ok(Self {
            header,
            _units: PhantomData,
        })
    }

    /// Allocation layout for a buffer of `len` units.
    fn layout_for(len: usize) -> Result<Layout, LayoutError> {
        let (layout, offset) = Layout::new::<Header>().extend(Layout::array::<U>(len)?)?;
        debug_assert_eq!(offset, Self::DATA_OFFSET, "units must follow the header");
        Ok(layout.pad_to_align())
    }

    /// Number of code units.
    #[inline]
    pub fn len(&self) -> usize {
        // SAFETY: the header is initialized for the lifetime of `self`.
        unsafe { self.header.as_ref().len }
    }

    /// Returns `true` if the buffer holds no units.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pointer to unit 0, found by skipping the header.
    ///
    /// For an empty buffer this is where unit 0 would be; it is aligned and
    /// non-null but must not be read.
    #[inline]
    pub fn first_unit_ref(&self) -> NonNull<U> {
        // SAFETY: `DATA_OFFSET` is within the allocation (the layout is at
        // least header-sized), so the result is in bounds and non-null.
        unsafe {
            let data = self
                .header
                .as_ptr()
                .cast::<u8>()
                .add(Self::DATA_OFFSET)
                .cast::<U>();
            NonNull::new_unchecked(data)
        }
    }

    /// Reference to the unit at `index`, without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`. Anything else is undefined behaviour; no
    /// check is made in release builds.
    #[inline]
    pub unsafe fn unit_ref_at(&self, index: usize) -> &U {
        debug_assert!(
            index < self.len(),
            "unit index {index} out of bounds for buffer of {} units",
            self.len()
        );
        // SAFETY: the caller guarantees `index < len`, and units
        // `0..len` are initialized.
        unsafe { &*self.first_unit_ref().as_ptr().add(index) }
    }

    /// The units as a bounds-checked slice.
    #[inline]
    pub fn as_units(&self) -> &[U] {
        // SAFETY: `first_unit_ref` is aligned and non-null, and `len` units
        // were initialized at construction. For `len == 0` no memory is read.
        unsafe { std::slice::from_raw_parts(self.first_unit_ref().as_ptr(), self.len()) }
    }

    /// A span over the whole buffer.
    #[inline]
    pub fn as_span(&self) -> UnitSpan<'_, U> {
        UnitSpan::from_buffer(self)
    }
}

impl<U: CodeUnit> Drop for TextBuffer<U> {
    fn drop(&mut self) {
        // The same layout was computed successfully at construction.
        if let Ok(layout) = Self::layout_for(self.len()) {
            // SAFETY: `header` came from `alloc::alloc(layout)` and units
            // need no drop glue.
            unsafe { alloc::dealloc(self.header.as_ptr().cast::<u8>(), layout) };
        }
    }
}

impl<U: CodeUnit> Deref for TextBuffer<U> {
    type Target = [U];

    #[inline]
    fn deref(&self) -> &[U] {
        self.as_units()
    }
}

impl<U: CodeUnit> AsRef<[U]> for TextBuffer<U> {
    #[inline]
    fn as_ref(&self) -> &[U] {
        self.as_units()
    }
}

impl<U: CodeUnit> Clone for TextBuffer<U> {
    fn clone(&self) -> Self {
        Self::from_units(self.as_units())
    }
}

impl<U: CodeUnit> Default for TextBuffer<U> {
    fn default() -> Self {
        Self::from_units(&[])
    }
}

impl<U: CodeUnit> PartialEq for TextBuffer<U> {
    fn eq(&self, other: &Self) -> bool {
        self.as_units() == other.as_units()
    }
}

impl<U: CodeUnit> Eq for TextBuffer<U> {}

impl<U: CodeUnit> PartialOrd for TextBuffer<U> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: CodeUnit> Ord for TextBuffer<U> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_units().cmp(other.as_units())
    }
}

impl<U: CodeUnit> Hash for TextBuffer<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_units().hash(state);
    }
}

impl<U: CodeUnit> fmt::Debug for TextBuffer<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field("len", &self.len())
            .field("units", &self.as_units())
            .finish()
    }
}

impl<U: CodeUnit> From<&[U]> for TextBuffer<U> {
    fn from(units: &[U]) -> Self {
        Self::from_units(units)
    }
}

impl From<&str> for TextBuffer<u8> {
    fn from(text: &str) -> Self {
        Self::from_units(text.as_bytes())
    }
}

impl<U: CodeUnit> FromIterator<U> for TextBuffer<U> {
    fn from_iter<I: IntoIterator<Item = U>>(iter: I) -> Self {
        let units: Vec<U> = iter.into_iter().collect();
        Self::from_units(&units)
    }
}

/// Pointer to the first unit of `buffer`. See [`TextBuffer::first_unit_ref`].
#[inline]
pub fn first_unit_ref<U: CodeUnit>(buffer: &TextBuffer<U>) -> NonNull<U> {
    buffer.first_unit_ref()
}

/// Reference to the unit at `index` of `buffer`, unchecked.
///
/// # Safety
///
/// `index < buffer.len()`. See [`TextBuffer::unit_ref_at`].
#[inline]
pub unsafe fn unit_ref_at<U: CodeUnit>(buffer: &TextBuffer<U>, index: usize) -> &U {
    // SAFETY: forwarded precondition.
    unsafe { buffer.unit_ref_at(index) }
}
