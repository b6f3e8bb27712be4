//! Fixed-width code units.
//!
//! Every scanning operation in this crate is generic over [`CodeUnit`], which
//! is implemented for `u8` (UTF-8), `u16` (UTF-16) and `u32` (UTF-32). The
//! trait is sealed: [`TextBuffer`](crate::TextBuffer) relies on the
//! alignment of every implementor being no larger than its header's.
//!
//! # Scanning Kernels
//!
//! [`CodeUnit::count_in`] and [`CodeUnit::find_in`] are the two loops the
//! counter and tokenizer are built on. Byte units dispatch to `memchr`
//! (SSE2/AVX2/NEON where available); wider units use a scalar loop.

use std::fmt::Debug;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// One fixed-width element of a text buffer.
pub trait CodeUnit:
    Copy + Eq + Ord + Hash + Debug + Default + Send + Sync + 'static + sealed::Sealed
{
    /// Width of one unit in bytes.
    const WIDTH: usize;

    /// Widen to `u32`. Lossless for every implementor.
    fn to_u32(self) -> u32;

    /// Narrow from `u32`, returning `None` if `value` does not fit.
    fn from_u32(value: u32) -> Option<Self>;

    /// Number of positions in `haystack` equal to `needle`.
    ///
    /// Visits every unit exactly once, left to right.
    #[inline]
    fn count_in(haystack: &[Self], needle: Self) -> usize {
        haystack.iter().filter(|&&unit| unit == needle).count()
    }

    /// Index of the first unit in `haystack` equal to `needle`.
    #[inline]
    fn find_in(haystack: &[Self], needle: Self) -> Option<usize> {
        haystack.iter().position(|&unit| unit == needle)
    }
}

impl CodeUnit for u8 {
    const WIDTH: usize = 1;

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_u32(value: u32) -> Option<Self> {
        u8::try_from(value).ok()
    }

    #[inline]
    fn count_in(haystack: &[Self], needle: Self) -> usize {
        memchr::memchr_iter(needle, haystack).count()
    }

    #[inline]
    fn find_in(haystack: &[Self], needle: Self) -> Option<usize> {
        memchr::memchr(needle, haystack)
    }
}

impl CodeUnit for u16 {
    const WIDTH: usize = 2;

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_u32(value: u32) -> Option<Self> {
        u16::try_from(value).ok()
    }
}

impl CodeUnit for u32 {
    const WIDTH: usize = 4;

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }

    #[inline]
    fn from_u32(value: u32) -> Option<Self> {
        Some(value)
    }
}
