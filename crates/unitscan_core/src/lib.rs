//! Zero-copy scanning over fixed-width code units.
//!
//! Standalone: no dependency on the CLI. Anything that needs to count,
//! enumerate, split or hash text already resident in memory can depend on
//! this crate alone.
//!
//! # Architecture
//!
//! ```text
//! TextBuffer<U>  (header + units, raw first-unit access)
//!     │
//!     ▼
//! UnitSpan<'a, U>  (pointer + length, the only place bounds are known)
//!     │
//!     ├──► djb2_hash  -> u32
//!     ├──► count      -> usize
//!     ├──► enumerate  -> Enumerate  (index, unit)
//!     └──► tokenize   -> Tokenize   UnitSpan tokens
//! ```
//!
//! `U` is one of `u8`, `u16`, `u32` (see [`CodeUnit`]). None of the
//! scanning operations can fail or allocate; none mutate their input.
//!
//! # Unchecked Access
//!
//! [`first_unit_ref`] and [`unit_ref_at`] skip bounds checks. The first is
//! safe to call (it only computes an address); the second is `unsafe` and
//! requires `index < len`. Everything else is checked or total.

mod code_unit;
mod counter;
mod enumerator;
mod hasher;
mod span;
mod text_buffer;
mod tokenizer;

pub use code_unit::CodeUnit;
pub use counter::count;
pub use enumerator::{enumerate, Enumerate};
pub use hasher::{djb2_hash, BuildDjb2Hasher, Djb2Hasher, DJB2_SEED};
pub use span::{SpanError, UnitSpan};
pub use text_buffer::{first_unit_ref, unit_ref_at, BufferError, TextBuffer};
pub use tokenizer::{tokenize, Tokenize};
