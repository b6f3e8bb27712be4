//! Djb2 content hash.
//!
//! `hash = hash * 33 + unit`, seeded with 5381, in wrapping `u32`
//! arithmetic. There is no per-process seed: the same units hash to the
//! same value in every run, on every machine.

use std::hash::{BuildHasher, Hasher};

use crate::CodeUnit;

/// Initial accumulator value.
pub const DJB2_SEED: u32 = 5381;

/// Djb2 hash of `units`. An empty slice hashes to [`DJB2_SEED`].
#[inline]
pub fn djb2_hash<U: CodeUnit>(units: &[U]) -> u32 {
    units.iter().fold(DJB2_SEED, |hash, &unit| step(hash, unit))
}

#[inline]
fn step<U: CodeUnit>(hash: u32, unit: U) -> u32 {
    hash.wrapping_mul(33).wrapping_add(unit.to_u32())
}

/// Incremental Djb2 state.
///
/// Feeding the units of a text one at a time through
/// [`write_unit`](Self::write_unit) gives the same result as
/// [`djb2_hash`] over the whole text. As a [`std::hash::Hasher`] it
/// consumes raw bytes, which makes it usable as a deterministic hasher for
/// standard collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Djb2Hasher {
    hash: u32,
}

impl Djb2Hasher {
    pub const fn new() -> Self {
        Djb2Hasher { hash: DJB2_SEED }
    }

    #[inline]
    pub fn write_unit<U: CodeUnit>(&mut self, unit: U) {
        self.hash = step(self.hash, unit);
    }

    #[inline]
    pub fn write_units<U: CodeUnit>(&mut self, units: &[U]) {
        self.hash = units.iter().fold(self.hash, |hash, &unit| step(hash, unit));
    }

    /// Current hash value.
    #[inline]
    pub const fn finish_u32(&self) -> u32 {
        self.hash
    }
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Djb2Hasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.write_units(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.hash)
    }
}

/// [`BuildHasher`] producing fresh [`Djb2Hasher`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildDjb2Hasher;

impl BuildHasher for BuildDjb2Hasher {
    type Hasher = Djb2Hasher;

    fn build_hasher(&self) -> Djb2Hasher {
        Djb2Hasher::new()
    }
}
