//! Benchmark input fixtures.
//!
//! Code sequences are drawn from a seeded `StdRng`, so every run of a
//! benchmark decodes the same codes in the same order.

use crate::decode::{DecodeError, MAX_STATUS, MIN_STATUS};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_SAMPLE_LEN: usize = 10_000;

/// Inclusive range of codes to draw from.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRange {
    pub start: i32,
    pub end: i32,
}

impl CodeRange {
    pub const fn new(start: i32, end: i32) -> Self {
        CodeRange { start, end }
    }

    /// Every recognised status code.
    ///
    pub const fn valid() -> Self {
        CodeRange::new(MIN_STATUS, MAX_STATUS)
    }

    /// Valid codes plus five unrecognised codes on either side.
    ///
    pub const fn with_invalid() -> Self {
        CodeRange::new(MIN_STATUS - 5, MAX_STATUS + 5)
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of codes in the range.
    ///
    pub fn width(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        (i64::from(self.end) - i64::from(self.start) + 1) as u64
    }

    pub fn to_range(self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    fn check(&self) -> Result<(), DecodeError> {
        if self.is_empty() {
            return Err(DecodeError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Return an endless seeded stream of codes drawn uniformly from `range`.
///
pub fn code_stream(seed: u64, range: CodeRange) -> Result<impl Iterator<Item = i32>, DecodeError> {
    range.check()?;
    let dist = Uniform::new_inclusive(range.start, range.end);
    Ok(StdRng::seed_from_u64(seed).sample_iter(dist))
}

/// Return `len` seeded codes drawn uniformly from `range`.
///
pub fn random_codes(seed: u64, len: usize, range: CodeRange) -> Result<Vec<i32>, DecodeError> {
    if len == 0 {
        return Err(DecodeError::EmptySample);
    }
    Ok(code_stream(seed, range)?.take(len).collect())
}

/// Replays a fixed code sample in a loop.
///
#[derive(Clone, Debug)]
pub struct CodeCycle {
    codes: Vec<i32>,
    index: usize,
}

impl CodeCycle {
    pub fn new(codes: Vec<i32>) -> Result<Self, DecodeError> {
        if codes.is_empty() {
            return Err(DecodeError::EmptySample);
        }
        Ok(CodeCycle { codes, index: 0 })
    }

    /// Return the default sample: 10 000 valid codes seeded with 42.
    ///
    pub fn standard() -> Result<Self, DecodeError> {
        Self::new(random_codes(DEFAULT_SEED, DEFAULT_SAMPLE_LEN, CodeRange::valid())?)
    }

    /// Return the next code, wrapping around at the end of the sample.
    ///
    pub fn next_code(&mut self) -> i32 {
        let code = self.codes[self.index % self.codes.len()];
        self.index = self.index.wrapping_add(1);
        code
    }

    pub fn codes(&self) -> &[i32] {
        &self.codes
    }
}

/// Sweeps `0..=MAX_STATUS` in order, forever.
///
#[derive(Clone, Debug, Default)]
pub struct SequentialCodes {
    next: i32,
}

impl Iterator for SequentialCodes {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let code = self.next;
        self.next = (self.next + 1) % (MAX_STATUS + 1);
        Some(code)
    }
}
