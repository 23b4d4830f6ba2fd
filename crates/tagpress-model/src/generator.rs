//! Random code generation.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::code::{CODE_LENGTH, CODE_SPACE, Code};
use crate::error::GenerationError;

/// Draws codes uniformly at random without replacement from the digits `0..=9`.
///
/// The random source is a type parameter so tests can inject a seeded RNG.
#[derive(Debug, Clone)]
pub struct CodeGenerator<R = StdRng> {
    rng: R,
}

impl CodeGenerator<StdRng> {
    /// Generator seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator for reproducible runs and tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for CodeGenerator<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> CodeGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one code. Digits keep the order in which they were sampled.
    pub fn generate(&mut self) -> Code {
        let mut digits = [0u8; CODE_LENGTH];
        let sampled = index::sample(&mut self.rng, 10, CODE_LENGTH);
        for (slot, digit) in digits.iter_mut().zip(sampled.iter()) {
            *slot = digit as u8;
        }
        // index::sample yields distinct indices below 10
        Code::from_sampled(digits)
    }

    /// Draw a code not yet present in `issued` and record it there.
    pub fn generate_unique(&mut self, issued: &mut IssuedCodes) -> Result<Code, GenerationError> {
        if issued.is_exhausted() {
            return Err(GenerationError::CodeSpaceExhausted {
                issued: issued.len(),
            });
        }
        loop {
            let code = self.generate();
            if issued.insert(code) {
                return Ok(code);
            }
        }
    }
}

/// Codes issued during the current run.
///
/// Never persisted: uniqueness is scoped to one process lifetime.
#[derive(Debug, Clone, Default)]
pub struct IssuedCodes {
    codes: HashSet<Code>,
}

impl IssuedCodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a code. Returns `false` if it was already issued.
    pub fn insert(&mut self, code: Code) -> bool {
        self.codes.insert(code)
    }

    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// True once every possible code has been issued.
    pub fn is_exhausted(&self) -> bool {
        self.codes.len() >= CODE_SPACE
    }
}
