//! Random sources for placeholder selection.
//!
//! Picking among same-letter placeholders is the only non-deterministic step
//! in the pipeline, so it goes through a trait the caller hands in. Tests and
//! reproducible exports pass [`FirstCandidate`] or a seeded [`RngSource`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one index out of `len` candidates.
pub trait RandomSource {
    /// Return a value in `0..len`, or 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// Seeded from OS entropy. Repeated matches on the same name may differ.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Same seed, same placeholder choices.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0.gen_range(0..len)
    }
}

/// Always picks the first candidate in table order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl RandomSource for FirstCandidate {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}
