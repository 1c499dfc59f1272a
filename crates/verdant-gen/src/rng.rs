//! Seeded random streams.
//!
//! A [`RandomStream`] wraps a ChaCha8 generator so that the same seed yields
//! the same sequence on every platform. Independent sub-streams are derived
//! by hashing the parent seed with a stream id, which lets per-worker streams
//! stay reproducible.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Derive the seed of sub-stream `stream` from a parent seed.
///
/// Uses SipHash (via std's `DefaultHasher`) to combine the two into a
/// well-distributed u64.
pub fn derive_stream_seed(seed: u64, stream: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    stream.hash(&mut hasher);
    hasher.finish()
}

/// Deterministic source of uniform scalars, points and indices.
#[derive(Clone, Debug)]
pub struct RandomStream {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomStream {
    /// Create a stream from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The seed this stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream derived from this stream's seed. Does not consume
    /// values from `self`.
    pub fn fork(&self, stream: u64) -> Self {
        Self::new(derive_stream_seed(self.seed, stream))
    }

    /// Uniform scalar in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Uniform point in `[0, 1)²`.
    pub fn next_vec2(&mut self) -> Vec2 {
        let x = self.next_f32();
        let y = self.next_f32();
        Vec2::new(x, y)
    }

    /// Uniform index in `[0, n)`. `n` must be non-zero.
    pub fn next_index(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }

    /// Uniform scalar in `[lo, hi)`; `lo` when the range is empty.
    pub fn next_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}
