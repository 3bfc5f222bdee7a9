//! Deterministic generation RNG.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness. Every
//! draw in the pipeline goes through a [`GenRng`] (or a sub-RNG derived
//! from one position key) so that identical seeds produce identical
//! layouts.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use xxhash_rust::xxh32::xxh32;

/// Deterministic RNG for all generation randomness.
///
/// Passed `&mut` down the pipeline; `rng.0` is a `ChaCha8Rng` implementing
/// `rand::Rng`.
pub struct GenRng(pub ChaCha8Rng);

impl GenRng {
    /// Create a new `GenRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Derive an independent RNG from the master seed and a two-component
/// position key, without touching the ambient stream.
///
/// Used for DISTRICTS super-cell coherence (key = super-cell coords) and
/// organic road phases (key = road index + axis). The xxh32 round
/// decorrelates neighboring keys; the master seed folds in on both halves
/// so different cities diverge everywhere.
pub fn sub_rng(seed: u64, a: u32, b: u32) -> ChaCha8Rng {
    let mut buf = [0u8; 8];
    buf[..4].copy_from_slice(&a.to_le_bytes());
    buf[4..].copy_from_slice(&b.to_le_bytes());
    let lo = xxh32(&buf, seed as u32);
    let hi = xxh32(&buf, (seed >> 32) as u32 ^ 0x9e37_79b9);
    ChaCha8Rng::seed_from_u64(seed ^ ((hi as u64) << 32 | lo as u64))
}
