//! Deterministic pseudo-random generation for evidence synthesis.
//!
//! Seeds come from a BLAKE3 digest of the record identifiers, so the
//! same asset+component+kind always yields the same sequence regardless
//! of platform or process.

use crate::types::RecordKind;

/// A seedable, reproducible random sequence.
pub trait DeterministicRng {
    fn from_seed(seed: u64) -> Self
    where
        Self: Sized;

    fn next_u64(&mut self) -> u64;

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[0, n)`; `0` when `n == 0`.
    fn below(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        self.next_u64() % n
    }

    /// Uniform float in `[lo, hi)`.
    fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Index chosen with probability proportional to `weights`.
    fn weighted_index(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if weights.is_empty() || total <= 0.0 {
            return 0;
        }
        let mut roll = self.next_f64() * total;
        for (i, w) in weights.iter().enumerate() {
            if roll < *w {
                return i;
            }
            roll -= w;
        }
        weights.len() - 1
    }

    /// Uniformly chosen element; `None` for an empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.below(items.len() as u64) as usize)
    }
}

/// 64-bit linear congruential generator (Knuth MMIX constants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
    const INCREMENT: u64 = 1_442_695_040_888_963_407;
}

impl DeterministicRng for Lcg {
    fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        // Low bits of an LCG are weak; fold the high half down.
        self.state ^ (self.state >> 33)
    }
}

/// Stable seed for an asset+component+kind triple.
pub fn seed_for(asset_id: &str, component_id: &str, kind: RecordKind) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(asset_id.as_bytes());
    hasher.update(&[0]);
    hasher.update(component_id.as_bytes());
    hasher.update(&[0]);
    hasher.update(kind.as_str().as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
