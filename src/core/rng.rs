//! Deterministic random number generation for battle simulation.
//!
//! Every random decision in the crate draws from an explicitly passed
//! `BattleRng`; nothing reads a process-wide generator. A stream is fully
//! determined by its seed, and `fork` splits off a child stream so deck
//! sampling and pill choices never consume each other's draws.
//!
//! ```
//! use rivals_datagen::core::BattleRng;
//!
//! let mut rng = BattleRng::new(42);
//! let mut pills_rng = rng.fork();
//!
//! let mut again = BattleRng::new(42);
//! let mut pills_again = again.fork();
//!
//! assert_eq!(pills_rng.gen_range_inclusive(0..=5), pills_again.gen_range_inclusive(0..=5));
//! ```

use std::f64::consts::TAU;
use std::ops::RangeInclusive;

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BattleRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off a child stream seeded from this one's next draw.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.gen())
    }

    /// Uniform integer in an inclusive range.
    pub fn gen_range_inclusive(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// `true` with the given probability.
    ///
    /// Probabilities outside `[0, 1]` saturate; NaN never fires.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        if probability.is_nan() || probability <= 0.0 {
            false
        } else if probability >= 1.0 {
            true
        } else {
            self.inner.gen_bool(probability)
        }
    }

    /// Normal sample (Box-Muller).
    pub fn gen_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        // 1 - u keeps the log argument in (0, 1].
        let u1 = 1.0 - self.inner.gen::<f64>();
        let u2 = self.inner.gen::<f64>();
        mean + std_dev * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }

    /// Poisson sample by multiplying uniforms (Knuth). Meant for small means;
    /// a negative or NaN mean yields 0.
    pub fn gen_poisson(&mut self, mean: f64) -> u32 {
        if mean.is_nan() || mean <= 0.0 {
            return 0;
        }
        let limit = (-mean).exp();
        let mut count = 0;
        let mut product = self.inner.gen::<f64>();
        while product > limit {
            count += 1;
            product *= self.inner.gen::<f64>();
        }
        count
    }

    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Pick `amount` distinct indices from `0..len`, in draw order.
    ///
    /// Returns `None` when `amount > len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Option<Vec<usize>> {
        if amount > len {
            return None;
        }
        Some(rand::seq::index::sample(&mut self.inner, len, amount).into_vec())
    }

    /// Index drawn in proportion to `weights`.
    ///
    /// `None` if the weights are empty, all zero, or contain a negative or
    /// non-finite value.
    pub fn choose_weighted(&mut self, weights: &[f32]) -> Option<usize> {
        let dist = WeightedIndex::new(weights).ok()?;
        Some(dist.sample(&mut self.inner))
    }
}
