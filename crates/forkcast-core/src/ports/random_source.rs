//! RandomSource port - randomness as an injected capability.
//!
//! The engine never reaches for an ambient RNG: it draws from whatever
//! source it was constructed with. Production code injects
//! [`ThreadRngSource`]; tests inject [`SeededSource`] for reproducible
//! distributions or [`ScriptedSource`] to force a specific branch.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::fmt;

/// A uniform random source over `[0, 1)`.
///
/// This is the whole randomness contract the engine needs: one float per
/// draw, uniform, exclusive of 1.0. Fairness is statistical, not
/// adversarial-resistant, so any decent PRNG qualifies.
pub trait RandomSource {
    /// The next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Production source backed by the thread-local RNG.
pub struct ThreadRngSource {
    rng: ThreadRng,
}

impl ThreadRngSource {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadRngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThreadRngSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadRngSource").finish_non_exhaustive()
    }
}

impl RandomSource for ThreadRngSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Deterministic source seeded from a `u64`.
///
/// Two `SeededSource`s with the same seed produce the same draw sequence,
/// which is what the statistical tests rely on.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Replays a fixed sequence of values, then returns 0.0 once exhausted.
///
/// Used in tests to force a particular coin flip or list index. Script
/// enough values for the branch under test; the 0.0 tail is only a
/// backstop.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values.get(self.next).copied().unwrap_or(0.0);
        self.next += 1;
        value
    }
}
