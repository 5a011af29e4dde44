//! Random sources used to simulate payment latency and outcomes.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A fair die with a caller-chosen number of faces.
pub trait RandomSource: Send + Sync {
    /// Rolls a value in `1..=faces`. A zero-faced die always rolls 1.
    fn roll(&self, faces: u32) -> u32;
}

/// Draws from the thread-local generator on every roll.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn roll(&self, faces: u32) -> u32 {
        rand::thread_rng().gen_range(1..=faces.max(1))
    }
}

/// Reproducible source backed by a seeded `StdRng`.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn roll(&self, faces: u32) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(1..=faces.max(1))
    }
}
