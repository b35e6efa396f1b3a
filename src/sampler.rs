//! Parameter drawing and the per-job random source.
//!
//! Every render job gets its own seeded rng derived from the batch seed and
//! the job's (engine, instance) coordinates, so any single sound from a
//! corpus can be re-rendered in isolation and jobs can run on any thread in
//! any order without sharing generator state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Params;

/// Four independent uniform draws in [0, 1).
pub fn draw_params(rng: &mut impl Rng) -> Params {
  Params::new(rng.gen(), rng.gen(), rng.gen(), rng.gen())
}

/// Mix (batch seed, engine index, instance index) into one rng.
/// splitmix64 finalizer over odd-constant-scaled coordinates keeps nearby
/// jobs from producing correlated streams.
pub fn job_rng(batch_seed: u64, engine_index: usize, instance: usize) -> StdRng {
  let mut z = batch_seed
    ^ (engine_index as u64).wrapping_mul(0x9E3779B97F4A7C15)
    ^ (instance as u64).wrapping_mul(0xBF58476D1CE4E5B9);
  z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
  z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
  z ^= z >> 31;
  StdRng::seed_from_u64(z)
}

/// The seed for a whole batch: the configured one, or a fresh draw.
pub fn batch_seed(configured: Option<u64>) -> u64 {
  configured.unwrap_or_else(|| rand::thread_rng().gen())
}
