use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::validation;
use crate::Error;

/// Largest gap between consecutive entries of a monotonic sequence.
pub const DEFAULT_MAX_STEP: u64 = 5;

/// `n` positions, each independently a tree with probability `p`.
pub fn binary_sequence<R: Rng + ?Sized>(rng: &mut R, n: usize, p: f64) -> Result<Vec<bool>, Error> {
    validation::probability(p)?;
    Ok((0..n).map(|_| rng.gen_bool(p)).collect())
}

/// Strictly increasing sequence of length `n`: starts from 0 and adds a
/// uniform step in `[1, max_step]` for every entry, so the first entry is
/// already at least 1.
pub fn monotonic_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    max_step: u64,
) -> Result<Vec<u64>, Error> {
    validation::max_step(max_step)?;
    let mut cur = 0u64;
    Ok((0..n)
        .map(|_| {
            cur += rng.gen_range(1..=max_step);
            cur
        })
        .collect())
}

/// Seed for the process generator, taken from the wall clock in nanoseconds.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
