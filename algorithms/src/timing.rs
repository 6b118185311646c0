use std::time::{Duration, Instant};

use rand::Rng;
use tracing::debug;

use crate::generate::{binary_sequence, monotonic_sequence};
use crate::greedy::{min_removals, GreedyResult};
use crate::search::{last_at_most, SearchResult};
use crate::Error;

/// One trial: what the algorithm returned and how long the call took.
#[derive(Copy, Clone, Debug)]
pub struct Timed<R> {
    pub result: R,
    pub elapsed: Duration,
}

/// What gets averaged across trials.
pub trait Measurement {
    /// Self-reported cost: element visits or comparisons.
    fn ops(&self) -> u64;
    /// Result value written to the `avg_result` column.
    fn value(&self) -> f64;
}

impl Measurement for GreedyResult {
    fn ops(&self) -> u64 {
        self.operations
    }

    fn value(&self) -> f64 {
        self.removals as f64
    }
}

impl Measurement for SearchResult {
    fn ops(&self) -> u64 {
        self.queries
    }

    /// A miss counts as -1.
    fn value(&self) -> f64 {
        self.index.map_or(-1.0, |i| i as f64)
    }
}

/// Greedy remover on a fresh forest of `n` positions with tree probability `p`.
pub fn time_greedy<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    k: usize,
    p: f64,
) -> Result<Timed<GreedyResult>, Error> {
    let trees = binary_sequence(rng, n, p)?;

    let start = Instant::now();
    let result = min_removals(&trees, k)?;
    let elapsed = start.elapsed();

    debug!(n, removals = result.removals, elapsed_ns = elapsed.as_nanos() as u64, "greedy_trial");
    Ok(Timed { result, elapsed })
}

/// Threshold search on a fresh monotonic sequence of length `n`, with the
/// threshold drawn uniformly from `[0, last value]`.
pub fn time_search<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    max_step: u64,
) -> Result<Timed<SearchResult>, Error> {
    let ages = monotonic_sequence(rng, n, max_step)?;
    let threshold = rng.gen_range(0..=ages.last().copied().unwrap_or(0));

    let start = Instant::now();
    let result = last_at_most(&ages, &threshold);
    let elapsed = start.elapsed();

    debug!(n, threshold, index = ?result.index, queries = result.queries, "search_trial");
    Ok(Timed { result, elapsed })
}
