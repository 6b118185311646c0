//! The two algorithms under measurement, the random inputs they run on,
//! and the single-run timers wrapped around them.
//!
//! - [`greedy::min_removals`]: fewest trees to cut so that no `k`
//!   consecutive trees remain.
//! - [`search::last_at_most`]: rightmost index whose value does not exceed
//!   a threshold in a sorted slice.
//!
//! Every source of randomness is an explicit `&mut impl Rng`, so callers
//! decide how the generator is seeded.

pub mod generate;
pub mod greedy;
pub mod search;
pub mod timing;
pub mod validation;

pub use generate::{binary_sequence, clock_seed, monotonic_sequence, DEFAULT_MAX_STEP};
pub use greedy::{min_removals, GreedyResult};
pub use search::{last_at_most, SearchResult};
pub use timing::{time_greedy, time_search, Measurement, Timed};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("run length k must be at least 1, got {0}")]
    InvalidRunLength(usize),
    #[error("tree probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("maximum step must be at least 1, got {0}")]
    InvalidStep(u64),
}
