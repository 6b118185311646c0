use tracing::trace;

use crate::validation;
use crate::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GreedyResult {
    pub removals: u64,
    /// Elements examined.
    pub operations: u64,
}

/// Minimum number of trees to remove so that no `k` consecutive trees remain.
///
/// Scans left to right keeping the length of the current run of trees. The
/// moment a run reaches `k`, that tree is removed and the run starts over.
/// Cutting any earlier tree of the run can only leave a longer tail to deal
/// with, so taking the k-th is optimal.
///
/// Returns `Error::InvalidRunLength` when `k == 0`.
pub fn min_removals(trees: &[bool], k: usize) -> Result<GreedyResult, Error> {
    validation::run_length(k)?;

    let mut run = 0usize;
    let mut removals = 0u64;
    let mut operations = 0u64;
    for (i, &tree) in trees.iter().enumerate() {
        operations += 1;
        if tree {
            run += 1;
            if run == k {
                trace!(position = i, "remove");
                removals += 1;
                run = 0;
            }
        } else {
            run = 0;
        }
    }

    Ok(GreedyResult { removals, operations })
}
