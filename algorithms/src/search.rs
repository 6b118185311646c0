#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Rightmost index whose value is `<= threshold`, if any.
    pub index: Option<usize>,
    /// Comparisons against the threshold.
    pub queries: u64,
    pub operations: u64,
}

/// Binary search for the last element of `values` not exceeding `threshold`.
///
/// `values` must be sorted in non-decreasing order. On equal values the
/// search keeps moving right, so the rightmost match wins.
pub fn last_at_most<T: Ord>(values: &[T], threshold: &T) -> SearchResult {
    // Half-open [lo, hi) so the bounds never underflow.
    let mut lo = 0usize;
    let mut hi = values.len();
    let mut index = None;
    let mut queries = 0u64;
    let mut operations = 0u64;

    while lo < hi {
        operations += 1;
        let mid = lo + (hi - lo) / 2;
        queries += 1;
        if values[mid] <= *threshold {
            index = Some(mid);
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    SearchResult { index, queries, operations }
}
