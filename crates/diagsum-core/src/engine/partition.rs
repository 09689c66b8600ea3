use std::num::NonZeroUsize;
use std::ops::Range;

/// Splits the starting rows `[0, n)` into `workers` contiguous ranges.
///
/// Every range holds `n / workers` rows except the last, which absorbs the remainder.
/// When `workers > n` the leading ranges are empty (`start == end`) and the last one
/// covers the whole grid.
pub fn partition_rows(n: usize, workers: NonZeroUsize) -> Vec<Range<usize>> {
    let workers = workers.get();
    let rows_per_worker = n / workers;

    (0..workers)
        .map(|worker| {
            let start = worker * rows_per_worker;
            let end = if worker == workers - 1 {
                n
            } else {
                (worker + 1) * rows_per_worker
            };
            start..end
        })
        .collect()
}
