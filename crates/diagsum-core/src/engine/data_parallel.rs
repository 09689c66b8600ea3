//! Peer execution path with one independent task per starting cell.
//!
//! This mirrors how an accelerator kernel would assign one thread to each cell of the
//! grid. Its output is identical to [`threaded::diagonal_sums`](super::threaded::diagonal_sums).

use crate::core::grid::Grid;
use crate::engine::output::SharedOutput;
use crate::engine::scan::scan_cell;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the diagonal-sum grid by scanning all `n * n` starting cells in parallel.
pub fn diagonal_sums(input: &Grid, target_sum: u64) -> Grid {
    let n = input.n();
    let output = SharedOutput::zeroed(n);

    #[cfg(not(feature = "parallel"))]
    let iterator = 0..n * n;

    #[cfg(feature = "parallel")]
    let iterator = (0..n * n).into_par_iter();

    debug!(cells = n * n, "Dispatching per-cell scan tasks.");
    iterator.for_each(|idx| scan_cell(input, &output, target_sum, idx / n, idx % n));

    output.into_grid()
}
