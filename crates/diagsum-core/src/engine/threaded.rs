use crate::core::grid::Grid;
use crate::engine::output::SharedOutput;
use crate::engine::partition::partition_rows;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scan::scan_rows;
use std::num::NonZeroUsize;
use std::ops::Range;
use std::thread;
use tracing::{debug, trace};

/// Everything one worker needs to scan its share of starting rows.
struct WorkerTask<'a> {
    worker: usize,
    input: &'a Grid,
    output: &'a SharedOutput,
    target: u64,
    rows: Range<usize>,
}

impl WorkerTask<'_> {
    fn run(self, reporter: &ProgressReporter) {
        trace!(worker = self.worker, rows = ?self.rows, "Worker scanning rows.");
        scan_rows(self.input, self.output, self.target, self.rows.clone());
        reporter.report(Progress::PartitionFinished {
            worker: self.worker,
            rows: self.rows,
        });
    }
}

/// Computes the diagonal-sum grid with `workers` row-partitioned threads.
///
/// With a single worker the scan runs on the calling thread. Otherwise every partition
/// gets its own scoped thread and the call returns only after all of them have been
/// joined, so no partial result is ever visible. The worker count is not bounded here.
pub fn diagonal_sums(input: &Grid, target_sum: u64, workers: NonZeroUsize) -> Grid {
    diagonal_sums_with_progress(input, target_sum, workers, &ProgressReporter::new())
}

/// Same as [`diagonal_sums`], reporting each finished partition to `reporter`.
pub fn diagonal_sums_with_progress(
    input: &Grid,
    target_sum: u64,
    workers: NonZeroUsize,
    reporter: &ProgressReporter,
) -> Grid {
    let output = SharedOutput::zeroed(input.n());
    let partitions = partition_rows(input.n(), workers);
    debug!(
        n = input.n(),
        workers = workers.get(),
        ?partitions,
        "Partitioned starting rows."
    );

    reporter.report(Progress::ScanStart {
        partitions: partitions.len() as u64,
    });

    let tasks = partitions
        .into_iter()
        .enumerate()
        .map(|(worker, rows)| WorkerTask {
            worker,
            input,
            output: &output,
            target: target_sum,
            rows,
        });

    if workers.get() == 1 {
        tasks.for_each(|task| task.run(reporter));
    } else {
        thread::scope(|s| {
            for task in tasks {
                s.spawn(move || task.run(reporter));
            }
        });
    }

    reporter.report(Progress::ScanFinish);
    output.into_grid()
}
