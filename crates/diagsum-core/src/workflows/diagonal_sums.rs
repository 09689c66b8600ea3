use crate::core::grid::Grid;
use crate::engine::config::{EngineConfig, Strategy};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::{data_parallel, threaded};
use tracing::{info, instrument};

/// Runs the diagonal-sum search described by `config` and returns the output grid.
///
/// The returned grid has the same side length as `input`. Cells belonging to at least one
/// diagonal run whose sum equals `config.target_sum` hold their input value; every other
/// cell is zero. The result does not depend on the strategy or the worker count.
#[instrument(skip_all, name = "diagonal_sums_workflow", fields(n = input.n(), strategy = %config.strategy))]
pub fn run(input: &Grid, config: &EngineConfig, reporter: &ProgressReporter) -> Grid {
    reporter.report(Progress::PhaseStart {
        name: "Scanning diagonals",
    });
    info!(
        target_sum = config.target_sum,
        workers = config.workers.get(),
        "Computing diagonal sums."
    );

    let output = match config.strategy {
        Strategy::Threads => threaded::diagonal_sums_with_progress(
            input,
            config.target_sum,
            config.workers,
            reporter,
        ),
        Strategy::DataParallel => {
            reporter.report(Progress::ScanStart { partitions: 1 });
            let output = data_parallel::diagonal_sums(input, config.target_sum);
            reporter.report(Progress::PartitionFinished {
                worker: 0,
                rows: 0..input.n(),
            });
            reporter.report(Progress::ScanFinish);
            output
        }
    };

    info!(
        matched_cells = output.count_nonzero(),
        "Diagonal sum computation complete."
    );
    reporter.report(Progress::PhaseFinish);

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::EngineConfigBuilder;
    use std::sync::Mutex;

    fn config(target: u64, workers: usize, strategy: Strategy) -> EngineConfig {
        EngineConfigBuilder::new()
            .target_sum(target)
            .workers(workers)
            .strategy(strategy)
            .build()
            .unwrap()
    }

    #[test]
    fn strategies_produce_identical_output() {
        let input: Grid = "2718\n2818\n2845\n9045\n".parse().unwrap();
        let reporter = ProgressReporter::new();
        for target in [4, 9, 10, 17] {
            let threaded = run(&input, &config(target, 2, Strategy::Threads), &reporter);
            let peer = run(&input, &config(target, 2, Strategy::DataParallel), &reporter);
            assert_eq!(threaded, peer, "target={target}");
        }
    }

    #[test]
    fn reports_phase_boundaries_around_the_scan() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        let input: Grid = "11\n11\n".parse().unwrap();
        let output = run(&input, &config(2, 1, Strategy::Threads), &reporter);
        drop(reporter);

        assert_eq!(output.to_string(), "11\n11\n");
        assert_eq!(
            events.into_inner().unwrap(),
            vec![
                Progress::PhaseStart {
                    name: "Scanning diagonals"
                },
                Progress::ScanStart { partitions: 1 },
                Progress::PartitionFinished {
                    worker: 0,
                    rows: 0..2
                },
                Progress::ScanFinish,
                Progress::PhaseFinish,
            ]
        );
    }
}
