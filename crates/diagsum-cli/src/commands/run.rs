use crate::cli::RunArgs;
use crate::config::{PartialRunConfig, RunConfig};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use diagsum::{
    core::{
        grid::Grid,
        io::{text::DigitGridFile, traits::GridFile},
    },
    engine::{config::EngineConfig, progress::ProgressReporter},
    workflows,
};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

pub fn run(args: RunArgs) -> Result<()> {
    let partial_config = PartialRunConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;
    debug!("Resolved run configuration: {:?}", &config);

    execute(&config)
}

fn execute(config: &RunConfig) -> Result<()> {
    info!("Loading input grid from {:?}", &config.input_path);
    let input = read_grid(&config.input_path)?;

    let target_sum = config.engine.target_sum;
    let threads = config.engine.workers.get();
    println!(
        "Computing the diagonal sums equal to {} in a {}-by-{} grid using {} thread(s).",
        target_sum,
        input.n(),
        input.n(),
        threads
    );

    let (output, elapsed) = timed_run(&input, &config.engine);
    println!(
        "Elapsed time for computing the diagonal sums using {} thread(s): {:.6} seconds.",
        threads, elapsed
    );

    if let Some(peer_path) = &config.peer_output_path {
        println!("\nRunning data-parallel version...");
        let (peer_output, peer_elapsed) = timed_run(&input, &config.peer_engine());
        println!(
            "Elapsed time for computing the diagonal sums using the data-parallel strategy: {:.6} seconds.",
            peer_elapsed
        );

        if peer_output != output {
            warn!("Data-parallel output differs from the threaded output.");
            println!("Warning: the data-parallel grid does not match the threaded grid.");
        }

        println!(
            "Data-parallel: Writing the diagonal sums equal to {} to the file {}.",
            target_sum,
            peer_path.display()
        );
        write_grid(&peer_output, peer_path)?;
    }

    println!(
        "Writing the diagonal sums equal to {} to the file {}.",
        target_sum,
        config.output_path.display()
    );
    write_grid(&output, &config.output_path)?;

    Ok(())
}

fn timed_run(input: &Grid, engine: &EngineConfig) -> (Grid, f64) {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let start = Instant::now();
    let output = workflows::diagonal_sums::run(input, engine, &reporter);
    let elapsed = start.elapsed().as_secs_f64();

    info!(
        strategy = %engine.strategy,
        elapsed_secs = elapsed,
        "Engine run finished."
    );
    (output, elapsed)
}

fn read_grid(path: &Path) -> Result<Grid> {
    DigitGridFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

fn write_grid(grid: &Grid, path: &Path) -> Result<()> {
    info!("Writing output grid to {:?}", path);
    DigitGridFile::write_to_path(grid, path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}
