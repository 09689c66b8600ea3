use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use diagsum::engine::config::{EngineConfig, EngineConfigBuilder, Strategy};
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Worker counts accepted from the command line or the configuration file.
pub const SUPPORTED_THREADS: RangeInclusive<usize> = 1..=3;

const DEFAULT_THREADS: usize = 1;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialEngineConfig {
    #[serde(rename = "target-sum")]
    target_sum: Option<u64>,
    threads: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    #[serde(rename = "peer-output")]
    peer_output: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRunConfig {
    engine: Option<PartialEngineConfig>,
    output: Option<PartialOutputConfig>,
}

/// Fully resolved settings for one `run` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub peer_output_path: Option<PathBuf>,
    pub engine: EngineConfig,
}

impl RunConfig {
    /// Engine settings for the data-parallel peer run.
    pub fn peer_engine(&self) -> EngineConfig {
        EngineConfig {
            strategy: Strategy::DataParallel,
            ..self.engine.clone()
        }
    }
}

impl PartialRunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::Config(format!(
            "Failed to parse configuration file '{}': {}",
            path.display(),
            e
        )))
    }

    /// Loads the file named by `--config`, or starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(self, args: &RunArgs) -> Result<RunConfig> {
        let engine = self.engine.unwrap_or_default();
        let output = self.output.unwrap_or_default();

        let target_sum = args.sum.or(engine.target_sum).ok_or_else(|| {
            CliError::Config(
                "A target sum is required either via `--sum` or `engine.target-sum`.".to_string(),
            )
        })?;

        let threads = args
            .threads
            .or(engine.threads)
            .unwrap_or(DEFAULT_THREADS);
        if !SUPPORTED_THREADS.contains(&threads) {
            return Err(CliError::Argument(format!(
                "threads must be between {} and {} (inclusive), got {}",
                SUPPORTED_THREADS.start(),
                SUPPORTED_THREADS.end(),
                threads
            )));
        }

        let engine = EngineConfigBuilder::new()
            .target_sum(target_sum)
            .workers(threads)
            .strategy(Strategy::Threads)
            .build()?;

        Ok(RunConfig {
            input_path: args.input.clone(),
            output_path: args.output.clone(),
            peer_output_path: args.peer_output.clone().or(output.peer_output),
            engine,
        })
    }
}
