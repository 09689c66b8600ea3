use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Worker count must be at least 1")]
    ZeroWorkers,
    #[error("Unknown strategy '{0}'. Expected 'threads' or 'data-parallel'")]
    UnknownStrategy(String),
}

/// How the scan is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Rows are split into contiguous partitions, one scoped OS thread per partition.
    #[default]
    Threads,
    /// Every starting cell is an independent task on the work-stealing pool.
    DataParallel,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Threads => write!(f, "threads"),
            Strategy::DataParallel => write!(f, "data-parallel"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "threads" => Ok(Strategy::Threads),
            "data-parallel" => Ok(Strategy::DataParallel),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub target_sum: u64,
    /// Only consulted by [`Strategy::Threads`].
    pub workers: NonZeroUsize,
    pub strategy: Strategy,
}

#[derive(Default)]
pub struct EngineConfigBuilder {
    target_sum: Option<u64>,
    workers: Option<usize>,
    strategy: Option<Strategy>,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_sum(mut self, sum: u64) -> Self {
        self.target_sum = Some(sum);
        self
    }
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let target_sum = self
            .target_sum
            .ok_or(ConfigError::MissingParameter("target_sum"))?;
        let workers =
            NonZeroUsize::new(self.workers.unwrap_or(1)).ok_or(ConfigError::ZeroWorkers)?;
        Ok(EngineConfig {
            target_sum,
            workers,
            strategy: self.strategy.unwrap_or_default(),
        })
    }
}
