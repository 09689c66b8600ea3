use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "diagsum - find every diagonal run of digits in a square grid that adds up to a target sum.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the diagonal sums of a grid and write the matching cells.
    Run(RunArgs),
    /// Check that a grid file is well formed without computing anything.
    Validate(ValidateArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the input grid file (n lines of n digits).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output grid file. Created or overwritten.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Target sum a diagonal run must reach. Overrides `engine.target-sum`.
    #[arg(short, long = "sum", value_name = "INT")]
    pub sum: Option<u64>,

    /// Number of worker threads, between 1 and 3. Overrides `engine.threads`.
    #[arg(short, long, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Also run the data-parallel peer strategy and write its grid to this path.
    /// Overrides `output.peer-output`.
    #[arg(long, value_name = "PATH")]
    pub peer_output: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the grid file to check.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,
}
