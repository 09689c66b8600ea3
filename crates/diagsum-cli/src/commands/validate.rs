use crate::cli::ValidateArgs;
use crate::error::{CliError, Result};
use diagsum::core::io::{text::DigitGridFile, traits::GridFile};
use tracing::info;

pub fn run(args: ValidateArgs) -> Result<()> {
    info!("Validating grid file {:?}", &args.input);
    let grid = DigitGridFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;

    println!(
        "✓ {} is a valid {}-by-{} grid.",
        args.input.display(),
        grid.n(),
        grid.n()
    );
    Ok(())
}
