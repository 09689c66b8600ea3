use crate::core::grid::Grid;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing grid file formats.
///
/// Implementors handle the format-specific parsing and serialization; the path-based
/// helpers take care of opening, buffering, and flushing files.
pub trait GridFile {
    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads a grid from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content is not a valid grid.
    fn read_from(reader: &mut impl BufRead) -> Result<Grid, Self::Error>;

    /// Writes a grid to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(grid: &Grid, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a grid from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Grid, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a grid to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(grid, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
