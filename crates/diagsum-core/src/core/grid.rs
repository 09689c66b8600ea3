use std::fmt;
use thiserror::Error;

/// Largest value a single cell may hold.
pub const MAX_DIGIT: u8 = 9;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GridError {
    #[error("Grid must contain at least one row")]
    Empty,
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Cell ({row}, {col}) holds {value}, which is not a single decimal digit")]
    InvalidDigit { row: usize, col: usize, value: u8 },
}

/// A square matrix of single-digit cells.
///
/// Cells are stored in one row-major buffer of length `n * n`. Every constructor
/// guarantees `n >= 1` and that each cell lies in `0..=9`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    /// Side length.
    n: usize,
    /// Row-major cell storage.
    cells: Vec<u8>,
}

impl Grid {
    /// Creates an `n`-by-`n` grid with every cell set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] if `n` is zero.
    pub fn zeroed(n: usize) -> Result<Self, GridError> {
        if n == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            n,
            cells: vec![0; n * n],
        })
    }

    /// Builds a grid from a list of rows.
    ///
    /// The side length is taken from the number of rows; every row must have exactly that
    /// many cells.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, if any row has the wrong width, or if a cell
    /// holds a value above [`MAX_DIGIT`].
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let n = rows.len();
        if n == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n {
                return Err(GridError::RaggedRow {
                    row,
                    expected: n,
                    found: values.len(),
                });
            }
            if let Some(col) = values.iter().position(|&v| v > MAX_DIGIT) {
                return Err(GridError::InvalidDigit {
                    row,
                    col,
                    value: values[col],
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self { n, cells })
    }

    /// Wraps an already validated row-major buffer.
    pub(crate) fn from_cells_unchecked(n: usize, cells: Vec<u8>) -> Self {
        debug_assert!(n >= 1 && cells.len() == n * n);
        Self { n, cells }
    }

    /// Returns the side length of the grid.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(col < self.n, "column {col} out of bounds for grid of side {}", self.n);
        self.cells[row * self.n + col]
    }

    /// Returns a single row as a slice.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.n;
        &self.cells[start..start + self.n]
    }

    /// Returns an iterator over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.n)
    }

    /// Returns the raw row-major cell buffer.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Counts the cells that hold a non-zero value.
    pub fn count_nonzero(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid({}x{}) [", self.n, self.n)?;
        for row in self.rows() {
            write!(f, "  ")?;
            for value in row {
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
