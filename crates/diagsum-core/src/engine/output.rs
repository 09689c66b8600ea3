use crate::core::grid::Grid;
use std::sync::atomic::{AtomicU8, Ordering};

/// Zero-initialized `n`-by-`n` buffer that several workers mark concurrently.
///
/// A cell is only ever written with the input value at the same position, so concurrent
/// writers always agree on what they store. Plain relaxed stores are enough: there is no
/// read-modify-write and no other memory is published through these cells. Results are
/// observed only after every worker has been joined.
pub struct SharedOutput {
    n: usize,
    cells: Vec<AtomicU8>,
}

impl SharedOutput {
    pub fn zeroed(n: usize) -> Self {
        let cells = (0..n * n).map(|_| AtomicU8::new(0)).collect();
        Self { n, cells }
    }

    /// Records `value` at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn mark(&self, row: usize, col: usize, value: u8) {
        assert!(col < self.n, "column {col} out of bounds for grid of side {}", self.n);
        self.cells[row * self.n + col].store(value, Ordering::Relaxed);
    }

    /// Consumes the buffer and returns the finished grid.
    pub fn into_grid(self) -> Grid {
        let cells = self.cells.into_iter().map(AtomicU8::into_inner).collect();
        Grid::from_cells_unchecked(self.n, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn untouched_buffer_converts_to_zero_grid() {
        let grid = SharedOutput::zeroed(3).into_grid();
        assert_eq!(grid, Grid::zeroed(3).unwrap());
    }

    #[test]
    fn marks_land_at_the_requested_position() {
        let output = SharedOutput::zeroed(2);
        output.mark(1, 0, 7);
        output.mark(0, 1, 4);
        let grid = output.into_grid();
        assert_eq!(grid.cells(), &[0, 4, 7, 0]);
    }

    #[test]
    #[should_panic]
    fn mark_rejects_column_past_the_row_end() {
        let output = SharedOutput::zeroed(2);
        output.mark(0, 2, 7);
    }

    #[test]
    #[should_panic]
    fn mark_rejects_row_past_the_grid() {
        let output = SharedOutput::zeroed(2);
        output.mark(2, 0, 7);
    }

    #[test]
    fn concurrent_identical_marks_leave_the_same_value() {
        let n = 32;
        let output = SharedOutput::zeroed(n);

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for row in 0..n {
                        for col in 0..n {
                            output.mark(row, col, ((row + col) % 10) as u8);
                        }
                    }
                });
            }
        });

        let grid = output.into_grid();
        for row in 0..n {
            for col in 0..n {
                assert_eq!(grid.get(row, col), ((row + col) % 10) as u8);
            }
        }
    }
}
