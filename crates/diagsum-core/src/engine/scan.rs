use crate::core::grid::Grid;
use crate::engine::output::SharedOutput;
use itertools::iproduct;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    DownRight,
    DownLeft,
}

impl Direction {
    pub(crate) const ALL: [Direction; 2] = [Direction::DownRight, Direction::DownLeft];

    /// Cell `k` steps from `(row, col)`, or `None` once the diagonal leaves the grid.
    #[inline]
    fn step(self, n: usize, row: usize, col: usize, k: usize) -> Option<(usize, usize)> {
        let r = row + k;
        if r >= n {
            return None;
        }
        let c = match self {
            Direction::DownRight => col + k,
            Direction::DownLeft => col.checked_sub(k)?,
        };
        (c < n).then_some((r, c))
    }
}

/// Walks one diagonal from `(row, col)` and marks every prefix whose sum equals `target`.
///
/// Cells are non-negative, so the running sum never decreases; once it exceeds the
/// target no longer prefix can match and the walk stops. Zero cells keep the sum flat,
/// which is why the walk continues after a match.
pub(crate) fn scan_diagonal(
    input: &Grid,
    output: &SharedOutput,
    target: u64,
    row: usize,
    col: usize,
    direction: Direction,
) {
    let n = input.n();
    let mut sum = 0u64;
    let mut k = 0;
    // Cells `0..marked` of this diagonal are already in the output.
    let mut marked = 0;

    while let Some((r, c)) = direction.step(n, row, col, k) {
        sum += u64::from(input.get(r, c));
        if sum > target {
            break;
        }
        if sum == target {
            for j in marked..=k {
                if let Some((mr, mc)) = direction.step(n, row, col, j) {
                    output.mark(mr, mc, input.get(mr, mc));
                }
            }
            marked = k + 1;
        }
        k += 1;
    }
}

/// Scans both diagonals starting at `(row, col)`.
#[inline]
pub(crate) fn scan_cell(input: &Grid, output: &SharedOutput, target: u64, row: usize, col: usize) {
    for direction in Direction::ALL {
        scan_diagonal(input, output, target, row, col, direction);
    }
}

/// Scans every starting cell whose row lies in `rows`.
///
/// Diagonals may run into rows past `rows.end`; only the starting row is restricted.
pub(crate) fn scan_rows(input: &Grid, output: &SharedOutput, target: u64, rows: Range<usize>) {
    for (row, col) in iproduct!(rows, 0..input.n()) {
        scan_cell(input, output, target, row, col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_scan(text: &str, target: u64) -> Grid {
        let input: Grid = text.parse().unwrap();
        let output = SharedOutput::zeroed(input.n());
        scan_rows(&input, &output, target, 0..input.n());
        output.into_grid()
    }

    #[test]
    fn step_stops_at_grid_edges() {
        assert_eq!(Direction::DownRight.step(3, 0, 1, 1), Some((1, 2)));
        assert_eq!(Direction::DownRight.step(3, 0, 1, 2), None);
        assert_eq!(Direction::DownLeft.step(3, 0, 1, 1), Some((1, 0)));
        assert_eq!(Direction::DownLeft.step(3, 0, 1, 2), None);
        assert_eq!(Direction::DownLeft.step(3, 2, 2, 1), None);
    }

    #[test]
    fn counting_grid_matches_only_runs_starting_below_the_first_row() {
        assert_eq!(run_scan("123\n456\n789\n", 12).to_string(), "000\n450\n780\n");
    }

    #[test]
    fn both_diagonals_of_a_two_by_two_match() {
        assert_eq!(run_scan("11\n11\n", 2).to_string(), "11\n11\n");
    }

    #[test]
    fn single_cells_match_their_own_value() {
        assert_eq!(run_scan("50\n05\n", 5).to_string(), "50\n05\n");
    }

    #[test]
    fn zero_cells_extend_an_existing_match() {
        // (0,0)=3 matches alone, and 3+0 along the diagonal also matches.
        assert_eq!(run_scan("39\n90\n", 3).to_string(), "30\n00\n");
    }

    #[test]
    fn zero_target_marks_runs_of_zeros_only() {
        // Marked zeros are indistinguishable from unmarked ones.
        assert_eq!(run_scan("01\n10\n", 0).to_string(), "00\n00\n");
    }

    #[test]
    fn diagonal_stops_once_sum_exceeds_target() {
        let input: Grid = "900\n090\n001\n".parse().unwrap();
        let output = SharedOutput::zeroed(3);
        scan_diagonal(&input, &output, 1, 0, 0, Direction::DownRight);
        assert_eq!(output.into_grid().count_nonzero(), 0);
    }

    #[test]
    fn down_left_run_is_marked_in_full() {
        let input: Grid = "004\n030\n200\n".parse().unwrap();
        let output = SharedOutput::zeroed(3);
        scan_diagonal(&input, &output, 9, 0, 2, Direction::DownLeft);
        assert_eq!(output.into_grid().to_string(), "004\n030\n200\n");
    }

    #[test]
    fn repeated_matches_across_zero_tail_keep_earlier_cells() {
        let mut rows = vec![vec![0u8; 6]; 6];
        rows[0][0] = 4;
        rows[2][2] = 1;
        rows[5][5] = 3;
        let input = Grid::from_rows(&rows).unwrap();
        let output = SharedOutput::zeroed(6);
        scan_diagonal(&input, &output, 5, 0, 0, Direction::DownRight);
        let grid = output.into_grid();
        assert_eq!(grid.get(0, 0), 4);
        assert_eq!(grid.get(2, 2), 1);
        assert_eq!(grid.get(5, 5), 0);
        assert_eq!(grid.count_nonzero(), 2);
    }

    #[test]
    fn restricted_rows_still_mark_cells_below_the_range() {
        let input: Grid = "11\n11\n".parse().unwrap();
        let output = SharedOutput::zeroed(2);
        scan_rows(&input, &output, 2, 0..1);
        assert_eq!(output.into_grid().to_string(), "11\n11\n");
    }

    #[test]
    fn empty_row_range_does_nothing() {
        let input: Grid = "11\n11\n".parse().unwrap();
        let output = SharedOutput::zeroed(2);
        scan_rows(&input, &output, 1, 1..1);
        assert_eq!(output.into_grid().count_nonzero(), 0);
    }
}
