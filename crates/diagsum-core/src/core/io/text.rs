use crate::core::grid::Grid;
use crate::core::io::traits::GridFile;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextGridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: TextParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextParseErrorKind {
    #[error("First line is empty; the grid width cannot be inferred")]
    EmptyFirstLine,
    #[error("Invalid character '{found}' in column {column} (expected a decimal digit)")]
    InvalidDigit { column: usize, found: char },
    #[error("Row has {found} digits, expected {expected}")]
    WrongWidth { expected: usize, found: usize },
    #[error("Input ended after {found} rows, expected {expected}")]
    MissingRows { expected: usize, found: usize },
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn parse_row(line: &str, line_num: usize, expected: usize) -> Result<Vec<u8>, TextGridError> {
    let mut row = Vec::with_capacity(expected);
    for (idx, ch) in line.chars().enumerate() {
        let digit = ch.to_digit(10).ok_or(TextGridError::Parse {
            line: line_num,
            kind: TextParseErrorKind::InvalidDigit {
                column: idx + 1,
                found: ch,
            },
        })?;
        row.push(digit as u8);
    }
    if row.len() != expected {
        return Err(TextGridError::Parse {
            line: line_num,
            kind: TextParseErrorKind::WrongWidth {
                expected,
                found: row.len(),
            },
        });
    }
    Ok(row)
}

/// Plain-text digit grid: `n` lines of `n` decimal digits, no separators.
///
/// The side length is inferred from the first line. Lines after the `n`-th are ignored.
pub struct DigitGridFile;

impl GridFile for DigitGridFile {
    type Error = TextGridError;

    fn read_from(reader: &mut impl BufRead) -> Result<Grid, Self::Error> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        let mut n = 0;

        for (line_num, line_res) in reader.lines().enumerate() {
            let raw = line_res?;
            let line = strip_line_ending(&raw);
            let line_num = line_num + 1;

            if line_num == 1 {
                n = line.chars().count();
                if n == 0 {
                    return Err(TextGridError::Parse {
                        line: line_num,
                        kind: TextParseErrorKind::EmptyFirstLine,
                    });
                }
                rows.reserve(n);
            }

            rows.push(parse_row(line, line_num, n)?);
            if rows.len() == n {
                break;
            }
        }

        if rows.is_empty() {
            return Err(TextGridError::Parse {
                line: 1,
                kind: TextParseErrorKind::EmptyFirstLine,
            });
        }
        if rows.len() < n {
            return Err(TextGridError::Parse {
                line: rows.len() + 1,
                kind: TextParseErrorKind::MissingRows {
                    expected: n,
                    found: rows.len(),
                },
            });
        }

        let cells = rows.concat();
        Ok(Grid::from_cells_unchecked(n, cells))
    }

    fn write_to(grid: &Grid, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut line = Vec::with_capacity(grid.n() + 1);
        for row in grid.rows() {
            line.clear();
            line.extend(row.iter().map(|&v| b'0' + v));
            line.push(b'\n');
            writer.write_all(&line)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = TextGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DigitGridFile::read_from(&mut s.as_bytes())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for value in row {
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse_err(input: &str) -> (usize, TextParseErrorKind) {
        match input.parse::<Grid>() {
            Err(TextGridError::Parse { line, kind }) => (line, kind),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn reads_square_grid_and_infers_side_length() {
        let grid: Grid = "123\n456\n789\n".parse().unwrap();
        assert_eq!(grid.n(), 3);
        assert_eq!(grid.row(0), &[1, 2, 3]);
        assert_eq!(grid.row(2), &[7, 8, 9]);
    }

    #[test]
    fn accepts_crlf_line_endings_and_missing_final_newline() {
        let grid: Grid = "10\r\n01".parse().unwrap();
        assert_eq!(grid.n(), 2);
        assert_eq!(grid.cells(), &[1, 0, 0, 1]);
    }

    #[test]
    fn ignores_lines_after_the_last_row() {
        let grid: Grid = "12\n34\ntrailing text\n".parse().unwrap();
        assert_eq!(grid.cells(), &[1, 2, 3, 4]);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_err(""), (1, TextParseErrorKind::EmptyFirstLine));
        assert_eq!(parse_err("\n12\n"), (1, TextParseErrorKind::EmptyFirstLine));
    }

    #[test]
    fn reports_line_and_column_of_invalid_digit() {
        assert_eq!(
            parse_err("12\n3x\n"),
            (
                2,
                TextParseErrorKind::InvalidDigit {
                    column: 2,
                    found: 'x'
                }
            )
        );
    }

    #[test]
    fn rejects_rows_of_the_wrong_width() {
        assert_eq!(
            parse_err("123\n45\n789\n"),
            (
                2,
                TextParseErrorKind::WrongWidth {
                    expected: 3,
                    found: 2
                }
            )
        );
    }

    #[test]
    fn rejects_truncated_input() {
        assert_eq!(
            parse_err("123\n456\n"),
            (
                3,
                TextParseErrorKind::MissingRows {
                    expected: 3,
                    found: 2
                }
            )
        );
    }

    #[test]
    fn writes_one_line_per_row() {
        let grid = Grid::from_rows(&[[0, 5], [9, 0]]).unwrap();
        let mut buffer = Vec::new();
        DigitGridFile::write_to(&grid, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "05\n90\n");
        assert_eq!(grid.to_string(), "05\n90\n");
    }

    #[test]
    fn path_helpers_write_and_read_back_the_same_grid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.txt");
        let grid: Grid = "3021\n0000\n9999\n1204\n".parse().unwrap();

        DigitGridFile::write_to_path(&grid, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "3021\n0000\n9999\n1204\n");

        let reread = DigitGridFile::read_from_path(&path).unwrap();
        assert_eq!(reread, grid);
    }

    #[test]
    fn missing_file_surfaces_as_io_error() {
        let dir = tempdir().unwrap();
        let result = DigitGridFile::read_from_path(dir.path().join("absent.txt"));
        assert!(matches!(result, Err(TextGridError::Io(_))));
    }
}
