//! Parsing and validating the text input.
//!
//! The input is given line by line:
//!
//! * the grid size, `height, width`;
//! * `height` rows of `0` (red) and `1` (green), each exactly `width` long;
//! * the observed cell and the number of generations, `x, y, n`.
//!
//! Whitespace around the size and observed-cell lines, and around the numbers
//! in them, is ignored. A row may only end with a line terminator.

use crate::{
    cells::CellType,
    error::Error,
    observe::ObservedCell,
    simulation::check_grid_size,
};

fn malformed(line: &str) -> Error {
    Error::MalformedInput(line.to_string())
}

/// Splits a line into exactly `count` comma-separated fields.
fn fields(line: &str, count: usize) -> Result<Vec<&str>, Error> {
    let fields = line.split(',').map(str::trim).collect::<Vec<_>>();
    if fields.len() == count {
        Ok(fields)
    } else {
        Err(malformed(line))
    }
}

/// A size or coordinate: one to four decimal digits.
fn small_number(field: &str, line: &str) -> Result<usize, Error> {
    if (1..=4).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit()) {
        field.parse().map_err(|_| malformed(line))
    } else {
        Err(malformed(line))
    }
}

/// A number of generations.
fn generation_count(field: &str, line: &str) -> Result<u64, Error> {
    if !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit()) {
        field.parse().map_err(|_| malformed(line))
    } else {
        Err(malformed(line))
    }
}

/// Parses the grid size, `height, width`.
pub fn parse_grid_size(line: &str) -> Result<(usize, usize), Error> {
    let line = line.trim();
    let fields = fields(line, 2)?;
    let height = small_number(fields[0], line)?;
    let width = small_number(fields[1], line)?;
    check_grid_size(height, width)?;
    Ok((height, width))
}

/// Parses the `row`-th row of generation zero, for a grid `width` cells wide.
///
/// Any other character than `0` and `1`, spaces included, counts towards the
/// length.
pub fn parse_row(row: usize, line: &str, width: usize) -> Result<Vec<CellType>, Error> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let found = line.chars().count();
    if found != width {
        return Err(Error::RowLengthMismatch {
            row,
            expected: width,
            found,
        });
    }
    line.chars().map(CellType::try_from).collect()
}

/// Parses the observed cell, `x, y, n`, for a `height` by `width` grid.
pub fn parse_observed_cell(
    line: &str,
    height: usize,
    width: usize,
) -> Result<ObservedCell, Error> {
    let line = line.trim();
    let fields = fields(line, 3)?;
    let x = small_number(fields[0], line)?;
    let y = small_number(fields[1], line)?;
    let generations = generation_count(fields[2], line)?;
    if x >= height || y >= width {
        return Err(Error::ObservedCellOutOfRange((x, y), height, width));
    }
    Ok(ObservedCell::new(x, y, generations))
}
