//! Spreadsheet (rows of cells)

use crate::cell::Cell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of cells. Rows may have different lengths.
pub type Row = Vec<Cell>;

/// An ordered sequence of rows forming a single sheet
///
/// Indices handed out by [`Spreadsheet::iter_cells`] are 0-based; addresses
/// built from them add one on each axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Spreadsheet {
    rows: Vec<Row>,
}

impl Spreadsheet {
    /// Create an empty spreadsheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a spreadsheet from rows
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Append a row
    pub fn push_row<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// All rows in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells across all rows
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Check if there are no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over all cells in row-major order as `(row, col, cell)`
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, cell))
        })
    }
}

impl From<Vec<Row>> for Spreadsheet {
    fn from(rows: Vec<Row>) -> Self {
        Self::from_rows(rows)
    }
}

impl FromIterator<Row> for Spreadsheet {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}
