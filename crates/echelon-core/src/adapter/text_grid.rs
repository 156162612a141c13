//! An in-memory text grid usable as both input and output.

use core::fmt;

use super::{CellGrid, CellSink};

/// An in-memory grid of text cells.
///
/// Serves both as input ([`CellGrid`]) and output ([`CellSink`]). Cells that
/// were never written read as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextGrid {
    cells: Vec<Option<String>>,
    columns: usize,
    rows: usize,
}

impl TextGrid {
    /// A `columns x rows` grid with every cell missing.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: vec![None; columns * rows],
            columns,
            rows,
        }
    }

    /// Build a fully populated grid from a list of rows.
    ///
    /// The width is taken from the first row. Shorter rows leave their
    /// trailing cells missing and longer rows are truncated.
    pub fn from_rows<R, S>(rows: &[R]) -> Self
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let columns = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = Self::new(columns, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, text) in row.as_ref().iter().take(columns).enumerate() {
                grid.set(x, y, text.as_ref());
            }
        }
        grid
    }

    fn offset(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then(|| row * self.columns + column)
    }

    /// The text at `(column, row)`, if present.
    pub fn get(&self, column: usize, row: usize) -> Option<&str> {
        self.offset(column, row)
            .and_then(|i| self.cells[i].as_deref())
    }

    /// Overwrite the text at `(column, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    pub fn set(&mut self, column: usize, row: usize, text: impl Into<String>) {
        let Some(i) = self.offset(column, row) else {
            panic!(
                "cell ({column}, {row}) out of bounds for a {}x{} grid",
                self.columns, self.rows
            );
        };
        self.cells[i] = Some(text.into());
    }
}

impl CellGrid for TextGrid {
    fn columns(&self) -> usize {
        self.columns
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cell(&self, column: usize, row: usize) -> Option<&str> {
        self.get(column, row)
    }
}

impl CellSink for TextGrid {
    fn reset(&mut self, columns: usize, rows: usize) {
        *self = Self::new(columns, rows);
    }

    fn write_cell(&mut self, column: usize, row: usize, text: String) {
        self.set(column, row, text);
    }
}

/// Tab-separated rows, with missing cells left blank.
impl fmt::Display for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            for x in 0..self.columns {
                if x > 0 {
                    f.write_str("\t")?;
                }
                f.write_str(self.get(x, y).unwrap_or_default())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
