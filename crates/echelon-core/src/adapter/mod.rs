//! The boundary between the engine and whatever presents it.
//!
//! A host (an editable cell grid in a UI, a CSV reader, a test) exposes its
//! input through [`CellGrid`] and receives results through [`CellSink`].
//! The engine only sees [`Matrix`] values and scalars.
//!
//! ```
//! # use echelon_core::adapter::{FormatMode, TextGrid, egress, ingest};
//! # use echelon_core::linalg::transpose;
//! let input = TextGrid::from_rows(&[["1", "2"], ["3", "4.5"]]);
//! let m = ingest::<f64, _>(&input).unwrap();
//!
//! let mut output = TextGrid::default();
//! egress(&transpose(&m), &mut output, FormatMode::Full);
//! assert_eq!(output.get(1, 0), Some("3"));
//! assert_eq!(output.get(1, 1), Some("4.5"));
//! ```

mod format;
mod text_grid;

pub use format::{DISPLAY_DECIMALS, FormatMode, format_value};
pub use text_grid::TextGrid;

use tracing::warn;

use crate::Float;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// A rectangular grid of text cells to read a matrix from.
pub trait CellGrid {
    /// Number of columns.
    fn columns(&self) -> usize;

    /// Number of rows.
    fn rows(&self) -> usize;

    /// The text at `(column, row)`, or `None` if the cell is missing.
    fn cell(&self, column: usize, row: usize) -> Option<&str>;
}

/// A rectangular grid of text cells to write results into.
pub trait CellSink {
    /// Discard the current contents and prepare a `columns x rows` grid.
    fn reset(&mut self, columns: usize, rows: usize);

    /// Write `text` at `(column, row)`.
    fn write_cell(&mut self, column: usize, row: usize, text: String);
}

/// What an operation hands back to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T: Float = f64> {
    Matrix(Matrix<T>),
    Scalar(T),
}

impl<T: Float> Outcome<T> {
    /// Write the outcome into `sink`. A scalar occupies a single cell.
    pub fn write_to<S: CellSink + ?Sized>(&self, sink: &mut S, mode: FormatMode) {
        match self {
            Self::Matrix(m) => egress(m, sink, mode),
            Self::Scalar(v) => {
                sink.reset(1, 1);
                sink.write_cell(0, 0, format_value(*v, mode));
            }
        }
    }
}

impl<T: Float> From<Matrix<T>> for Outcome<T> {
    fn from(m: Matrix<T>) -> Self {
        Self::Matrix(m)
    }
}

fn parse_cell<T: Float>(text: Option<&str>, column: usize, row: usize) -> Result<T> {
    let invalid = || {
        let text = text.unwrap_or_default().to_owned();
        warn!(column, row, text = %text, "rejected grid cell");
        CoreError::InvalidCell { column, row, text }
    };
    let value: f64 = text
        .ok_or_else(invalid)?
        .trim()
        .parse()
        .map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(T::from_f64(value))
}

/// Build a matrix from every cell of `grid`.
///
/// Cells are read once each, column by column. Surrounding whitespace is
/// ignored. Missing, non-numeric or non-finite cells fail with
/// [`CoreError::InvalidCell`].
pub fn ingest<T: Float, G: CellGrid + ?Sized>(grid: &G) -> Result<Matrix<T>> {
    let mut m = Matrix::zeros(grid.columns(), grid.rows());
    for x in 0..grid.columns() {
        for y in 0..grid.rows() {
            m.set(x, y, parse_cell(grid.cell(x, y), x, y)?);
        }
    }
    Ok(m)
}

/// Write every cell of `m` into `sink`, resizing it to `m`'s dimensions.
pub fn egress<T: Float, S: CellSink + ?Sized>(m: &Matrix<T>, sink: &mut S, mode: FormatMode) {
    sink.reset(m.width(), m.height());
    for y in 0..m.height() {
        for (x, &v) in m.row(y).iter().enumerate() {
            sink.write_cell(x, y, format_value(v, mode));
        }
    }
}
