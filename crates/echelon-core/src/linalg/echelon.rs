//! Gauss-Jordan elimination: row echelon form, reduced row echelon form and
//! the determinant derived from them.
//!
//! The forward pass records a running factor: the product of every pivot
//! value divided out of its row, negated once per row swap. Since each
//! normalized pivot is exactly 1, that factor alone is the determinant of a
//! square input once elimination completes.

use tracing::{debug, trace};

use crate::Float;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

use super::row_ops::{add_row_multiple, scale_row, swap_rows};

/// The result of forward elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct Echelon<T: Float> {
    matrix: Matrix<T>,
    /// Product of extracted pivots with one sign flip per row swap.
    extra_value: T,
    /// `(column, row)` of every pivot, top to bottom.
    pivots: Vec<(usize, usize)>,
}

impl<T: Float> Echelon<T> {
    /// The matrix in row echelon form.
    pub fn matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    /// Consume the result and return the reduced matrix.
    pub fn into_matrix(self) -> Matrix<T> {
        self.matrix
    }

    /// Accumulated sign-and-scale factor. `1` if no pivot was found.
    pub fn extra_value(&self) -> T {
        self.extra_value
    }

    /// `(column, row)` of every pivot, top to bottom.
    pub fn pivots(&self) -> &[(usize, usize)] {
        &self.pivots
    }

    /// Number of pivots, i.e. the rank of the input matrix.
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
}

/// First `(column, row)` with a nonzero entry at or below `from_row`,
/// scanning columns left to right and rows top to bottom.
fn leftmost_nonzero<T: Float>(m: &Matrix<T>, from_row: usize) -> Option<(usize, usize)> {
    (0..m.width()).find_map(|x| {
        (from_row..m.height())
            .find(|&y| m.get(x, y) != T::zero())
            .map(|y| (x, y))
    })
}

/// Reduce `m` to row echelon form.
///
/// Every pivot is normalized to exactly 1 and every entry below a pivot is
/// zero. The input is not modified.
///
/// ```
/// # use echelon_core::Matrix;
/// # use echelon_core::linalg::row_echelon_form;
/// let m = Matrix::from_rows(&[[0.0, 1.0], [2.0, 4.0]]).unwrap();
/// let ech = row_echelon_form(&m);
/// assert_eq!(ech.matrix().row(0), &[1.0, 2.0]);
/// assert_eq!(ech.matrix().row(1), &[0.0, 1.0]);
/// assert_eq!(ech.extra_value(), -2.0);
/// ```
pub fn row_echelon_form<T: Float>(m: &Matrix<T>) -> Echelon<T> {
    let mut result = m.clone();
    let mut extra_value = T::one();
    let mut pivots = Vec::new();

    if result.is_zero() {
        return Echelon {
            matrix: result,
            extra_value,
            pivots,
        };
    }

    for pivot_row in 0..result.height() {
        let Some((col, row)) = leftmost_nonzero(&result, pivot_row) else {
            // Every remaining row is zero.
            break;
        };

        if row != pivot_row {
            trace!(from = row, to = pivot_row, "row swap");
            result = swap_rows(&result, row, pivot_row);
            extra_value = -extra_value;
        }

        let pivot = result.get(col, pivot_row);
        trace!(column = col, row = pivot_row, pivot = ?pivot, "pivot");
        extra_value *= pivot;
        result = scale_row(&result, pivot_row, T::one() / pivot);
        // p * (1/p) can round to 1 - ulp.
        result.set(col, pivot_row, T::one());

        for below in (pivot_row + 1)..result.height() {
            let v = result.get(col, below);
            if v != T::zero() {
                result = add_row_multiple(&result, below, pivot_row, -v);
            }
        }

        pivots.push((col, pivot_row));
    }

    Echelon {
        matrix: result,
        extra_value,
        pivots,
    }
}

/// Row of the leading one in column `col`, if there is one.
///
/// The lowest nonzero entry of the column qualifies when every entry to its
/// left in the same row is zero.
fn leading_one<T: Float>(m: &Matrix<T>, col: usize) -> Option<usize> {
    let row = (0..m.height()).rev().find(|&y| m.get(col, y) != T::zero())?;
    m.row(row)[..col]
        .iter()
        .all(|&v| v == T::zero())
        .then_some(row)
}

/// Reduce `m` to reduced row echelon form.
///
/// Runs [`row_echelon_form`], then clears every entry above each leading
/// one, sweeping pivot columns from right to left.
///
/// ```
/// # use echelon_core::Matrix;
/// # use echelon_core::linalg::reduced_row_echelon_form;
/// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
/// let r = reduced_row_echelon_form(&m);
/// assert_eq!(r.row(0), &[1.0, 0.0, -1.0]);
/// assert_eq!(r.row(1), &[0.0, 1.0, 2.0]);
/// ```
pub fn reduced_row_echelon_form<T: Float>(m: &Matrix<T>) -> Matrix<T> {
    let mut result = row_echelon_form(m).into_matrix();

    for col in (0..result.width()).rev() {
        let Some(pivot_row) = leading_one(&result, col) else {
            continue;
        };
        for above in (0..pivot_row).rev() {
            let v = result.get(col, above);
            if v != T::zero() {
                result = add_row_multiple(&result, above, pivot_row, -v);
            }
        }
    }

    result
}

/// Determinant of a square matrix, derived from its row echelon form.
///
/// `det = extra_value * product(diag(REF))`. A `0x0` matrix has
/// determinant 1.
///
/// ```
/// # use echelon_core::Matrix;
/// # use echelon_core::linalg::determinant;
/// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(determinant(&m).unwrap(), -2.0);
/// ```
pub fn determinant<T: Float>(m: &Matrix<T>) -> Result<T> {
    if !m.is_square() {
        return Err(CoreError::non_square(m.width(), m.height()));
    }
    debug!(n = m.width(), "determinant");

    let ech = row_echelon_form(m);
    let det = ech
        .matrix
        .diagonal()
        .into_iter()
        .fold(ech.extra_value, |acc, d| acc * d);
    Ok(det)
}

/// Rank of `m`: the number of pivots found by forward elimination.
pub fn rank<T: Float>(m: &Matrix<T>) -> usize {
    row_echelon_form(m).rank()
}
