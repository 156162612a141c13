//! Minors, cofactors, the adjoint and the inverse derived from it.
//!
//! Every cofactor is the determinant of an `(n-1) x (n-1)` submatrix, so the
//! adjoint costs `n^2` eliminations of `O(n^3)` each. Only intended for small
//! matrices.

use tracing::debug;

use crate::Float;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

use super::echelon::determinant;
use super::product::transpose;

/// `m` with column `x` and row `y` removed.
fn submatrix<T: Float>(m: &Matrix<T>, x: usize, y: usize) -> Result<Matrix<T>> {
    let mut data = Vec::with_capacity((m.width() - 1) * (m.height() - 1));
    for row in (0..m.height()).filter(|&r| r != y) {
        data.extend(
            m.row(row)
                .iter()
                .enumerate()
                .filter(|&(col, _)| col != x)
                .map(|(_, &v)| v),
        );
    }
    Matrix::from_vec(m.width() - 1, m.height() - 1, data)
}

/// Determinant of `m` with column `x` and row `y` removed.
///
/// ```
/// # use echelon_core::Matrix;
/// # use echelon_core::linalg::minor;
/// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(minor(&m, 0, 0).unwrap(), 4.0);
/// assert_eq!(minor(&m, 1, 0).unwrap(), 3.0);
/// ```
pub fn minor<T: Float>(m: &Matrix<T>, x: usize, y: usize) -> Result<T> {
    if x >= m.width() || y >= m.height() {
        return Err(CoreError::IndexOutOfBounds {
            column: x,
            row: y,
            width: m.width(),
            height: m.height(),
        });
    }
    determinant(&submatrix(m, x, y)?)
}

/// `(-1)^(x+y) * minor(m, x, y)` for every cell.
pub fn cofactor_matrix<T: Float>(m: &Matrix<T>) -> Result<Matrix<T>> {
    if !m.is_square() {
        return Err(CoreError::non_square(m.width(), m.height()));
    }
    let mut result = m.clone();
    for x in 0..m.width() {
        for y in 0..m.height() {
            let value = minor(m, x, y)?;
            let cofactor = if (x + y) % 2 == 0 { value } else { -value };
            result.set(x, y, cofactor);
        }
    }
    Ok(result)
}

/// The adjoint (adjugate): transpose of the cofactor matrix.
///
/// ```
/// # use echelon_core::Matrix;
/// # use echelon_core::linalg::adjoint;
/// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let adj = adjoint(&m).unwrap();
/// assert_eq!(adj.as_slice(), &[4.0, -2.0, -3.0, 1.0]);
/// ```
pub fn adjoint<T: Float>(m: &Matrix<T>) -> Result<Matrix<T>> {
    debug!(width = m.width(), height = m.height(), "adjoint");
    Ok(transpose(&cofactor_matrix(m)?))
}

/// The inverse `adjoint(m) / det(m)`.
///
/// Fails with [`CoreError::NonInvertibleMatrix`] when the determinant is
/// exactly zero.
///
/// ```
/// # use echelon_core::Matrix;
/// # use echelon_core::linalg::invert;
/// let m = Matrix::from_rows(&[[2.0, 0.0], [0.0, 2.0]]).unwrap();
/// let inv = invert(&m).unwrap();
/// assert_eq!(inv, Matrix::from_rows(&[[0.5, 0.0], [0.0, 0.5]]).unwrap());
/// ```
pub fn invert<T: Float>(m: &Matrix<T>) -> Result<Matrix<T>> {
    let det = determinant(m)?;
    debug!(n = m.width(), det = ?det, "invert");
    if det == T::zero() {
        return Err(CoreError::NonInvertibleMatrix);
    }
    Ok(adjoint(m)?.scale(T::one() / det))
}
