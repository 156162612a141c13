//! Vector norms and normalization.

use crate::Float;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Euclidean norm of a row or column vector: `sqrt(sum(x_i^2))`.
///
/// ```
/// # use echelon_core::Matrix;
/// # use echelon_core::linalg::nrm2;
/// let v = Matrix::from_rows(&[[3.0_f64, 4.0]]).unwrap();
/// assert!((nrm2(&v).unwrap() - 5.0).abs() < 1e-12);
/// ```
pub fn nrm2<T: Float>(v: &Matrix<T>) -> Result<T> {
    let sum_sq = v.iter_vector()?.fold(T::zero(), |acc, x| acc + x * x);
    Ok(sum_sq.sqrt())
}

/// Divide each component of a vector by its Euclidean norm.
///
/// The result keeps the orientation (row or column) of the input. Fails with
/// [`CoreError::NotAVector`] for a general matrix and
/// [`CoreError::ZeroVector`] when the norm is zero.
///
/// ```
/// # use echelon_core::Matrix;
/// # use echelon_core::linalg::normalize;
/// let v = Matrix::from_rows(&[[3.0, 4.0]]).unwrap();
/// assert_eq!(normalize(&v).unwrap().as_slice(), &[0.6, 0.8]);
/// ```
pub fn normalize<T: Float>(v: &Matrix<T>) -> Result<Matrix<T>> {
    let norm = nrm2(v)?;
    if norm == T::zero() {
        return Err(CoreError::ZeroVector);
    }
    Ok(v.map(|x| x / norm))
}
