//! Elementary row operations.
//!
//! | Op | Function              | Effect                          | det factor |
//! |----|-----------------------|---------------------------------|------------|
//! | 1  | [`scale_row`]         | `r ← k·r`                       | `k`        |
//! | 2  | [`add_row_multiple`]  | `r_a ← r_a + k·r_b`             | `1`        |
//! | 3  | [`swap_rows`]         | `r_a ↔ r_b`                     | `-1`       |
//!
//! Each operation copies its input and returns the transformed copy. The
//! elimination engine is written purely in terms of these three, which is
//! what keeps its determinant bookkeeping exact.

use crate::Scalar;
use crate::matrix::Matrix;

/// Multiply every entry of `row` by `multiple`.
///
/// # Panics
///
/// Panics if `row` is out of bounds.
///
/// ```
/// # use echelon_core::Matrix;
/// # use echelon_core::linalg::scale_row;
/// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let r = scale_row(&m, 1, 0.5);
/// assert_eq!(r.row(1), &[1.5, 2.0]);
/// assert_eq!(m.row(1), &[3.0, 4.0]);
/// ```
pub fn scale_row<T: Scalar>(m: &Matrix<T>, row: usize, multiple: T) -> Matrix<T> {
    let mut result = m.clone();
    for v in result.row_mut(row) {
        *v *= multiple;
    }
    result
}

/// Add `multiple` times `row_to_use` to `row_to_change`.
///
/// # Panics
///
/// Panics if either row is out of bounds.
pub fn add_row_multiple<T: Scalar>(
    m: &Matrix<T>,
    row_to_change: usize,
    row_to_use: usize,
    multiple: T,
) -> Matrix<T> {
    let mut result = m.clone();
    let source = m.row(row_to_use);
    for (v, &s) in result.row_mut(row_to_change).iter_mut().zip(source) {
        *v += multiple * s;
    }
    result
}

/// Exchange `row1` and `row2`.
///
/// # Panics
///
/// Panics if either row is out of bounds.
pub fn swap_rows<T: Scalar>(m: &Matrix<T>, row1: usize, row2: usize) -> Matrix<T> {
    let mut result = m.clone();
    if row1 != row2 {
        let first = m.row(row1);
        let second = m.row(row2);
        result.row_mut(row1).copy_from_slice(second);
        result.row_mut(row2).copy_from_slice(first);
    }
    result
}
