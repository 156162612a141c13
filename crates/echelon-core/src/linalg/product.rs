//! Transpose, element-wise sums and matrix products.

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// `result[j, i] = m[i, j]`; a `w x h` matrix becomes `h x w`.
///
/// ```
/// # use echelon_core::Matrix;
/// # use echelon_core::linalg::transpose;
/// let m = Matrix::from_rows(&[[1, 2, 3]]).unwrap();
/// let t = transpose(&m);
/// assert_eq!(t.dims(), (1, 3));
/// assert_eq!(t.column(0), vec![1, 2, 3]);
/// ```
pub fn transpose<T: Scalar>(m: &Matrix<T>) -> Matrix<T> {
    let mut result = Matrix::zeros(m.height(), m.width()).with_homogeneous(m.is_homogeneous());
    for x in 0..m.width() {
        for y in 0..m.height() {
            result.set(y, x, m.get(x, y));
        }
    }
    result
}

/// Element-wise `a + b`. Shapes must match.
pub fn add<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    a.add_checked(b)
}

/// Element-wise `a - b`. Shapes must match.
pub fn sub<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    a.sub_checked(b)
}

/// `scalar * m`.
pub fn scale<T: Scalar>(m: &Matrix<T>, scalar: T) -> Matrix<T> {
    m.scale(scalar)
}

/// Matrix product `a * b`.
///
/// `(a * b)[x, y] = sum_i a[i, y] * b[x, i]`. Requires
/// `a.width() == b.height()`; the result is `b.width() x a.height()`.
///
/// ```
/// # use echelon_core::Matrix;
/// # use echelon_core::linalg::multiply;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
/// let c = multiply(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    if a.width() != b.height() {
        return Err(CoreError::IncompatibleDimensions {
            left: a.dims(),
            right: b.dims(),
        });
    }

    let k = a.width();
    let mut c = Matrix::zeros(b.width(), a.height());

    // Row-major friendly: walk rows of `a`, then columns of `b`.
    for y in 0..a.height() {
        let a_row = a.row(y);
        for x in 0..b.width() {
            let mut sum = T::zero();
            for (i, &a_iy) in a_row.iter().enumerate().take(k) {
                sum += a_iy * b.get(x, i);
            }
            c.set(x, y, sum);
        }
    }

    Ok(c)
}
