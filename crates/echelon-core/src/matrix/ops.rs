//! Element-wise arithmetic for [`Matrix`].
//!
//! - `&Matrix + &Matrix`, `&Matrix - &Matrix`: element-wise, same shape
//!   (panics on mismatch; use [`Matrix::add_checked`] to get an error)
//! - `&Matrix * T`: scale every cell
//! - `-&Matrix` for `Float` matrices

use core::ops::{Add, Mul, Neg, Sub};

use crate::error::Result;
use crate::{Float, Scalar};

use super::Matrix;

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                assert_eq!(
                    self.dims(), rhs.dims(),
                    "shape mismatch in element-wise {}: {:?} vs {:?}",
                    stringify!($method), self.dims(), rhs.dims(),
                );
                let data = self.data.iter()
                    .zip(rhs.data.iter())
                    .map(|(&a, &b)| a $op b)
                    .collect();
                Matrix {
                    data,
                    width: self.width,
                    height: self.height,
                    homogeneous: self.homogeneous,
                }
            }
        }
    };
}

impl_matrix_binop!(Add, add, +);
impl_matrix_binop!(Sub, sub, -);

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Float> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|x| -x)
    }
}

// ======================================================================
// Fallible arithmetic
// ======================================================================

impl<T: Scalar> Matrix<T> {
    /// Element-wise addition, returning `Err` on shape mismatch.
    pub fn add_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Element-wise subtraction, returning `Err` on shape mismatch.
    pub fn sub_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, |a, b| a - b)
    }

    /// Multiply every cell by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: T) -> Matrix<T> {
        self.map(|x| x * scalar)
    }
}
