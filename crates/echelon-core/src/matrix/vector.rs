//! Treating a single-row or single-column matrix as a vector.

use core::iter::FusedIterator;

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::Matrix;

/// Iterator over the values of a vector-shaped [`Matrix`].
///
/// The iterator borrows the matrix and is `Clone`, so the same sequence can
/// be walked any number of times.
#[derive(Debug, Clone)]
pub struct VectorIter<'a, T: Scalar> {
    values: core::slice::Iter<'a, T>,
}

impl<T: Scalar> Iterator for VectorIter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.values.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T: Scalar> ExactSizeIterator for VectorIter<'_, T> {}

impl<T: Scalar> FusedIterator for VectorIter<'_, T> {}

impl<T: Scalar> Matrix<T> {
    /// Whether the matrix is a row or a column (`1x1` counts as both).
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.width <= 1 || self.height <= 1
    }

    /// Iterate the values of a row or column vector along its long axis.
    ///
    /// Fails with [`CoreError::NotAVector`] when both dimensions exceed 1.
    ///
    /// ```
    /// # use echelon_core::Matrix;
    /// let col = Matrix::from_rows(&[[1.0], [2.0], [3.0]]).unwrap();
    /// let v: Vec<f64> = col.iter_vector().unwrap().collect();
    /// assert_eq!(v, vec![1.0, 2.0, 3.0]);
    /// ```
    pub fn iter_vector(&self) -> Result<VectorIter<'_, T>> {
        if !self.is_vector() {
            return Err(CoreError::NotAVector {
                width: self.width,
                height: self.height,
            });
        }
        // A row or a column is contiguous in row-major storage.
        Ok(VectorIter {
            values: self.data.iter(),
        })
    }
}
