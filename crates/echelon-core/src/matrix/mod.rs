//! Dense 2-D matrix with fixed dimensions and contiguous storage.
//!
//! A [`Matrix`] is addressed as `(column, row)`: `get(x, y)` reads column
//! `x` of row `y`. Storage is row-major. Dimensions are fixed at
//! construction; every transform in this crate returns a new matrix and
//! leaves its input untouched.

mod create;
mod display;
mod ops;
mod vector;

pub use vector::VectorIter;

use crate::Scalar;
use crate::error::{CoreError, Result};

/// A dense `width x height` matrix.
///
/// The matrix owns its data and cloning performs a deep copy.
///
/// # Type Parameters
///
/// - `T`: The element type, which must implement [`Scalar`]. Defaults to
///   `f64`.
#[derive(Debug, Clone)]
pub struct Matrix<T: Scalar = f64> {
    data: Vec<T>,
    width: usize,
    height: usize,
    homogeneous: bool,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a matrix from row-major data.
    ///
    /// Returns an error if `data.len() != width * height`.
    ///
    /// ```
    /// # use echelon_core::Matrix;
    /// let m = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m.get(2, 0), 3.0);
    /// assert_eq!(m.get(0, 1), 4.0);
    /// ```
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        if width * height != data.len() {
            return Err(CoreError::InvalidShape {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            homogeneous: true,
        })
    }

    /// Create a matrix from a list of rows.
    ///
    /// All rows must have the same length. An empty list yields a `0x0`
    /// matrix.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(CoreError::InvalidShape {
                    width,
                    height,
                    len: data.len() + row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(width, height, data)
    }

    /// Set the homogeneous-system flag, consuming and returning the matrix.
    ///
    /// The flag is carried through copies but does not affect any
    /// computation or equality.
    #[must_use]
    pub fn with_homogeneous(mut self, homogeneous: bool) -> Self {
        self.homogeneous = homogeneous;
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    #[inline]
    pub fn is_homogeneous(&self) -> bool {
        self.homogeneous
    }

    /// Whether the matrix has zero cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A flat row-major slice of all cells.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its row-major data.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    #[inline]
    fn offset(&self, column: usize, row: usize) -> usize {
        assert!(
            column < self.width && row < self.height,
            "index ({column}, {row}) out of bounds for a {}x{} matrix",
            self.width,
            self.height,
        );
        row * self.width + column
    }

    /// Read the cell at `(column, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the matrix.
    #[inline]
    pub fn get(&self, column: usize, row: usize) -> T {
        self.data[self.offset(column, row)]
    }

    /// Write the cell at `(column, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the matrix.
    #[inline]
    pub fn set(&mut self, column: usize, row: usize, value: T) {
        let idx = self.offset(column, row);
        self.data[idx] = value;
    }

    /// Read the cell at `(column, row)`, returning an error when out of
    /// bounds.
    pub fn try_get(&self, column: usize, row: usize) -> Result<T> {
        if column >= self.width || row >= self.height {
            return Err(CoreError::IndexOutOfBounds {
                column,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.data[row * self.width + column])
    }

    /// The cells of row `row` as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.height, "row {row} out of bounds");
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.height, "row {row} out of bounds");
        let start = row * self.width;
        &mut self.data[start..start + self.width]
    }

    /// The cells of column `column`, top to bottom.
    pub fn column(&self, column: usize) -> Vec<T> {
        assert!(column < self.width, "column {column} out of bounds");
        (0..self.height).map(|y| self.get(column, y)).collect()
    }

    /// The main diagonal, `min(width, height)` long.
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.width.min(self.height))
            .map(|i| self.get(i, i))
            .collect()
    }

    /// Whether every cell is exactly zero. Vacuously true when empty.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == T::zero())
    }

    // ------------------------------------------------------------------
    // Map / apply
    // ------------------------------------------------------------------

    /// Apply a function to every cell, returning a new matrix.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Matrix<T>
    where
        F: Fn(T) -> T,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            width: self.width,
            height: self.height,
            homogeneous: self.homogeneous,
        }
    }

    /// Apply a function cell-wise to two matrices of the same shape.
    pub fn zip_map<F>(&self, other: &Matrix<T>, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        if self.dims() != other.dims() {
            return Err(CoreError::IncompatibleDimensions {
                left: self.dims(),
                right: other.dims(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            width: self.width,
            height: self.height,
            homogeneous: self.homogeneous,
        })
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.dims(), (3, 2));
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.column(1), vec![2.0, 5.0]);
    }

    #[test]
    fn test_from_vec_shape_mismatch() {
        let r = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
        assert_eq!(
            r,
            Err(CoreError::InvalidShape {
                width: 2,
                height: 3,
                len: 3
            })
        );
    }

    #[test]
    fn test_from_rows_ragged() {
        let r = Matrix::from_rows(&[vec![1, 2], vec![3]]);
        assert!(matches!(r, Err(CoreError::InvalidShape { .. })));
    }

    #[test]
    fn test_get_set_column_row_order() {
        let mut m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(m.get(0, 0), 1);
        assert_eq!(m.get(2, 1), 6);
        m.set(1, 0, 99);
        assert_eq!(m.row(0), &[1, 99, 3]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let m = Matrix::<f64>::zeros(2, 2);
        let _ = m.get(2, 0);
    }

    #[test]
    fn test_try_get() {
        let m = Matrix::<f64>::identity(2);
        assert_eq!(m.try_get(1, 1), Ok(1.0));
        assert!(matches!(
            m.try_get(0, 2),
            Err(CoreError::IndexOutOfBounds { column: 0, row: 2, .. })
        ));
    }

    #[test]
    fn test_is_zero() {
        assert!(Matrix::<f64>::zeros(3, 2).is_zero());
        assert!(Matrix::<f64>::zeros(0, 0).is_zero());
        assert!(!Matrix::<f64>::identity(1).is_zero());
    }

    #[test]
    fn test_diagonal_rectangular() {
        let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(m.diagonal(), vec![1, 5]);
    }

    #[test]
    fn test_equality_ignores_homogeneous_flag() {
        let a = Matrix::<f64>::identity(2);
        let b = Matrix::<f64>::identity(2).with_homogeneous(false);
        assert_eq!(a, b);
        assert!(!b.is_homogeneous());
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Matrix::from_rows(&[[0.1 + 0.2]]).unwrap();
        let b = Matrix::from_rows(&[[0.3]]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zip_map_shape_mismatch() {
        let a = Matrix::<f64>::zeros(2, 1);
        let b = Matrix::<f64>::zeros(1, 2);
        assert_eq!(
            a.zip_map(&b, |x, y| x + y),
            Err(CoreError::IncompatibleDimensions {
                left: (2, 1),
                right: (1, 2)
            })
        );
    }
}
