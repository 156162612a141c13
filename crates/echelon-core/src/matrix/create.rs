//! Matrix constructors for common fixed patterns.

use crate::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Create a `width x height` matrix filled with zeros.
    ///
    /// ```
    /// # use echelon_core::Matrix;
    /// let m = Matrix::<f64>::zeros(3, 2);
    /// assert_eq!(m.dims(), (3, 2));
    /// assert!(m.is_zero());
    /// ```
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            data: vec![T::zero(); width * height],
            width,
            height,
            homogeneous: true,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// # use echelon_core::Matrix;
    /// let eye = Matrix::<f64>::identity(3);
    /// assert_eq!(eye.get(1, 1), 1.0);
    /// assert_eq!(eye.get(0, 1), 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, T::one());
        }
        m
    }

    /// Create a diagonal matrix with `values` on the main diagonal.
    pub fn from_diagonal(values: &[T]) -> Self {
        let mut m = Self::zeros(values.len(), values.len());
        for (i, &v) in values.iter().enumerate() {
            m.set(i, i, v);
        }
        m
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = Matrix::<f64>::zeros(4, 3);
        assert_eq!(m.as_slice().len(), 12);
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_zeros_empty() {
        let m = Matrix::<f64>::zeros(0, 5);
        assert!(m.is_empty());
        assert_eq!(m.height(), 5);
    }

    #[test]
    fn test_identity() {
        let m = Matrix::<i64>::identity(3);
        assert_eq!(m.diagonal(), vec![1, 1, 1]);
        assert_eq!(m.as_slice().iter().sum::<i64>(), 3);
    }

    #[test]
    fn test_from_diagonal() {
        let m = Matrix::from_diagonal(&[2.0, 5.0]);
        assert_eq!(m.as_slice(), &[2.0, 0.0, 0.0, 5.0]);
    }
}
