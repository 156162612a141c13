use thiserror::Error;

/// All errors returned by `echelon-core`.
///
/// Every variant describes a violated mathematical precondition or malformed
/// input. None of them are transient, so callers should not retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The operation requires `width == height`.
    #[error("matrix must be square, got {width}x{height}")]
    NonSquareMatrix { width: usize, height: usize },

    /// The matrix is square but its determinant is exactly zero.
    #[error("matrix is not invertible (determinant is zero)")]
    NonInvertibleMatrix,

    /// The matrix is square but cannot be diagonalized by this engine.
    #[error("matrix is not diagonalizable: {reason}")]
    NonDiagonalizableMatrix { reason: &'static str },

    /// Operand shapes are incompatible, given as `(width, height)`.
    #[error("incompatible dimensions: {left:?} and {right:?}")]
    IncompatibleDimensions {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A single row or column was required.
    #[error("expected a vector, got a {width}x{height} matrix")]
    NotAVector { width: usize, height: usize },

    /// A vector with zero Euclidean norm cannot be normalized.
    #[error("cannot normalize a zero vector")]
    ZeroVector,

    /// Flat data does not fill a `width x height` grid.
    #[error("cannot build a {width}x{height} matrix from {len} values")]
    InvalidShape {
        width: usize,
        height: usize,
        len: usize,
    },

    /// A `(column, row)` coordinate lies outside the matrix.
    #[error("index ({column}, {row}) out of bounds for a {width}x{height} matrix")]
    IndexOutOfBounds {
        column: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    /// An external grid cell is missing or does not hold a number.
    #[error("cell ({column}, {row}) is not a number: {text:?}")]
    InvalidCell {
        column: usize,
        row: usize,
        text: String,
    },
}

impl CoreError {
    pub(crate) fn non_square(width: usize, height: usize) -> Self {
        Self::NonSquareMatrix { width, height }
    }
}

/// Convenience alias used throughout `echelon-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
