//! Linear algebra on dense [`Matrix`] values.
//!
//! Everything is built from scratch on three elementary row operations:
//!
//! | Layer        | Operations                                              |
//! |--------------|---------------------------------------------------------|
//! | Row ops      | [`scale_row`], [`add_row_multiple`], [`swap_rows`]      |
//! | Elimination  | [`row_echelon_form`], [`reduced_row_echelon_form`], [`determinant`], [`rank`] |
//! | Products     | [`transpose`], [`add`], [`sub`], [`scale`], [`multiply`] |
//! | Cofactors    | [`minor`], [`cofactor_matrix`], [`adjoint`], [`invert`] |
//! | Vectors      | [`nrm2`], [`normalize`]                                 |
//! | Eigen        | [`diagonalize`] (symmetric input)                       |
//!
//! All functions are pure: inputs are borrowed and results are new values.

pub mod cofactor;
pub mod diag;
pub mod echelon;
pub mod normalize;
pub mod product;
pub mod row_ops;

pub use cofactor::{adjoint, cofactor_matrix, invert, minor};
pub use diag::{Diagonalization, JacobiOptions, diagonalize, diagonalize_with};
pub use echelon::{Echelon, determinant, rank, reduced_row_echelon_form, row_echelon_form};
pub use normalize::{normalize, nrm2};
pub use product::{add, multiply, scale, sub, transpose};
pub use row_ops::{add_row_multiple, scale_row, swap_rows};

use crate::error::Result;
use crate::matrix::Matrix;
use crate::{Float, Scalar};

// ======================================================================
// Convenience methods on Matrix
// ======================================================================

impl<T: Scalar> Matrix<T> {
    /// The transpose of `self`.
    #[must_use]
    pub fn transpose(&self) -> Matrix<T> {
        transpose(self)
    }

    /// Matrix product `self * other`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        multiply(self, other)
    }
}

impl<T: Float> Matrix<T> {
    /// Determinant of a square matrix.
    pub fn det(&self) -> Result<T> {
        determinant(self)
    }

    /// Inverse of a square, non-singular matrix.
    pub fn inv(&self) -> Result<Matrix<T>> {
        invert(self)
    }

    /// Reduced row echelon form.
    #[must_use]
    pub fn rref(&self) -> Matrix<T> {
        reduced_row_echelon_form(self)
    }
}
