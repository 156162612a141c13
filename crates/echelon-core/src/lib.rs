//! `echelon-core` — dense matrices and the linear algebra built on them.
//!
//! Provides a fixed-size [`Matrix`], elementary row operations, row echelon
//! forms, determinants, inverses, products, vector normalization and
//! symmetric diagonalization, plus an [`adapter`] layer for exchanging
//! matrices with text-cell grids.
//!
//! # Design
//!
//! - Everything is computed from scratch on the three elementary row
//!   operations; there is no BLAS or LAPACK underneath.
//! - Generic over element types via the [`Scalar`] / [`Float`] traits.
//! - Every operation is pure: inputs are borrowed, results are new values.
//! - Failures are reported as [`CoreError`] values, never as sentinels.

pub mod adapter;
pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;

// Re-export key types at crate root for convenience.
pub use dtype::{Float, Scalar};
pub use error::{CoreError, Result};
pub use matrix::Matrix;

/// Items intended for glob-import: `use echelon_core::prelude::*;`
pub mod prelude {
    pub use crate::adapter::{CellGrid, CellSink, FormatMode, Outcome, TextGrid};
    pub use crate::dtype::{Float, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::linalg::{Echelon, determinant, invert, multiply, transpose};
    pub use crate::matrix::Matrix;
}
