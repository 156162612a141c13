//! # Echelon
//!
//! A small matrix calculator engine: row reduction, determinants, inverses,
//! products and diagonalization over dense real matrices, with a text-grid
//! adapter for whatever front end presents them.
//!
//! One `use echelon::prelude::*;` gives you the matrix type, the common
//! operations and the adapter traits.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Matrices, linear algebra, grid adapter |
//!
//! ```
//! # #[cfg(feature = "core")] {
//! use echelon::prelude::*;
//!
//! let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! assert_eq!(determinant(&m).unwrap(), -2.0);
//! # }
//! ```

#[cfg(feature = "core")]
pub use echelon_core as core;

/// Glob-import convenience: `use echelon::prelude::*;`
pub mod prelude {
    #[cfg(feature = "core")]
    pub use echelon_core::prelude::*;
}
