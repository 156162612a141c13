//! Diagonalization of real symmetric matrices.
//!
//! A real symmetric matrix `A` is orthogonally similar to a diagonal matrix:
//! `A = P D P^T` with `P` orthogonal (columns are eigenvectors) and `D`
//! holding the eigenvalues. `P` and `D` are found with the cyclic Jacobi
//! eigenvalue method.
//!
//! Non-symmetric input is rejected: its eigenvalues may be complex, which
//! this crate does not represent.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::Float;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Tuning knobs for the Jacobi iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JacobiOptions {
    /// Maximum number of full sweeps over the off-diagonal entries.
    pub max_sweeps: usize,
    /// Convergence threshold, in multiples of machine epsilon times the
    /// Frobenius norm of the input. Also used for the symmetry check.
    pub tolerance: f64,
}

impl Default for JacobiOptions {
    fn default() -> Self {
        Self {
            max_sweeps: 100,
            tolerance: 100.0,
        }
    }
}

/// `A = P D P^T` for a symmetric matrix `A`.
#[derive(Debug, Clone)]
pub struct Diagonalization<T: Float> {
    /// Eigenvalues in descending order of absolute value.
    eigenvalues: Vec<T>,
    /// `P`: eigenvectors as columns, in the same order as `eigenvalues`.
    eigenvectors: Matrix<T>,
}

impl<T: Float> Diagonalization<T> {
    /// The eigenvalues, sorted by descending absolute value.
    pub fn eigenvalues(&self) -> &[T] {
        &self.eigenvalues
    }

    /// `P`, whose columns are unit eigenvectors.
    pub fn similarity(&self) -> &Matrix<T> {
        &self.eigenvectors
    }

    /// `D`, the diagonal matrix similar to the input.
    pub fn diagonal(&self) -> Matrix<T> {
        Matrix::from_diagonal(&self.eigenvalues)
    }
}

/// Diagonalize a symmetric matrix with [`JacobiOptions::default`].
///
/// ```
/// # use echelon_core::Matrix;
/// # use echelon_core::linalg::diagonalize;
/// let a = Matrix::from_rows(&[[2.0_f64, 1.0], [1.0, 2.0]]).unwrap();
/// let d = diagonalize(&a).unwrap();
/// assert!((d.eigenvalues()[0] - 3.0).abs() < 1e-10);
/// assert!((d.eigenvalues()[1] - 1.0).abs() < 1e-10);
/// ```
pub fn diagonalize<T: Float>(m: &Matrix<T>) -> Result<Diagonalization<T>> {
    diagonalize_with(m, &JacobiOptions::default())
}

fn frobenius<T: Float>(data: &[T]) -> T {
    data.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
}

fn is_symmetric<T: Float>(m: &Matrix<T>, tol: T) -> bool {
    let n = m.width();
    (0..n).all(|i| ((i + 1)..n).all(|j| (m.get(i, j) - m.get(j, i)).abs() <= tol))
}

/// Frobenius norm of the strictly upper triangle of a symmetric matrix.
fn off_diagonal_norm<T: Float>(s: &Matrix<T>) -> T {
    let n = s.width();
    (0..n)
        .flat_map(|row| ((row + 1)..n).map(move |col| (col, row)))
        .fold(T::zero(), |acc, (col, row)| {
            let x = s.get(col, row);
            acc + x * x
        })
        .sqrt()
}

/// Annihilate `s[p, q]` with a Givens rotation `G`.
///
/// `s` becomes `G^T s G` and the rotation is accumulated into the columns of
/// `v` as `v G`.
fn rotate<T: Float>(s: &mut Matrix<T>, v: &mut Matrix<T>, p: usize, q: usize) {
    let n = s.width();
    let spq = s.get(q, p);
    let spp = s.get(p, p);
    let sqq = s.get(q, q);

    // Smaller root of t^2 + 2 theta t - 1 = 0, so |angle| <= pi/4.
    let theta = (sqq - spp) / (spq + spq);
    let root = (T::one() + theta * theta).sqrt();
    let t = if theta >= T::zero() {
        T::one() / (theta + root)
    } else {
        -(T::one() / (root - theta))
    };
    let cos = T::one() / (T::one() + t * t).sqrt();
    let sin = t * cos;

    s.set(p, p, spp - t * spq);
    s.set(q, q, sqq + t * spq);
    s.set(q, p, T::zero());
    s.set(p, q, T::zero());

    for r in (0..n).filter(|&r| r != p && r != q) {
        let (srp, srq) = (s.get(p, r), s.get(q, r));
        let new_p = cos * srp - sin * srq;
        let new_q = sin * srp + cos * srq;
        s.set(p, r, new_p);
        s.set(r, p, new_p);
        s.set(q, r, new_q);
        s.set(r, q, new_q);
    }

    for r in 0..n {
        let (vp, vq) = (v.get(p, r), v.get(q, r));
        v.set(p, r, cos * vp - sin * vq);
        v.set(q, r, sin * vp + cos * vq);
    }
}

/// Diagonalize a symmetric matrix.
///
/// Fails with [`CoreError::NonSquareMatrix`] for non-square input and with
/// [`CoreError::NonDiagonalizableMatrix`] when the matrix is not symmetric
/// or the iteration does not converge within `options.max_sweeps`.
pub fn diagonalize_with<T: Float>(
    m: &Matrix<T>,
    options: &JacobiOptions,
) -> Result<Diagonalization<T>> {
    if !m.is_square() {
        return Err(CoreError::non_square(m.width(), m.height()));
    }
    let n = m.width();
    debug!(n, max_sweeps = options.max_sweeps, "diagonalize");

    let tol = T::epsilon() * T::from_f64(options.tolerance) * frobenius(m.as_slice());
    if !is_symmetric(m, tol) {
        return Err(CoreError::NonDiagonalizableMatrix {
            reason: "only symmetric matrices are supported",
        });
    }

    let mut s = m.clone();
    let mut v = Matrix::identity(n);
    let mut sweeps = 0;
    while off_diagonal_norm(&s) > tol {
        if sweeps == options.max_sweeps {
            warn!(n, sweeps, "Jacobi iteration did not converge");
            return Err(CoreError::NonDiagonalizableMatrix {
                reason: "Jacobi iteration did not converge",
            });
        }
        for p in 0..n {
            for q in (p + 1)..n {
                if s.get(q, p).abs() > tol {
                    rotate(&mut s, &mut v, p, q);
                }
            }
        }
        sweeps += 1;
    }
    trace!(n, sweeps, "Jacobi converged");

    let mut pairs: Vec<(T, Vec<T>)> = (0..n).map(|i| (s.get(i, i), v.column(i))).collect();
    pairs.sort_by(|a, b| {
        b.0.abs()
            .partial_cmp(&a.0.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut eigenvectors = Matrix::zeros(n, n);
    for (col, (_, vector)) in pairs.iter().enumerate() {
        for (row, &x) in vector.iter().enumerate() {
            eigenvectors.set(col, row, x);
        }
    }

    Ok(Diagonalization {
        eigenvalues: pairs.into_iter().map(|(value, _)| value).collect(),
        eigenvectors,
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;
    use tracing_test::traced_test;

    use super::*;
    use crate::linalg::product::{multiply, transpose};

    fn mat<const W: usize>(rows: &[[f64; W]]) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    fn assert_close(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64) {
        assert_eq!(a.dims(), b.dims());
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert_relative_eq!(*x, *y, epsilon = tol);
        }
    }

    fn reconstruct(d: &Diagonalization<f64>) -> Matrix<f64> {
        let p = d.similarity();
        let pd = multiply(p, &d.diagonal()).unwrap();
        multiply(&pd, &transpose(p)).unwrap()
    }

    #[test]
    fn test_diagonal_input() {
        let d = diagonalize(&mat(&[[3.0, 0.0], [0.0, 5.0]])).unwrap();
        assert_eq!(d.eigenvalues(), &[5.0, 3.0]);
    }

    #[test]
    fn test_identity() {
        let d = diagonalize(&Matrix::<f64>::identity(3)).unwrap();
        for &v in d.eigenvalues() {
            assert_relative_eq!(v, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_2x2_eigenvalues() {
        // [[2,1],[1,3]] eigenvalues: (5 ± sqrt(5))/2
        let d = diagonalize(&mat(&[[2.0, 1.0], [1.0, 3.0]])).unwrap();
        let sqrt5 = 5.0_f64.sqrt();
        assert_relative_eq!(d.eigenvalues()[0], 2.5 + sqrt5 * 0.5, epsilon = 1e-10);
        assert_relative_eq!(d.eigenvalues()[1], 2.5 - sqrt5 * 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_negative_eigenvalue() {
        // [[1,2],[2,1]] has eigenvalues 3 and -1
        let d = diagonalize(&mat(&[[1.0, 2.0], [2.0, 1.0]])).unwrap();
        assert_relative_eq!(d.eigenvalues()[0], 3.0, epsilon = 1e-10);
        assert_relative_eq!(d.eigenvalues()[1], -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_reconstruction_3x3() {
        let a = mat(&[[4.0, 2.0, 1.0], [2.0, 5.0, 3.0], [1.0, 3.0, 6.0]]);
        let d = diagonalize(&a).unwrap();
        assert_close(&reconstruct(&d), &a, 1e-8);
    }

    #[test]
    fn test_orthogonal_similarity() {
        let a = mat(&[
            [5.0, 1.0, 2.0, 0.0],
            [1.0, 4.0, 1.0, 1.0],
            [2.0, 1.0, 3.0, 0.0],
            [0.0, 1.0, 0.0, 2.0],
        ]);
        let d = diagonalize(&a).unwrap();
        let p = d.similarity();
        let ptp = multiply(&transpose(p), p).unwrap();
        assert_close(&ptp, &Matrix::identity(4), 1e-8);
        assert_close(&reconstruct(&d), &a, 1e-8);
    }

    #[test]
    fn test_empty() {
        let d = diagonalize(&Matrix::<f64>::zeros(0, 0)).unwrap();
        assert!(d.eigenvalues().is_empty());
    }

    #[test]
    fn test_not_square() {
        assert!(matches!(
            diagonalize(&Matrix::<f64>::zeros(3, 2)),
            Err(CoreError::NonSquareMatrix { .. })
        ));
    }

    #[test]
    fn test_not_symmetric() {
        // Rotation by 90 degrees: eigenvalues are ±i.
        let r = mat(&[[0.0, -1.0], [1.0, 0.0]]);
        assert!(matches!(
            diagonalize(&r),
            Err(CoreError::NonDiagonalizableMatrix { .. })
        ));
    }

    #[test]
    #[traced_test]
    fn test_no_sweeps_fails_to_converge() {
        let a = mat(&[[2.0, 1.0], [1.0, 3.0]]);
        let options = JacobiOptions {
            max_sweeps: 0,
            ..JacobiOptions::default()
        };
        assert_eq!(
            diagonalize_with(&a, &options).unwrap_err(),
            CoreError::NonDiagonalizableMatrix {
                reason: "Jacobi iteration did not converge"
            }
        );
        assert!(logs_contain("did not converge"));
    }

    #[test]
    fn test_rotation_clears_pair() {
        let mut s = mat(&[[4.0, 2.0, 1.0], [2.0, 5.0, 3.0], [1.0, 3.0, 6.0]]);
        let mut v = Matrix::identity(3);
        rotate(&mut s, &mut v, 0, 1);
        assert_eq!(s.get(1, 0), 0.0);
        assert_eq!(s.get(0, 1), 0.0);
        // The trace is invariant under similarity.
        assert_relative_eq!(s.diagonal().iter().sum::<f64>(), 15.0, epsilon = 1e-12);
        let vtv = multiply(&transpose(&v), &v).unwrap();
        assert_close(&vtv, &Matrix::identity(3), 1e-12);
    }

    #[test]
    fn test_options_from_json() {
        let options: JacobiOptions = serde_json::from_str(r#"{"max_sweeps": 7}"#).unwrap();
        assert_eq!(options.max_sweeps, 7);
        assert_eq!(options.tolerance, 100.0);
    }
}
