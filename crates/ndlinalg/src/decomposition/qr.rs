//! QR factorization by Gram-Schmidt.

use tracing::trace;

use crate::error::Result;
use crate::matrix::{Layout, Matrix};
use crate::vector::orthonormalize;

/// Result of QR factorization.
#[derive(Debug, Clone, PartialEq)]
pub struct QrResult {
    /// Orthonormal columns of the input, or the identity on fallback.
    pub q: Matrix,
    /// `Qᵗ A`, or a copy of `A` on fallback.
    pub r: Matrix,
    /// Set when the columns were rank deficient and the identity fallback
    /// was taken.
    pub degenerate: bool,
}

/// Compute `A = Q R` by orthonormalizing the columns of `A`.
///
/// `Q` holds the orthonormalized columns and `R = Qᵗ A` is upper triangular.
/// If the columns are linearly dependent the orthonormalization yields NaN;
/// in that case `Q` is the identity, `R` is a copy of `A` and
/// [`QrResult::degenerate`] is set. Either way `Q R = A`.
///
/// # Example
///
/// ```
/// use ndlinalg::Matrix;
/// use ndlinalg::decomposition::qr;
///
/// let a = Matrix::from_rows(vec![vec![3.0, 1.0], vec![4.0, 2.0]]).unwrap();
/// let result = qr(&a).unwrap();
/// assert!(!result.degenerate);
/// assert!((result.q.get(1, 0).unwrap() - 0.8).abs() < 1e-12);
/// ```
pub fn qr(a: &Matrix) -> Result<QrResult> {
    let columns = orthonormalize(&a.col_vectors())?;
    let q = if columns.is_empty() {
        Matrix::zeros(a.rows(), 0)
    } else {
        Matrix::from_vectors(&columns, Layout::Columns)?
    };
    let r = q.transpose().multiply(a)?;

    let has_nan = |m: &Matrix| m.iter().any(f64::is_nan);
    if has_nan(&q) || has_nan(&r) {
        trace!(rows = a.rows(), cols = a.cols(), "rank-deficient QR, using identity");
        return Ok(QrResult {
            q: Matrix::identity(a.rows()),
            r: a.clone(),
            degenerate: true,
        });
    }

    Ok(QrResult {
        q,
        r,
        degenerate: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn assert_orthonormal_columns(q: &Matrix) {
        let gram = q.transpose().multiply(q).unwrap();
        assert_relative_eq!(gram, Matrix::identity(q.cols()), epsilon = 1e-12);
    }

    #[test]
    fn test_qr_square() {
        let a = m(&[&[12.0, -51.0, 4.0], &[6.0, 167.0, -68.0], &[-4.0, 24.0, -41.0]]);
        let QrResult { q, r, degenerate } = qr(&a).unwrap();
        assert!(!degenerate);
        assert_orthonormal_columns(&q);
        assert_relative_eq!(q.multiply(&r).unwrap(), a, epsilon = 1e-10);
        for i in 0..3 {
            for j in 0..i {
                assert!(r.get(i, j).unwrap().abs() < 1e-10);
            }
        }
        assert_relative_eq!(r.get(0, 0).unwrap(), 14.0, epsilon = 1e-10);
    }

    #[test]
    fn test_qr_tall() {
        let a = m(&[&[1.0, 0.0], &[0.0, 1.0], &[1.0, 1.0]]);
        let QrResult { q, r, degenerate } = qr(&a).unwrap();
        assert!(!degenerate);
        assert_eq!(q.shape(), &[3, 2]);
        assert_eq!(r.shape(), &[2, 2]);
        assert_orthonormal_columns(&q);
        assert_relative_eq!(q.multiply(&r).unwrap(), a, epsilon = 1e-12);
    }

    #[test]
    fn test_qr_rank_deficient_falls_back() {
        let a = m(&[&[1.0, 2.0], &[2.0, 4.0]]);
        let QrResult { q, r, degenerate } = qr(&a).unwrap();
        assert!(degenerate);
        assert_eq!(q, Matrix::identity(2));
        assert_eq!(r, a);
    }

    #[test]
    fn test_qr_zero_matrix_falls_back() {
        let a = Matrix::zeros(2, 2);
        assert!(qr(&a).unwrap().degenerate);
    }
}
