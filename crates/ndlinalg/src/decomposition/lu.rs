//! LU factorization (Doolittle, no pivoting).

use crate::config::EPSILON;
use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

/// Result of LU factorization.
#[derive(Debug, Clone, PartialEq)]
pub struct LuResult {
    /// Unit lower triangular factor.
    pub l: Matrix,
    /// Upper triangular factor.
    pub u: Matrix,
}

/// Factor a square matrix as `A = L U` with a unit diagonal on `L`.
///
/// No rows are exchanged, so a vanishing pivot is fatal.
///
/// # Errors
///
/// Returns `NotSquareMatrix` for a non-square input and `ZeroPivot` when a
/// pivot `|U[i][i]| < EPSILON` is needed to eliminate a later row.
///
/// # Example
///
/// ```
/// use ndlinalg::Matrix;
/// use ndlinalg::decomposition::lu;
///
/// let a = Matrix::from_rows(vec![vec![2.0, 4.0], vec![6.0, 8.0]]).unwrap();
/// let result = lu(&a).unwrap();
/// assert_eq!(result.l.to_rows(), vec![vec![1.0, 0.0], vec![3.0, 1.0]]);
/// assert_eq!(result.u.to_rows(), vec![vec![2.0, 4.0], vec![0.0, -4.0]]);
/// ```
pub fn lu(a: &Matrix) -> Result<LuResult> {
    let n = a.require_square()?;
    let mut l = Matrix::identity(n);
    let mut u = Matrix::zeros(n, n);

    for i in 0..n {
        for k in i..n {
            let sum: f64 = (0..i).map(|j| l.at(i, j) * u.at(j, k)).sum();
            u.put(i, k, a.at(i, k) - sum);
        }

        let pivot = u.at(i, i);
        if i + 1 < n && pivot.abs() < EPSILON {
            return Err(LinalgError::ZeroPivot {
                index: i,
                value: pivot,
            });
        }

        for k in (i + 1)..n {
            let sum: f64 = (0..i).map(|j| l.at(k, j) * u.at(j, i)).sum();
            l.put(k, i, (a.at(k, i) - sum) / pivot);
        }
    }

    Ok(LuResult { l, u })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_lu_2x2() {
        let a = m(&[&[2.0, 4.0], &[6.0, 8.0]]);
        let LuResult { l, u } = lu(&a).unwrap();
        assert_eq!(l, m(&[&[1.0, 0.0], &[3.0, 1.0]]));
        assert_eq!(u, m(&[&[2.0, 4.0], &[0.0, -4.0]]));
        assert_eq!(l.multiply(&u).unwrap(), a);
    }

    #[test]
    fn test_lu_reconstructs_3x3() {
        let a = m(&[&[4.0, 3.0, 2.0], &[2.0, 1.0, 3.0], &[3.0, 2.0, 1.0]]);
        let LuResult { l, u } = lu(&a).unwrap();
        assert_relative_eq!(l.multiply(&u).unwrap(), a, epsilon = 1e-12);
        for i in 0..3 {
            assert_eq!(l.get(i, i).unwrap(), 1.0);
            for j in (i + 1)..3 {
                assert_eq!(l.get(i, j).unwrap(), 0.0);
                assert_eq!(u.get(j, i).unwrap(), 0.0);
            }
        }
        // det(A) is the product of U's diagonal
        let det_u = u.get(0, 0).unwrap() * u.get(1, 1).unwrap() * u.get(2, 2).unwrap();
        assert_relative_eq!(det_u, a.determinant().unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_lu_zero_pivot() {
        let a = m(&[&[0.0, 1.0], &[1.0, 0.0]]);
        assert_eq!(
            lu(&a),
            Err(LinalgError::ZeroPivot {
                index: 0,
                value: 0.0
            })
        );
    }

    #[test]
    fn test_lu_singular_last_pivot_is_allowed() {
        let a = m(&[&[1.0, 2.0], &[2.0, 4.0]]);
        let LuResult { u, .. } = lu(&a).unwrap();
        assert_eq!(u.get(1, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_lu_not_square() {
        assert!(matches!(
            lu(&Matrix::zeros(2, 3)),
            Err(LinalgError::NotSquareMatrix { .. })
        ));
    }
}
