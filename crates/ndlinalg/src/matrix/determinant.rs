//! Determinant, cofactor matrix and inverse.
//!
//! All three use Laplace (cofactor) expansion, which costs `O(n!)`. They are
//! meant for the small matrices this crate targets; [`Matrix::lu`] is the
//! cheaper route to a determinant when no pivot vanishes.

use std::cmp::Ordering;

use super::Matrix;
use crate::config::EPSILON;
use crate::error::{LinalgError, Result};

fn sign(k: usize) -> f64 {
    if k % 2 == 0 { 1.0 } else { -1.0 }
}

impl Matrix {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// The empty matrix has determinant 1.
    ///
    /// # Errors
    ///
    /// Returns `NotSquareMatrix` for a non-square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndlinalg::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![2.0, 4.0], vec![6.0, 8.0]]).unwrap();
    /// assert_eq!(a.determinant().unwrap(), -8.0);
    /// ```
    pub fn determinant(&self) -> Result<f64> {
        let n = self.require_square()?;
        match n {
            0 => Ok(1.0),
            1 => Ok(self.at(0, 0)),
            2 => Ok(self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0)),
            _ => {
                let mut det = 0.0;
                for j in 0..n {
                    det += sign(j) * self.at(0, j) * self.minor(0, j)?.determinant()?;
                }
                Ok(det)
            }
        }
    }

    /// Order two square matrices by determinant.
    ///
    /// NaN determinants sort after every number.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use ndlinalg::Matrix;
    ///
    /// let small = Matrix::identity(2);
    /// let large = Matrix::identity(2).mul_scalar(3.0);
    /// assert_eq!(small.cmp_determinant(&large).unwrap(), Ordering::Less);
    /// ```
    pub fn cmp_determinant(&self, other: &Matrix) -> Result<Ordering> {
        Ok(self.determinant()?.total_cmp(&other.determinant()?))
    }

    /// Matrix of cofactors `C[i][j] = (-1)^(i+j) det(minor(i, j))`.
    pub fn cofactor(&self) -> Result<Matrix> {
        let n = self.require_square()?;
        let mut c = Matrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                c.put(i, j, sign(i + j) * self.minor(i, j)?.determinant()?);
            }
        }
        Ok(c)
    }

    /// Inverse via the adjugate: `cofactor(A)ᵗ / det(A)`.
    ///
    /// # Errors
    ///
    /// Returns `NotSquareMatrix` for a non-square matrix and `SingularMatrix`
    /// when `|det| < EPSILON` or the determinant is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndlinalg::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// assert!((inv.get(0, 0).unwrap() - 0.6).abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Matrix> {
        let determinant = self.determinant()?;
        if !determinant.is_finite() || determinant.abs() < EPSILON {
            return Err(LinalgError::SingularMatrix { determinant });
        }
        Ok(self.cofactor()?.transpose().mul_scalar(1.0 / determinant))
    }
}
