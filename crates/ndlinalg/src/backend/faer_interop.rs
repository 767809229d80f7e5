//! Conversion between [`Matrix`] and faer matrices.
//!
//! Both directions copy. faer is column-major and `Matrix` is row-major, so
//! no view can be shared.
//!
//! The reference routines run faer's solvers on the same input and are used
//! to cross-check the iterative algorithms in this crate.

use faer::linalg::solvers::{EvdError, Svd, SvdError};
use faer::{Mat, MatRef};

use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

impl Matrix {
    /// Copy into an owned faer matrix.
    ///
    /// # Example
    ///
    /// ```
    /// use ndlinalg::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// let mat = m.to_faer();
    /// assert_eq!(mat.nrows(), 2);
    /// assert_eq!(mat.ncols(), 3);
    /// assert_eq!(mat[(1, 0)], 4.0);
    /// ```
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.rows(), self.cols(), |i, j| self.at(i, j))
    }

    /// Copy a faer matrix view.
    ///
    /// ```
    /// use faer::Mat;
    /// use ndlinalg::Matrix;
    ///
    /// let mat = Mat::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
    /// let m = Matrix::from_faer(mat.as_ref());
    /// assert_eq!(m.shape(), &[2, 3]);
    /// assert_eq!(m.get(1, 2).unwrap(), 5.0);
    /// ```
    pub fn from_faer(mat: MatRef<'_, f64>) -> Matrix {
        let (rows, cols) = (mat.nrows(), mat.ncols());
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(mat[(i, j)]);
            }
        }
        Matrix::from_vec_unchecked(data, rows, cols)
    }
}

/// Eigenvalues of a symmetric matrix from faer's self-adjoint solver,
/// largest first.
///
/// Only the lower triangle is read.
pub fn reference_symmetric_eigenvalues(a: &Matrix) -> Result<Vec<f64>> {
    let n = a.require_square()?;
    let mat = a.to_faer();
    let evd = mat
        .as_ref()
        .self_adjoint_eigen(faer::Side::Lower)
        .map_err(|e: EvdError| LinalgError::Backend {
            op: "self_adjoint_eigen",
            message: format!("{e:?}"),
        })?;

    // faer returns them nondecreasing
    let diag = evd.S();
    Ok((0..n).rev().map(|i| diag[i]).collect())
}

/// The `min(rows, cols)` singular values from faer's thin SVD, largest first.
pub fn reference_singular_values(a: &Matrix) -> Result<Vec<f64>> {
    let k = a.rows().min(a.cols());
    let mat = a.to_faer();
    let svd = Svd::new_thin(mat.as_ref()).map_err(|e: SvdError| LinalgError::Backend {
        op: "svd",
        message: format!("{e:?}"),
    })?;

    let diag = svd.S();
    let mut values: Vec<f64> = (0..k).map(|i| diag[i]).collect();
    values.sort_by(|x, y| y.total_cmp(x));
    Ok(values)
}
