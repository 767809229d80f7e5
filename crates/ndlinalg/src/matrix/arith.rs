//! Matrix arithmetic.

use super::Matrix;
use crate::error::{LinalgError, Result};
use crate::vector::Vector;

impl Matrix {
    fn check_same_shape(&self, other: &Matrix, op: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinalgError::shape(op, self.shape(), other.shape()));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Matrix, op: &'static str, f: impl Fn(f64, f64) -> f64) -> Result<Matrix> {
        self.check_same_shape(other, op)?;
        let data = self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect();
        Ok(Matrix::from_vec_unchecked(data, self.rows(), self.cols()))
    }

    fn mapped(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix::from_vec_unchecked(self.iter().map(f).collect(), self.rows(), self.cols())
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Entry-wise product.
    pub fn hadamard(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "hadamard", |a, b| a * b)
    }

    pub fn add_scalar(&self, value: f64) -> Matrix {
        self.mapped(|x| x + value)
    }

    pub fn sub_scalar(&self, value: f64) -> Matrix {
        self.mapped(|x| x - value)
    }

    pub fn mul_scalar(&self, value: f64) -> Matrix {
        self.mapped(|x| x * value)
    }

    pub fn div_scalar(&self, value: f64) -> Matrix {
        self.mapped(|x| x / value)
    }

    /// Matrix product `self · other`.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `self.cols() == other.rows()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndlinalg::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// let b = Matrix::from_rows(vec![vec![1.0], vec![0.0], vec![-1.0]]).unwrap();
    /// assert_eq!(a.multiply(&b).unwrap().to_rows(), vec![vec![-2.0], vec![-2.0]]);
    /// ```
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(LinalgError::shape("multiply", self.shape(), other.shape()));
        }
        let (n, inner, m) = (self.rows(), self.cols(), other.cols());
        let mut data = vec![0.0; n * m];
        for i in 0..n {
            for k in 0..inner {
                let a = self.at(i, k);
                for j in 0..m {
                    data[i * m + j] += a * other.at(k, j);
                }
            }
        }
        Ok(Matrix::from_vec_unchecked(data, n, m))
    }

    /// Product with `v` taken as a column; the result is `rows × 1`.
    pub fn multiply_vector(&self, v: &Vector) -> Result<Matrix> {
        self.multiply(&v.column_matrix())
    }

    /// Frobenius inner product: sum of entry-wise products.
    pub fn dot(&self, other: &Matrix) -> Result<f64> {
        self.check_same_shape(other, "dot")?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// New matrix with `v` appended as the last column.
    pub fn augment(&self, v: &Vector) -> Result<Matrix> {
        self.push_column(v)
    }
}
