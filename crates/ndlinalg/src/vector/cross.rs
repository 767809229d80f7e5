//! Generalized cross product.

use super::Vector;
use crate::error::{LinalgError, Result};
use crate::matrix::{Layout, Matrix};

/// Cross product of `n - 1` vectors of dimension `n`.
///
/// Component `i` is `(-1)^i det(M_i)`, where `M_i` is the matrix with the
/// inputs as rows and column `i` removed. The result is orthogonal to every
/// input.
///
/// # Errors
///
/// Returns `ShapeMismatch` unless every input has exactly one more component
/// than there are inputs.
///
/// # Examples
///
/// ```
/// use ndlinalg::Vector;
/// use ndlinalg::vector::cross;
///
/// let c = cross(&[Vector::from(vec![1.0, 2.0, 3.0]), Vector::from(vec![1.0, 5.0, 7.0])]).unwrap();
/// assert_eq!(c.to_vec(), vec![-1.0, -4.0, 3.0]);
/// ```
pub fn cross(vs: &[Vector]) -> Result<Vector> {
    let n = vs.len() + 1;
    if vs.is_empty() {
        return Err(LinalgError::shape("cross", &[0], &[n]));
    }
    if let Some(bad) = vs.iter().find(|v| v.len() != n) {
        return Err(LinalgError::shape("cross", &[vs.len(), bad.len()], &[vs.len(), n]));
    }

    let rows = Matrix::from_vectors(vs, Layout::Rows)?;
    let mut result = Vector::zeros(n);
    for i in 0..n {
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        result.put(i, sign * rows.remove_column(i)?.determinant()?);
    }
    Ok(result)
}
