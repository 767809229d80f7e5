//! Singular values and the singular value decomposition.
//!
//! Everything here goes through the Gram matrix `AᵗA`: its eigenvalues are
//! the squared singular values and its eigenvectors the right singular
//! vectors. `AᵗA` is positive semi-definite, so the eigenvalue iteration runs
//! with the [`EigenConfig::gram`] shift.

use tracing::debug;

use super::eigen::{Eigenproblem, Eigenvalues, eigenproblem, eigenvalues, eigenvector, map_keys};
use crate::config::EigenConfig;
use crate::error::{LinalgError, Result};
use crate::matrix::{Layout, Matrix};
use crate::vector::Vector;

/// Residual magnitude below which a candidate basis vector is rejected.
const BASIS_TOLERANCE: f64 = 1e-6;

/// Result of singular value decomposition `A = U S Vᵗ`.
#[derive(Debug, Clone, PartialEq)]
pub struct SvdResult {
    /// Left singular vectors as columns, `rows × rows`.
    pub u: Matrix,
    /// Singular values on the leading diagonal, `rows × cols`.
    pub s: Matrix,
    /// Right singular vectors as columns, `cols × cols`.
    pub v: Matrix,
}

fn gram(a: &Matrix) -> Result<Matrix> {
    a.transpose().multiply(a)
}

fn root(value: f64) -> f64 {
    value.max(0.0).sqrt()
}

/// Singular values of `A`, largest first.
///
/// Negative rounding noise in the eigenvalues of `AᵗA` is clamped to zero.
///
/// # Example
///
/// ```
/// use ndlinalg::{EigenConfig, Matrix};
/// use ndlinalg::decomposition::singular_values;
///
/// let a = Matrix::from_rows(vec![vec![3.0, 2.0, 2.0], vec![2.0, 3.0, -2.0]]).unwrap();
/// let s = singular_values(&a, &EigenConfig::gram()).unwrap();
/// assert_eq!(s, vec![5.0, 3.0, 0.0]);
/// ```
pub fn singular_values(a: &Matrix, config: &EigenConfig) -> Result<Vec<f64>> {
    let Eigenvalues { values, .. } = eigenvalues(&gram(a)?, config)?;
    Ok(values.into_iter().map(root).collect())
}

/// Singular values paired with their right singular vectors.
///
/// This is the eigenproblem of `AᵗA` with every key replaced by its square
/// root.
pub fn singular_solution(a: &Matrix, config: &EigenConfig) -> Result<Eigenproblem> {
    Ok(map_keys(eigenproblem(&gram(a)?, config)?, root))
}

/// Orthonormalize `w` against `basis`, or `None` if nothing is left.
fn residual(mut w: Vector, basis: &[Vector]) -> Result<Option<Vector>> {
    for b in basis {
        let coefficient = w.dot(b)?;
        w.sub_assign(&b.mul_scalar(coefficient))?;
    }
    let magnitude = w.magnitude();
    if magnitude > BASIS_TOLERANCE {
        w.scale(1.0 / magnitude);
        Ok(Some(w))
    } else {
        Ok(None)
    }
}

/// Fill every empty slot with a standard basis vector orthogonal to `basis`.
fn complete(slots: Vec<Option<Vector>>, basis: &mut Vec<Vector>, dim: usize) -> Result<Vec<Vector>> {
    let missing = slots.iter().filter(|s| s.is_none()).count();
    if missing > 0 {
        debug!(missing, dim, "completing singular basis from standard basis");
    }

    let mut columns = Vec::with_capacity(slots.len());
    for slot in slots {
        let column = match slot {
            Some(v) => v,
            None => {
                let mut found = None;
                for e in 0..dim {
                    if let Some(w) = residual(Vector::unit(e, dim)?, basis)? {
                        found = Some(w);
                        break;
                    }
                }
                let w = found.unwrap_or_else(|| Vector::zeros(dim));
                basis.push(w.clone());
                w
            }
        };
        columns.push(column);
    }
    Ok(columns)
}

fn columns_to_matrix(columns: &[Vector], rows: usize) -> Result<Matrix> {
    if columns.is_empty() {
        return Ok(Matrix::zeros(rows, 0));
    }
    Matrix::from_vectors(columns, Layout::Columns)
}

/// Singular value decomposition `A = U S Vᵗ`.
///
/// The columns of `V` are the eigenvectors of `AᵗA` in descending eigenvalue
/// order. Vectors the eigen solver could not produce, and repeats of an
/// earlier direction, are replaced by standard basis vectors orthogonalized
/// against the rest. For `i < min(rows, cols)` column `i` of `U` is
/// `A v_i / σ_i`; the remaining columns of `U` are completed the same way as
/// `V`.
///
/// # Errors
///
/// Returns `DegenerateSingularValue` if one of the leading `min(rows, cols)`
/// singular values is not above `config.epsilon`, and
/// `InaccurateSingularVector` if some `A v_i / σ_i` misses unit length by
/// more than `1e-6`.
///
/// # Example
///
/// ```
/// use ndlinalg::{EigenConfig, Matrix};
/// use ndlinalg::decomposition::svd;
///
/// let a = Matrix::from_rows(vec![vec![3.0, 2.0, 2.0], vec![2.0, 3.0, -2.0]]).unwrap();
/// let result = svd(&a, &EigenConfig::gram()).unwrap();
/// assert_eq!(result.u.shape(), &[2, 2]);
/// assert_eq!(result.s.shape(), &[2, 3]);
/// assert_eq!(result.v.shape(), &[3, 3]);
/// ```
pub fn svd(a: &Matrix, config: &EigenConfig) -> Result<SvdResult> {
    let (rows, cols) = (a.rows(), a.cols());
    let gram = gram(a)?;
    let Eigenvalues { values, .. } = eigenvalues(&gram, config)?;

    let mut basis = Vec::with_capacity(cols);
    let mut slots = Vec::with_capacity(cols);
    for &value in &values {
        let v = eigenvector(&gram, value, config)?;
        let kept = if v.iter().any(f64::is_nan) {
            None
        } else {
            residual(v, &basis)?
        };
        if let Some(w) = &kept {
            basis.push(w.clone());
        }
        slots.push(kept);
    }
    let v_columns = complete(slots, &mut basis, cols)?;

    let sigma: Vec<f64> = values.iter().copied().map(root).collect();
    let k = rows.min(cols);
    let mut s = Matrix::zeros(rows, cols);
    for (i, &value) in sigma.iter().enumerate().take(k) {
        s.put(i, i, value);
    }

    let mut u_basis = Vec::with_capacity(rows);
    let mut u_slots = Vec::with_capacity(rows);
    for (i, v_i) in v_columns.iter().enumerate().take(k) {
        if sigma[i] <= config.epsilon {
            return Err(LinalgError::DegenerateSingularValue {
                index: i,
                value: sigma[i],
            });
        }
        let u_i = a.multiply_vector(v_i)?.to_vector()?.div_scalar(sigma[i]);
        let norm = u_i.magnitude();
        if norm.is_nan() || (norm - 1.0).abs() > BASIS_TOLERANCE {
            return Err(LinalgError::InaccurateSingularVector { index: i, norm });
        }
        u_basis.push(u_i.clone());
        u_slots.push(Some(u_i));
    }
    u_slots.resize(rows, None);
    let u_columns = complete(u_slots, &mut u_basis, rows)?;

    Ok(SvdResult {
        u: columns_to_matrix(&u_columns, rows)?,
        s,
        v: columns_to_matrix(&v_columns, cols)?,
    })
}
