//! Real eigenvalues and eigenvectors by shifted QR iteration.
//!
//! The iteration `A_{k+1} = R_k Q_k` runs a fixed number of rounds on
//! `A - shift·I`. The diagonal then holds the eigenvalue estimates. This
//! converges for real matrices with distinct real eigenvalues. Repeated
//! eigenvalues, complex pairs and rank-deficient iterates (which hit the
//! identity fallback in [`qr`](super::qr) and stop moving) produce
//! unreliable estimates. Those runs are visible through
//! [`Eigenvalues::qr_fallbacks`] and the NaN pairs counted in
//! [`Eigenproblem::dropped`].

use tracing::debug;

use super::qr::{QrResult, qr};
use crate::config::EigenConfig;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Eigenvalue estimates, sorted descending.
#[derive(Debug, Clone, PartialEq)]
pub struct Eigenvalues {
    pub values: Vec<f64>,
    /// Number of iterations in which QR took the identity fallback.
    pub qr_fallbacks: usize,
}

/// An eigenvalue with a unit eigenvector.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenPair {
    pub value: f64,
    pub vector: Vector,
}

/// Eigenvalue → eigenvector mapping with unique keys.
///
/// Pairs are kept in descending eigenvalue order. Two eigenvalues are the
/// same key only when their bits are identical; a later pair with an
/// existing key replaces the earlier vector and counts as a collision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Eigenproblem {
    pairs: Vec<EigenPair>,
    dropped: usize,
    collisions: usize,
    qr_fallbacks: usize,
}

impl Eigenproblem {
    pub(crate) fn insert(&mut self, value: f64, vector: Vector) {
        match self.pairs.iter_mut().find(|p| p.value.to_bits() == value.to_bits()) {
            Some(existing) => {
                existing.vector = vector;
                self.collisions += 1;
            }
            None => self.pairs.push(EigenPair { value, vector }),
        }
    }

    /// Eigenvector stored under exactly this eigenvalue.
    pub fn get(&self, value: f64) -> Option<&Vector> {
        self.pairs
            .iter()
            .find(|p| p.value.to_bits() == value.to_bits())
            .map(|p| &p.vector)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EigenPair> {
        self.pairs.iter()
    }

    pub fn pairs(&self) -> &[EigenPair] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<EigenPair> {
        self.pairs
    }

    /// The stored eigenvalues in order.
    pub fn values(&self) -> Vec<f64> {
        self.pairs.iter().map(|p| p.value).collect()
    }

    /// Pairs discarded because the eigenvalue or eigenvector contained NaN.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Pairs that replaced an earlier pair with the same eigenvalue.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// QR fallbacks taken while estimating the eigenvalues.
    pub fn qr_fallbacks(&self) -> usize {
        self.qr_fallbacks
    }
}

fn has_nan(v: &Vector) -> bool {
    v.iter().any(f64::is_nan)
}

fn shifted(a: &Matrix, shift: f64) -> Result<Matrix> {
    a.subtract(&Matrix::identity(a.rows()).mul_scalar(shift))
}

/// Stable insertion sort, largest first.
fn sort_descending(values: &mut [f64]) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1] < values[j] {
            values.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Estimate the eigenvalues of a square matrix.
///
/// Runs `config.iterations` rounds of unshifted QR on `A - shift·I`, adds the
/// shift back to the diagonal and rounds each entry to
/// `config.rounding_digits` fractional digits.
///
/// # Errors
///
/// Returns `NotSquareMatrix` for a non-square input.
///
/// # Example
///
/// ```
/// use ndlinalg::{EigenConfig, Matrix};
/// use ndlinalg::decomposition::eigenvalues;
///
/// let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 2.0]]).unwrap();
/// let result = eigenvalues(&a, &EigenConfig::default()).unwrap();
/// assert_eq!(result.values, vec![3.0, 1.0]);
/// assert_eq!(result.qr_fallbacks, 0);
/// ```
pub fn eigenvalues(a: &Matrix, config: &EigenConfig) -> Result<Eigenvalues> {
    let n = a.require_square()?;
    let mut current = shifted(a, config.shift)?;
    let mut qr_fallbacks = 0;

    for _ in 0..config.iterations {
        let QrResult { q, r, degenerate } = qr(&current)?;
        if degenerate {
            qr_fallbacks += 1;
        }
        current = r.multiply(&q)?;
    }

    let mut values: Vec<f64> = (0..n)
        .map(|i| config.round(current.at(i, i) + config.shift))
        .collect();
    sort_descending(&mut values);

    if qr_fallbacks > 0 {
        debug!(
            qr_fallbacks,
            iterations = config.iterations,
            "eigenvalue iteration hit rank-deficient QR"
        );
    }

    Ok(Eigenvalues {
        values,
        qr_fallbacks,
    })
}

/// Unit eigenvector for `value` by elimination and back-substitution.
///
/// `A - value·I` is brought to row echelon form with pivots below
/// `config.epsilon` skipped. Every column without a pivot is a free
/// variable set to 1. The pivot rows are then solved from the last one up,
/// each for its own pivot column: `x[p] = -(row · x) / row[p]`. Entries
/// below `config.epsilon` are zeroed and the vector normalized.
///
/// If `value` is not an eigenvalue (to working precision) every column has
/// a pivot, the only solution is zero and the result is all NaN.
pub fn eigenvector(a: &Matrix, value: f64, config: &EigenConfig) -> Result<Vector> {
    let n = a.require_square()?;
    let (echelon, pivots) = shifted(a, value)?.row_echelon_with(config.epsilon);
    let epsilon = config.epsilon;

    let mut v = Vector::zeros(n);
    let mut free = vec![true; n];
    for &p in &pivots {
        free[p] = false;
    }
    for i in (0..n).filter(|&i| free[i]) {
        v.put(i, 1.0);
    }

    for (k, &p) in pivots.iter().enumerate().rev() {
        let row = echelon.row(k)?;
        let coordinate = -v.dot(&row)? / row.at(p);
        v.put(p, if coordinate.is_finite() { coordinate } else { f64::NAN });
    }

    v.map_indexed(|v, i| if v.at(i).abs() < epsilon { 0.0 } else { v.at(i) })
        .normalize();
    Ok(v)
}

/// Eigenvectors for each of `values`, skipping pairs that contain NaN.
pub fn eigenvectors(a: &Matrix, values: &[f64], config: &EigenConfig) -> Result<Vec<EigenPair>> {
    let mut pairs = Vec::with_capacity(values.len());
    for &value in values {
        let vector = eigenvector(a, value, config)?;
        if value.is_nan() || has_nan(&vector) {
            continue;
        }
        pairs.push(EigenPair { value, vector });
    }
    Ok(pairs)
}

/// Eigenvalues with their eigenvectors.
///
/// Pairs whose eigenvalue or eigenvector contains NaN are dropped and
/// counted. Equal eigenvalues share one entry.
///
/// # Example
///
/// ```
/// use ndlinalg::{EigenConfig, Matrix};
/// use ndlinalg::decomposition::eigenproblem;
///
/// let a = Matrix::identity(2);
/// let problem = eigenproblem(&a, &EigenConfig::default()).unwrap();
/// assert_eq!(problem.len(), 1);
/// assert_eq!(problem.collisions(), 1);
/// assert!(problem.get(1.0).is_some());
/// ```
pub fn eigenproblem(a: &Matrix, config: &EigenConfig) -> Result<Eigenproblem> {
    let Eigenvalues {
        values,
        qr_fallbacks,
    } = eigenvalues(a, config)?;

    let mut problem = Eigenproblem {
        qr_fallbacks,
        ..Default::default()
    };
    for value in values {
        let vector = eigenvector(a, value, config)?;
        if value.is_nan() || has_nan(&vector) {
            debug!(value, "dropping eigenpair containing NaN");
            problem.dropped += 1;
            continue;
        }
        problem.insert(value, vector);
    }
    Ok(problem)
}

/// Rebuild a problem with every key passed through `f`, keeping the counters.
pub(crate) fn map_keys(problem: Eigenproblem, f: impl Fn(f64) -> f64) -> Eigenproblem {
    let mut mapped = Eigenproblem {
        dropped: problem.dropped,
        collisions: problem.collisions,
        qr_fallbacks: problem.qr_fallbacks,
        ..Default::default()
    };
    for EigenPair { value, vector } in problem.pairs {
        mapped.insert(f(value), vector);
    }
    mapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinalgError;
    use approx::assert_relative_eq;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn default() -> EigenConfig {
        EigenConfig::default()
    }

    #[test]
    fn test_sort_descending_stable() {
        let mut values = vec![1.0, 3.0, 2.0, 3.0, -1.0];
        sort_descending(&mut values);
        assert_eq!(values, vec![3.0, 3.0, 2.0, 1.0, -1.0]);
    }

    #[test]
    fn test_eigenvalues_symmetric() {
        let a = m(&[&[2.0, 0.0, 0.0], &[0.0, 3.0, 4.0], &[0.0, 4.0, 9.0]]);
        let result = eigenvalues(&a, &default()).unwrap();
        assert_eq!(result.values, vec![11.0, 2.0, 1.0]);
    }

    #[test]
    fn test_eigenvalues_nonsymmetric() {
        let a = m(&[&[4.0, 1.0], &[2.0, 3.0]]);
        assert_eq!(eigenvalues(&a, &default()).unwrap().values, vec![5.0, 2.0]);

        let b = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let values = eigenvalues(&b, &default()).unwrap().values;
        let root = 33f64.sqrt() / 2.0;
        assert_relative_eq!(values[0], 2.5 + root, epsilon = 1e-9);
        assert_relative_eq!(values[1], 2.5 - root, epsilon = 1e-9);
    }

    #[test]
    fn test_eigenvalues_not_square() {
        assert_eq!(
            eigenvalues(&Matrix::zeros(2, 3), &default()),
            Err(LinalgError::NotSquareMatrix { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_singular_matrix_needs_shift() {
        let a = m(&[&[1.0, 2.0], &[2.0, 4.0]]);

        let stuck = eigenvalues(&a, &default()).unwrap();
        assert_eq!(stuck.qr_fallbacks, default().iterations);
        assert_eq!(stuck.values, vec![4.0, 1.0]);

        let shifted = eigenvalues(&a, &EigenConfig::gram()).unwrap();
        assert_eq!(shifted.qr_fallbacks, 0);
        assert_eq!(shifted.values, vec![5.0, 0.0]);
    }

    #[test]
    fn test_eigenvector_symmetric() {
        let a = m(&[&[2.0, 1.0], &[1.0, 2.0]]);
        let v = eigenvector(&a, 3.0, &default()).unwrap();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(v, Vector::from(vec![h, h]), epsilon = 1e-12);

        let w = eigenvector(&a, 1.0, &default()).unwrap();
        assert_relative_eq!(w, Vector::from(vec![-h, h]), epsilon = 1e-12);
    }

    #[test]
    fn test_eigenvector_satisfies_definition() {
        let a = m(&[&[6.0, 2.0, 1.0], &[2.0, 3.0, 1.0], &[1.0, 1.0, 1.0]]);
        for value in eigenvalues(&a, &default()).unwrap().values {
            let v = eigenvector(&a, value, &default()).unwrap();
            let av = a.multiply_vector(&v).unwrap().to_vector().unwrap();
            assert_relative_eq!(av, v.mul_scalar(value), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_eigenproblem_diagonal() {
        let a = m(&[&[2.0, 0.0], &[0.0, 1.0]]);
        let problem = eigenproblem(&a, &default()).unwrap();
        assert_eq!(problem.values(), vec![2.0, 1.0]);
        assert_eq!(problem.dropped(), 0);
        assert_eq!(problem.get(2.0).unwrap().clone(), Vector::from(vec![1.0, 0.0]));
        assert_eq!(problem.get(1.0).unwrap().clone(), Vector::from(vec![0.0, 1.0]));
    }

    #[test]
    fn test_eigenproblem_upper_triangular() {
        let a = m(&[&[2.0, 1.0], &[0.0, 1.0]]);
        let problem = eigenproblem(&a, &default()).unwrap();
        assert_eq!(problem.values(), vec![2.0, 1.0]);
        assert_eq!(problem.dropped(), 0);
        assert_eq!(problem.get(2.0).unwrap().clone(), Vector::from(vec![1.0, 0.0]));
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(
            problem.get(1.0).unwrap().clone(),
            Vector::from(vec![-h, h]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_eigenvector_zero_leading_column() {
        // A - 2I has an all-zero first column
        let a = m(&[&[2.0, 0.0, 0.0], &[0.0, 3.0, 4.0], &[0.0, 4.0, 9.0]]);
        let problem = eigenproblem(&a, &default()).unwrap();
        assert_eq!(problem.values(), vec![11.0, 2.0, 1.0]);
        assert_eq!(problem.dropped(), 0);
        assert_eq!(problem.get(2.0).unwrap().clone(), Vector::from(vec![1.0, 0.0, 0.0]));
        for pair in problem.iter() {
            let av = a.multiply_vector(&pair.vector).unwrap().to_vector().unwrap();
            assert_relative_eq!(av, pair.vector.mul_scalar(pair.value), epsilon = 1e-8);
        }
    }

    #[test]
    fn test_eigenvector_of_non_eigenvalue_is_nan() {
        let a = m(&[&[2.0, 1.0], &[1.0, 2.0]]);
        let v = eigenvector(&a, 7.0, &default()).unwrap();
        assert!(v.iter().all(f64::is_nan));
    }

    #[test]
    fn test_eigenvectors_skip_nan() {
        let a = m(&[&[2.0, 1.0], &[1.0, 2.0]]);
        let pairs = eigenvectors(&a, &[3.0, 7.0, 1.0], &default()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].value, 3.0);
        assert_eq!(pairs[1].value, 1.0);
    }

    #[test]
    fn test_eigenproblem_identity_collides() {
        let problem = eigenproblem(&Matrix::identity(2), &default()).unwrap();
        assert_eq!(problem.len(), 1);
        assert_eq!(problem.collisions(), 1);
        assert_eq!(problem.dropped(), 0);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(
            problem.get(1.0).unwrap().clone(),
            Vector::from(vec![h, h]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_eigenproblem_order_and_lookup() {
        let a = m(&[&[4.0, 1.0], &[2.0, 3.0]]);
        let problem = eigenproblem(&a, &default()).unwrap();
        assert_eq!(problem.values(), vec![5.0, 2.0]);
        assert!(problem.get(5.0).is_some());
        assert!(problem.get(4.0).is_none());
        assert_eq!(problem.iter().count(), 2);
    }

    #[test]
    fn test_map_keys_keeps_counters() {
        let problem = eigenproblem(&Matrix::identity(2), &default()).unwrap();
        let mapped = map_keys(problem, |x| x * 4.0);
        assert_eq!(mapped.values(), vec![4.0]);
        assert_eq!(mapped.collisions(), 1);
    }
}
