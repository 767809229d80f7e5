//! Matrix factorizations and spectral algorithms.
//!
//! # Available Decompositions
//!
//! - [`lu`]: Doolittle LU without pivoting
//! - [`qr`]: QR by Gram-Schmidt, with an identity fallback for rank-deficient input
//! - [`eigenvalues`] / [`eigenvector`] / [`eigenproblem`]: shifted QR iteration
//! - [`singular_values`] / [`singular_solution`] / [`svd`]: via the Gram matrix `AᵗA`
//!
//! The free functions take an explicit [`EigenConfig`] where one applies.
//! The matching [`Matrix`] methods use the defaults: shift 0 for
//! eigenvalues and [`EigenConfig::gram`] for everything built on `AᵗA`.
//!
//! # Example
//!
//! ```
//! use ndlinalg::Matrix;
//!
//! let a = Matrix::from_rows(vec![vec![4.0, 1.0], vec![2.0, 3.0]]).unwrap();
//! assert_eq!(a.eigenvalues(1000).unwrap(), vec![5.0, 2.0]);
//!
//! let lu = a.lu().unwrap();
//! assert_eq!(lu.l.multiply(&lu.u).unwrap(), a);
//! ```

mod eigen;
mod lu;
mod qr;
mod svd;

pub use eigen::{EigenPair, Eigenproblem, Eigenvalues, eigenproblem, eigenvalues, eigenvector, eigenvectors};
pub use lu::{LuResult, lu};
pub use qr::{QrResult, qr};
pub use svd::{SvdResult, singular_solution, singular_values, svd};

use crate::config::EigenConfig;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::vector::Vector;

impl Matrix {
    /// See [`lu`].
    pub fn lu(&self) -> Result<LuResult> {
        lu(self)
    }

    /// See [`qr`].
    pub fn qr(&self) -> Result<QrResult> {
        qr(self)
    }

    /// Eigenvalue estimates after `iterations` rounds, largest first.
    pub fn eigenvalues(&self, iterations: usize) -> Result<Vec<f64>> {
        let config = EigenConfig::default().with_iterations(iterations);
        Ok(eigenvalues(self, &config)?.values)
    }

    /// See [`eigenvalues`].
    pub fn eigenvalues_with(&self, config: &EigenConfig) -> Result<Eigenvalues> {
        eigenvalues(self, config)
    }

    /// See [`eigenvector`].
    pub fn eigenvector(&self, value: f64) -> Result<Vector> {
        eigenvector(self, value, &EigenConfig::default())
    }

    /// See [`eigenvectors`].
    pub fn eigenvectors(&self, values: &[f64]) -> Result<Vec<EigenPair>> {
        eigenvectors(self, values, &EigenConfig::default())
    }

    /// See [`eigenproblem`].
    pub fn eigenproblem(&self) -> Result<Eigenproblem> {
        eigenproblem(self, &EigenConfig::default())
    }

    pub fn eigenproblem_with(&self, config: &EigenConfig) -> Result<Eigenproblem> {
        eigenproblem(self, config)
    }

    /// See [`singular_values`].
    pub fn singular_values(&self) -> Result<Vec<f64>> {
        singular_values(self, &EigenConfig::gram())
    }

    /// See [`singular_solution`].
    pub fn singular_solution(&self) -> Result<Eigenproblem> {
        singular_solution(self, &EigenConfig::gram())
    }

    /// See [`svd`].
    pub fn svd(&self) -> Result<SvdResult> {
        svd(self, &EigenConfig::gram())
    }
}
