//! Interop with the faer linear algebra crate.
//!
//! [`Matrix::to_faer`](crate::Matrix::to_faer) and
//! [`Matrix::from_faer`](crate::Matrix::from_faer) copy between the two
//! representations. The `reference_*` functions compute the same quantities
//! as [`decomposition`](crate::decomposition) with faer's direct solvers.

mod faer_interop;

pub use faer_interop::{reference_singular_values, reference_symmetric_eigenvalues};
