//! ndlinalg - dense tensors, vectors and matrices with classical algorithms
//!
//! This crate provides a generic n-dimensional [`Tensor`] with row-major
//! strided storage, plus [`Vector`] and [`Matrix`] types built on it that
//! implement the textbook dense algorithms: cofactor determinants, LU, QR by
//! Gram-Schmidt, eigenvalues by QR iteration and SVD.
//!
//! # Architecture
//!
//! ```text
//! strides          row-major offset arithmetic
//!   └─ storage     Dense<T>: flat Option<T> cells
//!        └─ tensor Tensor<T>: shape + strides + storage
//!             ├─ vector  Vector (rank 1, f64)
//!             └─ matrix  Matrix (rank 2, f64)
//!                  └─ decomposition  lu, qr, eigen, svd
//! ```
//!
//! # Example
//!
//! ```
//! use ndlinalg::{Matrix, Vector};
//! use ndlinalg::vector::cross;
//!
//! let a = Vector::from(vec![1.0, 2.0, 3.0]);
//! let b = Vector::from(vec![1.0, 5.0, 7.0]);
//! assert_eq!(cross(&[a, b]).unwrap().to_vec(), vec![-1.0, -4.0, 3.0]);
//!
//! let m = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 2.0]]).unwrap();
//! assert_eq!(m.eigenvalues(1000).unwrap(), vec![3.0, 1.0]);
//! ```
//!
//! Numerical recoveries (rank-deficient QR, dropped eigenpairs, completed
//! singular bases) are reported through `tracing` at debug and trace level.

pub mod backend;
pub mod config;
pub mod decomposition;
pub mod error;
pub mod matrix;
pub mod nested;
mod random;
pub mod storage;
pub mod strides;
pub mod tensor;
pub mod vector;

pub use config::EigenConfig;
pub use decomposition::{EigenPair, Eigenproblem, Eigenvalues, LuResult, QrResult, SvdResult};
pub use error::{LinalgError, Result};
pub use matrix::{Layout, Matrix};
pub use nested::Nested;
pub use storage::Dense;
pub use tensor::Tensor;
pub use vector::Vector;
