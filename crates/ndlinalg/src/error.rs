//! Error types for ndlinalg.

use thiserror::Error;

/// Errors that can occur in tensor, vector and matrix operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    /// Two operands have incompatible shapes for the requested operation.
    #[error("shape mismatch in {op}: {left:?} vs {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: Vec<usize>,
        right: Vec<usize>,
    },

    /// Data length does not match the product of the requested shape.
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Wrong number of indices provided.
    #[error("wrong number of indices: expected {expected}, got {actual}")]
    WrongNumberOfIndices { expected: usize, actual: usize },

    /// Index out of bounds.
    #[error("index out of bounds: index {index} is out of range for extent {extent}")]
    IndexOutOfBounds { index: usize, extent: usize },

    /// Operation requires a specific tensor rank.
    #[error("expected tensor of rank {expected}, got rank {actual}")]
    RankMismatch { expected: usize, actual: usize },

    /// A nested literal is not rectangular.
    #[error("irregular nesting at depth {depth}: expected {expected} elements, got {actual}")]
    IrregularNesting {
        depth: usize,
        expected: usize,
        actual: usize,
    },

    /// Matrix must be square.
    #[error("matrix must be square: got {rows}x{cols}")]
    NotSquareMatrix { rows: usize, cols: usize },

    /// Matrix has a (numerically) zero determinant.
    #[error("matrix is singular: determinant {determinant}")]
    SingularMatrix { determinant: f64 },

    /// Doolittle elimination hit a zero pivot.
    #[error("zero pivot at position {index}: {value}")]
    ZeroPivot { index: usize, value: f64 },

    /// A singular value too small to divide by while building U.
    #[error("singular value {index} is degenerate: {value}")]
    DegenerateSingularValue { index: usize, value: f64 },

    /// `A v / σ` did not come out as a unit vector, so `v` is not a right
    /// singular vector for `σ`.
    #[error("left singular vector {index} has norm {norm}, expected 1")]
    InaccurateSingularVector { index: usize, norm: f64 },

    /// A faer routine used for conversion or cross-checking failed.
    #[error("faer {op} failed: {message}")]
    Backend { op: &'static str, message: String },
}

impl LinalgError {
    pub(crate) fn shape(op: &'static str, left: &[usize], right: &[usize]) -> Self {
        LinalgError::ShapeMismatch {
            op,
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LinalgError>;
