//! Dense real vectors.
//!
//! A [`Vector`] is a rank-1 [`Tensor<f64>`] whose cells are always populated.
//! In-place operations take `&mut self` and return `&mut Self` so they chain;
//! the remaining operations allocate a new vector.

mod cross;
mod gram_schmidt;

use std::cmp::Ordering;
use std::fmt;

use approx::{AbsDiffEq, RelativeEq};

use crate::config::EPSILON;
use crate::error::{LinalgError, Result};
use crate::matrix::{Layout, Matrix};
use crate::tensor::Tensor;

pub use cross::cross;
pub use gram_schmidt::{orthogonalize, orthonormalize};

/// A dense vector of `f64`.
///
/// # Examples
///
/// ```
/// use ndlinalg::Vector;
///
/// let a = Vector::from(vec![2.0, 3.0, 4.0]);
/// let b = Vector::from(vec![-2.0, -3.0, -4.0]);
/// assert_eq!(a.add(&b).unwrap(), Vector::zeros(3));
/// assert_eq!(a.dot(&b).unwrap(), -29.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    tensor: Tensor<f64>,
}

impl Vector {
    /// Create a vector of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            tensor: Tensor::filled(&[len], 0.0),
        }
    }

    /// Create a vector that takes ownership of `data`.
    pub fn from_vec(data: Vec<f64>) -> Self {
        let len = data.len();
        Self {
            tensor: Tensor::from_vec_unchecked(data, &[len]),
        }
    }

    /// The `index`-th standard basis vector of dimension `size`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= size`.
    pub fn unit(index: usize, size: usize) -> Result<Self> {
        if index >= size {
            return Err(LinalgError::IndexOutOfBounds {
                index,
                extent: size,
            });
        }
        let mut v = Self::zeros(size);
        v.put(index, 1.0);
        Ok(v)
    }

    /// Flatten any tensor into a vector; empty cells become 0.
    pub fn from_tensor(tensor: &Tensor<f64>) -> Self {
        Self::from_vec(tensor.iter().map(|c| c.copied().unwrap_or(0.0)).collect())
    }

    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Component `i`.
    pub fn get(&self, i: usize) -> Result<f64> {
        Ok(self.tensor.get(&[i])?.copied().unwrap_or(0.0))
    }

    /// Overwrite component `i`.
    pub fn set(&mut self, i: usize, value: f64) -> Result<()> {
        self.tensor.set(&[i], value)?;
        Ok(())
    }

    #[inline]
    pub(crate) fn at(&self, i: usize) -> f64 {
        self.tensor.cells()[i].unwrap_or(0.0)
    }

    #[inline]
    pub(crate) fn put(&mut self, i: usize, value: f64) {
        self.tensor.cells_mut()[i] = Some(value);
    }

    /// The underlying rank-1 tensor.
    pub fn as_tensor(&self) -> &Tensor<f64> {
        &self.tensor
    }

    pub fn into_tensor(self) -> Tensor<f64> {
        self.tensor
    }

    /// Iterate over components in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.tensor.iter().map(|c| c.copied().unwrap_or(0.0))
    }

    /// Copy the components out as a plain `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    fn check_len(&self, other: &Vector, op: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::shape(op, &[self.len()], &[other.len()]));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Vector, op: &'static str, f: impl Fn(f64, f64) -> f64) -> Result<Vector> {
        self.check_len(other, op)?;
        Ok(Vector::from_vec(
            self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect(),
        ))
    }

    fn zip_assign(&mut self, other: &Vector, op: &'static str, f: impl Fn(f64, f64) -> f64) -> Result<&mut Self> {
        self.check_len(other, op)?;
        for i in 0..self.len() {
            let value = f(self.at(i), other.at(i));
            self.put(i, value);
        }
        Ok(self)
    }

    fn apply(&mut self, f: impl Fn(f64) -> f64) -> &mut Self {
        self.tensor.map(|&x| f(x));
        self
    }

    // In-place operations.

    /// Multiply every component by `factor`.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.apply(|x| x * factor)
    }

    /// Add `delta` to every component.
    pub fn translate(&mut self, delta: f64) -> &mut Self {
        self.apply(|x| x + delta)
    }

    pub fn add_assign(&mut self, other: &Vector) -> Result<&mut Self> {
        self.zip_assign(other, "add", |a, b| a + b)
    }

    pub fn sub_assign(&mut self, other: &Vector) -> Result<&mut Self> {
        self.zip_assign(other, "subtract", |a, b| a - b)
    }

    pub fn hadamard_assign(&mut self, other: &Vector) -> Result<&mut Self> {
        self.zip_assign(other, "hadamard", |a, b| a * b)
    }

    /// Divide by the magnitude. A zero vector becomes all NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        self.apply(|x| x / magnitude)
    }

    /// Linearly map every component from `[orig_min, orig_max]` onto `[min, max]`.
    pub fn rescale(&mut self, orig_min: f64, orig_max: f64, min: f64, max: f64) -> &mut Self {
        self.apply(|x| (x - orig_min) * (max - min) / (orig_max - orig_min) + min)
    }

    /// Snap components smaller than [`EPSILON`] in magnitude to zero.
    pub fn clean(&mut self) -> &mut Self {
        self.apply(|x| if x.abs() < EPSILON { 0.0 } else { x })
    }

    /// Replace each component with `f(self, i)`, visiting indices in order.
    ///
    /// Later calls observe the values written by earlier ones.
    ///
    /// ```
    /// use ndlinalg::Vector;
    ///
    /// let mut v = Vector::zeros(4);
    /// v.map_indexed(|v, i| if i == 0 { 1.0 } else { 2.0 * v.get(i - 1).unwrap() });
    /// assert_eq!(v.to_vec(), vec![1.0, 2.0, 4.0, 8.0]);
    /// ```
    pub fn map_indexed<F: FnMut(&Vector, usize) -> f64>(&mut self, mut f: F) -> &mut Self {
        for i in 0..self.len() {
            let value = f(self, i);
            self.put(i, value);
        }
        self
    }

    // Pure operations.

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Component-wise product.
    pub fn hadamard(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "hadamard", |a, b| a * b)
    }

    pub fn add_scalar(&self, value: f64) -> Vector {
        self.mapped(|x| x + value)
    }

    pub fn sub_scalar(&self, value: f64) -> Vector {
        self.mapped(|x| x - value)
    }

    pub fn mul_scalar(&self, value: f64) -> Vector {
        self.mapped(|x| x * value)
    }

    pub fn div_scalar(&self, value: f64) -> Vector {
        self.mapped(|x| x / value)
    }

    fn mapped(&self, f: impl Fn(f64) -> f64) -> Vector {
        Vector::from_vec(self.iter().map(f).collect())
    }

    pub fn squared_magnitude(&self) -> f64 {
        self.iter().map(|x| x * x).sum()
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.squared_magnitude().sqrt()
    }

    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Order two vectors by magnitude.
    pub fn cmp_magnitude(&self, other: &Vector) -> Ordering {
        self.magnitude().total_cmp(&other.magnitude())
    }

    /// Sum of component products.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the lengths differ.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_len(other, "dot")?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// Alias of [`Vector::dot`].
    pub fn inner(&self, other: &Vector) -> Result<f64> {
        self.dot(other)
    }

    /// `self` as a column times `other` as a row.
    ///
    /// ```
    /// use ndlinalg::Vector;
    ///
    /// let m = Vector::from(vec![1.0, 2.0]).outer(&Vector::from(vec![3.0, 4.0, 5.0]));
    /// assert_eq!(m.shape(), &[2, 3]);
    /// assert_eq!(m.get(1, 2).unwrap(), 10.0);
    /// ```
    pub fn outer(&self, other: &Vector) -> Matrix {
        let mut result = Matrix::zeros(self.len(), other.len());
        result.map_indexed(|_, r, c| self.at(r) * other.at(c));
        result
    }

    /// Whether the dot product is negligible.
    pub fn orthogonal(&self, other: &Vector) -> Result<bool> {
        Ok(self.dot(other)?.abs() < EPSILON)
    }

    /// A 1×n matrix holding this vector.
    pub fn row_matrix(&self) -> Matrix {
        Matrix::from_vectors_unchecked(std::slice::from_ref(self), Layout::Rows)
    }

    /// An n×1 matrix holding this vector.
    pub fn column_matrix(&self) -> Matrix {
        Matrix::from_vectors_unchecked(std::slice::from_ref(self), Layout::Columns)
    }

    /// Same as [`Vector::column_matrix`].
    pub fn to_matrix(&self) -> Matrix {
        self.column_matrix()
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Vector::from_vec(data)
    }
}

impl From<&[f64]> for Vector {
    fn from(data: &[f64]) -> Self {
        Vector::from_vec(data.to_vec())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x:?}")?;
        }
        f.write_str("]")
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.relative_eq(&b, epsilon, max_relative))
    }
}
