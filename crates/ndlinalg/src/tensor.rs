//! N-dimensional tensor over a single flat row-major buffer.
//!
//! ```text
//! Tensor<T>
//! ├── shape    per-axis extents
//! ├── strides  derived from shape, row-major (last axis contiguous)
//! └── storage  Dense<T>: one Option<T> cell per element
//! ```
//!
//! [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix) are the rank-1 and
//! rank-2 specializations over `f64`.

use std::fmt;

use crate::error::{LinalgError, Result};
use crate::nested::Nested;
use crate::storage::Dense;
use crate::strides::{cartesian_to_linear, compute_strides, element_count};

/// A dense n-dimensional tensor.
///
/// Cells may be empty; equality compares shape, strides and every cell,
/// empty ones included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tensor<T> {
    storage: Dense<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T> Tensor<T> {
    /// Create a tensor with the given shape and every cell empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndlinalg::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::empty(&[2, 3, 4]);
    /// assert_eq!(t.shape(), &[2, 3, 4]);
    /// assert_eq!(t.len(), 24);
    /// assert_eq!(t.get(&[1, 2, 3]).unwrap(), None);
    /// ```
    pub fn empty(shape: &[usize]) -> Self {
        Self {
            storage: Dense::empty(element_count(shape)),
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        }
    }

    /// Create tensor from row-major data and shape.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::LengthMismatch` if data length doesn't match shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndlinalg::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(t.get(&[0, 1]).unwrap(), Some(&2.0));
    /// assert_eq!(t.get(&[1, 0]).unwrap(), Some(&4.0)); // row-major: [1,0] is fourth
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        Self::from_storage(Dense::from_vec(data), shape)
    }

    /// Create tensor from cells that may be empty.
    pub fn from_cells(cells: Vec<Option<T>>, shape: &[usize]) -> Result<Self> {
        Self::from_storage(Dense::from_cells(cells), shape)
    }

    /// Create tensor from a nested array literal.
    ///
    /// The shape is inferred from the first element of every level; the
    /// literal must be rectangular.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndlinalg::{Nested, Tensor};
    ///
    /// let t = Tensor::from_nested(Nested::array(vec![
    ///     Nested::array(vec![Nested::leaf("Hello"), Nested::Empty]),
    ///     Nested::array(vec![Nested::Empty, Nested::Empty]),
    ///     Nested::array(vec![Nested::leaf("hi"), Nested::leaf("World")]),
    /// ]))
    /// .unwrap();
    /// assert_eq!(t.shape(), &[3, 2]);
    /// assert_eq!(t.to_string(), "[[Hello, null], [null, null], [hi, World]]");
    /// ```
    pub fn from_nested(nested: Nested<T>) -> Result<Self> {
        let shape = nested.dimensions();
        let cells = nested.into_cells(&shape)?;
        Self::from_cells(cells, &shape)
    }

    /// Build from data whose length is known to match `shape`.
    pub(crate) fn from_vec_unchecked(data: Vec<T>, shape: &[usize]) -> Self {
        debug_assert_eq!(data.len(), element_count(shape));
        Self {
            storage: Dense::from_vec(data),
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        }
    }

    fn from_storage(storage: Dense<T>, shape: &[usize]) -> Result<Self> {
        let expected = element_count(shape);
        if storage.len() != expected {
            return Err(LinalgError::LengthMismatch {
                expected,
                actual: storage.len(),
            });
        }
        Ok(Self {
            storage,
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        })
    }

    /// Get the shape of the tensor.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the rank (number of axes).
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Get strides.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Get total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Check if tensor has zero cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Check whether two tensors have identical shapes.
    pub fn same_shape<U>(&self, other: &Tensor<U>) -> bool {
        self.shape == other.shape
    }

    /// Get underlying cells as slice.
    #[inline]
    pub fn cells(&self) -> &[Option<T>] {
        self.storage.as_slice()
    }

    /// Get underlying cells as mutable slice.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Option<T>] {
        self.storage.as_mut_slice()
    }

    /// Consume the tensor and return its cells in buffer order.
    pub fn into_cells(self) -> Vec<Option<T>> {
        self.storage.into_cells()
    }

    /// Iterate over cells in buffer order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.storage.as_slice().iter().map(Option::as_ref)
    }

    /// Validate a position (one index per axis, or a prefix when `prefix` is
    /// set) and convert it to a flat offset.
    fn offset(&self, pos: &[usize], prefix: bool) -> Result<usize> {
        let count_ok = if prefix {
            pos.len() <= self.rank()
        } else {
            pos.len() == self.rank()
        };
        if !count_ok {
            return Err(LinalgError::WrongNumberOfIndices {
                expected: self.rank(),
                actual: pos.len(),
            });
        }
        for (&index, &extent) in pos.iter().zip(self.shape.iter()) {
            if index >= extent {
                return Err(LinalgError::IndexOutOfBounds { index, extent });
            }
        }
        Ok(cartesian_to_linear(pos, &self.strides))
    }

    /// Get the cell at a position.
    ///
    /// Returns `Ok(None)` for an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if indices are out of bounds or wrong number of indices.
    pub fn get(&self, pos: &[usize]) -> Result<Option<&T>> {
        let linear = self.offset(pos, false)?;
        Ok(self.storage[linear].as_ref())
    }

    /// Set the cell at a position, returning the previous cell.
    ///
    /// # Errors
    ///
    /// Returns error if indices are out of bounds or wrong number of indices.
    pub fn set(&mut self, pos: &[usize], value: T) -> Result<Option<T>> {
        let linear = self.offset(pos, false)?;
        Ok(self.storage[linear].replace(value))
    }

    /// Empty the cell at a position, returning what it held.
    pub fn clear(&mut self, pos: &[usize]) -> Result<Option<T>> {
        let linear = self.offset(pos, false)?;
        Ok(self.storage[linear].take())
    }

    /// Apply `f` to every populated cell in place, in buffer order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndlinalg::{Nested, Tensor};
    ///
    /// let mut t = Tensor::from_nested(Nested::matrix(vec![vec![1, 2], vec![3, 4]])).unwrap();
    /// t.map(|x| x + 2).map(|x| x * 10);
    /// assert_eq!(t.get(&[1, 1]).unwrap(), Some(&60));
    /// ```
    pub fn map<F: FnMut(&T) -> T>(&mut self, mut f: F) -> &mut Self {
        for cell in self.storage.as_mut_slice().iter_mut().flatten() {
            *cell = f(cell);
        }
        self
    }

    /// Apply `f` to every cell in place, empty ones included.
    pub fn map_cells<F: FnMut(Option<T>) -> Option<T>>(&mut self, mut f: F) -> &mut Self {
        for cell in self.storage.as_mut_slice() {
            *cell = f(cell.take());
        }
        self
    }
}

impl<T: Clone> Tensor<T> {
    /// Create a tensor with every cell set to `value`.
    pub fn filled(shape: &[usize], value: T) -> Self {
        Self {
            storage: Dense::filled(element_count(shape), value),
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        }
    }

    /// Copy of this tensor with `f` applied to every populated cell.
    pub fn mapped<F: FnMut(&T) -> T>(&self, f: F) -> Self {
        let mut copy = self.clone();
        copy.map(f);
        copy
    }

    /// Fix a prefix of the axes and copy out the tensor over the remaining ones.
    ///
    /// The result owns its own buffer; writes to it never reach `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndlinalg::Tensor;
    ///
    /// let t = Tensor::from_vec((0..24).collect(), &[2, 3, 4]).unwrap();
    /// let s = t.sub_tensor(&[1, 2]).unwrap();
    /// assert_eq!(s.shape(), &[4]);
    /// assert_eq!(s.get(&[0]).unwrap(), Some(&20));
    /// ```
    pub fn sub_tensor(&self, prefix: &[usize]) -> Result<Self> {
        let start = self.offset(prefix, true)?;
        let shape = &self.shape[prefix.len()..];
        let len = element_count(shape);
        let cells = self.storage.as_slice()[start..start + len].to_vec();
        Self::from_cells(cells, shape)
    }

    /// Copy all cells, empty ones included, into a rank-1 tensor.
    pub fn flatten(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            shape: vec![self.len()],
            strides: vec![1],
        }
    }

    /// Copy the buffer under a new shape with the same number of cells.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::LengthMismatch` if the element counts differ.
    pub fn reshape(&self, shape: &[usize]) -> Result<Self> {
        Self::from_storage(self.storage.clone(), shape)
    }
}

impl<T: fmt::Display> Tensor<T> {
    /// Bracketed nested representation with `marker` for empty cells.
    pub fn to_string_with(&self, marker: &str) -> String {
        let mut out = String::new();
        write_level(&mut out, self.cells(), &self.shape, marker);
        out
    }
}

fn write_level<T: fmt::Display>(out: &mut String, cells: &[Option<T>], shape: &[usize], marker: &str) {
    use fmt::Write;

    let Some((&extent, rest)) = shape.split_first() else {
        match &cells[0] {
            Some(value) => {
                let _ = write!(out, "{value}");
            }
            None => out.push_str(marker),
        }
        return;
    };

    let span = element_count(rest);
    out.push('[');
    for i in 0..extent {
        if i > 0 {
            out.push_str(", ");
        }
        write_level(out, &cells[i * span..(i + 1) * span], rest, marker);
    }
    out.push(']');
}

impl<T: fmt::Display> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with("null"))
    }
}
