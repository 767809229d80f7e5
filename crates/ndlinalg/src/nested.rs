//! Nested array literals for tensor construction.
//!
//! A [`Nested`] value mirrors a multi-dimensional array literal such as
//! `[[1, 2], [3, 4]]`. [`Tensor::from_nested`](crate::Tensor::from_nested)
//! infers the shape by descending through the first element of every level,
//! then fills the buffer depth-first.
//!
//! The literal must be rectangular. Every level is checked against the
//! inferred extents and irregular input is rejected with
//! [`LinalgError::IrregularNesting`].

use crate::error::{LinalgError, Result};

/// A nested array literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    /// A populated cell.
    Leaf(T),
    /// An empty cell.
    Empty,
    /// One level of nesting.
    Array(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    pub fn array<I: IntoIterator<Item = Nested<T>>>(items: I) -> Self {
        Nested::Array(items.into_iter().collect())
    }

    /// A single level of populated cells.
    pub fn row<I: IntoIterator<Item = T>>(values: I) -> Self {
        Nested::Array(values.into_iter().map(Nested::Leaf).collect())
    }

    /// Two levels of populated cells.
    ///
    /// ```
    /// use ndlinalg::{Nested, Tensor};
    ///
    /// let t = Tensor::from_nested(Nested::matrix(vec![vec![1, 2, 3], vec![4, 5, 6]])).unwrap();
    /// assert_eq!(t.shape(), &[2, 3]);
    /// ```
    pub fn matrix<R, I>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        Nested::Array(rows.into_iter().map(Nested::row).collect())
    }

    /// Shape inferred from the first element of every level.
    pub fn dimensions(&self) -> Vec<usize> {
        let mut dims = Vec::new();
        let mut node = self;
        while let Nested::Array(items) = node {
            dims.push(items.len());
            match items.first() {
                Some(first) => node = first,
                None => break,
            }
        }
        dims
    }

    /// Flatten into cells in depth-first order, validating against `shape`.
    pub(crate) fn into_cells(self, shape: &[usize]) -> Result<Vec<Option<T>>> {
        let mut cells = Vec::with_capacity(shape.iter().product());
        self.collect_cells(0, shape, &mut cells)?;
        Ok(cells)
    }

    fn collect_cells(self, depth: usize, shape: &[usize], out: &mut Vec<Option<T>>) -> Result<()> {
        match (self, shape.get(depth)) {
            (Nested::Leaf(value), None) => out.push(Some(value)),
            (Nested::Empty, None) => out.push(None),
            (Nested::Array(items), Some(&extent)) => {
                if items.len() != extent {
                    return Err(LinalgError::IrregularNesting {
                        depth,
                        expected: extent,
                        actual: items.len(),
                    });
                }
                for item in items {
                    item.collect_cells(depth + 1, shape, out)?;
                }
            }
            // an array where a cell was expected
            (Nested::Array(items), None) => {
                return Err(LinalgError::IrregularNesting {
                    depth,
                    expected: 0,
                    actual: items.len(),
                });
            }
            // a cell where an array was expected
            (_, Some(&extent)) => {
                return Err(LinalgError::IrregularNesting {
                    depth,
                    expected: extent,
                    actual: 0,
                });
            }
        }
        Ok(())
    }
}
