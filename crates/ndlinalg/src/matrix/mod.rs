//! Dense real matrices.
//!
//! A [`Matrix`] is a rank-2 [`Tensor<f64>`] stored row-major with every cell
//! populated. Rows and columns handed out by [`Matrix::row`] and
//! [`Matrix::col`] are copies; structural edits such as [`Matrix::add_row`]
//! return a new matrix.
//!
//! Arithmetic lives in `arith`, elimination in `echelon` and the cofactor
//! family in `determinant`. Factorizations are in
//! [`decomposition`](crate::decomposition).

mod arith;
mod determinant;
mod echelon;

use std::fmt;
use std::io::{self, Write};

use approx::{AbsDiffEq, RelativeEq};

use crate::config::{EPSILON, TABLE_CELL_WIDTH};
use crate::error::{LinalgError, Result};
use crate::nested::Nested;
use crate::tensor::Tensor;
use crate::vector::Vector;

/// How a list of vectors is laid out in a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Each vector becomes a row.
    Rows,
    /// Each vector becomes a column.
    Columns,
}

/// A dense `rows × cols` matrix of `f64`.
///
/// # Examples
///
/// ```
/// use ndlinalg::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![2.0, 4.0], vec![6.0, 8.0]]).unwrap();
/// assert_eq!(m.determinant().unwrap(), -8.0);
/// assert_eq!(m.transpose().get(0, 1).unwrap(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    tensor: Tensor<f64>,
}

impl Matrix {
    /// Create a `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            tensor: Tensor::filled(&[rows, cols], 0.0),
        }
    }

    /// Create the `n × n` identity.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.put(i, i, 1.0);
        }
        m
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            tensor: Tensor::from_vec(data, &[rows, cols])?,
        })
    }

    pub(crate) fn from_vec_unchecked(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        Self {
            tensor: Tensor::from_vec_unchecked(data, &[rows, cols]),
        }
    }

    /// Create a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns `IrregularNesting` if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n * cols);
        for row in rows {
            if row.len() != cols {
                return Err(LinalgError::IrregularNesting {
                    depth: 1,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self::from_vec_unchecked(data, n, cols))
    }

    /// Create a matrix from a two-level nested literal.
    pub fn from_nested(nested: Nested<f64>) -> Result<Self> {
        Self::from_tensor(&Tensor::from_nested(nested)?)
    }

    /// Copy a rank-2 tensor; empty cells become 0.
    ///
    /// # Errors
    ///
    /// Returns `RankMismatch` unless the tensor has rank 2.
    pub fn from_tensor(tensor: &Tensor<f64>) -> Result<Self> {
        if tensor.rank() != 2 {
            return Err(LinalgError::RankMismatch {
                expected: 2,
                actual: tensor.rank(),
            });
        }
        let data = tensor.iter().map(|c| c.copied().unwrap_or(0.0)).collect();
        Ok(Self::from_vec_unchecked(
            data,
            tensor.shape()[0],
            tensor.shape()[1],
        ))
    }

    /// Stack vectors as rows or as columns.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the vectors differ in length.
    ///
    /// ```
    /// use ndlinalg::{Layout, Matrix, Vector};
    ///
    /// let vs = [Vector::from(vec![1.0, 2.0, 3.0]), Vector::from(vec![4.0, 5.0, 6.0])];
    /// assert_eq!(Matrix::from_vectors(&vs, Layout::Rows).unwrap().shape(), &[2, 3]);
    /// assert_eq!(Matrix::from_vectors(&vs, Layout::Columns).unwrap().shape(), &[3, 2]);
    /// ```
    pub fn from_vectors(vs: &[Vector], layout: Layout) -> Result<Self> {
        if let Some(first) = vs.first() {
            if let Some(bad) = vs.iter().find(|v| v.len() != first.len()) {
                return Err(LinalgError::shape("from_vectors", &[first.len()], &[bad.len()]));
            }
        }
        Ok(Self::from_vectors_unchecked(vs, layout))
    }

    pub(crate) fn from_vectors_unchecked(vs: &[Vector], layout: Layout) -> Self {
        let len = vs.first().map_or(0, Vector::len);
        let data: Vec<f64> = vs.iter().flat_map(Vector::iter).collect();
        let stacked = Self::from_vec_unchecked(data, vs.len(), len);
        match layout {
            Layout::Rows => stacked,
            Layout::Columns => stacked.transpose(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.tensor.shape()[0]
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.tensor.shape()[1]
    }

    /// `[rows, cols]`.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.tensor.shape()
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub(crate) fn require_square(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(LinalgError::NotSquareMatrix {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.rows())
    }

    /// The underlying rank-2 tensor.
    pub fn as_tensor(&self) -> &Tensor<f64> {
        &self.tensor
    }

    pub fn into_tensor(self) -> Tensor<f64> {
        self.tensor
    }

    /// Entry at row `r`, column `c`.
    pub fn get(&self, r: usize, c: usize) -> Result<f64> {
        Ok(self.tensor.get(&[r, c])?.copied().unwrap_or(0.0))
    }

    /// Overwrite the entry at row `r`, column `c`.
    pub fn set(&mut self, r: usize, c: usize, value: f64) -> Result<()> {
        self.tensor.set(&[r, c], value)?;
        Ok(())
    }

    #[inline]
    pub(crate) fn at(&self, r: usize, c: usize) -> f64 {
        self.tensor.cells()[r * self.cols() + c].unwrap_or(0.0)
    }

    #[inline]
    pub(crate) fn put(&mut self, r: usize, c: usize, value: f64) {
        let cols = self.cols();
        self.tensor.cells_mut()[r * cols + c] = Some(value);
    }

    /// Entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.tensor.iter().map(|c| c.copied().unwrap_or(0.0))
    }

    fn check_row(&self, r: usize) -> Result<()> {
        if r >= self.rows() {
            return Err(LinalgError::IndexOutOfBounds {
                index: r,
                extent: self.rows(),
            });
        }
        Ok(())
    }

    fn check_col(&self, c: usize) -> Result<()> {
        if c >= self.cols() {
            return Err(LinalgError::IndexOutOfBounds {
                index: c,
                extent: self.cols(),
            });
        }
        Ok(())
    }

    /// Copy of row `r`.
    pub fn row(&self, r: usize) -> Result<Vector> {
        self.check_row(r)?;
        Ok(Vector::from_vec((0..self.cols()).map(|c| self.at(r, c)).collect()))
    }

    /// Copy of column `c`.
    pub fn col(&self, c: usize) -> Result<Vector> {
        self.check_col(c)?;
        Ok(Vector::from_vec((0..self.rows()).map(|r| self.at(r, c)).collect()))
    }

    /// Copy `v` into row `r`.
    pub fn set_row(&mut self, r: usize, v: &Vector) -> Result<()> {
        self.check_row(r)?;
        if v.len() != self.cols() {
            return Err(LinalgError::shape("set_row", &[self.cols()], &[v.len()]));
        }
        for (c, x) in v.iter().enumerate() {
            self.put(r, c, x);
        }
        Ok(())
    }

    /// Copy `v` into column `c`.
    pub fn set_col(&mut self, c: usize, v: &Vector) -> Result<()> {
        self.check_col(c)?;
        if v.len() != self.rows() {
            return Err(LinalgError::shape("set_col", &[self.rows()], &[v.len()]));
        }
        for (r, x) in v.iter().enumerate() {
            self.put(r, c, x);
        }
        Ok(())
    }

    pub fn row_vectors(&self) -> Vec<Vector> {
        (0..self.rows()).filter_map(|r| self.row(r).ok()).collect()
    }

    pub fn col_vectors(&self) -> Vec<Vector> {
        (0..self.cols()).filter_map(|c| self.col(c).ok()).collect()
    }

    /// Overwrite every row; `vs` must hold exactly `rows` vectors.
    pub fn set_row_vectors(&mut self, vs: &[Vector]) -> Result<()> {
        if vs.len() != self.rows() {
            return Err(LinalgError::shape("set_row_vectors", &[self.rows()], &[vs.len()]));
        }
        for (r, v) in vs.iter().enumerate() {
            self.set_row(r, v)?;
        }
        Ok(())
    }

    /// Overwrite every column; `vs` must hold exactly `cols` vectors.
    pub fn set_col_vectors(&mut self, vs: &[Vector]) -> Result<()> {
        if vs.len() != self.cols() {
            return Err(LinalgError::shape("set_col_vectors", &[self.cols()], &[vs.len()]));
        }
        for (c, v) in vs.iter().enumerate() {
            self.set_col(c, v)?;
        }
        Ok(())
    }

    /// New matrix with `v` inserted as row `index` (`0..=rows`).
    ///
    /// A 0×0 matrix takes its column count from `v`.
    pub fn add_row(&self, v: &Vector, index: usize) -> Result<Matrix> {
        let (rows, cols) = (self.rows(), self.cols());
        if index > rows {
            return Err(LinalgError::IndexOutOfBounds {
                index,
                extent: rows + 1,
            });
        }
        let adopts_width = rows == 0 && cols == 0;
        if !adopts_width && v.len() != cols {
            return Err(LinalgError::shape("add_row", &[cols], &[v.len()]));
        }
        let cols = v.len();
        let split = index * cols;
        let mut data: Vec<f64> = self.iter().take(split).collect();
        data.extend(v.iter());
        data.extend(self.iter().skip(split));
        Ok(Matrix::from_vec_unchecked(data, rows + 1, cols))
    }

    /// New matrix with `v` appended as the last row.
    pub fn push_row(&self, v: &Vector) -> Result<Matrix> {
        self.add_row(v, self.rows())
    }

    /// New matrix without row `index`.
    pub fn remove_row(&self, index: usize) -> Result<Matrix> {
        self.check_row(index)?;
        let cols = self.cols();
        let data = self
            .iter()
            .enumerate()
            .filter(|(i, _)| i / cols != index)
            .map(|(_, x)| x)
            .collect();
        Ok(Matrix::from_vec_unchecked(data, self.rows() - 1, cols))
    }

    /// New matrix with `v` inserted as column `index` (`0..=cols`).
    pub fn add_column(&self, v: &Vector, index: usize) -> Result<Matrix> {
        if index > self.cols() {
            return Err(LinalgError::IndexOutOfBounds {
                index,
                extent: self.cols() + 1,
            });
        }
        let adopts_height = self.rows() == 0 && self.cols() == 0;
        if !adopts_height && v.len() != self.rows() {
            return Err(LinalgError::shape("add_column", &[self.rows()], &[v.len()]));
        }
        Ok(self.transpose().add_row(v, index)?.transpose())
    }

    /// New matrix with `v` appended as the last column.
    pub fn push_column(&self, v: &Vector) -> Result<Matrix> {
        self.add_column(v, self.cols())
    }

    /// New matrix without column `index`.
    pub fn remove_column(&self, index: usize) -> Result<Matrix> {
        self.check_col(index)?;
        Ok(self.transpose().remove_row(index)?.transpose())
    }

    /// New matrix without row `r` and column `c`.
    pub fn minor(&self, r: usize, c: usize) -> Result<Matrix> {
        self.remove_row(r)?.remove_column(c)
    }

    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = (self.rows(), self.cols());
        let mut data = Vec::with_capacity(rows * cols);
        for c in 0..cols {
            for r in 0..rows {
                data.push(self.at(r, c));
            }
        }
        Matrix::from_vec_unchecked(data, cols, rows)
    }

    /// The single row or column as a vector.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless the matrix is `1 × n` or `n × 1`.
    pub fn to_vector(&self) -> Result<Vector> {
        if self.rows() != 1 && self.cols() != 1 {
            return Err(LinalgError::shape("to_vector", self.shape(), &[1, self.cols()]));
        }
        Ok(Vector::from_vec(self.iter().collect()))
    }

    /// Copy the entries out as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.row_vectors().iter().map(Vector::to_vec).collect()
    }

    fn apply(&mut self, f: impl Fn(f64) -> f64) -> &mut Self {
        self.tensor.map(|&x| f(x));
        self
    }

    /// Multiply every entry by `factor`.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.apply(|x| x * factor)
    }

    /// Add `delta` to every entry.
    pub fn translate(&mut self, delta: f64) -> &mut Self {
        self.apply(|x| x + delta)
    }

    /// Linearly map every entry from `[orig_min, orig_max]` onto `[min, max]`.
    pub fn rescale(&mut self, orig_min: f64, orig_max: f64, min: f64, max: f64) -> &mut Self {
        self.apply(|x| (x - orig_min) * (max - min) / (orig_max - orig_min) + min)
    }

    /// Snap entries smaller than [`EPSILON`] in magnitude to zero.
    pub fn clean(&mut self) -> &mut Self {
        self.apply(|x| if x.abs() < EPSILON { 0.0 } else { x })
    }

    /// Replace each entry with `f(self, r, c)` in row-major order.
    ///
    /// Later calls observe the values written by earlier ones.
    pub fn map_indexed<F: FnMut(&Matrix, usize, usize) -> f64>(&mut self, mut f: F) -> &mut Self {
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                let value = f(self, r, c);
                self.put(r, c, value);
            }
        }
        self
    }

    /// Render one line per row, each cell left-aligned in `width` columns.
    ///
    /// Cells longer than `width` are cut and end in `...`.
    ///
    /// ```
    /// use ndlinalg::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 1.0 / 3.0]]).unwrap();
    /// assert_eq!(m.format_table(8), "1.0     0.333...\n");
    /// ```
    pub fn format_table(&self, width: usize) -> String {
        let mut out = String::new();
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                out.push_str(&pad(&format!("{:?}", self.at(r, c)), width));
            }
            out.push('\n');
        }
        out
    }

    /// Write [`Matrix::format_table`] with the default width to stdout.
    pub fn print(&self) -> io::Result<()> {
        io::stdout().write_all(self.format_table(TABLE_CELL_WIDTH).as_bytes())
    }
}

fn pad(cell: &str, width: usize) -> String {
    if cell.chars().count() > width {
        let kept: String = cell.chars().take(width.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        format!("{cell:<width$}")
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (r, row) in self.row_vectors().iter().enumerate() {
            if r > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{row}")?;
        }
        f.write_str("]")
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.shape() == other.shape()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.relative_eq(&b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn v(data: &[f64]) -> Vector {
        Vector::from(data)
    }

    #[test]
    fn test_zeros_identity() {
        let z = Matrix::zeros(2, 3);
        assert_eq!(z.shape(), &[2, 3]);
        assert!(z.iter().all(|x| x == 0.0));
        assert_eq!(Matrix::identity(2), m(&[&[1.0, 0.0], &[0.0, 1.0]]));
    }

    #[test]
    fn test_from_rows_ragged() {
        assert_eq!(
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(LinalgError::IrregularNesting {
                depth: 1,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_from_tensor() {
        let mut t: Tensor<f64> = Tensor::empty(&[2, 2]);
        t.set(&[0, 1], 3.0).unwrap();
        let a = Matrix::from_tensor(&t).unwrap();
        assert_eq!(a.to_rows(), vec![vec![0.0, 3.0], vec![0.0, 0.0]]);

        let t3: Tensor<f64> = Tensor::empty(&[2, 2, 2]);
        assert_eq!(
            Matrix::from_tensor(&t3),
            Err(LinalgError::RankMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_from_nested() {
        let a = Matrix::from_nested(Nested::matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]])).unwrap();
        assert_eq!(a, m(&[&[1.0, 2.0], &[3.0, 4.0]]));
        assert!(Matrix::from_nested(Nested::row(vec![1.0, 2.0])).is_err());
    }

    #[test]
    fn test_from_vectors_mismatch() {
        let result = Matrix::from_vectors(&[v(&[1.0, 2.0]), v(&[1.0])], Layout::Columns);
        assert!(matches!(result, Err(LinalgError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut a = Matrix::zeros(2, 2);
        a.set(1, 0, 4.0).unwrap();
        assert_eq!(a.get(1, 0).unwrap(), 4.0);
        assert!(a.get(2, 0).is_err());
        assert!(a.set(0, 2, 1.0).is_err());
    }

    #[test]
    fn test_row_col_are_copies() {
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let mut r = a.row(1).unwrap();
        r.set(0, 100.0).unwrap();
        assert_eq!(a.get(1, 0).unwrap(), 3.0);
        assert_eq!(a.col(1).unwrap().to_vec(), vec![2.0, 4.0]);

        a.set_col(0, &v(&[7.0, 8.0])).unwrap();
        a.set_row(0, &v(&[5.0, 6.0])).unwrap();
        assert_eq!(a.to_rows(), vec![vec![5.0, 6.0], vec![8.0, 4.0]]);
    }

    #[test]
    fn test_set_row_errors() {
        let mut a = Matrix::zeros(2, 3);
        assert!(matches!(
            a.set_row(2, &v(&[1.0, 2.0, 3.0])),
            Err(LinalgError::IndexOutOfBounds { index: 2, extent: 2 })
        ));
        assert!(matches!(
            a.set_row(0, &v(&[1.0, 2.0])),
            Err(LinalgError::ShapeMismatch { op: "set_row", .. })
        ));
        assert!(a.set_col(0, &v(&[1.0, 2.0, 3.0])).is_err());
        assert!(a.set_row_vectors(&[v(&[1.0, 2.0, 3.0])]).is_err());
    }

    #[test]
    fn test_row_and_col_vectors() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(a.row_vectors().len(), 2);
        assert_eq!(a.col_vectors()[2].to_vec(), vec![3.0, 6.0]);

        let mut b = Matrix::zeros(2, 3);
        b.set_col_vectors(&a.col_vectors()).unwrap();
        assert_eq!(b, a);
        b.set_row_vectors(&[v(&[0.0; 3]), v(&[1.0; 3])]).unwrap();
        assert_eq!(b.to_rows(), vec![vec![0.0; 3], vec![1.0; 3]]);
    }

    #[test]
    fn test_add_remove_row() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = a.add_row(&v(&[9.0, 9.0]), 1).unwrap();
        assert_eq!(b.to_rows(), vec![vec![1.0, 2.0], vec![9.0, 9.0], vec![3.0, 4.0]]);
        assert_eq!(b.remove_row(1).unwrap(), a);
        assert_eq!(a.push_row(&v(&[5.0, 6.0])).unwrap().row(2).unwrap().to_vec(), vec![5.0, 6.0]);
        assert!(a.add_row(&v(&[1.0, 2.0]), 3).is_err());
        assert!(a.add_row(&v(&[1.0]), 0).is_err());
        assert!(a.remove_row(2).is_err());
        // source is unchanged
        assert_eq!(a.rows(), 2);
    }

    #[test]
    fn test_add_row_to_empty() {
        let a = Matrix::zeros(0, 0).push_row(&v(&[1.0, 2.0])).unwrap();
        assert_eq!(a.shape(), &[1, 2]);
    }

    #[test]
    fn test_add_remove_column() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = a.add_column(&v(&[7.0, 8.0]), 0).unwrap();
        assert_eq!(b.to_rows(), vec![vec![7.0, 1.0, 2.0], vec![8.0, 3.0, 4.0]]);
        assert_eq!(b.remove_column(0).unwrap(), a);
        assert_eq!(a.push_column(&v(&[0.0, 0.0])).unwrap().shape(), &[2, 3]);
        assert!(a.add_column(&v(&[1.0]), 1).is_err());
        assert!(a.remove_column(5).is_err());
    }

    #[test]
    fn test_remove_last_row_keeps_cols() {
        let a = m(&[&[1.0, 2.0, 3.0]]);
        let empty = a.remove_row(0).unwrap();
        assert_eq!(empty.shape(), &[0, 3]);
        assert_eq!(
            empty.push_row(&v(&[1.0, 2.0])),
            Err(LinalgError::shape("add_row", &[3], &[2]))
        );
        assert_eq!(empty.push_row(&v(&[4.0, 5.0, 6.0])).unwrap().shape(), &[1, 3]);
    }

    #[test]
    fn test_add_column_to_matrix_without_columns() {
        let a = Matrix::zeros(2, 0);
        assert_eq!(
            a.add_column(&v(&[1.0, 2.0, 3.0]), 0),
            Err(LinalgError::shape("add_column", &[2], &[3]))
        );
        let b = a.push_column(&v(&[1.0, 2.0])).unwrap();
        assert_eq!(b.to_rows(), vec![vec![1.0], vec![2.0]]);
        assert_eq!(Matrix::zeros(0, 0).push_column(&v(&[1.0, 2.0, 3.0])).unwrap().shape(), &[3, 1]);
    }

    #[test]
    fn test_minor() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        assert_eq!(a.minor(1, 1).unwrap(), m(&[&[1.0, 3.0], &[7.0, 9.0]]));
    }

    #[test]
    fn test_transpose() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), &[3, 2]);
        assert_eq!(t.get(2, 0).unwrap(), 3.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_to_vector() {
        assert_eq!(m(&[&[1.0], &[2.0]]).to_vector().unwrap().to_vec(), vec![1.0, 2.0]);
        assert!(Matrix::zeros(2, 2).to_vector().is_err());
    }

    #[test]
    fn test_in_place_ops() {
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        a.scale(2.0).translate(-2.0);
        assert_eq!(a.to_rows(), vec![vec![0.0, 2.0], vec![4.0, 6.0]]);
        a.rescale(0.0, 6.0, 0.0, 3.0);
        assert_eq!(a.to_rows(), vec![vec![0.0, 1.0], vec![2.0, 3.0]]);
        a.set(0, 1, 1e-12).unwrap();
        a.clean();
        assert_eq!(a.get(0, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_map_indexed() {
        let mut a = Matrix::zeros(2, 3);
        a.map_indexed(|_, r, c| (r * 10 + c) as f64);
        assert_eq!(a.to_rows(), vec![vec![0.0, 1.0, 2.0], vec![10.0, 11.0, 12.0]]);
    }

    #[test]
    fn test_display() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.5]]);
        assert_eq!(a.to_string(), "[[1.0, 2.0], [3.0, 4.5]]");
    }

    #[test]
    fn test_format_table() {
        let a = m(&[&[1.0, -2.0], &[3.0, 4.0]]);
        assert_eq!(a.format_table(5), "1.0  -2.0 \n3.0  4.0  \n");
        assert_eq!(pad("123456789", 6), "123...");
        assert_eq!(pad("12", 4), "12  ");
    }
}
