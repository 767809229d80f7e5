//! Dense storage for tensor data.

/// Dense storage: contiguous cells in row-major order.
///
/// Each cell is either populated or empty (`None`). Empty cells are kept
/// distinct from any value of `T` so that partially filled tensors can be
/// compared and printed faithfully.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dense<T> {
    cells: Vec<Option<T>>,
}

impl<T> Dense<T> {
    /// Create storage of the given length with every cell empty.
    pub fn empty(len: usize) -> Self {
        Self {
            cells: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// Create fully populated storage (takes ownership).
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            cells: data.into_iter().map(Some).collect(),
        }
    }

    /// Create storage from cells that may be empty.
    pub fn from_cells(cells: Vec<Option<T>>) -> Self {
        Self { cells }
    }

    /// Length of storage.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if storage has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get immutable slice of cells.
    #[inline]
    pub fn as_slice(&self) -> &[Option<T>] {
        &self.cells
    }

    /// Get mutable slice of cells.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Option<T>] {
        &mut self.cells
    }

    /// Consume the storage and return its cells.
    pub fn into_cells(self) -> Vec<Option<T>> {
        self.cells
    }
}

impl<T: Clone> Dense<T> {
    /// Create storage of the given length with every cell set to `value`.
    pub fn filled(len: usize, value: T) -> Self {
        Self {
            cells: vec![Some(value); len],
        }
    }
}

impl<T> std::ops::Index<usize> for Dense<T> {
    type Output = Option<T>;

    #[inline]
    fn index(&self, i: usize) -> &Option<T> {
        &self.cells[i]
    }
}

impl<T> std::ops::IndexMut<usize> for Dense<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Option<T> {
        &mut self.cells[i]
    }
}
