//! Stride computation utilities.
//!
//! Uses row-major (C) order: the last axis is contiguous.

/// Compute row-major strides from shape.
///
/// For shape [d0, d1, ..., dn], returns strides [d1*...*dn, ..., dn, 1].
///
/// # Examples
///
/// ```
/// use ndlinalg::strides::compute_strides;
///
/// assert_eq!(compute_strides(&[3, 4, 5]), vec![20, 5, 1]);
/// assert_eq!(compute_strides(&[2, 3]), vec![3, 1]);
/// assert_eq!(compute_strides(&[5]), vec![1]);
/// assert_eq!(compute_strides(&[]), Vec::<usize>::new());
/// ```
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![0; shape.len()];
    let mut stride = 1;

    for (i, &dim) in shape.iter().enumerate().rev() {
        strides[i] = stride;
        stride *= dim;
    }

    strides
}

/// Number of elements held by a tensor of this shape (1 for rank 0).
#[inline]
pub fn element_count(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Convert cartesian indices to linear index.
///
/// Only the leading `indices.len()` strides are used, so a prefix of a full
/// position maps to the offset of the sub-tensor it selects.
#[inline]
pub fn cartesian_to_linear(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides.iter())
        .map(|(&idx, &stride)| idx * stride)
        .sum()
}
