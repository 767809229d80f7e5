//! Gaussian elimination.

use super::Matrix;
use crate::config::EPSILON;

impl Matrix {
    /// Row echelon form by Gaussian elimination with partial pivoting.
    ///
    /// Rows are not normalized. For each column the remaining row with the
    /// largest magnitude becomes the pivot; a column whose best candidate is
    /// below [`EPSILON`] is skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndlinalg::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let r = a.row_echelon_form();
    /// assert_eq!(r.row(0).unwrap().to_vec(), vec![3.0, 4.0]);
    /// assert!(r.get(1, 0).unwrap().abs() < 1e-12);
    /// ```
    pub fn row_echelon_form(&self) -> Matrix {
        self.row_echelon_with(EPSILON).0
    }

    /// Row echelon form together with the pivot column of each leading row.
    ///
    /// Row `k` of the result has its pivot in column `pivots[k]`; rows past
    /// `pivots.len()` are negligible.
    pub(crate) fn row_echelon_with(&self, epsilon: f64) -> (Matrix, Vec<usize>) {
        let mut rows = self.to_rows();
        let pivots = eliminate(&mut rows, epsilon);
        (
            Matrix::from_vec_unchecked(rows.concat(), self.rows(), self.cols()),
            pivots,
        )
    }

    /// Reduced row echelon form: every pivot is 1 and is the only non-zero
    /// entry in its column.
    ///
    /// ```
    /// use ndlinalg::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![2.0, 4.0, 6.0], vec![1.0, 3.0, 5.0]]).unwrap();
    /// let r = a.reduced_row_echelon_form();
    /// assert_eq!(r.to_rows(), vec![vec![1.0, 0.0, -1.0], vec![0.0, 1.0, 2.0]]);
    /// ```
    pub fn reduced_row_echelon_form(&self) -> Matrix {
        let mut rows = self.to_rows();
        let pivots = eliminate(&mut rows, EPSILON);

        for (r, &p) in pivots.iter().enumerate() {
            let pivot = rows[r][p];
            for x in rows[r].iter_mut() {
                *x /= pivot;
            }
            rows[r][p] = 1.0;
            for k in 0..r {
                let factor = rows[k][p];
                if factor != 0.0 {
                    subtract_scaled(&mut rows, k, r, factor);
                    rows[k][p] = 0.0;
                }
            }
        }
        Matrix::from_vec_unchecked(rows.concat(), self.rows(), self.cols())
    }
}

/// Forward elimination in place. Returns the pivot column of each pivot row.
fn eliminate(rows: &mut [Vec<f64>], epsilon: f64) -> Vec<usize> {
    let n = rows.len();
    let cols = rows.first().map_or(0, Vec::len);
    let mut pivots = Vec::new();

    for col in 0..cols {
        let top = pivots.len();
        if top >= n {
            break;
        }
        let mut best = top;
        for k in (top + 1)..n {
            if rows[k][col].abs() > rows[best][col].abs() {
                best = k;
            }
        }
        if rows[best][col].abs() < epsilon {
            continue;
        }
        rows.swap(top, best);
        for k in (top + 1)..n {
            let factor = rows[k][col] / rows[top][col];
            subtract_scaled(rows, k, top, factor);
        }
        pivots.push(col);
    }
    pivots
}

/// `rows[target] -= factor * rows[source]`
fn subtract_scaled(rows: &mut [Vec<f64>], target: usize, source: usize, factor: f64) {
    for c in 0..rows[target].len() {
        let delta = factor * rows[source][c];
        rows[target][c] -= delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn is_upper_echelon(a: &Matrix) -> bool {
        let mut last_lead: Option<usize> = None;
        let mut seen_zero_row = false;
        for row in a.to_rows() {
            match row.iter().position(|x| x.abs() >= 1e-9) {
                None => seen_zero_row = true,
                Some(lead) => {
                    if seen_zero_row || last_lead.is_some_and(|l| lead <= l) {
                        return false;
                    }
                    last_lead = Some(lead);
                }
            }
        }
        true
    }

    #[test]
    fn test_row_echelon_3x3() {
        let a = m(&[&[2.0, 1.0, -1.0], &[-3.0, -1.0, 2.0], &[-2.0, 1.0, 2.0]]);
        let r = a.row_echelon_form();
        assert!(is_upper_echelon(&r));
        // elimination preserves |det|
        assert_relative_eq!(
            (r.get(0, 0).unwrap() * r.get(1, 1).unwrap() * r.get(2, 2).unwrap()).abs(),
            a.determinant().unwrap().abs(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_row_echelon_zero_leading_column() {
        let a = m(&[&[0.0, 1.0], &[0.0, 2.0]]);
        let r = a.row_echelon_form();
        assert_eq!(r.to_rows(), vec![vec![0.0, 2.0], vec![0.0, 0.0]]);
    }

    #[test]
    fn test_row_echelon_rank_deficient() {
        let a = m(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &[1.0, 0.0, 1.0]]);
        let r = a.row_echelon_form();
        assert!(is_upper_echelon(&r));
        assert!(r.row(2).unwrap().iter().all(|x| x.abs() < 1e-12));
    }

    #[test]
    fn test_reduced_row_echelon_identity() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_relative_eq!(a.reduced_row_echelon_form(), Matrix::identity(2), epsilon = 1e-12);
    }

    #[test]
    fn test_reduced_row_echelon_wide() {
        let a = m(&[&[1.0, 2.0, 1.0, 4.0], &[2.0, 4.0, 0.0, 6.0]]);
        let r = a.reduced_row_echelon_form();
        assert_relative_eq!(
            r,
            m(&[&[1.0, 2.0, 0.0, 3.0], &[0.0, 0.0, 1.0, 1.0]]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_pivot_columns_skip_zero_column() {
        let a = m(&[&[0.0, 0.0], &[0.0, -1.0]]);
        let (r, pivots) = a.row_echelon_with(EPSILON);
        assert_eq!(pivots, vec![1]);
        assert_eq!(r.to_rows(), vec![vec![0.0, -1.0], vec![0.0, 0.0]]);

        let b = m(&[&[0.0, 1.0, 4.0], &[0.0, 4.0, 7.0], &[0.0, 0.0, 0.0]]);
        assert_eq!(b.row_echelon_with(EPSILON).1, vec![1, 2]);
    }

    #[test]
    fn test_empty_matrix() {
        assert_eq!(Matrix::zeros(0, 0).row_echelon_form().shape(), &[0, 0]);
    }
}
