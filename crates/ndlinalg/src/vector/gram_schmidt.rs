//! Classical Gram-Schmidt orthogonalization.

use super::Vector;
use crate::config::EPSILON;
use crate::error::{LinalgError, Result};

fn check_lengths(xs: &[Vector]) -> Result<()> {
    if let Some(first) = xs.first() {
        for x in &xs[1..] {
            if x.len() != first.len() {
                return Err(LinalgError::shape("orthogonalize", &[first.len()], &[x.len()]));
            }
        }
    }
    Ok(())
}

/// Orthogonalize `xs` without normalizing.
///
/// `v_k = x_k - Σ_{i<k} (x_k·v_i / |v_i|²) v_i`. A linearly dependent input
/// produces a zero vector at its position and NaN in every later one.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the vectors differ in length.
///
/// # Examples
///
/// ```
/// use ndlinalg::Vector;
/// use ndlinalg::vector::orthogonalize;
///
/// let vs = orthogonalize(&[Vector::from(vec![1.0, 1.0]), Vector::from(vec![1.0, 0.0])]).unwrap();
/// assert_eq!(vs[1].to_vec(), vec![0.5, -0.5]);
/// ```
pub fn orthogonalize(xs: &[Vector]) -> Result<Vec<Vector>> {
    check_lengths(xs)?;
    let mut vs: Vec<Vector> = Vec::with_capacity(xs.len());
    for x in xs {
        let mut projection = Vector::zeros(x.len());
        for v in &vs {
            let coefficient = x.dot(v)? / v.squared_magnitude();
            projection.add_assign(&v.mul_scalar(coefficient))?;
        }
        vs.push(x.subtract(&projection)?);
    }
    Ok(vs)
}

/// Orthogonalize `xs` and scale each result to unit length.
///
/// A vector whose residual is negligible next to its input
/// (`|v_k| <= EPSILON * max(1, |x_k|)`) comes out as all NaN, so callers can
/// detect rank deficiency by looking for NaN.
pub fn orthonormalize(xs: &[Vector]) -> Result<Vec<Vector>> {
    let vs = orthogonalize(xs)?;
    Ok(vs
        .into_iter()
        .zip(xs)
        .map(|(mut v, x)| {
            let magnitude = v.magnitude();
            if magnitude > EPSILON * x.magnitude().max(1.0) {
                v.scale(1.0 / magnitude);
            } else {
                v.map_indexed(|_, _| f64::NAN);
            }
            v
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(data: &[f64]) -> Vector {
        Vector::from(data)
    }

    #[test]
    fn test_orthogonalize_pairwise_orthogonal() {
        let xs = [v(&[3.0, 1.0, 2.0]), v(&[1.0, 2.0, 0.0]), v(&[0.0, 1.0, 5.0])];
        let vs = orthogonalize(&xs).unwrap();
        assert_eq!(vs[0], xs[0]);
        for i in 0..3 {
            for j in (i + 1)..3 {
                assert!(vs[i].dot(&vs[j]).unwrap().abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_orthonormalize_unit_length() {
        let xs = [v(&[1.0, 1.0, 0.0]), v(&[1.0, 0.0, 1.0]), v(&[0.0, 1.0, 1.0])];
        for q in orthonormalize(&xs).unwrap() {
            assert_relative_eq!(q.magnitude(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_dependent_input() {
        let xs = [v(&[1.0, 2.0]), v(&[2.0, 4.0]), v(&[0.0, 1.0])];
        let vs = orthogonalize(&xs).unwrap();
        assert!(vs[1].magnitude() < 1e-12);
        assert!(vs[2].iter().all(f64::is_nan));

        let qs = orthonormalize(&xs).unwrap();
        assert_relative_eq!(qs[0].magnitude(), 1.0);
        assert!(qs[1].iter().all(f64::is_nan));
    }

    #[test]
    fn test_zero_input_is_nan() {
        let qs = orthonormalize(&[Vector::zeros(3)]).unwrap();
        assert!(qs[0].iter().all(f64::is_nan));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(orthogonalize(&[v(&[1.0]), v(&[1.0, 2.0])]).is_err());
        assert!(orthogonalize(&[]).unwrap().is_empty());
    }
}
