//! Uniform random fill for vectors and matrices.
//!
//! Values are drawn as `u * (max - min) + min` with `u` uniform in `[0, 1)`.

use rand::Rng;
use rand::distr::StandardUniform;

use crate::matrix::Matrix;
use crate::vector::Vector;

fn sample<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let u: f64 = rng.sample(StandardUniform);
    u * (max - min) + min
}

impl Vector {
    /// Overwrite every component with a uniform draw from `[min, max)`.
    pub fn randomize(&mut self, min: f64, max: f64) -> &mut Self {
        self.randomize_with_rng(min, max, &mut rand::rng())
    }

    /// Overwrite every component with a uniform draw from `[0, 1)`.
    pub fn randomize_uniform(&mut self) -> &mut Self {
        self.randomize(0.0, 1.0)
    }

    /// Like [`Vector::randomize`] with a caller-supplied RNG.
    ///
    /// # Example
    ///
    /// ```
    /// use ndlinalg::Vector;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut a = Vector::zeros(4);
    /// a.randomize_with_rng(-1.0, 1.0, &mut StdRng::seed_from_u64(42));
    ///
    /// let mut b = Vector::zeros(4);
    /// b.randomize_with_rng(-1.0, 1.0, &mut StdRng::seed_from_u64(42));
    ///
    /// assert_eq!(a, b);
    /// ```
    pub fn randomize_with_rng<R: Rng>(&mut self, min: f64, max: f64, rng: &mut R) -> &mut Self {
        self.map_indexed(|_, _| sample(rng, min, max))
    }
}

impl Matrix {
    /// A `rows × cols` matrix of uniform draws from `[min, max)`.
    ///
    /// # Example
    ///
    /// ```
    /// use ndlinalg::Matrix;
    ///
    /// let m = Matrix::random(3, 2, 5.0, 6.0);
    /// assert_eq!(m.shape(), &[3, 2]);
    /// assert!(m.iter().all(|x| (5.0..6.0).contains(&x)));
    /// ```
    pub fn random(rows: usize, cols: usize, min: f64, max: f64) -> Self {
        Self::random_with_rng(rows, cols, min, max, &mut rand::rng())
    }

    pub fn random_with_rng<R: Rng>(rows: usize, cols: usize, min: f64, max: f64, rng: &mut R) -> Self {
        let mut m = Matrix::zeros(rows, cols);
        m.randomize_with_rng(min, max, rng);
        m
    }

    /// Overwrite every entry with a uniform draw from `[min, max)`.
    pub fn randomize(&mut self, min: f64, max: f64) -> &mut Self {
        self.randomize_with_rng(min, max, &mut rand::rng())
    }

    /// Overwrite every entry with a uniform draw from `[0, 1)`.
    pub fn randomize_uniform(&mut self) -> &mut Self {
        self.randomize(0.0, 1.0)
    }

    pub fn randomize_with_rng<R: Rng>(&mut self, min: f64, max: f64, rng: &mut R) -> &mut Self {
        self.map_indexed(|_, _, _| sample(rng, min, max))
    }
}
