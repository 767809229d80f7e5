//! Numeric constants and tunables for the iterative algorithms.

/// Magnitudes below this are treated as zero.
pub const EPSILON: f64 = 1e-8;

/// Fractional digits kept when reading eigenvalues off the iterated diagonal.
pub const ROUNDING_DIGITS: i32 = 10;

/// Number of QR rounds used when no iteration count is given.
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Column width used by [`crate::Matrix::print`].
pub const TABLE_CELL_WIDTH: usize = 30;

/// Configuration for the shifted QR eigenvalue iteration.
///
/// # Example
///
/// ```
/// use ndlinalg::EigenConfig;
///
/// let config = EigenConfig::default().with_iterations(200).with_shift(0.5);
/// assert_eq!(config.iterations, 200);
/// assert_eq!(config.shift, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenConfig {
    /// Number of `A <- R Q` rounds.
    pub iterations: usize,
    /// Scalar multiple of the identity subtracted before iterating and added back after.
    pub shift: f64,
    /// Fractional digits the eigenvalue estimates are rounded to.
    pub rounding_digits: i32,
    /// Threshold for negligible entries during eigenvector back-substitution.
    pub epsilon: f64,
}

impl EigenConfig {
    /// Preset for positive semi-definite Gram matrices (`AᵗA`).
    ///
    /// Shifting by -1 keeps every eigenvalue of the iterated matrix at least 1,
    /// so zero eigenvalues never make the column set rank-deficient.
    pub fn gram() -> Self {
        Self::default().with_shift(-1.0)
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_shift(mut self, shift: f64) -> Self {
        self.shift = shift;
        self
    }

    pub fn with_rounding_digits(mut self, digits: i32) -> Self {
        self.rounding_digits = digits;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Round an estimate to the configured resolution.
    pub(crate) fn round(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.rounding_digits);
        (value * factor).round() / factor
    }
}

impl Default for EigenConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            shift: 0.0,
            rounding_digits: ROUNDING_DIGITS,
            epsilon: EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EigenConfig::default();
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.shift, 0.0);
        assert_eq!(config.rounding_digits, ROUNDING_DIGITS);
        assert_eq!(config.epsilon, EPSILON);
    }

    #[test]
    fn test_gram_preset() {
        assert_eq!(EigenConfig::gram().shift, -1.0);
    }

    #[test]
    fn test_round() {
        let config = EigenConfig::default().with_rounding_digits(3);
        assert_eq!(config.round(1.23456), 1.235);
        assert_eq!(config.round(-0.0004), -0.0);
        assert_eq!(config.round(2.9999999), 3.0);
    }
}
